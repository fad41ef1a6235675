use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::Result;
use crate::models::{DailyMenu, Ingredient, Recipe};
use crate::state::ShoppingPlanner;

/// Starting data for a planner session.
///
/// Read once at startup; nothing is ever written back.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub inventory: Vec<Ingredient>,

    #[serde(default)]
    pub menu: Vec<DailyMenu>,
}

impl Seed {
    /// Feed the seed through the planner's own insert operations.
    ///
    /// Inventory duplicates merge exactly as if typed in one by one.
    pub fn apply(self, planner: &mut ShoppingPlanner) -> Result<()> {
        for item in self.inventory {
            planner.add_inventory_item(item)?;
        }
        for daily in self.menu {
            planner.add_daily_menu(daily)?;
        }
        Ok(())
    }
}

/// Load a seed from a JSON file.
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<Seed> {
    let content = fs::read_to_string(path.as_ref())?;
    let seed: Seed = serde_json::from_str(&content)?;
    info!(
        "Loaded seed from {}: {} inventory items, {} days",
        path.as_ref().display(),
        seed.inventory.len(),
        seed.menu.len()
    );
    Ok(seed)
}

/// The built-in example week.
pub fn sample_seed() -> Seed {
    let inventory = vec![
        Ingredient::new("tomate", 1.0, "pieza"),
        Ingredient::new("pasta", 100.0, "gramos"),
        Ingredient::new("cebolla", 2.0, "pieza"),
        Ingredient::new("lechuga", 0.5, "pieza"),
    ];

    let menu = vec![
        DailyMenu::new(
            "lunes",
            Recipe::new(
                "ensalada",
                vec![
                    Ingredient::new("lechuga", 1.0, "pieza"),
                    Ingredient::new("tomate", 2.0, "pieza"),
                    Ingredient::new("pepino", 1.0, "pieza"),
                ],
            ),
        ),
        DailyMenu::new(
            "martes",
            Recipe::new(
                "pasta",
                vec![
                    Ingredient::new("pasta", 200.0, "gramos"),
                    Ingredient::new("tomate", 1.0, "pieza"),
                    Ingredient::new("cebolla", 1.0, "pieza"),
                ],
            ),
        ),
        DailyMenu::new(
            "miércoles",
            Recipe::new(
                "pollo con arroz",
                vec![
                    Ingredient::new("pollo", 500.0, "gramos"),
                    Ingredient::new("arroz", 300.0, "gramos"),
                    Ingredient::new("zanahoria", 2.0, "pieza"),
                    Ingredient::new("cebolla", 1.0, "pieza"),
                ],
            ),
        ),
    ];

    Seed { inventory, menu }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_seed_merges_inventory() {
        let json = r#"{
            "inventory": [
                {"name": "Tomate", "quantity": 1, "unit": "pieza"},
                {"name": "tomate", "quantity": 2, "unit": "Pieza"}
            ],
            "menu": [
                {"day": "lunes", "recipe": {"name": "salsa", "ingredients": [
                    {"name": "tomate", "quantity": 4, "unit": "pieza"}
                ]}}
            ]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let mut planner = ShoppingPlanner::new();
        load_seed(file.path()).unwrap().apply(&mut planner).unwrap();

        assert_eq!(planner.inventory().len(), 1);
        assert_eq!(planner.inventory().items()[0].quantity(), 3.0);
        assert_eq!(planner.weekly_menu().len(), 1);

        let list = planner.shopping_list();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].quantity(), 1.0);
    }

    #[test]
    fn test_load_seed_missing_sections_default() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();

        let seed = load_seed(file.path()).unwrap();
        assert!(seed.inventory.is_empty());
        assert!(seed.menu.is_empty());
    }

    #[test]
    fn test_load_seed_rejects_negative_quantity() {
        let json = r#"{"inventory": [{"name": "arroz", "quantity": -1, "unit": "g"}]}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(load_seed(file.path()).is_err());
    }

    #[test]
    fn test_sample_seed_applies() {
        let mut planner = ShoppingPlanner::new();
        sample_seed().apply(&mut planner).unwrap();
        assert_eq!(planner.inventory().len(), 4);
        assert_eq!(planner.weekly_menu().len(), 3);
    }
}
