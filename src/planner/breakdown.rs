use crate::models::{DailyMenu, Ingredient, Recipe};
use crate::state::Inventory;

/// How a single recipe requirement compares against the pantry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StockStatus {
    /// Nothing of this identity is stocked.
    NotInStock { needed: f64 },
    /// Stocked, but less than the recipe asks for.
    Short { in_stock: f64, missing: f64 },
    /// Stock covers the requirement.
    Enough { in_stock: f64 },
}

impl StockStatus {
    /// Amount still missing for this requirement, if any.
    pub fn shortfall(&self) -> Option<f64> {
        match *self {
            StockStatus::NotInStock { needed } => Some(needed),
            StockStatus::Short { missing, .. } => Some(missing),
            StockStatus::Enough { .. } => None,
        }
    }
}

/// A recipe requirement paired with its stock status.
#[derive(Debug, Clone)]
pub struct IngredientComparison<'a> {
    pub ingredient: &'a Ingredient,
    pub status: StockStatus,
}

/// Missing ingredients for one day's recipe.
#[derive(Debug, Clone)]
pub struct RecipeShortfall<'a> {
    pub daily: &'a DailyMenu,
    pub missing: Vec<Ingredient>,
}

/// Compare one requirement against stock, ignoring every other recipe.
pub fn compare_ingredient(ingredient: &Ingredient, inventory: &Inventory) -> StockStatus {
    match inventory.quantity_of(ingredient.key()) {
        None => StockStatus::NotInStock {
            needed: ingredient.quantity(),
        },
        Some(in_stock) => {
            let missing = ingredient.quantity() - in_stock;
            if missing > 0.0 {
                StockStatus::Short { in_stock, missing }
            } else {
                StockStatus::Enough { in_stock }
            }
        }
    }
}

/// Compare every requirement of a recipe, in authored order.
pub fn compare_recipe<'a>(
    recipe: &'a Recipe,
    inventory: &Inventory,
) -> Vec<IngredientComparison<'a>> {
    recipe
        .ingredients
        .iter()
        .map(|ingredient| IngredientComparison {
            ingredient,
            status: compare_ingredient(ingredient, inventory),
        })
        .collect()
}

/// Missing amounts for one recipe, keeping the recipe's own casing.
pub fn recipe_shortfall(recipe: &Recipe, inventory: &Inventory) -> Vec<Ingredient> {
    compare_recipe(recipe, inventory)
        .into_iter()
        .filter_map(|cmp| {
            cmp.status.shortfall().map(|missing| {
                Ingredient::new(cmp.ingredient.name(), missing, cmp.ingredient.unit())
            })
        })
        .collect()
}

/// Per-day shortfalls, each recipe checked against the full pantry.
///
/// Stock is not consumed between days, so two recipes may both count the
/// same tomato as available. Days with nothing missing are omitted.
pub fn shortfall_breakdown<'a>(
    menu: &'a [DailyMenu],
    inventory: &Inventory,
) -> Vec<RecipeShortfall<'a>> {
    menu.iter()
        .filter_map(|daily| {
            let missing = recipe_shortfall(&daily.recipe, inventory);
            if missing.is_empty() {
                None
            } else {
                Some(RecipeShortfall { daily, missing })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pantry() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add(Ingredient::new("tomate", 1.0, "pieza"));
        inventory.add(Ingredient::new("cebolla", 2.0, "pieza"));
        inventory
    }

    #[test]
    fn test_compare_ingredient_branches() {
        let inventory = pantry();

        assert_eq!(
            compare_ingredient(&Ingredient::new("pepino", 1.0, "pieza"), &inventory),
            StockStatus::NotInStock { needed: 1.0 }
        );
        assert_eq!(
            compare_ingredient(&Ingredient::new("Tomate", 3.0, "pieza"), &inventory),
            StockStatus::Short {
                in_stock: 1.0,
                missing: 2.0
            }
        );
        assert_eq!(
            compare_ingredient(&Ingredient::new("tomate", 1.0, "pieza"), &inventory),
            StockStatus::Enough { in_stock: 1.0 }
        );
    }

    #[test]
    fn test_unit_mismatch_is_not_in_stock() {
        let inventory = pantry();
        let status = compare_ingredient(&Ingredient::new("cebolla", 100.0, "g"), &inventory);
        assert_eq!(status, StockStatus::NotInStock { needed: 100.0 });
    }

    #[test]
    fn test_recipe_shortfall_keeps_casing() {
        let recipe = Recipe::new(
            "sopa",
            vec![
                Ingredient::new("Tomate", 2.0, "Pieza"),
                Ingredient::new("cebolla", 1.0, "pieza"),
            ],
        );
        let missing = recipe_shortfall(&recipe, &pantry());
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].name(), "Tomate");
        assert_eq!(missing[0].unit(), "Pieza");
        assert_eq!(missing[0].quantity(), 1.0);
    }

    #[test]
    fn test_duplicate_requirements_each_reported() {
        let menu = vec![DailyMenu::new(
            "lunes",
            Recipe::new(
                "doble tomate",
                vec![
                    Ingredient::new("tomate", 3.0, "pieza"),
                    Ingredient::new("Tomate", 2.0, "pieza"),
                ],
            ),
        )];

        let breakdown = shortfall_breakdown(&menu, &pantry());
        assert_eq!(breakdown.len(), 1);

        // Each listing is compared with the full stock of 1 on its own
        let missing: Vec<(&str, f64)> = breakdown[0]
            .missing
            .iter()
            .map(|i| (i.name(), i.quantity()))
            .collect();
        assert_eq!(missing, vec![("tomate", 2.0), ("Tomate", 1.0)]);
    }

    #[test]
    fn test_breakdown_does_not_consume_stock() {
        let menu = vec![
            DailyMenu::new(
                "lunes",
                Recipe::new("a", vec![Ingredient::new("cebolla", 2.0, "pieza")]),
            ),
            DailyMenu::new(
                "martes",
                Recipe::new("b", vec![Ingredient::new("cebolla", 2.0, "pieza")]),
            ),
        ];
        // Each day alone is covered by 2 onions
        assert!(shortfall_breakdown(&menu, &pantry()).is_empty());
    }
}
