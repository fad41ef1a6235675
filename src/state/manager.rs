use log::{debug, info};

use crate::error::{PlannerError, Result};
use crate::models::{DailyMenu, Ingredient};
use crate::planner::{self, IngredientComparison, RecipeShortfall};
use crate::state::Inventory;

/// Owns the weekly menu and the pantry inventory.
///
/// All mutation goes through this type, which keeps the one-entry-per-identity
/// rule on the inventory.
#[derive(Debug, Default)]
pub struct ShoppingPlanner {
    /// Day assignments in insertion order; day labels may repeat.
    menu: Vec<DailyMenu>,
    inventory: Inventory,
}

impl ShoppingPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a day's recipe to the weekly menu.
    ///
    /// Fails without changing the menu if the day label is blank or any
    /// requirement has an invalid quantity.
    pub fn add_daily_menu(&mut self, daily: DailyMenu) -> Result<()> {
        if daily.day.trim().is_empty() {
            return Err(PlannerError::InvalidInput(
                "Day label must not be empty".to_string(),
            ));
        }
        for ingredient in &daily.recipe.ingredients {
            ingredient.validate()?;
        }

        info!(
            "Added {} to menu ({} ingredients)",
            daily,
            daily.recipe.ingredients.len()
        );
        self.menu.push(daily);
        Ok(())
    }

    /// Stock an item, summing into an existing entry of the same identity.
    pub fn add_inventory_item(&mut self, item: Ingredient) -> Result<()> {
        item.validate()?;

        let key = item.key().clone();
        let merged = self.inventory.add(item);
        if merged {
            debug!("Merged into existing stock: {}", key);
        } else {
            debug!("New stock entry: {}", key);
        }
        Ok(())
    }

    pub fn weekly_menu(&self) -> &[DailyMenu] {
        &self.menu
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Get a day's assignment by 0-based position.
    pub fn daily_menu(&self, index: usize) -> Result<&DailyMenu> {
        self.menu
            .get(index)
            .ok_or(PlannerError::DayNotFound(index.saturating_add(1)))
    }

    /// Consolidated list of what to buy for the whole week.
    pub fn shopping_list(&self) -> Vec<Ingredient> {
        planner::calculate_shopping_list(&self.menu, &self.inventory)
    }

    /// Missing ingredients per day, each recipe checked on its own.
    pub fn shortfall_breakdown(&self) -> Vec<RecipeShortfall<'_>> {
        planner::shortfall_breakdown(&self.menu, &self.inventory)
    }

    /// Requirement-by-requirement stock comparison for one day.
    pub fn recipe_detail(
        &self,
        index: usize,
    ) -> Result<(&DailyMenu, Vec<IngredientComparison<'_>>)> {
        let daily = self.daily_menu(index)?;
        let comparison = planner::compare_recipe(&daily.recipe, &self.inventory);
        Ok((daily, comparison))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Recipe;
    use crate::planner::StockStatus;

    fn pasta_day() -> DailyMenu {
        DailyMenu::new(
            "martes",
            Recipe::new(
                "pasta",
                vec![
                    Ingredient::new("pasta", 200.0, "g"),
                    Ingredient::new("tomate", 1.0, "pieza"),
                ],
            ),
        )
    }

    #[test]
    fn test_add_daily_menu_keeps_order_and_duplicates() {
        let mut planner = ShoppingPlanner::new();
        planner.add_daily_menu(pasta_day()).unwrap();
        planner
            .add_daily_menu(DailyMenu::new("lunes", Recipe::new("sopa", vec![])))
            .unwrap();
        planner.add_daily_menu(pasta_day()).unwrap();

        let days: Vec<&str> = planner.weekly_menu().iter().map(|d| d.day.as_str()).collect();
        assert_eq!(days, vec!["martes", "lunes", "martes"]);
    }

    #[test]
    fn test_add_daily_menu_rejects_blank_day() {
        let mut planner = ShoppingPlanner::new();
        let result = planner.add_daily_menu(DailyMenu::new(" ", Recipe::new("sopa", vec![])));
        assert!(matches!(result, Err(PlannerError::InvalidInput(_))));
        assert!(planner.weekly_menu().is_empty());
    }

    #[test]
    fn test_add_inventory_rejects_negative() {
        let mut planner = ShoppingPlanner::new();
        let result = planner.add_inventory_item(Ingredient::new("arroz", -2.0, "g"));
        assert!(matches!(result, Err(PlannerError::InvalidQuantity { .. })));
        assert!(planner.inventory().is_empty());
    }

    #[test]
    fn test_recipe_detail() {
        let mut planner = ShoppingPlanner::new();
        planner.add_daily_menu(pasta_day()).unwrap();
        planner
            .add_inventory_item(Ingredient::new("tomate", 1.0, "pieza"))
            .unwrap();

        let (daily, comparison) = planner.recipe_detail(0).unwrap();
        assert_eq!(daily.recipe.name, "pasta");
        assert_eq!(
            comparison[0].status,
            StockStatus::NotInStock { needed: 200.0 }
        );
        assert_eq!(comparison[1].status, StockStatus::Enough { in_stock: 1.0 });
    }

    #[test]
    fn test_recipe_detail_out_of_range() {
        let planner = ShoppingPlanner::new();
        assert!(matches!(
            planner.recipe_detail(2),
            Err(PlannerError::DayNotFound(3))
        ));
    }

    #[test]
    fn test_recipe_detail_max_index_is_not_found() {
        let mut planner = ShoppingPlanner::new();
        planner.add_daily_menu(pasta_day()).unwrap();
        assert!(matches!(
            planner.recipe_detail(usize::MAX),
            Err(PlannerError::DayNotFound(usize::MAX))
        ));
    }
}
