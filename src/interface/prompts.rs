use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{DailyMenu, Ingredient, Recipe};
use crate::state::Inventory;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.85;

/// Upper bound on ingredients typed in for a single recipe.
pub const MAX_RECIPE_INGREDIENTS: usize = 100;

/// Entries of the interactive main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    ShowMenu,
    ShowInventory,
    ShoppingList,
    AddRecipe,
    AddInventoryItem,
    Quit,
}

impl MainMenuChoice {
    pub const ALL: [MainMenuChoice; 6] = [
        MainMenuChoice::ShowMenu,
        MainMenuChoice::ShowInventory,
        MainMenuChoice::ShoppingList,
        MainMenuChoice::AddRecipe,
        MainMenuChoice::AddInventoryItem,
        MainMenuChoice::Quit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MainMenuChoice::ShowMenu => "Show weekly menu",
            MainMenuChoice::ShowInventory => "Show inventory",
            MainMenuChoice::ShoppingList => "Generate shopping list",
            MainMenuChoice::AddRecipe => "Add a recipe to the menu",
            MainMenuChoice::AddInventoryItem => "Add an item to the inventory",
            MainMenuChoice::Quit => "Quit",
        }
    }
}

/// Prompt for the next main menu action.
pub fn prompt_main_menu() -> Result<MainMenuChoice> {
    let labels: Vec<&str> = MainMenuChoice::ALL.iter().map(|c| c.label()).collect();

    let selection = Select::new()
        .with_prompt("Weekly Shopping Planner")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MainMenuChoice::ALL[selection])
}

/// Prompt for a non-empty line of text.
pub fn prompt_text(prompt: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                Err("Please enter a value")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok(input.trim().to_string())
}

/// Parse a quantity typed by the user.
pub fn parse_quantity(input: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("'{}' is not a number", input.trim())))?;

    if !value.is_finite() || value < 0.0 {
        return Err(PlannerError::InvalidInput(
            "Quantity must be zero or more".to_string(),
        ));
    }
    Ok(value)
}

/// Prompt for a non-negative quantity, re-asking until it parses.
pub fn prompt_quantity(prompt: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            parse_quantity(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;

    parse_quantity(&input)
}

/// Prompt for a single ingredient: name, quantity and unit.
pub fn prompt_ingredient() -> Result<Ingredient> {
    let name = prompt_text("  Ingredient name")?;
    let quantity = prompt_quantity("  Quantity (e.g. 1, 0.5, 200)")?;
    let unit = prompt_text("  Unit (e.g. pieza, gramos, ml)")?;
    Ok(Ingredient::new(name, quantity, unit))
}

/// Accept an ingredient count between 1 and `MAX_RECIPE_INGREDIENTS`.
pub fn check_ingredient_count(count: usize) -> std::result::Result<(), String> {
    if (1..=MAX_RECIPE_INGREDIENTS).contains(&count) {
        Ok(())
    } else {
        Err(format!(
            "Enter a number between 1 and {}",
            MAX_RECIPE_INGREDIENTS
        ))
    }
}

/// Prompt for a day, a recipe name and its ingredients.
pub fn prompt_daily_menu() -> Result<DailyMenu> {
    let day = prompt_text("Day of the week (e.g. lunes)")?;
    let recipe_name = prompt_text("Recipe name")?;

    let count: usize = Input::new()
        .with_prompt("How many ingredients does this recipe have?")
        .validate_with(|n: &usize| check_ingredient_count(*n))
        .interact_text()?;

    let mut ingredients = Vec::new();
    for i in 0..count {
        println!();
        println!("--- Ingredient {} of {} ---", i + 1, count);
        ingredients.push(prompt_ingredient()?);
    }

    Ok(DailyMenu::new(day, Recipe::new(recipe_name, ingredients)))
}

/// Closest stocked name to `input`, unless `input` already names stock.
pub fn suggest_stocked_name<'a>(input: &str, inventory: &'a Inventory) -> Option<&'a str> {
    let needle = input.to_lowercase();

    if inventory.iter().any(|i| i.key().name == needle) {
        return None;
    }

    inventory
        .iter()
        .map(|i| (i.name(), jaro_winkler(&i.key().name, &needle)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name)
}

/// Prompt for an inventory item, offering to correct near-miss names.
pub fn prompt_inventory_item(inventory: &Inventory) -> Result<Ingredient> {
    let mut name = prompt_text("Ingredient name")?;

    if let Some(suggestion) = suggest_stocked_name(&name, inventory) {
        if prompt_yes_no(&format!("Did you mean '{}'?", suggestion), true)? {
            name = suggestion.to_string();
        }
    }

    let quantity = prompt_quantity("Quantity")?;
    let unit = prompt_text("Unit (e.g. pieza, gramos, ml)")?;
    Ok(Ingredient::new(name, quantity, unit))
}

/// Prompt for a 1-based day number; 0 means "go back".
pub fn prompt_day_number(days: usize) -> Result<Option<usize>> {
    let number: usize = Input::new()
        .with_prompt(format!("Day number for details (1-{}, 0 to go back)", days))
        .default(0)
        .validate_with(|n: &usize| -> std::result::Result<(), &str> {
            if *n <= days {
                Ok(())
            } else {
                Err("No such day")
            }
        })
        .interact_text()?;

    Ok(number.checked_sub(1))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("200").unwrap(), 200.0);
        assert_eq!(parse_quantity(" 0.5 ").unwrap(), 0.5);
        assert_eq!(parse_quantity("1,5").unwrap(), 1.5);
        assert!(parse_quantity("abc").is_err());
        assert!(parse_quantity("-1").is_err());
        assert!(parse_quantity("inf").is_err());
    }

    #[test]
    fn test_check_ingredient_count() {
        assert!(check_ingredient_count(1).is_ok());
        assert!(check_ingredient_count(MAX_RECIPE_INGREDIENTS).is_ok());
        assert!(check_ingredient_count(0).is_err());
        assert!(check_ingredient_count(MAX_RECIPE_INGREDIENTS + 1).is_err());
        assert!(check_ingredient_count(1_000_000_000_000).is_err());
    }

    #[test]
    fn test_suggest_stocked_name() {
        let mut inventory = Inventory::new();
        inventory.add(Ingredient::new("Cebolla", 2.0, "pieza"));
        inventory.add(Ingredient::new("tomate", 1.0, "pieza"));

        assert_eq!(suggest_stocked_name("cebola", &inventory), Some("Cebolla"));
        assert_eq!(suggest_stocked_name("tomates", &inventory), Some("tomate"));
        // Exact (case-insensitive) names need no suggestion
        assert_eq!(suggest_stocked_name("CEBOLLA", &inventory), None);
        assert_eq!(suggest_stocked_name("pollo", &inventory), None);
    }

    #[test]
    fn test_main_menu_labels_unique() {
        let mut labels: Vec<&str> = MainMenuChoice::ALL.iter().map(|c| c.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), MainMenuChoice::ALL.len());
    }
}
