use crate::models::{format_quantity, DailyMenu, Ingredient};
use crate::planner::{IngredientComparison, RecipeShortfall, StockStatus};
use crate::state::Inventory;

/// Display the weekly menu as a numbered list.
pub fn display_weekly_menu(menu: &[DailyMenu]) {
    if menu.is_empty() {
        println!("The weekly menu is empty.");
        return;
    }

    println!();
    println!("=== Weekly Menu ===");
    println!();

    let max_day_len = menu.iter().map(|d| d.day.chars().count()).max().unwrap_or(6);

    for (i, daily) in menu.iter().enumerate() {
        println!(
            "{:>3}. {:<width$}  {}",
            i + 1,
            daily.day,
            daily.recipe.name,
            width = max_day_len
        );
    }
    println!();
}

/// Display current pantry stock.
pub fn display_inventory(inventory: &Inventory) {
    if inventory.is_empty() {
        println!("The inventory is empty.");
        return;
    }

    println!();
    println!("=== Inventory ({} items) ===", inventory.len());
    println!();
    for item in inventory.iter() {
        println!("  - {} ({})", item, item.unit());
    }
    println!();
}

/// Display the consolidated shopping list.
pub fn display_shopping_list(list: &[Ingredient]) {
    if list.is_empty() {
        println!("Nothing to buy! The inventory covers the whole menu.");
        return;
    }

    println!();
    println!("=== Shopping List ===");
    println!();
    for item in list {
        println!("  - {} ({})", item, item.unit());
    }
    println!();
}

/// Display what each day's recipe is missing on its own.
pub fn display_shortfall_breakdown(breakdown: &[RecipeShortfall<'_>]) {
    if breakdown.is_empty() {
        return;
    }

    println!("--- Missing per recipe ---");
    for shortfall in breakdown {
        println!();
        println!(
            "  {} - {}:",
            shortfall.daily.day, shortfall.daily.recipe.name
        );
        for item in &shortfall.missing {
            println!("    - {} ({})", item, item.unit());
        }
    }
    println!();
}

/// Display one day's recipe and how each requirement compares with stock.
pub fn display_recipe_detail(daily: &DailyMenu, comparison: &[IngredientComparison<'_>]) {
    println!();
    println!("=== {} ===", daily.day);
    println!("Recipe: {}", daily.recipe.name);
    println!();

    if comparison.is_empty() {
        println!("(no ingredients)");
        println!();
        return;
    }

    println!("Ingredients:");
    for cmp in comparison {
        println!(
            "  - {}: {} {}",
            cmp.ingredient.name(),
            format_quantity(cmp.ingredient.quantity()),
            cmp.ingredient.unit()
        );
    }

    println!();
    println!("Compared with inventory:");
    for cmp in comparison {
        println!("  {}: {}", cmp.ingredient.name(), describe_status(&cmp.status));
    }
    println!();
}

/// One-line description of a stock comparison.
pub fn describe_status(status: &StockStatus) -> String {
    match *status {
        StockStatus::NotInStock { needed } => {
            format!("not in stock, need {}", format_quantity(needed))
        }
        StockStatus::Short { in_stock, missing } => format!(
            "have {}, missing {}",
            format_quantity(in_stock),
            format_quantity(missing)
        ),
        StockStatus::Enough { in_stock } => {
            format!("enough in stock ({})", format_quantity(in_stock))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_status() {
        assert_eq!(
            describe_status(&StockStatus::NotInStock { needed: 1.0 }),
            "not in stock, need 1"
        );
        assert_eq!(
            describe_status(&StockStatus::Short {
                in_stock: 0.5,
                missing: 0.5
            }),
            "have 0.5, missing 0.5"
        );
        assert_eq!(
            describe_status(&StockStatus::Enough { in_stock: 2.0 }),
            "enough in stock (2)"
        );
    }
}
