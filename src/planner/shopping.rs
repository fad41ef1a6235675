use std::collections::HashMap;

use log::debug;

use crate::models::{DailyMenu, Ingredient, IngredientKey};
use crate::state::Inventory;

/// Total need per ingredient identity across every recipe in the menu.
///
/// Requirements listed twice in the same recipe are both counted.
pub fn accumulate_needs(menu: &[DailyMenu]) -> HashMap<IngredientKey, f64> {
    let mut needs: HashMap<IngredientKey, f64> = HashMap::new();
    for daily in menu {
        for ingredient in &daily.recipe.ingredients {
            *needs.entry(ingredient.key().clone()).or_insert(0.0) += ingredient.quantity();
        }
    }
    needs
}

/// Subtract stock from accumulated needs.
///
/// An identity whose remaining need is not strictly positive is dropped.
/// Stock with no matching need is ignored.
pub fn net_against_inventory(needs: &mut HashMap<IngredientKey, f64>, inventory: &Inventory) {
    for stocked in inventory.iter() {
        let Some(&needed) = needs.get(stocked.key()) else {
            continue;
        };

        let remaining = needed - stocked.quantity();
        if remaining > 0.0 {
            needs.insert(stocked.key().clone(), remaining);
        } else {
            debug!("{} covered by stock", stocked.key());
            needs.remove(stocked.key());
        }
    }
}

/// Build the consolidated shopping list for the week.
///
/// Entries carry the lower-cased name and unit and are sorted by name, then
/// unit.
pub fn calculate_shopping_list(menu: &[DailyMenu], inventory: &Inventory) -> Vec<Ingredient> {
    let mut needs = accumulate_needs(menu);
    let total = needs.len();
    net_against_inventory(&mut needs, inventory);

    let mut list: Vec<Ingredient> = needs
        .into_iter()
        .map(|(key, quantity)| Ingredient::from_key(key, quantity))
        .collect();
    list.sort_by(|a, b| a.key().cmp(b.key()));

    debug!(
        "Shopping list: {} of {} needed items still to buy",
        list.len(),
        total
    );
    list
}
