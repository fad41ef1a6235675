pub mod breakdown;
pub mod shopping;

pub use breakdown::{
    compare_ingredient, compare_recipe, recipe_shortfall, shortfall_breakdown,
    IngredientComparison, RecipeShortfall, StockStatus,
};
pub use shopping::{accumulate_needs, calculate_shopping_list, net_against_inventory};
