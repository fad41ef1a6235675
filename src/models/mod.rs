mod ingredient;
mod recipe;

pub use ingredient::{format_quantity, Ingredient, IngredientKey, IngredientRecord};
pub use recipe::{DailyMenu, Recipe};
