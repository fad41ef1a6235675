use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Ingredient;

/// A named recipe with its ingredient requirements as authored.
///
/// The same ingredient may be listed more than once; requirements are not
/// merged within a recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, ingredients: Vec<Ingredient>) -> Self {
        Self {
            name: name.into(),
            ingredients,
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One day's recipe assignment in the weekly menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMenu {
    pub day: String,
    pub recipe: Recipe,
}

impl DailyMenu {
    pub fn new(day: impl Into<String>, recipe: Recipe) -> Self {
        Self {
            day: day.into(),
            recipe,
        }
    }
}

impl fmt::Display for DailyMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.day, self.recipe.name)
    }
}
