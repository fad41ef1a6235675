use std::collections::HashMap;

use crate::models::{Ingredient, IngredientKey};

/// Pantry stock: at most one entry per ingredient identity.
///
/// Entries keep the order in which each identity was first stocked.
#[derive(Debug, Default, Clone)]
pub struct Inventory {
    items: Vec<Ingredient>,
    index: HashMap<IngredientKey, usize>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock an item, merging into an existing entry of the same identity.
    ///
    /// Returns true if the identity was already stocked.
    pub fn add(&mut self, item: Ingredient) -> bool {
        match self.index.get(item.key()) {
            Some(&pos) => {
                self.items[pos].add_quantity(item.quantity());
                true
            }
            None => {
                self.index.insert(item.key().clone(), self.items.len());
                self.items.push(item);
                false
            }
        }
    }

    /// Look up the stocked entry for an identity.
    pub fn get(&self, key: &IngredientKey) -> Option<&Ingredient> {
        self.index.get(key).map(|&pos| &self.items[pos])
    }

    /// Stocked quantity for an identity, if any.
    pub fn quantity_of(&self, key: &IngredientKey) -> Option<f64> {
        self.get(key).map(Ingredient::quantity)
    }

    pub fn items(&self) -> &[Ingredient] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
