use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

/// Identity of a purchasable item: lower-cased name and unit.
///
/// Two ingredients with equal keys are the same thing in different amounts.
/// Grams and pieces of the same name are distinct keys; no unit conversion
/// is ever attempted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IngredientKey {
    pub name: String,
    pub unit: String,
}

impl IngredientKey {
    pub fn new(name: &str, unit: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            unit: unit.to_lowercase(),
        }
    }
}

impl fmt::Display for IngredientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.unit)
    }
}

/// An ingredient amount, as authored in a recipe or stocked in the pantry.
///
/// The identity key is normalised once at construction so lookups never
/// re-lowercase. Display fields keep the casing the caller typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "IngredientRecord", into = "IngredientRecord")]
pub struct Ingredient {
    name: String,
    quantity: f64,
    unit: String,
    key: IngredientKey,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        let name = name.into();
        let unit = unit.into();
        let key = IngredientKey::new(&name, &unit);
        Self {
            name,
            quantity,
            unit,
            key,
        }
    }

    /// Build an ingredient whose display fields are the key itself.
    pub fn from_key(key: IngredientKey, quantity: f64) -> Self {
        Self {
            name: key.name.clone(),
            quantity,
            unit: key.unit.clone(),
            key,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn key(&self) -> &IngredientKey {
        &self.key
    }

    /// Case-insensitive comparison of both name and unit.
    #[inline]
    pub fn same_identity(&self, other: &Ingredient) -> bool {
        self.key == other.key
    }

    /// Add `delta` to this ingredient's quantity in place.
    pub fn add_quantity(&mut self, delta: f64) {
        self.quantity += delta;
    }

    /// Reject empty names and quantities that are negative or not finite.
    ///
    /// Zero is accepted: a recipe may list a garnish "to taste".
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PlannerError::InvalidInput(
                "Ingredient name must not be empty".to_string(),
            ));
        }
        if !self.quantity.is_finite() || self.quantity < 0.0 {
            return Err(PlannerError::InvalidQuantity {
                name: self.name.clone(),
                quantity: self.quantity,
            });
        }
        Ok(())
    }
}

/// Render a quantity as an integer when whole, otherwise with one decimal.
///
/// The decimal is rounded half away from zero, so 0.25 renders as "0.3".
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        format!("{:.0}", quantity)
    } else {
        format!("{:.1}", (quantity * 10.0).round() / 10.0)
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_quantity(self.quantity), self.name)
    }
}

/// Wire shape of an ingredient in seed files and exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl TryFrom<IngredientRecord> for Ingredient {
    type Error = PlannerError;

    fn try_from(record: IngredientRecord) -> Result<Self> {
        let ingredient = Ingredient::new(record.name, record.quantity, record.unit);
        ingredient.validate()?;
        Ok(ingredient)
    }
}

impl From<Ingredient> for IngredientRecord {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            name: ingredient.name,
            quantity: ingredient.quantity,
            unit: ingredient.unit,
        }
    }
}
