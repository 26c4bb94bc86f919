use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Recipes are validated once at ingestion and held read-only for the
/// process lifetime. `ingredients` and `measures` correspond positionally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub alcoholic: String,
    pub glass_type: String,
    pub instructions: String,
    pub ingredients: Vec<String>,
    pub measures: Vec<String>,
    pub thumbnail: String,
}

impl Recipe {
    /// Check the ingredients/measures length invariant.
    pub fn validate(&self) -> Result<()> {
        if self.ingredients.len() != self.measures.len() {
            return Err(Error::MeasureMismatch {
                id: self.id,
                name: self.name.clone(),
                ingredients: self.ingredients.len(),
                measures: self.measures.len(),
            });
        }
        Ok(())
    }
}
