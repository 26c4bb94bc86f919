use crate::{Error, IngredientVector, Recipe, Result};
use ahash::AHashMap;

/// A stable bijection between ingredient names and vector slots.
///
/// Built once from the full catalog and never mutated afterwards. Names are
/// trimmed and matched case-sensitively. Slots are assigned in first-seen
/// catalog order, so the same catalog always yields the same layout.
#[derive(Debug, Clone)]
pub struct IngredientVocabulary {
    slots: AHashMap<String, usize>,
    names: Vec<String>,
}

impl IngredientVocabulary {
    /// Build the vocabulary from the catalog.
    ///
    /// Fails if the catalog is empty, if any recipe violates the
    /// ingredients/measures invariant, or if no recipe lists any ingredient
    /// (a zero-dimensional vector space is unusable).
    pub fn build(catalog: &[Recipe]) -> Result<Self> {
        if catalog.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut slots = AHashMap::new();
        let mut names = Vec::new();

        for recipe in catalog {
            recipe.validate()?;
            for name in &recipe.ingredients {
                let name = name.trim();
                if !slots.contains_key(name) {
                    slots.insert(name.to_string(), names.len());
                    names.push(name.to_string());
                }
            }
        }

        if names.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        Ok(Self { slots, names })
    }

    /// Number of distinct ingredients, i.e. the vector dimension.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Slot assigned to an ingredient name, if known.
    #[inline]
    pub fn slot(&self, name: &str) -> Option<usize> {
        self.slots.get(name.trim()).copied()
    }

    /// All ingredient names in lexicographic order.
    #[must_use]
    pub fn sorted_names(&self) -> Vec<String> {
        let mut names = self.names.clone();
        names.sort();
        names
    }

    /// Encode an ingredient set as a multi-hot vector.
    ///
    /// Names absent from the vocabulary are silently ignored; that is the
    /// documented policy for free-text input, not a failure. An empty set
    /// encodes to the all-zero vector.
    pub fn encode<S: AsRef<str>>(&self, ingredients: &[S]) -> IngredientVector {
        let mut vector = IngredientVector::zeros(self.names.len());
        for name in ingredients {
            if let Some(slot) = self.slot(name.as_ref()) {
                vector.set(slot);
            }
        }
        vector
    }
}
