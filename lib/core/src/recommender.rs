use crate::{
    FlatIndex, IngredientVocabulary, InteractionEvent, InteractionStore, Recipe, Result,
};

/// The engine facade: catalog, vocabulary, index and history behind one
/// handle.
///
/// Built once at startup and shared (behind an `Arc`) with every request
/// handler. Everything except the interaction store is immutable after
/// construction, so concurrent searches need no locking.
pub struct Recommender {
    recipes: Vec<Recipe>,
    vocabulary: IngredientVocabulary,
    index: FlatIndex,
    history: InteractionStore,
}

impl Recommender {
    /// Default number of recommendations per search.
    pub const DEFAULT_LIMIT: usize = 5;

    /// Build the engine from a validated catalog.
    ///
    /// All catalog defects (empty catalog, mismatched ingredient/measure
    /// lengths) surface here; no partial engine is ever constructed.
    pub fn new(recipes: Vec<Recipe>) -> Result<Self> {
        let vocabulary = IngredientVocabulary::build(&recipes)?;
        let vectors = recipes
            .iter()
            .map(|recipe| vocabulary.encode(&recipe.ingredients))
            .collect();
        let index = FlatIndex::build(vocabulary.len(), vectors)?;

        Ok(Self {
            recipes,
            vocabulary,
            index,
            history: InteractionStore::new(),
        })
    }

    /// Recommend the `k` recipes whose ingredient sets are nearest to the
    /// given selection.
    ///
    /// Unknown ingredient names contribute nothing to the query vector and
    /// never fail. The search is recorded in the interaction history,
    /// including its effect on the popularity counter.
    pub fn search_by_ingredients<S: AsRef<str>>(
        &self,
        ingredients: &[S],
        k: usize,
    ) -> Result<Vec<Recipe>> {
        let query = self.vocabulary.encode(ingredients);
        let hits = self.index.search(&query, k)?;
        let results = hits
            .into_iter()
            .map(|(position, _)| self.recipes[position].clone())
            .collect();

        self.history.record_ingredient_search(ingredients);
        Ok(results)
    }

    /// Log a free-text similarity query.
    ///
    /// The similarity explanation itself is produced by an external
    /// collaborator; the engine only records that the lookup happened.
    pub fn record_similarity_query(&self, query: &str) {
        self.history.record_similarity_search(query);
    }

    pub fn top_ingredients(&self, limit: usize) -> Vec<(String, u64)> {
        self.history.top_ingredients(limit)
    }

    pub fn recent_events(&self, limit: usize) -> Vec<InteractionEvent> {
        self.history.recent_events(limit)
    }

    /// All known ingredient names, sorted for presentation.
    #[must_use]
    pub fn ingredients(&self) -> Vec<String> {
        self.vocabulary.sorted_names()
    }

    #[inline]
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    #[inline]
    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn recipe(id: u64, name: &str, ingredients: &[&str]) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            category: "Ordinary Drink".to_string(),
            alcoholic: "Alcoholic".to_string(),
            glass_type: "Cocktail glass".to_string(),
            instructions: String::new(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            measures: ingredients.iter().map(|_| "1 oz".to_string()).collect(),
            thumbnail: String::new(),
        }
    }

    fn engine() -> Recommender {
        Recommender::new(vec![
            recipe(11, "Margarita", &["Tequila", "Lime", "Salt"]),
            recipe(12, "Daiquiri", &["Rum", "Lime", "Sugar"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_catalog_is_fatal() {
        assert!(matches!(
            Recommender::new(Vec::new()),
            Err(Error::EmptyCatalog)
        ));
    }

    #[test]
    fn test_exact_match_ranks_first() {
        let engine = engine();
        let results = engine
            .search_by_ingredients(&["Rum", "Lime", "Sugar"], 2)
            .unwrap();
        assert_eq!(results[0].name, "Daiquiri");
    }

    #[test]
    fn test_shared_ingredient_ties_break_by_catalog_order() {
        let engine = engine();
        let results = engine.search_by_ingredients(&["Lime"], 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "Margarita");
        assert_eq!(results[1].name, "Daiquiri");
    }

    #[test]
    fn test_search_records_history() {
        let engine = engine();
        engine.search_by_ingredients(&["Lime"], 2).unwrap();

        assert_eq!(engine.top_ingredients(1), vec![("Lime".to_string(), 1)]);
        let events = engine.recent_events(1);
        assert_eq!(
            events[0].ingredients.as_deref(),
            Some(&["Lime".to_string()][..])
        );
    }

    #[test]
    fn test_unknown_ingredients_do_not_fail() {
        let engine = engine();
        let results = engine
            .search_by_ingredients(&["Lime", "Motor oil"], 1)
            .unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_k_clamped() {
        let engine = engine();
        let results = engine.search_by_ingredients(&["Lime"], 100).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_similarity_query_logged_without_counts() {
        let engine = engine();
        engine.record_similarity_query("Margarita");

        assert!(engine.top_ingredients(10).is_empty());
        assert_eq!(engine.recent_events(1).len(), 1);
    }

    #[test]
    fn test_ingredients_sorted() {
        let engine = engine();
        let names = engine.ingredients();
        assert_eq!(names, {
            let mut sorted = names.clone();
            sorted.sort();
            sorted
        });
        assert_eq!(names.len(), 5);
    }
}
