use ahash::AHashMap;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// The two query shapes the engine records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    IngredientSearch,
    SimilarCocktail,
}

/// One recorded search.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionEvent {
    pub timestamp: DateTime<Utc>,
    pub query_type: QueryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
}

#[derive(Debug, Default)]
struct HistoryInner {
    events: Vec<InteractionEvent>,
    counts: AHashMap<String, u64>,
}

/// Append-only log of search events plus running ingredient popularity.
///
/// The only mutable state in the engine. Each recording takes the write
/// lock once, so the event append and its counter increments land as a
/// unit; readers see a consistent snapshot and event order is the real
/// completion order.
#[derive(Debug, Default)]
pub struct InteractionStore {
    inner: RwLock<HistoryInner>,
}

impl InteractionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an ingredient search and bump every listed ingredient's
    /// count. Duplicates in the list increment twice.
    pub fn record_ingredient_search<S: AsRef<str>>(&self, ingredients: &[S]) {
        let ingredients: Vec<String> = ingredients
            .iter()
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut inner = self.inner.write();
        for name in &ingredients {
            *inner.counts.entry(name.clone()).or_insert(0) += 1;
        }
        inner.events.push(InteractionEvent {
            timestamp: Utc::now(),
            query_type: QueryKind::IngredientSearch,
            query: None,
            ingredients: Some(ingredients),
        });
    }

    /// Record a free-text similarity lookup. No counter side effect.
    pub fn record_similarity_search(&self, query: &str) {
        let mut inner = self.inner.write();
        inner.events.push(InteractionEvent {
            timestamp: Utc::now(),
            query_type: QueryKind::SimilarCocktail,
            query: Some(query.to_string()),
            ingredients: None,
        });
    }

    /// Most searched ingredients: descending by count, ties ascending by
    /// name so repeated calls agree.
    #[must_use]
    pub fn top_ingredients(&self, limit: usize) -> Vec<(String, u64)> {
        let inner = self.inner.read();
        let mut counts: Vec<(String, u64)> = inner
            .counts
            .iter()
            .map(|(name, count)| (name.clone(), *count))
            .collect();
        drop(inner);

        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts.truncate(limit);
        counts
    }

    /// Recent events, most recent first.
    #[must_use]
    pub fn recent_events(&self, limit: usize) -> Vec<InteractionEvent> {
        let inner = self.inner.read();
        inner.events.iter().rev().take(limit).cloned().collect()
    }

    #[must_use]
    pub fn event_count(&self) -> usize {
        self.inner.read().events.len()
    }
}
