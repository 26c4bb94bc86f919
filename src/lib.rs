//! # mixtail
//!
//! An in-memory cocktail recommendation engine.
//!
//! mixtail turns a recipe catalog into a searchable ingredient-vector space
//! and answers "which cocktails best match these ingredients" with exact,
//! reproducible nearest-neighbor results. Every search is recorded in an
//! in-process history that tracks ingredient popularity under concurrent
//! callers.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install mixtail
//! mixtail --catalog ./cocktails.csv --http-port 8000
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use mixtail::prelude::*;
//!
//! // Load the catalog and build the engine once at startup
//! let catalog = load_catalog("./cocktails.csv").unwrap();
//! let engine = Recommender::new(catalog).unwrap();
//!
//! // Search by ingredients
//! let results = engine
//!     .search_by_ingredients(&["Vodka", "Orange juice"], 5)
//!     .unwrap();
//! for cocktail in &results {
//!     println!("- {}", cocktail.name);
//! }
//!
//! // Popularity follows the searches
//! let favorites = engine.top_ingredients(5);
//! ```
//!
//! ## Crate Structure
//!
//! mixtail is composed of several crates:
//!
//! - [`mixtail-core`](https://docs.rs/mixtail-core) - The engine (vocabulary, encoder, flat index, history, facade)
//! - [`mixtail-catalog`](https://docs.rs/mixtail-catalog) - CSV catalog ingestion
//! - [`mixtail-api`](https://docs.rs/mixtail-api) - REST endpoints and the similarity-explainer client
//!
//! ## Features
//!
//! - **Exact search**: flat squared-Euclidean k-NN over multi-hot vectors, deterministic tie-breaks
//! - **Query history**: append-only event log with a concurrent popularity counter
//! - **Similarity explainer**: optional natural-language lookup via a chat-completions service
//! - **REST API**: the endpoints the original web UI expects

// Re-export core types
pub use mixtail_core::{
    Error, FlatIndex, IngredientVector, IngredientVocabulary, InteractionEvent, InteractionStore,
    QueryKind, Recipe, Recommender, Result,
};

// Re-export catalog ingestion
pub use mixtail_catalog::load_catalog;

// Re-export API
pub use mixtail_api::{ExplainerConfig, RestApi, SimilarityExplainer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        load_catalog, Error, ExplainerConfig, FlatIndex, IngredientVector, IngredientVocabulary,
        InteractionEvent, InteractionStore, QueryKind, Recipe, Recommender, RestApi, Result,
        SimilarityExplainer,
    };
}
