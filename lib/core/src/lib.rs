//! # mixtail Core
//!
//! Core library for the mixtail recommendation engine.
//!
//! This crate provides the deterministic matching pipeline and its history:
//!
//! - [`Recipe`] - Immutable catalog record
//! - [`IngredientVocabulary`] - Stable name-to-slot bijection with the multi-hot encoder
//! - [`IngredientVector`] - 0/1 vector over the vocabulary
//! - [`FlatIndex`] - Exact k-NN search under squared Euclidean distance
//! - [`InteractionStore`] - Concurrent query log and popularity counter
//! - [`Recommender`] - Facade composing all of the above
//!
//! ## Example
//!
//! ```rust
//! use mixtail_core::{Recipe, Recommender};
//!
//! let catalog = vec![Recipe {
//!     id: 1,
//!     name: "Margarita".to_string(),
//!     category: "Ordinary Drink".to_string(),
//!     alcoholic: "Alcoholic".to_string(),
//!     glass_type: "Cocktail glass".to_string(),
//!     instructions: "Shake with ice, strain.".to_string(),
//!     ingredients: vec!["Tequila".to_string(), "Lime juice".to_string()],
//!     measures: vec!["2 oz".to_string(), "1 oz".to_string()],
//!     thumbnail: String::new(),
//! }];
//!
//! let engine = Recommender::new(catalog).unwrap();
//! let results = engine.search_by_ingredients(&["Lime juice"], 5).unwrap();
//! assert_eq!(results[0].name, "Margarita");
//! ```

pub mod error;
pub mod history;
pub mod index;
pub mod recipe;
pub mod recommender;
pub mod vector;
pub mod vocabulary;

pub use error::{Error, Result};
pub use history::{InteractionEvent, InteractionStore, QueryKind};
pub use index::FlatIndex;
pub use recipe::Recipe;
pub use recommender::Recommender;
pub use vector::IngredientVector;
pub use vocabulary::IngredientVocabulary;
