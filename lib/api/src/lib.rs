//! REST surface and external-collaborator clients for mixtail.
//!
//! The engine itself lives in `mixtail-core`; this crate adapts it to the
//! outside world: the HTTP endpoints the UI talks to, and the
//! chat-completions client behind the similarity search.

pub mod explain;
pub mod rest;

pub use explain::{
    ExplainError, ExplainerConfig, SimilarityExplainer, SimilarityExplanation, DEFAULT_BASE_URL,
    DEFAULT_MODEL,
};
pub use rest::RestApi;
