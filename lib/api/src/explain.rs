//! Natural-language similarity lookup.
//!
//! The engine never computes similarity explanations itself; this client
//! owns the whole collaboration with the external chat-completions
//! service: prompt construction over the catalog, the HTTP call, and
//! matching mentioned recipe names back to catalog records.

use mixtail_core::Recipe;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Error, Debug)]
pub enum ExplainError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Completion service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Completion response contained no choices")]
    EmptyResponse,
}

/// Connection settings for the chat-completions service.
#[derive(Debug, Clone)]
pub struct ExplainerConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl ExplainerConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// What the explainer hands back to the presentation layer: the service's
/// free-text explanation plus the catalog recipes it mentioned.
#[derive(Debug, Clone)]
pub struct SimilarityExplanation {
    pub explanation: String,
    pub cocktails: Vec<Recipe>,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

pub struct SimilarityExplainer {
    config: ExplainerConfig,
    client: reqwest::Client,
}

impl SimilarityExplainer {
    #[must_use]
    pub fn new(config: ExplainerConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Ask the service for cocktails similar to `cocktail_name` and
    /// resolve the names it mentions back to catalog records, at most `k`.
    pub async fn find_similar(
        &self,
        cocktail_name: &str,
        catalog: &[Recipe],
        k: usize,
    ) -> Result<SimilarityExplanation, ExplainError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a cocktail expert. Provide similar cocktails with brief \
                              explanations."
                        .to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: build_prompt(cocktail_name, catalog),
                },
            ],
            temperature: 0.7,
        };

        let url = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExplainError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatResponse = response.json().await?;
        let explanation = body
            .choices
            .into_iter()
            .next()
            .ok_or(ExplainError::EmptyResponse)?
            .message
            .content;

        let cocktails = scan_for_recipes(&explanation, catalog, k);
        Ok(SimilarityExplanation {
            explanation,
            cocktails,
        })
    }
}

/// One context line per recipe, then the question.
fn build_prompt(cocktail_name: &str, catalog: &[Recipe]) -> String {
    let context = catalog
        .iter()
        .map(|recipe| {
            format!(
                "{}: {} drink with {}",
                recipe.name,
                recipe.category,
                recipe.ingredients.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Given the following cocktail database:\n{context}\n\nFind cocktails similar to \
         \"{cocktail_name}\" based on ingredients and style. \nExplain why they are similar and \
         return only the cocktail names."
    )
}

/// Collect catalog recipes whose names appear in the response text,
/// case-insensitively, in catalog order, at most `k`.
fn scan_for_recipes(text: &str, catalog: &[Recipe], k: usize) -> Vec<Recipe> {
    let text = text.to_lowercase();
    let mut mentioned = Vec::new();
    for recipe in catalog {
        if text.contains(&recipe.name.to_lowercase()) {
            mentioned.push(recipe.clone());
        }
        if mentioned.len() >= k {
            break;
        }
    }
    mentioned
}
