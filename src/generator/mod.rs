//! Description generator.
//!
//! [`DescriptionService`] is the boundary the rest of the application talks
//! to. It always yields a string: a missing credential, a transport error or
//! an empty model answer each turn into a fixed placeholder, so callers can
//! clear their loading state unconditionally. One attempt per call, no retry.

pub mod gemini;
pub mod types;

pub use gemini::GeminiClient;
pub use types::{build_prompt, DescriptionGenerator, GeneratorError};

use crate::config::GeneratorConfig;
use crate::constants::{GENERATOR_EMPTY, GENERATOR_FAILED, GENERATOR_MISSING_KEY};
use crate::entities::Category;
use std::sync::Arc;

#[derive(Clone)]
pub struct DescriptionService {
    backend: Option<Arc<dyn DescriptionGenerator>>,
}

impl DescriptionService {
    /// Service backed by `generator`.
    pub fn new(generator: Arc<dyn DescriptionGenerator>) -> Self {
        Self {
            backend: Some(generator),
        }
    }

    /// Service with no credential; every call returns the missing-key placeholder.
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    /// Read the API key once from the environment variable named in `config`.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env).unwrap_or_default();
        Self::with_api_key(api_key, config)
    }

    pub fn with_api_key(api_key: String, config: &GeneratorConfig) -> Self {
        if api_key.trim().is_empty() {
            log::warn!(
                "Generator: {} is not set, descriptions will use a placeholder",
                config.api_key_env
            );
            return Self::unavailable();
        }

        match GeminiClient::new(api_key, config) {
            Ok(client) => {
                log::info!("Generator: using model {}", client.model());
                Self::new(Arc::new(client))
            }
            Err(e) => {
                log::error!("Generator: {}", e);
                Self::unavailable()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Generate a description for a project. Never fails.
    pub async fn describe(&self, title: &str, category: Category) -> String {
        let Some(backend) = &self.backend else {
            log::debug!("Generator: no API key, returning placeholder for '{}'", title);
            return GENERATOR_MISSING_KEY.to_string();
        };

        match backend.generate(title, category).await {
            Ok(text) if text.trim().is_empty() => {
                log::warn!("Generator: empty response for '{}'", title);
                GENERATOR_EMPTY.to_string()
            }
            Ok(text) => text,
            Err(e) => {
                log::error!("Generator: request for '{}' failed: {}", title, e);
                GENERATOR_FAILED.to_string()
            }
        }
    }
}
