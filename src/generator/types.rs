use crate::entities::Category;

/// Errors produced by a description generator backend.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The HTTP request could not be sent or its body not read.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The service answered with a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Backend that turns a project title and category into a description.
#[async_trait::async_trait]
pub trait DescriptionGenerator: Send + Sync {
    /// Generate a description. An empty string means the model produced no text.
    async fn generate(&self, title: &str, category: Category) -> Result<String, GeneratorError>;
}

/// Prompt sent to the text model for one project.
pub fn build_prompt(title: &str, category: Category) -> String {
    format!(
        "Write a sophisticated, professional, and artistic 2-sentence description for an architectural or design project.\n\
         \n\
         Project Title: {}\n\
         Category: {}\n\
         \n\
         The tone should be elegant, minimalist, and visionary. Do not use hashtags.",
        title, category
    )
}
