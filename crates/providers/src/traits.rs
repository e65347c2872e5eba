use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextGenerationParams {
    pub max_new_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummarizationParams {
    pub max_length: u32,
    pub min_length: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationLabel {
    pub label: String,
    pub score: f64,
}

/// Raw binary body returned by audio and image tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryPayload {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Hosted inference API, one method per task type.
///
/// Each method takes the model id explicitly; callers own model choice and
/// parameters.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    async fn text_generation(
        &self,
        model: &str,
        inputs: &str,
        params: TextGenerationParams,
    ) -> Result<String, ProviderError>;

    async fn text_classification(
        &self,
        model: &str,
        inputs: &str,
    ) -> Result<Vec<ClassificationLabel>, ProviderError>;

    async fn image_classification(
        &self,
        model: &str,
        image: Vec<u8>,
    ) -> Result<Vec<ClassificationLabel>, ProviderError>;

    async fn text_to_speech(&self, model: &str, inputs: &str)
        -> Result<BinaryPayload, ProviderError>;

    async fn image_to_image(
        &self,
        model: &str,
        image: Vec<u8>,
        prompt: &str,
    ) -> Result<BinaryPayload, ProviderError>;

    async fn translation(&self, model: &str, inputs: &str) -> Result<String, ProviderError>;

    async fn image_to_text(&self, model: &str, image: Vec<u8>) -> Result<String, ProviderError>;

    async fn summarization(
        &self,
        model: &str,
        inputs: &str,
        params: SummarizationParams,
    ) -> Result<String, ProviderError>;

    /// Download the image an image tool was pointed at.
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ProviderError>;

    fn name(&self) -> &str;
}
