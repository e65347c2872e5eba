use crate::traits::*;
use async_trait::async_trait;
use base64::Engine;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::{json, Value};
use std::cmp::Ordering;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the hosted Hugging Face Inference API.
pub struct HuggingFaceProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HuggingFaceProvider {
    pub fn new(base_url: String, api_key: Option<String>) -> Result<Self, ProviderError> {
        Self::with_timeout(base_url, api_key, DEFAULT_TIMEOUT)
    }

    /// Every request made by this provider fails once `timeout` elapses.
    pub fn with_timeout(
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/models/{}", self.base_url.trim_end_matches('/'), model)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(api_key) => request.bearer_auth(api_key),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ProviderError> {
        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status,
                message: error_message(&text),
            });
        }

        Ok(response)
    }

    async fn post_json(&self, model: &str, body: Value) -> Result<Value, ProviderError> {
        debug!("POST {} (json)", model);
        let request = self.authorize(self.client.post(self.model_url(model)).json(&body));
        let response = self.send(request).await?;

        response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }

    async fn post_bytes(&self, model: &str, bytes: Vec<u8>) -> Result<Value, ProviderError> {
        debug!("POST {} ({} bytes)", model, bytes.len());
        let request = self.authorize(
            self.client
                .post(self.model_url(model))
                .header(CONTENT_TYPE, "application/octet-stream")
                .body(bytes),
        );
        let response = self.send(request).await?;

        response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }

    async fn post_json_for_binary(
        &self,
        model: &str,
        body: Value,
    ) -> Result<BinaryPayload, ProviderError> {
        debug!("POST {} (json, binary response)", model);
        let request = self.authorize(self.client.post(self.model_url(model)).json(&body));
        let response = self.send(request).await?;
        read_binary(response).await
    }
}

async fn read_binary(response: Response) -> Result<BinaryPayload, ProviderError> {
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ProviderError::Http(e.to_string()))?;

    if content_type.starts_with("application/json") {
        return Err(ProviderError::UnexpectedResponse(format!(
            "expected binary payload, got JSON: {}",
            String::from_utf8_lossy(&bytes)
        )));
    }

    Ok(BinaryPayload {
        bytes: bytes.to_vec(),
        content_type,
    })
}

/// The API reports failures as `{"error": "..."}`; fall back to the raw body.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        match value.get("error") {
            Some(Value::String(message)) => return message.clone(),
            Some(Value::Array(messages)) => {
                let joined: Vec<_> = messages.iter().filter_map(Value::as_str).collect();
                if !joined.is_empty() {
                    return joined.join("; ");
                }
            }
            _ => {}
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "no details".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Pick `field` out of either `[{field: ..}]` or `{field: ..}`.
fn string_field(value: &Value, field: &str) -> Result<String, ProviderError> {
    let item = match value {
        Value::Array(items) => items.first(),
        other => Some(other),
    };

    item.and_then(|v| v.get(field))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ProviderError::UnexpectedResponse(format!("missing `{}` in response", field)))
}

/// Accept both `[{label, score}]` and the nested `[[{label, score}]]` form.
fn parse_labels(value: Value) -> Result<Vec<ClassificationLabel>, ProviderError> {
    let value = match value {
        Value::Array(mut items) if items.first().map_or(false, Value::is_array) => {
            items.swap_remove(0)
        }
        other => other,
    };

    let mut labels: Vec<ClassificationLabel> = serde_json::from_value(value)
        .map_err(|e| ProviderError::UnexpectedResponse(format!("expected label list: {}", e)))?;
    labels.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    Ok(labels)
}

#[async_trait]
impl InferenceProvider for HuggingFaceProvider {
    async fn text_generation(
        &self,
        model: &str,
        inputs: &str,
        params: TextGenerationParams,
    ) -> Result<String, ProviderError> {
        let body = json!({ "inputs": inputs, "parameters": params });
        let value = self.post_json(model, body).await?;
        string_field(&value, "generated_text")
    }

    async fn text_classification(
        &self,
        model: &str,
        inputs: &str,
    ) -> Result<Vec<ClassificationLabel>, ProviderError> {
        let value = self.post_json(model, json!({ "inputs": inputs })).await?;
        parse_labels(value)
    }

    async fn image_classification(
        &self,
        model: &str,
        image: Vec<u8>,
    ) -> Result<Vec<ClassificationLabel>, ProviderError> {
        let value = self.post_bytes(model, image).await?;
        parse_labels(value)
    }

    async fn text_to_speech(
        &self,
        model: &str,
        inputs: &str,
    ) -> Result<BinaryPayload, ProviderError> {
        self.post_json_for_binary(model, json!({ "inputs": inputs }))
            .await
    }

    async fn image_to_image(
        &self,
        model: &str,
        image: Vec<u8>,
        prompt: &str,
    ) -> Result<BinaryPayload, ProviderError> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&image);
        let body = json!({
            "inputs": encoded,
            "parameters": { "prompt": prompt },
        });
        self.post_json_for_binary(model, body).await
    }

    async fn translation(&self, model: &str, inputs: &str) -> Result<String, ProviderError> {
        let value = self.post_json(model, json!({ "inputs": inputs })).await?;
        string_field(&value, "translation_text")
    }

    async fn image_to_text(&self, model: &str, image: Vec<u8>) -> Result<String, ProviderError> {
        let value = self.post_bytes(model, image).await?;
        string_field(&value, "generated_text")
    }

    async fn summarization(
        &self,
        model: &str,
        inputs: &str,
        params: SummarizationParams,
    ) -> Result<String, ProviderError> {
        let body = json!({ "inputs": inputs, "parameters": params });
        let value = self.post_json(model, body).await?;
        string_field(&value, "summary_text")
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        debug!("GET {}", url);
        let response = self.send(self.client.get(url)).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    fn name(&self) -> &str {
        "Hugging Face Inference"
    }
}
