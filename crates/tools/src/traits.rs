use async_trait::async_trait;
use thiserror::Error;
use toolhub_providers::{BinaryPayload, ClassificationLabel, InferenceProvider, ProviderError};

/// The single failure kind callers see. Transport, authentication, remote
/// rejection, response shape and local storage problems all land here.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Remote call failed for {tool}: {source}")]
    RemoteCallFailed {
        tool: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl DispatchError {
    pub fn remote(
        tool: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        DispatchError::RemoteCallFailed {
            tool: tool.into(),
            source: source.into(),
        }
    }

    pub fn tool(&self) -> &str {
        match self {
            DispatchError::RemoteCallFailed { tool, .. } => tool,
        }
    }
}

/// Output of a capability before binary payloads are written to disk.
#[derive(Debug, Clone, PartialEq)]
pub enum RawOutput {
    Text(String),
    Code(String),
    Labels(Vec<ClassificationLabel>),
    Binary(BinaryPayload),
}

/// One entry of the dispatch table: a fixed model, fixed parameters and the
/// provider call that uses them.
#[async_trait]
pub trait Capability: Send + Sync {
    fn tool_id(&self) -> &'static str;

    fn model(&self) -> &'static str;

    async fn call(
        &self,
        provider: &dyn InferenceProvider,
        input: &str,
    ) -> Result<RawOutput, ProviderError>;
}
