use crate::capabilities::builtin_capabilities;
use crate::traits::{Capability, DispatchError, RawOutput};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use toolhub_core::{ArtifactError, BinaryResource, InferenceOutput, Label};
use toolhub_providers::InferenceProvider;
use tracing::{info, warn};

/// Routes a tool id to its capability and runs it against the provider.
pub struct Dispatcher {
    capabilities: HashMap<&'static str, Arc<dyn Capability>>,
    provider: Arc<dyn InferenceProvider>,
    artifacts_dir: Option<PathBuf>,
}

impl Dispatcher {
    pub fn new(provider: Arc<dyn InferenceProvider>) -> Self {
        Self {
            capabilities: HashMap::new(),
            provider,
            artifacts_dir: None,
        }
    }

    pub fn with_builtin(provider: Arc<dyn InferenceProvider>) -> Self {
        let mut dispatcher = Self::new(provider);
        for capability in builtin_capabilities() {
            dispatcher.register(capability);
        }
        dispatcher
    }

    /// Where binary results are written. `None` uses the system temp dir.
    pub fn with_artifacts_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.artifacts_dir = dir;
        self
    }

    pub fn register(&mut self, capability: Arc<dyn Capability>) -> &mut Self {
        self.capabilities.insert(capability.tool_id(), capability);
        self
    }

    pub fn model_for(&self, tool_id: &str) -> Option<&'static str> {
        self.capabilities.get(tool_id).map(|c| c.model())
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Run the capability mapped to `tool_id`.
    ///
    /// An unmapped id is not an error: it is logged and yields `Ok(None)`
    /// without touching the provider.
    pub async fn invoke(
        &self,
        tool_id: &str,
        input: &str,
    ) -> Result<Option<InferenceOutput>, DispatchError> {
        let Some(capability) = self.capabilities.get(tool_id).cloned() else {
            warn!("No capability registered for tool: {}", tool_id);
            return Ok(None);
        };

        info!(
            "Dispatching tool: {} (model: {}, provider: {})",
            tool_id,
            capability.model(),
            self.provider.name()
        );

        let raw = capability
            .call(self.provider.as_ref(), input)
            .await
            .map_err(|e| {
                warn!("Tool {} failed: {}", tool_id, e);
                DispatchError::remote(tool_id, e)
            })?;

        let output = self.materialize(raw).map_err(|e| {
            warn!("Tool {} result could not be stored: {}", tool_id, e);
            DispatchError::remote(tool_id, e)
        })?;

        info!("Tool {} produced a {} result", tool_id, output.kind());
        Ok(Some(output))
    }

    fn materialize(&self, raw: RawOutput) -> Result<InferenceOutput, ArtifactError> {
        Ok(match raw {
            RawOutput::Text(text) => InferenceOutput::Text(text),
            RawOutput::Code(code) => InferenceOutput::Code(code),
            RawOutput::Labels(labels) => InferenceOutput::Labeled(
                labels
                    .into_iter()
                    .map(|l| Label::new(l.label, l.score))
                    .collect(),
            ),
            RawOutput::Binary(payload) => InferenceOutput::Binary(BinaryResource::store(
                &payload.bytes,
                &payload.content_type,
                self.artifacts_dir.as_deref(),
            )?),
        })
    }
}
