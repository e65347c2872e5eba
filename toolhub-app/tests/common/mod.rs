#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use toolhub_app::Hub;
use toolhub_interfaces::Interface;
use toolhub_providers::*;
use toolhub_tools::{Dispatcher, ToolRegistry};

/// Provider with canned answers. `fail` makes every call error out and
/// `hang` makes sentiment calls never return.
#[derive(Default)]
pub struct CannedProvider {
    pub fail: AtomicBool,
    pub hang: AtomicBool,
    pub calls: AtomicUsize,
}

impl CannedProvider {
    fn enter(&self) -> Result<(), ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(ProviderError::Api {
                status: 500,
                message: "Internal error".to_string(),
            });
        }
        Ok(())
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InferenceProvider for CannedProvider {
    async fn text_generation(
        &self,
        _model: &str,
        inputs: &str,
        _params: TextGenerationParams,
    ) -> Result<String, ProviderError> {
        self.enter()?;
        Ok(format!("{inputs} and then"))
    }

    async fn text_classification(
        &self,
        _model: &str,
        _inputs: &str,
    ) -> Result<Vec<ClassificationLabel>, ProviderError> {
        self.enter()?;
        if self.hang.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        Ok(vec![ClassificationLabel {
            label: "POSITIVE".into(),
            score: 0.873,
        }])
    }

    async fn image_classification(
        &self,
        _model: &str,
        _image: Vec<u8>,
    ) -> Result<Vec<ClassificationLabel>, ProviderError> {
        self.enter()?;
        Ok(vec![ClassificationLabel {
            label: "tabby cat".into(),
            score: 0.42,
        }])
    }

    async fn text_to_speech(
        &self,
        _model: &str,
        _inputs: &str,
    ) -> Result<BinaryPayload, ProviderError> {
        self.enter()?;
        Ok(BinaryPayload {
            bytes: b"fLaC".to_vec(),
            content_type: "audio/flac".into(),
        })
    }

    async fn image_to_image(
        &self,
        _model: &str,
        _image: Vec<u8>,
        _prompt: &str,
    ) -> Result<BinaryPayload, ProviderError> {
        self.enter()?;
        Ok(BinaryPayload {
            bytes: b"\x89PNG".to_vec(),
            content_type: "image/png".into(),
        })
    }

    async fn translation(&self, _model: &str, _inputs: &str) -> Result<String, ProviderError> {
        self.enter()?;
        Ok("Bonjour".into())
    }

    async fn image_to_text(&self, _model: &str, _image: Vec<u8>) -> Result<String, ProviderError> {
        self.enter()?;
        Ok("a cat".into())
    }

    async fn summarization(
        &self,
        _model: &str,
        _inputs: &str,
        _params: SummarizationParams,
    ) -> Result<String, ProviderError> {
        self.enter()?;
        Ok("short".into())
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ProviderError> {
        Ok(url.as_bytes().to_vec())
    }

    fn name(&self) -> &str {
        "canned"
    }
}

pub fn hub(provider: Arc<CannedProvider>, dir: &tempfile::TempDir) -> Hub {
    let dispatcher =
        Dispatcher::with_builtin(provider).with_artifacts_dir(Some(dir.path().to_path_buf()));
    Hub::new(ToolRegistry::builtin(), Arc::new(dispatcher))
}

/// Feeds scripted lines, then reports end of input. Records everything shown.
pub struct ScriptedInterface {
    lines: Mutex<VecDeque<String>>,
    output: Mutex<Vec<String>>,
}

impl ScriptedInterface {
    pub fn new(lines: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            lines: Mutex::new(lines.iter().map(|l| l.to_string()).collect()),
            output: Mutex::new(Vec::new()),
        })
    }

    pub fn transcript(&self) -> String {
        self.output.lock().unwrap().join("\n")
    }
}

#[async_trait]
impl Interface for ScriptedInterface {
    async fn receive_input(&self) -> Option<String> {
        self.lines.lock().unwrap().pop_front()
    }

    async fn send_output(&self, message: &str) {
        self.output.lock().unwrap().push(message.to_string());
    }

    async fn show_status(&self, status: &str) {
        self.output.lock().unwrap().push(format!("ℹ️  {}", status));
    }
}
