//! The fixed dispatch table. Models and parameters are constants; nothing here
//! is user-configurable.

use crate::traits::{Capability, RawOutput};
use async_trait::async_trait;
use std::sync::Arc;
use toolhub_core::catalog;
use toolhub_providers::{
    InferenceProvider, ProviderError, SummarizationParams, TextGenerationParams,
};

pub const GPT2: &str = "gpt2";
pub const SENTIMENT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";
pub const VIT_MODEL: &str = "google/vit-base-patch16-224";
pub const TTS_MODEL: &str = "espnet/kan-bayashi_ljspeech_vits";
pub const PIX2PIX_MODEL: &str = "timbrooks/instruct-pix2pix";
pub const CODEGEN_MODEL: &str = "Salesforce/codegen-350M-mono";
pub const TRANSLATION_MODEL: &str = "Helsinki-NLP/opus-mt-en-fr";
pub const CAPTION_MODEL: &str = "Salesforce/blip-image-captioning-base";
pub const SUMMARY_MODEL: &str = "facebook/bart-large-cnn";

pub const ART_PROMPT: &str = "Convert this image to an artistic oil painting";
pub const SKETCH_PROMPT: &str = "Convert this sketch to a detailed, realistic image";
pub const ENHANCE_PROMPT: &str = "Enhance this image, make it higher quality and sharper";

fn verbatim(input: &str) -> String {
    input.to_string()
}

fn poem_prompt(topic: &str) -> String {
    format!("Write a poem about {}:\n\n", topic)
}

pub struct TextGeneration {
    pub tool_id: &'static str,
    pub model: &'static str,
    pub params: TextGenerationParams,
    pub prompt: fn(&str) -> String,
    /// Render the generated text as code instead of prose.
    pub code: bool,
}

#[async_trait]
impl Capability for TextGeneration {
    fn tool_id(&self) -> &'static str {
        self.tool_id
    }

    fn model(&self) -> &'static str {
        self.model
    }

    async fn call(
        &self,
        provider: &dyn InferenceProvider,
        input: &str,
    ) -> Result<RawOutput, ProviderError> {
        let prompt = (self.prompt)(input);
        let text = provider
            .text_generation(self.model, &prompt, self.params)
            .await?;
        Ok(if self.code {
            RawOutput::Code(text)
        } else {
            RawOutput::Text(text)
        })
    }
}

pub struct TextClassification {
    pub tool_id: &'static str,
    pub model: &'static str,
}

#[async_trait]
impl Capability for TextClassification {
    fn tool_id(&self) -> &'static str {
        self.tool_id
    }

    fn model(&self) -> &'static str {
        self.model
    }

    async fn call(
        &self,
        provider: &dyn InferenceProvider,
        input: &str,
    ) -> Result<RawOutput, ProviderError> {
        let labels = provider.text_classification(self.model, input).await?;
        Ok(RawOutput::Labels(labels))
    }
}

pub struct ImageClassification {
    pub tool_id: &'static str,
    pub model: &'static str,
}

#[async_trait]
impl Capability for ImageClassification {
    fn tool_id(&self) -> &'static str {
        self.tool_id
    }

    fn model(&self) -> &'static str {
        self.model
    }

    async fn call(
        &self,
        provider: &dyn InferenceProvider,
        input: &str,
    ) -> Result<RawOutput, ProviderError> {
        let image = provider.fetch_image(input).await?;
        let labels = provider.image_classification(self.model, image).await?;
        Ok(RawOutput::Labels(labels))
    }
}

pub struct TextToSpeech {
    pub tool_id: &'static str,
    pub model: &'static str,
}

#[async_trait]
impl Capability for TextToSpeech {
    fn tool_id(&self) -> &'static str {
        self.tool_id
    }

    fn model(&self) -> &'static str {
        self.model
    }

    async fn call(
        &self,
        provider: &dyn InferenceProvider,
        input: &str,
    ) -> Result<RawOutput, ProviderError> {
        let audio = provider.text_to_speech(self.model, input).await?;
        Ok(RawOutput::Binary(audio))
    }
}

/// Instruction-driven image edit; the instruction is fixed per tool.
pub struct ImageToImage {
    pub tool_id: &'static str,
    pub model: &'static str,
    pub prompt: &'static str,
}

#[async_trait]
impl Capability for ImageToImage {
    fn tool_id(&self) -> &'static str {
        self.tool_id
    }

    fn model(&self) -> &'static str {
        self.model
    }

    async fn call(
        &self,
        provider: &dyn InferenceProvider,
        input: &str,
    ) -> Result<RawOutput, ProviderError> {
        let image = provider.fetch_image(input).await?;
        let edited = provider
            .image_to_image(self.model, image, self.prompt)
            .await?;
        Ok(RawOutput::Binary(edited))
    }
}

pub struct Translation {
    pub tool_id: &'static str,
    pub model: &'static str,
}

#[async_trait]
impl Capability for Translation {
    fn tool_id(&self) -> &'static str {
        self.tool_id
    }

    fn model(&self) -> &'static str {
        self.model
    }

    async fn call(
        &self,
        provider: &dyn InferenceProvider,
        input: &str,
    ) -> Result<RawOutput, ProviderError> {
        let text = provider.translation(self.model, input).await?;
        Ok(RawOutput::Text(text))
    }
}

pub struct ImageToText {
    pub tool_id: &'static str,
    pub model: &'static str,
}

#[async_trait]
impl Capability for ImageToText {
    fn tool_id(&self) -> &'static str {
        self.tool_id
    }

    fn model(&self) -> &'static str {
        self.model
    }

    async fn call(
        &self,
        provider: &dyn InferenceProvider,
        input: &str,
    ) -> Result<RawOutput, ProviderError> {
        let image = provider.fetch_image(input).await?;
        let caption = provider.image_to_text(self.model, image).await?;
        Ok(RawOutput::Text(caption))
    }
}

pub struct Summarization {
    pub tool_id: &'static str,
    pub model: &'static str,
    pub params: SummarizationParams,
}

#[async_trait]
impl Capability for Summarization {
    fn tool_id(&self) -> &'static str {
        self.tool_id
    }

    fn model(&self) -> &'static str {
        self.model
    }

    async fn call(
        &self,
        provider: &dyn InferenceProvider,
        input: &str,
    ) -> Result<RawOutput, ProviderError> {
        let summary = provider
            .summarization(self.model, input, self.params)
            .await?;
        Ok(RawOutput::Text(summary))
    }
}

/// One capability per built-in catalog entry.
pub fn builtin_capabilities() -> Vec<Arc<dyn Capability>> {
    vec![
        Arc::new(TextGeneration {
            tool_id: catalog::TEXT_GENERATION,
            model: GPT2,
            params: TextGenerationParams {
                max_new_tokens: 100,
                temperature: 0.7,
            },
            prompt: verbatim,
            code: false,
        }),
        Arc::new(TextClassification {
            tool_id: catalog::SENTIMENT,
            model: SENTIMENT_MODEL,
        }),
        Arc::new(ImageClassification {
            tool_id: catalog::IMAGE_CLASSIFICATION,
            model: VIT_MODEL,
        }),
        Arc::new(TextToSpeech {
            tool_id: catalog::TEXT_TO_SPEECH,
            model: TTS_MODEL,
        }),
        Arc::new(ImageToImage {
            tool_id: catalog::IMAGE_TO_ART,
            model: PIX2PIX_MODEL,
            prompt: ART_PROMPT,
        }),
        Arc::new(TextGeneration {
            tool_id: catalog::CODE_GENERATOR,
            model: CODEGEN_MODEL,
            params: TextGenerationParams {
                max_new_tokens: 200,
                temperature: 0.5,
            },
            prompt: verbatim,
            code: true,
        }),
        Arc::new(Translation {
            tool_id: catalog::TRANSLATION,
            model: TRANSLATION_MODEL,
        }),
        Arc::new(ImageToText {
            tool_id: catalog::IMAGE_CAPTION,
            model: CAPTION_MODEL,
        }),
        Arc::new(Summarization {
            tool_id: catalog::TEXT_SUMMARIZER,
            model: SUMMARY_MODEL,
            params: SummarizationParams {
                max_length: 130,
                min_length: 30,
            },
        }),
        Arc::new(ImageToImage {
            tool_id: catalog::SKETCH_TO_IMAGE,
            model: PIX2PIX_MODEL,
            prompt: SKETCH_PROMPT,
        }),
        Arc::new(TextGeneration {
            tool_id: catalog::POEM_GENERATOR,
            model: GPT2,
            params: TextGenerationParams {
                max_new_tokens: 150,
                temperature: 0.8,
            },
            prompt: poem_prompt,
            code: false,
        }),
        Arc::new(ImageToImage {
            tool_id: catalog::IMAGE_ENHANCEMENT,
            model: PIX2PIX_MODEL,
            prompt: ENHANCE_PROMPT,
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolhub_core::BUILTIN_TOOLS;

    #[test]
    fn test_every_catalog_tool_has_a_capability() {
        let capabilities = builtin_capabilities();
        for tool in BUILTIN_TOOLS.iter() {
            assert!(
                capabilities.iter().any(|c| c.tool_id() == tool.id),
                "no capability for {}",
                tool.id
            );
        }
        assert_eq!(capabilities.len(), BUILTIN_TOOLS.len());
    }

    #[test]
    fn test_poem_prompt_wraps_topic() {
        assert_eq!(poem_prompt("rain"), "Write a poem about rain:\n\n");
        assert_eq!(verbatim("rain"), "rain");
    }
}
