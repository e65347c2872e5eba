//! Result renderer: tagged inference output to terminal text.

use std::fmt;
use toolhub_core::InferenceOutput;

#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Audio { locator: String, mime: String },
    Image { locator: String, mime: String },
    /// Binary payload that is neither audio nor image.
    File { locator: String, mime: String },
    Labeled { label: String, confidence: i64 },
    Code(String),
    Text(String),
}

pub fn render(output: &InferenceOutput) -> Rendered {
    match output {
        InferenceOutput::Binary(resource) => {
            let locator = resource.locator();
            let mime = resource.mime().to_string();
            if resource.is_audio() {
                Rendered::Audio { locator, mime }
            } else if resource.is_image() {
                Rendered::Image { locator, mime }
            } else {
                Rendered::File { locator, mime }
            }
        }
        InferenceOutput::Labeled(_) => match output.top_label() {
            Some(top) => Rendered::Labeled {
                label: top.label.clone(),
                confidence: top.confidence_percent(),
            },
            None => Rendered::Text("No labels returned".to_string()),
        },
        InferenceOutput::Code(code) => Rendered::Code(code.clone()),
        InferenceOutput::Text(text) => Rendered::Text(text.clone()),
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Audio { locator, mime } => write!(f, "🔊 Audio ({}): {}", mime, locator),
            Rendered::Image { locator, mime } => write!(f, "🖼️  Image ({}): {}", mime, locator),
            Rendered::File { locator, mime } => write!(f, "📦 File ({}): {}", mime, locator),
            Rendered::Labeled { label, confidence } => {
                write!(f, "{}\nConfidence: {}%", label, confidence)
            }
            Rendered::Code(code) => write!(f, "```\n{}\n```", code.trim_end()),
            Rendered::Text(text) => f.write_str(text),
        }
    }
}
