use crate::artifact::BinaryResource;
use serde::{Deserialize, Serialize};

/// One classification label with its confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub label: String,
    pub score: f64,
}

impl Label {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// Score as a whole percentage, rounded half up.
    pub fn confidence_percent(&self) -> i64 {
        (self.score * 100.0).round() as i64
    }
}

/// Result of one capability call. The variant is chosen by the capability
/// that produced it, never re-derived from the tool id.
#[derive(Debug)]
pub enum InferenceOutput {
    Text(String),
    Code(String),
    /// Labels ordered by descending score.
    Labeled(Vec<Label>),
    Binary(BinaryResource),
}

impl InferenceOutput {
    pub fn kind(&self) -> &'static str {
        match self {
            InferenceOutput::Text(_) => "text",
            InferenceOutput::Code(_) => "code",
            InferenceOutput::Labeled(_) => "labeled",
            InferenceOutput::Binary(_) => "binary",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            InferenceOutput::Text(s) | InferenceOutput::Code(s) => Some(s),
            _ => None,
        }
    }

    pub fn top_label(&self) -> Option<&Label> {
        match self {
            InferenceOutput::Labeled(labels) => labels.first(),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&BinaryResource> {
        match self {
            InferenceOutput::Binary(resource) => Some(resource),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_percent_rounds() {
        assert_eq!(Label::new("POSITIVE", 0.873).confidence_percent(), 87);
        assert_eq!(Label::new("POSITIVE", 0.875).confidence_percent(), 88);
        assert_eq!(Label::new("NEGATIVE", 0.0).confidence_percent(), 0);
        assert_eq!(Label::new("POSITIVE", 1.0).confidence_percent(), 100);
    }

    #[test]
    fn test_accessors_follow_variant() {
        let text = InferenceOutput::Text("bonjour".into());
        assert_eq!(text.kind(), "text");
        assert_eq!(text.as_text(), Some("bonjour"));
        assert!(text.top_label().is_none());

        let labeled = InferenceOutput::Labeled(vec![Label::new("cat", 0.9), Label::new("dog", 0.1)]);
        assert_eq!(labeled.top_label().map(|l| l.label.as_str()), Some("cat"));
        assert!(labeled.as_text().is_none());
        assert!(labeled.as_binary().is_none());
    }
}
