use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Tool category, also used as the catalog filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    All,
    Text,
    Image,
    Audio,
    Analysis,
    Creative,
}

impl Category {
    /// Filter values in display order.
    pub const FILTERS: [Category; 6] = [
        Category::All,
        Category::Text,
        Category::Image,
        Category::Audio,
        Category::Analysis,
        Category::Creative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Text => "text",
            Category::Image => "image",
            Category::Audio => "audio",
            Category::Analysis => "analysis",
            Category::Creative => "creative",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All Models",
            Category::Text => "Text",
            Category::Image => "Image",
            Category::Audio => "Audio",
            Category::Analysis => "Analysis",
            Category::Creative => "Creative",
        }
    }

    /// `All` admits every category; any other filter admits only itself.
    pub fn admits(&self, category: Category) -> bool {
        *self == Category::All || *self == category
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Category::FILTERS
            .iter()
            .copied()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// What kind of value the tool's single input field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    /// An image URL.
    Image,
}

/// Static description of one capability. Defined at compile time, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub input_type: InputType,
    pub input_label: &'static str,
    pub input_placeholder: &'static str,
    pub button_text: &'static str,
}
