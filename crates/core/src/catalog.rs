//! Built-in tool catalog. Order is the display order.

use crate::types::{Category, InputType, ToolDescriptor};

pub const TEXT_GENERATION: &str = "text-generation";
pub const SENTIMENT: &str = "sentiment";
pub const IMAGE_CLASSIFICATION: &str = "image-classification";
pub const TEXT_TO_SPEECH: &str = "text-to-speech";
pub const IMAGE_TO_ART: &str = "image-to-art";
pub const CODE_GENERATOR: &str = "code-generator";
pub const TRANSLATION: &str = "translation";
pub const IMAGE_CAPTION: &str = "image-caption";
pub const TEXT_SUMMARIZER: &str = "text-summarizer";
pub const SKETCH_TO_IMAGE: &str = "sketch-to-image";
pub const POEM_GENERATOR: &str = "poem-generator";
pub const IMAGE_ENHANCEMENT: &str = "image-enhancement";

const IMAGE_URL_PLACEHOLDER: &str = "https://example.com/image.jpg";

pub static BUILTIN_TOOLS: [ToolDescriptor; 12] = [
    ToolDescriptor {
        id: TEXT_GENERATION,
        title: "Text Generation",
        description: "Generate creative text from a prompt",
        category: Category::Text,
        input_type: InputType::Text,
        input_label: "Enter your prompt",
        input_placeholder: "Once upon a time...",
        button_text: "Generate Text",
    },
    ToolDescriptor {
        id: SENTIMENT,
        title: "Sentiment Analysis",
        description: "Analyze the emotional tone of a piece of text",
        category: Category::Analysis,
        input_type: InputType::Text,
        input_label: "Enter text to analyze",
        input_placeholder: "I love this product!",
        button_text: "Analyze Sentiment",
    },
    ToolDescriptor {
        id: IMAGE_CLASSIFICATION,
        title: "Image Classification",
        description: "Identify objects and scenes in an image",
        category: Category::Image,
        input_type: InputType::Image,
        input_label: "Enter image URL",
        input_placeholder: IMAGE_URL_PLACEHOLDER,
        button_text: "Classify Image",
    },
    ToolDescriptor {
        id: TEXT_TO_SPEECH,
        title: "Text to Speech",
        description: "Turn text into natural sounding speech",
        category: Category::Audio,
        input_type: InputType::Text,
        input_label: "Enter text to speak",
        input_placeholder: "Hello, welcome to the AI tools hub!",
        button_text: "Generate Speech",
    },
    ToolDescriptor {
        id: IMAGE_TO_ART,
        title: "Image to Art",
        description: "Repaint a photo as an oil painting",
        category: Category::Creative,
        input_type: InputType::Image,
        input_label: "Enter image URL",
        input_placeholder: IMAGE_URL_PLACEHOLDER,
        button_text: "Create Art",
    },
    ToolDescriptor {
        id: CODE_GENERATOR,
        title: "Code Generator",
        description: "Complete code from a description or signature",
        category: Category::Text,
        input_type: InputType::Text,
        input_label: "Describe the code you need",
        input_placeholder: "def fibonacci(n):",
        button_text: "Generate Code",
    },
    ToolDescriptor {
        id: TRANSLATION,
        title: "Translation",
        description: "Translate English text to French",
        category: Category::Text,
        input_type: InputType::Text,
        input_label: "Enter English text",
        input_placeholder: "Hello, how are you?",
        button_text: "Translate",
    },
    ToolDescriptor {
        id: IMAGE_CAPTION,
        title: "Image Captioning",
        description: "Describe the content of an image in a sentence",
        category: Category::Image,
        input_type: InputType::Image,
        input_label: "Enter image URL",
        input_placeholder: IMAGE_URL_PLACEHOLDER,
        button_text: "Generate Caption",
    },
    ToolDescriptor {
        id: TEXT_SUMMARIZER,
        title: "Text Summarizer",
        description: "Condense long text into a short summary",
        category: Category::Text,
        input_type: InputType::Text,
        input_label: "Enter text to summarize",
        input_placeholder: "Paste a long article here...",
        button_text: "Summarize",
    },
    ToolDescriptor {
        id: SKETCH_TO_IMAGE,
        title: "Sketch to Image",
        description: "Turn a rough sketch into a realistic picture",
        category: Category::Creative,
        input_type: InputType::Image,
        input_label: "Enter sketch URL",
        input_placeholder: IMAGE_URL_PLACEHOLDER,
        button_text: "Generate Image",
    },
    ToolDescriptor {
        id: POEM_GENERATOR,
        title: "Poem Generator",
        description: "Write a short poem about any topic",
        category: Category::Creative,
        input_type: InputType::Text,
        input_label: "Enter a topic",
        input_placeholder: "the ocean at night",
        button_text: "Write Poem",
    },
    ToolDescriptor {
        id: IMAGE_ENHANCEMENT,
        title: "Image Enhancement",
        description: "Sharpen an image and improve its quality",
        category: Category::Image,
        input_type: InputType::Image,
        input_label: "Enter image URL",
        input_placeholder: IMAGE_URL_PLACEHOLDER,
        button_text: "Enhance Image",
    },
];
