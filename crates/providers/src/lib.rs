pub mod huggingface;
pub mod traits;

pub use huggingface::HuggingFaceProvider;
pub use traits::{
    BinaryPayload, ClassificationLabel, InferenceProvider, ProviderError, SummarizationParams,
    TextGenerationParams,
};
