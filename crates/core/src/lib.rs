pub mod artifact;
pub mod catalog;
pub mod metrics;
pub mod output;
pub mod selection;
pub mod types;

pub use artifact::{ArtifactError, BinaryResource};
pub use catalog::BUILTIN_TOOLS;
pub use metrics::{Metrics, MetricsSnapshot};
pub use output::{InferenceOutput, Label};
pub use selection::{CompletionStatus, SelectionState, SubmissionTicket, SubmitRefusal};
pub use types::{Category, InputType, ToolDescriptor, UnknownCategory};
