pub mod capabilities;
pub mod dispatcher;
pub mod registry;
pub mod traits;

pub use capabilities::builtin_capabilities;
pub use dispatcher::Dispatcher;
pub use registry::ToolRegistry;
pub use traits::{Capability, DispatchError, RawOutput};
