pub mod commands;
pub mod config;
pub mod hub;
pub mod logging;
pub mod session;

pub use config::{api_token, Config, ConfigError};
pub use hub::{Hub, HubError};
pub use session::InteractiveSession;
