pub mod render;
pub mod terminal;
pub mod traits;

pub use render::{render, Rendered};
pub use terminal::TerminalInterface;
pub use traits::Interface;
