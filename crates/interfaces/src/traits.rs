use async_trait::async_trait;

/// A front end the interactive session talks to.
#[async_trait]
pub trait Interface: Send + Sync {
    /// Next input line without its line terminator, or `None` once input is exhausted.
    async fn receive_input(&self) -> Option<String>;
    /// Show a message as-is on its own line.
    async fn send_output(&self, message: &str);
    /// Show a short informational notice.
    async fn show_status(&self, status: &str);
}
