use crate::traits::Interface;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin};
use tokio::sync::Mutex;

const DEFAULT_PROMPT: &str = "toolhub> ";

/// Line-oriented stdin/stdout front end.
pub struct TerminalInterface {
    reader: Mutex<BufReader<Stdin>>,
    prompt: String,
}

impl TerminalInterface {
    pub fn new() -> Self {
        Self::with_prompt(DEFAULT_PROMPT)
    }

    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            reader: Mutex::new(BufReader::new(tokio::io::stdin())),
            prompt: prompt.into(),
        }
    }

    async fn write(&self, text: &str) {
        let mut stdout = tokio::io::stdout();
        let _ = stdout.write_all(text.as_bytes()).await;
        let _ = stdout.flush().await;
    }
}

impl Default for TerminalInterface {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Interface for TerminalInterface {
    async fn receive_input(&self) -> Option<String> {
        let mut reader = self.reader.lock().await;
        self.write(&self.prompt).await;

        let mut line = String::new();
        match reader.read_line(&mut line).await {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    async fn send_output(&self, message: &str) {
        self.write(&format!("{}\n", message)).await;
    }

    async fn show_status(&self, status: &str) {
        self.send_output(&format!("ℹ️  {}", status)).await;
    }
}
