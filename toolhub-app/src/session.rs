//! Interactive session: persistent loop over user input and finished requests.

use crate::commands::{list_categories, list_tools};
use crate::hub::Hub;
use std::sync::Arc;
use tokio::sync::mpsc;
use toolhub_core::{Category, CompletionStatus, InferenceOutput, SubmissionTicket, SubmitRefusal};
use toolhub_interfaces::Interface;
use toolhub_tools::DispatchError;
use tracing::debug;

type Completion = (SubmissionTicket, Result<Option<InferenceOutput>, DispatchError>);

const HELP: &str = "\n📖 Available Commands:
  tools [category]  - List tools, optionally filtered by category
  categories        - List category filters
  use <tool-id>     - Select a tool (again to deselect)
  send <text>       - Send text as input, even if it starts with a command word
  result            - Show the last result again
  status            - Show session status
  clear             - Clear screen
  help              - Show this help message
  exit, quit        - Exit

💡 With a tool selected, any other line is sent to it as input\n";

pub struct InteractiveSession {
    hub: Hub,
    interface: Arc<dyn Interface>,
}

enum Flow {
    Continue,
    Exit,
}

impl InteractiveSession {
    pub fn new(hub: Hub, interface: Arc<dyn Interface>) -> Self {
        Self { hub, interface }
    }

    /// Run until `exit` or end of input. At end of input an in-flight
    /// request is awaited so its result is still shown.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.interface
            .send_output(
                "╔══════════════════════════════════════════════════════════════════╗\n\
                 ║              Toolhub AI Tools                                    ║\n\
                 ║  Commands: tools, use <id>, status, help, exit                   ║\n\
                 ╚══════════════════════════════════════════════════════════════════╝",
            )
            .await;

        let (line_tx, mut line_rx) = mpsc::channel::<Option<String>>(16);
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Completion>();

        let interface = self.interface.clone();
        let reader = tokio::spawn(async move {
            loop {
                let line = interface.receive_input().await;
                let eof = line.is_none();
                if line_tx.send(line).await.is_err() || eof {
                    break;
                }
            }
        });

        loop {
            tokio::select! {
                line = line_rx.recv() => {
                    let Some(Some(line)) = line else { break };
                    if let Flow::Exit = self.handle_line(&line, &done_tx).await {
                        reader.abort();
                        self.interface.send_output("👋 Goodbye!").await;
                        return Ok(());
                    }
                }
                Some((ticket, outcome)) = done_rx.recv() => {
                    self.handle_completion(ticket, outcome).await;
                }
            }
        }

        while self.hub.state().is_loading() {
            match done_rx.recv().await {
                Some((ticket, outcome)) => self.handle_completion(ticket, outcome).await,
                None => break,
            }
        }

        self.interface.send_output("👋 Goodbye!").await;
        Ok(())
    }

    async fn handle_line(&mut self, line: &str, done_tx: &mpsc::UnboundedSender<Completion>) -> Flow {
        let line = line.trim();
        if line.is_empty() {
            return Flow::Continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        // Bare words are commands only when nothing follows them.
        match (command, rest.is_empty()) {
            ("exit" | "quit", true) => return Flow::Exit,
            ("help", true) => self.interface.send_output(HELP).await,
            ("categories", true) => self.interface.send_output(&list_categories()).await,
            ("result", true) => match self.hub.rendered_result() {
                Some(rendered) => self.interface.send_output(&rendered.to_string()).await,
                None => self.interface.show_status("No result yet").await,
            },
            ("status", true) => self.show_status().await,
            ("clear", true) => self.interface.send_output("\x1B[2J\x1B[1;1H").await,
            ("tools", _) => self.show_tools(rest).await,
            ("use", _) => self.use_tool(rest).await,
            ("send", false) => self.submit(rest, done_tx).await,
            _ => self.submit(line, done_tx).await,
        }
        Flow::Continue
    }

    async fn show_tools(&self, filter: &str) {
        let category = if filter.is_empty() {
            Category::All
        } else {
            match filter.parse::<Category>() {
                Ok(category) => category,
                Err(e) => {
                    self.interface.send_output(&format!("❌ {}", e)).await;
                    return;
                }
            }
        };
        self.interface
            .send_output(&list_tools(self.hub.registry(), category))
            .await;
    }

    async fn use_tool(&mut self, tool_id: &str) {
        if tool_id.is_empty() {
            self.interface.send_output("Usage: use <tool-id>").await;
            return;
        }

        match self.hub.toggle(tool_id) {
            Ok(Some(tool)) => {
                self.interface
                    .send_output(&format!(
                        "🔧 {} - {}\nModel: {}\n{} (e.g. {})",
                        tool.title,
                        tool.description,
                        self.hub.dispatcher().model_for(tool.id).unwrap_or("none"),
                        tool.input_label,
                        tool.input_placeholder
                    ))
                    .await;
            }
            Ok(None) => self.interface.show_status("Tool deselected").await,
            Err(e) => {
                self.interface
                    .send_output(&format!("❌ {}. Run 'tools' to see what is available.", e))
                    .await
            }
        }
    }

    async fn show_status(&self) {
        let state = self.hub.state();
        let metrics = self.hub.metrics();
        let active = self
            .hub
            .active_tool()
            .map(|t| format!("{} ({})", t.title, t.id))
            .unwrap_or_else(|| "none".to_string());

        self.interface
            .send_output(&format!(
                "\n📊 Session Status:\n  Active tool: {}\n  Loading: {}\n  Last result: {}\n  \
                 Requests: {} submitted, {} completed, {} failed, {} discarded\n  \
                 Success rate: {:.0}%\n  \
                 Provider: {}\n",
                active,
                state.is_loading(),
                state.last_result().map(|r| r.kind()).unwrap_or("none"),
                metrics.submissions,
                metrics.completions,
                metrics.failures,
                metrics.stale_discarded,
                metrics.success_rate() * 100.0,
                self.hub.dispatcher().provider_name(),
            ))
            .await;
    }

    async fn submit(&mut self, input: &str, done_tx: &mpsc::UnboundedSender<Completion>) {
        let Some(tool) = self.hub.active_tool() else {
            self.interface
                .send_output("Select a tool first with 'use <tool-id>'")
                .await;
            return;
        };

        // Keep the pending input intact while a request is running.
        if self.hub.state().is_loading() {
            self.interface
                .show_status(&SubmitRefusal::InFlight.to_string())
                .await;
            return;
        }

        self.hub.set_input(input);
        let ticket = match self.hub.begin() {
            Ok(ticket) => ticket,
            Err(e) => {
                self.interface.show_status(&e.to_string()).await;
                return;
            }
        };

        self.interface
            .show_status(&format!("{}...", tool.button_text))
            .await;

        let dispatcher = self.hub.dispatcher();
        let done_tx = done_tx.clone();
        tokio::spawn(async move {
            let outcome = dispatcher.invoke(&ticket.tool_id, &ticket.input).await;
            let _ = done_tx.send((ticket, outcome));
        });
    }

    async fn handle_completion(
        &mut self,
        ticket: SubmissionTicket,
        outcome: Result<Option<InferenceOutput>, DispatchError>,
    ) {
        match self.hub.finish(&ticket, outcome) {
            CompletionStatus::Applied => {
                if let Some(rendered) = self.hub.rendered_result() {
                    self.interface.send_output(&format!("\n{}\n", rendered)).await;
                }
            }
            CompletionStatus::NoResult => {
                self.interface
                    .show_status("This tool is not implemented yet")
                    .await
            }
            CompletionStatus::Failed => {
                self.interface
                    .send_output("❌ Request failed, see log for details")
                    .await
            }
            CompletionStatus::Stale => {
                debug!("Ignoring result for {} after tool change", ticket.tool_id);
            }
        }
    }
}
