//! Front-end controller: owns the selection state and drives the dispatcher.

use std::sync::Arc;
use thiserror::Error;
use toolhub_core::{
    CompletionStatus, InferenceOutput, InputType, Metrics, MetricsSnapshot, SelectionState,
    SubmissionTicket, SubmitRefusal, ToolDescriptor,
};
use toolhub_interfaces::{render, Rendered};
use toolhub_tools::{DispatchError, Dispatcher, ToolRegistry};
use tracing::{debug, error, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HubError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

pub struct Hub {
    registry: ToolRegistry,
    dispatcher: Arc<Dispatcher>,
    state: SelectionState,
    metrics: Arc<Metrics>,
}

impl Hub {
    pub fn new(registry: ToolRegistry, dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            registry,
            dispatcher,
            state: SelectionState::new(),
            metrics: Metrics::new(),
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        self.dispatcher.clone()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    pub fn active_tool(&self) -> Option<&'static ToolDescriptor> {
        self.state.active_tool().and_then(|id| self.registry.get(id))
    }

    /// Select a catalog tool, or deselect it when it is already active.
    pub fn toggle(&mut self, tool_id: &str) -> Result<Option<&'static ToolDescriptor>, HubError> {
        if self.registry.get(tool_id).is_none() {
            return Err(HubError::UnknownTool(tool_id.to_string()));
        }
        self.state.toggle_tool(tool_id);
        Ok(self.active_tool())
    }

    /// Make `tool_id` active without checking the catalog. Ids the dispatcher
    /// does not know produce no result.
    pub fn select(&mut self, tool_id: &str) {
        self.state.select_tool(Some(tool_id));
    }

    fn input_type(&self) -> InputType {
        self.active_tool()
            .map(|t| t.input_type)
            .unwrap_or(InputType::Text)
    }

    /// Store `value` in the field the active tool reads.
    pub fn set_input(&mut self, value: impl Into<String>) {
        let input_type = self.input_type();
        self.state.set_input(input_type, value);
    }

    pub fn begin(&mut self) -> Result<SubmissionTicket, SubmitRefusal> {
        let ticket = self.state.begin_submission(self.input_type())?;
        self.metrics.inc_submissions();
        debug!(
            "Submission {} started for {}",
            ticket.seq, ticket.tool_id
        );
        Ok(ticket)
    }

    /// Apply a finished call. Failures are logged here and never propagate.
    pub fn finish(
        &mut self,
        ticket: &SubmissionTicket,
        outcome: Result<Option<InferenceOutput>, DispatchError>,
    ) -> CompletionStatus {
        let status = match outcome {
            Ok(output) => {
                match output.as_ref() {
                    None => {
                        warn!("Tool {} is not implemented", ticket.tool_id);
                        self.metrics.inc_unknown_tools();
                    }
                    Some(result) => {
                        if let Some(resource) = result.as_binary() {
                            debug!(
                                "Stored {} bytes of {} at {}",
                                resource.len(),
                                resource.mime(),
                                resource.locator()
                            );
                        }
                    }
                }
                self.state.complete(ticket, output)
            }
            Err(e) => {
                error!(tool = e.tool(), "Error: {}", e);
                self.state.fail(ticket)
            }
        };

        debug!(
            "Submission {} ({}) finished after {} ms",
            ticket.seq,
            ticket.tool_id,
            ticket.elapsed().num_milliseconds()
        );

        match status {
            CompletionStatus::Stale => {
                debug!(
                    "Discarding stale result of submission {} ({})",
                    ticket.seq, ticket.tool_id
                );
                self.metrics.inc_stale_discarded();
            }
            CompletionStatus::Failed => self.metrics.inc_failures(),
            CompletionStatus::Applied | CompletionStatus::NoResult => {
                self.metrics.inc_completions()
            }
        }
        status
    }

    /// Submit the current input and wait for the result.
    pub async fn submit(&mut self) -> Result<CompletionStatus, SubmitRefusal> {
        let ticket = self.begin()?;
        let outcome = self.dispatcher.invoke(&ticket.tool_id, &ticket.input).await;
        Ok(self.finish(&ticket, outcome))
    }

    pub fn rendered_result(&self) -> Option<Rendered> {
        self.state.last_result().map(render)
    }
}
