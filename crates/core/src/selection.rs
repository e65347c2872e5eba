//! Selection state: active tool, inputs, loading flag and the result slot.
//!
//! Every submission is tagged with the generation it started in. Changing the
//! tool or starting another submission bumps the generation, so a completion
//! carrying an older ticket is stale and is dropped without touching state.

use crate::output::InferenceOutput;
use crate::types::InputType;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRefusal {
    #[error("No tool selected")]
    NoActiveTool,
    #[error("Input is empty")]
    EmptyInput,
    #[error("A request is already in flight")]
    InFlight,
}

/// Ties a dispatched request back to the state that started it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub seq: u64,
    pub tool_id: String,
    pub input: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl SubmissionTicket {
    pub fn elapsed(&self) -> chrono::Duration {
        chrono::Utc::now() - self.started_at
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    /// Result stored in the slot.
    Applied,
    /// Call finished without a result (unknown tool); slot untouched.
    NoResult,
    /// Call failed; slot untouched.
    Failed,
    /// Ticket is no longer current; nothing changed.
    Stale,
}

#[derive(Debug, Default)]
pub struct SelectionState {
    active_tool: Option<String>,
    input_text: String,
    input_image_url: String,
    is_loading: bool,
    last_result: Option<InferenceOutput>,
    generation: u64,
    in_flight: Option<u64>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tool(&self) -> Option<&str> {
        self.active_tool.as_deref()
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn input_image_url(&self) -> &str {
        &self.input_image_url
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_result(&self) -> Option<&InferenceOutput> {
        self.last_result.as_ref()
    }

    /// Switch tools. Inputs and result are cleared and any pending submission
    /// becomes stale, even when `tool_id` is the current tool.
    pub fn select_tool(&mut self, tool_id: Option<&str>) {
        self.active_tool = tool_id.map(str::to_string);
        self.input_text.clear();
        self.input_image_url.clear();
        self.last_result = None;
        self.generation += 1;
        self.in_flight = None;
        self.is_loading = false;
    }

    /// Selecting the active tool again deselects it. Returns the new active tool.
    pub fn toggle_tool(&mut self, tool_id: &str) -> Option<&str> {
        if self.active_tool.as_deref() == Some(tool_id) {
            self.select_tool(None);
        } else {
            self.select_tool(Some(tool_id));
        }
        self.active_tool()
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn set_input_image_url(&mut self, url: impl Into<String>) {
        self.input_image_url = url.into();
    }

    /// Route `value` into the field matching the tool's input type.
    pub fn set_input(&mut self, input_type: InputType, value: impl Into<String>) {
        match input_type {
            InputType::Text => self.set_input_text(value),
            InputType::Image => self.set_input_image_url(value),
        }
    }

    /// Start a submission for the active tool, reading the field that matches
    /// `input_type`.
    pub fn begin_submission(
        &mut self,
        input_type: InputType,
    ) -> Result<SubmissionTicket, SubmitRefusal> {
        if self.is_loading {
            return Err(SubmitRefusal::InFlight);
        }
        let tool_id = self
            .active_tool
            .clone()
            .ok_or(SubmitRefusal::NoActiveTool)?;

        let input = match input_type {
            InputType::Text => &self.input_text,
            InputType::Image => &self.input_image_url,
        };
        if input.is_empty() {
            return Err(SubmitRefusal::EmptyInput);
        }
        let input = input.clone();

        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.is_loading = true;

        Ok(SubmissionTicket {
            seq: self.generation,
            tool_id,
            input,
            started_at: chrono::Utc::now(),
        })
    }

    fn is_current(&self, ticket: &SubmissionTicket) -> bool {
        self.in_flight == Some(ticket.seq)
    }

    /// Finish a successful call. A stale ticket leaves everything untouched.
    pub fn complete(
        &mut self,
        ticket: &SubmissionTicket,
        output: Option<InferenceOutput>,
    ) -> CompletionStatus {
        if !self.is_current(ticket) {
            return CompletionStatus::Stale;
        }
        self.in_flight = None;
        self.is_loading = false;

        match output {
            Some(output) => {
                self.last_result = Some(output);
                CompletionStatus::Applied
            }
            None => CompletionStatus::NoResult,
        }
    }

    /// Finish a failed call: clear loading, keep the previous result.
    pub fn fail(&mut self, ticket: &SubmissionTicket) -> CompletionStatus {
        if !self.is_current(ticket) {
            return CompletionStatus::Stale;
        }
        self.in_flight = None;
        self.is_loading = false;
        CompletionStatus::Failed
    }
}
