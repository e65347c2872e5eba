//! Text produced by the one-shot subcommands, shared with the interactive session.

use crate::config::Config;
use crate::hub::Hub;
use anyhow::{bail, Result};
use toolhub_core::{Category, CompletionStatus};
use toolhub_tools::ToolRegistry;

pub fn list_tools(registry: &ToolRegistry, category: Category) -> String {
    let tools = registry.filter(category);
    if tools.is_empty() {
        return format!("No tools in category '{}'", category);
    }

    let width = tools.iter().map(|t| t.id.len()).max().unwrap_or(0);
    tools
        .iter()
        .map(|t| {
            format!(
                "  {:<width$}  [{}] {} - {}",
                t.id,
                t.category,
                t.title,
                t.description,
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn list_categories() -> String {
    Category::FILTERS
        .iter()
        .map(|c| format!("  {:<9} {}", c.as_str(), c.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn show_config(config: &Config, token_present: bool) -> String {
    let yaml = serde_yaml::to_string(config).unwrap_or_default();
    format!(
        "{}api_token: {}",
        yaml,
        if token_present { "<set>" } else { "<not set>" }
    )
}

/// The single line printed when a command fails, context chain included.
pub fn failure_line(error: &anyhow::Error) -> String {
    format!("❌ {:#}", error)
}

/// Select `tool_id`, submit `input` once and return the rendered result.
pub async fn run_once(hub: &mut Hub, tool_id: &str, input: &str) -> Result<String> {
    hub.select(tool_id);
    hub.set_input(input);

    match hub.submit().await? {
        CompletionStatus::Applied => Ok(hub
            .rendered_result()
            .map(|r| r.to_string())
            .unwrap_or_default()),
        CompletionStatus::NoResult => bail!("Tool '{}' is not implemented", tool_id),
        CompletionStatus::Failed => bail!("Request to '{}' failed, see log for details", tool_id),
        CompletionStatus::Stale => bail!("Result for '{}' was superseded", tool_id),
    }
}
