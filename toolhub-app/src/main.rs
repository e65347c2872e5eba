use anyhow::{bail, Context, Result};
use std::process::ExitCode;
use std::sync::Arc;
use toolhub_app::commands::{failure_line, list_categories, list_tools, run_once, show_config};
use toolhub_app::config::{Config, TOKEN_ENVS};
use toolhub_app::{api_token, logging, Hub, InteractiveSession};
use toolhub_core::Category;
use toolhub_interfaces::TerminalInterface;
use toolhub_providers::HuggingFaceProvider;
use toolhub_tools::{Dispatcher, ToolRegistry};
use tracing::{info, warn};

const USAGE: &str = "Usage: toolhub [COMMAND]

Commands:
  (none)                    Start an interactive session
  list [category]           List tools, optionally filtered by category
  categories                List category filters
  run <tool-id> <input...>  Run one tool once and print the result
  config show               Print the effective configuration
  help                      Show this message";

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", failure_line(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Vec<String>) -> Result<()> {
    let config = Config::load()
        .with_context(|| format!("Failed to load {}", Config::path().display()))?;
    logging::init(&config.log_level);

    let token = api_token();
    let command = args.first().map(String::as_str);

    match command {
        None => {
            if token.is_none() {
                warn!(
                    "No API token found in {}; requests will be sent unauthenticated",
                    TOKEN_ENVS.join(" or ")
                );
            }
            let hub = build_hub(&config, token)?;
            info!("Starting interactive session");
            let mut session = InteractiveSession::new(hub, Arc::new(TerminalInterface::new()));
            session.run().await
        }
        Some("list") => {
            let category = match args.get(1) {
                Some(filter) => filter.parse::<Category>()?,
                None => Category::All,
            };
            println!("{}", list_tools(&ToolRegistry::builtin(), category));
            Ok(())
        }
        Some("categories") => {
            println!("{}", list_categories());
            Ok(())
        }
        Some("run") => {
            let Some(tool_id) = args.get(1) else {
                bail!("Usage: toolhub run <tool-id> <input...>");
            };
            let input = args[2..].join(" ");
            if token.is_none() {
                warn!("No API token found in {}", TOKEN_ENVS.join(" or "));
            }
            let mut hub = build_hub(&config, token)?;
            let rendered = run_once(&mut hub, tool_id, &input).await?;
            println!("{}", rendered);
            Ok(())
        }
        Some("config") if args.get(1).map(String::as_str) == Some("show") => {
            print!("{}", show_config(&config, token.is_some()));
            println!();
            Ok(())
        }
        Some("help") | Some("--help") | Some("-h") => {
            println!("{}", USAGE);
            Ok(())
        }
        Some(other) => {
            eprintln!("{}", USAGE);
            bail!("Unknown command: {}", other)
        }
    }
}

fn build_hub(config: &Config, token: Option<String>) -> Result<Hub> {
    let provider = HuggingFaceProvider::with_timeout(
        config.api_base_url.clone(),
        token,
        config.request_timeout(),
    )?;
    let dispatcher = Dispatcher::with_builtin(Arc::new(provider))
        .with_artifacts_dir(config.artifacts_dir.clone());
    Ok(Hub::new(ToolRegistry::builtin(), Arc::new(dispatcher)))
}
