use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the stderr subscriber once. `RUST_LOG` takes precedence over `level`.
pub fn init(level: &str) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(default_directives(parse_level(level)))
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    });
}

fn default_directives(level: Level) -> String {
    format!(
        "warn,toolhub={level},toolhub_app={level},toolhub_core={level},toolhub_tools={level},\
         toolhub_providers={level},hyper=warn,reqwest=warn",
        level = level
    )
}

pub fn parse_level(level: &str) -> Level {
    match level.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to WARN. Valid levels: trace, debug, info, warn, error",
                level
            );
            Level::WARN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level(" info "), Level::INFO);
        assert_eq!(parse_level("verbose"), Level::WARN);
    }

    #[test]
    fn test_directives_cover_workspace_crates() {
        let directives = default_directives(Level::INFO);
        assert!(directives.contains("toolhub_tools=INFO"));
        assert!(directives.contains("reqwest=warn"));
    }
}
