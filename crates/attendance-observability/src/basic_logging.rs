use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format for log lines, chosen by `LOG_FORMAT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

/// Default filter directive when `RUST_LOG` is unset.
pub fn default_directive(log_level: &str) -> String {
    format!("attendance={log_level},attendance_db={log_level},sqlx=warn")
}

/// Initialize console logging on stderr.
///
/// # Configuration
///
/// - **Filter**: `RUST_LOG` if set, otherwise `LOG_LEVEL` (default "info")
///   for the attendance crates with `sqlx` held at warn
/// - **Format**: `LOG_FORMAT=json` for JSON lines, compact text otherwise
pub fn init_basic_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let format = LogFormat::from_env_value(std::env::var("LOG_FORMAT").ok().as_deref());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&log_level)));

    let console_layer = match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_filter(env_filter)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_filter(env_filter)
            .boxed(),
    };

    tracing_subscriber::registry().with(console_layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_format_is_case_insensitive() {
        assert_eq!(LogFormat::from_env_value(Some("JSON")), LogFormat::Json);
        assert_eq!(LogFormat::from_env_value(Some(" json ")), LogFormat::Json);
    }

    #[test]
    fn anything_else_is_compact() {
        assert_eq!(LogFormat::from_env_value(None), LogFormat::Compact);
        assert_eq!(LogFormat::from_env_value(Some("pretty")), LogFormat::Compact);
    }

    #[test]
    fn default_directive_parses() {
        let directive = default_directive("debug");
        assert!(directive.contains("attendance=debug"));
        EnvFilter::try_new(directive).unwrap();
    }
}
