use std::sync::Once;

/// Crate-specific filter variable, consulted before `RUST_LOG`.
pub const LOG_VAR: &str = "PROGRESSIVE_LOG";

/// Quiet dependencies, this crate at info.
pub const DEFAULT_FILTER: &str = "warn,progressive_render=info";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter syntax. Wins over the environment when set.
    pub filter: Option<String>,
    /// Millisecond timestamps on each record. Off keeps pass timings easy to diff.
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            timestamps: true,
        }
    }
}

/// Picks the filter: explicit config, then `PROGRESSIVE_LOG`, then `RUST_LOG`,
/// then [`DEFAULT_FILTER`]. Blank values are skipped.
fn resolve_filter<F>(explicit: Option<&str>, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |value: String| (!value.trim().is_empty()).then_some(value);

    explicit
        .map(str::to_string)
        .and_then(non_blank)
        .or_else(|| lookup(LOG_VAR).and_then(non_blank))
        .or_else(|| lookup("RUST_LOG").and_then(non_blank))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

static INIT: Once = Once::new();

/// Installs the global `env_logger`. Later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(config.filter.as_deref(), |key| std::env::var(key).ok());
        let mut builder = env_logger::Builder::new();

        builder.parse_filters(&filter);

        if config.timestamps {
            builder.format_timestamp_millis();
        } else {
            builder.format_timestamp(None);
        }

        // A test harness may already own the global logger.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized with filter {:?}", filter);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_filter_when_nothing_is_set() {
        assert_eq!(resolve_filter(None, |_| None), DEFAULT_FILTER);
    }

    #[test]
    fn test_crate_variable_wins_over_rust_log() {
        let lookup = lookup_from(&[(LOG_VAR, "debug"), ("RUST_LOG", "trace")]);

        assert_eq!(resolve_filter(None, lookup), "debug");
    }

    #[test]
    fn test_rust_log_is_the_fallback() {
        let lookup = lookup_from(&[(LOG_VAR, "  "), ("RUST_LOG", "trace")]);

        assert_eq!(resolve_filter(None, lookup), "trace");
    }

    #[test]
    fn test_explicit_filter_wins() {
        let lookup = lookup_from(&[(LOG_VAR, "debug")]);

        assert_eq!(resolve_filter(Some("error"), lookup), "error");
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging(LoggingConfig {
            filter: Some("warn".to_string()),
            timestamps: false,
        });
        init_logging(LoggingConfig::default());

        assert!(INIT.is_completed());
    }
}
