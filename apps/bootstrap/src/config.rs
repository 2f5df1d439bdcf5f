//! Bootstrap configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use snapgram_infra::DatabaseConfig;

/// Bootstrap configuration.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    pub database: DatabaseConfig,
    /// Where the diagram goes; the extension selects the format.
    pub diagram_output: PathBuf,
    /// Graphviz `dot` executable.
    pub dot_binary: String,
    /// Drop existing tables before creating them.
    pub fresh: bool,
    pub json_logs: bool,
}

impl BootstrapConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://example.db?mode=rwc".to_string());

        let mut database = DatabaseConfig::new(url);
        if let Some(max) = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            database.max_connections = max;
        }
        if let Some(min) = env::var("DB_MIN_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            database.min_connections = min;
        }

        Self {
            database,
            diagram_output: env::var("DIAGRAM_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("diagram.png")),
            dot_binary: env::var("GRAPHVIZ_DOT").unwrap_or_else(|_| "dot".to_string()),
            fresh: env::var("BOOTSTRAP_FRESH")
                .map(|v| flag(&v))
                .unwrap_or(false),
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }
}

fn flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod tests {
    use super::flag;

    #[test]
    fn test_flag_values() {
        assert!(flag("1"));
        assert!(flag("TRUE"));
        assert!(!flag("0"));
        assert!(!flag("false"));
        assert!(!flag(""));
    }
}
