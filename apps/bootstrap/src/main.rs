//! # Snapgram Bootstrap
//!
//! One-shot tool: materialise the schema into the configured database,
//! then render an entity-relationship diagram from it.

use anyhow::Context;
use sea_orm::ConnectionTrait;
use snapgram_infra::{DiagramRenderer, SchemaRegistry, connect};

mod config;

use config::BootstrapConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = BootstrapConfig::from_env();
    init_tracing(config.json_logs);

    run(&config).await
}

/// Create the tables, then render the diagram. A diagram failure is fatal.
async fn run(config: &BootstrapConfig) -> anyhow::Result<()> {
    let db = connect(&config.database)
        .await
        .with_context(|| format!("connecting to {}", config.database.url))?;

    let registry = SchemaRegistry::new(db.get_database_backend());
    if config.fresh {
        registry
            .drop_all(&db)
            .await
            .context("dropping existing tables")?;
    }
    registry.create_all(&db).await.context("creating tables")?;
    tracing::info!(
        database = %config.database.url,
        tables = ?registry.table_names(),
        "Database created"
    );

    let renderer = DiagramRenderer::new(config.dot_binary.clone());
    if let Err(e) = renderer.render(&db, &config.diagram_output).await {
        tracing::error!(error = %e, "Diagram generation failed");
        return Err(e).context("rendering ER diagram");
    }
    tracing::info!(output = %config.diagram_output.display(), "Diagram generated");

    Ok(())
}

fn init_tracing(json_logs: bool) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bootstrap=debug,snapgram_infra=debug"));

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

#[cfg(test)]
mod tests {
    use snapgram_infra::DatabaseConfig;

    use super::*;

    fn config(output: &str, dot_binary: &str) -> BootstrapConfig {
        BootstrapConfig {
            database: DatabaseConfig::sqlite_memory(),
            diagram_output: std::env::temp_dir().join(output),
            dot_binary: dot_binary.to_string(),
            fresh: false,
            json_logs: false,
        }
    }

    #[tokio::test]
    async fn test_run_fails_when_diagram_backend_is_missing() {
        let config = config(
            &format!("snapgram-bootstrap-{}.png", std::process::id()),
            "snapgram-no-such-dot",
        );

        let result = run(&config).await;

        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("snapgram-no-such-dot"), "{err:#}");
    }

    #[tokio::test]
    async fn test_run_writes_dot_diagram() {
        let config = config(
            &format!("snapgram-bootstrap-{}.dot", std::process::id()),
            "snapgram-no-such-dot",
        );

        run(&config).await.unwrap();

        let output = &config.diagram_output;
        let source = tokio::fs::read_to_string(output).await.unwrap();
        let _ = tokio::fs::remove_file(output).await;
        assert!(source.starts_with("digraph er {"));
        assert!(source.contains("\"post\":\"user_id\" -> \"user\":\"id\""));
    }
}
