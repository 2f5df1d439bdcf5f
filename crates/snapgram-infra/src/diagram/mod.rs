//! Entity-relationship diagrams rendered from a live database.
//!
//! The schema is read back out of the database (not from the entity
//! definitions), so the picture shows what was actually materialised.

mod dot;
mod introspect;

use std::path::Path;
use std::process::Stdio;

use sea_orm::{ConnectionTrait, DbErr};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

pub use dot::to_dot;
pub use introspect::introspect;

/// Diagram generation errors.
#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("Schema introspection is not supported for {0} databases")]
    UnsupportedBackend(String),

    #[error("Schema introspection failed: {0}")]
    Introspection(#[from] DbErr),

    #[error("Rendering backend '{0}' not found (is Graphviz installed?)")]
    BackendMissing(String),

    #[error("Rendering backend exited with {status}: {stderr}")]
    Backend { status: String, stderr: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A table as found in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErTable {
    pub name: String,
    pub columns: Vec<ErColumn>,
    pub foreign_keys: Vec<ErForeignKey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErColumn {
    pub name: String,
    pub sql_type: String,
    pub nullable: bool,
    pub primary_key: bool,
    pub unique: bool,
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErForeignKey {
    pub column: String,
    pub references_table: String,
    pub references_column: String,
    pub on_delete: String,
}

/// Every user table of a database, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErSchema {
    pub tables: Vec<ErTable>,
}

impl ErSchema {
    pub fn table(&self, name: &str) -> Option<&ErTable> {
        self.tables.iter().find(|t| t.name == name)
    }
}

/// Output kind, picked from the file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
enum OutputFormat {
    /// Graphviz source, written as-is.
    Dot,
    /// Anything Graphviz can emit via `-T<format>`.
    Rendered(String),
}

impl OutputFormat {
    fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
        {
            Some(ext) if ext == "dot" || ext == "gv" => Self::Dot,
            Some(ext) => Self::Rendered(ext),
            None => Self::Rendered("png".to_string()),
        }
    }
}

/// Renders ER diagrams through the Graphviz `dot` executable.
#[derive(Debug, Clone)]
pub struct DiagramRenderer {
    dot_binary: String,
}

impl Default for DiagramRenderer {
    fn default() -> Self {
        Self::new("dot")
    }
}

impl DiagramRenderer {
    pub fn new(dot_binary: impl Into<String>) -> Self {
        Self {
            dot_binary: dot_binary.into(),
        }
    }

    /// Introspect `db` and write the diagram to `output`.
    pub async fn render<C>(&self, db: &C, output: &Path) -> Result<(), DiagramError>
    where
        C: ConnectionTrait,
    {
        let schema = introspect(db).await?;
        let source = to_dot(&schema);
        tracing::debug!(tables = schema.tables.len(), "Schema introspected");

        match OutputFormat::from_path(output) {
            OutputFormat::Dot => tokio::fs::write(output, source).await?,
            OutputFormat::Rendered(format) => self.run_dot(&source, &format, output).await?,
        }

        tracing::info!(output = %output.display(), "Diagram written");
        Ok(())
    }

    async fn run_dot(&self, source: &str, format: &str, output: &Path) -> Result<(), DiagramError> {
        let mut child = Command::new(&self.dot_binary)
            .arg(format!("-T{format}"))
            .arg("-o")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => DiagramError::BackendMissing(self.dot_binary.clone()),
                _ => DiagramError::Io(e),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(source.as_bytes()).await?;
        }

        let result = child.wait_with_output().await?;
        if !result.status.success() {
            return Err(DiagramError::Backend {
                status: result.status.to_string(),
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

/// Render the diagram of `db` to `output` with the default `dot` executable.
pub async fn render_er<C>(db: &C, output: &Path) -> Result<(), DiagramError>
where
    C: ConnectionTrait,
{
    DiagramRenderer::default().render(db, output).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{DatabaseConfig, SchemaRegistry, connect};
    use sea_orm::DbBackend;

    async fn materialised() -> sea_orm::DbConn {
        let db = connect(&DatabaseConfig::sqlite_memory()).await.unwrap();
        SchemaRegistry::new(DbBackend::Sqlite)
            .create_all(&db)
            .await
            .unwrap();
        db
    }

    #[tokio::test]
    async fn test_render_dot_file() {
        let db = materialised().await;
        let output = std::env::temp_dir().join(format!("snapgram-er-{}.dot", std::process::id()));

        render_er(&db, &output).await.unwrap();

        let source = tokio::fs::read_to_string(&output).await.unwrap();
        let _ = tokio::fs::remove_file(&output).await;
        assert!(source.contains("\"follower\":\"user_to_id\" -> \"user\":\"id\""));
        assert!(source.contains("\"media\":\"post_id\" -> \"post\":\"id\""));
    }

    #[tokio::test]
    async fn test_missing_backend_is_reported() {
        let db = materialised().await;
        let output = std::env::temp_dir().join(format!("snapgram-er-{}.png", std::process::id()));

        let result = DiagramRenderer::new("snapgram-no-such-dot-binary")
            .render(&db, &output)
            .await;

        assert!(matches!(result, Err(DiagramError::BackendMissing(_))));
    }

    #[test]
    fn test_output_format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("er.dot")), OutputFormat::Dot);
        assert_eq!(OutputFormat::from_path(Path::new("er.GV")), OutputFormat::Dot);
        assert_eq!(
            OutputFormat::from_path(Path::new("diagram.png")),
            OutputFormat::Rendered("png".to_string())
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("diagram")),
            OutputFormat::Rendered("png".to_string())
        );
    }
}
