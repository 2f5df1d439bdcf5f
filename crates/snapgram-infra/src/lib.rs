//! # Snapgram Infrastructure
//!
//! Concrete implementations of the ports defined in `snapgram-core`:
//! SeaORM entities, the explicit schema registry, repositories and
//! ER-diagram rendering from a live database.
//!
//! ## Feature Flags
//!
//! - `sqlite` (default) - SQLite via SeaORM/sqlx
//! - `postgres` - PostgreSQL via SeaORM/sqlx (diagram introspection is SQLite only)

pub mod database;
pub mod diagram;

pub use database::{
    DatabaseConfig, SchemaRegistry, SqlCommentRepository, SqlFollowerRepository,
    SqlMediaRepository, SqlPostRepository, SqlUserRepository, connect,
};
pub use diagram::{DiagramError, DiagramRenderer, ErSchema, render_er};
