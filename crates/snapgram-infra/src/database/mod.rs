//! Database connection management, schema creation and repositories.

mod connections;
mod schema;
mod sql_base;
mod sql_repo;

pub mod entity;

pub use connections::{DatabaseConfig, connect};
pub use schema::{EntityDef, SchemaRegistry};
pub use sql_base::SqlBaseRepository;
pub use sql_repo::{
    SqlCommentRepository, SqlFollowerRepository, SqlMediaRepository, SqlPostRepository,
    SqlUserRepository,
};
