//! SeaORM entities, one module per table.

pub mod comment;
pub mod follower;
pub mod media;
pub mod post;
pub mod user;
