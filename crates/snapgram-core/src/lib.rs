//! # Snapgram Core
//!
//! The domain layer of the Snapgram data model: users, posts, media
//! attachments, comments and the directed follower graph.
//! This crate contains no infrastructure; storage lives behind the ports.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
