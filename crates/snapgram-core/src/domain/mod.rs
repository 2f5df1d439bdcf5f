//! Domain entities - the core business objects.

mod comment;
mod follow;
mod media;
mod post;
mod user;

pub use comment::{Comment, NewComment};
pub use follow::Follow;
pub use media::{Media, MediaType, NewMedia};
pub use post::{NewPost, Post};
pub use user::{NewUser, User};
