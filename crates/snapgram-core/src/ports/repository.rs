use async_trait::async_trait;

use crate::domain::{
    Comment, Follow, Media, NewComment, NewMedia, NewPost, NewUser, Post, User,
};
use crate::error::RepoError;

/// Generic repository trait defining standard operations.
///
/// `N` is the insertion input; identifiers are assigned by the store.
#[async_trait]
pub trait BaseRepository<T, N, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity and return it with its assigned ID and defaults.
    async fn create(&self, new: N) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Owned records go with it.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, NewUser, i32> {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;

    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// All users ordered by id.
    async fn list(&self) -> Result<Vec<User>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, NewPost, i32> {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError>;
}

/// Media repository.
#[async_trait]
pub trait MediaRepository: BaseRepository<Media, NewMedia, i32> {
    async fn find_by_post_id(&self, post_id: i32) -> Result<Vec<Media>, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, NewComment, i32> {
    async fn find_by_post_id(&self, post_id: i32) -> Result<Vec<Comment>, RepoError>;

    async fn find_by_author_id(&self, author_id: i32) -> Result<Vec<Comment>, RepoError>;
}

/// The directed follower edge set.
///
/// Both directions of the relationship are answered from the same edges.
#[async_trait]
pub trait FollowerRepository: Send + Sync {
    /// Record that `follower_id` follows `followee_id`.
    /// Fails with [`RepoError::Duplicate`] if the edge already exists.
    async fn follow(&self, follower_id: i32, followee_id: i32) -> Result<Follow, RepoError>;

    /// Remove an edge. Returns `false` if it did not exist.
    async fn unfollow(&self, follower_id: i32, followee_id: i32) -> Result<bool, RepoError>;

    async fn is_following(&self, follower_id: i32, followee_id: i32) -> Result<bool, RepoError>;

    /// Users following `user_id`.
    async fn followers_of(&self, user_id: i32) -> Result<Vec<User>, RepoError>;

    /// Users that `user_id` follows.
    async fn following_of(&self, user_id: i32) -> Result<Vec<User>, RepoError>;
}
