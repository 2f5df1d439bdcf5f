//! SeaORM repository implementations.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DbConn, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

use snapgram_core::domain::{Comment, Follow, Media, Post, User};
use snapgram_core::error::RepoError;
use snapgram_core::ports::{
    CommentRepository, FollowerRepository, MediaRepository, PostRepository, UserRepository,
};

use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::follower::{self, Entity as FollowerEntity};
use super::entity::media::{self, Entity as MediaEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::sql_base::{SqlBaseRepository, map_db_err};

/// User repository.
pub type SqlUserRepository = SqlBaseRepository<UserEntity>;

/// Post repository.
pub type SqlPostRepository = SqlBaseRepository<PostEntity>;

/// Media repository.
pub type SqlMediaRepository = SqlBaseRepository<MediaEntity>;

/// Comment repository.
pub type SqlCommentRepository = SqlBaseRepository<CommentEntity>;

/// Mask an email for logging to avoid PII in logs.
fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = match local.chars().next() {
                Some(first) if local.len() > 1 => format!("{first}***"),
                _ => "***".to_string(),
            };
            format!("{masked_local}{domain}")
        }
        None => "***".to_string(),
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(username, "Finding user by username");

        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<User>, RepoError> {
        let result = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl PostRepository for SqlPostRepository {
    async fn find_by_user_id(&self, user_id: i32) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_asc(post::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl MediaRepository for SqlMediaRepository {
    async fn find_by_post_id(&self, post_id: i32) -> Result<Vec<Media>, RepoError> {
        let result = MediaEntity::find()
            .filter(media::Column::PostId.eq(post_id))
            .order_by_asc(media::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CommentRepository for SqlCommentRepository {
    async fn find_by_post_id(&self, post_id: i32) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_author_id(&self, author_id: i32) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::AuthorId.eq(author_id))
            .order_by_asc(comment::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

/// Follower edge set backed by the `follower` table.
pub struct SqlFollowerRepository {
    db: Arc<DbConn>,
}

impl SqlFollowerRepository {
    pub fn new(db: Arc<DbConn>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FollowerRepository for SqlFollowerRepository {
    async fn follow(&self, follower_id: i32, followee_id: i32) -> Result<Follow, RepoError> {
        let edge = Follow::new(follower_id, followee_id);
        tracing::debug!(follower_id, followee_id, "Recording follow");

        FollowerEntity::insert(follower::ActiveModel::from(edge))
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(edge)
    }

    async fn unfollow(&self, follower_id: i32, followee_id: i32) -> Result<bool, RepoError> {
        let result = FollowerEntity::delete_by_id((follower_id, followee_id))
            .exec(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected > 0)
    }

    async fn is_following(&self, follower_id: i32, followee_id: i32) -> Result<bool, RepoError> {
        let count = FollowerEntity::find_by_id((follower_id, followee_id))
            .count(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn followers_of(&self, user_id: i32) -> Result<Vec<User>, RepoError> {
        let result = UserEntity::find()
            .join(JoinType::InnerJoin, follower::Relation::Follower.def().rev())
            .filter(follower::Column::UserToId.eq(user_id))
            .order_by_asc(user::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn following_of(&self, user_id: i32) -> Result<Vec<User>, RepoError> {
        let result = UserEntity::find()
            .join(JoinType::InnerJoin, follower::Relation::Followee.def().rev())
            .filter(follower::Column::UserFromId.eq(user_id))
            .order_by_asc(user::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::mask_email;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("ana@x.com"), "a***@x.com");
        assert_eq!(mask_email("a@x.com"), "***@x.com");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
