//! Comment entity for SeaORM.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub comment_text: String,
    pub author_id: i32,
    pub post_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Author,
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Post,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && self.created_at.is_not_set() {
            self.created_at = Set(Utc::now());
        }
        Ok(self)
    }
}

impl From<Model> for snapgram_core::domain::Comment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            comment_text: model.comment_text,
            author_id: model.author_id,
            post_id: model.post_id,
            created_at: model.created_at,
        }
    }
}

impl From<snapgram_core::domain::NewComment> for ActiveModel {
    fn from(comment: snapgram_core::domain::NewComment) -> Self {
        Self {
            comment_text: Set(comment.comment_text),
            author_id: Set(comment.author_id),
            post_id: Set(comment.post_id),
            created_at: comment.created_at.map(Set).unwrap_or_default(),
            ..Default::default()
        }
    }
}
