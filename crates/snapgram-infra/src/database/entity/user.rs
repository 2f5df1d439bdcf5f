//! User entity for SeaORM.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, column_type = "String(StringLen::N(80))")]
    pub username: String,
    #[sea_orm(column_name = "firstname", column_type = "String(StringLen::N(80))", nullable)]
    pub first_name: Option<String>,
    #[sea_orm(column_name = "lastname", column_type = "String(StringLen::N(80))", nullable)]
    pub last_name: Option<String>,
    #[sea_orm(unique, column_type = "String(StringLen::N(120))")]
    pub email: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            if self.is_active.is_not_set() {
                self.is_active = Set(true);
            }
            if self.created_at.is_not_set() {
                self.created_at = Set(Utc::now());
            }
        }
        Ok(self)
    }
}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for snapgram_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            bio: model.bio,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}

/// Conversion from a registration to SeaORM ActiveModel.
/// Unset optional defaults stay `NotSet` and are filled in by `before_save`.
impl From<snapgram_core::domain::NewUser> for ActiveModel {
    fn from(user: snapgram_core::domain::NewUser) -> Self {
        Self {
            username: Set(user.username),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
            bio: Set(user.bio),
            is_active: user.is_active.map(Set).unwrap_or_default(),
            created_at: user.created_at.map(Set).unwrap_or_default(),
            ..Default::default()
        }
    }
}
