//! Media entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;
use snapgram_core::domain::MediaType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "media")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "type")]
    pub media_type: MediaType,
    #[sea_orm(column_type = "String(StringLen::N(250))")]
    pub url: String,
    pub post_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::post::Entity",
        from = "Column::PostId",
        to = "super::post::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for snapgram_core::domain::Media {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            media_type: model.media_type,
            url: model.url,
            post_id: model.post_id,
        }
    }
}

impl From<snapgram_core::domain::NewMedia> for ActiveModel {
    fn from(media: snapgram_core::domain::NewMedia) -> Self {
        Self {
            media_type: Set(media.media_type),
            url: Set(media.url),
            post_id: Set(media.post_id),
            ..Default::default()
        }
    }
}
