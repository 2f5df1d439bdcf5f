//! Follower association table for SeaORM.
//!
//! Each row is one directed edge; the composite primary key keeps edges unique.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "follower")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_from_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_to_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserFromId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade",
        fk_name = "fk-follower-user_from_id"
    )]
    Follower,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserToId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade",
        fk_name = "fk-follower-user_to_id"
    )]
    Followee,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for snapgram_core::domain::Follow {
    fn from(model: Model) -> Self {
        Self::new(model.user_from_id, model.user_to_id)
    }
}

impl From<snapgram_core::domain::Follow> for ActiveModel {
    fn from(edge: snapgram_core::domain::Follow) -> Self {
        Self {
            user_from_id: Set(edge.follower_id),
            user_to_id: Set(edge.followee_id),
        }
    }
}
