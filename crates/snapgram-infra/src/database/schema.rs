//! Explicit schema registry.
//!
//! Tables are listed here, in dependency order, and handed to whoever
//! materialises them. Nothing registers itself behind the scenes.

use sea_orm::sea_query::{Expr, Table, TableCreateStatement, TableDropStatement};
use sea_orm::{ConnectionTrait, DbBackend, DbErr, EntityTrait, Schema};

use snapgram_core::domain::MediaType;

use super::entity::{comment, follower, media, post, user};

/// One table of the data model: its name and the DDL that creates and drops it.
#[derive(Debug, Clone)]
pub struct EntityDef {
    pub name: String,
    pub create: TableCreateStatement,
    pub drop: TableDropStatement,
}

impl EntityDef {
    fn from_entity<E>(schema: &Schema, entity: E) -> Self
    where
        E: EntityTrait,
    {
        Self {
            name: entity.table_name().to_owned(),
            create: schema.create_table_from_entity(entity),
            drop: Table::drop().table(entity).if_exists().to_owned(),
        }
    }
}

/// The complete set of table definitions for one backend.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    entities: Vec<EntityDef>,
}

impl SchemaRegistry {
    /// Build the registry. Parents come before the tables referencing them.
    pub fn new(backend: DbBackend) -> Self {
        let schema = Schema::new(backend);

        let mut media = EntityDef::from_entity(&schema, media::Entity);
        media.create.check(
            Expr::col(media::Column::MediaType)
                .is_in(MediaType::ALL.iter().map(|ty| ty.as_str())),
        );

        let entities = vec![
            EntityDef::from_entity(&schema, user::Entity),
            EntityDef::from_entity(&schema, post::Entity),
            media,
            EntityDef::from_entity(&schema, comment::Entity),
            EntityDef::from_entity(&schema, follower::Entity),
        ];

        Self { entities }
    }

    pub fn entities(&self) -> &[EntityDef] {
        &self.entities
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.entities.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&EntityDef> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Create every table that does not exist yet.
    pub async fn create_all<C>(&self, db: &C) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let backend = db.get_database_backend();
        for def in &self.entities {
            let mut stmt = def.create.clone();
            stmt.if_not_exists();
            db.execute(backend.build(&stmt)).await?;
            tracing::info!(table = %def.name, "Table ready");
        }
        Ok(())
    }

    /// Drop every table, children first.
    pub async fn drop_all<C>(&self, db: &C) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        let backend = db.get_database_backend();
        for def in self.entities.iter().rev() {
            db.execute(backend.build(&def.drop)).await?;
            tracing::info!(table = %def.name, "Table dropped");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_ordered_parents_first() {
        let registry = SchemaRegistry::new(DbBackend::Sqlite);
        assert_eq!(
            registry.table_names(),
            vec!["user", "post", "media", "comment", "follower"]
        );
    }

    #[test]
    fn test_media_ddl_restricts_type() {
        let registry = SchemaRegistry::new(DbBackend::Sqlite);
        let media = registry.get("media").unwrap();
        let sql = DbBackend::Sqlite.build(&media.create).to_string();
        assert!(sql.contains("CHECK"), "{sql}");
        assert!(sql.contains("'IMAGE'") && sql.contains("'VIDEO'"), "{sql}");
    }

    #[test]
    fn test_follower_ddl_has_composite_key_and_cascades() {
        let registry = SchemaRegistry::new(DbBackend::Sqlite);
        let follower = registry.get("follower").unwrap();
        let sql = DbBackend::Sqlite.build(&follower.create).to_string();
        assert!(sql.contains("PRIMARY KEY (\"user_from_id\", \"user_to_id\")"), "{sql}");
        assert_eq!(sql.matches("ON DELETE CASCADE").count(), 2, "{sql}");
    }
}
