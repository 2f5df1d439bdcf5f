//! Read the schema back from a live SQLite database.
//!
//! Uses `sqlite_master` and the table-valued pragma functions
//! (`pragma_table_info`, `pragma_index_list`, `pragma_index_info`,
//! `pragma_foreign_key_list`).

use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DbBackend, DbErr, Statement, Value};

use super::{DiagramError, ErColumn, ErForeignKey, ErSchema, ErTable};

/// Introspect every user table of the database behind `db`.
pub async fn introspect<C>(db: &C) -> Result<ErSchema, DiagramError>
where
    C: ConnectionTrait,
{
    let backend = db.get_database_backend();
    if backend != DbBackend::Sqlite {
        return Err(DiagramError::UnsupportedBackend(format!("{backend:?}")));
    }

    let rows = db
        .query_all(Statement::from_string(
            DbBackend::Sqlite,
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
             ORDER BY name",
        ))
        .await?;

    let mut tables = Vec::with_capacity(rows.len());
    for row in rows {
        let name: String = row.try_get("", "name")?;
        tables.push(introspect_table(db, name).await?);
    }

    Ok(ErSchema { tables })
}

fn with_table(sql: &str, table: &str) -> Statement {
    Statement::from_sql_and_values(DbBackend::Sqlite, sql, [Value::from(table)])
}

async fn introspect_table<C>(db: &C, name: String) -> Result<ErTable, DbErr>
where
    C: ConnectionTrait,
{
    let unique = unique_columns(db, &name).await?;

    let rows = db
        .query_all(with_table(
            "SELECT name, type, \"notnull\", dflt_value, pk \
             FROM pragma_table_info(?) ORDER BY cid",
            &name,
        ))
        .await?;

    let mut columns = Vec::with_capacity(rows.len());
    for row in rows {
        let column: String = row.try_get("", "name")?;
        let not_null: i32 = row.try_get("", "notnull")?;
        let pk: i32 = row.try_get("", "pk")?;
        columns.push(ErColumn {
            unique: unique.contains(&column),
            name: column,
            sql_type: row.try_get("", "type")?,
            // SQLite reports INTEGER PRIMARY KEY as nullable; it never is.
            nullable: not_null == 0 && pk == 0,
            primary_key: pk > 0,
            default: row.try_get("", "dflt_value")?,
        });
    }

    let rows = db
        .query_all(with_table(
            "SELECT \"table\", \"from\", \"to\", on_delete \
             FROM pragma_foreign_key_list(?) ORDER BY id, seq",
            &name,
        ))
        .await?;

    let mut foreign_keys = Vec::with_capacity(rows.len());
    for row in rows {
        let references_table: String = row.try_get("", "table")?;
        let references_column: Option<String> = row.try_get("", "to")?;
        foreign_keys.push(ErForeignKey {
            column: row.try_get("", "from")?,
            // A missing target column means the referenced primary key.
            references_column: references_column.unwrap_or_else(|| "id".to_string()),
            references_table,
            on_delete: row.try_get("", "on_delete")?,
        });
    }

    Ok(ErTable {
        name,
        columns,
        foreign_keys,
    })
}

/// Columns covered on their own by a UNIQUE constraint.
async fn unique_columns<C>(db: &C, table: &str) -> Result<HashSet<String>, DbErr>
where
    C: ConnectionTrait,
{
    let indexes = db
        .query_all(with_table(
            "SELECT name FROM pragma_index_list(?) WHERE \"unique\" = 1 AND origin = 'u'",
            table,
        ))
        .await?;

    let mut unique = HashSet::new();
    for index in indexes {
        let index_name: String = index.try_get("", "name")?;
        let cols = db
            .query_all(with_table(
                "SELECT name FROM pragma_index_info(?)",
                &index_name,
            ))
            .await?;
        if let [col] = cols.as_slice() {
            unique.insert(col.try_get::<String>("", "name")?);
        }
    }

    Ok(unique)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{DatabaseConfig, SchemaRegistry, connect};

    async fn materialised() -> sea_orm::DbConn {
        let db = connect(&DatabaseConfig::sqlite_memory()).await.unwrap();
        SchemaRegistry::new(DbBackend::Sqlite)
            .create_all(&db)
            .await
            .unwrap();
        db
    }

    #[tokio::test]
    async fn test_introspect_finds_every_table() {
        let db = materialised().await;
        let schema = introspect(&db).await.unwrap();

        let names: Vec<_> = schema.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["comment", "follower", "media", "post", "user"]);
    }

    #[tokio::test]
    async fn test_introspect_user_columns() {
        let db = materialised().await;
        let schema = introspect(&db).await.unwrap();
        let user = schema.table("user").unwrap();

        let col = |name: &str| user.columns.iter().find(|c| c.name == name).unwrap();
        assert!(col("id").primary_key);
        assert!(!col("id").nullable);
        assert!(col("username").unique && !col("username").nullable);
        assert!(col("email").unique);
        assert!(col("firstname").nullable && !col("firstname").unique);
        assert!(col("bio").nullable);
        assert!(user.foreign_keys.is_empty());
    }

    #[tokio::test]
    async fn test_introspect_foreign_keys() {
        let db = materialised().await;
        let schema = introspect(&db).await.unwrap();

        let comment = schema.table("comment").unwrap();
        let mut targets: Vec<_> = comment
            .foreign_keys
            .iter()
            .map(|fk| (fk.column.as_str(), fk.references_table.as_str(), fk.on_delete.as_str()))
            .collect();
        targets.sort();
        assert_eq!(
            targets,
            vec![("author_id", "user", "CASCADE"), ("post_id", "post", "CASCADE")]
        );

        let follower = schema.table("follower").unwrap();
        assert_eq!(follower.foreign_keys.len(), 2);
        assert!(follower.columns.iter().all(|c| c.primary_key));
    }

    #[tokio::test]
    async fn test_introspect_rejects_other_backends() {
        let db = sea_orm::MockDatabase::new(DbBackend::Postgres).into_connection();
        assert!(matches!(
            introspect(&db).await,
            Err(DiagramError::UnsupportedBackend(_))
        ));
    }
}
