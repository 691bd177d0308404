//! SQLite Author Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::database::{database_error, is_foreign_key_violation, is_unique_violation};
use super::DbPool;
use crate::application::ports::{AuthorRecord, AuthorRepositoryPort, RepositoryError};
use crate::domain::author::AuthorDetails;

/// SQLite Author Repository
pub struct SqliteAuthorRepository {
    pool: DbPool,
}

impl SqliteAuthorRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AuthorRow {
    id: i64,
    name: String,
    email: String,
}

impl From<AuthorRow> for AuthorRecord {
    fn from(row: AuthorRow) -> Self {
        AuthorRecord {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

/// 写入错误分类：email 唯一约束 → Duplicate
fn write_error(err: sqlx::Error, email: &str) -> RepositoryError {
    if is_unique_violation(&err) {
        RepositoryError::Duplicate {
            entity: "Author",
            field: "email",
            value: email.to_string(),
        }
    } else {
        database_error(err)
    }
}

#[async_trait]
impl AuthorRepositoryPort for SqliteAuthorRepository {
    async fn insert(&self, details: &AuthorDetails) -> Result<AuthorRecord, RepositoryError> {
        let name = details.name().as_str();
        let email = details.email().as_str();

        let result = sqlx::query("INSERT INTO authors (name, name_lower, email) VALUES (?, ?, ?)")
            .bind(name)
            .bind(name.to_lowercase())
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, email))?;

        Ok(AuthorRecord {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    async fn update(
        &self,
        id: i64,
        details: &AuthorDetails,
    ) -> Result<AuthorRecord, RepositoryError> {
        let name = details.name().as_str();
        let email = details.email().as_str();

        let result = sqlx::query("UPDATE authors SET name = ?, name_lower = ?, email = ? WHERE id = ?")
            .bind(name)
            .bind(name.to_lowercase())
            .bind(email)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, email))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Author",
                id,
            });
        }

        Ok(AuthorRecord {
            id,
            name: name.to_string(),
            email: email.to_string(),
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<AuthorRecord>, RepositoryError> {
        let row: Option<AuthorRow> =
            sqlx::query_as("SELECT id, name, email FROM authors WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?;

        Ok(row.map(AuthorRecord::from))
    }

    async fn find_all(&self) -> Result<Vec<AuthorRecord>, RepositoryError> {
        let rows: Vec<AuthorRow> = sqlx::query_as("SELECT id, name, email FROM authors ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(rows.into_iter().map(AuthorRecord::from).collect())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(count > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    RepositoryError::StillReferenced {
                        entity: "Author",
                        id,
                        referenced_by: "books",
                    }
                } else {
                    database_error(e)
                }
            })?;

        Ok(result.rows_affected() > 0)
    }
}
