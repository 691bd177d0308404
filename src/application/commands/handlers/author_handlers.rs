//! Author Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateAuthor, DeleteAuthor, UpdateAuthor};
use crate::application::error::ApplicationError;
use crate::application::ports::{AuthorRecord, AuthorRepositoryPort, BookRepositoryPort};
use crate::domain::author::AuthorDetails;

// ============================================================================
// CreateAuthor
// ============================================================================

/// CreateAuthor Handler
pub struct CreateAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl CreateAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, command: CreateAuthor) -> Result<AuthorRecord, ApplicationError> {
        let details = AuthorDetails::new(command.name, command.email)?;

        if self
            .author_repo
            .exists_by_email(details.email().as_str())
            .await?
        {
            return Err(ApplicationError::duplicate(
                "Author",
                "email",
                details.email().as_str(),
            ));
        }

        // 并发创建时唯一约束兜底，冲突以 Duplicate 返回
        let author = self.author_repo.insert(&details).await?;

        tracing::info!(
            author_id = author.id,
            email = %author.email,
            "Author created"
        );

        Ok(author)
    }
}

// ============================================================================
// UpdateAuthor
// ============================================================================

/// UpdateAuthor Handler
pub struct UpdateAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl UpdateAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, command: UpdateAuthor) -> Result<AuthorRecord, ApplicationError> {
        let author_id = command.author_id;
        let details = AuthorDetails::new(command.name, command.email)?;

        let current = self
            .author_repo
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Author", author_id))?;

        // 只有邮箱变化时才重新检查唯一性
        if current.email != details.email().as_str()
            && self
                .author_repo
                .exists_by_email(details.email().as_str())
                .await?
        {
            return Err(ApplicationError::duplicate(
                "Author",
                "email",
                details.email().as_str(),
            ));
        }

        let author = self.author_repo.update(author_id, &details).await?;

        tracing::info!(author_id = author_id, "Author updated");

        Ok(author)
    }
}

// ============================================================================
// DeleteAuthor
// ============================================================================

/// DeleteAuthor Handler
///
/// 仍有图书引用的作者不允许删除（Conflict）
pub struct DeleteAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl DeleteAuthorHandler {
    pub fn new(
        author_repo: Arc<dyn AuthorRepositoryPort>,
        book_repo: Arc<dyn BookRepositoryPort>,
    ) -> Self {
        Self {
            author_repo,
            book_repo,
        }
    }

    pub async fn handle(&self, command: DeleteAuthor) -> Result<(), ApplicationError> {
        let author_id = command.author_id;

        // 检查作者是否存在
        let author = self
            .author_repo
            .find_by_id(author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Author", author_id))?;

        let books = self.book_repo.count_by_author(author_id).await?;
        if books > 0 {
            return Err(ApplicationError::still_referenced("Author", author_id, "books"));
        }

        if !self.author_repo.delete(author_id).await? {
            return Err(ApplicationError::not_found("Author", author_id));
        }

        tracing::info!(
            author_id = author_id,
            name = %author.name,
            "Author deleted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::handlers::CreateBookHandler;
    use crate::application::commands::CreateBook;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteAuthorRepository, SqliteBookRepository,
    };

    async fn repos() -> (Arc<dyn AuthorRepositoryPort>, Arc<dyn BookRepositoryPort>) {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        (
            Arc::new(SqliteAuthorRepository::new(pool.clone())),
            Arc::new(SqliteBookRepository::new(pool)),
        )
    }

    fn create(name: &str, email: &str) -> CreateAuthor {
        CreateAuthor {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id() {
        let (author_repo, _) = repos().await;
        let handler = CreateAuthorHandler::new(author_repo.clone());

        let first = handler.handle(create("Leo Tolstoy", "leo@example.com")).await.unwrap();
        let second = handler.handle(create("Anton Chekhov", "anton@example.com")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(author_repo.find_by_id(first.id).await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn test_create_duplicate_email_conflicts() {
        let (author_repo, _) = repos().await;
        let handler = CreateAuthorHandler::new(author_repo.clone());

        handler.handle(create("Leo Tolstoy", "leo@example.com")).await.unwrap();
        let err = handler
            .handle(create("Someone Else", "leo@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Conflict { field: "email", .. }
        ));
        assert_eq!(author_repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_blank_name_is_invalid() {
        let (author_repo, _) = repos().await;
        let handler = CreateAuthorHandler::new(author_repo);

        let err = handler.handle(create("  ", "leo@example.com")).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::InvalidArgument { field: "name", .. }
        ));
    }

    #[tokio::test]
    async fn test_update_keeps_own_email() {
        let (author_repo, _) = repos().await;
        let created = CreateAuthorHandler::new(author_repo.clone())
            .handle(create("Leo", "leo@example.com"))
            .await
            .unwrap();

        let updated = UpdateAuthorHandler::new(author_repo)
            .handle(UpdateAuthor {
                author_id: created.id,
                name: "Leo Tolstoy".to_string(),
                email: "leo@example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Leo Tolstoy");
    }

    #[tokio::test]
    async fn test_update_to_taken_email_conflicts() {
        let (author_repo, _) = repos().await;
        let create_handler = CreateAuthorHandler::new(author_repo.clone());
        create_handler.handle(create("Leo", "leo@example.com")).await.unwrap();
        let anton = create_handler
            .handle(create("Anton", "anton@example.com"))
            .await
            .unwrap();

        let err = UpdateAuthorHandler::new(author_repo.clone())
            .handle(UpdateAuthor {
                author_id: anton.id,
                name: "Anton".to_string(),
                email: "leo@example.com".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Conflict { .. }));
        let stored = author_repo.find_by_id(anton.id).await.unwrap().unwrap();
        assert_eq!(stored.email, "anton@example.com");
    }

    #[tokio::test]
    async fn test_update_missing_author_not_found() {
        let (author_repo, _) = repos().await;
        let err = UpdateAuthorHandler::new(author_repo)
            .handle(UpdateAuthor {
                author_id: 42,
                name: "Nobody".to_string(),
                email: "nobody@example.com".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound { resource_type: "Author", .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_author_not_found() {
        let (author_repo, book_repo) = repos().await;
        let err = DeleteAuthorHandler::new(author_repo, book_repo)
            .handle(DeleteAuthor { author_id: 9 })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_author_with_books_conflicts() {
        let (author_repo, book_repo) = repos().await;
        let author = CreateAuthorHandler::new(author_repo.clone())
            .handle(create("Leo", "leo@example.com"))
            .await
            .unwrap();
        CreateBookHandler::new(author_repo.clone(), book_repo.clone())
            .handle(CreateBook {
                title: "War and Peace".to_string(),
                isbn: "978-0140447934".to_string(),
                price: 19.99,
                author_id: author.id,
            })
            .await
            .unwrap();

        let handler = DeleteAuthorHandler::new(author_repo.clone(), book_repo);
        let err = handler
            .handle(DeleteAuthor { author_id: author.id })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::Conflict { field: "books", .. }
        ));
        assert!(author_repo.find_by_id(author.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_author_without_books() {
        let (author_repo, book_repo) = repos().await;
        let author = CreateAuthorHandler::new(author_repo.clone())
            .handle(create("Leo", "leo@example.com"))
            .await
            .unwrap();

        DeleteAuthorHandler::new(author_repo.clone(), book_repo)
            .handle(DeleteAuthor { author_id: author.id })
            .await
            .unwrap();

        assert!(author_repo.find_by_id(author.id).await.unwrap().is_none());
    }
}
