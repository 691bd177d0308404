//! Book Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateBook, DeleteBook, UpdateBook};
use crate::application::error::ApplicationError;
use crate::application::ports::{AuthorRepositoryPort, BookRecord, BookRepositoryPort};
use crate::domain::book::BookDetails;

// ============================================================================
// CreateBook
// ============================================================================

/// CreateBook Handler
///
/// 检查顺序: 字段校验 → 作者存在 → ISBN 唯一
pub struct CreateBookHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl CreateBookHandler {
    pub fn new(
        author_repo: Arc<dyn AuthorRepositoryPort>,
        book_repo: Arc<dyn BookRepositoryPort>,
    ) -> Self {
        Self {
            author_repo,
            book_repo,
        }
    }

    pub async fn handle(&self, command: CreateBook) -> Result<BookRecord, ApplicationError> {
        let details = BookDetails::new(
            command.title,
            command.isbn,
            command.price,
            command.author_id,
        )?;

        self.author_repo
            .find_by_id(details.author_id())
            .await?
            .ok_or_else(|| ApplicationError::not_found("Author", details.author_id()))?;

        if self.book_repo.exists_by_isbn(details.isbn().as_str()).await? {
            return Err(ApplicationError::duplicate(
                "Book",
                "isbn",
                details.isbn().as_str(),
            ));
        }

        let book = self.book_repo.insert(&details).await?;

        tracing::info!(
            book_id = book.id,
            isbn = %book.isbn,
            author_id = book.author.id,
            "Book created"
        );

        Ok(book)
    }
}

// ============================================================================
// UpdateBook
// ============================================================================

/// UpdateBook Handler
pub struct UpdateBookHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl UpdateBookHandler {
    pub fn new(
        author_repo: Arc<dyn AuthorRepositoryPort>,
        book_repo: Arc<dyn BookRepositoryPort>,
    ) -> Self {
        Self {
            author_repo,
            book_repo,
        }
    }

    pub async fn handle(&self, command: UpdateBook) -> Result<BookRecord, ApplicationError> {
        let book_id = command.book_id;
        let details = BookDetails::new(
            command.title,
            command.isbn,
            command.price,
            command.author_id,
        )?;

        let current = self
            .book_repo
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", book_id))?;

        self.author_repo
            .find_by_id(details.author_id())
            .await?
            .ok_or_else(|| ApplicationError::not_found("Author", details.author_id()))?;

        // ISBN 未变化时不检查，否则会与自身冲突
        if current.isbn != details.isbn().as_str()
            && self.book_repo.exists_by_isbn(details.isbn().as_str()).await?
        {
            return Err(ApplicationError::duplicate(
                "Book",
                "isbn",
                details.isbn().as_str(),
            ));
        }

        let book = self.book_repo.update(book_id, &details).await?;

        tracing::info!(
            book_id = book_id,
            author_id = book.author.id,
            "Book updated"
        );

        Ok(book)
    }
}

// ============================================================================
// DeleteBook
// ============================================================================

/// DeleteBook Handler
pub struct DeleteBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl DeleteBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, command: DeleteBook) -> Result<(), ApplicationError> {
        let book_id = command.book_id;

        let book = self
            .book_repo
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", book_id))?;

        if !self.book_repo.delete(book_id).await? {
            return Err(ApplicationError::not_found("Book", book_id));
        }

        tracing::info!(
            book_id = book_id,
            isbn = %book.isbn,
            "Book deleted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::handlers::CreateAuthorHandler;
    use crate::application::commands::CreateAuthor;
    use crate::application::ports::AuthorRecord;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteAuthorRepository, SqliteBookRepository,
    };

    struct Fixture {
        author_repo: Arc<dyn AuthorRepositoryPort>,
        book_repo: Arc<dyn BookRepositoryPort>,
        author: AuthorRecord,
    }

    async fn fixture() -> Fixture {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let author_repo: Arc<dyn AuthorRepositoryPort> =
            Arc::new(SqliteAuthorRepository::new(pool.clone()));
        let book_repo: Arc<dyn BookRepositoryPort> = Arc::new(SqliteBookRepository::new(pool));

        let author = CreateAuthorHandler::new(author_repo.clone())
            .handle(CreateAuthor {
                name: "Leo Tolstoy".to_string(),
                email: "leo@example.com".to_string(),
            })
            .await
            .unwrap();

        Fixture {
            author_repo,
            book_repo,
            author,
        }
    }

    fn create(isbn: &str, price: f64, author_id: i64) -> CreateBook {
        CreateBook {
            title: "War and Peace".to_string(),
            isbn: isbn.to_string(),
            price,
            author_id,
        }
    }

    #[tokio::test]
    async fn test_create_embeds_author() {
        let fx = fixture().await;
        let handler = CreateBookHandler::new(fx.author_repo.clone(), fx.book_repo.clone());

        let book = handler.handle(create("978-1", 19.99, fx.author.id)).await.unwrap();

        assert_eq!(book.author, fx.author);
        assert_eq!(book.price, 19.99);
    }

    #[tokio::test]
    async fn test_create_with_missing_author_persists_nothing() {
        let fx = fixture().await;
        let handler = CreateBookHandler::new(fx.author_repo.clone(), fx.book_repo.clone());

        let err = handler.handle(create("978-1", 19.99, 999)).await.unwrap_err();

        assert!(matches!(
            err,
            ApplicationError::NotFound { resource_type: "Author", .. }
        ));
        assert!(!fx.book_repo.exists_by_isbn("978-1").await.unwrap());
    }

    #[tokio::test]
    async fn test_create_duplicate_isbn_conflicts() {
        let fx = fixture().await;
        let handler = CreateBookHandler::new(fx.author_repo.clone(), fx.book_repo.clone());

        handler.handle(create("978-1", 19.99, fx.author.id)).await.unwrap();
        let err = handler
            .handle(create("978-1", 5.0, fx.author.id))
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Conflict { field: "isbn", .. }));
    }

    #[tokio::test]
    async fn test_concurrent_creates_same_isbn_one_wins() {
        let fx = fixture().await;
        let handler = CreateBookHandler::new(fx.author_repo.clone(), fx.book_repo.clone());

        let (a, b) = tokio::join!(
            handler.handle(create("978-1", 19.99, fx.author.id)),
            handler.handle(create("978-1", 9.99, fx.author.id)),
        );

        let results = [a, b];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .any(|r| matches!(r, Err(ApplicationError::Conflict { .. }))));
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_price() {
        let fx = fixture().await;
        let handler = CreateBookHandler::new(fx.author_repo.clone(), fx.book_repo.clone());

        for price in [0.0, -5.0] {
            let err = handler
                .handle(create("978-1", price, fx.author.id))
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                ApplicationError::InvalidArgument { field: "price", .. }
            ));
        }
    }

    #[tokio::test]
    async fn test_update_same_isbn_no_conflict() {
        let fx = fixture().await;
        let book = CreateBookHandler::new(fx.author_repo.clone(), fx.book_repo.clone())
            .handle(create("978-1", 19.99, fx.author.id))
            .await
            .unwrap();

        let updated = UpdateBookHandler::new(fx.author_repo.clone(), fx.book_repo.clone())
            .handle(UpdateBook {
                book_id: book.id,
                title: "War & Peace".to_string(),
                isbn: "978-1".to_string(),
                price: 24.5,
                author_id: fx.author.id,
            })
            .await
            .unwrap();

        assert_eq!(updated.title, "War & Peace");
        assert_eq!(updated.price, 24.5);
    }

    #[tokio::test]
    async fn test_update_zero_price_leaves_book_unchanged() {
        let fx = fixture().await;
        let book = CreateBookHandler::new(fx.author_repo.clone(), fx.book_repo.clone())
            .handle(create("978-1", 19.99, fx.author.id))
            .await
            .unwrap();

        let err = UpdateBookHandler::new(fx.author_repo.clone(), fx.book_repo.clone())
            .handle(UpdateBook {
                book_id: book.id,
                title: "Changed".to_string(),
                isbn: "978-2".to_string(),
                price: 0.0,
                author_id: fx.author.id,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::InvalidArgument { .. }));
        assert_eq!(fx.book_repo.find_by_id(book.id).await.unwrap(), Some(book));
    }

    #[tokio::test]
    async fn test_update_moves_book_to_other_author() {
        let fx = fixture().await;
        let other = CreateAuthorHandler::new(fx.author_repo.clone())
            .handle(CreateAuthor {
                name: "Anton Chekhov".to_string(),
                email: "anton@example.com".to_string(),
            })
            .await
            .unwrap();
        let book = CreateBookHandler::new(fx.author_repo.clone(), fx.book_repo.clone())
            .handle(create("978-1", 19.99, fx.author.id))
            .await
            .unwrap();

        let updated = UpdateBookHandler::new(fx.author_repo.clone(), fx.book_repo.clone())
            .handle(UpdateBook {
                book_id: book.id,
                title: "The Seagull".to_string(),
                isbn: "978-1".to_string(),
                price: 9.0,
                author_id: other.id,
            })
            .await
            .unwrap();

        assert_eq!(updated.author, other);
    }

    #[tokio::test]
    async fn test_update_to_taken_isbn_conflicts() {
        let fx = fixture().await;
        let create_handler = CreateBookHandler::new(fx.author_repo.clone(), fx.book_repo.clone());
        create_handler.handle(create("978-1", 19.99, fx.author.id)).await.unwrap();
        let second = create_handler
            .handle(create("978-2", 19.99, fx.author.id))
            .await
            .unwrap();

        let err = UpdateBookHandler::new(fx.author_repo.clone(), fx.book_repo.clone())
            .handle(UpdateBook {
                book_id: second.id,
                title: "War and Peace".to_string(),
                isbn: "978-1".to_string(),
                price: 19.99,
                author_id: fx.author.id,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_update_missing_book_or_author() {
        let fx = fixture().await;
        let handler = UpdateBookHandler::new(fx.author_repo.clone(), fx.book_repo.clone());

        let err = handler
            .handle(UpdateBook {
                book_id: 77,
                title: "Ghost".to_string(),
                isbn: "978-9".to_string(),
                price: 1.0,
                author_id: fx.author.id,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { resource_type: "Book", .. }));

        let book = CreateBookHandler::new(fx.author_repo.clone(), fx.book_repo.clone())
            .handle(create("978-1", 19.99, fx.author.id))
            .await
            .unwrap();
        let err = handler
            .handle(UpdateBook {
                book_id: book.id,
                title: "War and Peace".to_string(),
                isbn: "978-1".to_string(),
                price: 19.99,
                author_id: 404,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { resource_type: "Author", .. }));
    }

    #[tokio::test]
    async fn test_delete_book() {
        let fx = fixture().await;
        let book = CreateBookHandler::new(fx.author_repo.clone(), fx.book_repo.clone())
            .handle(create("978-1", 19.99, fx.author.id))
            .await
            .unwrap();
        let handler = DeleteBookHandler::new(fx.book_repo.clone());

        handler.handle(DeleteBook { book_id: book.id }).await.unwrap();
        let err = handler.handle(DeleteBook { book_id: book.id }).await.unwrap_err();

        assert!(matches!(err, ApplicationError::NotFound { .. }));
        assert!(fx.book_repo.find_by_id(book.id).await.unwrap().is_none());
    }
}
