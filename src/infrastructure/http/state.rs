//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateAuthorHandler, CreateBookHandler, DeleteAuthorHandler, DeleteBookHandler,
    UpdateAuthorHandler, UpdateBookHandler,
    // Query handlers
    GetAuthorHandler, GetBookByIsbnHandler, GetBookHandler, ListAuthorsHandler,
    ListBooksHandler,
    // Ports
    AuthorRepositoryPort, BookRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_author_handler: CreateAuthorHandler,
    pub update_author_handler: UpdateAuthorHandler,
    pub delete_author_handler: DeleteAuthorHandler,
    pub create_book_handler: CreateBookHandler,
    pub update_book_handler: UpdateBookHandler,
    pub delete_book_handler: DeleteBookHandler,

    // ========== Query Handlers ==========
    pub get_author_handler: GetAuthorHandler,
    pub list_authors_handler: ListAuthorsHandler,
    pub get_book_handler: GetBookHandler,
    pub get_book_by_isbn_handler: GetBookByIsbnHandler,
    pub list_books_handler: ListBooksHandler,
}

impl AppState {
    /// 创建应用状态，端口只在这里分发给各个 handler
    pub fn new(
        author_repo: Arc<dyn AuthorRepositoryPort>,
        book_repo: Arc<dyn BookRepositoryPort>,
    ) -> Self {
        Self {
            // Command handlers
            create_author_handler: CreateAuthorHandler::new(author_repo.clone()),
            update_author_handler: UpdateAuthorHandler::new(author_repo.clone()),
            delete_author_handler: DeleteAuthorHandler::new(
                author_repo.clone(),
                book_repo.clone(),
            ),
            create_book_handler: CreateBookHandler::new(author_repo.clone(), book_repo.clone()),
            update_book_handler: UpdateBookHandler::new(author_repo.clone(), book_repo.clone()),
            delete_book_handler: DeleteBookHandler::new(book_repo.clone()),

            // Query handlers
            get_author_handler: GetAuthorHandler::new(author_repo.clone()),
            list_authors_handler: ListAuthorsHandler::new(author_repo.clone()),
            get_book_handler: GetBookHandler::new(book_repo.clone()),
            get_book_by_isbn_handler: GetBookByIsbnHandler::new(book_repo.clone()),
            list_books_handler: ListBooksHandler::new(author_repo, book_repo),
        }
    }
}
