//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Repository、图书查询模型）
//! - commands: CQRS 命令及处理器（写入前的唯一性 / 引用检查）
//! - queries: CQRS 查询及处理器（图书列表查询组合）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Author commands
    CreateAuthor,
    DeleteAuthor,
    UpdateAuthor,
    // Book commands
    CreateBook,
    DeleteBook,
    UpdateBook,
    // Handlers
    handlers::{
        CreateAuthorHandler, CreateBookHandler, DeleteAuthorHandler, DeleteBookHandler,
        UpdateAuthorHandler, UpdateBookHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    AuthorRecord, AuthorRepositoryPort, BookFilter, BookPage, BookPredicate, BookQuery,
    BookRecord, BookRepositoryPort, BookSort, BookSortField, PageWindow, RepositoryError,
    SortDirection,
};

pub use queries::{
    // Author queries
    GetAuthor,
    ListAuthors,
    // Book queries
    GetBook,
    GetBookByIsbn,
    ListBooks,
    // Handlers
    handlers::{
        BookListResponse, GetAuthorHandler, GetBookByIsbnHandler, GetBookHandler,
        ListAuthorsHandler, ListBooksHandler,
    },
};
