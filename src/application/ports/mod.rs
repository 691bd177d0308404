//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod book_query;
mod repositories;

pub use book_query::{
    BookFilter, BookPage, BookPredicate, BookQuery, BookSort, BookSortField, PageWindow,
    SortDirection,
};
pub use repositories::{
    AuthorRecord, AuthorRepositoryPort, BookRecord, BookRepositoryPort, RepositoryError,
};
