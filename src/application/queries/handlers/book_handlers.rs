//! Book Query Handlers
//!
//! ListBooksHandler 是查询组合器：把可选的过滤 / 排序 / 分页参数
//! 组合成一个 `BookQuery`，交给存储层执行单条分页查询。

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{
    AuthorRepositoryPort, BookFilter, BookPredicate, BookQuery, BookRecord, BookRepositoryPort,
    BookSort, BookSortField, PageWindow, SortDirection,
};
use crate::application::queries::{GetBook, GetBookByIsbn, ListBooks};

// ============================================================================
// Response DTOs
// ============================================================================

/// 图书分页响应
#[derive(Debug, Clone)]
pub struct BookListResponse {
    pub books: Vec<BookRecord>,
    pub current_page: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

// ============================================================================
// Handlers
// ============================================================================

/// GetBook Handler
pub struct GetBookHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl GetBookHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: GetBook) -> Result<BookRecord, ApplicationError> {
        self.book_repo
            .find_by_id(query.book_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Book", query.book_id))
    }
}

/// GetBookByIsbn Handler
pub struct GetBookByIsbnHandler {
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl GetBookByIsbnHandler {
    pub fn new(book_repo: Arc<dyn BookRepositoryPort>) -> Self {
        Self { book_repo }
    }

    pub async fn handle(&self, query: GetBookByIsbn) -> Result<BookRecord, ApplicationError> {
        self.book_repo
            .find_by_isbn(&query.isbn)
            .await?
            .ok_or_else(|| ApplicationError::NotFound {
                resource_type: "Book",
                field: "isbn",
                value: query.isbn,
            })
    }
}

/// ListBooks Handler
pub struct ListBooksHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
    book_repo: Arc<dyn BookRepositoryPort>,
}

impl ListBooksHandler {
    pub fn new(
        author_repo: Arc<dyn AuthorRepositoryPort>,
        book_repo: Arc<dyn BookRepositoryPort>,
    ) -> Self {
        Self {
            author_repo,
            book_repo,
        }
    }

    /// 把请求参数组合成存储层查询
    ///
    /// - 排序字段不在白名单内 → InvalidArgument
    /// - 排序方向无法识别 → 升序
    /// - 没有任何过滤参数 → 恒真过滤器
    pub fn compose(query: &ListBooks) -> Result<BookQuery, ApplicationError> {
        let window = PageWindow::new(query.page, query.size).ok_or_else(|| {
            if query.page < 0 {
                ApplicationError::invalid_argument(
                    "page",
                    Some(query.page.to_string()),
                    "page must be zero or greater",
                )
            } else if query.size <= 0 {
                ApplicationError::invalid_argument(
                    "size",
                    Some(query.size.to_string()),
                    "size must be greater than zero",
                )
            } else {
                ApplicationError::invalid_argument(
                    "page",
                    Some(query.page.to_string()),
                    "page is out of range",
                )
            }
        })?;

        let field = BookSortField::from_param(&query.sort_by).ok_or_else(|| {
            ApplicationError::invalid_argument(
                "sortBy",
                Some(query.sort_by.clone()),
                "sortBy must be one of id, title, price, isbn, authorName",
            )
        })?;

        let filter = BookFilter::all()
            .and_maybe(query.author_id.map(BookPredicate::AuthorIs))
            .and_maybe(query.title.clone().map(BookPredicate::TitleContains))
            .and_maybe(query.author_name.clone().map(BookPredicate::AuthorNameContains));

        Ok(BookQuery {
            filter,
            sort: BookSort {
                field,
                direction: SortDirection::from_param(&query.sort_dir),
            },
            window,
        })
    }

    pub async fn handle(&self, query: ListBooks) -> Result<BookListResponse, ApplicationError> {
        let book_query = Self::compose(&query)?;

        if let Some(author_id) = query.author_id {
            self.author_repo
                .find_by_id(author_id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("Author", author_id))?;
        }

        let page = self.book_repo.find_page(&book_query).await?;

        tracing::debug!(
            page = book_query.window.page(),
            size = book_query.window.size(),
            predicates = book_query.filter.predicates().len(),
            total_items = page.total_items,
            "Books listed"
        );

        Ok(BookListResponse {
            current_page: book_query.window.page(),
            total_pages: book_query.window.total_pages(page.total_items),
            total_items: page.total_items,
            books: page.items,
        })
    }
}
