//! Data Transfer Objects
//!
//! 请求体字段全部是 Option：缺失字段由这里报告为结构化的 400，
//! 而不是 JSON 反序列化失败。

use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::application::{
    AuthorRecord, BookListResponse, BookRecord, CreateAuthor, CreateBook, ListBooks, UpdateAuthor,
    UpdateBook,
};

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::missing_field(field))
}

// ============================================================================
// Author DTOs
// ============================================================================

/// 创建 / 更新作者请求体
#[derive(Debug, Deserialize)]
pub struct AuthorRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl AuthorRequest {
    fn into_fields(self) -> Result<(String, String), ApiError> {
        Ok((
            required(self.name, "name")?,
            required(self.email, "email")?,
        ))
    }

    pub fn into_create(self) -> Result<CreateAuthor, ApiError> {
        let (name, email) = self.into_fields()?;
        Ok(CreateAuthor { name, email })
    }

    pub fn into_update(self, author_id: i64) -> Result<UpdateAuthor, ApiError> {
        let (name, email) = self.into_fields()?;
        Ok(UpdateAuthor {
            author_id,
            name,
            email,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthorView {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<AuthorRecord> for AuthorView {
    fn from(record: AuthorRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
        }
    }
}

// ============================================================================
// Book DTOs
// ============================================================================

/// 作者引用 `{ "id": 1 }`
#[derive(Debug, Deserialize)]
pub struct AuthorRef {
    pub id: Option<i64>,
}

/// 创建 / 更新图书请求体
///
/// 作者既可以用 `authorId`，也可以用 `author: { id }` 指定，前者优先。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRequest {
    pub title: Option<String>,
    pub isbn: Option<String>,
    pub price: Option<f64>,
    pub author_id: Option<i64>,
    pub author: Option<AuthorRef>,
}

impl BookRequest {
    fn into_fields(self) -> Result<(String, String, f64, i64), ApiError> {
        let author_id = self
            .author_id
            .or_else(|| self.author.and_then(|author| author.id));
        Ok((
            required(self.title, "title")?,
            required(self.isbn, "isbn")?,
            required(self.price, "price")?,
            required(author_id, "authorId")?,
        ))
    }

    pub fn into_create(self) -> Result<CreateBook, ApiError> {
        let (title, isbn, price, author_id) = self.into_fields()?;
        Ok(CreateBook {
            title,
            isbn,
            price,
            author_id,
        })
    }

    pub fn into_update(self, book_id: i64) -> Result<UpdateBook, ApiError> {
        let (title, isbn, price, author_id) = self.into_fields()?;
        Ok(UpdateBook {
            book_id,
            title,
            isbn,
            price,
            author_id,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BookView {
    pub id: i64,
    pub title: String,
    pub isbn: String,
    pub price: f64,
    pub author: AuthorView,
}

impl From<BookRecord> for BookView {
    fn from(record: BookRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            isbn: record.isbn,
            price: record.price,
            author: AuthorView::from(record.author),
        }
    }
}

/// 图书列表查询参数
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBooksParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
    pub title: Option<String>,
    pub author_name: Option<String>,
}

impl ListBooksParams {
    pub fn into_query(self, author_id: Option<i64>) -> ListBooks {
        ListBooks {
            page: self.page.unwrap_or(ListBooks::DEFAULT_PAGE),
            size: self.size.unwrap_or(ListBooks::DEFAULT_SIZE),
            sort_by: self
                .sort_by
                .unwrap_or_else(|| ListBooks::DEFAULT_SORT_BY.to_string()),
            sort_dir: self
                .sort_dir
                .unwrap_or_else(|| ListBooks::DEFAULT_SORT_DIR.to_string()),
            title: self.title,
            author_name: self.author_name,
            author_id,
        }
    }
}

/// 图书分页响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookPageView {
    pub books: Vec<BookView>,
    pub current_page: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl From<BookListResponse> for BookPageView {
    fn from(response: BookListResponse) -> Self {
        Self {
            books: response.books.into_iter().map(BookView::from).collect(),
            current_page: response.current_page,
            total_items: response.total_items,
            total_pages: response.total_pages,
        }
    }
}
