//! SQLite Book Repository

use async_trait::async_trait;
use sqlx::{FromRow, QueryBuilder, Sqlite};

use super::database::{database_error, is_foreign_key_violation, is_unique_violation};
use super::DbPool;
use crate::application::ports::{
    AuthorRecord, BookFilter, BookPage, BookPredicate, BookQuery, BookRecord, BookRepositoryPort,
    BookSortField, RepositoryError, SortDirection,
};
use crate::domain::book::BookDetails;

/// 图书 + 作者联表查询
const BOOK_SELECT: &str = "SELECT b.id, b.title, b.isbn, b.price, \
     a.id AS author_id, a.name AS author_name, a.email AS author_email \
     FROM books b JOIN authors a ON a.id = b.author_id";

const BOOK_COUNT: &str = "SELECT COUNT(*) FROM books b JOIN authors a ON a.id = b.author_id";

/// SQLite Book Repository
pub struct SqliteBookRepository {
    pool: DbPool,
}

impl SqliteBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct BookRow {
    id: i64,
    title: String,
    isbn: String,
    price: f64,
    author_id: i64,
    author_name: String,
    author_email: String,
}

impl From<BookRow> for BookRecord {
    fn from(row: BookRow) -> Self {
        BookRecord {
            id: row.id,
            title: row.title,
            isbn: row.isbn,
            price: row.price,
            author: AuthorRecord {
                id: row.author_id,
                name: row.author_name,
                email: row.author_email,
            },
        }
    }
}

/// 写入错误分类：isbn 唯一约束 → Duplicate，author_id 外键 → MissingReference
fn write_error(err: sqlx::Error, details: &BookDetails) -> RepositoryError {
    if is_unique_violation(&err) {
        RepositoryError::Duplicate {
            entity: "Book",
            field: "isbn",
            value: details.isbn().to_string(),
        }
    } else if is_foreign_key_violation(&err) {
        RepositoryError::MissingReference {
            entity: "Author",
            id: details.author_id(),
        }
    } else {
        database_error(err)
    }
}

/// 把用户输入转成 LIKE 模式：Unicode 小写（与 *_lower 列一致），转义通配符
fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for c in value.to_lowercase().chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// 追加 WHERE 子句，谓词之间 AND；空过滤器不追加任何条件
fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &BookFilter) {
    for (i, predicate) in filter.predicates().iter().enumerate() {
        builder.push(if i == 0 { " WHERE " } else { " AND " });
        match predicate {
            BookPredicate::TitleContains(value) => {
                builder.push("b.title_lower LIKE ");
                builder.push_bind(contains_pattern(value));
                builder.push(r" ESCAPE '\'");
            }
            BookPredicate::AuthorNameContains(value) => {
                builder.push("a.name_lower LIKE ");
                builder.push_bind(contains_pattern(value));
                builder.push(r" ESCAPE '\'");
            }
            BookPredicate::AuthorIs(author_id) => {
                builder.push("b.author_id = ");
                builder.push_bind(*author_id);
            }
        }
    }
}

fn order_column(field: BookSortField) -> &'static str {
    match field {
        BookSortField::Id => "b.id",
        BookSortField::Title => "b.title",
        BookSortField::Price => "b.price",
        BookSortField::Isbn => "b.isbn",
        BookSortField::AuthorName => "a.name",
    }
}

#[async_trait]
impl BookRepositoryPort for SqliteBookRepository {
    async fn insert(&self, details: &BookDetails) -> Result<BookRecord, RepositoryError> {
        let result =
            sqlx::query("INSERT INTO books (title, title_lower, isbn, price, author_id) VALUES (?, ?, ?, ?, ?)")
                .bind(details.title().as_str())
                .bind(details.title().as_str().to_lowercase())
                .bind(details.isbn().as_str())
                .bind(details.price().value())
                .bind(details.author_id())
                .execute(&self.pool)
                .await
                .map_err(|e| write_error(e, details))?;

        let id = result.last_insert_rowid();
        self.find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound { entity: "Book", id })
    }

    async fn update(&self, id: i64, details: &BookDetails) -> Result<BookRecord, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = ?, title_lower = ?, isbn = ?, price = ?, author_id = ?
            WHERE id = ?
            "#,
        )
        .bind(details.title().as_str())
        .bind(details.title().as_str().to_lowercase())
        .bind(details.isbn().as_str())
        .bind(details.price().value())
        .bind(details.author_id())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, details))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound { entity: "Book", id });
        }

        self.find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound { entity: "Book", id })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<BookRecord>, RepositoryError> {
        let sql = format!("{} WHERE b.id = ?", BOOK_SELECT);
        let row: Option<BookRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(row.map(BookRecord::from))
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<BookRecord>, RepositoryError> {
        let sql = format!("{} WHERE b.isbn = ?", BOOK_SELECT);
        let row: Option<BookRow> = sqlx::query_as(&sql)
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(row.map(BookRecord::from))
    }

    async fn exists_by_isbn(&self, isbn: &str) -> Result<bool, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE isbn = ?")
            .bind(isbn)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(count > 0)
    }

    async fn count_by_author(&self, author_id: i64) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE author_id = ?")
            .bind(author_id)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(count as u64)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_page(&self, query: &BookQuery) -> Result<BookPage, RepositoryError> {
        // 计数和取页放在同一个事务里，两者看到同一份快照
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let mut count = QueryBuilder::<Sqlite>::new(BOOK_COUNT);
        push_filter(&mut count, &query.filter);
        let total_items: i64 = count
            .build_query_scalar::<i64>()
            .fetch_one(&mut *tx)
            .await
            .map_err(database_error)?;

        let mut select = QueryBuilder::<Sqlite>::new(BOOK_SELECT);
        push_filter(&mut select, &query.filter);
        select.push(" ORDER BY ");
        select.push(order_column(query.sort.field));
        select.push(match query.sort.direction {
            SortDirection::Asc => " ASC",
            SortDirection::Desc => " DESC",
        });
        // id 作为最终排序键，保证翻页稳定
        select.push(", b.id ASC LIMIT ");
        select.push_bind(query.window.size());
        select.push(" OFFSET ");
        select.push_bind(query.window.offset());

        let rows: Vec<BookRow> = select
            .build_query_as::<BookRow>()
            .fetch_all(&mut *tx)
            .await
            .map_err(database_error)?;

        tx.commit().await.map_err(database_error)?;

        Ok(BookPage {
            items: rows.into_iter().map(BookRecord::from).collect(),
            total_items,
        })
    }
}
