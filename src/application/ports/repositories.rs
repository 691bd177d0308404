//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）
//!
//! 存储层是标识的唯一分配者，也是唯一性约束的最终裁决者：
//! 应用层的“先查后写”检查可能与并发写入竞争，此时由存储层的
//! 唯一约束 / 外键拒绝提交，并以下面的错误变体报告。

use async_trait::async_trait;
use thiserror::Error;

use super::{BookPage, BookQuery};
use crate::domain::author::AuthorDetails;
use crate::domain::book::BookDetails;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },

    /// 唯一约束冲突
    #[error("Duplicate {entity} {field}: {value}")]
    Duplicate {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// 写入时引用的实体不存在（外键）
    #[error("Referenced {entity} does not exist: {id}")]
    MissingReference { entity: &'static str, id: i64 },

    /// 删除时仍被其他实体引用（外键）
    #[error("{entity} {id} is still referenced by {referenced_by}")]
    StillReferenced {
        entity: &'static str,
        id: i64,
        referenced_by: &'static str,
    },

    #[error("Database error: {0}")]
    DatabaseError(String),
}

// ============================================================================
// Author Repository
// ============================================================================

/// 作者实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Author Repository Port
#[async_trait]
pub trait AuthorRepositoryPort: Send + Sync {
    /// 插入作者，返回带新标识的记录
    async fn insert(&self, details: &AuthorDetails) -> Result<AuthorRecord, RepositoryError>;

    /// 整体替换作者的可变字段
    async fn update(&self, id: i64, details: &AuthorDetails)
        -> Result<AuthorRecord, RepositoryError>;

    /// 根据 ID 查找作者
    async fn find_by_id(&self, id: i64) -> Result<Option<AuthorRecord>, RepositoryError>;

    /// 获取所有作者（按 ID 升序）
    async fn find_all(&self) -> Result<Vec<AuthorRecord>, RepositoryError>;

    /// 邮箱是否已被占用
    async fn exists_by_email(&self, email: &str) -> Result<bool, RepositoryError>;

    /// 删除作者，返回是否真的删除了一行
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}

// ============================================================================
// Book Repository
// ============================================================================

/// 图书实体（用于持久化），内嵌完整的作者记录
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub id: i64,
    pub title: String,
    pub isbn: String,
    pub price: f64,
    pub author: AuthorRecord,
}

/// Book Repository Port
#[async_trait]
pub trait BookRepositoryPort: Send + Sync {
    /// 插入图书，返回带新标识及作者信息的记录
    async fn insert(&self, details: &BookDetails) -> Result<BookRecord, RepositoryError>;

    /// 整体替换 title / isbn / price / author
    async fn update(&self, id: i64, details: &BookDetails) -> Result<BookRecord, RepositoryError>;

    /// 根据 ID 查找图书
    async fn find_by_id(&self, id: i64) -> Result<Option<BookRecord>, RepositoryError>;

    /// 根据 ISBN 查找图书
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<BookRecord>, RepositoryError>;

    /// ISBN 是否已被占用
    async fn exists_by_isbn(&self, isbn: &str) -> Result<bool, RepositoryError>;

    /// 引用指定作者的图书数量
    async fn count_by_author(&self, author_id: i64) -> Result<u64, RepositoryError>;

    /// 删除图书，返回是否真的删除了一行
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;

    /// 按谓词、排序、分页窗口查询图书
    async fn find_page(&self, query: &BookQuery) -> Result<BookPage, RepositoryError>;
}
