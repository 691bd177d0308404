//! Author Queries

/// 获取作者详情查询
#[derive(Debug, Clone)]
pub struct GetAuthor {
    pub author_id: i64,
}

/// 列出所有作者查询
#[derive(Debug, Clone)]
pub struct ListAuthors;
