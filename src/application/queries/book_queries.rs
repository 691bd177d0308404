//! Book Queries

/// 获取图书详情查询
#[derive(Debug, Clone)]
pub struct GetBook {
    pub book_id: i64,
}

/// 按 ISBN 获取图书查询
#[derive(Debug, Clone)]
pub struct GetBookByIsbn {
    pub isbn: String,
}

/// 分页列出图书查询
///
/// `title` / `author_name` 为 None 表示不过滤；Some("") 匹配全部。
/// `author_id` 限定为某个作者的图书。
#[derive(Debug, Clone)]
pub struct ListBooks {
    pub page: i64,
    pub size: i64,
    pub sort_by: String,
    pub sort_dir: String,
    pub title: Option<String>,
    pub author_name: Option<String>,
    pub author_id: Option<i64>,
}

impl ListBooks {
    pub const DEFAULT_PAGE: i64 = 0;
    pub const DEFAULT_SIZE: i64 = 10;
    pub const DEFAULT_SORT_BY: &'static str = "id";
    pub const DEFAULT_SORT_DIR: &'static str = "asc";
}

impl Default for ListBooks {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            size: Self::DEFAULT_SIZE,
            sort_by: Self::DEFAULT_SORT_BY.to_string(),
            sort_dir: Self::DEFAULT_SORT_DIR.to_string(),
            title: None,
            author_name: None,
            author_id: None,
        }
    }
}
