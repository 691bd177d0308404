//! Book Commands

/// 创建图书命令
#[derive(Debug, Clone)]
pub struct CreateBook {
    pub title: String,
    pub isbn: String,
    pub price: f64,
    pub author_id: i64,
}

/// 更新图书命令（整体替换 title / isbn / price / author）
#[derive(Debug, Clone)]
pub struct UpdateBook {
    pub book_id: i64,
    pub title: String,
    pub isbn: String,
    pub price: f64,
    pub author_id: i64,
}

/// 删除图书命令
#[derive(Debug, Clone)]
pub struct DeleteBook {
    pub book_id: i64,
}
