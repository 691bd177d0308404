//! Author Commands

/// 创建作者命令
#[derive(Debug, Clone)]
pub struct CreateAuthor {
    pub name: String,
    pub email: String,
}

/// 更新作者命令（整体替换 name / email）
#[derive(Debug, Clone)]
pub struct UpdateAuthor {
    pub author_id: i64,
    pub name: String,
    pub email: String,
}

/// 删除作者命令
#[derive(Debug, Clone)]
pub struct DeleteAuthor {
    pub author_id: i64,
}
