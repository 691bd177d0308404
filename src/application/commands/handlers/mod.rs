//! Command Handlers 实现
//!
//! 所有写操作在提交前都经过这里的存在性 / 唯一性检查

mod author_handlers;
mod book_handlers;

pub use author_handlers::*;
pub use book_handlers::*;
