//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Author Context: 作者管理
//! - Book Context: 图书管理

pub mod author;
pub mod book;
