//! Book Context - 图书限界上下文
//!
//! 职责:
//! - 书名、ISBN、价格的字段校验
//! - 图书可变状态（BookDetails）

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::BookDetails;
pub use errors::BookError;
pub use value_objects::{BookTitle, Isbn, Price};
