//! Author Context - 作者限界上下文
//!
//! 职责:
//! - 作者姓名、邮箱的字段校验
//! - 作者可变状态（AuthorDetails）

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::AuthorDetails;
pub use errors::AuthorError;
pub use value_objects::{AuthorName, Email};
