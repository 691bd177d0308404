//! Author Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthorError {
    #[error("author name is required")]
    BlankName,

    #[error("author email is required")]
    BlankEmail,

    #[error("'{0}' is not a valid email address")]
    MalformedEmail(String),
}

impl AuthorError {
    /// 出错的字段名（与 API 字段一致）
    pub fn field(&self) -> &'static str {
        match self {
            AuthorError::BlankName => "name",
            AuthorError::BlankEmail | AuthorError::MalformedEmail(_) => "email",
        }
    }

    /// 出错的原始值
    pub fn value(&self) -> Option<String> {
        match self {
            AuthorError::MalformedEmail(email) => Some(email.clone()),
            _ => None,
        }
    }
}
