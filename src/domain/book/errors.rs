//! Book Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookError {
    #[error("book title is required")]
    BlankTitle,

    #[error("isbn is required")]
    BlankIsbn,

    #[error("price must be positive, got {0}")]
    NonPositivePrice(f64),
}

impl BookError {
    pub fn field(&self) -> &'static str {
        match self {
            BookError::BlankTitle => "title",
            BookError::BlankIsbn => "isbn",
            BookError::NonPositivePrice(_) => "price",
        }
    }

    pub fn value(&self) -> Option<String> {
        match self {
            BookError::NonPositivePrice(price) => Some(price.to_string()),
            _ => None,
        }
    }
}
