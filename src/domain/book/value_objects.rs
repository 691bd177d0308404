//! Book Context - Value Objects

use serde::{Deserialize, Serialize};

use super::BookError;

/// 书名
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(title: impl Into<String>) -> Result<Self, BookError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(BookError::BlankTitle);
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ISBN
///
/// 只校验非空白；全局唯一性由应用层和存储层保证。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(isbn: impl Into<String>) -> Result<Self, BookError> {
        let isbn = isbn.into();
        if isbn.trim().is_empty() {
            return Err(BookError::BlankIsbn);
        }
        Ok(Self(isbn))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Isbn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 价格，严格大于 0 的有限数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> Result<Self, BookError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(BookError::NonPositivePrice(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
