//! Book Context - Aggregate

use serde::{Deserialize, Serialize};

use super::{BookError, BookTitle, Isbn, Price};

/// Book 聚合的可变状态
///
/// 不变量:
/// - title / isbn 非空白
/// - price > 0
/// - 必须引用一个作者（作者是否存在由应用层在写入前确认）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDetails {
    title: BookTitle,
    isbn: Isbn,
    price: Price,
    author_id: i64,
}

impl BookDetails {
    pub fn new(
        title: impl Into<String>,
        isbn: impl Into<String>,
        price: f64,
        author_id: i64,
    ) -> Result<Self, BookError> {
        Ok(Self {
            title: BookTitle::new(title)?,
            isbn: Isbn::new(isbn)?,
            price: Price::new(price)?,
            author_id,
        })
    }

    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    pub fn isbn(&self) -> &Isbn {
        &self.isbn
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn author_id(&self) -> i64 {
        self.author_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_creation() {
        let details = BookDetails::new("War and Peace", "978-0140447934", 19.99, 1).unwrap();
        assert_eq!(details.title().as_str(), "War and Peace");
        assert_eq!(details.price().value(), 19.99);
        assert_eq!(details.author_id(), 1);
    }

    #[test]
    fn test_invalid_price_reports_field() {
        let err = BookDetails::new("War and Peace", "978-0140447934", 0.0, 1).unwrap_err();
        assert_eq!(err.field(), "price");
        assert_eq!(err.value().as_deref(), Some("0"));
    }
}
