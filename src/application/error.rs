//! 应用层错误定义
//!
//! 统一的命令/查询错误类型。命令和查询处理器原样向上传递，
//! 由 HTTP 层映射为 400 / 404 / 409 / 500。

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::author::AuthorError;
use crate::domain::book::BookError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 字段校验失败
    #[error("Invalid {field}: {message}")]
    InvalidArgument {
        field: &'static str,
        value: Option<String>,
        message: String,
    },

    /// 资源未找到
    #[error("{resource_type} not found with {field}: {value}")]
    NotFound {
        resource_type: &'static str,
        field: &'static str,
        value: String,
    },

    /// 唯一性或引用冲突
    #[error("{message}")]
    Conflict {
        resource_type: &'static str,
        field: &'static str,
        value: String,
        message: String,
    },

    /// 内部错误
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// 创建字段校验错误
    pub fn invalid_argument(
        field: &'static str,
        value: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            field,
            value,
            message: message.into(),
        }
    }

    /// 创建按 ID 查找的 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: i64) -> Self {
        Self::NotFound {
            resource_type,
            field: "id",
            value: id.to_string(),
        }
    }

    /// 创建唯一性冲突错误
    pub fn duplicate(resource_type: &'static str, field: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        Self::Conflict {
            resource_type,
            field,
            message: format!("{} with {} {} already exists", resource_type, field, value),
            value,
        }
    }

    /// 创建“仍被引用”冲突错误
    pub fn still_referenced(resource_type: &'static str, id: i64, referenced_by: &'static str) -> Self {
        Self::Conflict {
            resource_type,
            field: referenced_by,
            value: id.to_string(),
            message: format!(
                "{} {} is still referenced by existing {}",
                resource_type, id, referenced_by
            ),
        }
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => Self::not_found(entity, id),
            RepositoryError::Duplicate {
                entity,
                field,
                value,
            } => Self::duplicate(entity, field, value),
            RepositoryError::MissingReference { entity, id } => Self::not_found(entity, id),
            RepositoryError::StillReferenced {
                entity,
                id,
                referenced_by,
            } => Self::still_referenced(entity, id, referenced_by),
            RepositoryError::DatabaseError(msg) => Self::Internal(msg),
        }
    }
}

impl From<AuthorError> for ApplicationError {
    fn from(err: AuthorError) -> Self {
        Self::invalid_argument(err.field(), err.value(), err.to_string())
    }
}

impl From<BookError> for ApplicationError {
    fn from(err: BookError) -> Self {
        Self::invalid_argument(err.field(), err.value(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_duplicate_maps_to_conflict() {
        let err = ApplicationError::from(RepositoryError::Duplicate {
            entity: "Book",
            field: "isbn",
            value: "978-0".to_string(),
        });
        match err {
            ApplicationError::Conflict { resource_type, field, value, message } => {
                assert_eq!(resource_type, "Book");
                assert_eq!(field, "isbn");
                assert_eq!(value, "978-0");
                assert_eq!(message, "Book with isbn 978-0 already exists");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_reference_maps_to_not_found() {
        let err = ApplicationError::from(RepositoryError::MissingReference {
            entity: "Author",
            id: 7,
        });
        assert_eq!(err.to_string(), "Author not found with id: 7");
    }

    #[test]
    fn test_database_error_is_internal() {
        let err = ApplicationError::from(RepositoryError::DatabaseError("disk full".into()));
        assert!(matches!(err, ApplicationError::Internal(_)));
    }

    #[test]
    fn test_domain_error_is_invalid_argument() {
        let err = ApplicationError::from(BookError::NonPositivePrice(-3.0));
        match err {
            ApplicationError::InvalidArgument { field, value, .. } => {
                assert_eq!(field, "price");
                assert_eq!(value.as_deref(), Some("-3"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
