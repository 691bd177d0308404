//! HTTP Error Handling
//!
//! 应用层错误到 HTTP 状态码的映射。响应体统一为
//! `{ errno, error, resource?, field?, value? }`，errno 与状态码一致。

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: u16,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// 错误详情：出错的资源 / 字段 / 值
#[derive(Debug, Default)]
pub struct ErrorDetail {
    pub message: String,
    pub resource: Option<&'static str>,
    pub field: Option<String>,
    pub value: Option<String>,
}

impl ErrorDetail {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(ErrorDetail),
    NotFound(ErrorDetail),
    Conflict(ErrorDetail),
    Internal(String),
}

impl ApiError {
    /// 请求体缺少必填字段
    pub fn missing_field(field: &'static str) -> Self {
        ApiError::BadRequest(ErrorDetail {
            message: format!("Invalid {}: must not be null", field),
            field: Some(field.to_string()),
            ..Default::default()
        })
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let errno = status.as_u16();

        let detail = match self {
            ApiError::BadRequest(detail) => {
                tracing::warn!(errno, error = %detail.message, "Bad request");
                detail
            }
            ApiError::NotFound(detail) => {
                tracing::warn!(errno, error = %detail.message, "Resource not found");
                detail
            }
            ApiError::Conflict(detail) => {
                tracing::warn!(errno, error = %detail.message, "Resource conflict");
                detail
            }
            ApiError::Internal(msg) => {
                // 存储层细节只进日志，不回给客户端
                tracing::error!(errno, error = %msg, "Internal server error");
                ErrorDetail::message("Internal server error")
            }
        };

        let body = ErrorResponse {
            errno,
            error: detail.message,
            resource: detail.resource,
            field: detail.field,
            value: detail.value,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        let message = e.to_string();
        match e {
            ApplicationError::InvalidArgument { field, value, .. } => {
                ApiError::BadRequest(ErrorDetail {
                    message,
                    resource: None,
                    field: Some(field.to_string()),
                    value,
                })
            }
            ApplicationError::NotFound {
                resource_type,
                field,
                value,
            } => ApiError::NotFound(ErrorDetail {
                message,
                resource: Some(resource_type),
                field: Some(field.to_string()),
                value: Some(value),
            }),
            ApplicationError::Conflict {
                resource_type,
                field,
                value,
                ..
            } => ApiError::Conflict(ErrorDetail {
                message,
                resource: Some(resource_type),
                field: Some(field.to_string()),
                value: Some(value),
            }),
            ApplicationError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(ErrorDetail::message(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(ErrorDetail::message(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(ErrorDetail::message(rejection.body_text()))
    }
}
