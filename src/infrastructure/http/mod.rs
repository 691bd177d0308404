//! HTTP Layer - RESTful API
//!
//! axum 路由、请求 / 响应 DTO、错误映射、日志中间件和服务器启动

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::create_routes;
pub use server::{HttpServer, ServerConfig};
pub use state::AppState;
