//! Bookstore - 作者 / 图书目录服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Author: 作者姓名、邮箱校验
//! - Book: 书名、ISBN、价格校验
//!
//! 应用层 (application/):
//! - Ports: 端口定义（AuthorRepository, BookRepository, 图书查询模型）
//! - Commands: CQRS 命令处理器（唯一性、引用完整性检查）
//! - Queries: CQRS 查询处理器（分页 / 过滤 / 排序组合）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
