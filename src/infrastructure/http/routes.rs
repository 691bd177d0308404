//! HTTP Routes
//!
//! API Endpoints:
//! - /ping                  GET                 存活检查
//! - /authors               GET / POST          列出 / 创建作者
//! - /authors/{id}          GET / PUT / DELETE  作者详情 / 更新 / 删除
//! - /authors/{id}/books    GET                 某位作者的图书（分页）
//! - /books                 GET / POST          分页查询 / 创建图书
//! - /books/{id}            GET / PUT / DELETE  图书详情 / 更新 / 删除
//! - /books/isbn/{isbn}     GET                 按 ISBN 获取图书

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(author_routes())
        .merge(book_routes())
}

/// Author 路由
fn author_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/authors",
            get(handlers::list_authors).post(handlers::create_author),
        )
        .route(
            "/authors/:id",
            get(handlers::get_author)
                .put(handlers::update_author)
                .delete(handlers::delete_author),
        )
        .route("/authors/:id/books", get(handlers::list_author_books))
}

/// Book 路由
fn book_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/books", get(handlers::list_books).post(handlers::create_book))
        .route(
            "/books/:id",
            get(handlers::get_book)
                .put(handlers::update_book)
                .delete(handlers::delete_book),
        )
        .route("/books/isbn/:isbn", get(handlers::get_book_by_isbn))
}
