//! Author HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{DeleteAuthor, GetAuthor, ListAuthors};
use crate::infrastructure::http::dto::{AuthorRequest, AuthorView, BookPageView, ListBooksParams};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 创建作者
pub async fn create_author(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AuthorRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthorView>), ApiError> {
    let Json(request) = payload?;
    let author = state
        .create_author_handler
        .handle(request.into_create()?)
        .await?;

    Ok((StatusCode::CREATED, Json(author.into())))
}

/// 列出所有作者
pub async fn list_authors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AuthorView>>, ApiError> {
    let authors = state.list_authors_handler.handle(ListAuthors).await?;
    Ok(Json(authors.into_iter().map(AuthorView::from).collect()))
}

/// 获取作者
pub async fn get_author(
    State(state): State<Arc<AppState>>,
    author_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<AuthorView>, ApiError> {
    let Path(author_id) = author_id?;
    let author = state
        .get_author_handler
        .handle(GetAuthor { author_id })
        .await?;

    Ok(Json(author.into()))
}

/// 更新作者
pub async fn update_author(
    State(state): State<Arc<AppState>>,
    author_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<AuthorRequest>, JsonRejection>,
) -> Result<Json<AuthorView>, ApiError> {
    let Path(author_id) = author_id?;
    let Json(request) = payload?;
    let author = state
        .update_author_handler
        .handle(request.into_update(author_id)?)
        .await?;

    Ok(Json(author.into()))
}

/// 删除作者，仍有图书引用时返回 409
pub async fn delete_author(
    State(state): State<Arc<AppState>>,
    author_id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(author_id) = author_id?;
    state
        .delete_author_handler
        .handle(DeleteAuthor { author_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// 某位作者的图书（分页）
pub async fn list_author_books(
    State(state): State<Arc<AppState>>,
    author_id: Result<Path<i64>, PathRejection>,
    params: Result<Query<ListBooksParams>, QueryRejection>,
) -> Result<Json<BookPageView>, ApiError> {
    let Path(author_id) = author_id?;
    let Query(params) = params?;
    let page = state
        .list_books_handler
        .handle(params.into_query(Some(author_id)))
        .await?;

    Ok(Json(page.into()))
}
