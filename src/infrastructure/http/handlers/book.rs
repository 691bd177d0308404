//! Book HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{DeleteBook, GetBook, GetBookByIsbn};
use crate::infrastructure::http::dto::{BookPageView, BookRequest, BookView, ListBooksParams};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 创建图书
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookView>), ApiError> {
    let Json(request) = payload?;
    let book = state
        .create_book_handler
        .handle(request.into_create()?)
        .await?;

    Ok((StatusCode::CREATED, Json(book.into())))
}

/// 图书列表：`?page=&size=&sortBy=&sortDir=&title=&authorName=`
pub async fn list_books(
    State(state): State<Arc<AppState>>,
    params: Result<Query<ListBooksParams>, QueryRejection>,
) -> Result<Json<BookPageView>, ApiError> {
    let Query(params) = params?;
    let page = state
        .list_books_handler
        .handle(params.into_query(None))
        .await?;

    Ok(Json(page.into()))
}

/// 获取图书
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    book_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<BookView>, ApiError> {
    let Path(book_id) = book_id?;
    let book = state.get_book_handler.handle(GetBook { book_id }).await?;

    Ok(Json(book.into()))
}

/// 按 ISBN 获取图书
pub async fn get_book_by_isbn(
    State(state): State<Arc<AppState>>,
    isbn: Result<Path<String>, PathRejection>,
) -> Result<Json<BookView>, ApiError> {
    let Path(isbn) = isbn?;
    let book = state
        .get_book_by_isbn_handler
        .handle(GetBookByIsbn { isbn })
        .await?;

    Ok(Json(book.into()))
}

/// 更新图书
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    book_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<BookRequest>, JsonRejection>,
) -> Result<Json<BookView>, ApiError> {
    let Path(book_id) = book_id?;
    let Json(request) = payload?;
    let book = state
        .update_book_handler
        .handle(request.into_update(book_id)?)
        .await?;

    Ok(Json(book.into()))
}

/// 删除图书
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    book_id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(book_id) = book_id?;
    state
        .delete_book_handler
        .handle(DeleteBook { book_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
