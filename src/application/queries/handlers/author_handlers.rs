//! Author Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{AuthorRecord, AuthorRepositoryPort};
use crate::application::queries::{GetAuthor, ListAuthors};

/// GetAuthor Handler
pub struct GetAuthorHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl GetAuthorHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, query: GetAuthor) -> Result<AuthorRecord, ApplicationError> {
        self.author_repo
            .find_by_id(query.author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Author", query.author_id))
    }
}

/// ListAuthors Handler
pub struct ListAuthorsHandler {
    author_repo: Arc<dyn AuthorRepositoryPort>,
}

impl ListAuthorsHandler {
    pub fn new(author_repo: Arc<dyn AuthorRepositoryPort>) -> Self {
        Self { author_repo }
    }

    pub async fn handle(&self, _query: ListAuthors) -> Result<Vec<AuthorRecord>, ApplicationError> {
        Ok(self.author_repo.find_all().await?)
    }
}
