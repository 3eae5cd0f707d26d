//! Ebook catalogue endpoints

use lectern_domain::{BooksPage, ListQuery};

use crate::errors::ApiError;
use crate::pipeline::ApiClient;

/// `/books` endpoints.
pub struct BooksApi<'a> {
    api: &'a ApiClient,
}

impl<'a> BooksApi<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// List catalogued books, paginated and searchable.
    pub async fn list(&self, query: &ListQuery) -> Result<BooksPage, ApiError> {
        self.api.get_query("/books", query.to_pairs()).await
    }
}
