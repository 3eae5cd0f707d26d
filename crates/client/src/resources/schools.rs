//! School endpoints

use lectern_domain::{ListQuery, NewSchool, School, SchoolPatch, SchoolsPage};

use crate::errors::ApiError;
use crate::pipeline::ApiClient;

/// `/schools` endpoints.
pub struct SchoolsApi<'a> {
    api: &'a ApiClient,
}

impl<'a> SchoolsApi<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// List schools, paginated and searchable.
    pub async fn list(&self, query: &ListQuery) -> Result<SchoolsPage, ApiError> {
        self.api.get_query("/schools", query.to_pairs()).await
    }

    /// Fetch one school by id.
    pub async fn get(&self, school_id: &str) -> Result<School, ApiError> {
        self.api.get(&format!("/schools/by_id/{school_id}")).await
    }

    /// Register a school.
    pub async fn create(&self, school: &NewSchool) -> Result<School, ApiError> {
        self.api.post("/schools", school).await
    }

    /// Partially update a school.
    pub async fn update(&self, school_id: &str, patch: &SchoolPatch) -> Result<School, ApiError> {
        self.api.patch(&format!("/schools/{school_id}"), patch).await
    }

    /// Remove a school.
    pub async fn delete(&self, school_id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("/schools/{school_id}")).await
    }
}
