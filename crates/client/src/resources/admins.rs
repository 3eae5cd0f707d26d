//! Administrator account endpoints

use lectern_domain::{Admin, AdminPatch, AdminsPage, ListQuery, NewAdmin};

use crate::errors::ApiError;
use crate::pipeline::ApiClient;

/// `/admins` endpoints.
pub struct AdminsApi<'a> {
    api: &'a ApiClient,
}

impl<'a> AdminsApi<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// List administrators, paginated and searchable.
    pub async fn list(&self, query: &ListQuery) -> Result<AdminsPage, ApiError> {
        self.api.get_query("/admins", query.to_pairs()).await
    }

    /// Fetch one administrator by id.
    pub async fn get(&self, admin_id: &str) -> Result<Admin, ApiError> {
        self.api.get(&format!("/admins/by_id/{admin_id}")).await
    }

    /// Create an administrator.
    pub async fn create(&self, admin: &NewAdmin) -> Result<Admin, ApiError> {
        self.api.post("/admins", admin).await
    }

    /// Replace an administrator's mutable fields.
    pub async fn update(&self, admin_id: &str, patch: &AdminPatch) -> Result<Admin, ApiError> {
        self.api.put(&format!("/admins/{admin_id}"), patch).await
    }

    /// Remove an administrator.
    pub async fn delete(&self, admin_id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("/admins/{admin_id}")).await
    }
}
