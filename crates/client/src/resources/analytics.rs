//! Per-school reading analysis endpoints

use lectern_domain::{ListQuery, SchoolAnalysis};

use crate::errors::ApiError;
use crate::pipeline::ApiClient;

/// `/schools/analytics` endpoints.
pub struct AnalyticsApi<'a> {
    api: &'a ApiClient,
}

impl<'a> AnalyticsApi<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Registration/activity aggregates per school.
    pub async fn school_analysis(&self, query: &ListQuery) -> Result<Vec<SchoolAnalysis>, ApiError> {
        self.api.get_query("/schools/analytics", query.to_pairs()).await
    }
}
