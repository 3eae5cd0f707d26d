//! Reading leaderboard endpoints

use lectern_domain::{ListQuery, SchoolLeaderboard};

use crate::errors::ApiError;
use crate::pipeline::ApiClient;

/// Leaderboard endpoints.
pub struct LeaderboardApi<'a> {
    api: &'a ApiClient,
}

impl<'a> LeaderboardApi<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// A school's student leaderboard page.
    pub async fn school(
        &self,
        school_id: &str,
        query: &ListQuery,
    ) -> Result<SchoolLeaderboard, ApiError> {
        self.api.get_query(&format!("/schools/{school_id}/leaderboard"), query.to_pairs()).await
    }
}
