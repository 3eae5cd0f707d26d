//! Dashboard aggregate endpoints
//!
//! The backend has no single stats endpoint; the dashboard fans out to the
//! collection listings with a one-item page and reads their counters.

use lectern_domain::{DashboardStats, ListQuery};

use crate::errors::ApiError;
use crate::pipeline::ApiClient;

/// Dashboard overview aggregates.
pub struct DashboardApi<'a> {
    api: &'a ApiClient,
}

impl<'a> DashboardApi<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Collect the overview counters for the given school's scope.
    ///
    /// Issues the four listing calls concurrently; the first failure is
    /// surfaced as-is.
    pub async fn stats(&self, school_id: &str) -> Result<DashboardStats, ApiError> {
        let probe = ListQuery::page(1, 1);

        let schools_api = self.api.schools();
        let books_api = self.api.books();
        let admins_api = self.api.admins();
        let students_api = self.api.students();

        let (schools, books, admins, students) = tokio::try_join!(
            schools_api.list(&probe),
            books_api.list(&probe),
            admins_api.list(&probe),
            students_api.list_by_school(school_id, &probe),
        )?;

        Ok(DashboardStats {
            total_schools: schools.meta.total_count,
            total_books: books.meta.total_count,
            total_admins: admins.meta.total_count,
            total_students: students.total_students,
        })
    }
}
