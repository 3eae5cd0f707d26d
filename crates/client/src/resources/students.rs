//! Student account endpoints
//!
//! The backend addresses students under `/users`.

use lectern_domain::{ListQuery, NewStudent, Student, StudentPatch, StudentStatistics, StudentsPage};

use crate::errors::ApiError;
use crate::pipeline::ApiClient;

/// `/users` endpoints.
pub struct StudentsApi<'a> {
    api: &'a ApiClient,
}

impl<'a> StudentsApi<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// List a school's students, paginated and searchable.
    pub async fn list_by_school(
        &self,
        school_id: &str,
        query: &ListQuery,
    ) -> Result<StudentsPage, ApiError> {
        self.api.get_query(&format!("/users/by_school/{school_id}"), query.to_pairs()).await
    }

    /// List a school's students, keeping only registered accounts.
    pub async fn list_registered(
        &self,
        school_id: &str,
        query: &ListQuery,
    ) -> Result<StudentsPage, ApiError> {
        let mut pairs = query.to_pairs();
        pairs.push(("registered_only".to_owned(), "true".to_owned()));
        self.api.get_query(&format!("/users/by_school/{school_id}"), pairs).await
    }

    /// Fetch one student by id.
    pub async fn get(&self, student_id: &str) -> Result<Student, ApiError> {
        self.api.get(&format!("/users/by_id/{student_id}")).await
    }

    /// Enroll a student.
    pub async fn create(&self, student: &NewStudent) -> Result<Student, ApiError> {
        self.api.post("/users", student).await
    }

    /// Partially update a student.
    pub async fn update(&self, student_id: &str, patch: &StudentPatch) -> Result<Student, ApiError> {
        self.api.patch(&format!("/users/by_id/{student_id}"), patch).await
    }

    /// Remove a student account.
    pub async fn delete(&self, student_id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("/users/by_id/{student_id}")).await
    }

    /// Per-student reading statistics.
    pub async fn statistics(&self, student_id: &str) -> Result<StudentStatistics, ApiError> {
        self.api.get(&format!("/users/{student_id}/statistics")).await
    }
}
