//! Reading statistics and dashboard aggregates

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::book::Book;
use super::student::Student;

/// Per-student reading statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingStatistics {
    pub total_read_books_count: u64,
    #[serde(default)]
    pub malay_read_books_count: u64,
    #[serde(default)]
    pub english_read_books_count: u64,
    #[serde(default)]
    pub mandarin_read_books_count: u64,
    /// Cumulative reading time in seconds
    pub total_reading_duration: u64,
    #[serde(default)]
    pub read_books_list: Vec<Book>,
    #[serde(default)]
    pub last_book_read_timestamp: Option<String>,
    /// Book counts keyed by language code
    #[serde(default)]
    pub language_breakdown: HashMap<String, u64>,
}

/// `/users/{id}/statistics` payload: the student record together with
/// their reading statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentStatistics {
    #[serde(rename = "user_info")]
    pub student: Student,
    #[serde(rename = "reading_statistics")]
    pub reading: ReadingStatistics,
}

/// Aggregate counters shown on the dashboard overview.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_schools: u64,
    pub total_books: u64,
    pub total_admins: u64,
    pub total_students: u64,
}
