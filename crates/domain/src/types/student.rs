//! Student (reader) accounts

use serde::{Deserialize, Serialize};

use super::envelope::PageMeta;

/// A student account, keyed by national IC number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub ic_number: String,
    #[serde(default)]
    pub email: Option<String>,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub school_id: String,
    #[serde(default)]
    pub school_name: String,
    pub registration_status: String,
    pub created_at: String,
}

/// Payload for enrolling a student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewStudent {
    pub ic_number: String,
    pub name: String,
    pub school_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Partial-update payload; unset fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_status: Option<String>,
}

/// One page of a student listing (`/users/by_school/{id}`).
///
/// `total_students` counts every student of the school regardless of the
/// page's filters; `meta.total_count` counts the filtered result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentsPage {
    pub users: Vec<Student>,
    #[serde(default)]
    pub total_students: u64,
    #[serde(flatten)]
    pub meta: PageMeta,
}
