//! Schools and per-school reading analysis

use serde::{Deserialize, Serialize};

use super::envelope::PageMeta;

/// A school registered on the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    pub id: String,
    pub name: String,
    pub state: String,
    pub city: String,
    pub status: String,
    #[serde(default)]
    pub students_count: u64,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for registering a school.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSchool {
    pub name: String,
    pub state: String,
    pub city: String,
}

/// Partial-update payload; unset fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchoolPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// One page of the `/schools` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolsPage {
    pub schools: Vec<School>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

/// Registration/activity aggregates for one school, as returned by
/// `/schools/analytics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolAnalysis {
    pub id: String,
    pub school_name: String,
    pub state: String,
    pub city: String,
    pub status: String,
    #[serde(default)]
    pub students_count: u64,
    pub total_students: u64,
    pub count_of_registered_students: u64,
    pub percent_of_registered_students: f64,
    pub count_of_active_students: u64,
    pub percent_of_active_students: f64,
    pub created_at: String,
    pub updated_at: String,
}
