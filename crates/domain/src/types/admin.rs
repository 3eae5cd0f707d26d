//! Platform administrator accounts

use serde::{Deserialize, Serialize};

use super::envelope::PageMeta;
use super::school::School;

/// An administrator account, optionally tied to a single school.
///
/// Platform-wide admins carry `role: "admin"`; school managers carry
/// `role: "school_manager"` and a non-empty `school_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub school_id: String,
    #[serde(default)]
    pub school: Option<School>,
    pub status: String,
    #[serde(default)]
    pub last_login: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for creating an administrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
}

/// Partial-update payload; unset fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// One page of the `/admins` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminsPage {
    pub admins: Vec<Admin>,
    #[serde(flatten)]
    pub meta: PageMeta,
}
