//! Backend response envelope and pagination primitives

use serde::{Deserialize, Serialize};

/// Uniform response envelope produced by the Lectern backend.
///
/// Every endpoint wraps its payload in this shape. The SDK consumes the
/// envelope and hands `data` to callers; it never synthesizes one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: T,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// The most specific failure description the backend provided.
    #[must_use]
    pub fn failure_message(&self) -> &str {
        match self.error.as_deref() {
            Some(error) if !error.is_empty() => error,
            _ => &self.message,
        }
    }
}

/// Pagination counters shared by collection responses.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageMeta {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub limit: u32,
}

/// Optional query parameters accepted by collection endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl ListQuery {
    /// A query selecting the given page with the given page size.
    #[must_use]
    pub fn page(page: u32, limit: u32) -> Self {
        Self { page: Some(page), limit: Some(limit), ..Self::default() }
    }

    /// Serialize the set parameters as URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_owned(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_owned(), limit.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search".to_owned(), search.clone()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort".to_owned(), sort.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_roundtrip() {
        let json = r#"{"success":true,"data":{"value":1},"message":"ok","error":null}"#;
        let envelope: ApiEnvelope<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.message, "ok");
        assert_eq!(envelope.data["value"], 1);
    }

    #[test]
    fn failure_message_prefers_error_field() {
        let envelope = ApiEnvelope {
            success: false,
            data: serde_json::Value::Null,
            message: "request failed".to_owned(),
            error: Some("school not found".to_owned()),
        };
        assert_eq!(envelope.failure_message(), "school not found");
    }

    #[test]
    fn failure_message_falls_back_to_message() {
        let envelope = ApiEnvelope {
            success: false,
            data: serde_json::Value::Null,
            message: "request failed".to_owned(),
            error: None,
        };
        assert_eq!(envelope.failure_message(), "request failed");
    }

    #[test]
    fn list_query_serializes_only_set_fields() {
        let query = ListQuery { search: Some("perlis".to_owned()), ..ListQuery::page(2, 50) };
        let pairs = query.to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("page".to_owned(), "2".to_owned()),
                ("limit".to_owned(), "50".to_owned()),
                ("search".to_owned(), "perlis".to_owned()),
            ]
        );
    }
}
