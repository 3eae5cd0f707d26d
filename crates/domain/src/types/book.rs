//! Ebook catalogue entries

use serde::{Deserialize, Serialize};

use super::envelope::PageMeta;

/// A catalogued ebook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub thumbnail: String,
    pub language: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub pages: Option<u32>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// One page of the `/books` listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BooksPage {
    pub books: Vec<Book>,
    #[serde(flatten)]
    pub meta: PageMeta,
}
