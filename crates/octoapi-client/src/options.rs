//! Listing options shared by collection endpoints

use serde::{Deserialize, Serialize};

/// Pagination options for list operations
///
/// An unset page means the server's default (first) page; no query
/// parameter is sent for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Page number (1-indexed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl ListOptions {
    /// Create options for a specific page
    pub fn page(page: u32) -> Self {
        Self { page: Some(page) }
    }

    /// Query pairs to append to a request path, in a stable order
    pub fn as_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }
}
