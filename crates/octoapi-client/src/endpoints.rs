//! API endpoint path builders
//!
//! Helper functions to construct request paths relative to the API base URL.

use crate::options::ListOptions;

/// Build the path listing organizations for the authenticated user
pub fn user_orgs_path() -> String {
    "user/orgs".to_string()
}

/// Build the path listing organizations for a specific user
pub fn owner_orgs_path(owner: &str) -> String {
    format!("users/{}/orgs", urlencoding::encode(owner))
}

/// Build the path for a single organization
pub fn org_path(org: &str) -> String {
    format!("orgs/{}", urlencoding::encode(org))
}

/// Append listing options to a path as an encoded query string
pub fn with_list_options(path: String, opts: Option<&ListOptions>) -> String {
    let Some(opts) = opts else {
        return path;
    };

    let pairs = opts.as_query_pairs();
    if pairs.is_empty() {
        return path;
    }

    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", path, query)
}
