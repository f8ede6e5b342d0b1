//! Organization endpoints
//!
//! Typed access to the organization resources of the GitHub v3 API:
//! listing a user's organizations, fetching one, and editing one.

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::GithubClient;
use crate::endpoints;
use crate::error::Result;
use crate::options::ListOptions;
use crate::response::ApiResponse;

/// A GitHub organization account.
///
/// Every field is optional: the API is free to return any subset, and a
/// value used as an edit payload carries only the fields to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Display name, distinct from the login
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_repos: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_gists: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub following: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_private_repos: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_private_repos: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_gists: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_usage: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborators: Option<i64>,

    /// Billing address, only visible to organization owners
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
}

/// The payment plan for an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborators: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_repos: Option<i64>,
}

/// Access to the organization endpoints, borrowing the shared transport
pub struct OrgsService<'c> {
    client: &'c GithubClient,
}

impl<'c> OrgsService<'c> {
    /// Create the service on top of an existing transport
    pub fn new(client: &'c GithubClient) -> Self {
        Self { client }
    }

    /// List organizations for a user.
    ///
    /// Passing `None` (or an empty login) lists organizations for the
    /// authenticated user.
    pub async fn list(
        &self,
        user: Option<&str>,
        opts: Option<&ListOptions>,
    ) -> Result<ApiResponse<Vec<Organization>>> {
        let path = list_path(user, opts);
        let request = self.client.new_request(Method::GET, &path, None::<&()>)?;
        self.client.execute(request).await
    }

    /// Fetch an organization by name
    pub async fn get(&self, org: &str) -> Result<ApiResponse<Organization>> {
        let request =
            self.client
                .new_request(Method::GET, &endpoints::org_path(org), None::<&()>)?;
        self.client.execute(request).await
    }

    /// Edit an organization.
    ///
    /// Only the fields set on `patch` are sent. The returned value is the
    /// server's representation of the updated organization, which may
    /// differ from the input.
    pub async fn edit(&self, org: &str, patch: &Organization) -> Result<ApiResponse<Organization>> {
        let request =
            self.client
                .new_request(Method::PATCH, &endpoints::org_path(org), Some(patch))?;
        self.client.execute(request).await
    }
}

fn list_path(user: Option<&str>, opts: Option<&ListOptions>) -> String {
    let path = match user {
        Some(owner) if !owner.is_empty() => endpoints::owner_orgs_path(owner),
        _ => endpoints::user_orgs_path(),
    };
    endpoints::with_list_options(path, opts)
}
