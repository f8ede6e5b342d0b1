//! Typed async client for the GitHub v3 organization endpoints.
//!
//! # Overview
//!
//! [`GithubClient`] is the shared transport: it resolves request paths
//! against a configurable base URL, attaches authentication, and decodes
//! JSON responses together with their rate-limit and pagination metadata.
//! Resource services borrow it, so one client can back any number of
//! concurrent operations:
//!
//! ```no_run
//! use octoapi_client::{GithubClient, ListOptions};
//!
//! # async fn demo() -> octoapi_client::Result<()> {
//! let client = GithubClient::from_env()?;
//!
//! let orgs = client.orgs().list(Some("octocat"), None).await?;
//! println!("{} organizations", orgs.data.len());
//!
//! let page2 = ListOptions::page(2);
//! let more = client.orgs().list(Some("octocat"), Some(&page2)).await?;
//! if let Some(next) = more.meta.pages.next {
//!     println!("next page: {}", next);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod options;
pub mod orgs;
pub mod response;

// Re-export commonly used types
pub use client::{GithubClient, GithubClientBuilder, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use options::ListOptions;
pub use orgs::{Organization, OrgsService, Plan};
pub use response::{ApiResponse, PageLinks, RateLimit, ResponseMeta};
