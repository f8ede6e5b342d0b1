//! Response metadata types
//!
//! Every successful operation returns the decoded payload together with the
//! transport metadata GitHub attaches to each response: rate-limit counters
//! and pagination links.

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use url::Url;

/// A decoded API response: the typed payload plus transport metadata
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// Decoded response body
    pub data: T,
    /// Metadata captured from the response headers
    pub meta: ResponseMeta,
}

impl<T> ApiResponse<T> {
    /// Discard the metadata and keep the payload
    pub fn into_inner(self) -> T {
        self.data
    }
}

/// Transport metadata captured from a response
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    /// HTTP status of the response
    pub status: StatusCode,
    /// Rate-limit state, when the server reported it
    pub rate: Option<RateLimit>,
    /// Pagination links parsed from the `Link` header
    pub pages: PageLinks,
}

impl ResponseMeta {
    pub(crate) fn from_response(response: &reqwest::Response) -> Self {
        let headers = response.headers();
        Self {
            status: response.status(),
            rate: RateLimit::from_headers(headers),
            pages: headers
                .get("link")
                .and_then(|value| value.to_str().ok())
                .map(PageLinks::parse)
                .unwrap_or_default(),
        }
    }

    /// Metadata with a status and nothing else, for responses that carried
    /// no usable headers.
    pub fn empty(status: StatusCode) -> Self {
        Self {
            status,
            rate: None,
            pages: PageLinks::default(),
        }
    }
}

/// Rate-limit counters reported via the `X-RateLimit-*` headers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Maximum requests allowed in the current window
    pub limit: u32,
    /// Requests remaining in the current window
    pub remaining: u32,
    /// When the window resets
    pub reset: Option<DateTime<Utc>>,
}

impl RateLimit {
    /// Parse rate-limit counters from response headers.
    ///
    /// Returns `None` unless both the limit and remaining counters are
    /// present and well-formed; a missing reset timestamp is tolerated.
    pub(crate) fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let limit = header_u32(headers, "x-ratelimit-limit")?;
        let remaining = header_u32(headers, "x-ratelimit-remaining")?;
        let reset = headers
            .get("x-ratelimit-reset")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<i64>().ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0));

        Some(Self {
            limit,
            remaining,
            reset,
        })
    }
}

fn header_u32(headers: &HeaderMap, name: &str) -> Option<u32> {
    headers.get(name)?.to_str().ok()?.parse().ok()
}

/// Page numbers extracted from the RFC 5988 `Link` response header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub first: Option<u32>,
    pub prev: Option<u32>,
    pub next: Option<u32>,
    pub last: Option<u32>,
}

impl PageLinks {
    /// Parse a `Link` header value.
    ///
    /// Entries with unknown rels, unparsable URLs, or no `page` query
    /// parameter are skipped.
    pub fn parse(value: &str) -> Self {
        let mut pages = Self::default();

        for entry in value.split(',') {
            let mut sections = entry.split(';');

            let Some(target) = sections.next() else {
                continue;
            };
            let target = target.trim();
            if !target.starts_with('<') || !target.ends_with('>') {
                continue;
            }

            let Ok(url) = Url::parse(&target[1..target.len() - 1]) else {
                continue;
            };

            let mut page = None;
            for (key, val) in url.query_pairs() {
                if key == "page" {
                    page = val.parse::<u32>().ok();
                }
            }
            let Some(page) = page else {
                continue;
            };

            for section in sections {
                let Some(rel) = section.trim().strip_prefix("rel=") else {
                    continue;
                };
                match rel.trim_matches('"') {
                    "first" => pages.first = Some(page),
                    "prev" => pages.prev = Some(page),
                    "next" => pages.next = Some(page),
                    "last" => pages.last = Some(page),
                    _ => {}
                }
            }
        }

        pages
    }

    /// Whether the header carried no usable page links
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
