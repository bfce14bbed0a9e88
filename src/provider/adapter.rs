use std::fmt;

use async_trait::async_trait;

use super::types::{DetailRecord, ResourceItem};

/// Errors that can occur during provider operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// Adapter misconfigured (missing API key, no detail endpoint).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned a non-2xx response.
    Api { status: u16, message: String },
    /// Failed to decode the provider's response body.
    Parse(String),
}

impl ProviderError {
    /// HTTP status, when the provider answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Config(msg) => write!(f, "config error: {msg}"),
            ProviderError::Network(msg) => write!(f, "network error: {msg}"),
            ProviderError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ProviderError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// What the core needs to know about a provider to drive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// An empty query is rejected locally instead of listing a default.
    pub requires_non_empty_query: bool,
    /// Full detail needs a second request; otherwise it is built from the list item.
    pub has_separate_detail_fetch: bool,
    /// The provider exposes a category list endpoint.
    pub has_category_list: bool,
    /// The server ignores the query; it narrows the list through the local text filter.
    pub local_text_search: bool,
}

/// Which `ResourceItem` fields the local filters look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterFields {
    pub searchable: Vec<String>,
    pub category: Option<String>,
}

impl FilterFields {
    pub fn new(searchable: &[&str], category: Option<&str>) -> Self {
        Self {
            searchable: searchable.iter().map(|s| s.to_string()).collect(),
            category: category.map(str::to_string),
        }
    }
}

#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    fn capabilities(&self) -> Capabilities;

    fn filter_fields(&self) -> FilterFields {
        FilterFields::new(&["title"], None)
    }

    /// Query issued at startup. `None` with an empty-query-capable provider
    /// means "load the default list".
    fn default_query(&self) -> Option<&str> {
        None
    }

    /// Fetches and normalizes the list for `query` (already trimmed).
    async fn fetch_list(&self, query: &str) -> Result<Vec<ResourceItem>, ProviderError>;

    /// Fetches full detail for one item. Only called when
    /// `has_separate_detail_fetch` is set.
    async fn fetch_detail(&self, id: &str) -> Result<DetailRecord, ProviderError> {
        Err(ProviderError::Config(format!(
            "{} has no detail endpoint (requested {id})",
            self.name()
        )))
    }

    /// Builds the detail view from an already-fetched list item.
    fn detail_from_item(&self, item: &ResourceItem) -> DetailRecord {
        let mut detail = DetailRecord::new(item.id.clone(), item.display_title.clone());
        detail.facts = item.fields.clone();
        detail
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, ProviderError> {
        Ok(Vec::new())
    }
}
