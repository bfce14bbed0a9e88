//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::state::App;
use crate::provider::{
    Capabilities, DetailRecord, FilterFields, ProviderAdapter, ProviderError, ResourceItem,
};

pub const QUERY_REQUIRED: Capabilities = Capabilities {
    requires_non_empty_query: true,
    has_separate_detail_fetch: false,
    has_category_list: false,
    local_text_search: false,
};

pub const QUERY_OPTIONAL: Capabilities = Capabilities {
    requires_non_empty_query: false,
    has_separate_detail_fetch: false,
    has_category_list: false,
    local_text_search: false,
};

/// A canned provider for tests that don't need real API calls.
pub struct StubProvider {
    pub capabilities: Capabilities,
    pub fields: FilterFields,
    pub default_query: Option<String>,
    pub list: Vec<ResourceItem>,
}

impl StubProvider {
    /// Needs a query, detail built from the list item.
    pub fn recipes() -> Self {
        Self {
            capabilities: QUERY_REQUIRED,
            fields: FilterFields::new(&["title", "category"], Some("category")),
            default_query: None,
            list: Vec::new(),
        }
    }

    /// Default list, category endpoint, local text search.
    pub fn products() -> Self {
        Self {
            capabilities: Capabilities {
                has_category_list: true,
                local_text_search: true,
                ..QUERY_OPTIONAL
            },
            fields: FilterFields::new(&["title", "description"], Some("category")),
            default_query: None,
            list: Vec::new(),
        }
    }

    /// Needs a query and a second request for detail.
    pub fn users() -> Self {
        Self {
            capabilities: Capabilities {
                has_separate_detail_fetch: true,
                ..QUERY_REQUIRED
            },
            fields: FilterFields::new(&["title"], Some("type")),
            default_query: None,
            list: Vec::new(),
        }
    }

    pub fn with_default_query(mut self, query: &str) -> Self {
        self.default_query = Some(query.to_string());
        self
    }

    pub fn with_list(mut self, list: Vec<ResourceItem>) -> Self {
        self.list = list;
        self
    }
}

#[async_trait]
impl ProviderAdapter for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn filter_fields(&self) -> FilterFields {
        self.fields.clone()
    }

    fn default_query(&self) -> Option<&str> {
        self.default_query.as_deref()
    }

    async fn fetch_list(&self, _query: &str) -> Result<Vec<ResourceItem>, ProviderError> {
        Ok(self.list.clone())
    }

    async fn fetch_detail(&self, id: &str) -> Result<DetailRecord, ProviderError> {
        Ok(DetailRecord::new(id, format!("Profile of {id}")))
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, ProviderError> {
        Ok(vec!["electronics".to_string(), "jewelery".to_string()])
    }
}

pub fn item(id: &str, title: &str) -> ResourceItem {
    ResourceItem::new(id, title)
}

/// Items whose ids double as titles.
pub fn items(ids: &[&str]) -> Vec<ResourceItem> {
    ids.iter().map(|id| item(id, &format!("Item {id}"))).collect()
}

pub fn app_with(provider: StubProvider) -> App {
    App::new(Arc::new(provider))
}

/// Creates a test App with a recipe-shaped StubProvider.
pub fn test_app() -> App {
    app_with(StubProvider::recipes())
}
