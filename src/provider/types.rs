use serde::{Deserialize, Serialize};

/// A normalized record from one provider's list response.
///
/// `id` is stable for the lifetime of the result set. `fields` is the
/// provider-specific bag; the core only reads it through the filter
/// predicates, by field name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResourceItem {
    pub id: String,
    pub display_title: String,
    pub fields: Vec<(String, String)>,
}

impl ResourceItem {
    pub fn new(id: impl Into<String>, display_title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_title: display_title.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field. Empty values are skipped so lookups stay meaningful.
    pub fn with_field(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.fields.push((name.to_string(), value));
        }
        self
    }

    pub fn with_optional_field(self, name: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.with_field(name, v),
            None => self,
        }
    }

    /// Looks up a field by name. `"title"` falls back to the display title.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .or_else(|| (name == "title").then_some(self.display_title.as_str()))
    }
}

/// The full view of one item, built from the list item or fetched separately.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DetailRecord {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    /// Labelled facts, in display order.
    pub facts: Vec<(String, String)>,
    /// A titled list section (ingredients, genres, ...).
    pub entries: Vec<String>,
    pub entries_label: Option<String>,
    /// Long-form text (instructions, description, bio).
    pub body: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
}

impl DetailRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn fact(mut self, label: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.facts.push((label.to_string(), value));
        }
        self
    }

    pub fn optional_fact(self, label: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.fact(label, v),
            None => self,
        }
    }
}

/// Construction-time settings for one adapter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdapterConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Query issued at startup, if any.
    pub default_query: Option<String>,
    /// External deadline for each HTTP request. Unset means no deadline.
    pub request_timeout_secs: Option<u64>,
}

impl AdapterConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Base URL without a trailing slash, ready for `format!("{}/path")`.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
