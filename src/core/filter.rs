//! # Local Filtering
//!
//! Narrows the current result set without touching the network. `apply` is
//! a pure function of the items and the predicate: same inputs, same
//! order-preserving subsequence.

use crate::provider::{FilterFields, ResourceItem};

/// Category value that accepts every item.
pub const ALL_CATEGORIES: &str = "all";

/// Case-insensitive substring match over any of `fields`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatch {
    pub needle: String,
    pub fields: Vec<String>,
}

/// Exact match of one field against a selected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatch {
    pub field: String,
    pub value: String,
}

/// Zero or more criteria, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPredicate {
    pub text: Option<TextMatch>,
    pub category: Option<CategoryMatch>,
}

impl FilterPredicate {
    /// The predicate that accepts everything.
    pub fn accept_all() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, needle: impl Into<String>, fields: &[String]) -> Self {
        self.text = Some(TextMatch {
            needle: needle.into(),
            fields: fields.to_vec(),
        });
        self
    }

    pub fn with_category(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.category = Some(CategoryMatch {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Replaces the text criterion, searching the provider's searchable fields.
    pub fn set_text(&mut self, needle: &str, fields: &FilterFields) {
        self.text = Some(TextMatch {
            needle: needle.to_string(),
            fields: fields.searchable.clone(),
        });
    }

    /// Replaces the category criterion. No-op for providers without a category field.
    pub fn set_category(&mut self, value: &str, fields: &FilterFields) {
        if let Some(field) = &fields.category {
            self.category = Some(CategoryMatch {
                field: field.clone(),
                value: value.to_string(),
            });
        }
    }

    pub fn text_needle(&self) -> &str {
        self.text.as_ref().map(|t| t.needle.as_str()).unwrap_or("")
    }

    pub fn category_value(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.value.as_str())
            .unwrap_or(ALL_CATEGORIES)
    }

    pub fn matches(&self, item: &ResourceItem) -> bool {
        self.text.as_ref().is_none_or(|t| t.matches(item))
            && self.category.as_ref().is_none_or(|c| c.matches(item))
    }
}

impl TextMatch {
    fn matches(&self, item: &ResourceItem) -> bool {
        let needle = self.needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.fields
            .iter()
            .filter_map(|name| item.field(name))
            .any(|value| value.to_lowercase().contains(&needle))
    }
}

impl CategoryMatch {
    fn matches(&self, item: &ResourceItem) -> bool {
        self.value == ALL_CATEGORIES || item.field(&self.field) == Some(self.value.as_str())
    }
}

/// Returns the items accepted by `predicate`, in their original order.
pub fn apply<'a>(items: &'a [ResourceItem], predicate: &FilterPredicate) -> Vec<&'a ResourceItem> {
    items.iter().filter(|item| predicate.matches(item)).collect()
}
