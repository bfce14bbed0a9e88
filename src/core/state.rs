//! # Application State
//!
//! Core business state for Explorer. Domain logic only, no TUI-specific
//! types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn ProviderAdapter>  // the data source being browsed
//! ├── orchestrator: FetchOrchestrator     // list fetch state + result set
//! ├── predicate: FilterPredicate          // local filters over the result set
//! ├── history: HistoryCache               // recent successful queries
//! ├── navigator: Navigator                // selected item + detail fetch
//! ├── categories: Vec<String>             // category options, if the provider lists them
//! └── status_message: String              // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::error::ExplorerError;
use crate::core::filter::{self, ALL_CATEGORIES, FilterPredicate};
use crate::core::history::HistoryCache;
use crate::core::navigator::{Navigator, NavigatorState};
use crate::core::orchestrator::{FetchOrchestrator, FetchState};
use crate::provider::{DetailRecord, FilterFields, ProviderAdapter, ResourceItem};

pub struct App {
    pub provider: Arc<dyn ProviderAdapter>,
    pub orchestrator: FetchOrchestrator,
    pub predicate: FilterPredicate,
    pub filter_fields: FilterFields,
    pub history: HistoryCache,
    pub navigator: Navigator,
    pub categories: Vec<String>,
    pub status_message: String,
}

/// Read-only view of everything the presentation layer renders.
#[derive(Debug)]
pub struct Snapshot<'a> {
    pub fetch_state: FetchState,
    pub result_count: usize,
    pub filtered: Vec<&'a ResourceItem>,
    pub history: &'a [String],
    pub navigator_state: NavigatorState,
    pub detail_fetch_state: FetchState,
    pub detail: Option<&'a DetailRecord>,
    /// Primary-channel error, or the detail error while one is shown.
    pub error: Option<&'a ExplorerError>,
}

impl App {
    pub fn new(provider: Arc<dyn ProviderAdapter>) -> Self {
        let orchestrator = FetchOrchestrator::new(provider.capabilities());
        let filter_fields = provider.filter_fields();
        let status_message = format!("Browsing {}", provider.name());
        Self {
            provider,
            orchestrator,
            predicate: FilterPredicate::accept_all(),
            filter_fields,
            history: HistoryCache::new(),
            navigator: Navigator::new(),
            categories: Vec::new(),
            status_message,
        }
    }

    /// The result set narrowed by the current predicate.
    pub fn filtered(&self) -> Vec<&ResourceItem> {
        filter::apply(self.orchestrator.results(), &self.predicate)
    }

    /// Category choices for the presentation, `"all"` first.
    ///
    /// Uses the provider's category list when one was loaded, otherwise the
    /// distinct category values of the current result set in first-seen order.
    pub fn category_options(&self) -> Vec<&str> {
        let mut options = vec![ALL_CATEGORIES];
        if !self.categories.is_empty() {
            options.extend(self.categories.iter().map(String::as_str));
            return options;
        }
        let Some(field) = self.filter_fields.category.as_deref() else {
            return options;
        };
        for value in self.orchestrator.results().iter().filter_map(|i| i.field(field)) {
            if !options.contains(&value) {
                options.push(value);
            }
        }
        options
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            fetch_state: self.orchestrator.state(),
            result_count: self.orchestrator.results().len(),
            filtered: self.filtered(),
            history: self.history.list(),
            navigator_state: self.navigator.state(),
            detail_fetch_state: self.navigator.fetch_state(),
            detail: self.navigator.detail(),
            error: self.navigator.error().or(self.orchestrator.error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{item, test_app};

    use super::*;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        let snapshot = app.snapshot();
        assert_eq!(snapshot.fetch_state, FetchState::Idle);
        assert_eq!(snapshot.navigator_state, NavigatorState::Listing);
        assert!(snapshot.filtered.is_empty());
        assert!(snapshot.history.is_empty());
        assert!(snapshot.error.is_none());
        assert_eq!(app.status_message, "Browsing stub");
    }

    #[test]
    fn test_category_options_start_with_all() {
        let mut app = test_app();
        app.categories = vec!["electronics".to_string(), "jewelery".to_string()];
        assert_eq!(app.category_options(), vec!["all", "electronics", "jewelery"]);
    }

    #[test]
    fn test_category_options_fall_back_to_result_values() {
        let mut app = test_app();
        let ticket = app.orchestrator.submit("chicken", true).unwrap();
        app.orchestrator.complete(
            ticket.seq,
            Ok(vec![
                item("1", "Teriyaki").with_field("category", "Chicken"),
                item("2", "Curry").with_field("category", "Chicken"),
                item("3", "Tart").with_field("category", "Dessert"),
                item("4", "Mystery"),
            ]),
        );
        assert_eq!(app.category_options(), vec!["all", "Chicken", "Dessert"]);
    }
}
