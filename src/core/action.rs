//! # Actions
//!
//! Everything that can happen in Explorer becomes an `Action`.
//! User presses Enter? That's `Action::Submit(query)`.
//! Provider responds? That's `Action::ListLoaded { seq, result }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` describing any I/O to perform. No side
//! effects here. I/O happens in `effects::perform`.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::filter::FilterPredicate;
use crate::core::navigator::DetailTicket;
use crate::core::orchestrator::{Completion, FetchState, FetchTicket};
use crate::core::state::App;
use crate::provider::{DetailRecord, ProviderError, ResourceItem};

#[derive(Debug)]
pub enum Action {
    /// Issue the provider's startup fetch (default query or default list).
    Startup,
    /// Explicit user search.
    Submit(String),
    /// Re-run the n-th recent search (0 = most recent).
    RecallHistory(usize),
    ListLoaded {
        seq: u64,
        result: Result<Vec<ResourceItem>, ProviderError>,
    },
    LoadCategories,
    CategoriesLoaded(Result<Vec<String>, ProviderError>),
    SetFilterText(String),
    SetCategory(String),
    SetPredicate(FilterPredicate),
    /// Inspect the item with this id.
    Select(String),
    DetailLoaded {
        seq: u64,
        result: Result<DetailRecord, ProviderError>,
    },
    Back,
    Quit,
}

/// I/O requested by `update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchList(FetchTicket),
    FetchDetail(DetailTicket),
    FetchCategories,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Startup => {
            let capabilities = app.provider.capabilities();
            let query = match app.provider.default_query() {
                Some(q) => q.to_string(),
                None if !capabilities.requires_non_empty_query => String::new(),
                None => {
                    app.status_message = String::from("Enter a search term to get started");
                    return Effect::None;
                }
            };
            info!("Startup fetch for {}: '{}'", app.provider.name(), query);
            submit(app, &query, false)
        }
        Action::Submit(query) => submit(app, &query, true),
        Action::RecallHistory(index) => match app.history.get(index).map(str::to_string) {
            Some(query) => submit(app, &query, true),
            None => Effect::None,
        },
        Action::ListLoaded { seq, result } => {
            match app.orchestrator.complete(seq, result) {
                Completion::Stale => {}
                Completion::Applied { record } => {
                    if let Some(query) = record {
                        app.history.record(&query);
                    }
                    app.status_message = list_status(app);
                }
            }
            Effect::None
        }
        Action::LoadCategories => {
            if app.provider.capabilities().has_category_list {
                Effect::FetchCategories
            } else {
                Effect::None
            }
        }
        Action::CategoriesLoaded(result) => {
            match result {
                Ok(categories) => {
                    debug!("Loaded {} categories", categories.len());
                    app.categories = categories;
                }
                Err(e) => warn!("Failed to load categories: {}", e),
            }
            Effect::None
        }
        Action::SetFilterText(text) => {
            app.predicate.set_text(&text, &app.filter_fields);
            Effect::None
        }
        Action::SetCategory(value) => {
            app.predicate.set_category(&value, &app.filter_fields);
            Effect::None
        }
        Action::SetPredicate(predicate) => {
            app.predicate = predicate;
            Effect::None
        }
        Action::Select(id) => {
            let Some(item) = app.orchestrator.results().iter().find(|i| i.id == id) else {
                warn!("Select for unknown item id={}", id);
                return Effect::None;
            };
            let inline = if app.provider.capabilities().has_separate_detail_fetch {
                None
            } else {
                Some(app.provider.detail_from_item(item))
            };
            match app.navigator.select(&id, inline) {
                Some(ticket) => {
                    app.status_message = format!("Loading details for {id}...");
                    Effect::FetchDetail(ticket)
                }
                None => Effect::None,
            }
        }
        Action::DetailLoaded { seq, result } => {
            if app.navigator.complete(seq, result) {
                if let Some(err) = app.navigator.error() {
                    app.status_message = err.to_string();
                } else {
                    app.status_message = String::from("Details loaded");
                }
            }
            Effect::None
        }
        Action::Back => {
            app.navigator.back();
            app.status_message = list_status(app);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn submit(app: &mut App, query: &str, record_history: bool) -> Effect {
    match app.orchestrator.submit(query, record_history) {
        Some(ticket) => {
            if app.provider.capabilities().local_text_search {
                app.predicate.set_text(&ticket.query, &app.filter_fields);
            }
            app.status_message = if ticket.query.is_empty() {
                String::from("Loading...")
            } else {
                format!("Searching for '{}'...", ticket.query)
            };
            Effect::FetchList(ticket)
        }
        None => {
            app.status_message = list_status(app);
            Effect::None
        }
    }
}

fn list_status(app: &App) -> String {
    match (app.orchestrator.state(), app.orchestrator.error()) {
        (FetchState::Error, Some(err)) => err.to_string(),
        (FetchState::Loading, _) => String::from("Loading..."),
        (FetchState::Success, _) => format!("Found {} result(s)", app.orchestrator.results().len()),
        _ => format!("Browsing {}", app.provider.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::core::navigator::NavigatorState;
    use crate::test_support::{StubProvider, app_with, item, items};

    fn fetch_ticket(effect: Effect) -> FetchTicket {
        match effect {
            Effect::FetchList(ticket) => ticket,
            other => panic!("expected FetchList, got {other:?}"),
        }
    }

    #[test]
    fn test_submit_then_load_records_history() {
        let mut app = app_with(StubProvider::recipes());
        let ticket = fetch_ticket(update(&mut app, Action::Submit("Pasta".into())));
        let effect = update(
            &mut app,
            Action::ListLoaded {
                seq: ticket.seq,
                result: Ok(items(&["1", "2", "3"])),
            },
        );
        assert_eq!(effect, Effect::None);
        let snapshot = app.snapshot();
        assert_eq!(snapshot.result_count, 3);
        assert_eq!(snapshot.history, ["Pasta"]);
        assert_eq!(app.status_message, "Found 3 result(s)");
    }

    #[test]
    fn test_empty_submit_keeps_previous_results() {
        let mut app = app_with(StubProvider::recipes());
        let ticket = fetch_ticket(update(&mut app, Action::Submit("Pasta".into())));
        update(
            &mut app,
            Action::ListLoaded {
                seq: ticket.seq,
                result: Ok(items(&["1", "2", "3"])),
            },
        );

        assert_eq!(update(&mut app, Action::Submit(String::new())), Effect::None);
        let snapshot = app.snapshot();
        assert_eq!(snapshot.error.map(|e| e.kind()), Some(ErrorKind::EmptyQuery));
        assert_eq!(snapshot.result_count, 3);
        assert_eq!(app.status_message, "Please enter a search term");
    }

    #[test]
    fn test_no_results_does_not_touch_history() {
        let mut app = app_with(StubProvider::recipes());
        let ticket = fetch_ticket(update(&mut app, Action::Submit("zzznoresults".into())));
        update(
            &mut app,
            Action::ListLoaded {
                seq: ticket.seq,
                result: Ok(Vec::new()),
            },
        );
        let snapshot = app.snapshot();
        assert_eq!(snapshot.fetch_state, FetchState::Error);
        assert_eq!(snapshot.error.map(|e| e.kind()), Some(ErrorKind::NoResults));
        assert!(snapshot.history.is_empty());
    }

    #[test]
    fn test_stale_list_response_is_inert() {
        let mut app = app_with(StubProvider::recipes());
        let a = fetch_ticket(update(&mut app, Action::Submit("A".into())));
        let b = fetch_ticket(update(&mut app, Action::Submit("B".into())));
        update(
            &mut app,
            Action::ListLoaded {
                seq: b.seq,
                result: Ok(items(&["b"])),
            },
        );
        update(
            &mut app,
            Action::ListLoaded {
                seq: a.seq,
                result: Ok(items(&["a"])),
            },
        );
        assert_eq!(app.orchestrator.results()[0].id, "b");
        assert_eq!(app.history.list(), ["B"]);
    }

    #[test]
    fn test_local_search_provider_narrows_by_query() {
        let mut app = app_with(StubProvider::products());
        let ticket = fetch_ticket(update(&mut app, Action::Submit("  cotton ".into())));
        update(
            &mut app,
            Action::ListLoaded {
                seq: ticket.seq,
                result: Ok(vec![
                    item("1", "Laptop").with_field("description", "15 inch screen"),
                    item("2", "Shirt").with_field("description", "Cotton tee"),
                ]),
            },
        );
        assert_eq!(app.predicate.text_needle(), "cotton");
        let ids: Vec<&str> = app.filtered().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_server_search_provider_leaves_filter_text_alone() {
        let mut app = app_with(StubProvider::recipes());
        update(&mut app, Action::SetFilterText("soup".into()));
        update(&mut app, Action::Submit("Pasta".into()));
        assert_eq!(app.predicate.text_needle(), "soup");
    }

    #[test]
    fn test_startup_uses_default_query_without_history() {
        let mut app = app_with(StubProvider::recipes().with_default_query("Jalandhar"));
        let ticket = fetch_ticket(update(&mut app, Action::Startup));
        assert_eq!(ticket.query, "Jalandhar");
        assert!(!ticket.record_history);
        update(
            &mut app,
            Action::ListLoaded {
                seq: ticket.seq,
                result: Ok(items(&["1"])),
            },
        );
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_startup_lists_default_for_optional_query_providers() {
        let mut app = app_with(StubProvider::products());
        let ticket = fetch_ticket(update(&mut app, Action::Startup));
        assert_eq!(ticket.query, "");

        let mut app = app_with(StubProvider::users());
        assert_eq!(update(&mut app, Action::Startup), Effect::None);
    }

    #[test]
    fn test_recall_history_resubmits() {
        let mut app = app_with(StubProvider::recipes());
        app.history.record("Pasta");
        app.history.record("Pizza");
        let ticket = fetch_ticket(update(&mut app, Action::RecallHistory(1)));
        assert_eq!(ticket.query, "Pasta");
        assert!(ticket.record_history);
        assert_eq!(update(&mut app, Action::RecallHistory(7)), Effect::None);
    }

    #[test]
    fn test_filter_actions_never_fetch() {
        let mut app = app_with(StubProvider::products());
        let ticket = fetch_ticket(update(&mut app, Action::Startup));
        update(
            &mut app,
            Action::ListLoaded {
                seq: ticket.seq,
                result: Ok(vec![
                    item("1", "Laptop").with_field("category", "electronics"),
                    item("2", "Ring").with_field("category", "jewelery"),
                    item("3", "Monitor").with_field("category", "electronics"),
                ]),
            },
        );

        assert_eq!(update(&mut app, Action::SetCategory("electronics".into())), Effect::None);
        assert_eq!(app.filtered().len(), 2);
        assert_eq!(update(&mut app, Action::SetFilterText("MONI".into())), Effect::None);
        let ids: Vec<&str> = app.filtered().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);

        update(&mut app, Action::SetPredicate(FilterPredicate::accept_all()));
        assert_eq!(app.filtered().len(), 3);
    }

    #[test]
    fn test_select_inline_detail() {
        let mut app = app_with(StubProvider::recipes());
        let ticket = fetch_ticket(update(&mut app, Action::Submit("Pasta".into())));
        update(
            &mut app,
            Action::ListLoaded {
                seq: ticket.seq,
                result: Ok(items(&["1", "2"])),
            },
        );
        assert_eq!(update(&mut app, Action::Select("2".into())), Effect::None);
        let snapshot = app.snapshot();
        assert_eq!(snapshot.navigator_state, NavigatorState::DetailLoaded);
        assert_eq!(snapshot.detail.map(|d| d.id.as_str()), Some("2"));
    }

    #[test]
    fn test_select_unknown_id_is_ignored() {
        let mut app = app_with(StubProvider::recipes());
        assert_eq!(update(&mut app, Action::Select("nope".into())), Effect::None);
        assert_eq!(app.navigator.state(), NavigatorState::Listing);
    }

    #[test]
    fn test_back_after_detail_error_restores_filtered_list() {
        let mut app = app_with(StubProvider::users());
        let ticket = fetch_ticket(update(&mut app, Action::Submit("tor".into())));
        update(
            &mut app,
            Action::ListLoaded {
                seq: ticket.seq,
                result: Ok(vec![
                    item("torvalds", "torvalds").with_field("type", "User"),
                    item("tor-org", "tor-org").with_field("type", "Organization"),
                    item("torproject", "torproject").with_field("type", "User"),
                ]),
            },
        );
        update(&mut app, Action::SetCategory("User".into()));
        let before: Vec<ResourceItem> = app.filtered().into_iter().cloned().collect();

        let detail = match update(&mut app, Action::Select("torvalds".into())) {
            Effect::FetchDetail(ticket) => ticket,
            other => panic!("expected FetchDetail, got {other:?}"),
        };
        update(
            &mut app,
            Action::DetailLoaded {
                seq: detail.seq,
                result: Err(ProviderError::Api {
                    status: 403,
                    message: "rate limited".into(),
                }),
            },
        );
        let snapshot = app.snapshot();
        assert_eq!(snapshot.navigator_state, NavigatorState::DetailError);
        assert_eq!(snapshot.error.map(|e| e.kind()), Some(ErrorKind::DetailFetchError));
        assert_eq!(snapshot.fetch_state, FetchState::Success);

        update(&mut app, Action::Back);
        let after: Vec<ResourceItem> = app.filtered().into_iter().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(app.navigator.state(), NavigatorState::Listing);
        assert!(app.snapshot().error.is_none());
    }

    #[test]
    fn test_categories_only_requested_when_listed() {
        let mut app = app_with(StubProvider::products());
        assert_eq!(update(&mut app, Action::LoadCategories), Effect::FetchCategories);
        update(
            &mut app,
            Action::CategoriesLoaded(Ok(vec!["electronics".into(), "jewelery".into()])),
        );
        assert_eq!(app.category_options(), vec!["all", "electronics", "jewelery"]);

        update(
            &mut app,
            Action::CategoriesLoaded(Err(ProviderError::Network("down".into()))),
        );
        assert_eq!(app.categories.len(), 2);

        let mut app = app_with(StubProvider::recipes());
        assert_eq!(update(&mut app, Action::LoadCategories), Effect::None);
    }

    #[test]
    fn test_quit() {
        let mut app = app_with(StubProvider::recipes());
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
