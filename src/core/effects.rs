//! # Effect Execution
//!
//! The one place the core reaches the network, always through the
//! `ProviderAdapter` trait. Every outcome, including failures, comes back as
//! an `Action` to feed into `update()`; nothing propagates past here.

use log::{debug, info};

use crate::core::action::{Action, Effect};
use crate::provider::ProviderAdapter;

/// Performs `effect` and returns the completion action, if the effect has one.
pub async fn perform(provider: &dyn ProviderAdapter, effect: Effect) -> Option<Action> {
    match effect {
        Effect::FetchList(ticket) => {
            info!(
                "Fetching list from {} (seq={}, query='{}')",
                provider.name(),
                ticket.seq,
                ticket.query
            );
            let result = provider.fetch_list(&ticket.query).await;
            debug!(
                "List fetch seq={} finished: {}",
                ticket.seq,
                match &result {
                    Ok(items) => format!("{} items", items.len()),
                    Err(e) => e.to_string(),
                }
            );
            Some(Action::ListLoaded {
                seq: ticket.seq,
                result,
            })
        }
        Effect::FetchDetail(ticket) => {
            info!(
                "Fetching detail from {} (seq={}, id={})",
                provider.name(),
                ticket.seq,
                ticket.item_id
            );
            let result = provider.fetch_detail(&ticket.item_id).await;
            Some(Action::DetailLoaded {
                seq: ticket.seq,
                result,
            })
        }
        Effect::FetchCategories => Some(Action::CategoriesLoaded(
            provider.fetch_categories().await,
        )),
        Effect::None | Effect::Quit => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::core::navigator::NavigatorState;
    use crate::core::orchestrator::FetchState;
    use crate::test_support::{StubProvider, app_with, items};

    #[tokio::test]
    async fn test_round_trip_through_stub_provider() {
        let mut app = app_with(StubProvider::users().with_list(items(&["torvalds", "octocat"])));

        let effect = update(&mut app, Action::Submit("o".into()));
        let action = perform(app.provider.clone().as_ref(), effect).await.unwrap();
        update(&mut app, action);
        assert_eq!(app.snapshot().fetch_state, FetchState::Success);
        assert_eq!(app.history.list(), ["o"]);

        let effect = update(&mut app, Action::Select("octocat".into()));
        assert!(matches!(effect, Effect::FetchDetail(_)));
        let action = perform(app.provider.clone().as_ref(), effect).await.unwrap();
        update(&mut app, action);
        let snapshot = app.snapshot();
        assert_eq!(snapshot.navigator_state, NavigatorState::DetailLoaded);
        assert_eq!(
            snapshot.detail.map(|d| d.title.as_str()),
            Some("Profile of octocat")
        );
    }

    #[tokio::test]
    async fn test_none_and_quit_have_no_completion() {
        let provider = StubProvider::recipes();
        assert!(perform(&provider, Effect::None).await.is_none());
        assert!(perform(&provider, Effect::Quit).await.is_none());
    }

    #[tokio::test]
    async fn test_categories_effect() {
        let provider = StubProvider::products();
        match perform(&provider, Effect::FetchCategories).await {
            Some(Action::CategoriesLoaded(Ok(categories))) => assert_eq!(categories.len(), 2),
            other => panic!("unexpected completion: {other:?}"),
        }
    }
}
