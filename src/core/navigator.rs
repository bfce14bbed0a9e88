//! # Master-Detail Navigator
//!
//! Tracks which single item, if any, is being inspected.
//!
//! ```text
//!            select (inline detail)
//! Listing ──────────────────────────────► DetailLoaded
//!    │  select (needs fetch)                  ▲
//!    └──────────────► DetailLoading ──ok──────┘
//!                          │
//!                          └──err──► DetailError
//! DetailLoaded | DetailError ──back──► Listing
//! ```
//!
//! The detail channel has its own sequence number. Selecting another item or
//! going back invalidates any pending detail response.

use log::debug;

use crate::core::error::ExplorerError;
use crate::core::orchestrator::FetchState;
use crate::provider::{DetailRecord, ProviderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigatorState {
    #[default]
    Listing,
    DetailLoading,
    DetailLoaded,
    DetailError,
}

/// A detail request the navigator wants made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    pub seq: u64,
    pub item_id: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
enum DetailView {
    #[default]
    Listing,
    Loading { item_id: String },
    Loaded(DetailRecord),
    Failed { item_id: String, error: ExplorerError },
}

#[derive(Debug, Default)]
pub struct Navigator {
    seq: u64,
    view: DetailView,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `item_id`. With `inline` detail the view is complete at once and
    /// no ticket is issued; otherwise a detail fetch is requested.
    ///
    /// Selecting while another detail is open behaves as `back()` followed by
    /// `select()`.
    pub fn select(&mut self, item_id: &str, inline: Option<DetailRecord>) -> Option<DetailTicket> {
        self.back();
        match inline {
            Some(detail) => {
                self.view = DetailView::Loaded(detail);
                None
            }
            None => {
                self.view = DetailView::Loading {
                    item_id: item_id.to_string(),
                };
                Some(DetailTicket {
                    seq: self.seq,
                    item_id: item_id.to_string(),
                })
            }
        }
    }

    /// Applies a detail response if it answers the current selection.
    /// Returns whether it was applied.
    pub fn complete(&mut self, seq: u64, outcome: Result<DetailRecord, ProviderError>) -> bool {
        let item_id = match &self.view {
            DetailView::Loading { item_id } if seq == self.seq => item_id.clone(),
            _ => {
                debug!(
                    "Discarding stale detail response seq={} (current={})",
                    seq, self.seq
                );
                return false;
            }
        };

        self.view = match outcome {
            Ok(detail) => DetailView::Loaded(detail),
            Err(e) => DetailView::Failed {
                item_id,
                error: ExplorerError::detail(e),
            },
        };
        true
    }

    /// Returns to the list, discarding the detail record.
    pub fn back(&mut self) {
        self.seq += 1;
        self.view = DetailView::Listing;
    }

    pub fn state(&self) -> NavigatorState {
        match self.view {
            DetailView::Listing => NavigatorState::Listing,
            DetailView::Loading { .. } => NavigatorState::DetailLoading,
            DetailView::Loaded(_) => NavigatorState::DetailLoaded,
            DetailView::Failed { .. } => NavigatorState::DetailError,
        }
    }

    /// Fetch state of the detail channel.
    pub fn fetch_state(&self) -> FetchState {
        match self.view {
            DetailView::Listing => FetchState::Idle,
            DetailView::Loading { .. } => FetchState::Loading,
            DetailView::Loaded(_) => FetchState::Success,
            DetailView::Failed { .. } => FetchState::Error,
        }
    }

    pub fn detail(&self) -> Option<&DetailRecord> {
        match &self.view {
            DetailView::Loaded(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ExplorerError> {
        match &self.view {
            DetailView::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Id of the item being inspected, in any detail state.
    pub fn selected_id(&self) -> Option<&str> {
        match &self.view {
            DetailView::Listing => None,
            DetailView::Loading { item_id } | DetailView::Failed { item_id, .. } => {
                Some(item_id.as_str())
            }
            DetailView::Loaded(detail) => Some(detail.id.as_str()),
        }
    }
}
