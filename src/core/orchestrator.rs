//! # Fetch Orchestrator
//!
//! Owns the primary (list) channel: the current result set, its fetch
//! state, and the sequence number that decides which response is allowed
//! to land.
//!
//! ```text
//! submit("a") ─► seq 1 ─┐
//! submit("b") ─► seq 2 ─┼─► complete(2, ..) applied
//!                       └─► complete(1, ..) discarded (superseded)
//! ```
//!
//! No I/O happens here. `submit` hands back a `FetchTicket` describing the
//! request to make; whoever performs it reports back through `complete`.

use log::debug;

use crate::core::error::ExplorerError;
use crate::provider::{Capabilities, ProviderError, ResourceItem};

/// Lifecycle of one fetch channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// A request the orchestrator wants made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    /// Trimmed query; empty means the provider's default list.
    pub query: String,
    /// Whether a non-empty success should be remembered in history.
    pub record_history: bool,
}

/// What happened to a completed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// A newer submission exists; the response was dropped.
    Stale,
    /// The response was applied. `record` is the query to add to history, if any.
    Applied { record: Option<String> },
}

#[derive(Debug)]
pub struct FetchOrchestrator {
    capabilities: Capabilities,
    /// Highest sequence number issued so far.
    latest_seq: u64,
    /// Ticket currently awaiting its response.
    pending: Option<FetchTicket>,
    state: FetchState,
    results: Vec<ResourceItem>,
    error: Option<ExplorerError>,
}

impl FetchOrchestrator {
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            latest_seq: 0,
            pending: None,
            state: FetchState::Idle,
            results: Vec::new(),
            error: None,
        }
    }

    /// Starts a fetch for `query`.
    ///
    /// Returns `None` when the query is rejected locally (empty query on a
    /// provider that needs one). Either way any in-flight response is
    /// superseded.
    pub fn submit(&mut self, query: &str, record_history: bool) -> Option<FetchTicket> {
        self.latest_seq += 1;
        let query = query.trim();

        if query.is_empty() && self.capabilities.requires_non_empty_query {
            self.pending = None;
            self.state = FetchState::Error;
            self.error = Some(ExplorerError::EmptyQuery);
            return None;
        }

        let ticket = FetchTicket {
            seq: self.latest_seq,
            query: query.to_string(),
            record_history,
        };
        self.pending = Some(ticket.clone());
        self.state = FetchState::Loading;
        self.error = None;
        Some(ticket)
    }

    /// Applies a response if it belongs to the latest submission.
    pub fn complete(
        &mut self,
        seq: u64,
        outcome: Result<Vec<ResourceItem>, ProviderError>,
    ) -> Completion {
        let ticket = match self.pending.take() {
            Some(ticket) if ticket.seq == seq => ticket,
            other => {
                debug!(
                    "Discarding stale list response seq={} (latest={})",
                    seq, self.latest_seq
                );
                self.pending = other;
                return Completion::Stale;
            }
        };

        match outcome {
            Ok(items) if !items.is_empty() => {
                self.results = items;
                self.state = FetchState::Success;
                self.error = None;
                let remember = ticket.record_history && !ticket.query.is_empty();
                Completion::Applied {
                    record: remember.then_some(ticket.query),
                }
            }
            Ok(_) => {
                self.results.clear();
                self.state = FetchState::Error;
                self.error = Some(ExplorerError::NoResults);
                Completion::Applied { record: None }
            }
            Err(e) => {
                self.results.clear();
                self.state = FetchState::Error;
                self.error = Some(e.into());
                Completion::Applied { record: None }
            }
        }
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    /// The current result set.
    pub fn results(&self) -> &[ResourceItem] {
        &self.results
    }

    pub fn error(&self) -> Option<&ExplorerError> {
        self.error.as_ref()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    /// Query of the request in flight, if any.
    pub fn pending_query(&self) -> Option<&str> {
        self.pending.as_ref().map(|t| t.query.as_str())
    }
}
