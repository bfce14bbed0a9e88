//! # Core Application Logic
//!
//! This module contains Explorer's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. I/O only via    │
//!                    │  effects::perform       │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  Provider  │
//!     │  Adapter   │                          │  Adapters  │
//!     │ (ratatui)  │                          │ (reqwest)  │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and its render `Snapshot`
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`effects`]: Runs the `Effect`s `update()` asks for
//! - [`orchestrator`]: List fetches guarded by sequence numbers
//! - [`navigator`]: Master-detail state machine
//! - [`filter`]: Pure local filtering of a result set
//! - [`history`]: Most-recent-first query history
//! - [`error`]: User-facing error taxonomy
//! - [`config`]: Config file, env var, and CLI resolution

pub mod action;
pub mod config;
pub mod effects;
pub mod error;
pub mod filter;
pub mod history;
pub mod navigator;
pub mod orchestrator;
pub mod state;
