//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Focus
//!
//! Keystrokes go to one of three places, cycled with Tab:
//!
//! - **Query**: the search box. Enter submits a fetch.
//! - **Filter**: the local filter box (Ctrl+F). Edits narrow the list live.
//! - **List**: Up/Down move the selection, Enter opens the detail view.
//!
//! Global keys: Ctrl+T cycles the category, Alt+1..5 re-runs a recent
//! search, Esc leaves the detail view (or the current field, then quits),
//! Ctrl+C quits.
//!
//! ## Redraw Strategy
//!
//! While a request is in flight the loop redraws every ~80ms for the
//! spinner. Otherwise it sleeps up to 500ms and only redraws on events or
//! completed requests.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::effects;
use crate::core::navigator::NavigatorState;
use crate::core::state::App;
use crate::provider::ProviderAdapter;
use crate::provider::providers::build_adapter;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, ResultListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which widget receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Query,
    Filter,
    List,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Query => Focus::Filter,
            Focus::Filter => Focus::List,
            Focus::List => Focus::Query,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub query_box: InputBox,
    pub filter_box: InputBox,
    pub results: ResultListState,
    pub focus: Focus,
    /// Lines scrolled in the detail pane
    pub detail_scroll: u16,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            query_box: InputBox::new("Search (Enter)"),
            filter_box: InputBox::new("Filter (Ctrl+F)"),
            results: ResultListState::new(),
            focus: Focus::Query, // User expects to type immediately
            detail_scroll: 0,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let provider = build_adapter(config.provider, config.adapter);
    let mut app = App::new(provider);
    let mut tui = TuiState::new();
    if let Some(query) = app.provider.default_query() {
        tui.query_box.set_text(query);
    }

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    for action in [Action::Startup, Action::LoadCategories] {
        let effect = update(&mut app, action);
        spawn_effect(&app.provider, effect, &tx);
    }

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'main: loop {
        let animating = app.orchestrator.is_loading()
            || app.navigator.state() == NavigatorState::DetailLoading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let actions = handle_event(&app, &mut tui, event);
            for action in actions {
                let effect = update(&mut app, action);
                if effect == Effect::Quit {
                    break 'main;
                }
                spawn_effect(&app.provider, effect, &tx);
            }
        }

        // Handle completions from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            spawn_effect(&app.provider, effect, &tx);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Translate one terminal event into core actions, updating TUI-local state.
fn handle_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Vec<Action> {
    let in_detail = app.navigator.state() != NavigatorState::Listing;

    match event {
        TuiEvent::Resize => Vec::new(),
        TuiEvent::ForceQuit => vec![Action::Quit],
        TuiEvent::Escape => {
            if in_detail {
                tui.detail_scroll = 0;
                vec![Action::Back]
            } else if tui.focus != Focus::List {
                tui.focus = Focus::List;
                Vec::new()
            } else {
                vec![Action::Quit]
            }
        }
        TuiEvent::ToggleFocus => {
            tui.focus = tui.focus.next();
            Vec::new()
        }
        TuiEvent::FocusFilter => {
            tui.focus = Focus::Filter;
            Vec::new()
        }
        TuiEvent::CycleCategory => {
            let options = app.category_options();
            if options.len() < 2 {
                return Vec::new();
            }
            let current = app.predicate.category_value();
            let index = options.iter().position(|o| *o == current).unwrap_or(0);
            let next = options[(index + 1) % options.len()];
            vec![Action::SetCategory(next.to_string())]
        }
        TuiEvent::RecallHistory(index) => match app.history.get(index) {
            Some(query) => {
                tui.query_box.set_text(query);
                if app.provider.capabilities().local_text_search {
                    tui.filter_box.set_text(query);
                }
                tui.detail_scroll = 0;
                let mut actions = Vec::new();
                if in_detail {
                    actions.push(Action::Back);
                }
                actions.push(Action::RecallHistory(index));
                actions
            }
            None => Vec::new(),
        },
        event if in_detail => {
            match event {
                TuiEvent::CursorUp => tui.detail_scroll = tui.detail_scroll.saturating_sub(1),
                TuiEvent::CursorDown => tui.detail_scroll = tui.detail_scroll.saturating_add(1),
                TuiEvent::PageUp => tui.detail_scroll = tui.detail_scroll.saturating_sub(10),
                TuiEvent::PageDown => tui.detail_scroll = tui.detail_scroll.saturating_add(10),
                _ => {}
            }
            Vec::new()
        }
        event => match tui.focus {
            Focus::Query => match tui.query_box.handle_event(&event) {
                Some(InputEvent::Submit(text)) => {
                    tui.results = ResultListState::new();
                    if app.provider.capabilities().local_text_search {
                        tui.filter_box.set_text(text.trim());
                    }
                    vec![Action::Submit(text)]
                }
                _ => list_navigation(app, tui, &event),
            },
            Focus::Filter => match tui.filter_box.handle_event(&event) {
                Some(InputEvent::Changed(text)) => vec![Action::SetFilterText(text)],
                Some(InputEvent::Submit(_)) => {
                    tui.focus = Focus::List;
                    Vec::new()
                }
                None => list_navigation(app, tui, &event),
            },
            Focus::List => match event {
                TuiEvent::Submit => {
                    let filtered = app.filtered();
                    match tui.results.selected().and_then(|i| filtered.get(i)) {
                        Some(item) => {
                            tui.detail_scroll = 0;
                            vec![Action::Select(item.id.clone())]
                        }
                        None => Vec::new(),
                    }
                }
                // Typing jumps back to the search box
                TuiEvent::InputChar(_) | TuiEvent::Paste(_) => {
                    tui.focus = Focus::Query;
                    tui.query_box.handle_event(&event);
                    Vec::new()
                }
                _ => list_navigation(app, tui, &event),
            },
        },
    }
}

/// Up/Down/PageUp/PageDown move the list selection from any focus.
fn list_navigation(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Vec<Action> {
    let len = app.filtered().len();
    match event {
        TuiEvent::CursorUp => tui.results.move_by(-1, len),
        TuiEvent::CursorDown => tui.results.move_by(1, len),
        TuiEvent::PageUp => tui.results.move_by(-10, len),
        TuiEvent::PageDown => tui.results.move_by(10, len),
        _ => {}
    }
    Vec::new()
}

/// Run an effect on the tokio runtime, sending its completion back to the
/// event loop.
fn spawn_effect(provider: &Arc<dyn ProviderAdapter>, effect: Effect, tx: &mpsc::Sender<Action>) {
    if matches!(effect, Effect::None | Effect::Quit) {
        return;
    }
    let provider = Arc::clone(provider);
    let tx = tx.clone();
    tokio::spawn(async move {
        if let Some(action) = effects::perform(provider.as_ref(), effect).await
            && tx.send(action).is_err()
        {
            warn!("Failed to send completion: receiver dropped");
        }
    });
}
