//! # TUI Components
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: Top status bar with provider name, status, and spinner
//! - `HistoryBar`: Recent searches and the active category
//! - `DetailView`: The selected item's full record
//!
//! ### Stateful Components
//!
//! - `InputBox`: Single-line text field (search query and filter text)
//! - `ResultList`: Filtered results with a persistent selection
//!
//! Components receive external data as props, never by reaching into `App`:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! TitleBar::new(name, status, spinner).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! title_bar.render(frame, area); // reads from global App
//! ```

pub mod detail_view;
pub mod history_bar;
pub mod input_box;
pub mod result_list;
pub mod title_bar;

pub use detail_view::DetailView;
pub use history_bar::HistoryBar;
pub use input_box::{InputBox, InputEvent};
pub use result_list::{ResultList, ResultListState};
pub use title_bar::TitleBar;
