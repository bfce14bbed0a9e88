use crate::core::error::ExplorerError;
use crate::core::navigator::NavigatorState;
use crate::core::orchestrator::FetchState;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{DetailView, HistoryBar, ResultList, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min, Percentage};
    let layout = Layout::vertical([Length(1), Length(3), Length(1), Min(0)]);
    let [title_area, input_area, history_area, main_area] = layout.areas(frame.area());
    let [query_area, filter_area] =
        Layout::horizontal([Percentage(60), Percentage(40)]).areas(input_area);

    let snapshot = app.snapshot();
    let loading = snapshot.fetch_state == FetchState::Loading
        || snapshot.detail_fetch_state == FetchState::Loading;

    TitleBar::new(
        app.provider.name().to_string(),
        app.status_message.clone(),
        loading.then_some(spinner_frame),
    )
    .render(frame, title_area);

    tui.query_box.focused = tui.focus == Focus::Query;
    tui.filter_box.focused = tui.focus == Focus::Filter;
    tui.query_box.render(frame, query_area);
    tui.filter_box.render(frame, filter_area);

    HistoryBar {
        history: snapshot.history,
        category: app
            .filter_fields
            .category
            .is_some()
            .then(|| app.predicate.category_value()),
    }
    .render(frame, history_area);

    match snapshot.navigator_state {
        NavigatorState::DetailLoaded => {
            if let Some(detail) = snapshot.detail {
                DetailView {
                    detail,
                    scroll: tui.detail_scroll,
                }
                .render(frame, main_area);
            }
        }
        NavigatorState::DetailLoading => {
            let id = app.navigator.selected_id().unwrap_or_default();
            let waiting = Paragraph::new(format!("Loading details for {id}..."))
                .block(Block::bordered().border_type(BorderType::Rounded).title("Details"))
                .alignment(Alignment::Center);
            frame.render_widget(waiting, main_area);
        }
        NavigatorState::DetailError => {
            if let Some(err) = snapshot.error {
                draw_error_view(frame, main_area, err, "Press Esc to go back to the list");
            }
        }
        NavigatorState::Listing => {
            let list_area = match snapshot.error {
                Some(err) if snapshot.filtered.is_empty() => {
                    draw_error_view(frame, main_area, err, "Edit the search and press Enter");
                    return;
                }
                Some(err) => {
                    let [banner, rest] = Layout::vertical([Length(3), Min(0)]).areas(main_area);
                    draw_error_view(frame, banner, err, "");
                    rest
                }
                None => main_area,
            };
            ResultList {
                items: &snapshot.filtered,
                tag_field: app.filter_fields.category.as_deref(),
                total: snapshot.result_count,
                focused: tui.focus == Focus::List,
                state: &mut tui.results,
            }
            .render(frame, list_area);
        }
    }
}

fn draw_error_view(frame: &mut Frame, area: Rect, err: &ExplorerError, hint: &str) {
    let text = if hint.is_empty() {
        err.to_string()
    } else {
        format!("{err}\n\n{hint}")
    };
    let error_paragraph = Paragraph::new(text)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red))
                .title("ERROR"),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, Effect, update};
    use crate::test_support::{StubProvider, app_with, item, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    fn loaded_app() -> App {
        let mut app = app_with(StubProvider::products());
        let Effect::FetchList(ticket) = update(&mut app, Action::Startup) else {
            panic!("startup should fetch");
        };
        update(
            &mut app,
            Action::ListLoaded {
                seq: ticket.seq,
                result: Ok(vec![
                    item("1", "Backpack").with_field("category", "men's clothing"),
                    item("2", "Gold Ring").with_field("category", "jewelery"),
                ]),
            },
        );
        app
    }

    #[test]
    fn test_draw_ui_idle() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("Explorer (provider: stub)"));
        assert!(text.contains("Recent: none"));
    }

    #[test]
    fn test_draw_ui_lists_results() {
        let app = loaded_app();
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("Results (2)"));
        assert!(text.contains("Backpack"));
        assert!(text.contains("Gold Ring [jewelery]"));
        assert!(text.contains("Category: all"));
    }

    #[test]
    fn test_draw_ui_error_view() {
        let mut app = test_app();
        update(&mut app, Action::Submit("   ".into()));
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("ERROR"));
        assert!(text.contains("Please enter a search term"));
    }

    #[test]
    fn test_draw_ui_detail() {
        let mut app = loaded_app();
        update(&mut app, Action::Select("2".into()));
        let mut tui = TuiState::new();
        let text = render(&app, &mut tui);
        assert!(text.contains("Details (Esc to go back)"));
        assert!(text.contains("Gold Ring"));
    }
}
