//! TUI Views module
//!
//! The header, the current step's inputs, the summary on the last step, the
//! hint and footer lines, and the toast overlay.

pub mod form;
pub mod header;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::App;
use super::layout::{account_split, AppLayout};
use super::widgets::notification::{toast_area, NotificationWidget};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    header::render(frame, layout.header);
    header::render_steps(frame, app, layout.steps);

    if app.step().is_last() {
        let (fields, summary_area) = account_split(layout.body, app.step().fields().len());
        form::render(frame, app, fields);
        summary::render(frame, app, summary_area);
    } else {
        form::render(frame, app, layout.body);
    }

    status_bar::render_hints(frame, app, layout.hints);
    status_bar::render_footer(frame, layout.footer);

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification),
            toast_area(frame.area()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{Notification, Notifier};
    use crate::tui::app::tests::{fill_all, harness};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_first_step_shows_inputs_and_errors() {
        let mut h = harness(Ok(()));
        h.app.advance();
        let text = screen(&h.app);
        assert!(text.contains("Dados Pessoais (1/3)"));
        assert!(text.contains("Nome Completo"));
        assert!(text.contains("Nome completo é obrigatório"));
    }

    #[test]
    fn test_last_step_masks_password_and_shows_summary() {
        let mut h = harness(Ok(()));
        fill_all(&mut h.app);
        h.app.advance();
        h.app.advance();

        let text = screen(&h.app);
        assert!(text.contains("Resumo da Inscrição"));
        assert!(text.contains("Maria da Conceição"));
        assert!(!text.contains("segredo"));

        h.app.toggle_password();
        assert!(screen(&h.app).contains("segredo"));
    }

    #[test]
    fn test_toast_is_drawn() {
        let mut h = harness(Ok(()));
        h.app.notifications.notify(Notification::submission_failed("Ligue para a secretaria"));
        let text = screen(&h.app);
        assert!(text.contains("Erro ao realizar pré-inscrição."));
    }
}
