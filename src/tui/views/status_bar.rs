//! Status bar view
//!
//! Key hints for the current step and the footer line.

use chrono::{Datelike, Local};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::keybindings::{format_keybinding, hints_for};

/// Footer text for `year`
pub fn footer_text(year: i32) -> String {
    format!(
        "© {} Igreja Evangélica Apostólica | v {} | Todos os direitos reservados.",
        year,
        env!("CARGO_PKG_VERSION")
    )
}

/// Render the key hints
pub fn render_hints(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    if app.form.is_submitting() {
        spans.push(Span::styled(
            " Enviando... ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("│"));
    }

    for kb in hints_for(app.step(), !app.notifications.is_empty()) {
        spans.push(Span::styled(
            format!(" {}", format_keybinding(kb)),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(":{} ", kb.description),
            Style::default().fg(Color::White),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the footer with the current year
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Span::styled(
        footer_text(Local::now().year()),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
