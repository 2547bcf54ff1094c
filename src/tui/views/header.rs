//! Title and step indicator

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::form::FormStep;
use crate::tui::app::App;

/// Application title
pub const TITLE: &str = "Curso de Teologia";

/// Line under the title
pub const SUBTITLE: &str = "Preencha o formulário abaixo para a pré-inscrição em nosso curso";

/// Render the title block
pub fn render(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
    ];

    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(block),
        area,
    );
}

/// Render the three step markers, highlighting the current one
pub fn render_steps(frame: &mut Frame, app: &App, area: Rect) {
    let current = app.step();
    let mut spans = Vec::new();

    for (i, step) in FormStep::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ─── ", Style::default().fg(Color::DarkGray)));
        }
        let style = if *step == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if step.index() < current.index() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!(" {} {} ", step.index() + 1, step.title()),
            style,
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
