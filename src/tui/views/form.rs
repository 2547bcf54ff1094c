//! Inputs of the current step
//!
//! Each input takes two rows: the input itself and, when the last validation
//! flagged it, its error message.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{FieldId, FieldKind};
use crate::tui::app::App;
use crate::tui::layout::field_rows;
use crate::tui::widgets::{ChoiceField, TextInput};

/// Render the step's inputs inside a titled block
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let step = app.step();
    let title = if app.form.is_submitting() {
        format!(" {} · Enviando... ", step)
    } else {
        format!(" {} ", step)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = step.fields();
    let focused = app.focused_field();
    for (field, row) in fields.iter().zip(field_rows(inner, fields.len())) {
        render_field(frame, app, *field, *field == focused, row);
    }
}

fn render_field(frame: &mut Frame, app: &App, field: FieldId, focused: bool, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let value = app.form.data().get(field);
    match field.kind() {
        FieldKind::Choice(catalog) => {
            frame.render_widget(
                ChoiceField::new(field.label(), &catalog, value).focused(focused),
                chunks[0],
            );
        }
        kind => {
            let masked = matches!(kind, FieldKind::Secret) && !app.show_password;
            let input = if focused {
                app.input.clone()
            } else {
                TextInput::new().content(value)
            };
            frame.render_widget(
                input
                    .label(field.label())
                    .placeholder(field.placeholder())
                    .masked(masked)
                    .focused(focused),
                chunks[0],
            );
        }
    }

    let message = match field {
        FieldId::BirthDate => app.date_error.or_else(|| app.form.errors().get(field)),
        _ => app.form.errors().get(field),
    };
    if let Some(message) = message {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(Color::Red),
            ))),
            chunks[1],
        );
    }
}
