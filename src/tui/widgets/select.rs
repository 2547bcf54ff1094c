//! Choice widget
//!
//! Renders a catalog-backed field as `Label: ◀ Choice ▶`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::models::Catalog;

/// Placeholder shown when nothing is selected
pub const NOTHING_SELECTED: &str = "Selecione";

/// Code following `current` in `catalog`, wrapping around
///
/// An empty or unknown `current` moves to the first (forward) or last
/// (backward) choice.
pub fn cycle(catalog: &Catalog, current: &str, forward: bool) -> &'static str {
    let len = catalog.choices.len();
    if len == 0 {
        return "";
    }
    let next = match catalog.index_of(current) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None if forward => 0,
        None => len - 1,
    };
    catalog.choices[next].0
}

/// A select-like field
#[derive(Debug, Clone)]
pub struct ChoiceField<'a> {
    label: &'a str,
    catalog: &'a Catalog,
    selected: &'a str,
    focused: bool,
}

impl<'a> ChoiceField<'a> {
    /// Create a choice field showing `selected`
    pub fn new(label: &'a str, catalog: &'a Catalog, selected: &'a str) -> Self {
        Self {
            label,
            catalog,
            selected,
            focused: false,
        }
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for ChoiceField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let (text, text_style) = match self.catalog.label_of(self.selected) {
            Some(label) => (label, Style::default().fg(Color::White)),
            None => (NOTHING_SELECTED, Style::default().fg(Color::DarkGray)),
        };

        let mut spans = vec![Span::styled(format!("{}: ", self.label), label_style)];
        if self.focused {
            spans.push(Span::styled("◀ ", Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(text, text_style.add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(" ▶", Style::default().fg(Color::Cyan)));
        } else {
            spans.push(Span::styled(text, text_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
