//! Toast notification widget
//!
//! Draws the current [`Notification`] as a bordered box with a bar showing
//! how much of its display time is left.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Widget, Wrap},
};

use crate::notification::{Notification, NotificationKind};

/// Width of the toast, in columns
pub const TOAST_WIDTH: u16 = 52;

/// Height of the toast, in rows
pub const TOAST_HEIGHT: u16 = 6;

/// Color for a notification kind
pub fn kind_color(kind: NotificationKind) -> Color {
    match kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
    }
}

/// Icon for a notification kind
pub fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "+",
        NotificationKind::Error => "x",
    }
}

/// Top-right corner area for the toast
pub fn toast_area(area: Rect) -> Rect {
    let width = TOAST_WIDTH.min(area.width);
    let height = TOAST_HEIGHT.min(area.height);
    Rect::new(area.x + area.width - width, area.y, width, height)
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    /// Create a new notification widget
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = kind_color(self.notification.kind);
        let icon = kind_icon(self.notification.kind);

        // Clear the area first
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} {} ", icon, self.notification.title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        Paragraph::new(Line::from(Span::styled(
            self.notification.description.as_str(),
            Style::default().fg(Color::White),
        )))
        .wrap(Wrap { trim: true })
        .render(chunks[0], buf);

        Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio(self.notification.remaining_fraction())
            .label("")
            .render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_colors() {
        assert_eq!(kind_color(NotificationKind::Success), Color::Green);
        assert_eq!(kind_color(NotificationKind::Error), Color::Red);
    }

    #[test]
    fn test_toast_area_hugs_top_right() {
        let area = Rect::new(0, 0, 100, 30);
        let toast = toast_area(area);
        assert_eq!(toast.x + toast.width, 100);
        assert_eq!(toast.y, 0);
        assert_eq!(toast.width, TOAST_WIDTH);
    }

    #[test]
    fn test_toast_area_fits_small_terminals() {
        let area = Rect::new(0, 0, 30, 4);
        let toast = toast_area(area);
        assert_eq!(toast.width, 30);
        assert_eq!(toast.height, 4);
    }

    #[test]
    fn test_render_shows_title() {
        let notification = Notification::submission_succeeded();
        let area = Rect::new(0, 0, TOAST_WIDTH, TOAST_HEIGHT);
        let mut buf = Buffer::empty(area);
        NotificationWidget::new(&notification).render(area, &mut buf);
        let top: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(top.contains("Pré-Inscrição realizada com sucesso!"));
    }
}
