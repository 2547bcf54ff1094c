//! Layout definitions for the TUI
//!
//! A single centered column: header, step indicator, form body, key hints
//! and footer.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Widest the form column grows
pub const MAX_FORM_WIDTH: u16 = 84;

/// Rows taken by one input: the input line and its error line
pub const FIELD_HEIGHT: u16 = 2;

/// Layout regions for the TUI
pub struct AppLayout {
    /// Title area
    pub header: Rect,
    /// Step markers
    pub steps: Rect,
    /// Form fields (and summary on the last step)
    pub body: Rect,
    /// Key hints
    pub hints: Rect,
    /// Footer
    pub footer: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let column = centered_rect_fixed(MAX_FORM_WIDTH, area.height, area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(1), // Step indicator
                Constraint::Min(6),    // Body
                Constraint::Length(1), // Hints
                Constraint::Length(1), // Footer
            ])
            .split(column);

        Self {
            header: chunks[0],
            steps: chunks[1],
            body: chunks[2],
            hints: chunks[3],
            footer: chunks[4],
        }
    }
}

/// One row pair per input inside `area`
pub fn field_rows(area: Rect, count: usize) -> Vec<Rect> {
    let mut constraints: Vec<Constraint> =
        (0..count).map(|_| Constraint::Length(FIELD_HEIGHT)).collect();
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    rows[..count].to_vec()
}

/// Split the last step's body into the account inputs and the summary
pub fn account_split(area: Rect, field_count: usize) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            // Inputs plus the block borders
            Constraint::Length(FIELD_HEIGHT * field_count as u16 + 2),
            Constraint::Min(3),
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Create a fixed-size centered rect
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_centered_and_capped() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.header.width, MAX_FORM_WIDTH);
        assert_eq!(layout.header.x, (120 - MAX_FORM_WIDTH) / 2);
        assert_eq!(layout.footer.y, 39);
    }

    #[test]
    fn test_field_rows() {
        let rows = field_rows(Rect::new(0, 0, 40, 20), 7);
        assert_eq!(rows.len(), 7);
        assert!(rows.iter().all(|r| r.height == FIELD_HEIGHT));
        assert_eq!(rows[6].y, 12);
    }

    #[test]
    fn test_centered_rect_fixed_narrow_terminal() {
        let rect = centered_rect_fixed(84, 10, Rect::new(0, 0, 60, 10));
        assert_eq!(rect.width, 60);
        assert_eq!(rect.x, 0);
    }
}
