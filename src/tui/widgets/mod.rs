//! Reusable widgets for the TUI
//!
//! Contains custom widgets for common UI elements

pub mod input;
pub mod notification;
pub mod select;

// Re-export commonly used widgets
pub use input::TextInput;
pub use notification::NotificationWidget;
pub use select::ChoiceField;
