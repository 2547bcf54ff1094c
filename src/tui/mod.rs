//! Terminal User Interface module
//!
//! The registration form as a full-screen ratatui application: one screen
//! per step, inline validation messages, and toasts for submission results.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;
