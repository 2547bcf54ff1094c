//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the form controller.

pub mod options;
pub mod submit;

pub use options::handle_options_command;
pub use submit::{handle_submit_command, SubmitArgs};
