//! Theology course pre-registration
//!
//! A three-step registration form (personal data, address, account) with
//! per-step validation and a single GET submission to the course's
//! spreadsheet endpoint. It can be used as an interactive terminal form or
//! fed from a file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Registration data, field identifiers and option catalogs
//! - `form`: Step state machine, validation and the form controller
//! - `submission`: Request encoding and the HTTP submitter
//! - `notification`: Toasts shown after a submission
//! - `display`: Plain-text formatting for the CLI
//! - `cli`: Non-interactive commands
//! - `tui`: Interactive terminal form
//! - `logging`: Diagnostic log file
//!
//! # Example
//!
//! ```rust,ignore
//! use theology_enroll::config::{EnrollPaths, Settings};
//! use theology_enroll::form::FormController;
//!
//! let paths = EnrollPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut form = FormController::new(&settings)?;
//! form.handle_change_path("fullName", "Maria da Conceição")?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod logging;
pub mod models;
pub mod notification;
pub mod submission;
pub mod tui;

pub use error::EnrollError;
