//! Configuration module for theology-enroll
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::EnrollPaths;
pub use settings::Settings;
