//! Submission of a completed registration
//!
//! A registration is encoded into a single GET request against the configured
//! endpoint. Any non-2xx status, transport failure or non-JSON body counts as
//! a failure; there is no retry.

pub mod client;
pub mod request;

pub use client::{HttpSubmitter, SubmissionError, Submitter};
pub use request::SubmissionRequest;
