//! The multi-step registration form
//!
//! Three steps (personal data, address, account) validated one at a time,
//! followed by a single submission that always resets the form.

pub mod controller;
pub mod date;
pub mod state;
pub mod validation;

pub use controller::{FormController, SubmitBlocked, SubmitOutcome};
pub use date::{birth_date_error, convert_date, format_date_input, is_iso_date, INVALID_BIRTH_DATE};
pub use state::{FormEvent, FormState, FormStep};
pub use validation::{validate_step, ValidationErrors};
