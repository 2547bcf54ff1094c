//! Query-string request sent to the spreadsheet endpoint

use reqwest::Url;
use std::fmt;

use crate::form::convert_date;
use crate::models::{AttemptId, RegistrationData};

/// Value of the `action` parameter; the endpoint appends a row
pub const CREATE_ACTION: &str = "Create";

const REDACTED: &str = "***";

/// A fully encoded GET request for one registration
#[derive(Clone)]
pub struct SubmissionRequest {
    attempt: AttemptId,
    url: Url,
    redacted: Url,
}

impl SubmissionRequest {
    /// Encode `data` as query parameters on `endpoint`
    ///
    /// The birth date is sent as `DD/MM/YYYY`.
    pub fn new(endpoint: &Url, data: &RegistrationData) -> Self {
        let params = query_params(data);

        let mut url = endpoint.clone();
        let mut redacted = endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            let mut shown = redacted.query_pairs_mut();
            for (key, value) in &params {
                pairs.append_pair(key, value);
                let value = if *key == "password" { REDACTED } else { value.as_str() };
                shown.append_pair(key, value);
            }
        }

        Self {
            attempt: AttemptId::new(),
            url,
            redacted,
        }
    }

    /// Id tagging this attempt in the logs
    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }

    /// URL to send, including the password
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// URL with the password masked, safe to print or log
    pub fn redacted_url(&self) -> &Url {
        &self.redacted
    }
}

impl fmt::Debug for SubmissionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionRequest")
            .field("attempt", &self.attempt)
            .field("url", &self.redacted.as_str())
            .finish()
    }
}

/// Parameters in the order the endpoint expects them
fn query_params(data: &RegistrationData) -> Vec<(&'static str, String)> {
    let address = &data.address;
    vec![
        ("action", CREATE_ACTION.to_string()),
        ("fullName", data.full_name.clone()),
        ("birthDate", convert_date(&data.birth_date)),
        ("superintendence", data.superintendence.clone()),
        ("position", data.position.clone()),
        ("gender", data.gender.clone()),
        ("maritalStatus", data.marital_status.clone()),
        ("street", address.street.clone()),
        ("number", address.number.clone()),
        ("neighborhood", address.neighborhood.clone()),
        ("complement", address.complement.clone()),
        ("city", address.city.clone()),
        ("state", address.state.clone()),
        ("zipCode", address.zip_code.clone()),
        ("username", data.username.clone()),
        ("password", data.password.clone()),
    ]
}
