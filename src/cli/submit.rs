//! `submit` command
//!
//! Sends a registration read from a JSON or YAML file through the same
//! controller the TUI uses: each step is validated in order, then the data
//! is submitted once.

use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::display::{format_notification, format_summary, format_validation_errors};
use crate::error::{EnrollError, EnrollResult};
use crate::form::{birth_date_error, FormController, FormStep, SubmitBlocked, SubmitOutcome};
use crate::models::{FieldId, FieldKind, RegistrationData};
use crate::notification::{Notification, NotificationKind, Notifier};
use crate::submission::{HttpSubmitter, SubmissionRequest};

/// Arguments of `enroll submit`
#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Registration file (.json, .yaml or .yml)
    pub file: PathBuf,

    /// Read the password from the terminal instead of the file
    #[arg(long)]
    pub prompt_password: bool,

    /// Validate and print the request URL (password redacted) without sending
    #[arg(long)]
    pub dry_run: bool,
}

/// Prints notifications to the console
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => println!("{}", format_notification(&notification)),
            NotificationKind::Error => eprintln!("{}", format_notification(&notification)),
        }
    }
}

/// Read registration data, choosing the format by extension
pub fn load_registration(path: &Path) -> EnrollResult<RegistrationData> {
    let contents = fs::read_to_string(path).map_err(|e| {
        EnrollError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => Ok(serde_json::from_str(&contents)?),
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&contents)?),
        _ => Err(EnrollError::Config(format!(
            "Unsupported registration file '{}': expected .json, .yaml or .yml",
            path.display()
        ))),
    }
}

/// Select fields whose value is set but not one of the known codes
pub fn unknown_choices(data: &RegistrationData) -> Vec<(FieldId, String)> {
    FormStep::ALL
        .iter()
        .flat_map(|step| step.fields().iter().copied())
        .filter_map(|field| match field.kind() {
            FieldKind::Choice(catalog) => {
                let value = data.get(field);
                if value.is_empty() || catalog.index_of(value).is_some() {
                    None
                } else {
                    Some((field, value.to_string()))
                }
            }
            _ => None,
        })
        .collect()
}

/// Refuse a birth date that is not `YYYY-MM-DD`
///
/// Such a date would reach the spreadsheet as an empty cell.
pub fn check_birth_date(data: &RegistrationData) -> EnrollResult<()> {
    match birth_date_error(data) {
        None => Ok(()),
        Some(message) => {
            eprintln!("{}", FormStep::Personal);
            eprintln!("  {}: {}", FieldId::BirthDate, message);
            Err(EnrollError::Validation(format!(
                "birth date '{}' is not YYYY-MM-DD",
                data.birth_date
            )))
        }
    }
}

fn validation_failure(step: FormStep, form: &FormController) -> EnrollError {
    eprintln!("{}", step);
    eprint!("{}", format_validation_errors(form.errors()));
    EnrollError::Validation(format!(
        "{} field(s) in '{}' need attention",
        form.errors().len(),
        step.title()
    ))
}

/// Handle `enroll submit`
///
/// Returns `Ok(true)` when the endpoint accepted the registration (or, on a
/// dry run, when it would have been sent).
pub async fn handle_submit_command(settings: &Settings, args: SubmitArgs) -> EnrollResult<bool> {
    let mut data = load_registration(&args.file)?;
    if args.prompt_password {
        data.password = rpassword::prompt_password("Senha: ")
            .map_err(|e| EnrollError::Io(format!("Failed to read password: {}", e)))?;
    }

    for (field, value) in unknown_choices(&data) {
        tracing::warn!(field = %field, value = %value, "unknown option code");
        eprintln!("warning: '{}' is not a known option for {}", value, field.label());
    }

    check_birth_date(&data)?;

    let mut form = FormController::new(settings)?.with_data(data);
    while !form.step().is_last() {
        let step = form.step();
        if !form.next_step() {
            return Err(validation_failure(step, &form));
        }
    }

    println!("{}", format_summary(form.data()));

    if args.dry_run {
        let errors = form.validate_step(FormStep::Account);
        if !errors.is_empty() {
            form.next_step();
            return Err(validation_failure(FormStep::Account, &form));
        }
        let request = SubmissionRequest::new(form.endpoint(), form.data());
        println!("{}", request.redacted_url());
        return Ok(true);
    }

    let submitter = HttpSubmitter::from_settings(settings)?;
    match form.submit(&submitter, &mut ConsoleNotifier).await {
        Ok(SubmitOutcome::Succeeded) => Ok(true),
        Ok(SubmitOutcome::Failed(_)) => Ok(false),
        Err(SubmitBlocked::Invalid(_)) => Err(validation_failure(FormStep::Account, &form)),
        Err(blocked) => Err(EnrollError::Validation(blocked.to_string())),
    }
}
