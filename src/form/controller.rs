//! Registration form controller
//!
//! Owns the [`FormState`] for one registration attempt and exposes the
//! operations the front ends call: field edits, step navigation and
//! submission. Submission is split in two halves so a front end can run the
//! request elsewhere (the TUI spawns it on a runtime) and come back later;
//! [`FormController::submit`] chains both halves for callers that can simply
//! await.

use reqwest::Url;
use std::fmt;

use super::state::{FormEvent, FormState, FormStep};
use super::validation::{validate_step, ValidationErrors};
use crate::config::Settings;
use crate::error::{EnrollError, EnrollResult};
use crate::models::{AttemptId, FieldId, RegistrationData};
use crate::notification::{Notification, Notifier};
use crate::submission::{SubmissionError, SubmissionRequest, Submitter};

/// Why a submission was not started
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Submit is only offered on the last step
    NotOnLastStep(FormStep),
    /// A request is already in flight
    AlreadySubmitting,
    /// The account step did not validate
    Invalid(ValidationErrors),
}

impl fmt::Display for SubmitBlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotOnLastStep(step) => write!(f, "cannot submit from step {}", step),
            Self::AlreadySubmitting => write!(f, "a submission is already in progress"),
            Self::Invalid(errors) => write!(f, "{} field(s) need attention", errors.len()),
        }
    }
}

/// How a finished submission went
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The endpoint accepted the registration
    Succeeded,
    /// The registration may not have been recorded
    Failed(SubmissionError),
}

impl SubmitOutcome {
    /// True for [`SubmitOutcome::Succeeded`]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Drives one registration from the first step to submission
#[derive(Debug, Clone)]
pub struct FormController {
    state: FormState,
    endpoint: Url,
    support_contact: String,
}

impl FormController {
    /// Create a controller for the configured endpoint
    pub fn new(settings: &Settings) -> EnrollResult<Self> {
        let endpoint = Url::parse(&settings.endpoint).map_err(|e| {
            EnrollError::Config(format!("Invalid endpoint '{}': {}", settings.endpoint, e))
        })?;

        Ok(Self {
            state: FormState::new(),
            endpoint,
            support_contact: settings.support_contact.clone(),
        })
    }

    /// Start from already filled data (still on the first step)
    pub fn with_data(mut self, data: RegistrationData) -> Self {
        self.state.data = data;
        self
    }

    /// Current state
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Current step
    pub fn step(&self) -> FormStep {
        self.state.step
    }

    /// Values entered so far
    pub fn data(&self) -> &RegistrationData {
        &self.state.data
    }

    /// Errors from the last validation run
    pub fn errors(&self) -> &ValidationErrors {
        &self.state.errors
    }

    /// True while a request is in flight
    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting
    }

    /// Endpoint the registration goes to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn dispatch(&mut self, event: FormEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(event);
    }

    /// Replace exactly one field
    pub fn handle_change(&mut self, field: FieldId, value: impl Into<String>) {
        self.dispatch(FormEvent::Change(field, value.into()));
    }

    /// Replace one field addressed by key (`fullName`, `address.city`)
    pub fn handle_change_path(&mut self, path: &str, value: impl Into<String>) -> EnrollResult<()> {
        let field: FieldId = path.parse()?;
        self.handle_change(field, value);
        Ok(())
    }

    /// Validate `step` against the current data without touching the state
    pub fn validate_step(&self, step: FormStep) -> ValidationErrors {
        validate_step(step, &self.state.data)
    }

    /// Try to move forward; returns true if the step changed
    ///
    /// On failure the new error map is published for display.
    pub fn next_step(&mut self) -> bool {
        let before = self.state.step;
        self.dispatch(FormEvent::Next);
        let advanced = self.state.step != before;
        if advanced {
            tracing::debug!(from = before.index(), to = self.state.step.index(), "step advanced");
        } else {
            tracing::debug!(
                step = before.index(),
                errors = self.state.errors.len(),
                "step did not validate"
            );
        }
        advanced
    }

    /// Move back one step without validating
    pub fn prev_step(&mut self) {
        self.dispatch(FormEvent::Prev);
    }

    /// First half of a submission: validate and mark the form as submitting
    ///
    /// Returns the request to send. The caller must hand the result back
    /// through [`Self::finish_submission`].
    pub fn begin_submission(&mut self) -> Result<SubmissionRequest, SubmitBlocked> {
        if self.state.is_submitting {
            tracing::warn!("submission ignored: one is already in flight");
            return Err(SubmitBlocked::AlreadySubmitting);
        }
        if !self.state.step.is_last() {
            return Err(SubmitBlocked::NotOnLastStep(self.state.step));
        }

        let errors = validate_step(FormStep::Account, &self.state.data);
        self.state.errors = errors.clone();
        if !errors.is_empty() {
            return Err(SubmitBlocked::Invalid(errors));
        }

        let request = SubmissionRequest::new(&self.endpoint, &self.state.data);
        self.dispatch(FormEvent::SubmitStarted);
        tracing::info!(
            attempt = %request.attempt(),
            url = %request.redacted_url(),
            "submitting registration"
        );
        Ok(request)
    }

    /// Second half of a submission: always clears the flag and resets the form
    ///
    /// Returns the notification to show.
    pub fn finish_submission(
        &mut self,
        attempt: AttemptId,
        result: Result<(), SubmissionError>,
    ) -> (SubmitOutcome, Notification) {
        let outcome = match result {
            Ok(()) => {
                tracing::info!(attempt = %attempt, "registration accepted");
                SubmitOutcome::Succeeded
            }
            Err(err) => {
                tracing::warn!(
                    attempt = %attempt,
                    kind = err.kind(),
                    error = %err,
                    "registration submission failed"
                );
                SubmitOutcome::Failed(err)
            }
        };

        let notification = match outcome {
            SubmitOutcome::Succeeded => Notification::submission_succeeded(),
            SubmitOutcome::Failed(_) => Notification::submission_failed(&self.support_contact),
        };

        self.dispatch(FormEvent::SubmitFinished);
        (outcome, notification)
    }

    /// Validate, send once, notify, and reset
    pub async fn submit<S, N>(
        &mut self,
        submitter: &S,
        notifier: &mut N,
    ) -> Result<SubmitOutcome, SubmitBlocked>
    where
        S: Submitter + ?Sized,
        N: Notifier + ?Sized,
    {
        let request = self.begin_submission()?;
        let result = submitter.submit(&request).await;
        let (outcome, notification) = self.finish_submission(request.attempt(), result);
        notifier.notify(notification);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddressField;
    use crate::notification::NotificationKind;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Recording {
        result: Result<(), SubmissionError>,
        seen: Mutex<Vec<String>>,
    }

    impl Recording {
        fn answering(result: Result<(), SubmissionError>) -> Self {
            Self {
                result,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl Submitter for Recording {
        async fn submit(&self, request: &SubmissionRequest) -> Result<(), SubmissionError> {
            self.seen.lock().unwrap().push(request.url().to_string());
            self.result.clone()
        }
    }

    fn controller() -> FormController {
        FormController::new(&Settings::default()).unwrap()
    }

    fn on_account_step() -> FormController {
        let mut form = controller();
        form.state.step = FormStep::Account;
        form.handle_change(FieldId::Username, "maria");
        form
    }

    #[test]
    fn test_rejects_invalid_endpoint() {
        let settings = Settings {
            endpoint: "not a url".into(),
            ..Default::default()
        };
        assert!(matches!(
            FormController::new(&settings),
            Err(EnrollError::Config(_))
        ));
    }

    #[test]
    fn test_handle_change_path() {
        let mut form = controller();
        form.handle_change_path("address.city", "Natal").unwrap();
        form.handle_change_path("fullName", "Maria").unwrap();
        assert_eq!(form.data().address.city, "Natal");
        assert_eq!(form.data().full_name, "Maria");
        assert!(form.handle_change_path("address.country", "BR").is_err());
    }

    #[test]
    fn test_validate_step_is_side_effect_free() {
        let form = controller();
        assert_eq!(form.validate_step(FormStep::Personal).len(), 6);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_next_step_publishes_errors_then_advances() {
        let mut form = controller();
        assert!(!form.next_step());
        assert!(form.errors().contains(FieldId::FullName));

        for (field, value) in [
            (FieldId::FullName, "Maria Silva"),
            (FieldId::BirthDate, "1990-05-10"),
            (FieldId::Superintendence, "RN"),
            (FieldId::Position, "pastor"),
            (FieldId::Gender, "feminino"),
            (FieldId::MaritalStatus, "casado"),
        ] {
            form.handle_change(field, value);
        }
        assert!(form.next_step());
        assert_eq!(form.step(), FormStep::Address);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_begin_submission_guards() {
        let mut form = controller();
        assert_eq!(
            form.begin_submission().unwrap_err(),
            SubmitBlocked::NotOnLastStep(FormStep::Personal)
        );

        form.state.step = FormStep::Account;
        form.handle_change(FieldId::Username, "abc");
        match form.begin_submission() {
            Err(SubmitBlocked::Invalid(errors)) => {
                assert!(errors.contains(FieldId::Username));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_double_submission_is_refused() {
        let mut form = on_account_step();
        let request = form.begin_submission().unwrap();
        assert!(form.is_submitting());
        assert_eq!(
            form.begin_submission().unwrap_err(),
            SubmitBlocked::AlreadySubmitting
        );

        let (outcome, _) = form.finish_submission(request.attempt(), Ok(()));
        assert!(outcome.is_success());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_edits_during_submission_are_discarded_on_finish() {
        let mut form = on_account_step();
        let request = form.begin_submission().unwrap();
        form.handle_change(FieldId::Address(AddressField::City), "Natal");
        form.prev_step();

        form.finish_submission(request.attempt(), Err(SubmissionError::Status(500)));
        assert_eq!(form.state(), &FormState::new());
    }

    #[tokio::test]
    async fn test_submit_success_notifies_once_and_resets() {
        let mut form = on_account_step();
        let submitter = Recording::answering(Ok(()));
        let mut shown: Vec<Notification> = Vec::new();

        let outcome = form.submit(&submitter, &mut shown).await.unwrap();

        assert_eq!(outcome, SubmitOutcome::Succeeded);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, NotificationKind::Success);
        assert_eq!(shown[0].duration_ms(), 5000);
        assert_eq!(form.step(), FormStep::Personal);
        assert!(form.data().is_empty());
        assert_eq!(submitter.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_failure_uses_support_contact() {
        let settings = Settings {
            support_contact: "Ligue 0800".into(),
            ..Default::default()
        };
        let mut form = FormController::new(&settings).unwrap();
        form.state.step = FormStep::Account;
        form.handle_change(FieldId::Username, "maria");

        let submitter = Recording::answering(Err(SubmissionError::Transport("refused".into())));
        let mut shown: Vec<Notification> = Vec::new();
        let outcome = form.submit(&submitter, &mut shown).await.unwrap();

        assert!(!outcome.is_success());
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].description, "Ligue 0800");
        assert_eq!(shown[0].duration_ms(), 600_000);
        assert!(form.data().is_empty());
    }

    #[tokio::test]
    async fn test_blocked_submit_sends_nothing() {
        let mut form = controller();
        form.state.step = FormStep::Account;
        let submitter = Recording::answering(Ok(()));
        let mut shown: Vec<Notification> = Vec::new();

        assert!(form.submit(&submitter, &mut shown).await.is_err());
        assert!(shown.is_empty());
        assert!(submitter.seen.lock().unwrap().is_empty());
        assert_eq!(form.step(), FormStep::Account);
    }
}
