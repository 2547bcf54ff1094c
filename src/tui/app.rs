//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the form controller, which input has focus, the editing buffer for that
//! input and the toast queue.

use std::sync::mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::form::{birth_date_error, format_date_input, FormController, FormStep, SubmitBlocked};
use crate::models::{AttemptId, FieldId, FieldKind};
use crate::notification::{NotificationQueue, Notifier};
use crate::submission::{SubmissionError, Submitter};

use super::event::Event;
use super::widgets::input::TextInput;
use super::widgets::select;

/// Main application state
pub struct App {
    /// The registration being filled in
    pub form: FormController,
    /// Toasts waiting to be shown
    pub notifications: NotificationQueue,
    /// Index of the focused input within the current step
    pub focus: usize,
    /// Editing buffer for the focused text input
    pub input: TextInput,
    /// Whether the password is shown in clear
    pub show_password: bool,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Birth date rejected by the last attempt to leave the first step
    pub date_error: Option<&'static str>,
    submitter: Arc<dyn Submitter>,
    runtime: Handle,
    events: mpsc::Sender<Event>,
}

impl App {
    /// Create a new App instance
    ///
    /// Submissions run on `runtime` and report back through `events`.
    pub fn new(
        form: FormController,
        submitter: Arc<dyn Submitter>,
        runtime: Handle,
        events: mpsc::Sender<Event>,
    ) -> Self {
        let mut app = Self {
            form,
            notifications: NotificationQueue::new(),
            focus: 0,
            input: TextInput::new(),
            show_password: false,
            should_quit: false,
            date_error: None,
            submitter,
            runtime,
            events,
        };
        app.load_input();
        app
    }

    /// Current step
    pub fn step(&self) -> FormStep {
        self.form.step()
    }

    /// The focused input
    pub fn focused_field(&self) -> FieldId {
        let fields = self.step().fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    /// Fill the editing buffer from the focused field's value
    fn load_input(&mut self) {
        let value = self.form.data().get(self.focused_field());
        self.input = TextInput::new().content(value);
    }

    fn set_focus(&mut self, index: usize) {
        self.focus = index;
        self.load_input();
    }

    /// Focus the first input of the step that has an error, if any
    fn focus_first_error(&mut self) {
        let errors = self.form.errors();
        if let Some(index) = self
            .step()
            .fields()
            .iter()
            .position(|field| errors.contains(*field))
        {
            self.set_focus(index);
        }
    }

    fn focus_field(&mut self, field: FieldId) {
        if let Some(index) = self.step().fields().iter().position(|f| *f == field) {
            self.set_focus(index);
        }
    }

    /// Move focus to the next input, wrapping around
    pub fn focus_next(&mut self) {
        let len = self.step().fields().len();
        self.set_focus((self.focus + 1) % len);
    }

    /// Move focus to the previous input, wrapping around
    pub fn focus_prev(&mut self) {
        let len = self.step().fields().len();
        self.set_focus((self.focus + len - 1) % len);
    }

    /// True when the focused input is a choice list
    pub fn focused_is_choice(&self) -> bool {
        matches!(self.focused_field().kind(), FieldKind::Choice(_))
    }

    /// Apply an edit to the buffer and push the result into the form
    ///
    /// Date inputs only keep digits and get their `-` separators filled in.
    pub fn edit(&mut self, edit: impl FnOnce(&mut TextInput)) {
        let field = self.focused_field();
        match field.kind() {
            FieldKind::Choice(_) => return,
            FieldKind::Date => {
                edit(&mut self.input);
                let formatted = format_date_input(self.input.value());
                if formatted != self.input.value() {
                    self.input = TextInput::new().content(formatted);
                }
                self.date_error = None;
            }
            _ => edit(&mut self.input),
        }
        self.form.handle_change(field, self.input.value());
    }

    /// Select the next (or previous) option of the focused choice list
    pub fn cycle_choice(&mut self, forward: bool) {
        let field = self.focused_field();
        if let FieldKind::Choice(catalog) = field.kind() {
            let code = select::cycle(&catalog, self.form.data().get(field), forward);
            self.form.handle_change(field, code);
        }
    }

    /// Show or hide the password
    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Forward action: next step, or submit on the last one
    pub fn advance(&mut self) {
        if self.step() == FormStep::Personal {
            self.date_error = birth_date_error(self.form.data());
            if self.date_error.is_some() {
                self.focus_field(FieldId::BirthDate);
                return;
            }
        }

        if self.step().is_last() {
            self.submit();
        } else if self.form.next_step() {
            self.set_focus(0);
        } else {
            self.focus_first_error();
        }
    }

    /// Go back one step
    pub fn back(&mut self) {
        if self.step().prev().is_some() {
            self.form.prev_step();
            self.set_focus(0);
        }
    }

    /// Start a submission in the background
    pub fn submit(&mut self) {
        match self.form.begin_submission() {
            Ok(request) => {
                let submitter = Arc::clone(&self.submitter);
                let events = self.events.clone();
                self.runtime.spawn(async move {
                    let result = submitter.submit(&request).await;
                    let finished = Event::Submission {
                        attempt: request.attempt(),
                        result,
                    };
                    if events.send(finished).is_err() {
                        tracing::warn!(attempt = %request.attempt(), "UI gone before submission finished");
                    }
                });
            }
            Err(SubmitBlocked::Invalid(_)) => self.focus_first_error(),
            Err(blocked) => tracing::debug!(reason = %blocked, "submit ignored"),
        }
    }

    /// A background submission came back
    pub fn submission_finished(&mut self, attempt: AttemptId, result: Result<(), SubmissionError>) {
        let (_, notification) = self.form.finish_submission(attempt, result);
        self.notifications.notify(notification);
        self.show_password = false;
        self.date_error = None;
        self.set_focus(0);
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::AddressField;
    use crate::submission::SubmissionRequest;
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::runtime::Runtime;

    pub(crate) struct Answering(pub Result<(), SubmissionError>);

    #[async_trait]
    impl Submitter for Answering {
        async fn submit(&self, _request: &SubmissionRequest) -> Result<(), SubmissionError> {
            self.0.clone()
        }
    }

    pub(crate) struct Harness {
        pub runtime: Runtime,
        pub receiver: mpsc::Receiver<Event>,
        pub app: App,
    }

    pub(crate) fn harness(answer: Result<(), SubmissionError>) -> Harness {
        let runtime = Runtime::new().unwrap();
        let (sender, receiver) = mpsc::channel();
        let form = FormController::new(&Settings::default()).unwrap();
        let app = App::new(form, Arc::new(Answering(answer)), runtime.handle().clone(), sender);
        Harness {
            runtime,
            receiver,
            app,
        }
    }

    pub(crate) fn fill_all(app: &mut App) {
        for (field, value) in [
            (FieldId::FullName, "Maria da Conceição"),
            (FieldId::BirthDate, "1990-05-10"),
            (FieldId::Superintendence, "RN"),
            (FieldId::Position, "pastor"),
            (FieldId::Gender, "feminino"),
            (FieldId::MaritalStatus, "casado"),
            (FieldId::Address(AddressField::Street), "Rua A"),
            (FieldId::Address(AddressField::Number), "10"),
            (FieldId::Address(AddressField::Neighborhood), "Centro"),
            (FieldId::Address(AddressField::State), "RN"),
            (FieldId::Address(AddressField::City), "Natal"),
            (FieldId::Address(AddressField::ZipCode), "59000-000"),
            (FieldId::Username, "maria"),
            (FieldId::Password, "segredo"),
        ] {
            app.form.handle_change(field, value);
        }
    }

    #[test]
    fn test_focus_wraps() {
        let mut h = harness(Ok(()));
        assert_eq!(h.app.focused_field(), FieldId::FullName);
        h.app.focus_prev();
        assert_eq!(h.app.focused_field(), FieldId::MaritalStatus);
        h.app.focus_next();
        assert_eq!(h.app.focused_field(), FieldId::FullName);
    }

    #[test]
    fn test_edit_updates_form() {
        let mut h = harness(Ok(()));
        h.app.edit(|input| input.insert('J'));
        h.app.edit(|input| input.insert('ó'));
        assert_eq!(h.app.form.data().full_name, "Jó");
    }

    #[test]
    fn test_edit_is_ignored_on_choice_fields() {
        let mut h = harness(Ok(()));
        h.app.set_focus(2);
        assert!(h.app.focused_is_choice());
        h.app.edit(|input| input.insert('x'));
        assert_eq!(h.app.form.data().superintendence, "");
    }

    #[test]
    fn test_cycle_choice_selects_codes() {
        let mut h = harness(Ok(()));
        h.app.set_focus(4);
        assert_eq!(h.app.focused_field(), FieldId::Gender);
        h.app.cycle_choice(true);
        assert_eq!(h.app.form.data().gender, "masculino");
        h.app.cycle_choice(true);
        assert_eq!(h.app.form.data().gender, "feminino");
    }

    #[test]
    fn test_advance_focuses_first_error() {
        let mut h = harness(Ok(()));
        h.app.form.handle_change(FieldId::FullName, "Maria");
        h.app.set_focus(5);
        h.app.advance();
        assert_eq!(h.app.step(), FormStep::Personal);
        assert_eq!(h.app.focused_field(), FieldId::BirthDate);
    }

    #[test]
    fn test_date_edit_keeps_iso_shape() {
        let mut h = harness(Ok(()));
        h.app.set_focus(1);
        for c in "1990/05".chars() {
            h.app.edit(|input| input.insert(c));
        }
        assert_eq!(h.app.form.data().birth_date, "1990-05");
        h.app.edit(|input| input.backspace());
        h.app.edit(|input| input.backspace());
        assert_eq!(h.app.form.data().birth_date, "1990");
        assert_eq!(h.app.input.cursor, 4);
    }

    #[test]
    fn test_advance_rejects_impossible_birth_date() {
        let mut h = harness(Ok(()));
        fill_all(&mut h.app);
        h.app.form.handle_change(FieldId::BirthDate, "1990-13-01");
        h.app.advance();
        assert_eq!(h.app.step(), FormStep::Personal);
        assert_eq!(h.app.focused_field(), FieldId::BirthDate);
        assert_eq!(h.app.date_error, Some(crate::form::INVALID_BIRTH_DATE));

        h.app.edit(|input| input.backspace());
        assert_eq!(h.app.date_error, None);
    }

    #[test]
    fn test_back_on_first_step_keeps_focus() {
        let mut h = harness(Ok(()));
        h.app.set_focus(3);
        h.app.back();
        assert_eq!(h.app.focus, 3);
        assert_eq!(h.app.step(), FormStep::Personal);
    }

    #[test]
    fn test_background_submission_round_trip() {
        let mut h = harness(Err(SubmissionError::Status(500)));
        fill_all(&mut h.app);
        h.app.advance();
        h.app.advance();
        assert_eq!(h.app.step(), FormStep::Account);
        h.app.toggle_password();

        h.app.advance();
        assert!(h.app.form.is_submitting());

        match h.receiver.recv_timeout(Duration::from_secs(5)).unwrap() {
            Event::Submission { attempt, result } => h.app.submission_finished(attempt, result),
            other => panic!("unexpected event {:?}", other),
        }

        assert!(!h.app.form.is_submitting());
        assert!(h.app.form.data().is_empty());
        assert_eq!(h.app.step(), FormStep::Personal);
        assert!(!h.app.show_password);
        assert_eq!(h.app.notifications.len(), 1);
        assert_eq!(h.app.notifications.current().unwrap().duration_ms(), 600_000);
        drop(h.runtime);
    }
}
