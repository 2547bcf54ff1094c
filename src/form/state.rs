//! Form state and its transition function
//!
//! `FormState` is a plain value. Every mutation goes through
//! [`FormState::apply`], which consumes the state and an event and returns the
//! next state, so the whole form can be driven without a terminal.

use std::fmt;

use super::validation::{validate_step, ValidationErrors};
use crate::models::{AddressField, FieldId, RegistrationData};

/// The three pages of the form, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FormStep {
    /// Personal information
    #[default]
    Personal,
    /// Postal address
    Address,
    /// Username, password and summary; submits from here
    Account,
}

impl FormStep {
    /// Every step, in order
    pub const ALL: [FormStep; 3] = [Self::Personal, Self::Address, Self::Account];

    /// Zero-based position of the step
    pub fn index(&self) -> usize {
        match self {
            Self::Personal => 0,
            Self::Address => 1,
            Self::Account => 2,
        }
    }

    /// Step for a zero-based position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Following step, `None` on the last one
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Preceding step, `None` on the first one
    pub fn prev(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// True for the step that submits
    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Page heading
    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Dados Pessoais",
            Self::Address => "Endereço",
            Self::Account => "Conta de Acesso",
        }
    }

    /// Inputs shown on this step, in focus order
    pub fn fields(&self) -> &'static [FieldId] {
        match self {
            Self::Personal => &[
                FieldId::FullName,
                FieldId::BirthDate,
                FieldId::Superintendence,
                FieldId::Position,
                FieldId::Gender,
                FieldId::MaritalStatus,
            ],
            Self::Address => &[
                FieldId::Address(AddressField::Street),
                FieldId::Address(AddressField::Number),
                FieldId::Address(AddressField::Complement),
                FieldId::Address(AddressField::Neighborhood),
                FieldId::Address(AddressField::State),
                FieldId::Address(AddressField::City),
                FieldId::Address(AddressField::ZipCode),
            ],
            Self::Account => &[FieldId::Username, FieldId::Password],
        }
    }
}

impl fmt::Display for FormStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.title(), self.index() + 1, Self::ALL.len())
    }
}

/// Something that happened to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// A field was edited
    Change(FieldId, String),
    /// Forward navigation was requested
    Next,
    /// Backward navigation was requested
    Prev,
    /// The request left for the endpoint
    SubmitStarted,
    /// The request finished, whatever the outcome
    SubmitFinished,
}

/// Complete state of one registration attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Current page
    pub step: FormStep,
    /// Values entered so far
    pub data: RegistrationData,
    /// Errors from the last validation run
    pub errors: ValidationErrors,
    /// True only while a request is in flight
    pub is_submitting: bool,
}

impl FormState {
    /// Fresh, empty form on the first step
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event and return the resulting state
    pub fn apply(mut self, event: FormEvent) -> Self {
        match event {
            FormEvent::Change(field, value) => {
                self.data = self.data.with_field(field, value);
            }
            FormEvent::Next => {
                self.errors = validate_step(self.step, &self.data);
                if self.errors.is_empty() {
                    if let Some(next) = self.step.next() {
                        self.step = next;
                    }
                }
            }
            FormEvent::Prev => {
                if let Some(prev) = self.step.prev() {
                    self.step = prev;
                }
            }
            FormEvent::SubmitStarted => {
                self.is_submitting = true;
            }
            FormEvent::SubmitFinished => {
                self.is_submitting = false;
                self.data.clear();
                self.errors = ValidationErrors::new();
                self.step = FormStep::Personal;
            }
        }
        self
    }
}
