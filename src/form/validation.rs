//! Per-step field validation
//!
//! Each step has a fixed list of required fields. A field is missing when its
//! value is empty after trimming. The username additionally needs at least
//! four characters once something has been typed.

use std::collections::BTreeMap;

use super::state::FormStep;
use crate::models::{AddressField, FieldId, RegistrationData};

/// Minimum username length, counted in characters
pub const MIN_USERNAME_LEN: usize = 4;

/// Message shown when the username is present but too short
pub const USERNAME_TOO_SHORT: &str = "Nome de usuário deve ter pelo menos 4 caracteres";

/// Field-keyed error messages for one step
///
/// Always rebuilt from scratch by [`validate_step`]; never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldId, &'static str>,
}

impl ValidationErrors {
    /// An empty error map
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the step is valid
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for `field`, if it failed
    pub fn get(&self, field: FieldId) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Check whether `field` failed
    pub fn contains(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    /// Message by textual key (`"address.zipCode"`)
    pub fn get_by_key(&self, key: &str) -> Option<&'static str> {
        key.parse::<FieldId>().ok().and_then(|field| self.get(field))
    }

    /// Failing fields and their messages, in form order
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &'static str)> + '_ {
        self.errors.iter().map(|(field, msg)| (*field, *msg))
    }

    fn insert(&mut self, field: FieldId, message: &'static str) {
        self.errors.insert(field, message);
    }
}

/// Message for a required field that was left empty
fn required_message(field: FieldId) -> &'static str {
    match field {
        FieldId::FullName => "Nome completo é obrigatório",
        FieldId::BirthDate => "Data de nascimento é obrigatória",
        FieldId::Superintendence => "a superintendência é obrigatória",
        FieldId::Position => "a função eclesiástica é obrigatória",
        FieldId::Gender => "Sexo é obrigatório",
        FieldId::MaritalStatus => "Estado civil é obrigatório",
        FieldId::Address(AddressField::Street) => "Rua é obrigatória",
        FieldId::Address(AddressField::Number) => "Número é obrigatório",
        FieldId::Address(AddressField::Neighborhood) => "Bairro é obrigatório",
        FieldId::Address(AddressField::City) => "Cidade é obrigatória",
        FieldId::Address(AddressField::State) => "Estado é obrigatório",
        FieldId::Address(AddressField::ZipCode) => "CEP é obrigatório",
        FieldId::Username => "Nome de usuário é obrigatório",
        FieldId::Address(AddressField::Complement) | FieldId::Password => "Campo obrigatório",
    }
}

/// Fields that must be non-empty for `step` to pass
pub fn required_fields(step: FormStep) -> &'static [FieldId] {
    match step {
        FormStep::Personal => &[
            FieldId::FullName,
            FieldId::BirthDate,
            FieldId::Superintendence,
            FieldId::Position,
            FieldId::Gender,
            FieldId::MaritalStatus,
        ],
        FormStep::Address => &[
            FieldId::Address(AddressField::Street),
            FieldId::Address(AddressField::Number),
            FieldId::Address(AddressField::Neighborhood),
            FieldId::Address(AddressField::City),
            FieldId::Address(AddressField::State),
            FieldId::Address(AddressField::ZipCode),
        ],
        FormStep::Account => &[FieldId::Username],
    }
}

/// Validate the fields belonging to `step`
///
/// An empty result means the step is valid. The password is collected on the
/// account step but has no rule.
pub fn validate_step(step: FormStep, data: &RegistrationData) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for &field in required_fields(step) {
        if data.get(field).trim().is_empty() {
            errors.insert(field, required_message(field));
        }
    }

    if step == FormStep::Account
        && !errors.contains(FieldId::Username)
        && data.username.chars().count() < MIN_USERNAME_LEN
    {
        errors.insert(FieldId::Username, USERNAME_TOO_SHORT);
    }

    errors
}
