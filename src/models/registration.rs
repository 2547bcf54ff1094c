//! Registration model
//!
//! The data collected by the three form steps. Every value is kept as the raw
//! string the applicant entered or selected; empty means "not filled".

use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::Zeroize;

use super::field::{AddressField, FieldId};

/// Postal address of the applicant
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Zeroize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    /// Optional
    pub complement: String,
    pub city: String,
    /// Two-letter state code
    pub state: String,
    pub zip_code: String,
}

impl Address {
    /// Read one address field
    pub fn get(&self, field: AddressField) -> &str {
        match field {
            AddressField::Street => &self.street,
            AddressField::Number => &self.number,
            AddressField::Complement => &self.complement,
            AddressField::Neighborhood => &self.neighborhood,
            AddressField::State => &self.state,
            AddressField::City => &self.city,
            AddressField::ZipCode => &self.zip_code,
        }
    }

    fn slot(&mut self, field: AddressField) -> &mut String {
        match field {
            AddressField::Street => &mut self.street,
            AddressField::Number => &mut self.number,
            AddressField::Complement => &mut self.complement,
            AddressField::Neighborhood => &mut self.neighborhood,
            AddressField::State => &mut self.state,
            AddressField::City => &mut self.city,
            AddressField::ZipCode => &mut self.zip_code,
        }
    }

    /// One-line form used in the registration summary
    pub fn summary_line(&self) -> String {
        format!(
            "{}, {}, {}, {} - {}, CEP: {}",
            self.street, self.number, self.neighborhood, self.city, self.state, self.zip_code
        )
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Address")
            .field("street", &self.street)
            .field("number", &self.number)
            .field("neighborhood", &self.neighborhood)
            .field("complement", &self.complement)
            .field("city", &self.city)
            .field("state", &self.state)
            .field("zip_code", &self.zip_code)
            .finish()
    }
}

/// Everything one applicant fills in
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Zeroize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationData {
    pub full_name: String,
    /// `YYYY-MM-DD`, as produced by a date input
    pub birth_date: String,
    pub superintendence: String,
    pub position: String,
    pub gender: String,
    pub marital_status: String,
    pub address: Address,
    pub username: String,
    pub password: String,
}

impl RegistrationData {
    /// Read one field
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::FullName => &self.full_name,
            FieldId::BirthDate => &self.birth_date,
            FieldId::Superintendence => &self.superintendence,
            FieldId::Position => &self.position,
            FieldId::Gender => &self.gender,
            FieldId::MaritalStatus => &self.marital_status,
            FieldId::Address(child) => self.address.get(child),
            FieldId::Username => &self.username,
            FieldId::Password => &self.password,
        }
    }

    /// Return a copy with exactly `field` replaced
    ///
    /// Sibling fields, including the other address fields, are carried over
    /// untouched.
    pub fn with_field(&self, field: FieldId, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.slot(field) = value.into();
        next
    }

    fn slot(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::FullName => &mut self.full_name,
            FieldId::BirthDate => &mut self.birth_date,
            FieldId::Superintendence => &mut self.superintendence,
            FieldId::Position => &mut self.position,
            FieldId::Gender => &mut self.gender,
            FieldId::MaritalStatus => &mut self.marital_status,
            FieldId::Address(child) => self.address.slot(child),
            FieldId::Username => &mut self.username,
            FieldId::Password => &mut self.password,
        }
    }

    /// Wipe the contents and return to the empty initial value
    pub fn clear(&mut self) {
        self.zeroize();
        *self = Self::default();
    }

    /// Check whether nothing has been filled in
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Debug for RegistrationData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationData")
            .field("full_name", &self.full_name)
            .field("birth_date", &self.birth_date)
            .field("superintendence", &self.superintendence)
            .field("position", &self.position)
            .field("gender", &self.gender)
            .field("marital_status", &self.marital_status)
            .field("address", &self.address)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_address() -> Address {
        Address {
            street: "Rua das Flores".into(),
            number: "12".into(),
            neighborhood: "Centro".into(),
            complement: "Apto 3".into(),
            city: "Mossoró".into(),
            state: "RN".into(),
            zip_code: "59600-000".into(),
        }
    }

    #[test]
    fn test_with_field_preserves_siblings() {
        let data = RegistrationData {
            full_name: "Maria Silva".into(),
            address: filled_address(),
            ..Default::default()
        };

        let next = data.with_field(FieldId::Address(AddressField::City), "Natal");

        assert_eq!(next.address.city, "Natal");
        assert_eq!(next.address.street, "Rua das Flores");
        assert_eq!(next.address.zip_code, "59600-000");
        assert_eq!(next.full_name, "Maria Silva");
        // original untouched
        assert_eq!(data.address.city, "Mossoró");
    }

    #[test]
    fn test_get_reads_nested_fields() {
        let data = RegistrationData {
            address: filled_address(),
            ..Default::default()
        };
        assert_eq!(data.get(FieldId::Address(AddressField::State)), "RN");
        assert_eq!(data.get(FieldId::Username), "");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut data = RegistrationData {
            full_name: "Maria".into(),
            password: "segredo".into(),
            address: filled_address(),
            ..Default::default()
        };
        data.clear();
        assert!(data.is_empty());
    }

    #[test]
    fn test_debug_hides_password() {
        let data = RegistrationData {
            password: "segredo".into(),
            ..Default::default()
        };
        let shown = format!("{:?}", data);
        assert!(!shown.contains("segredo"));
        assert!(shown.contains("<redacted>"));
    }

    #[test]
    fn test_deserialize_camel_case_with_missing_fields() {
        let json = r#"{"fullName":"João","address":{"zipCode":"59000-000"}}"#;
        let data: RegistrationData = serde_json::from_str(json).unwrap();
        assert_eq!(data.full_name, "João");
        assert_eq!(data.address.zip_code, "59000-000");
        assert_eq!(data.address.street, "");
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(
            filled_address().summary_line(),
            "Rua das Flores, 12, Centro, Mossoró - RN, CEP: 59600-000"
        );
    }
}
