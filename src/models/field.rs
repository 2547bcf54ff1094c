//! Typed identifiers for every form field
//!
//! Fields are addressed by `FieldId` rather than by free-form strings. The
//! textual keys (`fullName`, `address.street`, ...) still exist because they
//! are what error maps are keyed by and what the CLI accepts, but they are
//! parsed once at the edge. Only one level of nesting exists (the address).

use std::fmt;
use std::str::FromStr;

use super::options::Catalog;
use crate::error::EnrollError;

/// A field inside the nested address record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AddressField {
    Street,
    Number,
    Complement,
    Neighborhood,
    State,
    City,
    ZipCode,
}

impl AddressField {
    /// Every address field, in form order
    pub const ALL: &'static [AddressField] = &[
        Self::Street,
        Self::Number,
        Self::Complement,
        Self::Neighborhood,
        Self::State,
        Self::City,
        Self::ZipCode,
    ];

    /// Key of the field inside the address record
    pub fn key(&self) -> &'static str {
        match self {
            Self::Street => "street",
            Self::Number => "number",
            Self::Complement => "complement",
            Self::Neighborhood => "neighborhood",
            Self::State => "state",
            Self::City => "city",
            Self::ZipCode => "zipCode",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }
}

/// Identifies one input of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FullName,
    BirthDate,
    Superintendence,
    Position,
    Gender,
    MaritalStatus,
    Address(AddressField),
    Username,
    Password,
}

/// How a field is edited
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// Free text
    Text,
    /// ISO date typed as `YYYY-MM-DD`
    Date,
    /// Text that is masked unless revealed
    Secret,
    /// One value out of a fixed catalog
    Choice(Catalog),
}

impl FieldId {
    /// Every top-level field key, used for parsing
    const TOP_LEVEL: &'static [FieldId] = &[
        Self::FullName,
        Self::BirthDate,
        Self::Superintendence,
        Self::Position,
        Self::Gender,
        Self::MaritalStatus,
        Self::Username,
        Self::Password,
    ];

    /// Key used in error maps: bare for top-level fields, `address.<child>` for the address
    pub fn key(&self) -> String {
        match self {
            Self::Address(child) => format!("address.{}", child.key()),
            other => other.top_level_key().to_string(),
        }
    }

    fn top_level_key(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::BirthDate => "birthDate",
            Self::Superintendence => "superintendence",
            Self::Position => "position",
            Self::Gender => "gender",
            Self::MaritalStatus => "maritalStatus",
            Self::Address(_) => "address",
            Self::Username => "username",
            Self::Password => "password",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Nome Completo",
            Self::BirthDate => "Data de Nascimento",
            Self::Superintendence => "Superintendência",
            Self::Position => "Função eclesiástica",
            Self::Gender => "Sexo",
            Self::MaritalStatus => "Estado Civil",
            Self::Address(AddressField::Street) => "Rua",
            Self::Address(AddressField::Number) => "Número",
            Self::Address(AddressField::Complement) => "Complemento",
            Self::Address(AddressField::Neighborhood) => "Bairro",
            Self::Address(AddressField::State) => "Estado",
            Self::Address(AddressField::City) => "Cidade",
            Self::Address(AddressField::ZipCode) => "CEP",
            Self::Username => "Nome de Usuário",
            Self::Password => "Senha",
        }
    }

    /// Placeholder shown while the input is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FullName => "Digite seu nome completo",
            Self::BirthDate => "AAAA-MM-DD",
            Self::Address(AddressField::Street) => "Nome da rua",
            Self::Address(AddressField::Number) => "Nº",
            Self::Address(AddressField::Complement) => "Complemento",
            Self::Address(AddressField::Neighborhood) => "Bairro",
            Self::Address(AddressField::City) => "Cidade",
            Self::Address(AddressField::ZipCode) => "00000-000",
            Self::Username => "Escolha um nome de usuário",
            Self::Password => "coloque sua senha",
            _ => "Selecione",
        }
    }

    /// Editing behaviour of the field
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::BirthDate => FieldKind::Date,
            Self::Password => FieldKind::Secret,
            Self::Superintendence => FieldKind::Choice(Catalog::superintendences()),
            Self::Position => FieldKind::Choice(Catalog::positions()),
            Self::Gender => FieldKind::Choice(Catalog::genders()),
            Self::MaritalStatus => FieldKind::Choice(Catalog::marital_statuses()),
            Self::Address(AddressField::State) => FieldKind::Choice(Catalog::states()),
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

impl FromStr for FieldId {
    type Err = EnrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some(("address", child)) => AddressField::from_key(child)
                .map(Self::Address)
                .ok_or_else(|| EnrollError::unknown_field(s)),
            Some(_) => Err(EnrollError::unknown_field(s)),
            None => Self::TOP_LEVEL
                .iter()
                .copied()
                .find(|f| f.top_level_key() == s)
                .ok_or_else(|| EnrollError::unknown_field(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(FieldId::FullName.key(), "fullName");
        assert_eq!(FieldId::Address(AddressField::ZipCode).key(), "address.zipCode");
        assert_eq!(FieldId::MaritalStatus.to_string(), "maritalStatus");
    }

    #[test]
    fn test_parse_top_level_and_nested() {
        assert_eq!("username".parse::<FieldId>().unwrap(), FieldId::Username);
        assert_eq!(
            "address.city".parse::<FieldId>().unwrap(),
            FieldId::Address(AddressField::City)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_paths() {
        assert!("address".parse::<FieldId>().is_err());
        assert!("address.country".parse::<FieldId>().is_err());
        assert!("profile.city".parse::<FieldId>().is_err());
        assert!("address.city.name".parse::<FieldId>().is_err());
        assert!("nickname".parse::<FieldId>().is_err());
    }

    #[test]
    fn test_every_key_round_trips() {
        let mut all: Vec<FieldId> = FieldId::TOP_LEVEL.to_vec();
        all.extend(AddressField::ALL.iter().copied().map(FieldId::Address));
        for field in all {
            assert_eq!(field.key().parse::<FieldId>().unwrap(), field);
        }
    }

    #[test]
    fn test_kinds() {
        assert!(matches!(FieldId::Password.kind(), FieldKind::Secret));
        assert!(matches!(FieldId::BirthDate.kind(), FieldKind::Date));
        match FieldId::Address(AddressField::State).kind() {
            FieldKind::Choice(catalog) => assert_eq!(catalog.choices.len(), 27),
            other => panic!("unexpected kind {:?}", other),
        }
    }
}
