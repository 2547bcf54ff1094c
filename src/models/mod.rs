//! Core data models for theology-enroll
//!
//! The registration record, its typed field identifiers, and the fixed
//! choice catalogs the selects draw from.

pub mod field;
pub mod ids;
pub mod options;
pub mod registration;

pub use field::{AddressField, FieldId, FieldKind};
pub use ids::AttemptId;
pub use options::{
    all_catalogs, BrazilState, Catalog, Gender, MaritalStatus, Position, Superintendence,
};
pub use registration::{Address, RegistrationData};
