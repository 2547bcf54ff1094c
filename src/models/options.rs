//! Fixed choice lists offered by the form
//!
//! Each catalog maps the code sent to the endpoint to the label shown to the
//! applicant. The registration itself stores codes as plain strings, so these
//! types are what the selects cycle through and what `enroll options` prints.

use std::fmt;

/// Macro to generate a closed catalog of (code, label) choices
macro_rules! define_options {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => ($code:literal, $label:literal)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every choice, in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Code sent to the endpoint
            pub fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            /// Label shown to the applicant
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

define_options!(
    /// Regional superintendence the applicant belongs to
    Superintendence {
        AcA => ("AC-A", "AC-A"),
        AcB => ("AC-B", "AC-B"),
        Am => ("AM", "AM"),
        Ce => ("CE", "CE"),
        MgA => ("MG-A", "MG-A"),
        MgC => ("MG-C", "MG-C"),
        Pr => ("PR", "PR"),
        RjA => ("RJ-A", "RJ-A"),
        RjB => ("RJ-B", "RJ-B"),
        RjC => ("RJ-C", "RJ-C"),
        RjD => ("RJ-D", "RJ-D"),
        Rn => ("RN", "RN"),
        Ro => ("RO", "RO"),
        Rs => ("RS", "RS"),
        SpC => ("SP-C", "SP-C"),
    }
);

define_options!(
    /// Ecclesiastical position
    Position {
        Bishop => ("bispo", "Bispo"),
        Pastor => ("pastor", "Pastor"),
        Evangelist => ("evangelista", "Evangelista"),
        Presbyter => ("presbítero", "Presbítero"),
        ConferencePreacher => ("pregador-de-conferencia", "Pregador(a) de Conferência"),
        Deacon => ("diácono", "Diácono(a)"),
        Worker => ("obreiro", "Obreiro(a)"),
    }
);

define_options!(
    /// Gender as asked by the form
    Gender {
        Male => ("masculino", "Masculino"),
        Female => ("feminino", "Feminino"),
    }
);

define_options!(
    /// Marital status
    MaritalStatus {
        Single => ("solteiro", "Solteiro(a)"),
        Married => ("casado", "Casado(a)"),
        Divorced => ("divorciado", "Divorciado(a)"),
        Widowed => ("viuvo", "Viúvo(a)"),
    }
);

define_options!(
    /// Brazilian federative unit
    BrazilState {
        Ac => ("AC", "Acre"),
        Al => ("AL", "Alagoas"),
        Ap => ("AP", "Amapá"),
        Am => ("AM", "Amazonas"),
        Ba => ("BA", "Bahia"),
        Ce => ("CE", "Ceará"),
        Df => ("DF", "Distrito Federal"),
        Es => ("ES", "Espírito Santo"),
        Go => ("GO", "Goiás"),
        Ma => ("MA", "Maranhão"),
        Mt => ("MT", "Mato Grosso"),
        Ms => ("MS", "Mato Grosso do Sul"),
        Mg => ("MG", "Minas Gerais"),
        Pa => ("PA", "Pará"),
        Pb => ("PB", "Paraíba"),
        Pr => ("PR", "Paraná"),
        Pe => ("PE", "Pernambuco"),
        Pi => ("PI", "Piauí"),
        Rj => ("RJ", "Rio de Janeiro"),
        Rn => ("RN", "Rio Grande do Norte"),
        Rs => ("RS", "Rio Grande do Sul"),
        Ro => ("RO", "Rondônia"),
        Rr => ("RR", "Roraima"),
        Sc => ("SC", "Santa Catarina"),
        Sp => ("SP", "São Paulo"),
        Se => ("SE", "Sergipe"),
        To => ("TO", "Tocantins"),
    }
);

/// A (code, label) list for one select field
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Heading used when the catalog is printed
    pub title: &'static str,
    /// Choices in display order
    pub choices: Vec<(&'static str, &'static str)>,
}

impl Catalog {
    fn build<T>(
        title: &'static str,
        all: &'static [T],
        code: fn(&T) -> &'static str,
        label: fn(&T) -> &'static str,
    ) -> Self {
        Self {
            title,
            choices: all.iter().map(|c| (code(c), label(c))).collect(),
        }
    }
}

impl Catalog {
    /// Superintendence codes
    pub fn superintendences() -> Self {
        Self::build(
            "Superintendência",
            Superintendence::ALL,
            Superintendence::code,
            Superintendence::label,
        )
    }

    /// Ecclesiastical positions
    pub fn positions() -> Self {
        Self::build(
            "Função eclesiástica",
            Position::ALL,
            Position::code,
            Position::label,
        )
    }

    /// Genders
    pub fn genders() -> Self {
        Self::build("Sexo", Gender::ALL, Gender::code, Gender::label)
    }

    /// Marital statuses
    pub fn marital_statuses() -> Self {
        Self::build(
            "Estado civil",
            MaritalStatus::ALL,
            MaritalStatus::code,
            MaritalStatus::label,
        )
    }

    /// Brazilian states
    pub fn states() -> Self {
        Self::build(
            "Estado",
            BrazilState::ALL,
            BrazilState::code,
            BrazilState::label,
        )
    }

    /// Position of `code` in this catalog
    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.choices.iter().position(|(c, _)| *c == code)
    }

    /// Label for `code`, if it belongs to this catalog
    pub fn label_of(&self, code: &str) -> Option<&'static str> {
        self.choices
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
    }
}

/// Every catalog the form uses, in the order the fields appear
pub fn all_catalogs() -> Vec<Catalog> {
    vec![
        Catalog::superintendences(),
        Catalog::positions(),
        Catalog::genders(),
        Catalog::marital_statuses(),
        Catalog::states(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(Superintendence::ALL.len(), 15);
        assert_eq!(Position::ALL.len(), 7);
        assert_eq!(Gender::ALL.len(), 2);
        assert_eq!(MaritalStatus::ALL.len(), 4);
        assert_eq!(BrazilState::ALL.len(), 27);
    }

    #[test]
    fn test_labels() {
        assert_eq!(MaritalStatus::Widowed.label(), "Viúvo(a)");
        assert_eq!(BrazilState::Rn.to_string(), "Rio Grande do Norte");
    }

    #[test]
    fn test_all_catalogs_in_field_order() {
        let catalogs = all_catalogs();
        let titles: Vec<_> = catalogs.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            vec!["Superintendência", "Função eclesiástica", "Sexo", "Estado civil", "Estado"]
        );
        assert_eq!(catalogs[4].choices[0], ("AC", "Acre"));
    }

    #[test]
    fn test_catalog_lookup() {
        let positions = Catalog::positions();
        assert_eq!(positions.index_of("pastor"), Some(1));
        assert_eq!(positions.label_of("obreiro"), Some("Obreiro(a)"));
        assert_eq!(positions.index_of(""), None);
    }
}
