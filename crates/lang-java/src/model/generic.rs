use crate::parser::generic_clause;
use immutagen_api::{ModelResult, check};
use serde::Serialize;
use std::fmt;

/// The raw contents of a `<...>` clause, or the absence of one.
///
/// Renders as `<contents>` when defined and as nothing otherwise.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(into = "Option<String>")]
pub enum GenericDeclaration {
    #[default]
    Undefined,
    Defined(String),
}

impl GenericDeclaration {
    pub fn of(contents: impl Into<String>) -> ModelResult<Self> {
        let contents = contents.into();
        check::not_empty(&contents, "generic declaration")?;
        Ok(GenericDeclaration::Defined(contents))
    }

    /// Extract the generic clause of a type declaration such as `Box<T>`.
    pub fn parse_from(declaration: &str) -> Self {
        generic_clause(declaration)
            .map(|clause| GenericDeclaration::Defined(clause.to_string()))
            .unwrap_or_default()
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, GenericDeclaration::Defined(_))
    }

    pub fn contents(&self) -> Option<&str> {
        match self {
            GenericDeclaration::Defined(contents) => Some(contents),
            GenericDeclaration::Undefined => None,
        }
    }
}

impl fmt::Display for GenericDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenericDeclaration::Defined(contents) => write!(f, "<{}>", contents),
            GenericDeclaration::Undefined => Ok(()),
        }
    }
}

impl From<GenericDeclaration> for Option<String> {
    fn from(generic: GenericDeclaration) -> Self {
        match generic {
            GenericDeclaration::Defined(contents) => Some(contents),
            GenericDeclaration::Undefined => None,
        }
    }
}
