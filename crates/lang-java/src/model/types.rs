use super::generic::GenericDeclaration;
use super::package::Package;
use crate::naming::{TYPE_SEPARATOR, is_primitive, qualify};
use crate::parser::parse_signature;
use immutagen_api::{ModelError, ModelResult, check};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A (package, simple name, generic declaration) triple.
///
/// Renders as `package.Name<Generic>`, omitting the parts that are absent.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type {
    package: Package,
    name: String,
    generic: GenericDeclaration,
}

impl Type {
    pub fn new(
        package: Package,
        name: impl Into<String>,
        generic: GenericDeclaration,
    ) -> ModelResult<Self> {
        let name = name.into();
        check::no_whitespace(&name, "type name")?;
        check::argument(
            !name.contains(TYPE_SEPARATOR),
            format!("type name '{}' must not contain '{}'", name, TYPE_SEPARATOR),
        )?;
        Ok(Self {
            package,
            name,
            generic,
        })
    }

    /// Parse a signature such as `java.util.List<String>`, `Outer$Inner` or `int`.
    pub fn parse(signature: &str) -> ModelResult<Self> {
        let parts = parse_signature(signature)?;
        let package = match parts.package {
            Some(path) => Package::of(path).map_err(|e| {
                ModelError::MalformedTypeSignature(format!("'{}': {}", signature, e))
            })?,
            None => Package::Undefined,
        };
        let generic = match parts.generic {
            Some(contents) => GenericDeclaration::of(contents)?,
            None => GenericDeclaration::Undefined,
        };
        Self::new(package, parts.name, generic)
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn generic_declaration(&self) -> &GenericDeclaration {
        &self.generic
    }

    /// Whether the type carries a package and so can be imported.
    pub fn is_qualified(&self) -> bool {
        self.package.is_defined()
    }

    pub fn is_primitive(&self) -> bool {
        !self.is_qualified() && is_primitive(&self.name)
    }

    pub fn without_generics(&self) -> Type {
        Type {
            package: self.package.clone(),
            name: self.name.clone(),
            generic: GenericDeclaration::Undefined,
        }
    }

    /// `Name<Generic>`, the form used inside a class body once imports are in place.
    pub fn simple_declaration(&self) -> String {
        format!("{}{}", self.name, self.generic)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            qualify(self.package.name(), &self.name),
            self.generic
        )
    }
}

impl FromStr for Type {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Type::parse(s)
    }
}
