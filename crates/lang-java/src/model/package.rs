use crate::naming::TYPE_SEPARATOR;
use immutagen_api::{ModelResult, check};
use serde::Serialize;
use std::fmt;

/// A dotted package path, or the absence of one.
///
/// Primitives and types referenced without a package carry
/// [`Package::Undefined`]; such types never produce an import statement.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(into = "Option<String>")]
pub enum Package {
    #[default]
    Undefined,
    Defined(String),
}

impl Package {
    /// Validate and wrap a dotted path such as `java.util`.
    pub fn of(path: impl Into<String>) -> ModelResult<Self> {
        let path = path.into();
        check::no_whitespace(&path, "package")?;
        check::argument(
            path.split(TYPE_SEPARATOR).all(|segment| !segment.is_empty()),
            format!("package '{}' must not contain empty segments", path),
        )?;
        Ok(Package::Defined(path))
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, Package::Defined(_))
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Package::Defined(path) => Some(path),
            Package::Undefined => None,
        }
    }

    pub fn segments(&self) -> Vec<&str> {
        self.name()
            .map(|path| path.split(TYPE_SEPARATOR).collect())
            .unwrap_or_default()
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name().unwrap_or_default())
    }
}

impl From<Package> for Option<String> {
    fn from(package: Package) -> Self {
        match package {
            Package::Defined(path) => Some(path),
            Package::Undefined => None,
        }
    }
}
