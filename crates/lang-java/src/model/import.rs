use super::types::Type;
use immutagen_api::ModelResult;
use serde::Serialize;
use std::fmt;

/// An import statement. Imports never carry type parameters.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Import {
    ty: Type,
}

impl Import {
    pub fn of(signature: &str) -> ModelResult<Self> {
        Ok(Self::from_type(&Type::parse(signature)?))
    }

    pub fn from_type(ty: &Type) -> Self {
        Self {
            ty: ty.without_generics(),
        }
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn name(&self) -> &str {
        self.ty.name()
    }
}

impl From<&Type> for Import {
    fn from(ty: &Type) -> Self {
        Import::from_type(ty)
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "import {};", self.ty)
    }
}
