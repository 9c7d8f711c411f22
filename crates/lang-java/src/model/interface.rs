use super::import::Import;
use super::types::Type;
use immutagen_api::ModelResult;
use serde::Serialize;
use std::fmt;

/// An interface named in a class's `implements` clause.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Interface {
    ty: Type,
}

impl Interface {
    pub fn new(ty: Type) -> Self {
        Self { ty }
    }

    pub fn parse(signature: &str) -> ModelResult<Self> {
        Ok(Self::new(Type::parse(signature)?))
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn import(&self) -> Import {
        Import::from_type(&self.ty)
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ty.simple_declaration())
    }
}
