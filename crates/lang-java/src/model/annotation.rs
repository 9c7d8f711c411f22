use super::types::Type;
use immutagen_api::ModelResult;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

pub static IMMUTABLE: Lazy<Annotation> =
    Lazy::new(|| Annotation::canonical("javax.annotation.concurrent.Immutable"));
pub static NOT_THREAD_SAFE: Lazy<Annotation> =
    Lazy::new(|| Annotation::canonical("javax.annotation.concurrent.NotThreadSafe"));
pub static NONNULL: Lazy<Annotation> = Lazy::new(|| Annotation::canonical("javax.annotation.Nonnull"));
pub static NONNEGATIVE: Lazy<Annotation> =
    Lazy::new(|| Annotation::canonical("javax.annotation.Nonnegative"));
pub static NULLABLE: Lazy<Annotation> =
    Lazy::new(|| Annotation::canonical("javax.annotation.Nullable"));

/// An annotation use site, identified by its type.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Annotation {
    ty: Type,
}

impl Annotation {
    pub fn new(ty: Type) -> Self {
        Self { ty }
    }

    /// Parse an annotation type such as `javax.annotation.Nonnull` or `Nonnull`.
    pub fn parse(signature: &str) -> ModelResult<Self> {
        Ok(Self::new(Type::parse(signature.trim_start_matches('@'))?))
    }

    fn canonical(signature: &str) -> Self {
        Self::parse(signature).expect("canonical annotation signatures are well-formed")
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn is_qualified(&self) -> bool {
        self.ty.is_qualified()
    }

    pub fn is_immutable(&self) -> bool {
        self == &*IMMUTABLE
    }

    pub fn is_not_thread_safe(&self) -> bool {
        self == &*NOT_THREAD_SAFE
    }

    pub fn is_nonnull(&self) -> bool {
        self == &*NONNULL
    }

    pub fn is_nonnegative(&self) -> bool {
        self == &*NONNEGATIVE
    }

    pub fn is_nullable(&self) -> bool {
        self == &*NULLABLE
    }
}

/// Renders the use site, `@Name`; the qualified type goes to the import block.
impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.ty.name())
    }
}
