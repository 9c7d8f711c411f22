//! Regex grammars for the signature subset the generator understands.
//!
//! Parsing is kept apart from the model so the grammar can grow (arrays,
//! wildcards) without touching any renderer.

pub mod generic;
pub mod signature;

pub use generic::generic_clause;
pub use signature::{SignatureParts, parse_signature};
