//! Type representation and source rendering for immutable-class generation.
//!
//! Signatures (`package.Name$Inner<Generic>`) are parsed into [`model::Type`]
//! values, assembled into a [`model::Clazz`], and rendered as Java source
//! with a deduplicated, sorted import block.

pub mod model;
pub mod naming;
pub mod parser;
pub mod resolve;

pub use model::*;
pub use resolve::{Annotations, Imports, Resolution};
