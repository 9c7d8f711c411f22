//! Import collection and annotation requalification.
//!
//! Both collections are persistent in style: every operation returns a new
//! value and leaves the receiver untouched.

pub mod annotations;
pub mod imports;

pub use annotations::{Annotations, Resolution};
pub use imports::Imports;
