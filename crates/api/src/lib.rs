pub mod check;
pub mod error;

// Re-export commonly used types
pub use error::{ModelError, ModelResult};
