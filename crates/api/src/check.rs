//! Argument guards invoked at every value-object constructor boundary.
//!
//! Each guard either hands the checked value back or fails with the
//! [`ModelError`] kind that matches the violation, so constructors can chain
//! them with `?` and never expose a half-built value.

use crate::error::{ModelError, ModelResult};

/// Require a non-empty string.
pub fn not_empty<'a>(value: &'a str, what: &str) -> ModelResult<&'a str> {
    if value.is_empty() {
        return Err(ModelError::InvalidConstruction(format!(
            "{what} must not be empty"
        )));
    }
    Ok(value)
}

/// Require a non-empty string without any whitespace.
pub fn no_whitespace<'a>(value: &'a str, what: &str) -> ModelResult<&'a str> {
    let value = not_empty(value, what)?;
    if value.chars().any(char::is_whitespace) {
        return Err(ModelError::InvalidConstruction(format!(
            "{what} must not contain whitespace: '{value}'"
        )));
    }
    Ok(value)
}

/// Require that an argument satisfies a condition.
pub fn argument(condition: bool, message: impl Into<String>) -> ModelResult<()> {
    if condition {
        Ok(())
    } else {
        Err(ModelError::InvalidConstruction(message.into()))
    }
}

/// Require that a combination of otherwise valid arguments forms a legal state.
pub fn state(condition: bool, message: impl Into<String>) -> ModelResult<()> {
    if condition {
        Ok(())
    } else {
        Err(ModelError::InvalidClassState(message.into()))
    }
}
