//! Business logic services (use cases).
//!
//! Services validate requests, delegate to repository traits (ports), and
//! read back the created record. They depend on traits -- never on concrete
//! infrastructure implementations.

pub mod chat;
pub mod message;
pub mod user;

use chatest_types::error::ServiceError;

/// Reject names that are empty once surrounding whitespace is removed.
///
/// Returns the trimmed value.
pub(crate) fn require_name(field: &str, value: &str) -> Result<String, ServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_name_trims() {
        assert_eq!(require_name("name", "  general ").unwrap(), "general");
    }

    #[test]
    fn test_require_name_rejects_blank() {
        let err = require_name("username", " \t ").unwrap_err();
        assert_eq!(err.to_string(), "invalid input: username cannot be empty");
    }
}
