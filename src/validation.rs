//! CEP shape validation
//!
//! A CEP is valid iff it is exactly eight ASCII decimal digits, with no
//! separators. Validation always runs before any upstream call.

use crate::ClimaCepError;

/// Check whether the input has the 8-digit CEP shape
#[must_use]
pub fn is_valid_cep(input: &str) -> bool {
    input.len() == 8 && input.chars().all(|c| c.is_ascii_digit())
}

/// Validate the raw query-string value for a CEP
pub fn validate_cep(input: &str) -> Result<(), ClimaCepError> {
    if is_valid_cep(input) {
        Ok(())
    } else {
        Err(ClimaCepError::InvalidZipcode)
    }
}
