//! Short code generation and validation.
//!
//! Provides cryptographically secure random code generation and validation
//! for custom user-provided codes. Neither function guarantees uniqueness;
//! that is the store's job at insertion time.

use crate::error::AppError;
use serde_json::json;

/// Alphabet for generated codes: 62 alphanumeric symbols.
const CODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of system-generated codes.
const GENERATED_CODE_LENGTH: usize = 6;

/// Length bounds for user-provided custom codes (inclusive).
const CUSTOM_CODE_MIN_LENGTH: usize = 3;
const CUSTOM_CODE_MAX_LENGTH: usize = 20;

/// Largest byte value usable without biasing the 62-symbol alphabet.
const UNBIASED_BYTE_LIMIT: u8 = (u8::MAX / 62) * 62;

/// Generates a cryptographically secure random 6-character short code.
///
/// Each character is drawn independently and uniformly from the 62-symbol
/// alphanumeric alphabet. Uses `getrandom` for entropy with rejection
/// sampling over raw bytes to avoid modulo bias. Predictable codes would let
/// an attacker enumerate live links, so there is no fallback to a weaker
/// source.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator
/// fails (extremely rare).
pub fn generate_code() -> Result<String, AppError> {
    let mut code = String::with_capacity(GENERATED_CODE_LENGTH);
    let mut buffer = [0u8; 16];

    while code.len() < GENERATED_CODE_LENGTH {
        getrandom::fill(&mut buffer).map_err(|e| {
            tracing::error!("Entropy source failed: {e}");
            AppError::internal("Failed to generate short code", json!({}))
        })?;

        for &byte in &buffer {
            // Reject the tail of the byte range so every symbol stays uniform.
            if byte < UNBIASED_BYTE_LIMIT {
                code.push(CODE_ALPHABET[(byte % 62) as usize] as char);
                if code.len() == GENERATED_CODE_LENGTH {
                    break;
                }
            }
        }
    }

    Ok(code)
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 3-20 characters
/// - Allowed characters: letters, digits, hyphens, and underscores
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated. Collision with
/// an existing code is not checked here; that is discovered at insertion
/// time.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.len() < CUSTOM_CODE_MIN_LENGTH || code.len() > CUSTOM_CODE_MAX_LENGTH {
        return Err(AppError::bad_request(
            "Custom code must be 3-20 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, hyphens, and underscores",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
