//! Short code generation and validation utilities.
//!
//! Two generators are available:
//! - [`hash_code`] derives a code from the target URL, so the same URL always
//!   maps to the same code
//! - [`generate_code`] draws a random alphanumeric code
//!
//! Custom user-provided codes are checked by [`validate_custom_code`].

use std::sync::LazyLock;

use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde_json::json;
use sha2::{Digest, Sha256};

use crate::error::AppError;

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 6;

/// Longest accepted custom alias.
const MAX_CUSTOM_CODE_LENGTH: usize = 64;

/// Reserved codes that cannot be used as short links.
///
/// These collide with the service's own routes.
const RESERVED_CODES: &[&str] = &["shorten", "stats", "health"];

static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("custom code pattern is valid"));

/// Derives a deterministic code from a URL.
///
/// Takes the first [`CODE_LENGTH`] lowercase hex digits of the SHA-256 digest
/// of the URL. Distinct URLs may collide; such a collision surfaces as an
/// alias conflict when the second URL is registered.
///
/// # Examples
///
/// ```
/// use link_registry::utils::code_generator::hash_code;
///
/// let code = hash_code("https://example.com");
/// assert_eq!(code.len(), 6);
/// assert_eq!(code, hash_code("https://example.com"));
/// ```
pub fn hash_code(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let mut code = hex::encode(digest);
    code.truncate(CODE_LENGTH);
    code
}

/// Generates a random alphanumeric short code.
///
/// Uses the thread-local RNG and yields [`CODE_LENGTH`] characters from
/// `[A-Za-z0-9]`.
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::invalid_input(
            format!("Alias must be 1-{MAX_CUSTOM_CODE_LENGTH} characters"),
            json!({ "provided_length": code.len() }),
        ));
    }

    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::invalid_input(
            "Alias can only contain letters, digits, hyphens and underscores",
            json!({ "alias": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::invalid_input(
            "This alias is reserved",
            json!({ "alias": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_hash_code_is_deterministic() {
        assert_eq!(
            hash_code("https://example.com"),
            hash_code("https://example.com")
        );
    }

    #[test]
    fn test_hash_code_is_six_lowercase_hex_digits() {
        let code = hash_code("https://example.com/some/long/path?q=1");
        assert_eq!(code.len(), CODE_LENGTH);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_hash_code_known_value() {
        // sha256("") = e3b0c442...
        assert_eq!(hash_code(""), "e3b0c4");
    }

    #[test]
    fn test_hash_code_differs_for_different_urls() {
        assert_ne!(hash_code("https://a.com"), hash_code("https://b.com"));
    }

    #[test]
    fn test_generate_code_has_correct_length() {
        assert_eq!(generate_code().len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_alphanumeric() {
        let code = generate_code();
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_code_varies() {
        let codes: HashSet<String> = (0..100).map(|_| generate_code()).collect();
        assert!(codes.len() > 90);
    }

    #[test]
    fn test_validate_accepts_typical_aliases() {
        for alias in ["short1", "My-Link", "promo_2025", "a"] {
            assert!(validate_custom_code(alias).is_ok(), "{alias} should be valid");
        }
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(validate_custom_code("").is_err());
    }

    #[test]
    fn test_validate_too_long() {
        let alias = "a".repeat(MAX_CUSTOM_CODE_LENGTH + 1);
        let err = validate_custom_code(&alias).unwrap_err();
        assert!(err.to_string().contains("1-64 characters"));
    }

    #[test]
    fn test_validate_rejects_path_and_space_characters() {
        for alias in ["a/b", "my link", "what?", "caf\u{e9}"] {
            let err = validate_custom_code(alias).unwrap_err();
            assert!(matches!(err, AppError::InvalidInput { .. }), "{alias}");
        }
    }

    #[test]
    fn test_validate_all_reserved_codes() {
        for &reserved in RESERVED_CODES {
            let result = validate_custom_code(reserved);
            assert!(
                result.is_err(),
                "Reserved code '{}' should be invalid",
                reserved
            );
        }
    }
}
