use serde::Serialize;
use std::fmt;

use crate::errors::ValidationError;
use crate::util::trim_input;

pub const MAX_USERNAME_LEN: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalUsername(String);

impl CanonicalUsername {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalUsername {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn allowed(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

/// Trim and lowercase, then check the character set before the length.
pub fn validate(input: &str) -> Result<CanonicalUsername, ValidationError> {
    let name = trim_input(input).to_lowercase();

    if !name.chars().all(allowed) {
        return Err(ValidationError::InvalidCharacters);
    }
    // ASCII only from here on, so bytes == chars
    if name.is_empty() || name.len() > MAX_USERNAME_LEN {
        return Err(ValidationError::Length);
    }
    Ok(CanonicalUsername(name))
}

/// Same as [`validate`], for a field that may be missing from the request.
pub fn validate_opt(input: Option<&str>) -> Result<CanonicalUsername, ValidationError> {
    match input {
        Some(s) => validate(s),
        None => Err(ValidationError::Required),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(validate("Alice_01").unwrap().as_str(), "alice_01");
        assert_eq!(validate("  Bob.Smith-2 \t").unwrap().as_str(), "bob.smith-2");
    }

    #[test]
    fn illegal_characters_are_rejected() {
        assert_eq!(validate("bad name!"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validate("caf\u{e9}"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validate("a@b"), Err(ValidationError::InvalidCharacters));
    }

    #[test]
    fn bom_is_trimmed_but_next_line_is_not() {
        assert_eq!(validate("\u{feff}alice").unwrap().as_str(), "alice");
        assert_eq!(validate("\u{85}alice"), Err(ValidationError::InvalidCharacters));
    }

    #[test]
    fn empty_is_a_length_error() {
        assert_eq!(validate(""), Err(ValidationError::Length));
        assert_eq!(validate("   "), Err(ValidationError::Length));
    }

    #[test]
    fn length_bounds() {
        assert!(validate(&"a".repeat(64)).is_ok());
        assert_eq!(validate(&"a".repeat(65)), Err(ValidationError::Length));
    }

    #[test]
    fn charset_is_checked_before_length() {
        let long_and_bad = format!("{}!", "a".repeat(80));
        assert_eq!(validate(&long_and_bad), Err(ValidationError::InvalidCharacters));
    }

    #[test]
    fn missing_field_is_required_error() {
        assert_eq!(validate_opt(None), Err(ValidationError::Required));
        assert_eq!(validate_opt(Some("x")).unwrap().as_str(), "x");
    }
}
