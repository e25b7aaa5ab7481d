//! Pattern section - flags keyboard walks and sequential fragments.

use super::{Finding, SectionOutcome};
use secrecy::{ExposeSecret, SecretString};

/// Fragments matched as case-insensitive substrings.
const KEYBOARD_PATTERNS: [&str; 6] = ["qwerty", "asdf", "zxcv", "12345", "123456", "password"];

const PENALTY: u8 = 10;

const WARNING: &str = "Resembles an easily guessed pattern (qwerty/12345/asdf)";
const SUGGESTION: &str = "Avoid predictable patterns and increase the password length";

/// Flags passwords containing a known keyboard or sequential fragment.
pub fn keyboard_pattern_section(password: &SecretString) -> SectionOutcome {
    let lower = password.expose_secret().to_lowercase();
    if KEYBOARD_PATTERNS.iter().any(|p| lower.contains(p)) {
        return Some(Finding {
            warning: WARNING,
            suggestion: SUGGESTION,
            penalty: PENALTY,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_pattern_section_keyboard_walk() {
        let result = keyboard_pattern_section(&secret("myQWERTYpass"));
        assert!(result.is_some());
        assert_eq!(result.unwrap().penalty, 10);
    }

    #[test]
    fn test_pattern_section_sequential_digits() {
        assert!(keyboard_pattern_section(&secret("x12345x")).is_some());
    }

    #[test]
    fn test_pattern_section_embedded_word() {
        assert!(keyboard_pattern_section(&secret("SuperPassword!")).is_some());
    }

    #[test]
    fn test_pattern_section_clean_password() {
        assert_eq!(keyboard_pattern_section(&secret("kH7#mB2$vN9&")), None);
    }
}
