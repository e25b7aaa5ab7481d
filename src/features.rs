//! Feature extraction - length, charset size and entropy of a password.

use secrecy::{ExposeSecret, SecretString};

const LOWERCASE_SIZE: u32 = 26;
const UPPERCASE_SIZE: u32 = 26;
const DIGIT_SIZE: u32 = 10;
const SYMBOL_SIZE: u32 = 33;

/// Number of code points in the password.
pub fn char_length(password: &SecretString) -> usize {
    password.expose_secret().chars().count()
}

/// Infers the alphabet size the password draws from.
///
/// Each character lands in one of four classes (Unicode-aware): lowercase,
/// uppercase, digit, or symbol (anything not alphanumeric, whitespace and
/// non-ASCII included). Classes present at least once contribute their fixed
/// size: 26 + 26 + 10 + 33. Floored at 1 so entropy and keyspace math stay
/// defined for empty or caseless input.
pub fn charset_size(password: &SecretString) -> u32 {
    let pwd = password.expose_secret();
    let has_lower = pwd.chars().any(|c| c.is_lowercase());
    let has_upper = pwd.chars().any(|c| c.is_uppercase());
    let has_digit = pwd.chars().any(|c| c.is_numeric());
    let has_symbol = pwd.chars().any(|c| !c.is_alphanumeric());

    let mut size = 0;
    if has_lower {
        size += LOWERCASE_SIZE;
    }
    if has_upper {
        size += UPPERCASE_SIZE;
    }
    if has_digit {
        size += DIGIT_SIZE;
    }
    if has_symbol {
        size += SYMBOL_SIZE;
    }
    size.max(1)
}

/// Shannon-style entropy estimate: `length * log2(charset)`.
///
/// Short-circuits to 0.0 for the empty password instead of relying on
/// `0 * log2(1)` falling out to zero.
pub fn entropy_bits(length: usize, charset: u32) -> f64 {
    if length == 0 {
        return 0.0;
    }
    length as f64 * f64::from(charset).log2()
}
