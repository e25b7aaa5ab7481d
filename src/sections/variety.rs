//! Variety section - flags passwords built from a tiny character pool.

use super::{Finding, SectionOutcome};
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashSet;

const MAX_DISTINCT: usize = 2;
const MIN_LENGTH_FOR_CHECK: usize = 6;
const PENALTY: u8 = 10;

const WARNING: &str = "Very low character diversity (mostly repeated characters)";
const SUGGESTION: &str = "Mix in more distinct characters and increase the length";

/// Flags passwords of 6+ characters drawn from at most 2 distinct ones.
pub fn character_variety_section(password: &SecretString) -> SectionOutcome {
    let pwd = password.expose_secret();
    let distinct: HashSet<char> = pwd.chars().collect();
    if distinct.len() <= MAX_DISTINCT && pwd.chars().count() >= MIN_LENGTH_FOR_CHECK {
        return Some(Finding {
            warning: WARNING,
            suggestion: SUGGESTION,
            penalty: PENALTY,
        });
    }
    None
}
