//! Common-password section - flags membership in the common-password list.

use super::{Finding, SectionOutcome};
use crate::commonlist::is_common_password;
use secrecy::{ExposeSecret, SecretString};

const PENALTY: u8 = 25;

const WARNING: &str = "One of the most commonly used passwords (trivial to guess)";
const SUGGESTION: &str = "Avoid popular passwords and never reuse one across sites";

/// Flags passwords found in the common-password list (case-insensitive).
pub fn common_password_section(password: &SecretString) -> SectionOutcome {
    if is_common_password(password.expose_secret()) {
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
    use serial_test::serial;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    #[serial]
    fn test_common_section_builtin_hit() {
        crate::commonlist::reset_commonlist_for_testing();
        let result = common_password_section(&secret("letmein"));
        assert!(result.is_some());
        assert_eq!(result.unwrap().penalty, 25);
    }

    #[test]
    #[serial]
    fn test_common_section_case_insensitive() {
        crate::commonlist::reset_commonlist_for_testing();
        assert!(common_password_section(&secret("PASSWORD")).is_some());
    }

    #[test]
    #[serial]
    fn test_common_section_uncommon_password() {
        crate::commonlist::reset_commonlist_for_testing();
        assert_eq!(
            common_password_section(&secret("CorrectHorseBatteryStaple!123")),
            None
        );
    }
}
