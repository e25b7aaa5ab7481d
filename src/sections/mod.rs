//! Password risk detectors
//!
//! Each detector checks one independent weakness signal. Detectors are never
//! short-circuited by each other; every one runs on every password.

mod common;
mod digits;
mod length;
mod pattern;
mod variety;

pub use common::common_password_section;
pub use digits::all_digit_section;
pub use length::length_section;
pub use pattern::keyboard_pattern_section;
pub use variety::character_variety_section;

/// A fired detector: its fixed warning/suggestion pair and score penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub warning: &'static str,
    pub suggestion: &'static str,
    pub penalty: u8,
}

/// Result type for detector functions.
/// - `Some(finding)` - Detector fired
/// - `None` - Detector passed
pub type SectionOutcome = Option<Finding>;
