//! Password risk analyzer - main evaluation pipeline.

use secrecy::SecretString;
use std::collections::HashSet;

use crate::crack::crack_times;
use crate::features::{char_length, charset_size, entropy_bits};
use crate::sections::{
    SectionOutcome, all_digit_section, character_variety_section, common_password_section,
    keyboard_pattern_section, length_section,
};
use crate::types::{AnalysisResult, Verdict};

const EMPTY_WARNING: &str = "No password entered";
const EMPTY_SUGGESTION: &str = "Enter a password to be evaluated";

const WEAK_WARNINGS: [&str; 1] =
    ["High risk: could be guessed or brute-forced quickly, especially after a data leak"];
const WEAK_SUGGESTIONS: [&str; 4] = [
    "Increase the length to at least 12-16 characters",
    "Avoid common words, names, birthdays and predictable patterns",
    "Use a different password for every site",
    "Enable two-factor authentication where available",
];

const FAIR_WARNINGS: [&str; 1] =
    ["Still at risk: an offline attack on leaked hashes could succeed"];
const FAIR_SUGGESTIONS: [&str; 4] = [
    "Make it longer still (12-16+ characters is safer)",
    "Add more variety (upper case, digits and symbols mixed together)",
    "Use a password manager to generate random, unique passwords",
    "Enable two-factor authentication where available",
];

const STRONG_SUGGESTIONS: [&str; 3] = [
    "Good work - keep it up, and never reuse this password across sites",
    "Enable two-factor authentication where available",
    "Consider a password manager for storing your passwords",
];

const VERY_STRONG_SUGGESTIONS: [&str; 2] = [
    "Excellent - keep it unique per site and enable two-factor authentication where available",
    "Store passwords in a password manager instead of memorizing them all",
];

/// Entropy-banded base score. Coarse on purpose: raw entropy is a weak
/// standalone predictor below these cutoffs, the bands keep the base roughly
/// in line with informal strength tiers.
fn base_score(entropy: f64) -> i32 {
    if entropy < 28.0 {
        20
    } else if entropy < 50.0 {
        45
    } else if entropy < 80.0 {
        70
    } else {
        90
    }
}

/// Keeps the first occurrence of each string, preserving order.
fn dedupe_keep_first(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Analyzes a password and returns a full risk assessment.
///
/// Total over every string input: empty passwords take a terminal branch,
/// arbitrarily long ones go through big-integer keyspace math. Each call is
/// independent and reads only static configuration, so concurrent use needs
/// no coordination.
pub fn analyze(password: &SecretString) -> AnalysisResult {
    let length = char_length(password);

    // Terminal branch: nothing to detect or score against.
    if length == 0 {
        return AnalysisResult {
            length: 0,
            charset_size: 1,
            entropy_bits: 0.0,
            score: 0,
            verdict: Verdict::Empty,
            warnings: vec![EMPTY_WARNING.to_string()],
            suggestions: vec![EMPTY_SUGGESTION.to_string()],
            crack_times: Vec::new(),
        };
    }

    let charset = charset_size(password);
    let entropy = entropy_bits(length, charset);

    // Orchestrator: every detector runs, none short-circuits another
    let sections: Vec<(&str, fn(&SecretString) -> SectionOutcome)> = vec![
        ("length", length_section),
        ("common", common_password_section),
        ("pattern", keyboard_pattern_section),
        ("variety", character_variety_section),
        ("digits", all_digit_section),
    ];

    let mut detector_warnings: Vec<String> = Vec::new();
    let mut detector_suggestions: Vec<String> = Vec::new();
    let mut penalty: i32 = 0;

    for (_section_name, section_fn) in sections {
        if let Some(finding) = section_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::debug!("detector fired: {}", _section_name);
            detector_warnings.push(finding.warning.to_string());
            detector_suggestions.push(finding.suggestion.to_string());
            penalty += i32::from(finding.penalty);
        }
    }

    let score = (base_score(entropy) - penalty).clamp(0, 100) as u8;
    let verdict = Verdict::from_score(score);

    let (bucket_warnings, bucket_suggestions): (&[&str], &[&str]) = match verdict {
        Verdict::Weak => (&WEAK_WARNINGS, &WEAK_SUGGESTIONS),
        Verdict::Fair => (&FAIR_WARNINGS, &FAIR_SUGGESTIONS),
        Verdict::Strong => (&[], &STRONG_SUGGESTIONS),
        // zero-length input returned above, Empty cannot occur here
        Verdict::VeryStrong | Verdict::Empty => (&[], &VERY_STRONG_SUGGESTIONS),
    };

    // Bucket warnings lead only in the risky range; bucket suggestions always lead.
    let warnings = if score < 65 {
        let mut all: Vec<String> = bucket_warnings.iter().map(|s| s.to_string()).collect();
        all.extend(detector_warnings);
        dedupe_keep_first(all)
    } else {
        dedupe_keep_first(detector_warnings)
    };

    let mut all_suggestions: Vec<String> =
        bucket_suggestions.iter().map(|s| s.to_string()).collect();
    all_suggestions.extend(detector_suggestions);
    let suggestions = dedupe_keep_first(all_suggestions);

    AnalysisResult {
        length,
        charset_size: charset,
        entropy_bits: entropy,
        score,
        verdict,
        warnings,
        suggestions,
        crack_times: crack_times(charset, length),
    }
}

/// Convenience wrapper for callers holding a plain string.
pub fn analyze_str(password: &str) -> AnalysisResult {
    analyze(&SecretString::new(password.to_string().into()))
}
