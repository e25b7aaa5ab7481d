//! Crack-time estimation - keyspace math and duration humanization.
//!
//! Keyspace exponentiation runs on big integers so long or high-charset
//! passwords never overflow or collapse to infinity.

use num_bigint::BigUint;
use num_traits::{One, Pow, Zero};

/// Attacker guess-rate models, in display order.
pub const GUESS_RATES: [(&str, u64); 4] = [
    ("Online, throttled (10 guesses/sec)", 10),
    ("Online, unthrottled (100 guesses/sec)", 100),
    ("Offline, CPU (100M guesses/sec)", 100_000_000),
    ("Offline, GPU (10B guesses/sec)", 10_000_000_000),
];

/// Duration units, largest first.
const UNITS: [(&str, &str, u64); 5] = [
    ("year", "years", 365 * 24 * 3600),
    ("day", "days", 24 * 3600),
    ("hour", "hours", 3600),
    ("minute", "minutes", 60),
    ("second", "seconds", 1),
];

const LESS_THAN_ONE_SECOND: &str = "less than 1 second";

/// Total number of possible passwords of `length` drawn from `charset` symbols.
pub fn keyspace(charset: u32, length: usize) -> BigUint {
    Pow::pow(BigUint::from(charset), length)
}

/// Average-case seconds to crack: half the keyspace at the given guess rate.
pub fn expected_crack_seconds(charset: u32, length: usize, guesses_per_sec: u64) -> BigUint {
    keyspace(charset, length) / 2u32 / guesses_per_sec
}

/// Renders whole seconds as a coarse human-readable duration.
///
/// Greedy largest-first decomposition over the unit table, capped at two
/// non-zero terms ("45 days, 3 hours" rather than a full breakdown).
/// Sub-second durations yield a fixed "less than 1 second" string.
pub fn humanize_seconds(seconds: &BigUint) -> String {
    if seconds.is_zero() {
        return LESS_THAN_ONE_SECOND.to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let mut remaining = seconds.clone();

    for (singular, plural, unit_secs) in UNITS {
        let unit = BigUint::from(unit_secs);
        if remaining >= unit {
            let qty = &remaining / &unit;
            remaining %= &unit;
            let name = if qty.is_one() { singular } else { plural };
            parts.push(format!("{} {}", qty, name));
        }
        if parts.len() == 2 {
            break;
        }
    }

    if parts.is_empty() {
        return LESS_THAN_ONE_SECOND.to_string();
    }
    parts.join(", ")
}

/// Humanized crack times for every guess-rate model, in declaration order.
pub fn crack_times(charset: u32, length: usize) -> Vec<(String, String)> {
    let expected = keyspace(charset, length) / 2u32;
    GUESS_RATES
        .iter()
        .map(|&(label, rate)| {
            let secs = &expected / rate;
            (label.to_string(), humanize_seconds(&secs))
        })
        .collect()
}
