//! Password risk analysis library
//!
//! Estimates the strength of a password and returns a structured risk
//! assessment: an entropy estimate, a 0-100 score, a qualitative verdict,
//! de-duplicated warnings and suggestions, and estimated crack times under
//! several attacker models.
//!
//! # Features
//!
//! - `web` (default): Enables the HTTP analysis endpoint and server binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_RISK_COMMONLIST_PATH`: Optional replacement common-password list
//!   (one password per line; the built-in list serves when unset)
//! - `PWD_RISK_ADDR`: Server bind address (default: `127.0.0.1:8080`)
//!
//! # Example
//!
//! ```rust
//! use pwd_risk::analyze;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = analyze(&password);
//!
//! println!("Score: {}", result.score);
//! println!("Verdict: {}", result.verdict);
//! for (model, duration) in &result.crack_times {
//!     println!("{}: {}", model, duration);
//! }
//! ```

// Internal modules
mod analyzer;
mod commonlist;
mod crack;
mod features;
mod sections;
mod types;

#[cfg(feature = "web")]
pub mod server;

// Public API
pub use analyzer::{analyze, analyze_str};
pub use commonlist::{
    CommonlistError, init_commonlist, init_commonlist_from_path, is_common_password,
};
pub use crack::{GUESS_RATES, crack_times, expected_crack_seconds, humanize_seconds, keyspace};
pub use types::{AnalysisResult, Verdict};
