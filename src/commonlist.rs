//! Common-password list management
//!
//! Ships a built-in list of very common passwords and supports replacing it
//! once at startup from an external file.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Built-in list used when no replacement file is loaded.
const BUILTIN_COMMON_PASSWORDS: [&str; 12] = [
    "123456", "password", "qwerty", "12345678", "111111", "abc123", "123123", "admin", "letmein",
    "welcome", "iloveyou", "000000",
];

static COMMON_PASSWORDS: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum CommonlistError {
    #[error("Common-password file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common-password file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common-password file is empty")]
    EmptyFile,
}

/// Returns the replacement list path from `PWD_RISK_COMMONLIST_PATH`, if set.
pub fn get_commonlist_path() -> Option<PathBuf> {
    std::env::var("PWD_RISK_COMMONLIST_PATH").ok().map(PathBuf::from)
}

/// Loads the replacement common-password list named by the environment.
///
/// With `PWD_RISK_COMMONLIST_PATH` unset this is a no-op and the built-in
/// list stays in effect.
///
/// # Errors
///
/// Returns error if the named file does not exist, cannot be read, or is
/// empty. The built-in list keeps serving lookups in every error case.
pub fn init_commonlist() -> Result<usize, CommonlistError> {
    match get_commonlist_path() {
        Some(path) => init_commonlist_from_path(&path),
        None => Ok(BUILTIN_COMMON_PASSWORDS.len()),
    }
}

/// Loads the replacement common-password list from a specific file path.
///
/// One password per line; lines are trimmed and lower-cased, blank lines
/// skipped. Idempotent: once a list is loaded, later calls return its size
/// without re-reading.
///
/// # Errors
///
/// Returns error if the file does not exist, cannot be read, or is empty.
pub fn init_commonlist_from_path<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<usize, CommonlistError> {
    {
        let guard = COMMON_PASSWORDS.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Commonlist initialization FAILED: FileNotFound {}", path.display());
        return Err(CommonlistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Commonlist initialization FAILED: Empty file {}", path.display());
        return Err(CommonlistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = COMMON_PASSWORDS.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Commonlist initialized: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Checks if a password is in the common-password list (case-insensitive).
///
/// Consults the replacement list when one was loaded, the built-in list
/// otherwise.
pub fn is_common_password(password: &str) -> bool {
    let lower = password.to_lowercase();
    let guard = COMMON_PASSWORDS.read().unwrap();
    match guard.as_ref() {
        Some(set) => set.contains(&lower),
        None => BUILTIN_COMMON_PASSWORDS.contains(&lower.as_str()),
    }
}

/// Resets the loaded list for testing purposes.
#[cfg(test)]
pub fn reset_commonlist_for_testing() {
    let mut guard = COMMON_PASSWORDS.write().unwrap();
    *guard = None;
}
