//! HTTP collaborator around the analyzer.
//!
//! Endpoints:
//! - POST /api/analyze - Analyze a password from a JSON body
//! - GET /health - Health check

use axum::{
    Json, Router,
    routing::{get, post},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;

use crate::analyzer::analyze;
use crate::types::AnalysisResult;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Invalid bind address {addr}: {source}")]
    InvalidAddr {
        addr: String,
        source: std::net::AddrParseError,
    },
    #[error("Failed to serve: {0}")]
    Io(#[from] std::io::Error),
}

/// Analyze request body. A missing or null `password` means empty.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub password: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Returns the bind address from `PWD_RISK_ADDR` or the default.
pub fn get_bind_addr() -> String {
    std::env::var("PWD_RISK_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string())
}

/// Create the API router
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/analyze", post(analyze_password))
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: VERSION.to_string(),
    })
}

/// Analyze endpoint.
///
/// A missing body, malformed JSON, or an absent password field degrade to
/// the empty password; the analyzer never sees a non-string.
async fn analyze_password(body: Option<Json<AnalyzeRequest>>) -> Json<AnalysisResult> {
    let password = body.and_then(|Json(req)| req.password).unwrap_or_default();
    let result = analyze(&SecretString::new(password.into()));
    tracing::debug!(score = result.score, verdict = %result.verdict, "password analyzed");
    Json(result)
}

/// Binds the configured address and serves the router until shutdown.
pub async fn serve() -> Result<(), ServeError> {
    let raw = get_bind_addr();
    let addr: SocketAddr = raw.parse().map_err(|source| ServeError::InvalidAddr {
        addr: raw.clone(),
        source,
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("pwd-risk-server listening on {}", addr);
    axum::serve(listener, router()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_get_bind_addr_default() {
        remove_env("PWD_RISK_ADDR");
        assert_eq!(get_bind_addr(), DEFAULT_ADDR);
    }

    #[test]
    #[serial]
    fn test_get_bind_addr_from_env() {
        set_env("PWD_RISK_ADDR", "0.0.0.0:9000");
        assert_eq!(get_bind_addr(), "0.0.0.0:9000");
        remove_env("PWD_RISK_ADDR");
    }

    #[tokio::test]
    #[serial]
    async fn test_serve_rejects_invalid_addr() {
        set_env("PWD_RISK_ADDR", "not-an-address");
        let result = serve().await;
        assert!(matches!(result, Err(ServeError::InvalidAddr { .. })));
        remove_env("PWD_RISK_ADDR");
    }
}
