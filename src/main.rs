//! pwd-risk HTTP server binary.

use pwd_risk::server;

#[tokio::main]
async fn main() -> Result<(), server::ServeError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = pwd_risk::init_commonlist() {
        tracing::warn!("common-password list not replaced, using built-in: {}", e);
    }

    server::serve().await
}
