#![recursion_limit = "256"]

mod config;
mod routes;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum ServeError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Routes(#[from] routes::RoutesError),
    #[error("failed to bind: {0}")]
    Bind(std::io::Error),
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "amt stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServeError> {
    let config = config::ServerConfig::from_env()?;
    let app = routes::app()?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(ServeError::Bind)?;

    tracing::info!(port = config.port, "amt listening");
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}
