//! # Post Server
//!
//! Serves the `post.Post` RPCs over HTTP/JSON, optionally behind TLS.

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;
mod tls;

use config::AppConfig;
use handlers::{configure_routes, json_config};
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let guard = match init_telemetry(&TelemetryConfig::from_env()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize telemetry: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run().await {
        tracing::error!(error = ?e, "Post server failed");
        drop(guard);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    let state = AppState::from_config(&config).await?;

    let tls_config = config
        .tls
        .as_ref()
        .map(tls::load_server_config)
        .transpose()
        .context("failed to load TLS material")?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        tls = tls_config.is_some(),
        "Starting post server"
    );

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config())
            .configure(configure_routes)
    });

    let addr = (config.host.as_str(), config.port);
    let server = match tls_config {
        Some(tls_config) => server.bind_rustls_0_23(addr, tls_config),
        None => server.bind(addr),
    }
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;

    server.run().await.context("server terminated abnormally")?;

    tracing::info!("Post server stopped");
    Ok(())
}
