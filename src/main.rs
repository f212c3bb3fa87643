mod api;
mod cli;
mod config;
mod datasources;
mod db;
mod error;
mod logic;
mod models;

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use api::AppState;
use cli::{Cli, Commands};
use config::Config;
use datasources::GeocodeClient;
use db::Database;
use error::Result;
use logic::AssessmentEngine;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_filter = match cli.verbose {
        0 => "exempt_assess=info,tower_http=info",
        1 => "exempt_assess=debug,tower_http=debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    // Load configuration
    let config = match Config::load(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Please copy config/config.yaml.example to config/config.yaml");
            std::process::exit(1);
        }
    };

    // Initialize the audit database
    let db_path = Config::db_path(cli.data_dir.as_ref())?;
    let db = Database::open(&db_path)?;
    tracing::info!(path = %db_path.display(), "audit database ready");

    // Geocoder is optional; assessments proceed without coordinates when absent
    let geocoder = match &config.geocoder {
        Some(geo_config) if geo_config.enabled => {
            Some(Arc::new(GeocodeClient::new(geo_config.clone())?))
        }
        _ => None,
    };

    if let Some(Commands::Check) = cli.command {
        return run_check(&config, &db, geocoder.as_deref()).await;
    }

    let state = AppState {
        engine: AssessmentEngine::new(),
        db,
        geocoder,
    };

    let addr = SocketAddr::new(
        config
            .server
            .host
            .parse()
            .map_err(|e| error::AssessError::Config(format!("Invalid host address: {}", e)))?,
        config.server.port,
    );
    let app = api::router(state, &config.server);

    tracing::info!(%addr, "starting assessment server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Validate config, open the audit database and probe the geocoder.
async fn run_check(config: &Config, db: &Database, geocoder: Option<&GeocodeClient>) -> Result<()> {
    println!("Config: OK");
    println!(
        "Server: {}:{} (timeout {}s, body limit {} bytes, concurrency {})",
        config.server.host,
        config.server.port,
        config.server.request_timeout_secs,
        config.server.max_body_bytes,
        config.server.max_concurrency
    );

    let count = db.with_conn(|conn| {
        conn.query_row("SELECT COUNT(*) FROM assessments", [], |row| {
            row.get::<_, i64>(0)
        })
        .map_err(error::AssessError::from)
    })?;
    println!("Database: OK ({} at {})", count, db.path().display());

    match geocoder {
        Some(client) => match client.geocode("553 Kiewa Street, Albury NSW").await {
            Ok(candidate) => println!(
                "Geocoder: OK ({:.4}, {:.4})",
                candidate.longitude, candidate.latitude
            ),
            Err(e) => println!("Geocoder: OFFLINE ({})", e),
        },
        None => println!("Geocoder: not configured"),
    }

    Ok(())
}

/// Wait for SIGINT or SIGTERM so the server shuts down cleanly under a
/// process manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, shutting down");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, shutting down");
        }
    }
}
