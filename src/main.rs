use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use ac_calc::api::{AppState, create_router};
use ac_calc::config;
use ac_calc::error::EngineError;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CATALOG_DIR: &str = "./config/catalog";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// `EX_CONFIG` from sysexits.h.
const EXIT_CONFIG: u8 = 78;

/// Exit status for a failed catalog load.
fn load_exit_status(err: &EngineError) -> u8 {
    if err.is_configuration_error() {
        EXIT_CONFIG
    } else {
        1
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog_dir =
        std::env::var("AC_CALC_CATALOG").unwrap_or_else(|_| DEFAULT_CATALOG_DIR.to_string());
    let bind = std::env::var("AC_CALC_BIND").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let addr: SocketAddr = match bind.parse() {
        Ok(addr) => addr,
        Err(err) => {
            error!(bind = %bind, error = %err, "Invalid AC_CALC_BIND address");
            return ExitCode::FAILURE;
        }
    };

    // Loaded once; every request reads the same catalog.
    let catalog = match config::load_and_install(&catalog_dir) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!(
                path = %catalog_dir,
                error = %err,
                configuration = err.is_configuration_error(),
                "Failed to load reference catalog"
            );
            return ExitCode::from(load_exit_status(&err));
        }
    };

    let app = create_router(AppState::shared(Arc::clone(catalog)));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(%addr, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(%addr, "Aeroplan calculator listening");
    info!("  POST /calculate                - Calculate itinerary earnings");
    info!("  GET  /airlines                 - List airlines");
    info!("  GET  /airports/:code/distances - Recorded distances from an airport");
    info!("  GET  /statuses                 - List status tiers");
    info!("  GET  /fare-brands              - List fare brands");

    if let Err(err) = axum::serve(listener, app).await {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
