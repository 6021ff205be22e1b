//! serve-a-file: a single-file HTTP responder
//!
//! Serves the contents of one configured file for `/` and `/index.html`,
//! and fixed error statuses for everything else. One request line per
//! connection; the connection closes after every response.
//!
//! Features:
//! - Routing limited to the index page
//! - Custom response headers and a configurable status line
//! - Configuration via CLI arguments or TOML file

mod config;
mod http;
mod server;

use config::Config;
use server::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Startup failures print a message and return without serving; the
    // process keeps the default success exit code either way.
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!(
        address = %config.listen,
        file = %config.file.display(),
        status = config.status,
        headers = config.headers.len(),
        "Starting serve-a-file server"
    );

    let server = Server::new(config);
    if let Err(e) = server.run().await {
        error!(error = %e, "Server error");
    }
}
