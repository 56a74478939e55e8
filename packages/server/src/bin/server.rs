//! iine server.
//!
//! Serves the post/like API and the per-user notification streams.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin iine-server -- --port 8080
//! ```

use clap::Parser;
use iine_server::config::Config;
use iine_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = Config::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = iine_server::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
