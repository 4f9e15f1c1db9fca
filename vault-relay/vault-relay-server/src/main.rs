//! The relay server for the vault front-end
//!
//! Accepts deposit, withdraw and swap requests from the browser,
//! synthesizes natural-language instructions and forwards them to the
//! local agent process

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![deny(unsafe_code)]
#![deny(clippy::needless_pass_by_ref_mut)]

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;

use std::sync::Arc;

use agent_client::DEFAULT_AGENT_URL;
use clap::Parser;
use routes::build_routes;
use server::Server;
use tracing::info;
use tracing_subscriber::EnvFilter;

// -------
// | Cli |
// -------

/// The cli for the vault relay
#[derive(Debug, Clone, Parser)]
#[command(about = "Vault relay server")]
struct Cli {
    /// The port to listen on
    #[arg(long, default_value = "9762", env = "RELAY_PORT")]
    port: u16,
    /// The base URL of the agent process
    #[arg(long, default_value = DEFAULT_AGENT_URL, env = "AGENT_URL")]
    agent_url: String,
    /// The timeout in seconds applied to each agent call
    #[arg(long, default_value = "30", env = "AGENT_TIMEOUT_SECS")]
    agent_timeout_secs: u64,
    /// The maximum number of concurrent agent calls
    #[arg(long, default_value = "8", env = "MAX_CONCURRENT_AGENT_CALLS")]
    max_concurrent_agent_calls: usize,
}

#[tokio::main]
async fn main() {
    setup_telemetry();
    let cli = Cli::parse();

    let port = cli.port; // copy `cli.port` to use after moving `cli`
    let server = Server::build_from_cli(cli).expect("failed to build server");
    let server = Arc::new(server);

    let routes = build_routes(server);
    info!("vault relay listening on port {port}");
    warp::serve(routes).run(([0, 0, 0, 0], port)).await
}

/// Configure the tracing subscriber
fn setup_telemetry() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
