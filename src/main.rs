//! ircserv - a single-process IRC daemon.
//!
//! One poll-driven reactor multiplexes every socket; all protocol state
//! lives on that thread.

mod config;
mod error;
mod handlers;
mod network;
mod server;
mod signals;
mod state;
mod util;

use std::process;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::server::Server;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            println!("{err}");
            process::exit(1);
        }
    };

    signals::install()?;

    let mut server = Server::new(config)?;
    server.run()
}
