#![cfg(not(tarpaulin_include))]

use quizgen::Config;
use quizgen::app;
use std::env;

/// Main entry point for the question generation server
///
/// Reads the configuration from the environment (and `.env`), then lets an
/// optional first argument override the port.
///
/// # Usage
/// `quizgen-server [port]`
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let config = Config::from_env()?.with_port_arg(args.get(1).map(String::as_str))?;

    // After the config so RUST_LOG can come from .env
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting question generator on {}", config.bind_address());
    app::run(config).await
}
