//! Calculator command line entry point
//!
//! Drives the calculator store once: sets the operands, submits them to
//! the server and prints the resulting display message.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use shared::{ProcessId, logging};

use client::{CalculatorStore, ClientConfig, RealCalculatorApi};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "calculator")]
#[command(about = "Add two numbers on the calculator server")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// First operand
    a: f64,

    /// Second operand
    b: f64,

    /// Base URL of the calculator server
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    server: String,

    /// Request timeout in milliseconds
    #[arg(long, default_value = "30000")]
    timeout_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    ProcessId::init_client();
    logging::init_tracing_with_level(Some(&args.log_level));

    let config = ClientConfig::new(&args.server, Duration::from_millis(args.timeout_ms))?;
    let api = RealCalculatorApi::new(&config)?;
    let store = CalculatorStore::new(api);

    store.set_numbers(args.a, args.b).await;
    store.fetch_sum().await;

    let state = store.snapshot().await;
    println!("{}", state.display_message());

    if state.error.is_some() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
