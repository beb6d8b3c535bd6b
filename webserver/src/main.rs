//! WebServer process entry point

use clap::Parser;
use shared::{ProcessId, logging, process_info};
use tokio::signal;

use webserver::{ServerConfig, WebServer, WebServerResult, WebServerState};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "HTTP server exposing the addition endpoint")]
struct Args {
    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server
    #[arg(long, default_value = "3000")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let args = Args::parse();

    ProcessId::init_webserver();
    logging::init_tracing_with_level(Some(&args.log_level));

    let config = ServerConfig::new(args.host, args.port);
    let http_addr = config.socket_addr()?;

    logging::log_startup(ProcessId::current(), &format!("webserver on {http_addr}"));

    let mut webserver = WebServer::new(WebServerState::new());

    // Set up graceful shutdown
    let shutdown_sender = webserver.get_shutdown_sender();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                logging::log_shutdown(ProcessId::current(), "Received Ctrl+C signal");
                let _ = shutdown_sender.send(()).await;
            }
            Err(err) => {
                logging::log_error(ProcessId::current(), "Signal handling", &err);
            }
        }
    });

    process_info!(ProcessId::current(), "➕ Addition endpoint at http://{}{}", http_addr, shared::CALCULATE_PATH);

    webserver.run(http_addr).await?;

    logging::log_success(ProcessId::current(), "WebServer stopped gracefully");
    Ok(())
}
