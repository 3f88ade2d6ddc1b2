use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use stdio_http_relay::cli::Cli;
use stdio_http_relay::relay;
use stdio_http_relay::services::heartbeat;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let cfg = match cli.to_config() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            eprintln!("stdio-http-relay: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cfg.credentials.is_some() {
        tracing::info!("authentication enabled");
    }

    if let Some(interval) = cli.heartbeat() {
        if let Err(e) = heartbeat::spawn(interval) {
            tracing::warn!(error = %e, "failed to start heartbeat");
        }
    }

    tracing::info!(target_url = %cfg.target, "passthrough relay running");

    let stdin = io::stdin();
    let stdout = io::stdout();

    match relay(stdin.lock(), stdout.lock(), &cfg) {
        Ok(report) => {
            tracing::info!(
                lines = report.lines_read,
                forwarded = report.forwarded,
                emitted = report.emitted(),
                dropped = report.dropped,
                parse_errors = report.parse_errors,
                transport_errors = report.transport_errors,
                "input exhausted, relay finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "relay stopped");
            eprintln!("stdio-http-relay: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr only; stdout carries protocol lines.
fn init_tracing(cli: &Cli) {
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
