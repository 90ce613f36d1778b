// Logging behavior:
// - Writes logs to a daily-rotated file at logs/dinwatch.log; the TUI owns
//   stdout, so nothing is logged there.
// - Level via --log-level, falling back to RUST_LOG, then "info".
mod display;
mod runtime;

use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "A countdown timer that resets when the room gets loud"
)]
struct Cli {
    /// Countdown duration, e.g. "3m20s" or "90s"
    #[arg(value_parser = humantime::parse_duration)]
    duration: Duration,
    /// Audio input device name (default: system default input)
    #[arg(short = 'D', long)]
    device: Option<String>,
    /// Log level filter (overrides RUST_LOG)
    #[arg(long = "log-level", default_value = "")]
    log_level: String,
}

fn init_logging(cli_level: &str) -> anyhow::Result<()> {
    std::fs::create_dir_all("logs").context("failed to create logs directory")?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, "logs", "dinwatch.log");
    let (non_blocking_file, _guard) = tracing_appender::non_blocking(file_appender);
    // Prefer CLI-provided level; fall back to RUST_LOG; then default to info
    let effective_level = if !cli_level.is_empty() {
        cli_level.to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };
    let env_filter = EnvFilter::try_new(effective_level).unwrap_or_else(|_| EnvFilter::new("info"));

    // File-only: the countdown display owns the terminal.
    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();
    std::mem::forget(_guard);
    Ok(())
}

fn main() -> ExitCode {
    // The boundary contract pins bad arguments to exit code 1.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    if let Err(e) = init_logging(&cli.log_level) {
        eprintln!("dinwatch: {:#}", e);
        return ExitCode::from(1);
    }
    tracing::info!("Starting dinwatch");

    match runtime::run(cli.duration, cli.device) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("dinwatch: {}", e);
            ExitCode::from(1)
        }
    }
}
