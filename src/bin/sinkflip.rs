//! sinkflip binary entry point
//!
//! Dispatches to the toggle or one of the read-only subcommands.

use clap::Parser;
use color_eyre::eyre::Result;
use sinkflip::{cli::Args, cli::Command, commands};

/// Initialize logging
///
/// Logs go to stderr so stdout carries only command output. Level comes from
/// `RUST_LOG`, defaulting to `warn`.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging();

    let server = args.server();

    match args.command {
        None => {
            commands::toggle(&server, false);
            Ok(())
        }

        Some(Command::Toggle { notify }) => {
            commands::toggle(&server, notify);
            Ok(())
        }

        Some(Command::Status { json }) => commands::status(&server, json),

        Some(Command::ListSinks { json }) => commands::list_sinks(&server, json),
    }
}
