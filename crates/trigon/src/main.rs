// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trigon - triangle classification over HTTP and the command line.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod classify;
mod config_cmd;
mod serve;
mod shutdown;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use trigon_config::TrigonConfig;

use crate::classify::ClassifyArgs;
use crate::config_cmd::ConfigCommands;
use crate::serve::ServeOverrides;

/// Trigon - triangle classification over HTTP and the command line.
#[derive(Parser, Debug)]
#[command(name = "trigon", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP classification service.
    Serve {
        /// Override `gateway.host`.
        #[arg(long)]
        host: Option<String>,
        /// Override `gateway.port`.
        #[arg(long)]
        port: Option<u16>,
    },
    /// Classify three side lengths and print the result.
    Classify(ClassifyArgs),
    /// Inspect Trigon configuration.
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            let Some(config) = load_config(cli.config.as_deref()) else {
                return ExitCode::FAILURE;
            };
            match serve::run_serve(config, ServeOverrides { host, port }).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("trigon: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        // Classification needs no configuration.
        Some(Commands::Classify(args)) => classify::run_classify(&args),
        Some(Commands::Config { action }) => match load_config(cli.config.as_deref()) {
            Some(config) => config_cmd::run_config(action, &config),
            None => ExitCode::FAILURE,
        },
        None => {
            println!("trigon: use --help for available commands");
            ExitCode::SUCCESS
        }
    }
}

/// Load and validate configuration, rendering diagnostics on failure.
fn load_config(path: Option<&std::path::Path>) -> Option<TrigonConfig> {
    let loaded = match path {
        Some(path) => trigon_config::load_and_validate_path(path),
        None => trigon_config::load_and_validate(),
    };
    match loaded {
        Ok(config) => Some(config),
        Err(errors) => {
            trigon_config::render_errors(&errors);
            None
        }
    }
}
