// SPDX-FileCopyrightText: 2026 Trigon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `trigon config` subcommands.

use std::process::ExitCode;

use clap::Subcommand;
use colored::Colorize;
use trigon_config::TrigonConfig;

/// Configuration inspection actions.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
    /// Validate the configuration and report problems.
    Check,
}

/// Runs a config action against an already loaded and validated configuration.
pub fn run_config(action: ConfigCommands, config: &TrigonConfig) -> ExitCode {
    match action {
        ConfigCommands::Show => match config.to_toml() {
            Ok(rendered) => {
                print!("{rendered}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("{} failed to render config: {e}", "error:".red().bold());
                ExitCode::FAILURE
            }
        },
        ConfigCommands::Check => {
            println!(
                "{} configuration is valid (gateway {}:{})",
                "ok:".green().bold(),
                config.gateway.host,
                config.gateway.port
            );
            ExitCode::SUCCESS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_and_check_succeed_for_defaults() {
        let config = TrigonConfig::default();
        assert_eq!(run_config(ConfigCommands::Show, &config), ExitCode::SUCCESS);
        assert_eq!(run_config(ConfigCommands::Check, &config), ExitCode::SUCCESS);
    }
}
