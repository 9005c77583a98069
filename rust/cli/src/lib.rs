//! # sixmax CLI Library
//!
//! Command-line host for the six-max hand engine: deals, plays and simulates
//! hands, keeps a JSONL hand history and shows the resolved configuration.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["sixmax", "play", "--seed", "42", "--actions", "f.f.f.f.f"];
//! let code = sixmax_cli::run(args, &mut io::sink(), &mut io::sink());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal one hand and show every seat
//! - `play`: Play one hand from an action script or stdin
//! - `sim`: Auto-play hands with carried-over stacks
//! - `history`: List stored hands, newest first
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

pub mod actions;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod logging;
pub mod ui;

use cli::{Commands, SixmaxCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_history_command, handle_play_command,
    handle_sim_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses `args`, runs the subcommand and returns the exit code: `0` for
/// success, `2` for any error. `play` reads actions from the process stdin.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// [`run`] with an explicit input stream for `play`.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match SixmaxCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write!(err, "{}", e);
                    exit_code::ERROR
                }
            };
        }
    };

    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            let _ = ui::write_error(err, &format!("Invalid configuration: {}", e));
            return exit_code::ERROR;
        }
    };
    let cfg = &resolved.config;

    let result = match cli.cmd {
        Commands::Deal { seed } => handle_deal_command(seed, cfg, out),
        Commands::Play { seed, actions } => handle_play_command(seed, actions, cfg, out, err, stdin),
        Commands::Sim { hands, seed } => handle_sim_command(hands, seed, cfg, out),
        Commands::History { limit } => handle_history_command(limit, cfg, out),
        Commands::Cfg => handle_cfg_command(&resolved, out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}
