// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! target-pattern CLI entry point.

use std::path::Path;

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use target_pattern::cli::{Cli, Command};
use target_pattern::config::{self, Config};
use target_pattern::discovery;
use target_pattern::error::ExitCode;

mod cmd_filter;
mod cmd_match;
mod cmd_parse;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("TARGET_PATTERN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("target-pattern: {}", e);
            match e.downcast_ref::<target_pattern::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Parse(args)) => {
            let config = load_config(cli.config.as_deref())?;
            cmd_parse::run(&config, args)
        }
        Some(Command::Match(args)) => cmd_match::run(args),
        Some(Command::Filter(args)) => {
            let config = load_config(cli.config.as_deref())?;
            cmd_filter::run(&config, args)
        }
    }
}

/// Load the explicit or discovered config, falling back to defaults.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;
    match discovery::resolve_config(explicit, &cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            Ok(config::load(&path)?)
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Ok(Config::default())
        }
    }
}
