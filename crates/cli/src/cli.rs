// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

/// Parse, match, and canonicalize Bazel target patterns
#[derive(Parser)]
#[command(name = "target-pattern")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "TARGET_PATTERN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the canonical form of target patterns
    Parse(ParseArgs),
    /// Check whether a single label matches a pattern
    Match(MatchArgs),
    /// Select labels from a list with a pattern
    Filter(FilterArgs),
}

#[derive(clap::Args)]
pub struct ParseArgs {
    /// Target patterns (e.g., //foo/..., @repo//pkg:all, :name)
    #[arg(value_name = "PATTERN", required = true)]
    pub patterns: Vec<String>,

    /// Output format
    #[arg(short, long)]
    pub output: Option<OutputFormat>,
}

#[derive(clap::Args)]
pub struct MatchArgs {
    /// Target pattern
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Label to test (e.g., //foo/bar:baz)
    #[arg(value_name = "LABEL")]
    pub label: String,
}

#[derive(clap::Args)]
pub struct FilterArgs {
    /// Target pattern (default: [filter].pattern from config)
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Read labels from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    pub labels: Option<PathBuf>,

    /// Also write matching labels to a file for `bazel --target_pattern_file`
    #[arg(long, value_name = "FILE")]
    pub target_pattern_file: Option<PathBuf>,

    /// Fail on labels that do not parse instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(short, long)]
    pub output: Option<OutputFormat>,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
