// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match command implementation.

use target_pattern::cli::MatchArgs;
use target_pattern::error::{Error, ExitCode};
use target_pattern::label::Label;
use target_pattern::pattern::Pattern;

/// Run the match command.
///
/// Exits with [`ExitCode::NoMatch`] when the label is not selected.
pub fn run(args: &MatchArgs) -> anyhow::Result<ExitCode> {
    let pattern = Pattern::parse(&args.pattern).map_err(Error::Pattern)?;
    let label = Label::parse(&args.label)
        .map_err(|source| Error::Argument(format!("invalid label: {source}")))?;

    tracing::debug!(pattern = %pattern, label = %label, kind = pattern.kind().as_str(), "matching");

    if pattern.matches(&label) {
        println!("match");
        Ok(ExitCode::Success)
    } else {
        println!("no match");
        Ok(ExitCode::NoMatch)
    }
}
