// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse command implementation.

use std::io::Write;

use target_pattern::cli::{OutputFormat, ParseArgs};
use target_pattern::config::Config;
use target_pattern::error::{Error, ExitCode};
use target_pattern::output;
use target_pattern::pattern::Pattern;

/// Run the parse command.
pub fn run(config: &Config, args: &ParseArgs) -> anyhow::Result<ExitCode> {
    let patterns = args
        .patterns
        .iter()
        .map(|input| {
            Pattern::parse(input)
                .map(|pattern| (input.as_str(), pattern))
                .map_err(Error::Pattern)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let format = args.output.or(config.output.format).unwrap_or_default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let written = match format {
        OutputFormat::Text => output::write_patterns_text(&mut out, &patterns),
        OutputFormat::Json => output::write_patterns_json(&mut out, &patterns),
    };
    written
        .and_then(|()| out.flush())
        .map_err(Error::Output)?;

    Ok(ExitCode::Success)
}
