// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter command implementation.

use std::io::{BufReader, Write};

use target_pattern::cli::{FilterArgs, OutputFormat};
use target_pattern::config::Config;
use target_pattern::error::{Error, ExitCode};
use target_pattern::filter::{self, InvalidLabelPolicy};
use target_pattern::output;
use target_pattern::pattern::Pattern;

/// Run the filter command.
pub fn run(config: &Config, args: &FilterArgs) -> anyhow::Result<ExitCode> {
    let pattern = match (&args.pattern, &config.filter.pattern) {
        (Some(input), _) => Pattern::parse(input).map_err(Error::Pattern)?,
        (None, Some(pattern)) => {
            tracing::debug!("using pattern {} from config", pattern);
            pattern.clone()
        }
        (None, None) => {
            return Err(Error::Argument(
                "no target pattern given (pass PATTERN or set [filter].pattern in config)"
                    .to_string(),
            )
            .into());
        }
    };

    let policy = if args.strict || config.filter.strict {
        InvalidLabelPolicy::Fail
    } else {
        InvalidLabelPolicy::Skip
    };

    let lines = match &args.labels {
        Some(path) => {
            tracing::debug!("reading labels from {}", path.display());
            let file = std::fs::File::open(path).map_err(|e| Error::Io {
                path: path.clone(),
                source: e,
            })?;
            filter::read_label_lines(BufReader::new(file))?
        }
        None => {
            tracing::debug!("reading labels from stdin");
            filter::read_label_lines(std::io::stdin().lock())?
        }
    };

    let outcome = filter::filter_labels(&pattern, &lines, policy)?;

    if outcome.matched.is_empty() {
        tracing::info!("no labels matched {}", pattern);
    }

    if let Some(path) = &args.target_pattern_file {
        filter::write_target_pattern_file(path, &outcome.matched)?;
    }

    let format = args.output.or(config.output.format).unwrap_or_default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let file = args
        .target_pattern_file
        .as_deref()
        .map(|p| p.to_string_lossy());
    let written = match format {
        OutputFormat::Text => output::write_filter_text(&mut out, &outcome),
        OutputFormat::Json => {
            output::write_filter_json(&mut out, &pattern, &outcome, file.as_deref())
        }
    };
    written
        .and_then(|()| out.flush())
        .map_err(Error::Output)?;

    Ok(ExitCode::Success)
}
