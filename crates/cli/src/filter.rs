// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Selecting labels with a target pattern.
//!
//! Labels arrive one per line (typically the output of an affected-target
//! walk). Parsing is sequential so errors carry line numbers; matching runs on
//! the rayon pool since [`Pattern::matches`] is pure.

use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::label::Label;
use crate::pattern::Pattern;

/// What to do with a line that is not a valid label.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InvalidLabelPolicy {
    /// Log a warning and continue.
    #[default]
    Skip,
    /// Abort with [`Error::Label`].
    Fail,
}

/// Result of filtering a label stream.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Labels selected by the pattern, in input order.
    pub matched: Vec<Label>,
    /// Number of labels parsed.
    pub scanned: usize,
    /// Number of lines skipped because they failed to parse.
    pub skipped: usize,
}

/// Read label lines, dropping blanks and `#` comments.
///
/// Yields `(line_number, text)` with 1-based line numbers.
pub fn read_label_lines(reader: impl BufRead) -> Result<Vec<(usize, String)>> {
    let mut lines = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::Io {
            path: "<labels>".into(),
            source: e,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        lines.push((idx + 1, trimmed.to_string()));
    }
    Ok(lines)
}

/// Keep the labels that `pattern` selects.
pub fn filter_labels(
    pattern: &Pattern,
    lines: &[(usize, String)],
    policy: InvalidLabelPolicy,
) -> Result<FilterOutcome> {
    let mut labels = Vec::with_capacity(lines.len());
    let mut skipped = 0;
    for (line, text) in lines {
        match Label::parse(text) {
            // Relative lines name targets in the root package; keep them
            // rooted so they are written as `//:name`.
            Ok(label) => labels.push(Label {
                relative: false,
                ..label
            }),
            Err(source) => match policy {
                InvalidLabelPolicy::Fail => {
                    return Err(Error::Label {
                        line: *line,
                        source,
                    });
                }
                InvalidLabelPolicy::Skip => {
                    tracing::warn!(line, "skipping label: {}", source);
                    skipped += 1;
                }
            },
        }
    }

    let scanned = labels.len();
    let matched: Vec<Label> = labels
        .into_par_iter()
        .filter(|label| pattern.matches(label))
        .collect();

    tracing::info!(
        pattern = %pattern,
        scanned,
        matched = matched.len(),
        skipped,
        "filtered labels"
    );

    Ok(FilterOutcome {
        matched,
        scanned,
        skipped,
    })
}

/// Write labels in the format `bazel --target_pattern_file` reads.
///
/// One canonical label per line, each terminated by `\n`.
pub fn write_target_pattern_file(path: &Path, labels: &[Label]) -> Result<()> {
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    for label in labels {
        writeln!(writer, "{label}").map_err(io_error)?;
    }
    let file = writer.into_inner().map_err(|e| io_error(e.into_error()))?;
    file.sync_all().map_err(io_error)?;

    tracing::debug!("wrote {} labels to {}", labels.len(), path.display());
    Ok(())
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
