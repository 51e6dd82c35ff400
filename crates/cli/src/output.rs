// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON rendering for command results.
//!
//! Text output is one item per line so it can be piped into other tools.
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use crate::filter::FilterOutcome;
use crate::pattern::Pattern;

/// A parsed pattern with its decomposed fields, for JSON output.
#[derive(Debug, Serialize)]
pub struct PatternOutput<'a> {
    pub input: &'a str,
    pub canonical: String,
    pub repo: &'a str,
    pub package: &'a str,
    pub recursive: bool,
    pub explicit_all: bool,
    pub specific_name: &'a str,
    pub kind: &'static str,
}

impl<'a> PatternOutput<'a> {
    pub fn new(input: &'a str, pattern: &'a Pattern) -> Self {
        Self {
            input,
            canonical: pattern.to_string(),
            repo: &pattern.repo,
            package: &pattern.package,
            recursive: pattern.recursive,
            explicit_all: pattern.explicit_all,
            specific_name: &pattern.specific_name,
            kind: pattern.kind().as_str(),
        }
    }
}

/// Summary of a filter run, for JSON output.
#[derive(Debug, Serialize)]
pub struct FilterOutput<'a> {
    pub pattern: String,
    pub scanned: usize,
    pub skipped: usize,
    pub matched: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_pattern_file: Option<&'a str>,
}

/// Write one canonical pattern per line.
pub fn write_patterns_text(
    out: &mut impl Write,
    patterns: &[(&str, Pattern)],
) -> std::io::Result<()> {
    for (_, pattern) in patterns {
        writeln!(out, "{pattern}")?;
    }
    Ok(())
}

/// Write all patterns as a JSON array.
pub fn write_patterns_json(
    out: &mut impl Write,
    patterns: &[(&str, Pattern)],
) -> std::io::Result<()> {
    let items: Vec<PatternOutput<'_>> = patterns
        .iter()
        .map(|(input, pattern)| PatternOutput::new(input, pattern))
        .collect();
    serde_json::to_writer_pretty(&mut *out, &items)?;
    writeln!(out)
}

/// Write one matching label per line.
pub fn write_filter_text(out: &mut impl Write, outcome: &FilterOutcome) -> std::io::Result<()> {
    for label in &outcome.matched {
        writeln!(out, "{label}")?;
    }
    Ok(())
}

/// Write a filter summary as a JSON object.
pub fn write_filter_json(
    out: &mut impl Write,
    pattern: &Pattern,
    outcome: &FilterOutcome,
    target_pattern_file: Option<&str>,
) -> std::io::Result<()> {
    let summary = FilterOutput {
        pattern: pattern.to_string(),
        scanned: outcome.scanned,
        skipped: outcome.skipped,
        matched: outcome.matched.iter().map(ToString::to_string).collect(),
        target_pattern_file,
    };
    serde_json::to_writer_pretty(&mut *out, &summary)?;
    writeln!(out)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
