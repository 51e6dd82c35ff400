// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bazel target patterns: parsing, matching, and canonical formatting.
//!
//! ```
//! use target_pattern::{Label, Pattern};
//!
//! let pattern = Pattern::parse("//foo/...").unwrap();
//! assert!(pattern.matches(&Label::new("", "foo/bar", "baz")));
//! assert!(!pattern.matches(&Label::new("", "food", "baz")));
//! assert_eq!(Pattern::parse("foo:*").unwrap().to_string(), "//foo:all");
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod filter;
pub mod label;
pub mod output;
pub mod package_path;
pub mod pattern;

pub use cli::{Cli, Command, FilterArgs, MatchArgs, OutputFormat, ParseArgs};
pub use error::{Error, ExitCode, Result};
pub use filter::{FilterOutcome, InvalidLabelPolicy, filter_labels};
pub use label::{Label, LabelError};
pub use pattern::{Pattern, PatternKind};
