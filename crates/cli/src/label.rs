// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bazel label decomposition.
//!
//! Splits a label string into repository, package, and target name using the
//! Gazelle grammar:
//!
//! ```text
//! [@repo | @@repo | @]//package[:name]
//! //package            (name defaults to the last package segment)
//! @repo                (shorthand for @repo//:repo)
//! name | :name         (relative to the current package)
//! ```
//!
//! Components are validated character-by-character; no normalization of
//! repository names or package paths takes place.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::package_path::base_name;

/// Repository marker for `@//pkg`, distinct from the main repository `""`.
pub const CURRENT_REPO: &str = "@";

/// Errors raised when a label string is malformed.
///
/// Every variant carries the original input so messages stay actionable when
/// surfaced verbatim to a user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    /// Repository name contains characters outside `[A-Za-z0-9_.~+-]` or
    /// starts with a digit, `_`, `~`, or `+`.
    #[error("label parse error: repository has invalid characters: {input:?}")]
    InvalidRepo { input: String },

    /// Package path contains characters outside `[A-Za-z0-9/._@-]`.
    #[error("label parse error: package has invalid characters: {input:?}")]
    InvalidPackage { input: String },

    /// Label ends in a bare `:`.
    #[error("label parse error: empty name: {input:?}")]
    EmptyName { input: String },

    /// Target name contains whitespace, `\`, or non-ASCII characters.
    #[error("label parse error: name has invalid characters: {input:?}")]
    InvalidName { input: String },

    /// Neither package nor name could be determined.
    #[error("label parse error: empty package and name: {input:?}")]
    EmptyLabel { input: String },
}

impl LabelError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            LabelError::InvalidRepo { input }
            | LabelError::InvalidPackage { input }
            | LabelError::EmptyName { input }
            | LabelError::InvalidName { input }
            | LabelError::EmptyLabel { input } => input,
        }
    }
}

/// A single build target: repository, package, and name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label {
    /// Repository name. Empty for the main repository, `@` for `@//...`.
    pub repo: String,
    /// Slash-separated package path from the repository root.
    pub package: String,
    /// Target name within the package.
    pub name: String,
    /// True when the label had neither a repository nor a `//` root.
    pub relative: bool,
    /// True when the repository was written `@@repo`, naming it canonically
    /// rather than by its apparent name.
    pub canonical: bool,
}

impl Label {
    /// Build an absolute label from its components.
    pub fn new(
        repo: impl Into<String>,
        package: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            repo: repo.into(),
            package: package.into(),
            name: name.into(),
            relative: false,
            canonical: false,
        }
    }

    /// Parse a label string.
    pub fn parse(input: &str) -> Result<Self, LabelError> {
        let mut rest = input;
        let canonical = rest.starts_with("@@");
        if canonical {
            rest = &rest[1..];
        }

        let mut relative = true;
        let mut repo = "";
        let mut shorthand = None;
        if let Some(after_at) = rest.strip_prefix('@') {
            relative = false;
            match after_at.find("//") {
                Some(0) => {
                    repo = CURRENT_REPO;
                    rest = after_at;
                }
                Some(end) => {
                    repo = &after_at[..end];
                    rest = &after_at[end..];
                }
                None => {
                    repo = after_at;
                    shorthand = Some(after_at);
                    rest = "";
                }
            }
            if !is_valid_repo(repo) {
                return Err(LabelError::InvalidRepo {
                    input: input.to_string(),
                });
            }
        }

        let mut package = "";
        if let Some(after_root) = rest.strip_prefix("//") {
            relative = false;
            match after_root.find(':') {
                Some(end) => {
                    package = &after_root[..end];
                    rest = &after_root[end..];
                }
                None => {
                    package = after_root;
                    rest = "";
                }
            }
            if !package.chars().all(is_package_char) {
                return Err(LabelError::InvalidPackage {
                    input: input.to_string(),
                });
            }
        }

        if rest == ":" {
            return Err(LabelError::EmptyName {
                input: input.to_string(),
            });
        }
        let name = shorthand.unwrap_or_else(|| rest.strip_prefix(':').unwrap_or(rest));
        if !name.chars().all(is_name_char) {
            return Err(LabelError::InvalidName {
                input: input.to_string(),
            });
        }

        if package.is_empty() && name.is_empty() {
            return Err(LabelError::EmptyLabel {
                input: input.to_string(),
            });
        }
        let name = if name.is_empty() {
            base_name(package)
        } else {
            name
        };

        Ok(Self {
            repo: repo.to_string(),
            package: package.to_string(),
            name: name.to_string(),
            relative,
            canonical,
        })
    }

    /// Repository prefix as written in label syntax (`@repo`, `@`, or empty).
    pub(crate) fn repo_prefix(repo: &str) -> RepoPrefix<'_> {
        RepoPrefix(repo)
    }
}

/// Renders a repository name with its `@` sigil, leaving `""` and `@` alone.
pub(crate) struct RepoPrefix<'a>(&'a str);

impl fmt::Display for RepoPrefix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() || self.0 == CURRENT_REPO {
            f.write_str(self.0)
        } else {
            write!(f, "@{}", self.0)
        }
    }
}

fn is_valid_repo(repo: &str) -> bool {
    if repo == CURRENT_REPO {
        return true;
    }
    let mut chars = repo.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '.' || first == '-')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '~' | '+' | '-'))
}

fn is_package_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '_' | '@' | '-')
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_graphic() && c != '\\'
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.relative {
            return write!(f, ":{}", self.name);
        }
        let prefix = Label::repo_prefix(&self.repo);
        if self.canonical && !self.repo.is_empty() && self.repo != CURRENT_REPO {
            f.write_str("@")?;
        }
        write!(f, "{prefix}//{}", self.package)?;
        if base_name(&self.package) != self.name {
            write!(f, ":{}", self.name)?;
        }
        Ok(())
    }
}

impl FromStr for Label {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;
