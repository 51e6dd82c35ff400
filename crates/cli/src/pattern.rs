// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bazel target patterns.
//!
//! A [`Pattern`] selects labels lexically by repository, package, and name:
//!
//! | Input              | Selects                                   |
//! |--------------------|-------------------------------------------|
//! | `//foo:bar`        | the single target `//foo:bar`             |
//! | `//foo`            | the default target `//foo:foo`            |
//! | `//foo:all`        | every target in package `foo`             |
//! | `//foo/...`        | every target in `foo` and packages below  |
//! | `@repo//foo/...`   | the same, scoped to repository `repo`     |
//!
//! `:*` and `:all-targets` are accepted as spellings of `:all`. Patterns that
//! start with neither `//` nor `@` are rooted at the repository root, so `foo`
//! means `//foo` rather than a package-relative path.
//!
//! Matching never consults the build graph; it compares strings only.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::label::{Label, LabelError};
use crate::package_path::{base_name, is_descendant};

const ELLIPSIS: &str = "...";
const ALL: &str = "all";

/// A parsed target pattern.
///
/// The flags are independent: callers may construct combinations the parser
/// never produces, and [`Pattern::matches`] gives each combination a defined
/// meaning. The [`Default`] value is the "no pattern" sentinel; it only
/// matches a root-package label with an empty name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    /// Repository the pattern is scoped to. Empty for the main repository.
    pub repo: String,
    /// Package the pattern is anchored on. Empty for the root package.
    pub package: String,
    /// The pattern ended in `...` and also covers packages beneath `package`.
    pub recursive: bool,
    /// The pattern used `:all` (or `:*`, `:all-targets`).
    pub explicit_all: bool,
    /// Exact target name. Empty means the package's default target.
    pub specific_name: String,
}

/// Read-only view of what a [`Pattern`] effectively selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind<'a> {
    /// Every target in the anchor package and all packages beneath it.
    Recursive,
    /// Every target in exactly the anchor package.
    AllInPackage,
    /// One named target in the anchor package.
    Target(&'a str),
    /// A target with an empty name in the anchor package.
    DefaultTarget,
}

impl PatternKind<'_> {
    /// Short identifier used in machine-readable output.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Recursive => "recursive",
            PatternKind::AllInPackage => "all-in-package",
            PatternKind::Target(_) => "target",
            PatternKind::DefaultTarget => "default-target",
        }
    }
}

impl Pattern {
    /// Parse a target pattern.
    ///
    /// Fails with the label parser's error, unchanged, when the normalized
    /// input is not a valid label.
    pub fn parse(input: &str) -> Result<Self, LabelError> {
        let normalized = normalize(input);
        let label = Label::parse(&normalized)?;
        tracing::trace!(input, normalized = %normalized, ?label, "decomposed pattern");

        let Label {
            repo,
            mut package,
            mut name,
            ..
        } = label;

        let mut recursive = false;
        if package.ends_with(ELLIPSIS) {
            recursive = true;
            if name == ELLIPSIS {
                name.clear();
            }
            if package == ELLIPSIS {
                package.clear();
            } else {
                // Drops `/...`; package characters are ASCII.
                package.truncate(package.len() - 4);
            }
        }

        let (explicit_all, specific_name) = if name == ALL {
            (true, String::new())
        } else {
            (false, name)
        };

        Ok(Self {
            repo,
            package,
            recursive,
            explicit_all,
            specific_name,
        })
    }

    /// Check whether `label` is selected by this pattern.
    ///
    /// Repositories must match exactly. At the anchor package, a recursive
    /// pattern accepts every name even when `specific_name` is set.
    pub fn matches(&self, label: &Label) -> bool {
        if self.repo != label.repo {
            return false;
        }
        if self.package == label.package {
            return self.explicit_all || self.specific_name == label.name || self.recursive;
        }
        self.recursive && is_descendant(&label.package, &self.package)
    }

    /// What this pattern effectively selects.
    pub fn kind(&self) -> PatternKind<'_> {
        if self.recursive {
            PatternKind::Recursive
        } else if self.explicit_all {
            PatternKind::AllInPackage
        } else if self.specific_name.is_empty() {
            PatternKind::DefaultTarget
        } else {
            PatternKind::Target(&self.specific_name)
        }
    }
}

/// Root bare patterns and fold `:*` / `:all-targets` into `:all`.
fn normalize(input: &str) -> String {
    let mut normalized = if input.starts_with("//") || input.starts_with('@') {
        input.to_string()
    } else {
        format!("//{input}")
    };
    if normalized.ends_with(":*") {
        normalized.pop();
        normalized.push_str(ALL);
    } else if normalized.ends_with(":all-targets") {
        normalized.truncate(normalized.len() - "-targets".len());
    }
    normalized
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}//", Label::repo_prefix(&self.repo))?;
        match (self.recursive, self.package.is_empty()) {
            (true, true) => f.write_str(ELLIPSIS)?,
            (true, false) => write!(f, "{}/{ELLIPSIS}", self.package)?,
            (false, _) => f.write_str(&self.package)?,
        }
        if self.explicit_all {
            write!(f, ":{ALL}")?;
        } else if !self.specific_name.is_empty() && self.specific_name != base_name(&self.package)
        {
            write!(f, ":{}", self.specific_name)?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = LabelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
