// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Segment-aware helpers over slash-delimited package paths.
//!
//! Package paths are compared purely lexically: `foo/bar` lies beneath `foo`,
//! while `food` does not. Nothing here touches the filesystem or allocates.

/// Check whether `child` lies strictly beneath `parent`.
///
/// The empty parent is the root package and contains every non-empty package.
/// A package is not its own descendant.
pub fn is_descendant(child: &str, parent: &str) -> bool {
    if parent.is_empty() {
        return !child.is_empty();
    }
    child
        .strip_prefix(parent)
        .is_some_and(|rest| rest.len() > 1 && rest.starts_with('/'))
}

/// Final path segment of a package, ignoring trailing slashes.
///
/// Mirrors `path.Base`: the empty package yields `"."` and a package made only
/// of slashes yields `"/"`, so neither ever equals a real target name.
pub fn base_name(package: &str) -> &str {
    if package.is_empty() {
        return ".";
    }
    let trimmed = package.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

#[cfg(test)]
#[path = "package_path_tests.rs"]
mod tests;
