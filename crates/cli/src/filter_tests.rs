// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

const LABELS: &str = "\
# affected targets
//foo:lib
//foo/bar:test

//food:bin
@beep//foo:lib
   //foo/baz   
";

fn lines(text: &str) -> Vec<(usize, String)> {
    read_label_lines(text.as_bytes()).unwrap()
}

fn names(outcome: &FilterOutcome) -> Vec<String> {
    outcome.matched.iter().map(ToString::to_string).collect()
}

#[test]
fn reads_lines_skipping_blanks_and_comments() {
    let lines = lines(LABELS);
    assert_eq!(
        lines,
        vec![
            (2, "//foo:lib".to_string()),
            (3, "//foo/bar:test".to_string()),
            (5, "//food:bin".to_string()),
            (6, "@beep//foo:lib".to_string()),
            (7, "//foo/baz".to_string()),
        ]
    );
}

#[test]
fn recursive_pattern_keeps_order() {
    let pattern = Pattern::parse("//foo/...").unwrap();
    let outcome = filter_labels(&pattern, &lines(LABELS), InvalidLabelPolicy::Skip).unwrap();
    assert_eq!(names(&outcome), vec!["//foo:lib", "//foo/bar:test", "//foo/baz"]);
    assert_eq!(outcome.scanned, 5);
    assert_eq!(outcome.skipped, 0);
}

#[test]
fn explicit_all_stays_in_package() {
    let pattern = Pattern::parse("//foo:*").unwrap();
    let outcome = filter_labels(&pattern, &lines(LABELS), InvalidLabelPolicy::Skip).unwrap();
    assert_eq!(names(&outcome), vec!["//foo:lib"]);
}

#[test]
fn repo_scoped_pattern() {
    let pattern = Pattern::parse("@beep//...").unwrap();
    let outcome = filter_labels(&pattern, &lines(LABELS), InvalidLabelPolicy::Skip).unwrap();
    assert_eq!(names(&outcome), vec!["@beep//foo:lib"]);
}

#[test]
fn skip_policy_counts_invalid_lines() {
    let pattern = Pattern::parse("//...").unwrap();
    let input = lines("//foo:lib\n//foo:\n//bar\n");
    let outcome = filter_labels(&pattern, &input, InvalidLabelPolicy::Skip).unwrap();
    assert_eq!(names(&outcome), vec!["//foo:lib", "//bar"]);
    assert_eq!(outcome.scanned, 2);
    assert_eq!(outcome.skipped, 1);
}

#[test]
fn fail_policy_reports_line_number() {
    let pattern = Pattern::parse("//...").unwrap();
    let input = lines("//foo:lib\n\n//foo:\n");
    let err = filter_labels(&pattern, &input, InvalidLabelPolicy::Fail).unwrap_err();
    assert!(matches!(err, Error::Label { line: 3, .. }));
}

#[test]
fn empty_input_matches_nothing() {
    let pattern = Pattern::parse("//...").unwrap();
    let outcome = filter_labels(&pattern, &[], InvalidLabelPolicy::Skip).unwrap();
    assert_eq!(outcome, FilterOutcome::default());
}

#[test]
fn target_pattern_file_has_one_label_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("targets.txt");
    let labels = vec![
        Label::new("", "foo", "foo"),
        Label::new("", "foo/bar", "test"),
        Label::new("beep", "", "lib"),
    ];
    write_target_pattern_file(&path, &labels).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "//foo\n//foo/bar:test\n@beep//:lib\n");
}

#[test]
fn target_pattern_file_in_missing_dir_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("targets.txt");
    let err = write_target_pattern_file(&path, &[]).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn canonical_repo_labels_keep_double_at_in_target_pattern_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("targets.txt");
    let pattern = Pattern::parse("@rules_go~0.41.0//...").unwrap();
    let input = lines("@@rules_go~0.41.0//go/tools:builder\n//foo:lib\n");

    let outcome = filter_labels(&pattern, &input, InvalidLabelPolicy::Skip).unwrap();
    write_target_pattern_file(&path, &outcome.matched).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "@@rules_go~0.41.0//go/tools:builder\n");
}

#[test]
fn relative_labels_are_written_rooted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("targets.txt");
    let pattern = Pattern::parse("//:all").unwrap();
    let input = lines("foo\n:bar\n//baz:qux\n");

    let outcome = filter_labels(&pattern, &input, InvalidLabelPolicy::Skip).unwrap();
    assert_eq!(names(&outcome), vec!["//:foo", "//:bar"]);
    assert!(outcome.matched.iter().all(|label| !label.relative));

    write_target_pattern_file(&path, &outcome.matched).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "//:foo\n//:bar\n");
}
