use std::fs;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use super::golden::{fixtures, unordered_diff, verify_dir, FixtureOutcome, DIFF_FILE};
use crate::lexer::lexer::Lexer;

#[test]
fn test_unordered_diff_ignores_order() {
    let diff = unordered_diff("a\nb\n", "b\na\n");

    assert!(diff.is_empty());
}

#[test]
fn test_unordered_diff_ignores_duplicates() {
    let diff = unordered_diff("a\na\nb\n", "a\nb\n");

    assert!(diff.is_empty());
}

#[test]
fn test_unordered_diff_reports_both_sides() {
    let diff = unordered_diff("a\nb\n", "a\nc\n");

    assert_eq!(
        diff.into_iter().collect::<Vec<_>>(),
        vec!["b\n".to_string(), "c\n".to_string()]
    );
}

#[test]
fn test_unordered_diff_keeps_line_terminators() {
    let diff = unordered_diff("a\n", "a");

    assert_eq!(diff.len(), 2);
}

#[test]
fn test_fixtures_are_sorted_and_filtered() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.frag"), "").unwrap();
    fs::write(dir.path().join("a.frag"), "").unwrap();
    fs::write(dir.path().join("a.out"), "").unwrap();
    fs::write(dir.path().join("notes.txt"), "").unwrap();

    let found = fixtures(dir.path()).unwrap();
    let names: Vec<_> = found
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.frag", "b.frag"]);
}

#[test]
fn test_verify_dir_outcomes() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let output_dir = output.path().join("nested");

    fs::write(input.path().join("good.frag"), "int x;").unwrap();
    fs::write(
        input.path().join("good.out"),
        ";            line 1 cols 6-6 is ';'\n\
         int          line 1 cols 1-3 is T_Int\n\
         x            line 1 cols 5-5 is T_Identifier\n",
    )
    .unwrap();
    fs::write(input.path().join("bad.frag"), "y").unwrap();
    fs::write(input.path().join("bad.out"), "z            line 1 cols 1-1 is T_Identifier\n").unwrap();
    fs::write(input.path().join("lonely.frag"), "1").unwrap();

    let reports = verify_dir(&Lexer::new(), input.path(), &output_dir).unwrap();
    let names: Vec<_> = reports.iter().map(|report| report.name.as_str()).collect();
    assert_eq!(names, vec!["bad.frag", "good.frag", "lonely.frag"]);

    match &reports[0].outcome {
        FixtureOutcome::Mismatch(diff) => assert_eq!(diff.len(), 2),
        other => panic!("expected mismatch, got {other:?}"),
    }
    assert!(reports[0].failed());
    assert!(reports[1].passed());
    assert!(matches!(reports[2].outcome, FixtureOutcome::MissingExpected));
    assert!(!reports[2].failed());

    assert_eq!(
        fs::read_to_string(output_dir.join("lonely.tmp")).unwrap(),
        "1            line 1 cols 1-1 is T_IntConstant (value = 1)\n"
    );
    assert_eq!(
        fs::read_to_string(output_dir.join(DIFF_FILE)).unwrap(),
        "Diff Results:\n\
         \nDifferences for bad.frag:\n\
         y            line 1 cols 1-1 is T_Identifier\n\
         z            line 1 cols 1-1 is T_Identifier\n"
    );
}

#[test]
fn test_report_summaries() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(input.path().join("only.frag"), "x").unwrap();

    let reports = verify_dir(&Lexer::new(), input.path(), output.path()).unwrap();
    assert_eq!(
        reports[0].summary(),
        "No expected output file found for only.frag."
    );
}

#[test]
fn test_missing_input_dir_is_an_error() {
    let output = tempdir().unwrap();
    let missing = output.path().join("does-not-exist");

    assert!(verify_dir(&Lexer::new(), &missing, output.path()).is_err());
}
