// State-machine behavior of the harness: suite/case flags, nesting depth,
// and the three case-close transitions.

use casekit::{CaseOutcome, Harness, OutputBuffer, ReportConfig};

fn plain() -> Harness<OutputBuffer> {
    Harness::with_config(OutputBuffer::new(), ReportConfig::plain())
}

fn error_lines(h: &Harness<OutputBuffer>) -> usize {
    h.sink()
        .lines()
        .filter(|l| l.trim_start().starts_with("ERROR:"))
        .count()
}

#[test]
fn empty_cases_never_flip_suite_status() {
    let mut h = plain();
    h.open_case("outer");
    h.open_case("inner");
    assert_eq!(h.close_case(), CaseOutcome::Passed);
    assert_eq!(h.close_case(), CaseOutcome::Passed);
    assert!(!h.suite_failed());
    assert!(h.verdict().is_ok());
}

#[test]
fn single_failing_assertion_fails_case_and_suite() {
    let mut h = plain();
    h.open_case("arithmetic");
    h.assert_equal(5i64, 6i64, "5", "6", "");
    assert_eq!(h.close_case(), CaseOutcome::Failed);
    assert!(h.suite_failed());
    assert!(h.verdict().is_err());
    assert_eq!(error_lines(&h), 1);
}

#[test]
fn sibling_cases_do_not_leak_failures() {
    let mut h = plain();
    h.open_case("first");
    h.assert_true(false, "false", "");
    assert_eq!(h.close_case(), CaseOutcome::Failed);

    // The next open resets the case flag; this case passes on its own.
    h.open_case("second");
    assert_eq!(h.close_case(), CaseOutcome::Passed);

    // The suite flag is sticky from the first case.
    assert!(h.suite_failed());
}

#[test]
fn failed_case_suppresses_pass_line() {
    let mut h = plain();
    h.open_case("broken");
    h.assert_true(false, "false", "");
    h.close_case();
    assert!(!h.sink().as_str().contains(":: passed"));
}

#[test]
fn not_implemented_close_forfeits_recorded_failures() {
    // A failing assertion is recorded, but the not-implemented close does
    // not consult the case flag, so the suite verdict stays clean.
    let mut h = plain();
    h.open_case("unfinished");
    h.assert_equal(1i64, 2i64, "1", "2", "");
    assert_eq!(h.close_case_not_implemented(), CaseOutcome::NotImplemented);
    assert!(!h.suite_failed());
    assert!(h.verdict().is_ok());
    assert!(h.sink().as_str().contains("WARN: NOT IMPLEMENTED"));
}

#[test]
fn not_implemented_close_renders_no_pass_or_fail_marker() {
    let mut h = plain();
    h.open_case("future work");
    h.close_case_not_implemented();
    let out = h.into_sink();
    assert!(out.as_str().contains("NOT IMPLEMENTED"));
    assert!(!out.as_str().contains(":: passed"));
}

#[test]
fn depth_is_balanced_after_nested_cases() {
    let mut h = plain();
    assert_eq!(h.depth(), 0);
    h.open_case("outer");
    h.open_case("inner");
    assert_eq!(h.depth(), 2);
    h.close_case();
    h.close_case();
    assert_eq!(h.depth(), 0);
}

#[test]
fn depth_is_balanced_after_test_invocation() {
    let mut h = plain();
    h.run("wrapped", |h| {
        h.open_case("only");
        h.close_case();
        assert_eq!(h.depth(), 1);
    });
    assert_eq!(h.depth(), 0);
}

#[test]
fn unbalanced_close_clamps_depth_and_warns() {
    let mut h = plain();
    h.open_case("only");
    h.close_case();
    h.close_case();
    assert_eq!(h.depth(), 0);
    assert!(h.sink().as_str().contains("unbalanced close"));
}

#[test]
fn test_functions_share_suite_state() {
    let mut h = plain();
    h.run("failing", |h| {
        h.open_case("bad");
        h.assert_true(false, "false", "");
        h.close_case();
    });
    h.run("clean", |h| {
        h.open_case("good");
        h.close_case();
    });
    // No isolation: the first function's failure decides the verdict.
    assert!(h.suite_failed());
}

#[test]
fn transcript_is_rendered_in_call_order_with_indentation() {
    let mut h = plain();
    h.run("sample", |h| {
        h.open_case("alpha");
        h.assert_equal(1i64, 2i64, "one", "two", "");
        h.close_case();
        h.open_case("beta");
        h.close_case();
    });

    let expected = "\
sample():
  case: alpha
    ERROR: ASSERT_EQUAL: one != two [1 != 2]
  case: beta
    :: passed
";
    assert_eq!(h.sink().as_str(), expected);
}
