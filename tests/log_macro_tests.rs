// Coverage for the exported logging macros: tag rendering, format
// arguments, indentation at the current depth, and compile-time suppression
// of the debug tier.

use casekit::report::DEBUG_ENABLED;
use casekit::{case_complete, log_debug, log_error, log_info, log_warn, test_case};
use casekit::{Harness, OutputBuffer, ReportConfig};

fn plain() -> Harness<OutputBuffer> {
    Harness::with_config(OutputBuffer::new(), ReportConfig::plain())
}

#[test]
fn each_tier_renders_its_tag_with_format_arguments() {
    let mut h = plain();
    log_info!(h, "starting run {}", 7);
    log_warn!(h, "low on {}", "memory");
    log_error!(h, "giving up");
    let out = h.into_sink();
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(
        lines,
        vec!["INFO: starting run 7", "WARN: low on memory", "ERROR: giving up"]
    );
}

#[test]
fn log_lines_indent_at_the_current_depth() {
    let mut h = plain();
    test_case!(h, "noisy");
    log_info!(h, "inside the case");
    case_complete!(h);
    assert!(h.sink().as_str().contains("\n  INFO: inside the case\n"));
}

#[test]
fn debug_tier_follows_the_build_configuration() {
    let mut h = plain();
    log_debug!(h, "trace {}", 1);
    let out = h.into_sink();
    if DEBUG_ENABLED {
        assert_eq!(out.as_str(), "DEBUG: trace 1\n");
    } else {
        assert!(out.as_str().is_empty());
    }
}

#[test]
fn log_lines_never_touch_case_or_suite_flags() {
    let mut h = plain();
    test_case!(h, "quiet flags");
    log_error!(h, "looks alarming but is not an assertion");
    case_complete!(h);
    assert!(!h.suite_failed());
    assert!(h.sink().as_str().contains(":: passed"));
}
