// casekit demonstration driver: runs one of three small suites and maps the
// harness verdict to the process exit code.
// Usage: cargo run --bin demo_suite [pass|fail|todo]

use std::env;
use std::process::ExitCode;

use casekit::{Harness, StdoutSink};
use casekit::{
    assert_eq_bytes, assert_equal, assert_not_equal, assert_not_null, assert_true, case_complete,
    case_not_implemented, test_case, test_eval,
};

/// Small payload used only to exercise assertions.
struct Probe {
    flag: bool,
    data: u64,
    ptr: *const u32,
}

fn all_assertions_pass(h: &mut Harness<StdoutSink>) {
    let word = 42u32;
    let probe = Probe {
        flag: true,
        data: 64,
        ptr: &word,
    };

    test_case!(h, "scalar equality");
    assert_equal!(h, probe.data, 64u64, "unexpected payload data");
    assert_not_equal!(h, probe.data, 0u64);
    assert_true!(h, probe.flag, "flag should start set");
    case_complete!(h);

    test_case!(h, "pointer identity");
    assert_not_null!(h, probe.ptr);
    assert_equal!(h, probe.ptr, &word as *const u32);
    case_complete!(h);

    test_case!(h, "bounded byte comparison");
    assert_eq_bytes!(h, b"abcX", b"abcY", 3, "bytes beyond len must not count");
    case_complete!(h);
}

fn one_assertion_fails(h: &mut Harness<StdoutSink>) {
    test_case!(h, "integer equality");
    assert_equal!(h, 5i64, 6i64, "five is not six");
    case_complete!(h);
}

fn unfinished_case(h: &mut Harness<StdoutSink>) {
    test_case!(h, "future work");
    case_not_implemented!(h);
}

fn main() -> ExitCode {
    let scenario = env::args().nth(1).unwrap_or_else(|| "pass".to_string());
    let mut h = Harness::stdout();

    match scenario.as_str() {
        "pass" => test_eval!(h, all_assertions_pass),
        "fail" => test_eval!(h, one_assertion_fails),
        "todo" => test_eval!(h, unfinished_case),
        other => {
            eprintln!("unknown scenario: {other} (expected pass, fail, or todo)");
            return ExitCode::from(2);
        }
    }

    match h.verdict() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
