//! casekit: a minimal, embeddable unit-test harness.
//!
//! Callers organize test functions into nested, labeled cases, evaluate
//! assertions inside those cases, and read one aggregate verdict at the end
//! of the run. The harness is the entire runtime: no external test-runner
//! dependency, no discovery, no scheduler.
//!
//! # Architecture
//!
//! Data flows one direction through four components sharing one
//! [`RunState`]:
//!
//! 1. **Test invocation** ([`Harness::run`]) wraps a test function with a
//!    name announcement and a depth level.
//! 2. **Case control** ([`Harness::open_case`] and the three close
//!    variants) brackets groups of assertions and resolves each case to
//!    passed, failed, or not-implemented.
//! 3. **Assertions** (the `assert_*` methods and macros) evaluate
//!    predicates and equality checks; each failure marks the open case and
//!    renders one diagnostic line.
//! 4. **Reporting** ([`Reporter`] over an [`OutputSink`]) renders indented,
//!    severity-tagged, optionally colored lines in strict call order.
//!
//! # Example
//!
//! ```rust
//! use casekit::{Harness, OutputBuffer};
//! use casekit::{assert_true, case_complete, test_case, test_eval};
//!
//! fn my_test(h: &mut Harness<OutputBuffer>) {
//!     test_case!(h, "truths hold");
//!     assert_true!(h, 1 + 1 == 2, "arithmetic is broken");
//!     case_complete!(h);
//! }
//!
//! let mut h = Harness::new(OutputBuffer::new());
//! test_eval!(h, my_test);
//! assert!(h.verdict().is_ok());
//! ```
//!
//! A run is strictly single-threaded: one [`Harness`] instance drives the
//! whole run, and a failure in one test function is visible to the verdict
//! seen after all of them. Drivers usually map [`Harness::verdict`] to a
//! process exit code (see `src/bin/demo_suite.rs`).

pub mod assert;
pub mod harness;
pub mod macros;
pub mod output;
pub mod report;
pub mod state;

pub use assert::AssertValue;
pub use harness::{CaseOutcome, Harness, SuiteFailed};
pub use output::{OutputBuffer, OutputSink, StdoutSink, Styled};
pub use report::{ReportConfig, Reporter, Severity};
pub use state::RunState;
