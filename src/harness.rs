//! The harness itself: test invocation, case control, and the run verdict.
//!
//! A [`Harness`] owns the run's [`RunState`], a [`Reporter`], and an output
//! sink, and drives them in strict call order. Cases open and close by
//! explicit calls (stack discipline is the caller's obligation, usually via
//! the macros in this crate); test functions are wrapped by [`Harness::run`]
//! so their cases render one level deeper than the function name.
//!
//! Execution is strictly single-threaded: one harness drives one run, and
//! there is no isolation between test functions, so the suite flag set by
//! one is visible to every later one.

use termcolor::Color;
use thiserror::Error;

use crate::output::{OutputSink, StdoutSink};
use crate::report::{ReportConfig, Reporter, Severity};
use crate::state::RunState;

/// Terminal state of a case, reached via exactly one close call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    Failed,
    /// Closed via [`Harness::close_case_not_implemented`]; excluded from the
    /// pass/fail tally entirely.
    NotImplemented,
}

/// Returned by [`Harness::verdict`] when at least one case failed, so a
/// driver can `?` it from `main` and exit nonzero.
#[derive(Debug, Error)]
#[error("at least one test case failed")]
pub struct SuiteFailed;

/// A single test run: shared state, reporting, and an output sink.
pub struct Harness<S: OutputSink> {
    pub(crate) state: RunState,
    pub(crate) reporter: Reporter,
    pub(crate) sink: S,
}

impl Harness<StdoutSink> {
    /// Console harness with colors decided by terminal detection.
    pub fn stdout() -> Self {
        Self::new(StdoutSink::auto())
    }
}

impl<S: OutputSink> Harness<S> {
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, ReportConfig::default())
    }

    pub fn with_config(sink: S, config: ReportConfig) -> Self {
        Self {
            state: RunState::new(),
            reporter: Reporter::new(config),
            sink,
        }
    }

    // ------------------------------------------------------------------
    // Test invocation
    // ------------------------------------------------------------------

    /// Runs one test function: renders `name():`, brackets the call with a
    /// depth level, and shares this harness with the function body.
    pub fn run(&mut self, name: &str, f: impl FnOnce(&mut Self)) {
        self.reporter.line(
            &mut self.sink,
            self.state.depth(),
            Color::Magenta,
            &format!("{name}():"),
        );
        self.state.inc_depth();
        f(self);
        self.close_level();
    }

    // ------------------------------------------------------------------
    // Case control
    // ------------------------------------------------------------------

    /// Opens a case: clears the case flag, renders the label, and indents
    /// everything until the matching close one level deeper.
    pub fn open_case(&mut self, label: &str) {
        self.state.reset_case();
        self.reporter.labeled(
            &mut self.sink,
            self.state.depth(),
            Color::Blue,
            "case: ",
            label,
        );
        self.state.inc_depth();
    }

    /// Closes the innermost open case. A failed case marks the suite failed
    /// and renders nothing further (its assertions already rendered their
    /// diagnostics); a clean case renders a pass marker.
    pub fn close_case(&mut self) -> CaseOutcome {
        let outcome = if self.state.case_failed() {
            self.state.mark_suite_failed();
            CaseOutcome::Failed
        } else {
            self.reporter
                .line(&mut self.sink, self.state.depth(), Color::Green, ":: passed");
            CaseOutcome::Passed
        };
        self.close_level();
        outcome
    }

    /// Closes the innermost open case as not implemented: renders a warning
    /// and touches neither the case nor the suite flag. Assertions already
    /// recorded in the case are forfeited and never reach the suite flag.
    pub fn close_case_not_implemented(&mut self) -> CaseOutcome {
        self.reporter.log(
            &mut self.sink,
            self.state.depth(),
            Severity::Warn,
            "NOT IMPLEMENTED",
        );
        self.close_level();
        CaseOutcome::NotImplemented
    }

    pub(crate) fn close_level(&mut self) {
        // Depth clamps at zero; an extra close is a caller bug worth a line.
        if !self.state.dec_depth() {
            self.reporter.log(
                &mut self.sink,
                0,
                Severity::Warn,
                "unbalanced close: nesting depth was already zero",
            );
        }
    }

    // ------------------------------------------------------------------
    // User-facing log lines at the current depth
    // ------------------------------------------------------------------

    pub fn debug(&mut self, msg: &str) {
        self.reporter
            .log(&mut self.sink, self.state.depth(), Severity::Debug, msg);
    }

    pub fn info(&mut self, msg: &str) {
        self.reporter
            .log(&mut self.sink, self.state.depth(), Severity::Info, msg);
    }

    pub fn warn(&mut self, msg: &str) {
        self.reporter
            .log(&mut self.sink, self.state.depth(), Severity::Warn, msg);
    }

    pub fn error(&mut self, msg: &str) {
        self.reporter
            .log(&mut self.sink, self.state.depth(), Severity::Error, msg);
    }

    // ------------------------------------------------------------------
    // Verdict
    // ------------------------------------------------------------------

    /// True once any case has closed in a failed state.
    pub fn suite_failed(&self) -> bool {
        self.state.suite_failed()
    }

    /// The aggregate verdict, read once at the end of a run.
    pub fn verdict(&self) -> Result<(), SuiteFailed> {
        if self.state.suite_failed() {
            Err(SuiteFailed)
        } else {
            Ok(())
        }
    }

    /// Current nesting depth; returns to its pre-call value after any
    /// balanced sequence of opens and closes.
    pub fn depth(&self) -> u16 {
        self.state.depth()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
