//! Run-wide bookkeeping shared by every component of the harness.
//!
//! One [`RunState`] exists per run, owned by the harness and threaded through
//! every case and assertion. It tracks three things: whether the suite as a
//! whole has failed, whether the currently open case has failed, and the
//! current nesting depth (used only for output indentation).

/// Mutable bookkeeping for a single run.
///
/// The suite flag is sticky: once set it is never cleared for the remainder
/// of the run. The case flag is reset each time a case opens. Depth is a
/// plain counter; balance is the caller's obligation.
#[derive(Debug, Default)]
pub struct RunState {
    suite_failed: bool,
    case_failed: bool,
    depth: u16,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once any case has closed in a failed state.
    pub fn suite_failed(&self) -> bool {
        self.suite_failed
    }

    pub fn mark_suite_failed(&mut self) {
        self.suite_failed = true;
    }

    /// True if a failing assertion has run since the current case opened.
    pub fn case_failed(&self) -> bool {
        self.case_failed
    }

    pub fn mark_case_failed(&mut self) {
        self.case_failed = true;
    }

    /// Clears the case flag; called when a case opens so outcomes never leak
    /// between sibling cases.
    pub fn reset_case(&mut self) {
        self.case_failed = false;
    }

    pub fn depth(&self) -> u16 {
        self.depth
    }

    pub fn inc_depth(&mut self) {
        self.depth += 1;
    }

    /// Decrements the nesting depth. Returns `false` if depth was already
    /// zero, in which case it clamps rather than wrapping; the harness
    /// reports the unbalanced close (see `Harness::close_level`).
    pub fn dec_depth(&mut self) -> bool {
        if self.depth == 0 {
            return false;
        }
        self.depth -= 1;
        true
    }
}
