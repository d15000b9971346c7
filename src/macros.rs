//! Macro front-end for the harness.
//!
//! The diagnostic contract requires the literal source text of every operand
//! expression, not just its value. These macros capture that text with
//! `stringify!` and forward it to the harness methods, so call sites stay as
//! terse as plain assertions:
//!
//! ```rust
//! use casekit::{Harness, OutputBuffer};
//! use casekit::{assert_equal, case_complete, test_case, test_eval};
//!
//! fn arithmetic(h: &mut Harness<OutputBuffer>) {
//!     test_case!(h, "addition");
//!     assert_equal!(h, 2i64 + 2, 4i64);
//!     case_complete!(h);
//! }
//!
//! let mut h = Harness::new(OutputBuffer::new());
//! test_eval!(h, arithmetic);
//! assert!(h.verdict().is_ok());
//! ```
//!
//! Every assertion macro accepts an optional trailing format string with
//! arguments, rendered into the diagnostic's user message.

/// Runs a test function through the harness, rendering its name and
/// indenting everything inside it one level deeper.
#[macro_export]
macro_rules! test_eval {
    ($h:expr, $func:expr) => {
        $h.run(stringify!($func), $func)
    };
}

/// Opens a case with the given label (supports format arguments).
#[macro_export]
macro_rules! test_case {
    ($h:expr, $label:expr) => {
        $h.open_case($label)
    };
    ($h:expr, $fmt:expr, $($arg:tt)+) => {
        $h.open_case(&format!($fmt, $($arg)+))
    };
}

/// Closes the innermost open case normally.
#[macro_export]
macro_rules! case_complete {
    ($h:expr) => {
        $h.close_case()
    };
}

/// Closes the innermost open case as not implemented.
#[macro_export]
macro_rules! case_not_implemented {
    ($h:expr) => {
        $h.close_case_not_implemented()
    };
}

#[macro_export]
macro_rules! assert_true {
    ($h:expr, $cond:expr) => {
        $h.assert_true($cond, stringify!($cond), "")
    };
    ($h:expr, $cond:expr, $($msg:tt)+) => {
        $h.assert_true($cond, stringify!($cond), &format!($($msg)+))
    };
}

#[macro_export]
macro_rules! assert_false {
    ($h:expr, $cond:expr) => {
        $h.assert_false($cond, stringify!($cond), "")
    };
    ($h:expr, $cond:expr, $($msg:tt)+) => {
        $h.assert_false($cond, stringify!($cond), &format!($($msg)+))
    };
}

#[macro_export]
macro_rules! assert_null {
    ($h:expr, $ptr:expr) => {
        $h.assert_null($ptr, stringify!($ptr), "")
    };
    ($h:expr, $ptr:expr, $($msg:tt)+) => {
        $h.assert_null($ptr, stringify!($ptr), &format!($($msg)+))
    };
}

#[macro_export]
macro_rules! assert_not_null {
    ($h:expr, $ptr:expr) => {
        $h.assert_not_null($ptr, stringify!($ptr), "")
    };
    ($h:expr, $ptr:expr, $($msg:tt)+) => {
        $h.assert_not_null($ptr, stringify!($ptr), &format!($($msg)+))
    };
}

#[macro_export]
macro_rules! assert_equal {
    ($h:expr, $lhs:expr, $rhs:expr) => {
        $h.assert_equal($lhs, $rhs, stringify!($lhs), stringify!($rhs), "")
    };
    ($h:expr, $lhs:expr, $rhs:expr, $($msg:tt)+) => {
        $h.assert_equal($lhs, $rhs, stringify!($lhs), stringify!($rhs), &format!($($msg)+))
    };
}

#[macro_export]
macro_rules! assert_not_equal {
    ($h:expr, $lhs:expr, $rhs:expr) => {
        $h.assert_not_equal($lhs, $rhs, stringify!($lhs), stringify!($rhs), "")
    };
    ($h:expr, $lhs:expr, $rhs:expr, $($msg:tt)+) => {
        $h.assert_not_equal($lhs, $rhs, stringify!($lhs), stringify!($rhs), &format!($($msg)+))
    };
}

/// Length-bounded byte-sequence equality: only indices `0..len-1` are
/// inspected.
#[macro_export]
macro_rules! assert_eq_bytes {
    ($h:expr, $lhs:expr, $rhs:expr, $len:expr) => {
        $h.assert_eq_bytes($lhs, $rhs, $len, stringify!($lhs), stringify!($rhs), "")
    };
    ($h:expr, $lhs:expr, $rhs:expr, $len:expr, $($msg:tt)+) => {
        $h.assert_eq_bytes($lhs, $rhs, $len, stringify!($lhs), stringify!($rhs), &format!($($msg)+))
    };
}

#[macro_export]
macro_rules! assert_ne_bytes {
    ($h:expr, $lhs:expr, $rhs:expr, $len:expr) => {
        $h.assert_ne_bytes($lhs, $rhs, $len, stringify!($lhs), stringify!($rhs), "")
    };
    ($h:expr, $lhs:expr, $rhs:expr, $len:expr, $($msg:tt)+) => {
        $h.assert_ne_bytes($lhs, $rhs, $len, stringify!($lhs), stringify!($rhs), &format!($($msg)+))
    };
}

/// Debug-tier line at the current depth. The branch folds away at compile
/// time when the `debug-log` feature is off, so the message is never even
/// formatted in those builds.
#[macro_export]
macro_rules! log_debug {
    ($h:expr, $($arg:tt)+) => {
        if $crate::report::DEBUG_ENABLED {
            $h.debug(&format!($($arg)+));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($h:expr, $($arg:tt)+) => {
        $h.info(&format!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($h:expr, $($arg:tt)+) => {
        $h.warn(&format!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_error {
    ($h:expr, $($arg:tt)+) => {
        $h.error(&format!($($arg)+))
    };
}
