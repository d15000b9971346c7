//! The assertion engine.
//!
//! Two families, mirroring the invocation API:
//!
//! - **Boolean**: `assert_true` / `assert_false` over an already-evaluated
//!   predicate, plus `assert_null` / `assert_not_null` over raw pointers.
//! - **Equality**: `assert_equal` / `assert_not_equal`, generic over any
//!   [`AssertValue`] (integers, characters, raw pointers), plus the
//!   length-bounded byte-sequence pair `assert_eq_bytes` / `assert_ne_bytes`.
//!
//! A failing assertion marks the current case failed and renders exactly one
//! error-tier diagnostic line carrying the operand source text (captured by
//! the caller, normally via the `stringify!`-based macros in this crate) and
//! the formatted operand values. Passing assertions render nothing, and no
//! assertion ever stops the run.

use std::fmt::Write as _;

use crate::harness::Harness;
use crate::output::OutputSink;
use crate::report::Severity;

/// A value the equality family can compare and format.
///
/// Implementations decide both the comparison (`same`) and how the operand
/// appears in a diagnostic (`render`); the generic engine never needs a
/// per-type copy of the assertion logic. Raw pointers compare by identity
/// and render as addresses.
pub trait AssertValue {
    fn same(&self, other: &Self) -> bool;
    fn render(&self) -> String;
}

macro_rules! impl_assert_value_for_ints {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl AssertValue for $ty {
                fn same(&self, other: &Self) -> bool {
                    self == other
                }
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

impl_assert_value_for_ints!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl AssertValue for char {
    fn same(&self, other: &Self) -> bool {
        self == other
    }
    fn render(&self) -> String {
        format!("{self:?}")
    }
}

impl<T> AssertValue for *const T {
    fn same(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
    fn render(&self) -> String {
        format!("{self:p}")
    }
}

impl<T> AssertValue for *mut T {
    fn same(&self, other: &Self) -> bool {
        std::ptr::eq(*self, *other)
    }
    fn render(&self) -> String {
        format!("{self:p}")
    }
}

/// One failed assertion, rendered immediately and discarded.
struct Diagnostic<'a> {
    kind: &'static str,
    body: String,
    message: &'a str,
}

impl Diagnostic<'_> {
    fn render(&self) -> String {
        let mut line = format!("{}: {}", self.kind, self.body);
        if !self.message.is_empty() {
            let _ = write!(line, " :: {}", self.message);
        }
        line
    }
}

/// Element-wise comparison of the two `len`-bounded prefixes. Bytes at or
/// beyond `len` never participate; neither sequence's own length is used
/// except to truncate the prefix.
fn bytes_equal(lhs: &[u8], rhs: &[u8], len: usize) -> bool {
    lhs.iter().take(len).eq(rhs.iter().take(len))
}

impl<S: OutputSink> Harness<S> {
    fn fail_assertion(&mut self, diag: Diagnostic<'_>) {
        self.state.mark_case_failed();
        self.reporter.log(
            &mut self.sink,
            self.state.depth(),
            Severity::Error,
            &diag.render(),
        );
    }

    // ------------------------------------------------------------------
    // Boolean family
    // ------------------------------------------------------------------

    /// Fails the case unless `cond` is true. `expr` is the condition's
    /// source text, shown in the diagnostic.
    pub fn assert_true(&mut self, cond: bool, expr: &str, message: &str) {
        if !cond {
            self.fail_assertion(Diagnostic {
                kind: "ASSERT_TRUE",
                body: format!("[{expr}]"),
                message,
            });
        }
    }

    /// Fails the case unless `cond` is false.
    pub fn assert_false(&mut self, cond: bool, expr: &str, message: &str) {
        if cond {
            self.fail_assertion(Diagnostic {
                kind: "ASSERT_FALSE",
                body: format!("[{expr}]"),
                message,
            });
        }
    }

    /// Fails the case unless `ptr` is null.
    pub fn assert_null<T>(&mut self, ptr: *const T, expr: &str, message: &str) {
        if !ptr.is_null() {
            self.fail_assertion(Diagnostic {
                kind: "ASSERT_NULL",
                body: format!("[{expr}]"),
                message,
            });
        }
    }

    /// Fails the case if `ptr` is null.
    pub fn assert_not_null<T>(&mut self, ptr: *const T, expr: &str, message: &str) {
        if ptr.is_null() {
            self.fail_assertion(Diagnostic {
                kind: "ASSERT_NOT_NULL",
                body: format!("[{expr}]"),
                message,
            });
        }
    }

    // ------------------------------------------------------------------
    // Equality family
    // ------------------------------------------------------------------

    /// Fails the case unless `lhs` and `rhs` compare equal. The diagnostic
    /// shows the observed relation: `lhs_expr != rhs_expr [<lhs> != <rhs>]`.
    pub fn assert_equal<V: AssertValue>(
        &mut self,
        lhs: V,
        rhs: V,
        lhs_expr: &str,
        rhs_expr: &str,
        message: &str,
    ) {
        if !lhs.same(&rhs) {
            let body = format!(
                "{lhs_expr} != {rhs_expr} [{} != {}]",
                lhs.render(),
                rhs.render()
            );
            self.fail_assertion(Diagnostic {
                kind: "ASSERT_EQUAL",
                body,
                message,
            });
        }
    }

    /// Fails the case if `lhs` and `rhs` compare equal.
    pub fn assert_not_equal<V: AssertValue>(
        &mut self,
        lhs: V,
        rhs: V,
        lhs_expr: &str,
        rhs_expr: &str,
        message: &str,
    ) {
        if lhs.same(&rhs) {
            let body = format!(
                "{lhs_expr} == {rhs_expr} [{} == {}]",
                lhs.render(),
                rhs.render()
            );
            self.fail_assertion(Diagnostic {
                kind: "ASSERT_NOT_EQUAL",
                body,
                message,
            });
        }
    }

    /// Fails the case unless the first `len` bytes of `lhs` and `rhs` match.
    /// Two sequences differing only at index `len` or beyond are equal here.
    pub fn assert_eq_bytes(
        &mut self,
        lhs: &[u8],
        rhs: &[u8],
        len: usize,
        lhs_expr: &str,
        rhs_expr: &str,
        message: &str,
    ) {
        if !bytes_equal(lhs, rhs, len) {
            self.fail_assertion(Diagnostic {
                kind: "ASSERT_EQUAL_BYTES",
                body: format!("{lhs_expr} != {rhs_expr}"),
                message,
            });
        }
    }

    /// Fails the case if the first `len` bytes of `lhs` and `rhs` match.
    pub fn assert_ne_bytes(
        &mut self,
        lhs: &[u8],
        rhs: &[u8],
        len: usize,
        lhs_expr: &str,
        rhs_expr: &str,
        message: &str,
    ) {
        if bytes_equal(lhs, rhs, len) {
            self.fail_assertion(Diagnostic {
                kind: "ASSERT_NOT_EQUAL_BYTES",
                body: format!("{lhs_expr} == {rhs_expr}"),
                message,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_bytes_ignore_tail() {
        assert!(!bytes_equal(b"abc", b"abd", 3));
        assert!(bytes_equal(b"abX", b"abY", 2));
        assert!(bytes_equal(b"abcX", b"abcY", 3));
    }

    #[test]
    fn bounded_bytes_see_length_mismatch_inside_bound() {
        // The shorter prefix runs out before the bound; that is inequality.
        assert!(!bytes_equal(b"ab", b"abc", 3));
        assert!(bytes_equal(b"ab", b"ab", 3));
    }

    #[test]
    fn pointer_values_compare_by_identity() {
        let a = 7u32;
        let b = 7u32;
        let pa = &a as *const u32;
        let pb = &b as *const u32;
        assert!(pa.same(&pa));
        assert!(!pa.same(&pb));
    }

    #[test]
    fn diagnostic_omits_separator_without_message() {
        let diag = Diagnostic {
            kind: "ASSERT_TRUE",
            body: "[x > 0]".to_string(),
            message: "",
        };
        assert_eq!(diag.render(), "ASSERT_TRUE: [x > 0]");
    }
}
