//! Line rendering: severity tags, colors, and depth-based indentation.
//!
//! A rendered line is `indent + tag + body`: two spaces of indentation per
//! nesting level, then an optionally colored tag, then the message. Rendering
//! is synchronous and unbuffered; lines appear in exactly the order the
//! harness produces them.

use termcolor::Color;

use crate::output::{OutputSink, Styled};

/// Whether debug-tier lines are compiled into this build. When the
/// `debug-log` feature is off this is `false` and debug rendering folds away
/// entirely, including in the exported logging macros.
pub const DEBUG_ENABLED: bool = cfg!(feature = "debug-log");

/// Severity tiers for tagged output lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG: ",
            Severity::Info => "INFO: ",
            Severity::Warn => "WARN: ",
            Severity::Error => "ERROR: ",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Severity::Debug => Color::Cyan,
            Severity::Info => Color::Green,
            Severity::Warn => Color::Yellow,
            Severity::Error => Color::Red,
        }
    }
}

/// Presentation settings for a run.
pub struct ReportConfig {
    pub use_colors: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl ReportConfig {
    /// Capture-friendly settings: no styling at all.
    pub fn plain() -> Self {
        Self { use_colors: false }
    }
}

/// Composes output lines and hands them to a sink.
pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    fn paint(&self, color: Color) -> Option<Color> {
        if self.config.use_colors {
            Some(color)
        } else {
            None
        }
    }

    fn indent(depth: u16) -> String {
        "  ".repeat(depth as usize)
    }

    /// Severity-tagged line; tag and body share the tier color. Debug-tier
    /// lines are dropped unless the `debug-log` feature is enabled.
    pub fn log(&self, sink: &mut dyn OutputSink, depth: u16, severity: Severity, msg: &str) {
        if severity == Severity::Debug && !DEBUG_ENABLED {
            return;
        }
        let indent = Self::indent(depth);
        let color = self.paint(severity.color());
        sink.emit(&[
            Styled::plain(&indent),
            Styled::colored(color, severity.tag()),
            Styled::colored(color, msg),
        ]);
    }

    /// Whole-line styled message with no severity tag (pass markers, test
    /// function names).
    pub fn line(&self, sink: &mut dyn OutputSink, depth: u16, color: Color, msg: &str) {
        let indent = Self::indent(depth);
        sink.emit(&[Styled::plain(&indent), Styled::colored(self.paint(color), msg)]);
    }

    /// Line with a colored label and a plain body (case headers).
    pub fn labeled(
        &self,
        sink: &mut dyn OutputSink,
        depth: u16,
        color: Color,
        label: &str,
        msg: &str,
    ) {
        let indent = Self::indent(depth);
        sink.emit(&[
            Styled::plain(&indent),
            Styled::colored(self.paint(color), label),
            Styled::plain(msg),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputBuffer;

    #[test]
    fn log_indents_two_spaces_per_level() {
        let reporter = Reporter::new(ReportConfig::plain());
        let mut buf = OutputBuffer::new();
        reporter.log(&mut buf, 2, Severity::Warn, "careful");
        assert_eq!(buf.as_str(), "    WARN: careful\n");
    }

    #[test]
    fn debug_lines_follow_build_configuration() {
        let reporter = Reporter::new(ReportConfig::plain());
        let mut buf = OutputBuffer::new();
        reporter.log(&mut buf, 0, Severity::Debug, "trace detail");
        if DEBUG_ENABLED {
            assert_eq!(buf.as_str(), "DEBUG: trace detail\n");
        } else {
            assert!(buf.as_str().is_empty());
        }
    }
}
