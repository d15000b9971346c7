//! Output sinks for rendered harness lines.
//!
//! The harness never writes to a stream directly; it hands fully composed
//! lines to an [`OutputSink`]. Two implementations are provided:
//! [`StdoutSink`] for normal console runs and [`OutputBuffer`] for capturing
//! plain text in tests or embedding scenarios.

use std::io::Write;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// One styled fragment of an output line.
#[derive(Debug, Clone, Copy)]
pub struct Styled<'a> {
    pub color: Option<Color>,
    pub text: &'a str,
}

impl<'a> Styled<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self { color: None, text }
    }

    pub fn colored(color: Option<Color>, text: &'a str) -> Self {
        Self { color, text }
    }
}

/// Accepts one rendered line at a time, in strict call order.
///
/// Every `emit` call corresponds to exactly one output line; sinks append a
/// newline themselves and must not buffer or reorder.
pub trait OutputSink {
    fn emit(&mut self, segments: &[Styled<'_>]);
}

/// Writes lines to standard output through `termcolor`.
pub struct StdoutSink {
    stream: StandardStream,
}

impl StdoutSink {
    pub fn new(choice: ColorChoice) -> Self {
        Self {
            stream: StandardStream::stdout(choice),
        }
    }

    /// Colors only when stdout is a terminal.
    pub fn auto() -> Self {
        let choice = if atty::is(atty::Stream::Stdout) {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(choice)
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::auto()
    }
}

impl OutputSink for StdoutSink {
    fn emit(&mut self, segments: &[Styled<'_>]) {
        for seg in segments {
            match seg.color {
                Some(color) => {
                    let _ = self
                        .stream
                        .set_color(ColorSpec::new().set_fg(Some(color)));
                    let _ = write!(self.stream, "{}", seg.text);
                    let _ = self.stream.reset();
                }
                None => {
                    let _ = write!(self.stream, "{}", seg.text);
                }
            }
        }
        let _ = writeln!(self.stream);
    }
}

/// Collects output into a `String` for testing or programmatic capture.
///
/// Styling is dropped; only the text of each line is kept.
#[derive(Default)]
pub struct OutputBuffer {
    pub buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.buffer.lines()
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, segments: &[Styled<'_>]) {
        for seg in segments {
            self.buffer.push_str(seg.text);
        }
        self.buffer.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_joins_segments_and_keeps_line_order() {
        let mut buf = OutputBuffer::new();
        buf.emit(&[Styled::plain("  "), Styled::colored(Some(Color::Blue), "case: "), Styled::plain("first")]);
        buf.emit(&[Styled::plain("second")]);
        assert_eq!(buf.as_str(), "  case: first\nsecond\n");
    }
}
