//! The terminal formatter.
//!
//! A [`Terminal`] wraps an output sink and applies formatting requests to it
//! in whichever way the target understands. Interactive consoles on Windows
//! have their attribute words, cursor, and title manipulated through the
//! console API; everywhere else, and whenever output is redirected to a file
//! or pipe, the formatter writes plain ANSI escape sequences so that
//! ANSI-aware consumers downstream still see them.
//!
//! All operations are best-effort: an OS call that fails leaves the visible
//! terminal state unchanged and is not reported, except for
//! [`Terminal::set_title`], which returns whether it took effect.
//!
//!
//! # Example
//!
//! ```
//! use lamtty::{Style, Terminal};
//!
//! let mut sink = Vec::new();
//! Terminal::plain(&mut sink).format(&[Style::Red, Style::BlackBg]);
//! assert_eq!(sink, b"\x1b[31;40m");
//! ```

use core::fmt::Write as _;
use std::io::{self, Write};

use crate::style::Style;
use crate::sys;

/// The identity of a standard output stream.
///
/// Formatting decisions depend on whether a sink is one of the process's
/// standard streams, so the identity is carried explicitly instead of being
/// derived from the writer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// A formatting backend.
///
/// One implementation writes ANSI escape sequences to the sink; the other,
/// available on Windows only, mutates the console through its native API. The
/// backend is probed once when the terminal is created, not at every call.
trait Backend {
    fn apply(&self, sink: &mut dyn Write, styles: &[Style]);
    fn erase_line(&self, sink: &mut dyn Write);
    fn clear(&self, sink: &mut dyn Write);
    fn move_to(&self, sink: &mut dyn Write, x: u16, y: u16);
    fn set_title(&self, sink: &mut dyn Write, title: &str) -> bool;
}

/// The escape sequence backend.
struct Ansi;

impl Backend for Ansi {
    fn apply(&self, sink: &mut dyn Write, styles: &[Style]) {
        // One sequence for the whole batch, parameters joined by semicolons.
        let mut sequence = String::with_capacity(4 + 4 * styles.len());
        sequence.push_str("\x1b[");
        for (index, style) in styles.iter().enumerate() {
            if 0 < index {
                sequence.push(';');
            }
            let _ = write!(sequence, "{}", style.code());
        }
        sequence.push('m');
        let _ = sink.write_all(sequence.as_bytes());
    }

    fn erase_line(&self, sink: &mut dyn Write) {
        let _ = sink.write_all(b"\x1b[2K");
    }

    fn clear(&self, sink: &mut dyn Write) {
        let _ = sink.write_all(b"\x1b[2J");
    }

    fn move_to(&self, sink: &mut dyn Write, x: u16, y: u16) {
        let _ = write!(sink, "\x1b[{};{}H", y, x);
    }

    fn set_title(&self, sink: &mut dyn Write, title: &str) -> bool {
        let _ = write!(sink, "\x1b]0;{}\x07", title);
        true
    }
}

/// The native console backend.
#[cfg(target_family = "windows")]
struct Console {
    stream: Stream,
}

#[cfg(target_family = "windows")]
impl Backend for Console {
    fn apply(&self, _sink: &mut dyn Write, styles: &[Style]) {
        sys::apply_styles(self.stream, styles);
    }

    fn erase_line(&self, _sink: &mut dyn Write) {
        // Unsupported: the console API has no erase-line primitive wired up.
    }

    fn clear(&self, _sink: &mut dyn Write) {
        sys::clear(self.stream);
    }

    fn move_to(&self, _sink: &mut dyn Write, x: u16, y: u16) {
        sys::move_to(self.stream, x, y);
    }

    fn set_title(&self, _sink: &mut dyn Write, title: &str) -> bool {
        sys::set_title(title)
    }
}

/// Pick the backend for a sink.
///
/// The native console backend applies only when the sink is a standard stream
/// actually connected to a Windows console. Redirected output keeps the ANSI
/// backend, so piped output still carries escape sequences.
fn backend_for(stream: Option<Stream>) -> Box<dyn Backend> {
    #[cfg(target_family = "windows")]
    if let Some(stream) = stream {
        if sys::is_tty(stream) {
            return Box::new(Console { stream });
        }
    }

    let _ = stream;
    Box::new(Ansi)
}

/// A terminal formatter wrapping an output sink.
///
/// The wrapper borrows or owns the sink for its own lifetime and never closes
/// it. It also implements [`Write`], passing text straight through, so
/// formatted output can be interleaved with regular output.
pub struct Terminal<W: Write> {
    sink: W,
    stream: Option<Stream>,
    backend: Box<dyn Backend>,
}

impl Terminal<io::Stdout> {
    /// Wrap standard output.
    pub fn stdout() -> Self {
        Self::with_stream(io::stdout(), Stream::Stdout)
    }
}

impl Terminal<io::Stderr> {
    /// Wrap standard error.
    pub fn stderr() -> Self {
        Self::with_stream(io::stderr(), Stream::Stderr)
    }
}

impl<W: Write> Terminal<W> {
    /// Wrap a sink that is not a standard stream.
    ///
    /// Such a sink is never considered interactive and always receives ANSI
    /// escape sequences.
    pub fn plain(sink: W) -> Self {
        Self {
            sink,
            stream: None,
            backend: backend_for(None),
        }
    }

    fn with_stream(sink: W, stream: Stream) -> Self {
        Self {
            sink,
            stream: Some(stream),
            backend: backend_for(Some(stream)),
        }
    }

    /// Determine whether the sink is connected to an interactive terminal.
    ///
    /// Sinks without a standard stream identity are never interactive.
    pub fn is_terminal(&self) -> bool {
        self.stream.is_some_and(sys::is_tty)
    }

    /// Apply the formatting codes in order.
    ///
    /// On the ANSI path this writes a single escape sequence covering all
    /// codes. On the native console path each code updates the attribute word
    /// in turn, so a later foreground overrides an earlier one while leaving
    /// the background nibble alone, and vice versa.
    pub fn format(&mut self, styles: &[Style]) -> &mut Self {
        self.backend.apply(&mut self.sink, styles);
        self.done()
    }

    /// Erase the current line.
    ///
    /// On the native console path this is unsupported and does nothing.
    pub fn erase_line(&mut self) -> &mut Self {
        self.backend.erase_line(&mut self.sink);
        self.done()
    }

    /// Return the cursor to the start of the line.
    pub fn carriage_return(&mut self) -> &mut Self {
        let _ = self.sink.write_all(b"\r");
        self.done()
    }

    /// Clear the whole screen.
    ///
    /// The native console path blanks the visible buffer with its current
    /// attributes and homes the cursor.
    pub fn clear(&mut self) -> &mut Self {
        self.backend.clear(&mut self.sink);
        self.done()
    }

    /// Move the cursor to column `x` of row `y`.
    pub fn move_to(&mut self, x: u16, y: u16) -> &mut Self {
        self.backend.move_to(&mut self.sink, x, y);
        self.done()
    }

    /// Set the terminal title.
    ///
    /// The native console path reports whether the OS accepted the title. The
    /// ANSI path writes the OSC sequence and reports success unconditionally,
    /// since the sequence's effect cannot be observed.
    pub fn set_title(&mut self, title: &str) -> bool {
        let accepted = self.backend.set_title(&mut self.sink, title);
        let _ = self.sink.flush();
        accepted
    }

    /// Unwrap the sink.
    pub fn into_inner(self) -> W {
        self.sink
    }

    fn done(&mut self) -> &mut Self {
        let _ = self.sink.flush();
        self
    }
}

impl<W: Write> Write for Terminal<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.sink.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}

impl<W: Write> core::fmt::Debug for Terminal<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Terminal")
            .field("stream", &self.stream)
            .field("interactive", &self.is_terminal())
            .finish_non_exhaustive()
    }
}

/// Switch the process over to UTF-8 output.
///
/// On Windows, this sets the console input and output code pages to UTF-8.
/// Elsewhere, it sets the process locale to a UTF-8 English locale for all
/// categories. The change is process-wide and best-effort; failures are not
/// surfaced.
pub fn enable_utf8() {
    sys::use_utf8();
}

/// Get the current console title.
///
/// Only Windows exposes a title query; every other platform returns the empty
/// string, as does a console whose title cannot be read.
pub fn title() -> String {
    sys::title()
}

// =====================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::style::Style;

    fn drained(terminal: Terminal<Vec<u8>>) -> Vec<u8> {
        terminal.into_inner()
    }

    #[test]
    fn test_single_code() {
        let mut terminal = Terminal::plain(Vec::new());
        terminal.format(&[Style::Reset]);
        assert_eq!(drained(terminal), b"\x1b[0m");
    }

    #[test]
    fn test_batched_codes_emit_one_sequence() {
        let mut terminal = Terminal::plain(Vec::new());
        terminal.format(&[Style::Red, Style::BlackBg, Style::Reset]);
        assert_eq!(drained(terminal), b"\x1b[31;40;0m");

        let mut terminal = Terminal::plain(Vec::new());
        terminal.format(&[
            Style::LightYellow,
            Style::BlueBg,
            Style::White,
            Style::DarkGrayBg,
        ]);
        assert_eq!(drained(terminal), b"\x1b[93;44;97;100m");
    }

    #[test]
    fn test_carriage_return() {
        let mut terminal = Terminal::plain(Vec::new());
        terminal.carriage_return();
        assert_eq!(drained(terminal), b"\r");
    }

    #[test]
    fn test_erase_line() {
        let mut terminal = Terminal::plain(Vec::new());
        terminal.erase_line();
        assert_eq!(drained(terminal), b"\x1b[2K");
    }

    #[test]
    fn test_clear() {
        let mut terminal = Terminal::plain(Vec::new());
        terminal.clear();
        assert_eq!(drained(terminal), b"\x1b[2J");
    }

    #[test]
    fn test_move_to_writes_row_then_column() {
        let mut terminal = Terminal::plain(Vec::new());
        terminal.move_to(5, 10);
        assert_eq!(drained(terminal), b"\x1b[10;5H");
    }

    #[test]
    fn test_set_title() {
        let mut terminal = Terminal::plain(Vec::new());
        assert!(terminal.set_title("demo"));
        assert_eq!(drained(terminal), b"\x1b]0;demo\x07");
    }

    #[test]
    fn test_plain_sink_is_not_interactive() {
        let terminal = Terminal::plain(Vec::new());
        assert!(!terminal.is_terminal());
    }

    #[test]
    fn test_chained_operations() {
        let mut terminal = Terminal::plain(Vec::new());
        terminal
            .erase_line()
            .carriage_return()
            .format(&[Style::Green]);
        let _ = write!(terminal, "ok");
        terminal.format(&[Style::Reset]);
        assert_eq!(drained(terminal), b"\x1b[2K\r\x1b[32mok\x1b[0m");
    }

    #[test]
    fn test_write_passes_through() {
        let mut terminal = Terminal::plain(Vec::new());
        terminal.write_all(b"plain text").expect("vec write");
        assert_eq!(drained(terminal), b"plain text");
    }
}
