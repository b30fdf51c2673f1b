//! # λtty
//!
//! This crate provides **lightweight and cross-platform terminal
//! formatting**. Its only dependency is the low-level crate enabling system
//! calls, i.e., [`libc`](https://crates.io/crates/libc) on Unix and
//! [`windows-sys`](https://crates.io/crates/windows-sys) on Windows.
//!
//! The central type is the [`Terminal`], a wrapper around an output sink:
//!
//!   * Wrap a standard stream with [`Terminal::stdout`] or
//!     [`Terminal::stderr`], or any other writer with [`Terminal::plain`].
//!   * Chain formatting operations: [`format`](Terminal::format) with a batch
//!     of [`Style`] codes, [`erase_line`](Terminal::erase_line),
//!     [`carriage_return`](Terminal::carriage_return),
//!     [`clear`](Terminal::clear), [`move_to`](Terminal::move_to), and
//!     [`set_title`](Terminal::set_title).
//!
//! When a standard stream reaches an interactive Windows console, operations
//! go through the native console API and mutate the attribute word directly.
//! In every other case, including output redirected to files or pipes, they
//! emit plain ANSI escape sequences, so downstream ANSI-aware tools keep
//! working. The decision is made once when the terminal is created.
//!
//! Operations never fail visibly: an OS call that errors leaves the terminal
//! state as it was. Only [`Terminal::set_title`] reports whether it took
//! effect.
//!
//! The [`time`] module rounds out the system helpers with a millisecond
//! wall-clock query.
//!
//!
//! # Example
//!
//! ```
//! use std::io::Write;
//! use lamtty::{Style, Terminal};
//!
//! let mut tty = Terminal::stdout();
//! tty.format(&[Style::LightGreen, Style::BlackBg]);
//! writeln!(tty, "ready")?;
//! tty.format(&[Style::Reset]);
//! # Ok::<(), std::io::Error>(())
//! ```

mod style;
mod sys;
mod term;
pub mod time;

pub use style::{Attribute, Style};
pub use term::{enable_utf8, title, Stream, Terminal};
