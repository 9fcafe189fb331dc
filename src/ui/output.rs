//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! All terminal output goes through this module. Usage errors and warnings
//! go to stderr, informational lines to stdout. Error lines are coloured
//! only when stderr is a terminal.

use std::fmt::Display;
use std::io::IsTerminal;

use clap::builder::styling::{AnsiColor, Style};

use crate::engine::{LineKind, Outcome, Transcript};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Normal mode - standard output
    #[default]
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

const ERROR_STYLE: Style = AnsiColor::Red.on_default().bold();

/// Print a message.
pub fn print(message: impl Display) {
    println!("{}", message);
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("{}", paint(message, ERROR_STYLE, stderr_is_terminal()));
}

/// Print a warning message.
pub fn warn(message: impl Display) {
    eprintln!("warning: {}", message);
}

/// Print a transcript in order.
///
/// When the outcome is a usage error the help text goes to stderr together
/// with the error; requested help goes to stdout.
pub fn render(transcript: &Transcript, outcome: &Outcome) {
    for line in transcript.lines() {
        match line.kind {
            LineKind::Error => error(line),
            LineKind::Warning => warn(line),
            LineKind::Help if outcome.is_usage_error() => eprintln!("{}", line),
            LineKind::Help | LineKind::Info => print(line),
        }
    }
}

/// Wrap `message` in `style` when `enabled`.
pub fn paint(message: impl Display, style: Style, enabled: bool) -> String {
    if enabled {
        format!("{style}{message}{style:#}")
    } else {
        message.to_string()
    }
}

fn stderr_is_terminal() -> bool {
    std::io::stderr().is_terminal()
}
