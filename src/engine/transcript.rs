//! engine::transcript
//!
//! Ordered diagnostic lines produced by one invocation.
//!
//! The transcript is data, not output: the assembler decides what is said
//! and in which order, and [`crate::ui::output::render`] decides where it goes.

use std::fmt;

/// What a line is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A context-specific usage error.
    Error,
    /// A non-fatal warning about the invocation.
    Warning,
    /// The full help text.
    Help,
    /// An informational line about the resolved run.
    Info,
}

/// A single emitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Lines in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<Line>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(Line {
            kind,
            text: text.into(),
        });
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(LineKind::Error, text);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.push(LineKind::Warning, text);
    }

    pub fn help(&mut self, text: impl Into<String>) {
        self.push(LineKind::Help, text);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(LineKind::Info, text);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Texts of all lines, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }

    /// Texts of the lines of one kind, in order.
    pub fn texts_of(&self, kind: LineKind) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|line| line.kind == kind)
            .map(|line| line.text.as_str())
            .collect()
    }

    pub fn last(&self) -> Option<&Line> {
        self.lines.last()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
