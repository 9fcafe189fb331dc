//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! The rest of the crate produces data (transcripts, warnings); this module
//! is the only place that writes it to the terminal.

pub mod output;
