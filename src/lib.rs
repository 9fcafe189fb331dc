//! Rendezvous - invocation front-end for the `rv` Clarity contract fuzzer
//!
//! Turns raw command-line input into a validated run configuration (or a
//! user-facing diagnostic), resolves which Clarinet manifest applies, and
//! normalizes the manifest's optional remote data settings before handing
//! everything to the fuzz engine.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Argument surface, help text, ordered validation
//! - [`engine`] - Assembles the run and hands it to a fuzz engine
//! - [`core`] - Domain types, manifest resolution, remote data settings
//! - [`ui`] - Terminal output
//!
//! # Correctness Invariants
//!
//! 1. Usage errors never touch the file system and never surface as Rust errors
//! 2. Diagnostic lines are ordered in exactly one place
//! 3. Remote data settings never contain fields the manifest did not set
//! 4. Manifest read failures propagate to the caller

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;
