//! core
//!
//! Core domain types and manifest handling.
//!
//! # Modules
//!
//! - [`types`] - Strong types: ContractName, TestingType, Seed, Runs
//! - [`manifest`] - Manifest file discovery with per-contract override
//! - [`config`] - Remote data settings extraction
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - File system access is limited to one existence check and one read

pub mod config;
pub mod manifest;
pub mod types;
