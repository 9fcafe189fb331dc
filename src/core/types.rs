//! core::types
//!
//! Strong types for run configuration values.
//!
//! # Types
//!
//! - [`ContractName`] - Non-empty name of the contract under test
//! - [`TestingType`] - Fuzzing mode: property-based or invariant-based
//! - [`Seed`] - Replay seed supplied by the user
//! - [`Runs`] - Iteration count supplied by the user
//!
//! # Validation
//!
//! These types enforce validity at construction time. Raw command-line
//! strings are converted once, so every later layer works with values that
//! are already known to be well formed.
//!
//! # Examples
//!
//! ```
//! use rendezvous::core::types::{ContractName, Runs, TestingType};
//!
//! let contract = ContractName::new("counter").unwrap();
//! let kind: TestingType = "InVaRiAnT".parse().unwrap();
//!
//! assert_eq!(contract.as_str(), "counter");
//! assert_eq!(kind.to_string(), "invariant");
//! assert_eq!(Runs::DEFAULT.get(), 100);
//!
//! assert!(ContractName::new("").is_err());
//! assert!("fuzz".parse::<TestingType>().is_err());
//! ```

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid contract name: {0}")]
    InvalidContractName(String),

    #[error("invalid testing type '{0}'")]
    InvalidTestingType(String),

    #[error("invalid seed '{0}'")]
    InvalidSeed(String),

    #[error("invalid runs '{0}'")]
    InvalidRuns(String),
}

/// Name of the contract targeted by a run.
///
/// The name is also used to derive the per-contract manifest override, see
/// [`crate::core::manifest::override_file_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContractName(String);

impl ContractName {
    /// Create a new validated contract name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidContractName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TypeError::InvalidContractName(
                "contract name cannot be empty".into(),
            ));
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ContractName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContractName> for String {
    fn from(name: ContractName) -> Self {
        name.0
    }
}

/// The fuzzing mode selected by the user.
///
/// Parsing is case-insensitive; display always yields the canonical
/// lower-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestingType {
    /// Property-based testing of the contract's test functions.
    Test,
    /// Invariant testing over random sequences of public calls.
    Invariant,
}

impl TestingType {
    /// All accepted testing types, in help-text order.
    pub const ALL: [TestingType; 2] = [TestingType::Test, TestingType::Invariant];

    /// Canonical lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TestingType::Test => "test",
            TestingType::Invariant => "invariant",
        }
    }

    /// Comma separated list of the accepted names.
    pub fn possible_values() -> String {
        Self::ALL
            .iter()
            .map(TestingType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for TestingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestingType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| TypeError::InvalidTestingType(s.to_string()))
    }
}

/// Seed for deterministic replay of a previous run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(i64);

impl Seed {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Seed {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Seed)
            .map_err(|_| TypeError::InvalidSeed(s.to_string()))
    }
}

/// Number of iterations the engine performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Runs(NonZeroU32);

impl Runs {
    /// Iteration count used when `--runs` is not supplied.
    pub const DEFAULT: Runs = match NonZeroU32::new(100) {
        Some(n) => Runs(n),
        None => panic!("default runs must be non-zero"),
    };

    /// Create a run count.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRuns` for zero.
    pub fn new(value: u32) -> Result<Self, TypeError> {
        NonZeroU32::new(value)
            .map(Runs)
            .ok_or_else(|| TypeError::InvalidRuns(value.to_string()))
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl Default for Runs {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Runs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Runs {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<NonZeroU32>()
            .map(Runs)
            .map_err(|_| TypeError::InvalidRuns(s.to_string()))
    }
}
