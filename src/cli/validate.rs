//! cli::validate
//!
//! Argument validation with ordered precedence.
//!
//! # Precedence
//!
//! The first failing check wins and later checks are not evaluated:
//!
//! 1. `--help` / `-h` anywhere: help requested, nothing else is looked at
//! 2. Missing project path
//! 3. Missing contract name
//! 4. Missing or unknown testing type (matched case-insensitively)
//! 5. Malformed values of recognized options
//!
//! An argument that is not valid UTF-8 is rejected right after the help
//! check, since nothing later can be read reliably from it.
//!
//! Unrecognized options and surplus positionals never fail validation. They
//! are returned in [`RunArgs::ignored`] so the caller can warn about them.
//! If clap still rejects the remaining arguments, that rejection is reported
//! at step 5, after the positional checks.
//!
//! Validation is pure: it returns a [`Validation`] and leaves all output to
//! the caller.

use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;

use super::args::{Cli, KNOWN_LONG_OPTIONS, VALUE_OPTIONS};
use crate::core::types::{ContractName, Runs, Seed, TestingType};

/// A user-input problem, reported as a message followed by the help text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("No path to Clarinet project provided. Pass the project directory as the first argument.")]
    NoManifestPath,

    #[error("No target contract name provided. Pass the name of the contract to fuzz as the second argument.")]
    NoContractName,

    #[error("Invalid type provided. Possible values: {}.", TestingType::possible_values())]
    InvalidType,

    #[error("Invalid argument provided: '{0}'. Arguments must be valid UTF-8.")]
    InvalidUnicode(String),

    #[error("Invalid seed provided: '{0}'. The seed must be an integer.")]
    InvalidSeed(String),

    #[error("Invalid runs provided: '{0}'. The runs must be a positive integer.")]
    InvalidRuns(String),

    #[error("Invalid value provided for --{flag}: '{value}'. Possible values: true, false.")]
    InvalidSwitch { flag: &'static str, value: String },

    #[error("No dial path provided. Use --dial=<path-to-dialers-file>.")]
    NoDialPath,

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

/// Arguments that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    /// Project directory as given on the command line
    pub manifest_dir: PathBuf,
    /// Contract under test
    pub contract: ContractName,
    /// Canonical testing type
    pub testing_type: TestingType,
    /// Explicit `--seed`
    pub seed: Option<Seed>,
    /// Explicit `--runs`; `None` means the default applies
    pub runs: Option<Runs>,
    /// `--bail`
    pub bail: bool,
    /// Explicit `--dial`
    pub dial: Option<PathBuf>,
    /// `--debug`
    pub debug: bool,
    /// Unrecognized options and surplus positionals, in input order
    pub ignored: Vec<String>,
}

/// Outcome of validating the raw argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// `--help` was present.
    Help,
    /// A check failed.
    Invalid(UsageError),
    /// All checks passed.
    Valid(RunArgs),
}

/// Validate the raw argument list (program name excluded).
pub fn validate<I, T>(args: I) -> Validation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let raw: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let lossy: Vec<String> = raw
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    if help_requested(&lossy) {
        return Validation::Help;
    }

    let args = match raw
        .into_iter()
        .map(OsString::into_string)
        .collect::<Result<Vec<String>, OsString>>()
    {
        Ok(args) => args,
        Err(arg) => {
            return Validation::Invalid(UsageError::InvalidUnicode(
                arg.to_string_lossy().into_owned(),
            ))
        }
    };

    let (recognized, mut ignored) = split_unrecognized(&args);
    let parsed = Cli::try_parse_args(&recognized);

    let (manifest_dir, contract_name, testing_type) = match &parsed {
        Ok(cli) => (
            cli.manifest_dir.clone(),
            cli.contract_name.clone(),
            cli.testing_type.clone(),
        ),
        Err(_) => {
            let mut positionals = positionals(&recognized).into_iter();
            (positionals.next(), positionals.next(), positionals.next())
        }
    };

    let Some(manifest_dir) = non_empty(manifest_dir) else {
        return Validation::Invalid(UsageError::NoManifestPath);
    };

    let Some(contract) = non_empty(contract_name).and_then(|n| ContractName::new(n).ok()) else {
        return Validation::Invalid(UsageError::NoContractName);
    };

    let Some(testing_type) = testing_type
        .as_deref()
        .and_then(|raw| raw.parse::<TestingType>().ok())
    else {
        return Validation::Invalid(UsageError::InvalidType);
    };

    let cli = match parsed {
        Ok(cli) => cli,
        Err(e) => return Validation::Invalid(UsageError::InvalidOption(clap_message(&e))),
    };

    let seed = match cli.seed {
        Some(raw) => match raw.parse::<Seed>() {
            Ok(seed) => Some(seed),
            Err(_) => return Validation::Invalid(UsageError::InvalidSeed(raw)),
        },
        None => None,
    };

    let runs = match cli.runs {
        Some(raw) => match raw.parse::<Runs>() {
            Ok(runs) => Some(runs),
            Err(_) => return Validation::Invalid(UsageError::InvalidRuns(raw)),
        },
        None => None,
    };

    let dial = match cli.dial {
        Some(raw) if raw.is_empty() => return Validation::Invalid(UsageError::NoDialPath),
        Some(raw) => Some(PathBuf::from(raw)),
        None => None,
    };

    let bail = match switch("bail", cli.bail) {
        Ok(bail) => bail,
        Err(e) => return Validation::Invalid(e),
    };

    let debug = match switch("debug", cli.debug) {
        Ok(debug) => debug,
        Err(e) => return Validation::Invalid(e),
    };

    ignored.extend(cli.extra);

    Validation::Valid(RunArgs {
        manifest_dir: PathBuf::from(manifest_dir),
        contract,
        testing_type,
        seed,
        runs,
        bail,
        dial,
        debug,
        ignored,
    })
}

/// Check for `--help` or `-h` before the `--` terminator.
fn help_requested(args: &[String]) -> bool {
    args.iter()
        .take_while(|arg| arg.as_str() != "--")
        .any(|arg| arg == "--help" || arg == "-h")
}

/// Separate options clap does not know about so they cannot fail parsing.
fn split_unrecognized(args: &[String]) -> (Vec<String>, Vec<String>) {
    let mut recognized = Vec::with_capacity(args.len());
    let mut ignored = Vec::new();
    let mut options_done = false;

    for arg in args {
        if !options_done && is_unrecognized_option(arg) {
            ignored.push(arg.clone());
        } else {
            recognized.push(arg.clone());
        }
        if arg == "--" {
            options_done = true;
        }
    }

    (recognized, ignored)
}

fn is_unrecognized_option(arg: &str) -> bool {
    if let Some(long) = arg.strip_prefix("--") {
        if long.is_empty() {
            return false;
        }
        let name = long.split_once('=').map_or(long, |(name, _)| name);
        !KNOWN_LONG_OPTIONS.contains(&name)
    } else if let Some(short) = arg.strip_prefix('-') {
        !short.is_empty() && !is_integer(short)
    } else {
        false
    }
}

/// Negative integers such as `-1` are positional values, not options.
fn is_integer(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Positional tokens in the order clap assigns them.
///
/// Only used to keep the positional checks ahead of a clap rejection.
fn positionals(args: &[String]) -> Vec<String> {
    let mut found = Vec::new();
    let mut iter = args.iter().peekable();

    while let Some(arg) = iter.next() {
        if arg == "--" {
            found.extend(iter.cloned());
            break;
        }
        if let Some(long) = arg.strip_prefix("--") {
            let takes_next = VALUE_OPTIONS.contains(&long);
            if takes_next && iter.peek().is_some_and(|next| !next.starts_with("--")) {
                iter.next();
            }
            continue;
        }
        if arg.len() > 1 && arg.starts_with('-') && !is_integer(&arg[1..]) {
            continue;
        }
        found.push(arg.clone());
    }

    found
}

/// Interpret `--bail` or `--debug`, whose value may only be `true` or `false`.
fn switch(flag: &'static str, raw: Option<String>) -> Result<bool, UsageError> {
    match raw {
        None => Ok(false),
        Some(value) => value
            .parse::<bool>()
            .map_err(|_| UsageError::InvalidSwitch { flag, value }),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// First line of a clap error, without its `error: ` prefix.
fn clap_message(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
