//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Shape
//!
//! ```text
//! rv <path-to-clarinet-project> <contract-name> <type>
//!    [--seed=<seed>] [--runs=<runs>] [--bail] [--dial=<path-to-dialers-file>] [--help]
//! ```
//!
//! The three positionals are declared optional so that their absence is
//! reported by [`crate::cli::validate`] in a fixed order with our own
//! diagnostics, rather than by clap. Option values are kept as raw strings
//! for the same reason, including the `--bail` and `--debug` switches, which
//! accept an optional `=true` or `=false`. clap's generated help and version
//! flags are disabled; `--help` is detected before parsing and prints
//! [`help_text`].

use clap::Parser;

/// Long option names understood by [`Cli`].
pub const KNOWN_LONG_OPTIONS: &[&str] = &["seed", "runs", "bail", "dial", "debug"];

/// Long options that take a value, possibly as the next token.
pub const VALUE_OPTIONS: &[&str] = &["seed", "runs", "dial"];

/// rv - Clarity smart contract fuzzer
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "rv")]
#[command(
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// The path to the Clarinet project
    #[arg(value_name = "path-to-clarinet-project", allow_negative_numbers = true)]
    pub manifest_dir: Option<String>,

    /// The name of the contract to be fuzzed
    #[arg(value_name = "contract-name", allow_negative_numbers = true)]
    pub contract_name: Option<String>,

    /// The testing type: test or invariant
    #[arg(value_name = "type", allow_negative_numbers = true)]
    pub testing_type: Option<String>,

    /// Positionals beyond the first three
    #[arg(hide = true, allow_negative_numbers = true)]
    pub extra: Vec<String>,

    /// The seed to use for the replay functionality
    #[arg(long, num_args = 0..=1, default_missing_value = "", allow_negative_numbers = true)]
    pub seed: Option<String>,

    /// The runs to use for iterating over the tests
    #[arg(long, num_args = 0..=1, default_missing_value = "", allow_negative_numbers = true)]
    pub runs: Option<String>,

    /// Stop after the first failure (`--bail`, `--bail=true`, `--bail=false`)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub bail: Option<String>,

    /// The path to the dialers module
    #[arg(long, num_args = 0..=1, default_missing_value = "", allow_negative_numbers = true)]
    pub dial: Option<String>,

    /// Print debug diagnostics to stderr
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub debug: Option<String>,
}

impl Cli {
    /// Parse already-filtered arguments (program name excluded).
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args)
    }
}

/// The fixed usage text.
pub fn help_text() -> String {
    format!(
        "\
rv v{version}

Usage: rv <path-to-clarinet-project> <contract-name> <type> [--seed=<seed>] [--runs=<runs>] [--bail] [--dial=<path-to-dialers-file>] [--help]

Positional arguments:
  path-to-clarinet-project - The path to the Clarinet project.
  contract-name - The name of the contract to be fuzzed.
  type - The type to use for exercising the contracts. Possible values: test, invariant.

Options:
  --seed - The seed to use for the replay functionality.
  --runs - The runs to use for iterating over the tests. Default: 100.
  --bail - Stop after the first failure.
  --dial - The path to a module containing custom pre- and post-execution functions (dialers).
  --debug - Print debug diagnostics to stderr.
  --help - Show the help message.",
        version = env!("CARGO_PKG_VERSION")
    )
}
