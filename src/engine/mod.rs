//! engine
//!
//! Assembles a run from raw arguments: Validate -> Resolve -> Read -> Report.
//!
//! # Lifecycle
//!
//! ```text
//! validate args -> resolve manifest -> read remote data -> transcript -> hand off
//! ```
//!
//! 1. **Validate**: check the arguments in precedence order; a failure stops
//!    here, before the file system is touched
//! 2. **Resolve**: pick `Clarinet.toml` or the per-contract override and
//!    join it with the project directory
//! 3. **Read**: extract the remote data settings from that manifest
//! 4. **Report**: record the ordered informational lines
//!
//! The resulting [`Invocation`] is handed to a [`FuzzEngine`].
//!
//! # Invariants
//!
//! - [`assemble`] is the only place that orders transcript lines
//! - Informational lines appear in a fixed order: manifest, contract, seed,
//!   runs, dial path, bail, banner
//! - Optional lines appear only for values the user supplied
//! - Manifest read failures are returned as errors, never as transcript lines
//!
//! # Example
//!
//! ```no_run
//! use rendezvous::core::config::RemoteDataWarning;
//! use rendezvous::engine::{assemble, Context, Outcome};
//!
//! let ctx = Context::from_env().unwrap();
//! let mut warnings: Vec<RemoteDataWarning> = Vec::new();
//! let assembly = assemble(["example", "counter", "invariant"], &ctx, &mut warnings).unwrap();
//!
//! if let Outcome::Ready(invocation) = &assembly.outcome {
//!     println!("{}", invocation.run.manifest_path.display());
//! }
//! ```

pub mod handoff;
pub mod invocation;
pub mod mock;
pub mod transcript;

pub use handoff::{EngineError, FuzzEngine, HandoffEngine};
pub use invocation::{Invocation, RunConfiguration};
pub use transcript::{Line, LineKind, Transcript};

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::cli::args::help_text;
use crate::cli::validate::{validate, RunArgs, UsageError, Validation};
use crate::core::config::{parse_remote_data_settings, DiagnosticsSink, ManifestError};
use crate::core::manifest::{manifest_path, resolve_manifest_file_name};
use crate::ui::output::Verbosity;

/// Execution context for an invocation.
#[derive(Debug, Clone)]
pub struct Context {
    /// Directory relative project paths are resolved against.
    pub cwd: PathBuf,
}

impl Context {
    /// Context for the current process.
    pub fn from_env() -> std::io::Result<Self> {
        Ok(Self {
            cwd: std::env::current_dir()?,
        })
    }
}

/// How an invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Help was requested; no configuration.
    Help,
    /// The arguments were rejected; no configuration.
    Usage(UsageError),
    /// A complete invocation for the engine.
    Ready(Invocation),
}

impl Outcome {
    /// Whether the invocation failed on user input.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Outcome::Usage(_))
    }
}

/// Result of [`assemble`].
#[derive(Debug, Clone)]
pub struct Assembly {
    /// Ordered lines to present.
    pub transcript: Transcript,
    /// What to do next.
    pub outcome: Outcome,
    /// Verbosity requested on the command line.
    pub verbosity: Verbosity,
}

/// Turn raw arguments (program name excluded) into an invocation or a
/// user-facing diagnostic.
///
/// Remote data anomalies go to `sink`; they do not appear in the transcript.
///
/// # Errors
///
/// Returns `ManifestError` if the resolved manifest cannot be read or parsed.
pub fn assemble<I, T>(
    args: I,
    ctx: &Context,
    sink: &mut dyn DiagnosticsSink,
) -> Result<Assembly, ManifestError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut transcript = Transcript::new();

    let args = match validate(args) {
        Validation::Help => {
            transcript.help(help_text());
            return Ok(Assembly {
                transcript,
                outcome: Outcome::Help,
                verbosity: Verbosity::Normal,
            });
        }
        Validation::Invalid(e) => {
            transcript.error(e.to_string());
            transcript.help(help_text());
            return Ok(Assembly {
                transcript,
                outcome: Outcome::Usage(e),
                verbosity: Verbosity::Normal,
            });
        }
        Validation::Valid(args) => args,
    };

    let file_name = resolve_manifest_file_name(&ctx.cwd.join(&args.manifest_dir), &args.contract);
    let manifest_path = manifest_path(&ctx.cwd, &args.manifest_dir, &file_name);
    let remote_data = parse_remote_data_settings(&manifest_path, sink)?;

    report(&mut transcript, &args, &manifest_path);

    let verbosity = Verbosity::from_flags(args.debug);
    let run = RunConfiguration {
        manifest_path,
        contract_name: args.contract,
        testing_type: args.testing_type,
        seed: args.seed,
        runs: args.runs.unwrap_or_default(),
        bail: args.bail,
        dial_path: args.dial,
    };

    Ok(Assembly {
        transcript,
        outcome: Outcome::Ready(Invocation { run, remote_data }),
        verbosity,
    })
}

/// Record the informational lines for a valid run.
fn report(transcript: &mut Transcript, args: &RunArgs, manifest_path: &Path) {
    for ignored in &args.ignored {
        transcript.warning(format!("ignoring unrecognized argument '{}'", ignored));
    }

    transcript.info(format!("Using manifest path: {}", manifest_path.display()));
    transcript.info(format!("Target contract: {}", args.contract));

    if let Some(seed) = args.seed {
        transcript.info(format!("Using seed: {}", seed));
    }
    if let Some(runs) = args.runs {
        transcript.info(format!("Using runs: {}", runs));
    }
    if let Some(dial) = &args.dial {
        transcript.info(format!("Using dial path: {}", dial.display()));
    }
    if args.bail {
        transcript.info("Bailing on first failure.");
    }

    transcript.info(format!(
        "\nStarting {} testing type for the {} contract...\n",
        args.testing_type, args.contract
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{RemoteDataSettings, RemoteDataWarning};
    use std::fs;
    use tempfile::TempDir;

    fn project(manifest: &str) -> (TempDir, Context) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("Clarinet.toml"), manifest).unwrap();
        let ctx = Context {
            cwd: temp.path().to_path_buf(),
        };
        (temp, ctx)
    }

    fn run(args: &[&str], ctx: &Context) -> Assembly {
        let mut warnings: Vec<RemoteDataWarning> = Vec::new();
        assemble(args.iter().copied(), ctx, &mut warnings).unwrap()
    }

    #[test]
    fn help_emits_only_help() {
        let (_temp, ctx) = project("");
        let assembly = run(&["example", "--help"], &ctx);

        assert_eq!(assembly.outcome, Outcome::Help);
        assert_eq!(assembly.transcript.texts(), vec![help_text().as_str()]);
    }

    #[test]
    fn usage_error_emits_error_then_help() {
        let (_temp, ctx) = project("");
        let assembly = run(&["."], &ctx);

        assert_eq!(assembly.outcome, Outcome::Usage(UsageError::NoContractName));
        let kinds: Vec<LineKind> = assembly.transcript.lines().iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LineKind::Error, LineKind::Help]);
    }

    #[test]
    fn usage_error_skips_manifest() {
        // No manifest on disk: a usage error must not try to read one.
        let temp = TempDir::new().unwrap();
        let ctx = Context {
            cwd: temp.path().to_path_buf(),
        };
        let mut warnings: Vec<RemoteDataWarning> = Vec::new();
        let assembly = assemble(["missing", "counter", "nope"], &ctx, &mut warnings).unwrap();

        assert!(assembly.outcome.is_usage_error());
    }

    #[test]
    fn relative_project_resolved_against_cwd() {
        let (temp, ctx) = project("");
        let assembly = run(&[".", "counter", "test"], &ctx);

        let Outcome::Ready(invocation) = assembly.outcome else {
            panic!("expected ready outcome");
        };
        assert_eq!(
            invocation.run.manifest_path,
            temp.path().join(".").join("Clarinet.toml")
        );
        assert_eq!(invocation.run.runs.get(), 100);
        assert_eq!(invocation.remote_data, RemoteDataSettings::DISABLED);
    }

    #[test]
    fn override_manifest_used_for_contract() {
        let (temp, ctx) = project("");
        fs::write(
            temp.path().join("Clarinet-counter.toml"),
            "[repl.remote_data]\nenabled = true\n",
        )
        .unwrap();

        let assembly = run(&[temp.path().to_str().unwrap(), "counter", "test"], &ctx);
        let Outcome::Ready(invocation) = assembly.outcome else {
            panic!("expected ready outcome");
        };
        assert_eq!(
            invocation.run.manifest_path,
            temp.path().join("Clarinet-counter.toml")
        );
        assert!(invocation.remote_data.enabled);
    }

    #[test]
    fn missing_manifest_is_error() {
        let temp = TempDir::new().unwrap();
        let ctx = Context {
            cwd: temp.path().to_path_buf(),
        };
        let mut warnings: Vec<RemoteDataWarning> = Vec::new();
        let result = assemble([".", "counter", "test"], &ctx, &mut warnings);

        assert!(matches!(result, Err(ManifestError::ReadError { .. })));
    }

    #[test]
    fn debug_flag_sets_verbosity() {
        let (_temp, ctx) = project("");
        let assembly = run(&[".", "counter", "test", "--debug"], &ctx);
        assert_eq!(assembly.verbosity, Verbosity::Debug);
    }

    #[test]
    fn ignored_arguments_warned_before_info() {
        let (_temp, ctx) = project("");
        let assembly = run(&[".", "counter", "test", "--fast"], &ctx);

        let first = &assembly.transcript.lines()[0];
        assert_eq!(first.kind, LineKind::Warning);
        assert!(first.text.contains("'--fast'"));
    }
}
