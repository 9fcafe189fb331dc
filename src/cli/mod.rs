//! cli
//!
//! Command-line interface layer for rv.
//!
//! # Responsibilities
//!
//! - Define the argument surface and the help text ([`args`])
//! - Validate raw arguments in precedence order ([`validate`])
//! - Wire the assembler to the terminal and the fuzz engine ([`run`])
//!
//! # Architecture
//!
//! The CLI layer is thin. Validation returns data; [`crate::engine::assemble`]
//! orders the diagnostics; [`crate::ui::output`] prints them.

pub mod args;
pub mod validate;

pub use args::{help_text, Cli};
pub use validate::{RunArgs, UsageError, Validation};

use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::Result;

use crate::core::config::RemoteDataWarning;
use crate::engine::{self, Context, FuzzEngine, HandoffEngine, Outcome};
use crate::ui::output;

/// How a completed invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Help was shown or the run was handed to the engine.
    Success,
    /// The arguments were rejected.
    UsageError,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::UsageError => ExitCode::FAILURE,
        }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub async fn run() -> Result<ExitCode> {
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let ctx = Context::from_env()?;

    let status = run_with(args, &ctx, &HandoffEngine::new).await?;
    Ok(status.into())
}

/// Run with explicit arguments, context and engine constructor.
pub async fn run_with<E, F>(args: Vec<OsString>, ctx: &Context, make_engine: &F) -> Result<Status>
where
    E: FuzzEngine,
    F: Fn(output::Verbosity) -> E,
{
    let mut sink = |warning: RemoteDataWarning| output::warn(warning);
    let assembly = engine::assemble(args, ctx, &mut sink)?;

    output::render(&assembly.transcript, &assembly.outcome);

    match assembly.outcome {
        Outcome::Help => Ok(Status::Success),
        Outcome::Usage(_) => Ok(Status::UsageError),
        Outcome::Ready(invocation) => {
            let engine = make_engine(assembly.verbosity);
            output::debug(
                format!("remote data: {:?}", invocation.remote_data),
                assembly.verbosity,
            );
            engine.execute(&invocation).await?;
            Ok(Status::Success)
        }
    }
}
