//! engine::handoff
//!
//! The seam between the front-end and the fuzz engine.
//!
//! # Design
//!
//! The `FuzzEngine` trait is async because running a campaign is long-lived
//! I/O from the caller's point of view. The front-end only ever hands over a
//! complete [`Invocation`]; it never inspects what the engine does with it.
//!
//! # Example
//!
//! ```
//! use rendezvous::engine::{FuzzEngine, HandoffEngine};
//! use rendezvous::ui::output::Verbosity;
//!
//! # fn invocation() -> rendezvous::engine::Invocation { unimplemented!() }
//! # async fn run() -> Result<(), rendezvous::engine::EngineError> {
//! let engine = HandoffEngine::new(Verbosity::Debug);
//! engine.execute(&invocation()).await?;
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use super::Invocation;
use crate::ui::output::{self, Verbosity};

/// Errors from handing an invocation to an engine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The invocation could not be encoded for the engine.
    #[error("failed to encode invocation: {0}")]
    Encode(String),

    /// The engine refused or failed the run.
    #[error("engine failed: {0}")]
    Failed(String),
}

/// A consumer of assembled invocations.
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait FuzzEngine: Send + Sync {
    /// Get the engine name (e.g., "handoff").
    fn name(&self) -> &'static str;

    /// Run the campaign described by `invocation`.
    async fn execute(&self, invocation: &Invocation) -> Result<(), EngineError>;
}

/// Engine used by the `rv` binary.
///
/// Records the resolved invocation as JSON in debug output. The campaign
/// itself is run by the external engine that consumes this invocation.
#[derive(Debug, Clone, Copy)]
pub struct HandoffEngine {
    verbosity: Verbosity,
}

impl HandoffEngine {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

#[async_trait]
impl FuzzEngine for HandoffEngine {
    fn name(&self) -> &'static str {
        "handoff"
    }

    async fn execute(&self, invocation: &Invocation) -> Result<(), EngineError> {
        let encoded = serde_json::to_string_pretty(invocation)
            .map_err(|e| EngineError::Encode(e.to_string()))?;
        output::debug(
            format!("handing invocation to {} engine:\n{}", self.name(), encoded),
            self.verbosity,
        );
        Ok(())
    }
}
