//! engine::mock
//!
//! Recording engine for deterministic testing.
//!
//! # Example
//!
//! ```
//! use rendezvous::engine::mock::RecordingEngine;
//! use rendezvous::engine::FuzzEngine;
//!
//! let engine = RecordingEngine::new();
//! assert!(engine.invocations().is_empty());
//! assert_eq!(engine.name(), "recording");
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::handoff::{EngineError, FuzzEngine};
use super::Invocation;

/// Engine that stores every invocation it receives.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingEngine {
    inner: Arc<Mutex<RecordingInner>>,
}

#[derive(Debug, Default)]
struct RecordingInner {
    invocations: Vec<Invocation>,
    fail_with: Option<EngineError>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `execute` fail with `error`.
    pub fn fail_with(&self, error: EngineError) {
        self.inner.lock().unwrap().fail_with = Some(error);
    }

    /// Invocations received so far, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.inner.lock().unwrap().invocations.clone()
    }
}

#[async_trait]
impl FuzzEngine for RecordingEngine {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn execute(&self, invocation: &Invocation) -> Result<(), EngineError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(error) = &inner.fail_with {
            return Err(error.clone());
        }
        inner.invocations.push(invocation.clone());
        Ok(())
    }
}
