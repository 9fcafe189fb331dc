//! engine::invocation
//!
//! The immutable result of a successful assembly, handed to the fuzz engine.

use std::path::PathBuf;

use serde::Serialize;

use crate::core::config::RemoteDataSettings;
use crate::core::types::{ContractName, Runs, Seed, TestingType};

/// Validated settings for one run.
///
/// Built once per invocation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunConfiguration {
    /// Absolute path to the resolved manifest file
    pub manifest_path: PathBuf,
    /// Contract under test
    pub contract_name: ContractName,
    /// Canonical testing type
    pub testing_type: TestingType,
    /// Replay seed, only when supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<Seed>,
    /// Iteration count, [`Runs::DEFAULT`] unless supplied
    pub runs: Runs,
    /// Stop at the first failure
    pub bail: bool,
    /// Custom dialers module, only when supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dial_path: Option<PathBuf>,
}

/// Everything the fuzz engine receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub run: RunConfiguration,
    pub remote_data: RemoteDataSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run() -> RunConfiguration {
        RunConfiguration {
            manifest_path: PathBuf::from("/projects/counter/Clarinet.toml"),
            contract_name: ContractName::new("counter").unwrap(),
            testing_type: TestingType::Invariant,
            seed: None,
            runs: Runs::DEFAULT,
            bail: true,
            dial_path: None,
        }
    }

    #[test]
    fn serializes_for_engine() {
        let invocation = Invocation {
            run: run(),
            remote_data: RemoteDataSettings::DISABLED,
        };

        let json = serde_json::to_value(&invocation).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "run": {
                    "manifest_path": "/projects/counter/Clarinet.toml",
                    "contract_name": "counter",
                    "testing_type": "invariant",
                    "runs": 100,
                    "bail": true,
                },
                "remote_data": { "enabled": false },
            })
        );
    }

    #[test]
    fn optional_fields_serialized_when_present() {
        let mut run = run();
        run.seed = Some(Seed::new(-3));
        run.dial_path = Some(PathBuf::from("dialers.js"));

        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(json["seed"], serde_json::json!(-3));
        assert_eq!(json["dial_path"], serde_json::json!("dialers.js"));
    }
}
