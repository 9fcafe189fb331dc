//! core::config
//!
//! Remote data settings extraction from a project manifest.
//!
//! # Overview
//!
//! The manifest may carry a `[repl.remote_data]` table. It is projected onto
//! [`RemoteDataSettings`]:
//!
//! 1. No table (or an empty one) yields [`RemoteDataSettings::DISABLED`]
//! 2. Otherwise exactly the recognized keys present in the table are copied
//!
//! Nothing is defaulted or merged beyond `enabled`, which is always a
//! boolean in the result.
//!
//! # Diagnostics
//!
//! Malformed values inside the table are not fatal. They are dropped and
//! reported to a [`DiagnosticsSink`] supplied by the caller, which decides
//! whether and how to display them. Failing to read or parse the manifest
//! itself is a [`ManifestError`] and is returned to the caller.
//!
//! # Example
//!
//! ```no_run
//! use rendezvous::core::config::{parse_remote_data_settings, RemoteDataWarning};
//! use std::path::Path;
//!
//! let mut warnings: Vec<RemoteDataWarning> = Vec::new();
//! let settings =
//!     parse_remote_data_settings(Path::new("example/Clarinet.toml"), &mut warnings).unwrap();
//!
//! if settings.enabled {
//!     println!("Remote data from {:?}", settings.api_url);
//! }
//! for warning in warnings {
//!     eprintln!("warning: {}", warning);
//! }
//! ```

pub mod schema;

pub use schema::{ManifestDocument, RemoteDataSettings, ReplSection};

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use toml::Value;

/// Errors from reading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse manifest '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

/// A non-fatal problem found in the remote data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDataWarning {
    /// The manifest that contained the value.
    pub path: PathBuf,
    /// The key inside `[repl.remote_data]`.
    pub key: String,
    /// What was wrong and what was done about it.
    pub message: String,
}

impl fmt::Display for RemoteDataWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: repl.remote_data.{}: {}",
            self.path.display(),
            self.key,
            self.message
        )
    }
}

/// Receiver for non-fatal remote data anomalies.
pub trait DiagnosticsSink {
    /// Record one anomaly. Parsing continues afterwards.
    fn report(&mut self, warning: RemoteDataWarning);
}

impl DiagnosticsSink for Vec<RemoteDataWarning> {
    fn report(&mut self, warning: RemoteDataWarning) {
        self.push(warning);
    }
}

impl<F> DiagnosticsSink for F
where
    F: FnMut(RemoteDataWarning),
{
    fn report(&mut self, warning: RemoteDataWarning) {
        self(warning)
    }
}

/// Read the manifest at `manifest_path` and extract its remote data settings.
///
/// # Errors
///
/// Returns `ManifestError::ReadError` if the file cannot be read and
/// `ManifestError::ParseError` if it is not a valid manifest.
pub fn parse_remote_data_settings(
    manifest_path: &Path,
    sink: &mut dyn DiagnosticsSink,
) -> Result<RemoteDataSettings, ManifestError> {
    let contents = fs::read_to_string(manifest_path).map_err(|e| ManifestError::ReadError {
        path: manifest_path.to_path_buf(),
        source: e,
    })?;

    let document: ManifestDocument =
        toml::from_str(&contents).map_err(|e| ManifestError::ParseError {
            path: manifest_path.to_path_buf(),
            message: e.to_string(),
        })?;

    let settings = match document.repl.and_then(|repl| repl.remote_data) {
        Some(table) if !table.is_empty() => project(manifest_path, &table, sink),
        _ => RemoteDataSettings::DISABLED,
    };

    Ok(settings)
}

/// Copy the recognized keys of a non-empty remote data table.
fn project(path: &Path, table: &toml::Table, sink: &mut dyn DiagnosticsSink) -> RemoteDataSettings {
    let mut report = |key: &str, message: String| {
        sink.report(RemoteDataWarning {
            path: path.to_path_buf(),
            key: key.to_string(),
            message,
        })
    };

    let enabled = match table.get("enabled") {
        Some(Value::Boolean(enabled)) => *enabled,
        Some(other) => {
            report(
                "enabled",
                format!(
                    "expected a boolean, found {}; remote data disabled",
                    other.type_str()
                ),
            );
            false
        }
        None => {
            report("enabled", "missing; remote data disabled".to_string());
            false
        }
    };

    let api_url = match table.get("api_url") {
        Some(Value::String(url)) => Some(url.clone()),
        Some(other) => {
            report(
                "api_url",
                format!("expected a string, found {}; ignored", other.type_str()),
            );
            None
        }
        None => None,
    };

    let initial_height = match table.get("initial_height") {
        Some(Value::Integer(height)) => match u64::try_from(*height) {
            Ok(height) => Some(height),
            Err(_) => {
                report(
                    "initial_height",
                    format!("expected a non-negative integer, found {}; ignored", height),
                );
                None
            }
        },
        Some(other) => {
            report(
                "initial_height",
                format!("expected an integer, found {}; ignored", other.type_str()),
            );
            None
        }
        None => None,
    };

    for key in table.keys() {
        if !RemoteDataSettings::KEYS.contains(&key.as_str()) {
            report(key.as_str(), "unrecognized key; ignored".to_string());
        }
    }

    RemoteDataSettings {
        enabled,
        api_url,
        initial_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_manifest(temp: &TempDir, contents: &str) -> PathBuf {
        let path = temp.path().join("Clarinet.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    fn parse(path: &Path) -> (RemoteDataSettings, Vec<RemoteDataWarning>) {
        let mut warnings = Vec::new();
        let settings = parse_remote_data_settings(path, &mut warnings).unwrap();
        (settings, warnings)
    }

    #[test]
    fn absent_section_is_disabled() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(
            &temp,
            r#"
            [project]
            name = "counter"
            "#,
        );

        let (settings, warnings) = parse(&path);
        assert_eq!(settings, RemoteDataSettings::DISABLED);
        assert!(warnings.is_empty());
    }

    #[test]
    fn empty_section_is_disabled() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(&temp, "[repl.remote_data]\n");

        let (settings, warnings) = parse(&path);
        assert_eq!(settings, RemoteDataSettings::DISABLED);
        assert!(warnings.is_empty());
    }

    #[test]
    fn enabled_only_injects_nothing() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(
            &temp,
            r#"
            [repl.remote_data]
            enabled = true
            "#,
        );

        let (settings, warnings) = parse(&path);
        assert_eq!(
            settings,
            RemoteDataSettings {
                enabled: true,
                api_url: None,
                initial_height: None,
            }
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn full_section_passes_through() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(
            &temp,
            r#"
            [repl.remote_data]
            enabled = true
            api_url = "https://api.hiro.so"
            initial_height = 150000
            "#,
        );

        let (settings, _) = parse(&path);
        assert!(settings.enabled);
        assert_eq!(settings.api_url.as_deref(), Some("https://api.hiro.so"));
        assert_eq!(settings.initial_height, Some(150000));
    }

    #[test]
    fn full_section_with_enabled_false_passes_through() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(
            &temp,
            r#"
            [repl.remote_data]
            enabled = false
            api_url = "https://api.hiro.so"
            initial_height = 42
            "#,
        );

        let (settings, _) = parse(&path);
        assert_eq!(
            settings,
            RemoteDataSettings {
                enabled: false,
                api_url: Some("https://api.hiro.so".to_string()),
                initial_height: Some(42),
            }
        );
    }

    #[test]
    fn malformed_values_reported_and_dropped() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(
            &temp,
            r#"
            [repl.remote_data]
            enabled = "yes"
            api_url = 7
            initial_height = -1
            "#,
        );

        let (settings, warnings) = parse(&path);
        assert_eq!(settings, RemoteDataSettings::DISABLED);

        let keys: Vec<&str> = warnings.iter().map(|w| w.key.as_str()).collect();
        assert_eq!(keys, vec!["enabled", "api_url", "initial_height"]);
        assert!(warnings[0].message.contains("boolean"));
        assert!(warnings[1].message.contains("string"));
        assert!(warnings[2].message.contains("non-negative"));
    }

    #[test]
    fn missing_enabled_reported() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(
            &temp,
            r#"
            [repl.remote_data]
            api_url = "https://api.hiro.so"
            "#,
        );

        let (settings, warnings) = parse(&path);
        assert!(!settings.enabled);
        assert_eq!(settings.api_url.as_deref(), Some("https://api.hiro.so"));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "enabled");
    }

    #[test]
    fn unknown_key_reported() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(
            &temp,
            r#"
            [repl.remote_data]
            enabled = true
            use_mainnet_wallets = true
            "#,
        );

        let (settings, warnings) = parse(&path);
        assert!(settings.enabled);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "use_mainnet_wallets");
        assert!(warnings[0].to_string().contains("repl.remote_data.use_mainnet_wallets"));
    }

    #[test]
    fn closure_sink_receives_warnings() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(
            &temp,
            r#"
            [repl.remote_data]
            enabled = 1
            "#,
        );

        let mut count = 0;
        let mut sink = |_: RemoteDataWarning| count += 1;
        let settings = parse_remote_data_settings(&path, &mut sink).unwrap();

        assert!(!settings.enabled);
        assert_eq!(count, 1);
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let mut warnings = Vec::new();
        let result = parse_remote_data_settings(&temp.path().join("Clarinet.toml"), &mut warnings);

        assert!(matches!(result, Err(ManifestError::ReadError { .. })));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write_manifest(&temp, "[repl.remote_data\nenabled = true");
        let mut warnings = Vec::new();
        let result = parse_remote_data_settings(&path, &mut warnings);

        assert!(matches!(result, Err(ManifestError::ParseError { .. })));
    }
}
