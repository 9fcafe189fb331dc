//! core::config::schema
//!
//! Manifest schema types owned by the front-end.
//!
//! # Manifest
//!
//! Only the `[repl.remote_data]` table is read here. Every other manifest
//! section (`[project]`, `[contracts.*]`, ...) belongs to the engine and is
//! skipped during deserialization.
//!
//! # Remote Data
//!
//! ```toml
//! [repl.remote_data]
//! enabled = true
//! api_url = "https://api.hiro.so"
//! initial_height = 150000
//! ```

use serde::{Deserialize, Serialize};

/// The subset of a Clarinet manifest this layer reads.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ManifestDocument {
    /// The `[repl]` section
    pub repl: Option<ReplSection>,
}

/// The `[repl]` section of a manifest.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReplSection {
    /// Raw `[repl.remote_data]` table, projected by
    /// [`crate::core::config::parse_remote_data_settings`].
    pub remote_data: Option<toml::Table>,
}

/// Normalized remote data settings.
///
/// Optional fields are only ever copied from the manifest; they are never
/// synthesized, and they are omitted from the serialized form when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteDataSettings {
    /// Whether remote data is used
    pub enabled: bool,

    /// Endpoint serving the remote chain state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Block height to fork the remote state from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_height: Option<u64>,
}

impl RemoteDataSettings {
    /// Settings used when the manifest has no remote data table.
    pub const DISABLED: RemoteDataSettings = RemoteDataSettings {
        enabled: false,
        api_url: None,
        initial_height: None,
    };

    /// Recognized keys of the `[repl.remote_data]` table.
    pub const KEYS: &'static [&'static str] = &["enabled", "api_url", "initial_height"];
}

impl Default for RemoteDataSettings {
    fn default() -> Self {
        Self::DISABLED
    }
}
