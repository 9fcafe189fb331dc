//! core::manifest
//!
//! Manifest file discovery for a Clarinet project.
//!
//! # Resolution
//!
//! A project directory holds the standard manifest, `Clarinet.toml`. A
//! contract may ship its own manifest next to it, named
//! `Clarinet-<contract>.toml`. When that override exists it wins; otherwise
//! the standard manifest is used. There are no other tiers.
//!
//! # Example
//!
//! ```
//! use rendezvous::core::manifest::{resolve_manifest_file_name, DEFAULT_MANIFEST};
//! use rendezvous::core::types::ContractName;
//! use std::path::Path;
//!
//! let contract = ContractName::new("counter").unwrap();
//! let name = resolve_manifest_file_name(Path::new("example"), &contract);
//! assert_eq!(name, DEFAULT_MANIFEST);
//! ```

use std::path::{Path, PathBuf};

use crate::core::types::ContractName;

/// File name of the standard project manifest.
pub const DEFAULT_MANIFEST: &str = "Clarinet.toml";

/// File name of the per-contract manifest override.
pub fn override_file_name(contract: &ContractName) -> String {
    format!("Clarinet-{}.toml", contract.as_str())
}

/// Decide which manifest file name applies to `contract` in `manifest_dir`.
///
/// Performs a single existence check for the override. A missing override is
/// the normal case and falls back to [`DEFAULT_MANIFEST`].
pub fn resolve_manifest_file_name(manifest_dir: &Path, contract: &ContractName) -> String {
    let candidate = override_file_name(contract);
    if manifest_dir.join(&candidate).exists() {
        candidate
    } else {
        DEFAULT_MANIFEST.to_string()
    }
}

/// Join the project directory and the resolved file name into an absolute
/// manifest path.
///
/// Relative project directories are anchored at `cwd`.
pub fn manifest_path(cwd: &Path, manifest_dir: &Path, file_name: &str) -> PathBuf {
    let dir = if manifest_dir.is_absolute() {
        manifest_dir.to_path_buf()
    } else {
        cwd.join(manifest_dir)
    };
    dir.join(file_name)
}
