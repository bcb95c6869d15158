//! Cargo install registry reader for locally installed package versions

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::IgnoredAny;
use tracing::debug;

use crate::config::install_registry_path;
use crate::version::error::MetadataError;
use crate::version::provider::MetadataProvider;

/// Reads `.crates2.json`, the record cargo keeps of `cargo install`ed packages
pub struct CargoInstallRegistry {
    path: PathBuf,
}

impl Default for CargoInstallRegistry {
    fn default() -> Self {
        Self::new(install_registry_path())
    }
}

impl CargoInstallRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Top-level layout of `.crates2.json`
#[derive(Debug, Deserialize)]
struct InstallRegistryFile {
    /// Keyed by "<name> <version> (<source>)"
    installs: HashMap<String, IgnoredAny>,
}

/// One installed package, decoded from an install key
#[derive(Debug, PartialEq)]
struct InstalledPackage<'a> {
    name: &'a str,
    version: &'a str,
    source: &'a str,
}

fn parse_install_key(key: &str) -> Result<InstalledPackage<'_>, MetadataError> {
    let malformed = || MetadataError::Malformed(format!("invalid install key: {key:?}"));

    let mut parts = key.splitn(3, ' ');
    let name = parts.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;
    let version = parts.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;
    let source = parts
        .next()
        .and_then(|s| s.strip_prefix('('))
        .and_then(|s| s.strip_suffix(')'))
        .filter(|s| !s.is_empty())
        .ok_or_else(malformed)?;

    Ok(InstalledPackage {
        name,
        version,
        source,
    })
}

impl MetadataProvider for CargoInstallRegistry {
    fn version(&self, package: &str) -> Result<String, MetadataError> {
        debug!("Reading install registry: {:?}", self.path);

        let content = std::fs::read_to_string(&self.path).map_err(|source| {
            MetadataError::RegistryUnavailable {
                path: self.path.clone(),
                source,
            }
        })?;

        let registry: InstallRegistryFile = serde_json::from_str(&content)?;

        let installed = registry
            .installs
            .keys()
            .map(|key| parse_install_key(key))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Found {} installed packages", installed.len());

        let entry = installed
            .into_iter()
            .find(|entry| entry.name == package)
            .ok_or_else(|| MetadataError::NotInstalled(package.to_string()))?;

        semver::Version::parse(entry.version).map_err(|e| {
            MetadataError::Malformed(format!(
                "version {:?} of {} is not valid semver: {}",
                entry.version, package, e
            ))
        })?;

        debug!(
            "Package {} {} installed from {}",
            package, entry.version, entry.source
        );

        Ok(entry.version.to_string())
    }
}
