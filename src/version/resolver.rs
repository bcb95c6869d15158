//! Resolves the version reported by the CLI

use std::fmt;

use tracing::debug;

use crate::config::FALLBACK_VERSION;
use crate::version::error::MetadataError;
use crate::version::provider::MetadataProvider;

/// Version resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedVersion {
    /// Version read from the package metadata
    Installed(String),
    /// Metadata lookup failed
    Fallback,
}

impl ResolvedVersion {
    pub fn as_str(&self) -> &str {
        match self {
            ResolvedVersion::Installed(version) => version,
            ResolvedVersion::Fallback => FALLBACK_VERSION,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolvedVersion::Fallback)
    }
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Looks up the installed version, keeping the failure reason
pub fn lookup<P: MetadataProvider + ?Sized>(
    provider: &P,
    package: &str,
) -> Result<String, MetadataError> {
    provider.version(package)
}

/// Resolves the installed version, falling back to "dev" on any lookup error
pub fn resolve<P: MetadataProvider + ?Sized>(provider: &P, package: &str) -> ResolvedVersion {
    match lookup(provider, package) {
        Ok(version) => {
            debug!("Resolved {} version {}", package, version);
            ResolvedVersion::Installed(version)
        }
        Err(e) => {
            debug!(
                "Version lookup for {} failed, using {}: {}",
                package, FALLBACK_VERSION, e
            );
            ResolvedVersion::Fallback
        }
    }
}
