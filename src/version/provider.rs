//! Provider trait for looking up installed package metadata

#[cfg(test)]
use mockall::automock;

use crate::version::error::MetadataError;

/// Trait for reading the installed version of a package
#[cfg_attr(test, automock)]
pub trait MetadataProvider {
    /// Looks up the installed version of a package
    ///
    /// # Arguments
    /// * `package` - The package name as recorded by the registry (e.g., "cli-mcp")
    ///
    /// # Returns
    /// * `Ok(String)` - The version string as recorded
    /// * `Err(MetadataError)` - If the package is absent or the registry cannot be read
    fn version(&self, package: &str) -> Result<String, MetadataError>;
}
