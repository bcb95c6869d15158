use std::path::PathBuf;

// =============================================================================
// Package identity
// =============================================================================

/// Package name looked up in the install registry
pub const PACKAGE_NAME: &str = "cli-mcp";

/// Version reported when the package metadata cannot be read
pub const FALLBACK_VERSION: &str = "dev";

// =============================================================================
// Metadata and logging
// =============================================================================

/// File inside the cargo home that records installed packages
pub const INSTALL_REGISTRY_FILE: &str = ".crates2.json";

/// Log filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Returns the cargo home directory.
/// Uses $CARGO_HOME if set, otherwise falls back to ~/.cargo,
/// or ./.cargo if neither is available.
pub fn cargo_home() -> PathBuf {
    cargo_home_with_env(std::env::var("CARGO_HOME").ok(), dirs::home_dir())
}

/// Returns the path to cargo's install registry.
pub fn install_registry_path() -> PathBuf {
    cargo_home().join(INSTALL_REGISTRY_FILE)
}

fn cargo_home_with_env(cargo_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    cargo_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".cargo")))
        .unwrap_or_else(|| PathBuf::from(".cargo"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cargo_home_with_env_uses_cargo_home_when_set() {
        let path = cargo_home_with_env(
            Some("/opt/cargo".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/opt/cargo"));
    }

    #[test]
    fn cargo_home_with_env_ignores_empty_cargo_home() {
        let path = cargo_home_with_env(Some(String::new()), Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.cargo"));
    }

    #[test]
    fn cargo_home_with_env_falls_back_to_home_dot_cargo() {
        let path = cargo_home_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.cargo"));
    }

    #[test]
    fn cargo_home_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = cargo_home_with_env(None, None);
        assert_eq!(path, PathBuf::from(".cargo"));
    }
}
