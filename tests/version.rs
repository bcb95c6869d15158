use cli_mcp::version::error::MetadataError;
use cli_mcp::version::providers::CargoInstallRegistry;
use cli_mcp::version::resolver::{ResolvedVersion, lookup, resolve};
use tempfile::TempDir;

#[test]
fn resolve_reads_version_from_install_registry() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".crates2.json");
    std::fs::write(
        &path,
        r#"{"installs": {"cli-mcp 0.2.0 (path+file:///work/cli-mcp)": {}}}"#,
    )
    .unwrap();
    let registry = CargoInstallRegistry::new(&path);

    let version = resolve(&registry, "cli-mcp");

    assert_eq!(version, ResolvedVersion::Installed("0.2.0".to_string()));
}

#[test]
fn resolve_falls_back_when_registry_is_missing() {
    let temp_dir = TempDir::new().unwrap();
    let registry = CargoInstallRegistry::new(temp_dir.path().join(".crates2.json"));

    // lookup keeps the reason, resolve collapses it
    assert!(matches!(
        lookup(&registry, "cli-mcp"),
        Err(MetadataError::RegistryUnavailable { .. })
    ));
    assert_eq!(resolve(&registry, "cli-mcp").as_str(), "dev");
}

#[test]
fn resolve_falls_back_when_package_is_absent() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(".crates2.json");
    std::fs::write(
        &path,
        r#"{"installs": {"ripgrep 14.1.0 (registry+https://github.com/rust-lang/crates.io-index)": {}}}"#,
    )
    .unwrap();
    let registry = CargoInstallRegistry::new(&path);

    assert!(matches!(
        lookup(&registry, "cli-mcp"),
        Err(MetadataError::NotInstalled(_))
    ));
    assert_eq!(resolve(&registry, "cli-mcp"), ResolvedVersion::Fallback);
}
