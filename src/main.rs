use clap::Parser;
use tracing::info;

use cli_mcp::cli::{Cli, run};
use cli_mcp::config::PACKAGE_NAME;
use cli_mcp::logging::init_logging;
use cli_mcp::version::providers::CargoInstallRegistry;
use cli_mcp::version::resolver::resolve;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_file.as_deref())?;

    let registry = CargoInstallRegistry::default();
    let version = resolve(&registry, PACKAGE_NAME);
    if version.is_fallback() {
        info!(
            "No usable metadata for {} in {:?}, reporting version {}",
            PACKAGE_NAME,
            registry.path(),
            version
        );
    } else {
        info!(
            "Resolved {} version {} from {:?}",
            PACKAGE_NAME,
            version,
            registry.path()
        );
    }

    run(&cli, &version, &mut std::io::stdout().lock())
}
