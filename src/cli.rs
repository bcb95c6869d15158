use std::io::Write;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

use crate::config::PACKAGE_NAME;
use crate::version::resolver::ResolvedVersion;

#[derive(Debug, Parser)]
#[command(name = "cli-mcp")]
#[command(
    about = "A command-line tool for MCP (Model Context Protocol) server management",
    disable_version_flag = true
)]
pub struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    pub version: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Formats the line printed by `--version`
pub fn version_line(version: &ResolvedVersion) -> String {
    format!("{PACKAGE_NAME} version: {version}")
}

/// Runs the parsed command, writing its output to `out`
pub fn run<W: Write>(cli: &Cli, version: &ResolvedVersion, out: &mut W) -> anyhow::Result<()> {
    if cli.version {
        writeln!(out, "{}", version_line(version))?;
    } else {
        writeln!(out, "{}", Cli::command().render_help())?;
    }
    out.flush()?;
    Ok(())
}
