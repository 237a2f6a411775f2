use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `doclint` binary.
#[derive(Debug, Parser)]
#[command(
    name = "doclint",
    about = "Lint markdown API docs into a validated JSON schema",
    disable_version_flag = true,
    after_help = "To save the parsed JSON schema:\n  doclint <PATH> --version=1.2.3 --outfile=electron.json\n\n\
                  To verify translated docs with an existing parsed JSON schema:\n  doclint <PATH> --infile=electron.json"
)]
pub struct Cli {
    /// Docs directory, or a checkout containing `docs/api`
    pub path: PathBuf,

    /// Version stamped on every record (falls back to config, then $npm_package_version)
    #[arg(long, value_name = "VERSION")]
    pub version: Option<String>,

    /// Write the linted records to this JSON file
    #[arg(long, value_name = "FILE", conflicts_with = "infile")]
    pub outfile: Option<PathBuf>,

    /// Check translated docs against a previously written JSON file
    #[arg(long, value_name = "FILE")]
    pub infile: Option<PathBuf>,

    /// Quiet mode (no spinner, errors only in logs)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file to use instead of ./doclint.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
