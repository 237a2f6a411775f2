use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use doclint_config::DoclintConfig;
use doclint_core::Verdict;

use crate::cli::Cli;

pub mod i18n;
pub mod lint;

/// Result of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every record is valid.
    Clean,
    /// At least one record failed.
    Invalid,
}

impl Outcome {
    #[must_use]
    pub fn from_verdicts<V: Verdict>(records: &[V]) -> Self {
        if records.iter().all(Verdict::valid) {
            Self::Clean
        } else {
            Self::Invalid
        }
    }

    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Clean => ExitCode::SUCCESS,
            Self::Invalid => ExitCode::from(1),
        }
    }
}

/// Route to cross-validation when `--infile` is given, else to plain linting.
pub async fn dispatch(cli: &Cli, config: &DoclintConfig) -> anyhow::Result<Outcome> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    match &cli.infile {
        Some(infile) => i18n::handle(cli, config, &cwd.join(infile), &cwd).await,
        None => lint::handle(cli, config, &cwd).await,
    }
}

/// One report per record, on stderr.
pub fn print_reports<V: Verdict>(records: &[V]) {
    for record in records {
        eprintln!("{}", record.report());
    }
}

/// `path` relative to `cwd` when it lies beneath it.
#[must_use]
pub fn display_path(path: &Path, cwd: &Path) -> PathBuf {
    path.strip_prefix(cwd)
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
}
