use std::path::Path;

use anyhow::Context;
use doclint_config::DoclintConfig;
use doclint_parser::{DEFAULT_VERSION, LintOptions, lint};
use doclint_schema::ApiValidator;

use crate::cli::Cli;
use crate::commands::{Outcome, display_path, print_reports};
use crate::loader;
use crate::progress::Progress;

/// Lint the docs under `cli.path`, then write `--outfile` when every record is valid.
pub async fn handle(cli: &Cli, config: &DoclintConfig, cwd: &Path) -> anyhow::Result<Outcome> {
    let version = config.lint.resolve_version(cli.version.as_deref());
    if cli.outfile.is_some() && version.is_none() {
        anyhow::bail!("`version` is required if `outfile` is specified");
    }

    let options = LintOptions {
        version: version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        aliases: config.slugs.slug_aliases()?,
        urls: config.lint.url_templates()?,
    };
    let validator = ApiValidator::new().context("failed to compile the API schema")?;

    let docs_path = cwd.join(&cli.path);
    let spinner = Progress::spinner("Parsing documentation");
    let docs = match loader::load_docs(&loader::docs_root(&docs_path)).await {
        Ok(docs) => docs,
        Err(error) => {
            spinner.finish_err("failed to load documentation");
            return Err(error).context("failed to load documentation");
        }
    };

    spinner.set_message(&format!("Linting {} documents", docs.len()));
    let apis = lint(&docs, &options, &validator);
    spinner.finish_clear();

    print_reports(&apis);
    let outcome = Outcome::from_verdicts(&apis);
    if outcome == Outcome::Invalid {
        return Ok(outcome);
    }

    match &cli.outfile {
        Some(outfile) => {
            let target = cwd.join(outfile);
            let json = serde_json::to_string_pretty(&apis).context("failed to serialize APIs")?;
            tokio::fs::write(&target, json)
                .await
                .with_context(|| format!("failed to write {}", target.display()))?;
            tracing::info!(path = %target.display(), apis = apis.len(), "schema written");
            println!("Created {}", display_path(&target, cwd).display());
        }
        None => {
            println!("Docs are good to go!");
            println!();
            println!("To write the docs schema to a file, specify `version` and `outfile`:");
            println!();
            println!(
                "doclint {} --version=1.2.3 --outfile=electron.json",
                display_path(&docs_path, cwd).display()
            );
        }
    }

    Ok(outcome)
}
