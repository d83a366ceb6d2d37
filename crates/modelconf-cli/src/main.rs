//! `modelconf` — inspect and query access-control model configuration files.
//!
//! # Usage
//!
//! ```text
//! modelconf [OPTIONS] <MODEL>
//!
//! Options:
//!   --get <KEY>          Print the value of KEY (repeatable)
//!   --strings <KEY>      Print the comma-separated pieces of KEY (repeatable)
//!   --set <KEY=VALUE>    Override a value after loading (repeatable)
//!   --format <FORMAT>    Dump format when no query is given [default: text]
//!   --log-level <LEVEL>  Log level when RUST_LOG is unset [default: warn]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable           | Default | Description                 |
//! |--------------------|---------|-----------------------------|
//! | `MODELCONF_MODEL`  |         | Model file to load          |
//! | `MODELCONF_FORMAT` | `text`  | Dump format (`text`/`json`) |
//! | `MODELCONF_LOG`    | `warn`  | Fallback log level          |
//!
//! Logs go to stderr so stdout stays pipe-friendly.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use modelconf_cli::{run, Assignment, CliOptions, OutputFormat, Query};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Inspect and query access-control model configuration files.
#[derive(Debug, Parser)]
#[command(
    name = "modelconf",
    about = "Inspect and query access-control model configuration files",
    version
)]
struct Cli {
    /// Path to the model configuration file.
    #[arg(env = "MODELCONF_MODEL")]
    model: PathBuf,

    /// Print the value of KEY (`section::option` or bare `option`).
    #[arg(long = "get", value_name = "KEY")]
    gets: Vec<String>,

    /// Print the comma-separated pieces of KEY, one per line.
    #[arg(long = "strings", value_name = "KEY")]
    strings: Vec<String>,

    /// Override a value after loading, as `KEY=VALUE`.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    sets: Vec<String>,

    /// Dump format used when no `--get` / `--strings` is given.
    #[arg(long, default_value = "text", env = "MODELCONF_FORMAT")]
    format: String,

    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn", env = "MODELCONF_LOG")]
    log_level: String,
}

impl Cli {
    /// Converts the parsed CLI arguments into [`CliOptions`].
    ///
    /// # Errors
    ///
    /// Returns an error if a `--set` argument or `--format` is invalid.
    fn into_options(self) -> anyhow::Result<CliOptions> {
        let format: OutputFormat = self.format.parse()?;
        let assignments = self
            .sets
            .iter()
            .map(|raw| Assignment::parse(raw))
            .collect::<Result<Vec<_>, _>>()?;
        let queries = self
            .gets
            .into_iter()
            .map(Query::Get)
            .chain(self.strings.into_iter().map(Query::Strings))
            .collect();

        Ok(CliOptions {
            model: self.model,
            assignments,
            queries,
            format,
        })
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // `RUST_LOG` wins; otherwise fall back to --log-level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.as_str())),
        )
        .with_writer(io::stderr)
        .init();

    let options = cli.into_options()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&options, &mut out)?;
    out.flush()?;
    Ok(())
}
