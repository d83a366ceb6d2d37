//! Validated runtime options for the `modelconf` binary.
//!
//! [`CliOptions`] is a plain struct built once from parsed arguments.  Keeping
//! it free of `clap` types lets tests construct it directly.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning raw arguments into [`CliOptions`].
#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    /// A `--set` argument had no `=`.
    #[error("invalid --set argument `{0}`: expected KEY=VALUE")]
    InvalidAssignment(String),

    /// A `--set` argument had an empty key.
    #[error("invalid --set argument `{0}`: key is empty")]
    EmptyAssignmentKey(String),

    /// `--format` named an unknown format.
    #[error("unknown output format `{0}`: expected `text` or `json`")]
    UnknownFormat(String),
}

/// How a full dump is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `[section]` headers followed by `option = value` lines.
    #[default]
    Text,
    /// An object of objects, keyed by section then option.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(OptionsError::UnknownFormat(s.to_string())),
        }
    }
}

/// A single lookup requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// `--get KEY`: print the raw value.
    Get(String),
    /// `--strings KEY`: print the comma-separated pieces.
    Strings(String),
}

/// A `KEY=VALUE` pair from `--set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub key: String,
    pub value: String,
}

impl Assignment {
    /// Splits `KEY=VALUE` on the first `=`.
    ///
    /// The key is trimmed; the value is kept verbatim so it can carry
    /// leading or trailing whitespace.
    ///
    /// # Errors
    ///
    /// [`OptionsError::InvalidAssignment`] without `=`,
    /// [`OptionsError::EmptyAssignmentKey`] with a blank key.
    pub fn parse(raw: &str) -> Result<Self, OptionsError> {
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| OptionsError::InvalidAssignment(raw.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(OptionsError::EmptyAssignmentKey(raw.to_string()));
        }
        Ok(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

/// Everything the binary needs to do one run.
#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    /// Model file to load.
    pub model: PathBuf,
    /// Upserts applied after loading, in command-line order.
    pub assignments: Vec<Assignment>,
    /// Lookups to print.  When empty, the whole store is dumped.
    pub queries: Vec<Query>,
    /// Format of the full dump.
    pub format: OutputFormat,
}

impl CliOptions {
    /// Creates options that dump `model` as text.
    pub fn new(model: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            assignments: Vec::new(),
            queries: Vec::new(),
            format: OutputFormat::Text,
        }
    }
}
