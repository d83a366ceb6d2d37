//! Error taxonomy for loading and querying model configuration.
//!
//! Every variant is fatal to the operation that produced it.  Nothing in this
//! crate catches a [`ConfigError`] and downgrades it; the only "soft" miss is
//! [`crate::ModelConfig::get`] returning an empty string for an unset key.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, querying, or mutating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be opened or read.
    #[error("I/O error reading config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A non-blank, non-header line has no `=` separator.
    ///
    /// `line_number` is 1-based and points at the first physical line of the
    /// offending logical line.
    #[error("malformed line {line_number}: expected `key = value`, got `{content}`")]
    MalformedLine { line_number: usize, content: String },

    /// The same `(section, option)` pair appears twice in one source text.
    #[error("duplicate key `{option}` in section `{section}` at line {line_number}")]
    DuplicateKey {
        section: String,
        option: String,
        line_number: usize,
    },

    /// [`crate::ModelConfig::set`] was called with an empty or whitespace key.
    #[error("key is empty")]
    EmptyKey,

    /// A typed getter found text that does not parse as the requested type.
    #[error("value `{raw_value}` of key `{key}` is not a valid {target_type}")]
    TypeCoercion {
        key: String,
        raw_value: String,
        target_type: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;
