//! [`DefaultConfig`]: the owned `(section, option) -> value` store.

use std::collections::hash_map::{self, HashMap};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{ConfigError, Result};
use crate::parser::preprocess::preprocess;
use crate::parser::tokenizer::{Entry, Tokenizer};
use crate::store::key::KeyPath;

/// In-memory model configuration.
///
/// Section and option identifiers are stored lowercase, so every lookup is
/// case-insensitive.  The store is not internally synchronised: share it
/// read-only, or wrap it in a lock if it must be mutated concurrently.
///
/// # Examples
///
/// ```rust
/// use modelconf_core::{DefaultConfig, ModelConfig};
///
/// let text = "\
/// [request_definition]
/// r = sub, obj, act
/// ## a comment
/// [policy_effect]
/// e = some(where (p.eft == allow))
/// ";
/// let cfg = DefaultConfig::create_from_text(text).unwrap();
/// assert_eq!(cfg.get("policy_effect::e"), "some(where (p.eft == allow))");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultConfig {
    /// section -> (option -> value)
    data: HashMap<String, HashMap<String, String>>,
}

impl DefaultConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses model configuration text.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MalformedLine`] if an entry line lacks `=`.
    /// - [`ConfigError::DuplicateKey`] if a key is defined twice.
    pub fn create_from_text(text: &str) -> Result<Self> {
        Self::load(text, "<text>")
    }

    /// Reads and parses a model configuration file.
    ///
    /// The whole file is read into memory before parsing; the handle is
    /// released before the first line is tokenized.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise the same
    /// errors as [`Self::create_from_text`].
    pub fn create_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(&text, &path.display().to_string())
    }

    /// Iterates over section names (lowercase, unordered).
    pub fn sections(&self) -> impl Iterator<Item = &str> + '_ {
        self.data.keys().map(String::as_str)
    }

    /// Iterates over the `(option, value)` pairs of `section` (unordered).
    ///
    /// An unknown section yields nothing.
    pub fn options(&self, section: &str) -> impl Iterator<Item = (&str, &str)> + '_ {
        let section = KeyPath::new(section, "").section;
        self.data
            .get(&section)
            .into_iter()
            .flat_map(|options| options.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Total number of stored entries across all sections.
    pub fn len(&self) -> usize {
        self.data.values().map(HashMap::len).sum()
    }

    /// Returns `true` if no entry is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn lookup(&self, path: &KeyPath) -> Option<&str> {
        self.data
            .get(&path.section)?
            .get(&path.option)
            .map(String::as_str)
    }

    /// Overwrites or creates a value.  Used only by the post-load `set`.
    pub(crate) fn upsert(&mut self, path: KeyPath, value: String) {
        self.data
            .entry(path.section)
            .or_default()
            .insert(path.option, value);
    }

    // ── Loading ───────────────────────────────────────────────────────────────

    fn load(text: &str, origin: &str) -> Result<Self> {
        debug!(origin, "loading model configuration");

        let mut config = Self::new();
        let mut tokenizer = Tokenizer::new();
        for line in preprocess(text.lines()) {
            if let Some(entry) = tokenizer.feed(&line)? {
                config.insert_loaded(tokenizer.current_section(), entry)?;
            }
        }

        debug!(
            origin,
            sections = config.data.len(),
            entries = config.len(),
            "model configuration loaded"
        );
        Ok(config)
    }

    /// Load-time insertion: a repeated `(section, option)` is an error.
    fn insert_loaded(&mut self, section: &str, entry: Entry<'_>) -> Result<()> {
        let KeyPath { section, option } = KeyPath::new(section, entry.key);
        let options = self.data.entry(section.clone()).or_default();

        match options.entry(option) {
            hash_map::Entry::Occupied(slot) => Err(ConfigError::DuplicateKey {
                section,
                option: slot.key().clone(),
                line_number: entry.line_number,
            }),
            hash_map::Entry::Vacant(slot) => {
                trace!(
                    line = entry.line_number,
                    section = %section,
                    option = %slot.key(),
                    "entry"
                );
                slot.insert(entry.value.to_string());
                Ok(())
            }
        }
    }
}

impl FromStr for DefaultConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::create_from_text(s)
    }
}
