//! Typed accessors over a configuration store.
//!
//! [`ModelConfig`] is the capability a policy engine's model loader depends
//! on.  Implementors supply [`ModelConfig::get`] and [`ModelConfig::set`]; the
//! typed getters are provided on top of `get`.
//!
//! A missing key is **not** an error for `get`: it returns `""`, which callers
//! treat as "unset".  The typed getters do fail on a missing key, since `""`
//! is not a valid bool, integer, or float.

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::store::config::DefaultConfig;
use crate::store::key::KeyPath;

/// Splits list-valued options such as `r = sub, obj, act`.
const LIST_SEPARATOR: char = ',';

/// Read/write access to model configuration by `section::option` key.
///
/// The trait is object-safe so loaders can accept `&dyn ModelConfig`.
pub trait ModelConfig {
    /// Returns the stored value, or `""` if the key is not set.
    fn get(&self, key: &str) -> &str;

    /// Sets a value, overwriting any existing one.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyKey`] if `key` is empty or whitespace-only.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Owned copy of [`Self::get`].
    fn get_string(&self, key: &str) -> String {
        self.get(key).to_string()
    }

    /// Parses the value as `true` / `false` (case-insensitive).
    ///
    /// # Errors
    ///
    /// [`ConfigError::TypeCoercion`] for any other text, including `""`.
    fn get_bool(&self, key: &str) -> Result<bool> {
        let raw = self.get(key);
        parse_bool(raw).ok_or_else(|| coercion_error(key, raw, "bool"))
    }

    /// Parses the value as a signed 64-bit integer.
    ///
    /// # Errors
    ///
    /// [`ConfigError::TypeCoercion`] if the text is not an integer.
    fn get_int(&self, key: &str) -> Result<i64> {
        let raw = self.get(key);
        raw.trim()
            .parse()
            .map_err(|_| coercion_error(key, raw, "int"))
    }

    /// Parses the value as a 64-bit float.
    ///
    /// # Errors
    ///
    /// [`ConfigError::TypeCoercion`] if the text is not a float.
    fn get_float(&self, key: &str) -> Result<f64> {
        let raw = self.get(key);
        raw.trim()
            .parse()
            .map_err(|_| coercion_error(key, raw, "float"))
    }

    /// Splits the value on `,`.
    ///
    /// Returns `None` when the key is unset (or set to `""`), so "absent" is
    /// distinguishable from a present list.  Pieces are **not** trimmed.
    fn get_strings(&self, key: &str) -> Option<Vec<&str>> {
        let raw = self.get(key);
        if raw.is_empty() {
            None
        } else {
            Some(raw.split(LIST_SEPARATOR).collect())
        }
    }
}

impl ModelConfig for DefaultConfig {
    fn get(&self, key: &str) -> &str {
        self.lookup(&KeyPath::parse(key)).unwrap_or("")
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyKey);
        }
        let path = KeyPath::parse(key);
        debug!(key = %path, "set");
        self.upsert(path, value.to_string());
        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn coercion_error(key: &str, raw: &str, target_type: &'static str) -> ConfigError {
    ConfigError::TypeCoercion {
        key: key.to_string(),
        raw_value: raw.to_string(),
        target_type,
    }
}
