//! Key path resolution: `section::option` or bare `option`.

use std::fmt;

/// Name of the implicit section used for entries before any header and for
/// keys without a `section::` prefix.
pub const DEFAULT_SECTION: &str = "default";

/// Separates the section from the option in a lookup key.
const PATH_SEPARATOR: &str = "::";

/// A resolved, case-folded `(section, option)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    pub section: String,
    pub option: String,
}

impl KeyPath {
    /// Builds a path from already-split parts, folding both to lowercase and
    /// substituting [`DEFAULT_SECTION`] for an empty section.
    pub fn new(section: &str, option: &str) -> Self {
        let section = if section.is_empty() {
            DEFAULT_SECTION.to_string()
        } else {
            section.to_lowercase()
        };
        Self {
            section,
            option: option.to_lowercase(),
        }
    }

    /// Resolves a lookup key.
    ///
    /// Only the first `::` separates; anything after it belongs to the option.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use modelconf_core::KeyPath;
    ///
    /// let path = KeyPath::parse("Policy_Effect::E");
    /// assert_eq!(path.section, "policy_effect");
    /// assert_eq!(path.option, "e");
    ///
    /// let bare = KeyPath::parse("timeout");
    /// assert_eq!(bare.section, "default");
    /// ```
    pub fn parse(key: &str) -> Self {
        match key.split_once(PATH_SEPARATOR) {
            Some((section, option)) => Self::new(section, option),
            None => Self::new(DEFAULT_SECTION, key),
        }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.section, PATH_SEPARATOR, self.option)
    }
}
