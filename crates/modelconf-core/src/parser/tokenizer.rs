//! Logical-line classification.
//!
//! The tokenizer is a tiny state machine whose only state is the *current
//! section*, initialised to [`DEFAULT_SECTION`].  Each logical line is one of:
//!
//! | Line            | Token               | State change             |
//! |-----------------|---------------------|--------------------------|
//! | empty           | [`Token::Blank`]    | none                     |
//! | `[name]`        | [`Token::Section`]  | current section = `name` |
//! | `key = value`   | [`Token::Entry`]    | none                     |
//!
//! Anything else is a [`ConfigError::MalformedLine`].

use tracing::trace;

use crate::error::{ConfigError, Result};
use crate::parser::preprocess::{strip_comment, LogicalLine};
use crate::store::key::DEFAULT_SECTION;

/// Separates an entry's key from its value.  Only the first one counts.
const KEY_VALUE_SEPARATOR: char = '=';

/// A key/value pair extracted from one logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    /// Physical line the entry started on.
    pub line_number: usize,
    /// Trimmed text left of the first `=`.
    pub key: &'a str,
    /// Trimmed text right of the first `=`, comment-free.
    pub value: &'a str,
}

/// Classification of a single logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Blank,
    /// Section name as written, without the brackets.
    Section(&'a str),
    Entry(Entry<'a>),
}

impl<'a> Token<'a> {
    /// Classifies `line` without touching any tokenizer state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedLine`] if the line is neither blank,
    /// a section header, nor contains a `=` separator.
    pub fn classify(line: &'a LogicalLine) -> Result<Self> {
        let text = line.text.trim();
        if text.is_empty() {
            return Ok(Token::Blank);
        }

        if let Some(name) = text.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            return Ok(Token::Section(name));
        }

        let (key, value) =
            text.split_once(KEY_VALUE_SEPARATOR)
                .ok_or_else(|| ConfigError::MalformedLine {
                    line_number: line.line_number,
                    content: text.to_string(),
                })?;

        Ok(Token::Entry(Entry {
            line_number: line.line_number,
            key: key.trim(),
            // A second comment pass is a no-op for preprocessed input but
            // keeps the tokenizer correct when fed raw lines.
            value: strip_comment(value),
        }))
    }
}

/// Stateful tokenizer that tracks which section entries belong to.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    current_section: String,
}

impl Tokenizer {
    /// Creates a tokenizer positioned in the implicit default section.
    pub fn new() -> Self {
        Self {
            current_section: DEFAULT_SECTION.to_string(),
        }
    }

    /// The section that the next entry will be stored under.
    pub fn current_section(&self) -> &str {
        &self.current_section
    }

    /// Consumes one logical line.
    ///
    /// Returns `Some(entry)` for key/value lines and `None` for blank lines
    /// and section headers (which update [`Self::current_section`]).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedLine`] for lines without a separator.
    /// The tokenizer state is left unchanged in that case.
    pub fn feed<'l>(&mut self, line: &'l LogicalLine) -> Result<Option<Entry<'l>>> {
        match Token::classify(line)? {
            Token::Blank => Ok(None),
            Token::Section(name) => {
                trace!(line = line.line_number, section = name, "section header");
                self.current_section = name.to_lowercase();
                Ok(None)
            }
            Token::Entry(entry) => Ok(Some(entry)),
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
