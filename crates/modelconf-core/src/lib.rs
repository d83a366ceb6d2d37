//! # modelconf-core
//!
//! Parser and in-memory store for access-control model configuration text.
//!
//! The grammar is a small INI dialect: `[section]` headers, `key = value`
//! entries, `#` comments and `\` line continuation.  The result is a
//! case-insensitive `(section, option) -> value` map that a policy engine's
//! model loader queries through [`ModelConfig`].
//!
//! # Architecture overview (for beginners)
//!
//! Text flows through three stages, each in its own module:
//!
//! - **`parser::preprocess`** – Removes comments and merges continued
//!   physical lines into *logical* lines.  Cannot fail.
//!
//! - **`parser::tokenizer`** – Classifies each logical line as blank,
//!   section header, or entry, tracking the current section.
//!
//! - **`store`** – [`DefaultConfig`], the owned map built from the tokens,
//!   plus the typed accessors (`get_bool`, `get_int`, ...) and the `set`
//!   mutation entry point.
//!
//! ```rust
//! use modelconf_core::{DefaultConfig, ModelConfig};
//!
//! let cfg = DefaultConfig::create_from_text(
//!     "[request_definition]\nr = sub, obj, act\n",
//! ).unwrap();
//! assert_eq!(cfg.get("request_definition::r"), "sub, obj, act");
//! ```

pub mod error;
pub mod parser;
pub mod store;

// Re-export the most-used types at the crate root so callers can write
// `modelconf_core::DefaultConfig` instead of `modelconf_core::store::config::DefaultConfig`.
pub use error::{ConfigError, Result};
pub use store::config::DefaultConfig;
pub use store::key::{KeyPath, DEFAULT_SECTION};
pub use store::ModelConfig;
