//! The configuration store and the typed accessors layered over it.
//!
//! # Two insertion paths (for beginners)
//!
//! Values enter the store in two ways, and they deliberately disagree about
//! duplicates:
//!
//! - **Loading** (`create_from_text` / `create_from_file`) rejects a key that
//!   appears twice in the same text with [`crate::ConfigError::DuplicateKey`].
//!   A repeated key in a security model is almost always an authoring mistake.
//! - **Mutation** ([`ModelConfig::set`]) after loading is an upsert: it
//!   overwrites an existing value or creates a new one.

pub mod accessors;
pub mod config;
pub mod key;

pub use accessors::ModelConfig;
pub use config::DefaultConfig;
pub use key::{KeyPath, DEFAULT_SECTION};
