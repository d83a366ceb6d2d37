//! Text-to-token stages of the model configuration grammar.

pub mod preprocess;
pub mod tokenizer;

pub use preprocess::{preprocess, strip_comment, LogicalLine, COMMENT_MARKER, CONTINUATION_MARKER};
pub use tokenizer::{Entry, Token, Tokenizer};
