//! Comment stripping and line continuation.
//!
//! Turns physical lines into *logical* lines:
//!
//! ```text
//! physical                          logical
//! ──────────────────────────────    ─────────────────────────────
//! 1: # header comment               1: ""
//! 2: m = r.sub == p.sub && \        2: "m = r.sub == p.sub && r.obj == p.obj"
//! 3:     r.obj == p.obj  # tail
//! 4: [policy_effect]                4: "[policy_effect]"
//! ```
//!
//! Each logical line remembers the physical line it started on so later
//! stages can report precise diagnostics.  This stage never fails.

use tracing::warn;

/// Everything from this character to the end of the line is a comment.
pub const COMMENT_MARKER: char = '#';

/// A line ending in this character (after comment removal) continues on the
/// next physical line.
pub const CONTINUATION_MARKER: char = '\\';

/// A comment-free line, possibly assembled from several physical lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    /// 1-based number of the first physical line that contributed to `text`.
    pub line_number: usize,
    /// The merged content.  Empty for blank and comment-only lines.
    pub text: String,
}

/// Removes everything from the first [`COMMENT_MARKER`] onwards and trims the
/// remainder.
///
/// # Examples
///
/// ```rust
/// use modelconf_core::parser::strip_comment;
///
/// assert_eq!(strip_comment("  e = allow  # effect"), "e = allow");
/// assert_eq!(strip_comment("# only a comment"), "");
/// ```
pub fn strip_comment(line: &str) -> &str {
    match line.find(COMMENT_MARKER) {
        Some(idx) => line[..idx].trim(),
        None => line.trim(),
    }
}

/// Converts raw physical lines into logical lines.
///
/// A line ending in [`CONTINUATION_MARKER`] has the marker dropped and is
/// concatenated, with no separator, to the following line.  The output keeps
/// input order and includes empty logical lines.
///
/// If the final physical line ends with a continuation marker, whatever was
/// accumulated is emitted as the last logical line.
pub fn preprocess<I, S>(lines: I) -> Vec<LogicalLine>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut logical = Vec::new();
    let mut pending: Option<LogicalLine> = None;

    for (idx, raw) in lines.into_iter().enumerate() {
        let stripped = strip_comment(raw.as_ref());
        let current = pending.get_or_insert_with(|| LogicalLine {
            line_number: idx + 1,
            text: String::new(),
        });

        match stripped.strip_suffix(CONTINUATION_MARKER) {
            Some(head) => current.text.push_str(head),
            None => {
                current.text.push_str(stripped);
                logical.extend(pending.take());
            }
        }
    }

    if let Some(dangling) = pending {
        warn!(
            line = dangling.line_number,
            "input ends with a continuation marker; keeping the partial line"
        );
        logical.push(dangling);
    }

    logical
}
