//! Output formatting for dumps and queries.
//!
//! All output is sorted by section then option so that dumps are stable
//! across runs (the store itself is unordered).

use std::collections::BTreeMap;
use std::io::{self, Write};

use modelconf_core::{DefaultConfig, ModelConfig};

use crate::options::Query;

/// Printed by `--strings` for an unset key.
pub const ABSENT_MARKER: &str = "<absent>";

/// Sorted view of the whole store: section -> option -> value.
pub fn snapshot(config: &DefaultConfig) -> BTreeMap<&str, BTreeMap<&str, &str>> {
    config
        .sections()
        .map(|section| (section, config.options(section).collect()))
        .collect()
}

/// Writes the store as `[section]` blocks of `option = value` lines.
pub fn render_text<W: Write>(config: &DefaultConfig, out: &mut W) -> io::Result<()> {
    for (idx, (section, options)) in snapshot(config).into_iter().enumerate() {
        if idx > 0 {
            writeln!(out)?;
        }
        writeln!(out, "[{section}]")?;
        for (option, value) in options {
            writeln!(out, "{option} = {value}")?;
        }
    }
    Ok(())
}

/// Writes the store as a pretty-printed JSON object of objects.
pub fn render_json<W: Write>(config: &DefaultConfig, out: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &snapshot(config))?;
    writeln!(out)?;
    Ok(())
}

/// Answers one `--get` / `--strings` query.
pub fn render_query<W: Write>(config: &dyn ModelConfig, query: &Query, out: &mut W) -> io::Result<()> {
    match query {
        Query::Get(key) => writeln!(out, "{}", config.get(key)),
        Query::Strings(key) => match config.get_strings(key) {
            None => writeln!(out, "{ABSENT_MARKER}"),
            Some(pieces) => {
                for piece in pieces {
                    writeln!(out, "{piece}")?;
                }
                Ok(())
            }
        },
    }
}
