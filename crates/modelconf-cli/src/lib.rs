//! modelconf-cli library entry point.
//!
//! Holds the option types, output rendering, and [`run`] so that the binary
//! entry point in `main.rs` and the tests share the same code.

use std::io::Write;

use anyhow::Context;
use modelconf_core::{DefaultConfig, ModelConfig};
use tracing::{debug, info};

pub mod options;
pub mod render;

pub use options::{Assignment, CliOptions, OptionsError, OutputFormat, Query};

/// Loads the model, applies `--set` upserts, then prints queries or a dump.
///
/// # Errors
///
/// Returns an error if the model cannot be loaded, an assignment is rejected
/// by the store, or writing to `out` fails.
pub fn run<W: Write>(options: &CliOptions, out: &mut W) -> anyhow::Result<()> {
    let mut config = DefaultConfig::create_from_file(&options.model)
        .with_context(|| format!("failed to load model `{}`", options.model.display()))?;
    info!(
        model = %options.model.display(),
        entries = config.len(),
        "model loaded"
    );

    for assignment in &options.assignments {
        config
            .set(&assignment.key, &assignment.value)
            .with_context(|| format!("failed to set `{}`", assignment.key))?;
    }

    if options.queries.is_empty() {
        debug!(format = ?options.format, "dumping model");
        match options.format {
            OutputFormat::Text => render::render_text(&config, out)?,
            OutputFormat::Json => render::render_json(&config, out)?,
        }
    } else {
        for query in &options.queries {
            render::render_query(&config, query, out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use uuid::Uuid;

    struct TempModel {
        path: PathBuf,
    }

    impl TempModel {
        fn with_contents(contents: &str) -> Self {
            let path = std::env::temp_dir().join(format!("modelconf-cli-{}.conf", Uuid::new_v4()));
            fs::write(&path, contents).unwrap();
            Self { path }
        }
    }

    impl Drop for TempModel {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.path);
        }
    }

    const MODEL: &str = "\
[request_definition]
r = sub, obj, act
[policy_effect]
e = some(where (p.eft == allow))
";

    fn run_to_string(options: &CliOptions) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        run(options, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn test_run_without_queries_dumps_text() {
        let file = TempModel::with_contents(MODEL);
        let out = run_to_string(&CliOptions::new(&file.path)).unwrap();
        assert!(out.starts_with("[policy_effect]\n"));
        assert!(out.contains("r = sub, obj, act\n"));
    }

    #[test]
    fn test_run_answers_queries_in_order() {
        let file = TempModel::with_contents(MODEL);
        let mut options = CliOptions::new(&file.path);
        options.queries = vec![
            Query::Get("policy_effect::e".into()),
            Query::Strings("request_definition::r".into()),
        ];
        let out = run_to_string(&options).unwrap();
        assert_eq!(out, "some(where (p.eft == allow))\nsub\n obj\n act\n");
    }

    #[test]
    fn test_run_applies_assignments_before_queries() {
        let file = TempModel::with_contents(MODEL);
        let mut options = CliOptions::new(&file.path);
        options.assignments = vec![Assignment::parse("policy_effect::e=deny").unwrap()];
        options.queries = vec![Query::Get("policy_effect::e".into())];
        assert_eq!(run_to_string(&options).unwrap(), "deny\n");
    }

    #[test]
    fn test_run_reports_model_path_on_load_failure() {
        let file = TempModel::with_contents("[s]\nk=1\nk=2\n");
        let err = run_to_string(&CliOptions::new(&file.path)).unwrap_err();
        let rendered = format!("{err:#}");
        assert!(rendered.contains("failed to load model"), "got: {rendered}");
        assert!(rendered.contains("duplicate key"), "got: {rendered}");
    }
}
