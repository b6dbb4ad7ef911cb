use serde::Serialize;
use std::path::PathBuf;
use tokio::task::JoinSet;

use crate::diagnostics::Diagnostics;
use crate::error::{BootstrapError, Result};
use crate::params::{BootstrapParams, Selection};
use crate::tool::{Tool, BASE_VARIANT, CONFIG_PACKAGE};

/// Legacy babel config, kept for babel versions without `babel.config.js` support.
pub const BABELRC_FILENAME: &str = ".babelrc";

#[derive(Serialize)]
struct Babelrc {
    presets: [&'static str; 1],
}

/// A config file ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Pick the variant to use for `tool`, or `None` if it was not selected.
///
/// Unsupported variants are reported through `diagnostics` and replaced with
/// `base`.
pub fn resolve_variant(
    tool: Tool,
    selection: &Selection,
    diagnostics: &dyn Diagnostics,
) -> Option<&'static str> {
    match selection {
        Selection::Unselected => None,
        Selection::UseBase => Some(BASE_VARIANT),
        Selection::Requested(requested) => {
            let variant = tool.variant(requested);

            if variant.is_none() {
                diagnostics.warn(&format!(
                    "Config {requested} is not available for {tool}. Falling back to base config."
                ));
            }
            Some(variant.unwrap_or(BASE_VARIANT))
        }
    }
}

/// Resolve every requested tool to a supported variant, in write order.
pub fn resolve(
    params: &BootstrapParams,
    diagnostics: &dyn Diagnostics,
) -> Vec<(Tool, &'static str)> {
    params
        .requested()
        .iter()
        .filter_map(|(tool, selection)| {
            resolve_variant(*tool, selection, diagnostics).map(|variant| (*tool, variant))
        })
        .collect()
}

/// One-line module re-exporting `variant` from `sumup-js/<tool>`.
pub fn render_export(tool: Tool, variant: &str) -> String {
    format!("module.exports = require('{CONFIG_PACKAGE}/{tool}').{variant}")
}

/// `{"presets": ["./babel.config"]}` with 2-space indentation.
pub fn render_babelrc() -> Result<String> {
    let babelrc = Babelrc {
        presets: ["./babel.config"],
    };
    Ok(serde_json::to_string_pretty(&babelrc)?)
}

/// Build the files a bootstrap run writes, without touching the disk.
pub fn plan(params: &BootstrapParams, diagnostics: &dyn Diagnostics) -> Result<Vec<ConfigFile>> {
    let target_dir = params.target_dir();
    let mut files = Vec::new();

    for (tool, variant) in resolve(params, diagnostics) {
        files.push(ConfigFile {
            path: target_dir.join(tool.filename()),
            contents: render_export(tool, variant),
        });

        if tool == Tool::Babel {
            files.push(ConfigFile {
                path: target_dir.join(BABELRC_FILENAME),
                contents: render_babelrc()?,
            });
        }
    }

    Ok(files)
}

/// Write all files concurrently and wait for every write to finish.
///
/// The first failure observed is returned once all writes are done. Files
/// that were written before a failure are left in place. On success the
/// written paths are returned in plan order.
pub async fn write_all(files: Vec<ConfigFile>) -> Result<Vec<PathBuf>> {
    let mut writes = JoinSet::new();
    for (index, file) in files.into_iter().enumerate() {
        writes.spawn(async move {
            let result = tokio::fs::write(&file.path, file.contents.as_bytes()).await;
            (index, file.path, result)
        });
    }

    let mut written = Vec::new();
    let mut first_error = None;

    while let Some(joined) = writes.join_next().await {
        let error = match joined {
            Ok((index, path, Ok(()))) => {
                tracing::debug!(path = %path.display(), "wrote config file");
                written.push((index, path));
                continue;
            }
            Ok((_, path, Err(source))) => {
                tracing::debug!(path = %path.display(), error = %source, "config write failed");
                BootstrapError::Write { path, source }
            }
            Err(join_error) => BootstrapError::Task(join_error),
        };
        if first_error.is_none() {
            first_error = Some(error);
        }
    }

    if let Some(error) = first_error {
        return Err(error);
    }

    written.sort_by_key(|(index, _)| *index);
    Ok(written.into_iter().map(|(_, path)| path).collect())
}

/// Write the selected tools' config stubs into the target directory.
///
/// Existing files are overwritten. The target directory must already exist.
///
/// Selecting a linter variant without a matching formatter variant (or the
/// other way round) is not checked; the generated configs can disagree.
pub async fn bootstrap(
    params: &BootstrapParams,
    diagnostics: &dyn Diagnostics,
) -> Result<Vec<PathBuf>> {
    let files = plan(params, diagnostics)?;
    tracing::debug!(
        target_dir = %params.target_dir().display(),
        files = files.len(),
        "bootstrapping configs"
    );
    write_all(files).await
}
