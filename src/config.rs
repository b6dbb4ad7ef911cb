use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BootstrapError, Result};
use crate::params::{BootstrapParams, Selection};
use crate::tool::Tool;

const DEFAULT_TARGET_DIR: &str = ".";

/// Value of a tool key in a parameter file: `true`, `false` or a variant name.
///
/// `false` is not a variant name, so it falls back to `base` with a warning
/// like any other unsupported value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ToolValue {
    Flag(bool),
    Variant(String),
}

impl From<ToolValue> for Selection {
    fn from(value: ToolValue) -> Self {
        match value {
            ToolValue::Flag(true) => Selection::UseBase,
            ToolValue::Flag(false) => Selection::Requested(false.to_string()),
            ToolValue::Variant(variant) => Selection::Requested(variant),
        }
    }
}

/// TOML parameter file carrying the same keys as `sumup-js bootstrap`.
///
/// ```toml
/// target_dir = "web"
/// eslint = "react"
/// prettier = true
/// ```
///
/// Every key other than `target_dir` and `all` names a tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParamsFile {
    #[serde(default, alias = "targetDir")]
    pub target_dir: Option<PathBuf>,
    #[serde(default)]
    pub all: bool,
    #[serde(flatten)]
    pub tools: BTreeMap<String, ToolValue>,
}

impl ParamsFile {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| BootstrapError::ReadParams {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|source| BootstrapError::ParseParams {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Convert to bootstrap parameters, rejecting keys that are not tools.
    pub fn into_params(self) -> Result<BootstrapParams> {
        let target_dir = self
            .target_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET_DIR));
        let mut params = BootstrapParams::new(target_dir).with_all(self.all);

        for (name, value) in self.tools {
            let tool: Tool = name.parse()?;
            params.set(tool, value.into());
        }

        Ok(params)
    }
}

pub fn default_target_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TARGET_DIR)
}
