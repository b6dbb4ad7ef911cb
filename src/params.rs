use std::path::{Path, PathBuf};

use crate::tool::Tool;

/// What the caller asked for a single tool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Tool not requested; nothing is written for it.
    #[default]
    Unselected,
    /// Use the `base` variant.
    UseBase,
    /// Use the named variant, falling back to `base` when unsupported.
    Requested(String),
}

impl Selection {
    pub fn is_selected(&self) -> bool {
        !matches!(self, Selection::Unselected)
    }
}

impl From<Option<String>> for Selection {
    /// `None` is a bare flag (`--eslint`), `Some` carries a variant (`--eslint react`).
    fn from(value: Option<String>) -> Self {
        match value {
            Some(variant) => Selection::Requested(variant),
            None => Selection::UseBase,
        }
    }
}

/// Inputs of one bootstrap run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapParams {
    pub target_dir: PathBuf,
    /// Forces every tool to `base`, overriding the per-tool selections.
    pub all: bool,
    pub eslint: Selection,
    pub prettier: Selection,
    pub babel: Selection,
}

impl BootstrapParams {
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            all: false,
            eslint: Selection::Unselected,
            prettier: Selection::Unselected,
            babel: Selection::Unselected,
        }
    }

    pub fn target_dir(&self) -> &Path {
        &self.target_dir
    }

    pub fn with_all(mut self, all: bool) -> Self {
        self.all = all;
        self
    }

    pub fn with(mut self, tool: Tool, selection: Selection) -> Self {
        self.set(tool, selection);
        self
    }

    pub fn selection(&self, tool: Tool) -> &Selection {
        match tool {
            Tool::Eslint => &self.eslint,
            Tool::Prettier => &self.prettier,
            Tool::Babel => &self.babel,
        }
    }

    pub fn set(&mut self, tool: Tool, selection: Selection) {
        match tool {
            Tool::Eslint => self.eslint = selection,
            Tool::Prettier => self.prettier = selection,
            Tool::Babel => self.babel = selection,
        }
    }

    /// Tools to bootstrap with their effective selection, in write order.
    ///
    /// With `all` set every tool is requested with [`Selection::UseBase`] no
    /// matter what was selected individually. Otherwise unselected tools are
    /// dropped.
    pub fn requested(&self) -> Vec<(Tool, Selection)> {
        if self.all {
            return Tool::ALL
                .into_iter()
                .map(|tool| (tool, Selection::UseBase))
                .collect();
        }

        Tool::ALL
            .into_iter()
            .map(|tool| (tool, self.selection(tool).clone()))
            .filter(|(_, selection)| selection.is_selected())
            .collect()
    }

    /// Layer `other` on top of `self`: its selected tools replace ours and
    /// `all` is enabled if either side enables it. The target directory is
    /// left untouched.
    pub fn overlay(mut self, other: BootstrapParams) -> Self {
        self.all |= other.all;
        for tool in Tool::ALL {
            let selection = other.selection(tool);
            if selection.is_selected() {
                self.set(tool, selection.clone());
            }
        }
        self
    }
}
