use std::fmt;
use std::str::FromStr;

use crate::error::BootstrapError;

/// Name of the fallback variant every tool supports.
pub const BASE_VARIANT: &str = "base";

/// Package whose submodules export the shared configs.
pub const CONFIG_PACKAGE: &str = "sumup-js";

/// Tools whose configuration can be bootstrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tool {
    /// Linter
    Eslint,
    /// Formatter
    Prettier,
    /// Transpiler
    Babel,
}

impl Tool {
    /// Every supported tool, in write order.
    pub const ALL: [Tool; 3] = [Tool::Eslint, Tool::Prettier, Tool::Babel];

    /// Identifier used for the `sumup-js/<tool>` submodule and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Eslint => "eslint",
            Tool::Prettier => "prettier",
            Tool::Babel => "babel",
        }
    }

    /// File the tool picks up from the project root.
    pub fn filename(self) -> &'static str {
        match self {
            Tool::Eslint => ".eslintrc.js",
            Tool::Prettier => "prettier.config.js",
            Tool::Babel => "babel.config.js",
        }
    }

    /// Presets exported by `sumup-js/<tool>`. Always contains `base`.
    pub fn supported_variants(self) -> &'static [&'static str] {
        match self {
            Tool::Eslint => &["base", "react", "node"],
            Tool::Prettier => &["base"],
            Tool::Babel => &["base", "react", "node"],
        }
    }

    /// Look up `name` among the supported variants. Matching is case-sensitive.
    pub fn variant(self, name: &str) -> Option<&'static str> {
        self.supported_variants()
            .iter()
            .copied()
            .find(|variant| *variant == name)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = BootstrapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| BootstrapError::UnknownTool(s.to_string()))
    }
}
