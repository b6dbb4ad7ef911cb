// Public API
pub mod cli;
pub mod commands;

// Core domain types
mod bootstrap;
mod config;
mod diagnostics;
mod error;
mod params;
mod tool;
mod ui;

// Re-export main types
pub use bootstrap::{
    bootstrap, plan, render_babelrc, render_export, resolve, resolve_variant, write_all,
    ConfigFile, BABELRC_FILENAME,
};
pub use config::{ParamsFile, ToolValue};
pub use diagnostics::{CapturedDiagnostics, Diagnostics, TerminalDiagnostics};
pub use error::{BootstrapError, Result};
pub use params::{BootstrapParams, Selection};
pub use tool::{Tool, BASE_VARIANT, CONFIG_PACKAGE};
