use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Shared JavaScript tooling configs
///
/// sumup-js writes small config stubs for eslint, prettier and babel into
/// a project. Each stub re-exports a preset from the `sumup-js` package so
/// projects stay in sync with the shared configuration.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write config files for the selected tools
    ///
    /// Pass a tool flag alone to use its base preset, or with a value to pick
    /// a preset. Unknown presets fall back to base with a warning. Existing
    /// files are overwritten.
    Bootstrap(BootstrapArgs),

    /// List the presets available for each tool
    Variants {
        /// Tool to show (shows all if not specified)
        #[arg(value_name = "TOOL")]
        tool: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct BootstrapArgs {
    /// Directory to write the config files to [default: .]
    #[arg(short, long, value_name = "DIR", env = "SUMUP_JS_TARGET_DIR")]
    pub target_dir: Option<PathBuf>,

    /// Use the base preset for every tool
    #[arg(short, long)]
    pub all: bool,

    /// Write .eslintrc.js, optionally with a preset
    #[arg(long, value_name = "VARIANT", num_args = 0..=1)]
    pub eslint: Option<Option<String>>,

    /// Write prettier.config.js, optionally with a preset
    #[arg(long, value_name = "VARIANT", num_args = 0..=1)]
    pub prettier: Option<Option<String>>,

    /// Write babel.config.js and .babelrc, optionally with a preset
    #[arg(long, value_name = "VARIANT", num_args = 0..=1)]
    pub babel: Option<Option<String>>,

    /// TOML file with bootstrap parameters; command-line flags take precedence
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
