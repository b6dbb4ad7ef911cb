use crate::cli::{Cli, Commands};
use anyhow::Result;

mod bootstrap;
mod variants;

pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Bootstrap(args) => bootstrap::execute(args),

        Commands::Variants { tool } => variants::execute(tool.as_deref()),
    }
}
