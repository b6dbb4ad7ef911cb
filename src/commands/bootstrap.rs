use crate::bootstrap::bootstrap;
use crate::cli::BootstrapArgs;
use crate::config::{default_target_dir, ParamsFile};
use crate::diagnostics::TerminalDiagnostics;
use crate::params::BootstrapParams;
use crate::tool::Tool;
use crate::ui;
use anyhow::{Context, Result};
use tokio::runtime::Builder;

pub fn execute(args: BootstrapArgs) -> Result<()> {
    let params = build_params(args)?;

    let runtime = Builder::new_current_thread()
        .build()
        .context("Failed to start async runtime")?;

    let written = runtime
        .block_on(bootstrap(&params, &TerminalDiagnostics))
        .with_context(|| format!("Failed to bootstrap configs in {:?}", params.target_dir()))?;

    if written.is_empty() {
        ui::info("No tools selected. Pass --all or any of --eslint, --prettier, --babel.");
        return Ok(());
    }

    for path in &written {
        ui::success("Wrote", path.display());
    }

    Ok(())
}

/// Merge the parameter file (if any) with the command-line flags.
fn build_params(args: BootstrapArgs) -> Result<BootstrapParams> {
    let from_file = match &args.config {
        Some(path) => ParamsFile::load(path)?
            .into_params()
            .with_context(|| format!("Invalid parameter file {:?}", path))?,
        None => BootstrapParams::new(default_target_dir()),
    };

    let mut from_flags = BootstrapParams::new(default_target_dir()).with_all(args.all);
    let flags = [
        (Tool::Eslint, args.eslint),
        (Tool::Prettier, args.prettier),
        (Tool::Babel, args.babel),
    ];
    for (tool, value) in flags {
        if let Some(variant) = value {
            from_flags.set(tool, variant.into());
        }
    }

    let mut params = from_file.overlay(from_flags);
    if let Some(target_dir) = args.target_dir {
        params.target_dir = target_dir;
    }

    tracing::debug!(?params, "resolved bootstrap parameters");
    Ok(params)
}
