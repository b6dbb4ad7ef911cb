use crate::tool::Tool;
use crate::ui;
use anyhow::{Context, Result};

pub fn execute(tool: Option<&str>) -> Result<()> {
    let tools = match tool {
        Some(name) => {
            let tool = name
                .parse::<Tool>()
                .with_context(|| format!("Unknown tool '{name}'"))?;
            vec![tool]
        }
        None => Tool::ALL.to_vec(),
    };

    for tool in tools {
        ui::status(
            tool.name(),
            format!(
                "{} -> {}",
                tool.filename(),
                tool.supported_variants().join(", ")
            ),
        );
    }

    Ok(())
}
