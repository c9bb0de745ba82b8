use anyhow::Result;

use super::CommandContext;

pub fn handle_seed(ctx: CommandContext) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&ctx.config.seed)?);
    Ok(())
}
