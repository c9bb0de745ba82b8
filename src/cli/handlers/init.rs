use crate::config::TodoConfig;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn handle_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let config = TodoConfig::default();
    config.save(path)?;

    println!("{} {}", "Wrote".green(), path.display());
    println!("  Port:  {}", config.server.port);
    println!("  Path:  {}", config.server.path);
    println!("  Todos: {}", config.seed.len());

    Ok(())
}
