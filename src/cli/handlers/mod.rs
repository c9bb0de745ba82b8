mod init;
mod query;
mod schema;
mod seed;
mod serve;

pub use init::handle_init;
pub use query::{handle_mutate, handle_query};
pub use schema::handle_schema;
pub use seed::handle_seed;
pub use serve::{ServeOverrides, handle_serve};

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::TodoConfig;
use crate::graphql::{TodoSchema, build_schema};
use crate::store::TodoStore;

/// Common context passed to command handlers
pub struct CommandContext {
    pub config: TodoConfig,
}

impl CommandContext {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config =
            TodoConfig::resolve(config_path, &cwd).context("Failed to load todoql configuration")?;
        Ok(Self { config })
    }

    /// A new store holding the configured seed todos.
    pub fn store(&self) -> Arc<TodoStore> {
        Arc::new(TodoStore::new(self.config.seed.clone()))
    }

    pub fn schema(&self) -> TodoSchema {
        build_schema(self.store())
    }
}
