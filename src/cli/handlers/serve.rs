use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::config::{Environment, ServerSettings};
use crate::graphql::{build_schema, run_server};

use super::CommandContext;

/// Server settings given on the command line or through the environment.
#[derive(Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub environment: Option<Environment>,
    pub path: Option<String>,
}

impl ServeOverrides {
    fn apply(self, settings: &mut ServerSettings) {
        if let Some(host) = self.host {
            settings.host = host;
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(environment) = self.environment {
            settings.environment = environment;
        }
        if let Some(path) = self.path {
            settings.path = path;
        }
    }
}

/// Load config, apply overrides and serve. Any failure before or during
/// serving is logged before it is returned.
pub fn handle_serve(config_path: Option<&Path>, overrides: ServeOverrides) -> Result<()> {
    let result = start(config_path, overrides);
    if let Err(e) = &result {
        tracing::error!(error = %format!("{e:#}"), "GraphQL server failed to start");
    }
    result
}

fn start(config_path: Option<&Path>, overrides: ServeOverrides) -> Result<()> {
    let mut ctx = CommandContext::load(config_path)?;
    overrides.apply(&mut ctx.config.server);
    let settings = ctx.config.server.clone();
    settings.validate()?;

    let store = ctx.store();
    if store.is_empty() {
        tracing::warn!("Starting with an empty todo list");
    } else {
        tracing::info!(todos = store.len(), "Seeded todo store");
    }
    let schema = build_schema(store);

    println!(
        "{} on http://{}:{}{}",
        "Starting GraphQL server".green(),
        settings.host,
        settings.port,
        settings.path
    );
    if settings.environment.serves_ide() {
        println!("GraphiQL: http://localhost:{}{}", settings.port, settings.path);
    }

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, &settings).await })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let mut settings = ServerSettings::default();
        ServeOverrides {
            port: Some(8080),
            environment: Some(Environment::Production),
            ..ServeOverrides::default()
        }
        .apply(&mut settings);

        assert_eq!(settings.port, 8080);
        assert_eq!(settings.environment, Environment::Production);
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.path, "/graphql");
    }

    #[test]
    fn test_invalid_path_fails_before_serving() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("todoql.yml");
        std::fs::write(&config_path, "seed: []\n").unwrap();

        let overrides = ServeOverrides {
            path: Some("graphql".to_string()),
            ..ServeOverrides::default()
        };
        let err = handle_serve(Some(&config_path), overrides).unwrap_err();
        assert!(format!("{err:#}").contains("must start with '/'"));
    }
}
