use crate::error::{Result, TodoError};
use crate::model::{Todo, TodoId, default_seed};
use serde::{Deserialize, Serialize};
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "todoql.yml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub server: ServerSettings,

    /// Todos the store starts with, newest first.
    #[serde(default = "default_seed")]
    pub seed: Vec<Todo>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Whether GET on the GraphQL path serves the GraphiQL IDE.
    pub fn serves_ide(self) -> bool {
        matches!(self, Environment::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default)]
    pub environment: Environment,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_path() -> String {
    "/graphql".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
            environment: Environment::default(),
        }
    }
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            seed: default_seed(),
        }
    }
}

impl ServerSettings {
    /// Resolve `host` and `port` to the first matching address. `host` may be
    /// an IPv4 or IPv6 literal or a hostname such as `localhost`.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let invalid = |reason: String| {
            TodoError::Config(format!("Invalid bind address {}: {}", self.host, reason))
        };
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| invalid(e.to_string()))?
            .next()
            .ok_or_else(|| invalid("host resolved to no addresses".to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.path.starts_with('/') {
            return Err(TodoError::Config(format!(
                "GraphQL path must start with '/': {}",
                self.path
            )));
        }
        self.socket_addr()?;
        Ok(())
    }
}

impl TodoConfig {
    /// Load the config file at `path`, or the nearest `todoql.yml` above
    /// `start_path` when no path is given. Falls back to defaults when
    /// neither exists.
    pub fn resolve(path: Option<&Path>, start_path: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => match Self::find_config_file(start_path) {
                Some(found) => Self::load(&found),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TodoError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: TodoConfig = serde_yaml::from_str(&content)?;
        config.server.validate()?;
        config.validate_seed()?;
        tracing::debug!(path = %path.display(), todos = config.seed.len(), "Loaded config");
        Ok(config)
    }

    /// Seed ids must leave room for at least one created todo.
    pub fn validate_seed(&self) -> Result<()> {
        if let Some(todo) = self.seed.iter().find(|t| t.id == TodoId::MAX) {
            return Err(TodoError::Config(format!(
                "Seed todo '{}' uses the largest possible id {}",
                todo.name,
                TodoId::MAX
            )));
        }
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
