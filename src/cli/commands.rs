use crate::config::{CONFIG_FILE_NAME, Environment};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "todoql")]
#[command(
    author,
    version,
    about = "A GraphQL todo list server backed by an in-memory store"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for todoql.yml by default)
    #[arg(long, global = true, env = "TODOQL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file with default settings and seed todos
    Init {
        /// Where to write the config file
        #[arg(default_value = CONFIG_FILE_NAME)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Start the GraphQL HTTP server
    #[command(visible_alias = "s")]
    Serve {
        /// Port to listen on [default: 5000]
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Address to bind to [default: 0.0.0.0]
        #[arg(long, env = "HOST")]
        host: Option<String>,

        /// Runtime environment; development also serves GraphiQL
        #[arg(long = "env", env = "TODOQL_ENV", value_enum)]
        environment: Option<EnvironmentArg>,

        /// HTTP path of the GraphQL endpoint [default: /graphql]
        #[arg(long)]
        path: Option<String>,
    },

    /// Execute a GraphQL document against a freshly seeded store
    #[command(visible_alias = "q")]
    Query {
        /// Query or mutation document
        document: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,

        /// Operation to run when the document holds several
        #[arg(long)]
        operation_name: Option<String>,
    },

    /// Execute a mutation, wrapping the selection in `mutation { }`
    Mutate {
        /// Mutation selection, e.g. 'deleteTodo(id: 1) { id }'
        mutation: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the schema in SDL
    Schema,

    /// Print the todos the store starts with as JSON
    Seed,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EnvironmentArg {
    Development,
    Production,
}

impl From<EnvironmentArg> for Environment {
    fn from(arg: EnvironmentArg) -> Self {
        match arg {
            EnvironmentArg::Development => Environment::Development,
            EnvironmentArg::Production => Environment::Production,
        }
    }
}
