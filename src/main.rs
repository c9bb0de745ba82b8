use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;

use todoql::cli::handlers::{
    CommandContext, ServeOverrides, handle_init, handle_mutate, handle_query, handle_schema,
    handle_seed, handle_serve,
};
use todoql::cli::{Cli, Commands};
use todoql::logging;

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let config_path = cli.config;
    let load_context = || CommandContext::load(config_path.as_deref());

    match cli.command {
        Commands::Init { path, force } => handle_init(&path, force),
        Commands::Serve {
            port,
            host,
            environment,
            path,
        } => handle_serve(
            config_path.as_deref(),
            ServeOverrides {
                host,
                port,
                environment: environment.map(Into::into),
                path,
            },
        ),
        Commands::Query {
            document,
            variables,
            operation_name,
        } => handle_query(load_context()?, document, variables, operation_name),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(load_context()?, mutation, variables),
        Commands::Schema => handle_schema(load_context()?),
        Commands::Seed => handle_seed(load_context()?),
    }
}
