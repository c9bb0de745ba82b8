use anyhow::{Context, Result};
use async_graphql::{Request, Variables};

use crate::graphql::execute;

use super::CommandContext;

fn parse_variables(variables: Option<String>) -> Result<Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object"),
        None => Ok(Variables::default()),
    }
}

fn run(ctx: CommandContext, request: Request) -> Result<()> {
    let schema = ctx.schema();
    let response = tokio::runtime::Runtime::new()?.block_on(execute(&schema, request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    if !response.errors.is_empty() {
        anyhow::bail!("GraphQL request returned {} error(s)", response.errors.len());
    }
    Ok(())
}

pub fn handle_query(
    ctx: CommandContext,
    document: String,
    variables: Option<String>,
    operation_name: Option<String>,
) -> Result<()> {
    let mut request = Request::new(document).variables(parse_variables(variables)?);
    if let Some(name) = operation_name {
        request = request.operation_name(name);
    }
    run(ctx, request)
}

pub fn handle_mutate(ctx: CommandContext, mutation: String, variables: Option<String>) -> Result<()> {
    // Auto-wrap in mutation { }
    let document = format!("mutation {{ {} }}", mutation);
    let request = Request::new(document).variables(parse_variables(variables)?);
    run(ctx, request)
}
