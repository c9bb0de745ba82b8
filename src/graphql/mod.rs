//! GraphQL schema, resolvers and HTTP server for todoql.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! todoql serve --port 5000
//!
//! # Execute a query from CLI
//! todoql query '{ todos { id name description } }'
//!
//! # Execute a mutation from CLI
//! todoql query 'mutation { createTodo(createTodoInput: { name: "Milk", description: "Buy milk" }) { id } }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `hello`, `todos`, `todo`
//! - **Mutations**: `createTodo`, `updateTodo`, `deleteTodo`

mod schema;
mod server;
mod types;

pub use schema::{HELLO, MutationRoot, QueryRoot, TodoSchema, build_schema, execute};
pub use server::{bind, router, run_server, serve};
pub use types::*;
