//! # todoql - A GraphQL todo list server
//!
//! todoql serves a small CRUD schema over an in-memory list of todos. The
//! list is seeded at startup and lives for as long as the process does.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server on port 5000
//! todoql serve
//!
//! # Create a todo
//! curl -s localhost:5000/graphql -H 'content-type: application/json' \
//!   -d '{"query":"mutation { createTodo(createTodoInput: {name: \"Milk\", description: \"Buy milk\"}) { id name } }"}'
//!
//! # Run a query without a server
//! todoql query '{ todos { id name description } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: The `Todo` data model
//! - [`store`]: In-memory todo store

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration loading.
///
/// Handles `todoql.yml` files and upward discovery from the working directory.
pub mod config;

/// Error types and result aliases.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server that hosts it.
pub mod graphql;

/// Logging setup for stderr and optional JSON log files.
pub mod logging;

/// Data models.
pub mod model;

/// In-memory todo store shared by all requests.
pub mod store;
