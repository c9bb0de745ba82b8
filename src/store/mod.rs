//! In-memory storage for todos.
//!
//! - [`TodoStore`]: Owned, lock-guarded todo collection injected into the schema
//! - [`parse_id`]: Converts an external identifier into a store id

mod todo_store;

pub use todo_store::{TodoStore, parse_id};
