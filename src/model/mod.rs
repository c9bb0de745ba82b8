//! Data models for todoql.
//!
//! - [`Todo`]: The single entity held by the store
//! - [`TodoPatch`]: Partial field values applied by an update

mod todo;

pub use todo::{Todo, TodoId, TodoPatch, default_seed};
