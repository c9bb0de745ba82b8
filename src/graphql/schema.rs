use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Request, Response, Schema};

use crate::model::Todo as ModelTodo;
use crate::store::{TodoStore, parse_id};

use super::types::*;

pub type TodoSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub const HELLO: &str = "Hello World!!";

pub fn build_schema(store: Arc<TodoStore>) -> TodoSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Execute a single GraphQL request against `schema`.
pub async fn execute(schema: &TodoSchema, request: impl Into<Request>) -> Response {
    schema.execute(request).await
}

fn get_store<'ctx>(ctx: &Context<'ctx>) -> async_graphql::Result<&'ctx Arc<TodoStore>> {
    ctx.data::<Arc<TodoStore>>()
}

// List fields are declared with nullable items (`[Todo]`).
fn nullable_items(todos: Vec<ModelTodo>) -> Vec<Option<Todo>> {
    todos.into_iter().map(|t| Some(t.into())).collect()
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Greeting kept from the first version of the API
    async fn hello(&self) -> &'static str {
        HELLO
    }

    /// List all todos, most recently created first
    async fn todos(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Option<Todo>>>> {
        let store = get_store(ctx)?;
        Ok(Some(nullable_items(store.list())))
    }

    /// Get a single todo by ID
    async fn todo(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Todo>> {
        let store = get_store(ctx)?;
        Ok(parse_id(&id).and_then(|id| store.get(id)).map(Into::into))
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Create a todo and return the whole updated list
    async fn create_todo(
        &self,
        ctx: &Context<'_>,
        create_todo_input: CreateTodoInput,
    ) -> async_graphql::Result<Vec<Option<Todo>>> {
        let store = get_store(ctx)?;
        let todos = store.create(create_todo_input.name, create_todo_input.description);
        Ok(nullable_items(todos))
    }

    /// Delete a todo, returning it as it was before removal
    async fn delete_todo(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Todo>> {
        let store = get_store(ctx)?;
        Ok(parse_id(&id).and_then(|id| store.delete(id)).map(Into::into))
    }

    /// Update the supplied fields of a todo
    async fn update_todo(
        &self,
        ctx: &Context<'_>,
        update_todo_input: Option<UpdateTodoInput>,
    ) -> async_graphql::Result<Option<Todo>> {
        let store = get_store(ctx)?;
        let Some((Some(id), patch)) = update_todo_input.map(UpdateTodoInput::into_parts) else {
            return Ok(None);
        };
        Ok(store.update(id, patch).map(Into::into))
    }
}
