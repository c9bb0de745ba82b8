use crate::model::{Todo as ModelTodo, TodoId, TodoPatch};
use crate::store::parse_id;
use async_graphql::{ID, InputObject, SimpleObject};

#[derive(SimpleObject, Clone)]
pub struct Todo {
    pub id: ID,
    pub name: String,
    pub description: String,
}

impl From<ModelTodo> for Todo {
    fn from(t: ModelTodo) -> Self {
        Self {
            id: ID(t.id.to_string()),
            name: t.name,
            description: t.description,
        }
    }
}

#[derive(InputObject)]
pub struct CreateTodoInput {
    pub name: String,
    pub description: String,
}

#[derive(InputObject)]
pub struct UpdateTodoInput {
    pub id: Option<ID>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateTodoInput {
    /// Splits the input into the target id and the fields to overwrite.
    ///
    /// The id is `None` when it was omitted or is not a valid todo id.
    pub fn into_parts(self) -> (Option<TodoId>, TodoPatch) {
        let id = self.id.as_ref().and_then(|id| parse_id(id));
        let patch = TodoPatch {
            name: self.name,
            description: self.description,
        };
        (id, patch)
    }
}
