use serde::{Deserialize, Serialize};

/// Identifier type used by the store.
pub type TodoId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub name: String,
    pub description: String,
}

impl Todo {
    pub fn new(id: TodoId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Overwrites only the fields that are present.
    pub fn apply(&mut self, patch: TodoPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}

/// Field values supplied by an update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// The list every store starts from unless a config file supplies its own.
pub fn default_seed() -> Vec<Todo> {
    vec![
        Todo::new(3, "Ship the API", "Expose the todo list over GraphQL"),
        Todo::new(2, "Write tests", "Cover create, update and delete"),
        Todo::new(1, "Learn GraphQL", "Read up on queries and mutations"),
    ]
}
