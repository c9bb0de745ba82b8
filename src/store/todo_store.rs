use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::{Todo, TodoId, TodoPatch};

#[derive(Debug)]
struct StoreState {
    /// Newest first.
    todos: Vec<Todo>,
    /// `None` once the id space is used up.
    next_id: Option<TodoId>,
}

/// In-memory todo collection shared by every request.
///
/// Ids are handed out from a monotonic counter, so an id freed by a delete is
/// never assigned again. Every operation is total: lookups that find nothing
/// return `None` instead of an error.
#[derive(Debug)]
pub struct TodoStore {
    state: RwLock<StoreState>,
}

impl TodoStore {
    pub fn new(seed: Vec<Todo>) -> Self {
        let next_id = match seed.iter().map(|t| t.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self {
            state: RwLock::new(StoreState {
                todos: seed,
                next_id,
            }),
        }
    }

    #[cfg(test)]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    // No operation leaves the state half-written, so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.read().todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All todos in held order, most recently created first.
    pub fn list(&self) -> Vec<Todo> {
        self.read().todos.clone()
    }

    pub fn get(&self, id: TodoId) -> Option<Todo> {
        let found = self.read().todos.iter().find(|t| t.id == id).cloned();
        tracing::debug!(id, found = found.is_some(), "Looking up todo");
        found
    }

    /// Prepends a new todo and returns the whole updated collection.
    ///
    /// Once every id has been handed out the collection is returned unchanged.
    pub fn create(&self, name: String, description: String) -> Vec<Todo> {
        let mut state = self.write();
        let Some(id) = state.next_id else {
            tracing::error!(name = %name, "Todo id space exhausted, not creating todo");
            return state.todos.clone();
        };
        state.next_id = id.checked_add(1);

        tracing::info!(id, name = %name, "Creating todo");
        state.todos.insert(0, Todo::new(id, name, description));
        state.todos.clone()
    }

    /// Applies `patch` to every todo with `id` and returns the first of them.
    pub fn update(&self, id: TodoId, patch: TodoPatch) -> Option<Todo> {
        let mut state = self.write();
        let mut updated = None;
        for todo in state.todos.iter_mut().filter(|t| t.id == id) {
            todo.apply(patch.clone());
            updated.get_or_insert_with(|| todo.clone());
        }

        match &updated {
            Some(todo) => tracing::info!(id, name = %todo.name, "Updated todo"),
            None => tracing::debug!(id, "Update skipped, todo not found"),
        }
        updated
    }

    /// Removes every todo with `id` and returns the first one as it was
    /// before removal.
    pub fn delete(&self, id: TodoId) -> Option<Todo> {
        let mut state = self.write();
        let removed = state.todos.iter().find(|t| t.id == id).cloned()?;
        state.todos.retain(|t| t.id != id);

        tracing::info!(id, name = %removed.name, "Deleted todo");
        Some(removed)
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new(crate::model::default_seed())
    }
}

/// Parses an external identifier into a store id.
///
/// Only plain decimal integers are accepted; anything else matches no todo.
pub fn parse_id(raw: &str) -> Option<TodoId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn single_seed_store() -> TodoStore {
        TodoStore::new(vec![Todo::new(1, "A", "a")])
    }

    #[test]
    fn test_create_prepends_and_returns_collection() {
        let store = single_seed_store();
        let todos = store.create("B".to_string(), "b".to_string());

        assert_eq!(todos, vec![Todo::new(2, "B", "b"), Todo::new(1, "A", "a")]);
        assert_eq!(store.list(), todos);
    }

    #[test]
    fn test_create_grows_collection_by_one() {
        let store = TodoStore::default();
        let before = store.len();
        let todos = store.create("Buy milk".to_string(), "Two litres".to_string());

        assert_eq!(todos.len(), before + 1);
        assert_eq!(todos[0].name, "Buy milk");
        assert_eq!(todos[0].description, "Two litres");
    }

    #[test]
    fn test_create_on_empty_store_starts_at_one() {
        let store = TodoStore::empty();
        assert!(store.is_empty());
        let todos = store.create("A".to_string(), "a".to_string());
        assert_eq!(todos[0].id, 1);
    }

    #[test]
    fn test_get_after_create_round_trips() {
        let store = single_seed_store();
        let id = store.create("B".to_string(), "b".to_string())[0].id;

        let todo = store.get(id).unwrap();
        assert_eq!(todo.name, "B");
        assert_eq!(todo.description, "b");
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = single_seed_store();
        assert!(store.get(42).is_none());
    }

    #[test]
    fn test_get_after_delete_returns_none() {
        let store = single_seed_store();
        store.delete(1);
        assert!(store.get(1).is_none());
    }

    #[test]
    fn test_update_name_only() {
        let store = single_seed_store();
        let patch = TodoPatch {
            name: Some("Renamed".to_string()),
            description: None,
        };

        let updated = store.update(1, patch).unwrap();
        assert_eq!(updated, Todo::new(1, "Renamed", "a"));
        assert_eq!(store.get(1).unwrap(), updated);
    }

    #[test]
    fn test_update_description_only() {
        let store = single_seed_store();
        let patch = TodoPatch {
            name: None,
            description: Some("changed".to_string()),
        };

        let updated = store.update(1, patch).unwrap();
        assert_eq!(updated, Todo::new(1, "A", "changed"));
    }

    #[test]
    fn test_update_without_fields_returns_unchanged() {
        let store = single_seed_store();
        let updated = store.update(1, TodoPatch::default()).unwrap();
        assert_eq!(updated, Todo::new(1, "A", "a"));
    }

    #[test]
    fn test_update_missing_returns_none() {
        let store = single_seed_store();
        let patch = TodoPatch {
            name: Some("x".to_string()),
            description: None,
        };
        assert!(store.update(9, patch).is_none());
        assert_eq!(store.list(), vec![Todo::new(1, "A", "a")]);
    }

    #[test]
    fn test_update_keeps_position() {
        let store = single_seed_store();
        store.create("B".to_string(), "b".to_string());
        let patch = TodoPatch {
            name: Some("A2".to_string()),
            description: None,
        };
        store.update(1, patch);

        let names: Vec<_> = store.list().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["B", "A2"]);
    }

    #[test]
    fn test_delete_returns_removed_todo() {
        let store = single_seed_store();
        let removed = store.delete(1).unwrap();

        assert_eq!(removed, Todo::new(1, "A", "a"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_missing_leaves_collection() {
        let store = single_seed_store();
        assert!(store.delete(5).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_removes_all_sharing_id() {
        let store = TodoStore::new(vec![
            Todo::new(1, "A", "a"),
            Todo::new(2, "B", "b"),
            Todo::new(1, "C", "c"),
        ]);

        let removed = store.delete(1).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(store.list(), vec![Todo::new(2, "B", "b")]);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = TodoStore::new(vec![Todo::new(1, "A", "a"), Todo::new(2, "B", "b")]);
        store.delete(2);

        let todos = store.create("C".to_string(), "c".to_string());
        assert_eq!(todos[0].id, 3);
        assert_eq!(todos.iter().filter(|t| t.id == 3).count(), 1);
    }

    #[test]
    fn test_max_seed_id_does_not_overflow() {
        let store = TodoStore::new(vec![Todo::new(u64::MAX, "A", "a")]);

        let todos = store.create("B".to_string(), "b".to_string());
        assert_eq!(todos, vec![Todo::new(u64::MAX, "A", "a")]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_last_id_is_handed_out_once() {
        let store = TodoStore::new(vec![Todo::new(u64::MAX - 1, "A", "a")]);

        let todos = store.create("B".to_string(), "b".to_string());
        assert_eq!(todos[0].id, u64::MAX);

        let todos = store.create("C".to_string(), "c".to_string());
        assert_eq!(todos.len(), 2);
        assert_eq!(todos.iter().filter(|t| t.id == u64::MAX).count(), 1);
    }

    #[test]
    fn test_concurrent_creates_get_unique_ids() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 25;

        let store = Arc::new(TodoStore::default());
        let seeded = store.len();

        std::thread::scope(|scope| {
            for t in 0..THREADS {
                let store = Arc::clone(&store);
                scope.spawn(move || {
                    for i in 0..PER_THREAD {
                        store.create(format!("todo {t}-{i}"), "concurrent".to_string());
                    }
                });
            }
        });

        let todos = store.list();
        assert_eq!(todos.len(), seeded + THREADS * PER_THREAD);

        let ids: HashSet<_> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), todos.len());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("1"), Some(1));
        assert_eq!(parse_id("0042"), Some(42));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("+1"), None);
        assert_eq!(parse_id(" 1"), None);
        assert_eq!(parse_id("1.5"), None);
    }
}
