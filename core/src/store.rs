//! In-memory client state: the ordered todo list and the draft title.
//!
//! Mutators are `pub(crate)`; only the controller changes a store.

use crate::types::{Status, Todo};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    items: Vec<Todo>,
    draft: String,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Todo] {
        &self.items
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Todo> {
        self.items.iter().find(|todo| todo.id == id)
    }

    pub(crate) fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub(crate) fn clear_draft(&mut self) {
        self.draft.clear();
    }

    pub(crate) fn replace_items(&mut self, items: Vec<Todo>) {
        self.items = items;
    }

    pub(crate) fn append(&mut self, todo: Todo) {
        self.items.push(todo);
    }

    /// Returns whether a record was removed.
    pub(crate) fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|todo| todo.id != id);
        self.items.len() != before
    }

    /// Returns whether a record was updated.
    pub(crate) fn set_status(&mut self, id: i64, status: Status) -> bool {
        match self.items.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.completed = status;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, title: &str) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            completed: Status::Incomplete,
        }
    }

    #[test]
    fn new_store_is_empty_with_empty_draft() {
        let store = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.draft(), "");
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = Store::new();
        store.replace_items(vec![todo(5, "a"), todo(1, "b")]);
        store.append(todo(3, "c"));
        let ids: Vec<i64> = store.items().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 1, 3]);
    }

    #[test]
    fn remove_only_matching_record() {
        let mut store = Store::new();
        store.replace_items(vec![todo(1, "a"), todo(2, "b")]);
        assert!(store.remove(1));
        assert_eq!(store.items(), &[todo(2, "b")]);
        assert!(!store.remove(1));
    }

    #[test]
    fn set_status_preserves_other_fields() {
        let mut store = Store::new();
        store.replace_items(vec![todo(1, "a"), todo(2, "b")]);
        assert!(store.set_status(2, Status::Completed));
        assert_eq!(store.items()[0], todo(1, "a"));
        assert_eq!(store.get(2).unwrap().title, "b");
        assert_eq!(store.get(2).unwrap().completed, Status::Completed);
        assert!(!store.set_status(9, Status::Completed));
    }

    #[test]
    fn clear_draft_leaves_empty_string() {
        let mut store = Store::new();
        store.set_draft("milk");
        store.clear_draft();
        assert_eq!(store.draft(), "");
    }
}
