//! In-memory stand-in for the todo backend.
//!
//! Ids are assigned from a counter starting at 1 and never reused, so listing
//! in id order is also creation order.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

pub const DEFAULT_COMPLETED: &str = "incomplete";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: String,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub completed: Option<String>,
}

#[derive(Debug, Default)]
pub struct Todos {
    last_id: i64,
    rows: BTreeMap<i64, Todo>,
}

impl Todos {
    /// Seed a row with an explicit status, bypassing the create endpoint.
    pub fn insert(&mut self, title: &str, completed: &str) -> Todo {
        self.last_id += 1;
        let todo = Todo {
            id: self.last_id,
            title: title.to_string(),
            completed: completed.to_string(),
        };
        self.rows.insert(todo.id, todo.clone());
        todo
    }
}

pub type Db = Arc<RwLock<Todos>>;

pub fn app() -> Router {
    app_with(Db::default())
}

pub fn app_with(db: Db) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", patch(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let todos = db.read().await;
    Json(todos.rows.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<CreateTodo>,
) -> (StatusCode, Json<Todo>) {
    let todo = db.write().await.insert(&input.title, DEFAULT_COMPLETED);
    debug!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateTodo>,
) -> StatusCode {
    let mut todos = db.write().await;
    let Some(todo) = todos.rows.get_mut(&id) else {
        return StatusCode::NOT_FOUND;
    };
    if let Some(title) = input.title {
        todo.title = title;
    }
    if let Some(completed) = input.completed {
        todo.completed = completed;
    }
    debug!(id, completed = %todo.completed, "updated todo");
    StatusCode::NO_CONTENT
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<i64>) -> StatusCode {
    let mut todos = db.write().await;
    match todos.rows.remove(&id) {
        Some(_) => {
            debug!(id, "deleted todo");
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 1,
            title: "Test".to_string(),
            completed: "incomplete".to_string(),
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], "incomplete");
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"completed":"completed"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_all_fields_optional() {
        let input: UpdateTodo = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.title.is_none());
        assert!(input.completed.is_none());
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let mut todos = Todos::default();
        let a = todos.insert("a", "incomplete");
        let b = todos.insert("b", "completed");
        assert_eq!((a.id, b.id), (1, 2));
        let titles: Vec<&str> = todos.rows.values().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut todos = Todos::default();
        let a = todos.insert("a", "incomplete");
        todos.rows.remove(&a.id);
        assert_eq!(todos.insert("b", "incomplete").id, 2);
    }
}
