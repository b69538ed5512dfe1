//! In-memory stand-in for the public todo demo service.
//!
//! Mirrors the parts of the remote contract the client relies on: integer
//! ids handed out sequentially, `_limit` on the list route, single-record
//! `GET /todos/{id}`, `201` on create, PUT as full replacement, and `200 {}`
//! on delete.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub title: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(rename = "_limit")]
    pub limit: Option<usize>,
}

#[derive(Debug)]
pub struct Store {
    todos: BTreeMap<u64, Todo>,
    next_id: u64,
}

impl Store {
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            todos: todos.into_iter().map(|t| (t.id, t)).collect(),
            next_id,
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

/// Router over an empty store.
pub fn app() -> Router {
    app_with(Vec::new())
}

pub fn app_with(todos: Vec<Todo>) -> Router {
    let db: Db = Arc::new(RwLock::new(Store::with_todos(todos)));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(db)
}

/// A handful of records shaped like the public service's first page.
pub fn sample_todos() -> Vec<Todo> {
    [
        ("delectus aut autem", false),
        ("quis ut nam facilis et officia qui", false),
        ("fugiat veniam minus", false),
        ("et porro tempora", true),
        ("laboriosam mollitia et enim quasi adipisci quia provident illum", false),
        ("qui ullam ratione quibusdam voluptatem quia omnis", false),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, completed))| Todo {
        user_id: Some(1),
        id: i as u64 + 1,
        title: title.to_string(),
        completed,
    })
    .collect()
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock todo service listening");
    }
    axum::serve(listener, router).await
}

async fn list_todos(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    let limit = params.limit.unwrap_or(usize::MAX);
    Json(store.todos.values().take(limit).cloned().collect())
}

async fn create_todo(State(db): State<Db>, Json(input): Json<CreateTodo>) -> (StatusCode, Json<Todo>) {
    let mut store = db.write().await;
    let todo = Todo {
        user_id: None,
        id: store.next_id,
        title: input.title,
        completed: input.completed,
    };
    store.next_id += 1;
    store.todos.insert(todo.id, todo.clone());
    debug!(id = todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Todo>, StatusCode> {
    let store = db.read().await;
    store.todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    todo.title = input.title;
    todo.completed = input.completed;
    debug!(id, "replaced todo");
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut store = db.write().await;
    store.todos.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    debug!(id, "deleted todo");
    Ok(Json(serde_json::json!({})))
}
