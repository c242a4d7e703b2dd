//! Shared test infrastructure: an in-memory HTTP task store.
//!
//! Runs the store's five endpoints on an ephemeral port, records every call
//! so tests can assert payloads and ordering, and can be told to fail
//! requests of a given method.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use std::sync::{Arc, Mutex};
use taskrank::Task;
use taskrank::protocol::{CreateTask, ReplaceOrder, UpdateDescription};

type Shared = Arc<Mutex<StoreState>>;

#[derive(Default)]
pub struct StoreState {
    pub tasks: Vec<Task>,
    /// One entry per request, e.g. "DELETE /todos/200".
    pub calls: Vec<String>,
    /// Every PUT body received, in order.
    pub puts: Vec<Vec<Task>>,
    /// HTTP method whose requests should return 500.
    pub failing_method: Option<&'static str>,
}

impl StoreState {
    fn record(&mut self, call: String, method: &str) -> Result<(), StatusCode> {
        self.calls.push(call);
        if self.failing_method == Some(method) {
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            Ok(())
        }
    }
}

/// Test store with automatic port assignment.
pub struct TestStore {
    pub base_url: String,
    pub state: Shared,
}

impl TestStore {
    /// Start the server and return a handle to it.
    pub async fn start() -> Self {
        let state: Shared = Arc::new(Mutex::new(StoreState::default()));

        let app = Router::new()
            .route("/todos", get(list).post(create).put(replace))
            .route("/todos/{id}", delete(remove).patch(patch_description))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Seed the store with tasks at ids 100, 200, ... and ranks 1..N.
    pub fn seed(&self, descriptions: &[&str]) -> Vec<Task> {
        let tasks: Vec<Task> = descriptions
            .iter()
            .enumerate()
            .map(|(i, d)| Task {
                id: (i + 1) as i64 * 100,
                description: d.to_string(),
                order_number: (i + 1) as u32,
            })
            .collect();

        self.state.lock().unwrap().tasks = tasks.clone();
        tasks
    }

    /// Server-side tasks in rank order.
    pub fn tasks(&self) -> Vec<Task> {
        let mut tasks = self.state.lock().unwrap().tasks.clone();
        tasks.sort_by_key(|t| t.order_number);
        tasks
    }

    /// All recorded calls, in arrival order.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Calls recorded after the initial load, in arrival order.
    pub fn calls_after_load(&self) -> Vec<String> {
        self.calls().into_iter().skip(1).collect()
    }

    /// Every PUT body received so far.
    pub fn put_payloads(&self) -> Vec<Vec<Task>> {
        self.state.lock().unwrap().puts.clone()
    }

    /// Make all requests of `method` return 500 until cleared.
    pub fn fail_method(&self, method: &'static str) {
        self.state.lock().unwrap().failing_method = Some(method);
    }

    /// Stop injecting failures.
    pub fn heal(&self) {
        self.state.lock().unwrap().failing_method = None;
    }
}

async fn list(State(state): State<Shared>) -> Result<Json<Vec<Task>>, StatusCode> {
    let mut state = state.lock().unwrap();
    state.record("GET /todos".to_string(), "GET")?;

    let mut tasks = state.tasks.clone();
    tasks.sort_by_key(|t| t.order_number);
    Ok(Json(tasks))
}

async fn create(State(state): State<Shared>, Json(body): Json<CreateTask>) -> StatusCode {
    let mut state = state.lock().unwrap();
    if state
        .record(format!("POST /todos {}", body.task.id), "POST")
        .is_err()
    {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    state.tasks.push(body.task);
    StatusCode::CREATED
}

async fn replace(State(state): State<Shared>, Json(body): Json<ReplaceOrder>) -> StatusCode {
    let mut state = state.lock().unwrap();
    let ids: Vec<String> = body.tasks.iter().map(|t| t.id.to_string()).collect();
    if state
        .record(format!("PUT /todos [{}]", ids.join(",")), "PUT")
        .is_err()
    {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    for incoming in &body.tasks {
        match state.tasks.iter_mut().find(|t| t.id == incoming.id) {
            Some(existing) => {
                existing.order_number = incoming.order_number;
                existing.description = incoming.description.clone();
            }
            None => state.tasks.push(incoming.clone()),
        }
    }
    state.puts.push(body.tasks);
    StatusCode::OK
}

async fn remove(State(state): State<Shared>, Path(id): Path<i64>) -> StatusCode {
    let mut state = state.lock().unwrap();
    if state
        .record(format!("DELETE /todos/{id}"), "DELETE")
        .is_err()
    {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    let before = state.tasks.len();
    state.tasks.retain(|t| t.id != id);
    if state.tasks.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

async fn patch_description(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateDescription>,
) -> StatusCode {
    let mut state = state.lock().unwrap();
    if state
        .record(format!("PATCH /todos/{id}"), "PATCH")
        .is_err()
    {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    match state.tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.description = body.description;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}
