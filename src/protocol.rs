//! Request body types for the HTTP boundary.

use crate::types::Task;
use serde::{Deserialize, Serialize};

/// Body of `POST /todos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    pub task: Task,
}

/// Body of `PATCH /todos/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDescription {
    pub description: String,
}

/// Body of `PUT /todos`: the subset of tasks whose rank and/or description
/// changed, not necessarily the whole list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceOrder {
    pub tasks: Vec<Task>,
}
