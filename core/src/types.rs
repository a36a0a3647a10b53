//! Wire DTOs for the `/tasks/` resource.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently;
//! integration tests catch any drift between the two crates. Field names
//! follow the server's camelCase JSON (`isDone`, `createdAt`). Fields the
//! client does not know about are carried in `extra`, so a parsed value
//! serializes back to what the server sent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-assigned task identifier.
pub type TaskId = i64;

/// A single task as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub is_done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `{"error": bool, "message"?: any}` status body the server answers
/// with when it does not return a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Status {
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
}

/// Outcome of a successful update: the server may answer with the updated
/// task or with a bare status body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum UpdateResult {
    Task(Task),
    Status(Status),
}

impl UpdateResult {
    pub fn task(&self) -> Option<&Task> {
        match self {
            UpdateResult::Task(task) => Some(task),
            UpdateResult::Status(_) => None,
        }
    }
}

/// A task list, either bare or wrapped as `{"error":false,"message":[...]}`.
/// A wrapped `null` message is an empty list.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum TaskList {
    Bare(Vec<Task>),
    Wrapped { message: Option<Vec<Task>> },
}

impl From<TaskList> for Vec<Task> {
    fn from(list: TaskList) -> Self {
        match list {
            TaskList::Bare(tasks) => tasks,
            TaskList::Wrapped { message } => message.unwrap_or_default(),
        }
    }
}

/// Request payload for creating a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub name: String,
}

/// Request payload for replacing a task's values. Both fields are always sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub name: String,
    pub is_done: bool,
}
