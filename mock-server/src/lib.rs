use std::{
    collections::BTreeMap,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub is_done: bool,
    pub created_at: i64,
}

#[derive(Deserialize)]
pub struct CreateTask {
    #[serde(default)]
    pub name: String,
}

/// Full replacement of a task's values; absent fields take their zero value.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_done: bool,
}

/// `{"error": bool, "message"?: string}` body used for acks and failures.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Envelope {
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    pub fn ok() -> Self {
        Self {
            error: false,
            message: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct TaskTable {
    tasks: BTreeMap<i64, Task>,
    last_id: i64,
}

impl TaskTable {
    pub fn insert(&mut self, name: String) -> Task {
        self.last_id += 1;
        let task = Task {
            id: self.last_id,
            name,
            is_done: false,
            created_at: unix_now(),
        };
        self.tasks.insert(task.id, task.clone());
        task
    }

    pub fn list(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    pub fn update(&mut self, id: i64, input: UpdateTask) -> Option<Task> {
        let task = self.tasks.get_mut(&id)?;
        task.name = input.name;
        task.is_done = input.is_done;
        Some(task.clone())
    }

    pub fn contains(&self, id: i64) -> bool {
        self.tasks.contains_key(&id)
    }

    pub fn remove(&mut self, id: i64) -> Option<Task> {
        self.tasks.remove(&id)
    }
}

pub type Db = Arc<RwLock<TaskTable>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(TaskTable::default()));
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/", get(list_tasks).post(create_task))
        .route("/tasks/{id}", put(update_task).delete(delete_task))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Error response carrying the `{"error":true,...}` envelope.
#[derive(Debug)]
pub struct Failure {
    status: StatusCode,
    message: &'static str,
}

impl Failure {
    fn no_such_task() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: "No such task",
        }
    }

    fn bad_json() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Bad JSON",
        }
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let body = Envelope {
            error: true,
            message: Some(self.message.to_string()),
        };
        (self.status, Json(body)).into_response()
    }
}

async fn list_tasks(State(db): State<Db>) -> Json<Vec<Task>> {
    Json(db.read().await.list())
}

async fn create_task(
    State(db): State<Db>,
    payload: Result<Json<CreateTask>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), Failure> {
    let Json(input) = payload.map_err(|e| {
        debug!(error = %e, "rejected create body");
        Failure::bad_json()
    })?;
    let task = db.write().await.insert(input.name);
    Ok((StatusCode::CREATED, Json(task)))
}

async fn update_task(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateTask>, JsonRejection>,
) -> Result<Json<Envelope>, Failure> {
    let Path(id) = id.map_err(|_| Failure::no_such_task())?;
    let mut tasks = db.write().await;
    if !tasks.contains(id) {
        return Err(Failure::no_such_task());
    }
    let Json(input) = payload.map_err(|e| {
        debug!(error = %e, id, "rejected update body");
        Failure::bad_json()
    })?;
    tasks.update(id, input).ok_or_else(Failure::no_such_task)?;
    Ok(Json(Envelope::ok()))
}

async fn delete_task(
    State(db): State<Db>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Envelope>, Failure> {
    let Path(id) = id.map_err(|_| Failure::no_such_task())?;
    db.write()
        .await
        .remove(id)
        .ok_or_else(Failure::no_such_task)?;
    Ok(Json(Envelope::ok()))
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
