//! Stateless HTTP request builder and response parser for `/tasks/`.
//!
//! # Design
//! `TaskRequests` holds only a base URL. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. The caller executes the round-trip in between,
//! so this layer stays deterministic and free of I/O.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTask, Task, TaskId, TaskList, TaskUpdate, UpdateResult};

const TASKS_PATH: &str = "/tasks/";

/// Request builder and response parser bound to one base URL.
#[derive(Debug, Clone)]
pub struct TaskRequests {
    base_url: String,
}

impl TaskRequests {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_fetch_todos(&self) -> HttpRequest {
        self.bodyless(HttpMethod::Get, self.collection_url())
    }

    pub fn build_add_todo(&self, name: &str) -> Result<HttpRequest, ApiError> {
        let input = NewTask {
            name: name.to_string(),
        };
        self.with_json(HttpMethod::Post, self.collection_url(), &input)
    }

    pub fn build_update_task(
        &self,
        id: TaskId,
        name: &str,
        is_done: bool,
    ) -> Result<HttpRequest, ApiError> {
        let input = TaskUpdate {
            name: name.to_string(),
            is_done,
        };
        self.with_json(HttpMethod::Put, self.item_url(id), &input)
    }

    pub fn build_delete_task(&self, id: TaskId) -> HttpRequest {
        self.bodyless(HttpMethod::Delete, self.item_url(id))
    }

    /// Accepts a bare array or the `{"error":false,"message":[...]}` wrapper.
    pub fn parse_fetch_todos(&self, response: HttpResponse) -> Result<Vec<Task>, ApiError> {
        decode::<TaskList>(response).map(Vec::from)
    }

    pub fn parse_add_todo(&self, response: HttpResponse) -> Result<Task, ApiError> {
        decode(response)
    }

    /// The server answers with either the updated task or a status body.
    pub fn parse_update_task(&self, response: HttpResponse) -> Result<UpdateResult, ApiError> {
        decode(response)
    }

    /// The acknowledgment body is not interpreted; any 2xx is success.
    pub fn parse_delete_task(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(response).map(|_| ())
    }

    fn collection_url(&self) -> String {
        format!("{}{TASKS_PATH}", self.base_url)
    }

    fn item_url(&self, id: TaskId) -> String {
        format!("{}{TASKS_PATH}{id}", self.base_url)
    }

    fn bodyless(&self, method: HttpMethod, url: String) -> HttpRequest {
        HttpRequest {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<T: Serialize>(
        &self,
        method: HttpMethod,
        url: String,
        input: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(ApiError::Encode)?;
        Ok(HttpRequest {
            method,
            url,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Pass 2xx responses through; anything else becomes `Rejected` untouched.
fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }
    Err(ApiError::Rejected {
        status: response.status,
        body: response.body,
    })
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    let response = check_status(response)?;
    serde_json::from_str(&response.body).map_err(ApiError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requests() -> TaskRequests {
        TaskRequests::new("http://localhost:8081")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_fetch_todos_targets_collection() {
        let req = requests().build_fetch_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8081/tasks/");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_add_todo_sends_only_name() {
        let req = requests().build_add_todo("Buy milk").unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:8081/tasks/");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Buy milk"}));
    }

    #[test]
    fn build_add_todo_does_not_reject_empty_name() {
        let req = requests().build_add_todo("").unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "");
    }

    #[test]
    fn build_update_task_targets_item() {
        let req = requests().build_update_task(42, "Renamed", true).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:8081/tasks/42");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Renamed", "isDone": true}));
    }

    #[test]
    fn build_delete_task_targets_item() {
        let req = requests().build_delete_task(3);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:8081/tasks/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let req = TaskRequests::new("http://localhost:8081/").build_fetch_todos();
        assert_eq!(req.url, "http://localhost:8081/tasks/");
    }

    #[test]
    fn base_url_path_prefix_is_kept() {
        let req = TaskRequests::new("http://example.test/api").build_delete_task(1);
        assert_eq!(req.url, "http://example.test/api/tasks/1");
    }

    #[test]
    fn parse_fetch_todos_keeps_server_order() {
        let todos = requests()
            .parse_fetch_todos(response(
                200,
                r#"[{"id":9,"name":"b","isDone":true},{"id":2,"name":"a","isDone":false}]"#,
            ))
            .unwrap();
        let ids: Vec<TaskId> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![9, 2]);
    }

    #[test]
    fn parse_add_todo_accepts_any_2xx() {
        let body = r#"{"id":1,"name":"New","isDone":false}"#;
        assert_eq!(requests().parse_add_todo(response(200, body)).unwrap().name, "New");
        assert_eq!(requests().parse_add_todo(response(201, body)).unwrap().name, "New");
    }

    #[test]
    fn parse_add_todo_rejected_keeps_status_and_body() {
        let err = requests()
            .parse_add_todo(response(400, r#"{"error":true,"message":"Bad JSON"}"#))
            .unwrap_err();
        match err {
            ApiError::Rejected { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, r#"{"error":true,"message":"Bad JSON"}"#);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_update_task_returns_task() {
        let result = requests()
            .parse_update_task(response(200, r#"{"id":4,"name":"Done","isDone":true}"#))
            .unwrap();
        let todo = result.task().unwrap();
        assert_eq!(todo.id, 4);
        assert!(todo.is_done);
    }

    #[test]
    fn parse_update_task_accepts_status_body() {
        let result = requests()
            .parse_update_task(response(200, r#"{"error":false}"#))
            .unwrap();
        assert_eq!(
            result,
            UpdateResult::Status(crate::types::Status {
                error: false,
                message: None,
            })
        );
    }

    #[test]
    fn parse_fetch_todos_unwraps_status_envelope() {
        let todos = requests()
            .parse_fetch_todos(response(
                200,
                r#"{"error":false,"message":[{"id":1,"name":"a","isDone":false,"createdAt":5}]}"#,
            ))
            .unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].created_at, Some(5));

        let empty = requests()
            .parse_fetch_todos(response(200, r#"{"error":false,"message":null}"#))
            .unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn parse_update_task_not_found_is_rejected() {
        let err = requests().parse_update_task(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::Rejected { status: 404, .. }));
    }

    #[test]
    fn parse_delete_task_ignores_ack_body() {
        assert!(requests().parse_delete_task(response(200, r#"{"error":false}"#)).is_ok());
        assert!(requests().parse_delete_task(response(204, "")).is_ok());
    }

    #[test]
    fn parse_delete_task_server_error_is_rejected() {
        let err = requests().parse_delete_task(response(500, "boom")).unwrap_err();
        assert!(matches!(err, ApiError::Rejected { status: 500, .. }));
    }

    #[test]
    fn parse_fetch_todos_bad_json() {
        let err = requests().parse_fetch_todos(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
