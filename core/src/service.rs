//! The four task operations.
//!
//! Every call asks the factory for a new client, builds one request, sends
//! it and parses the response. Nothing is shared between calls, so concurrent
//! operations complete in whatever order the server answers them.

use tracing::instrument;

use crate::error::ApiError;
use crate::factory::ClientFactory;
use crate::types::{Task, TaskId, UpdateResult};

#[derive(Debug, Clone)]
pub struct TaskService {
    factory: ClientFactory,
}

impl TaskService {
    pub fn new(factory: ClientFactory) -> Self {
        Self { factory }
    }

    /// GET `/tasks/`. The list is returned in server order.
    #[instrument(skip(self))]
    pub async fn fetch_todos(&self) -> Result<Vec<Task>, ApiError> {
        let api = self.factory.client(None);
        let requests = api.requests();
        let response = api.send(requests.build_fetch_todos()).await?;
        requests.parse_fetch_todos(response)
    }

    /// POST `/tasks/` with `{name}`. `name` is not validated.
    #[instrument(skip(self))]
    pub async fn add_todo(&self, name: &str) -> Result<Task, ApiError> {
        let api = self.factory.client(None);
        let requests = api.requests();
        let response = api.send(requests.build_add_todo(name)?).await?;
        requests.parse_add_todo(response)
    }

    /// PUT `/tasks/{id}` with `{name, isDone}`. Yields the updated task or
    /// the server's status body, whichever it sent.
    #[instrument(skip(self))]
    pub async fn update_task(
        &self,
        id: TaskId,
        name: &str,
        is_done: bool,
    ) -> Result<UpdateResult, ApiError> {
        let api = self.factory.client(None);
        let requests = api.requests();
        let response = api
            .send(requests.build_update_task(id, name, is_done)?)
            .await?;
        requests.parse_update_task(response)
    }

    /// DELETE `/tasks/{id}`.
    #[instrument(skip(self))]
    pub async fn delete_task(&self, id: TaskId) -> Result<(), ApiError> {
        let api = self.factory.client(None);
        let requests = api.requests();
        let response = api.send(requests.build_delete_task(id)).await?;
        requests.parse_delete_task(response)
    }
}
