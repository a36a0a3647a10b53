//! Async API client for the `/tasks/` resource.
//!
//! # Overview
//! A `ClientFactory` produces HTTP clients bound to a base address, and a
//! `TaskService` exposes the four task operations on top of it: fetch, add,
//! update and delete.
//!
//! # Design
//! - Request construction and response parsing live in `TaskRequests`,
//!   which never touches the network (host-does-IO). `ApiClient::send`
//!   performs the actual round-trip with reqwest.
//! - A new client is built for every operation; there is no pooling.
//! - The default base address comes from `Settings`, resolved once at
//!   startup and passed in explicitly.
//! - Errors are passed through unclassified: see `ApiError`.

pub mod config;
pub mod error;
pub mod factory;
pub mod http;
pub mod requests;
pub mod service;
pub mod types;

pub use config::Settings;
pub use error::{ApiError, ConfigError};
pub use factory::{ApiClient, ClientFactory};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use requests::TaskRequests;
pub use service::TaskService;
pub use types::{NewTask, Status, Task, TaskId, TaskUpdate, UpdateResult};
