//! HTTP adapter for the remote task storage service.
//!
//! The service exposes a JSON resource at `{base}/tasks`:
//!
//! | Operation | Request                  |
//! |-----------|--------------------------|
//! | list      | `GET /tasks`             |
//! | create    | `POST /tasks`            |
//! | update    | `PUT /tasks/{id}`        |
//! | delete    | `DELETE /tasks/{id}`     |

mod config;
mod models;
mod task_store;

pub use config::{
    HttpTaskStoreConfig, HttpTaskStoreConfigError, STORE_TIMEOUT_ENV, STORE_URL_ENV,
};
pub use task_store::HttpTaskStore;
