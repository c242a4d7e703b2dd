//! HTTP client for the remote task store.
//!
//! A thin wrapper over the five endpoints the store exposes; no business
//! logic, no retries. Any transport failure or non-success status surfaces
//! as a [`FetchError`] to the caller.

use crate::protocol::{CreateTask, ReplaceOrder, UpdateDescription};
use crate::types::Task;
use log::debug;
use reqwest::{Method, Response, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Per-request deadline; exceeding it is reported like any other transport
/// failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The single error kind at the store boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Could not construct the underlying HTTP client.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a usable response (connect failure,
    /// timeout, body decode).
    #[error("{method} {url} failed: {source}")]
    Transport {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The store answered outside the success range.
    #[error("{method} {url} returned {status}")]
    Status {
        method: Method,
        url: String,
        status: StatusCode,
    },
}

impl FetchError {
    fn transport(method: Method, url: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            method,
            url: url.to_string(),
            source,
        }
    }
}

/// Client for the remote task store.
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl StoreClient {
    /// Build a client against the given base URL (e.g.
    /// `http://localhost:3000/api`). A trailing slash is tolerated.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a response to `FetchError::Status` unless it is in the success
    /// range.
    fn expect_success(method: Method, url: &str, response: &Response) -> Result<(), FetchError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(FetchError::Status {
                method,
                url: url.to_string(),
                status: response.status(),
            })
        }
    }

    /// Fetch all tasks, ordered by rank ascending.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, FetchError> {
        let url = self.endpoint("/todos");
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::transport(Method::GET, &url, e))?;
        Self::expect_success(Method::GET, &url, &response)?;

        response
            .json::<Vec<Task>>()
            .await
            .map_err(|e| FetchError::transport(Method::GET, &url, e))
    }

    /// Persist a new task with caller-supplied id and rank.
    pub async fn create_task(&self, task: &Task) -> Result<(), FetchError> {
        let url = self.endpoint("/todos");
        debug!("POST {} id={}", url, task.id);

        let body = CreateTask { task: task.clone() };
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| FetchError::transport(Method::POST, &url, e))?;

        Self::expect_success(Method::POST, &url, &response)
    }

    /// Remove one task by id.
    pub async fn delete_task(&self, id: i64) -> Result<(), FetchError> {
        let url = self.endpoint(&format!("/todos/{id}"));
        debug!("DELETE {}", url);

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| FetchError::transport(Method::DELETE, &url, e))?;

        Self::expect_success(Method::DELETE, &url, &response)
    }

    /// Partial update of one task's description.
    pub async fn update_description(&self, id: i64, description: &str) -> Result<(), FetchError> {
        let url = self.endpoint(&format!("/todos/{id}"));
        debug!("PATCH {}", url);

        let body = UpdateDescription {
            description: description.to_string(),
        };
        let response = self
            .http
            .patch(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| FetchError::transport(Method::PATCH, &url, e))?;

        Self::expect_success(Method::PATCH, &url, &response)
    }

    /// Bulk upsert of rank (and incidentally description) for the given
    /// subset of tasks. Used after delete and reorder.
    pub async fn replace_order(&self, tasks: &[Task]) -> Result<(), FetchError> {
        let url = self.endpoint("/todos");
        debug!("PUT {} ({} task(s))", url, tasks.len());

        let body = ReplaceOrder {
            tasks: tasks.to_vec(),
        };
        let response = self
            .http
            .put(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| FetchError::transport(Method::PUT, &url, e))?;

        Self::expect_success(Method::PUT, &url, &response)
    }
}
