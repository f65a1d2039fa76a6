//! HTTP Client
//!
//! `TodoApi` over reqwest with JSON bodies.

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use super::TodoApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{NewTask, Task, TaskId};

/// Path prefix every API route lives under
pub const API_PREFIX: &str = "/api/v1";

/// Where the backend listens during development
pub const DEFAULT_BACKEND: &str = "http://localhost:1111";

/// Connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Absolute URL of the API root, without a trailing slash
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// API mounted under the page's own origin (the dev server proxies it).
    /// Falls back to the local backend when there is no usable origin.
    pub fn for_origin(origin: &str) -> Self {
        if origin.is_empty() || origin == "null" {
            return Self::default();
        }
        Self::new(format!("{}{}", origin.trim_end_matches('/'), API_PREFIX))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(format!("{}{}", DEFAULT_BACKEND, API_PREFIX))
    }
}

/// reqwest-backed API client
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }
}

/// Turn a non-2xx response into `ApiError::Status`
fn check_status(response: Response, method: &'static str, path: &str) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        debug!(method, path, status = status.as_u16(), "api response");
        Ok(response)
    } else {
        Err(ApiError::Status {
            method,
            path: path.to_string(),
            status: status.as_u16(),
        })
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpApi {
    async fn list(&self) -> ApiResult<Vec<Task>> {
        let path = "/todos";
        let response = self.client.get(self.url(path)).send().await?;
        let tasks = check_status(response, "GET", path)?.json().await?;
        Ok(tasks)
    }

    async fn create(&self, task: &NewTask) -> ApiResult<Task> {
        let path = "/todos";
        let response = self.client.post(self.url(path)).json(task).send().await?;
        let created = check_status(response, "POST", path)?.json().await?;
        Ok(created)
    }

    async fn update(&self, task: &Task) -> ApiResult<Task> {
        let path = format!("/todos/{}", task.id);
        let response = self.client.put(self.url(&path)).json(task).send().await?;
        let updated = check_status(response, "PUT", &path)?.json().await?;
        Ok(updated)
    }

    async fn delete(&self, id: &TaskId) -> ApiResult<()> {
        let path = format!("/todos/{}", id);
        let response = self.client.delete(self.url(&path)).send().await?;
        check_status(response, "DELETE", &path)?;
        Ok(())
    }
}
