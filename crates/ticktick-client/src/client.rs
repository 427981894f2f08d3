//! TickTick Open API transport.
//!
//! [`TickTickApi`] is the seam the MCP layer depends on; [`TickTickClient`] is
//! the reqwest implementation. Every call is a single request/response with
//! no retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{
    CreateProjectRequest, CreateTaskRequest, Project, ProjectData, Task, UpdateTaskRequest,
};

/// Operations exposed by the remote task-management service.
#[async_trait]
pub trait TickTickApi: Send + Sync + std::fmt::Debug {
    /// List all projects visible to the token.
    async fn get_projects(&self) -> ClientResult<Vec<Project>>;

    async fn get_project(&self, project_id: &str) -> ClientResult<Project>;

    /// Fetch a project together with its undone tasks.
    async fn get_project_with_data(&self, project_id: &str) -> ClientResult<ProjectData>;

    async fn get_task(&self, project_id: &str, task_id: &str) -> ClientResult<Task>;

    async fn create_task(&self, request: &CreateTaskRequest) -> ClientResult<Task>;

    async fn update_task(&self, request: &UpdateTaskRequest) -> ClientResult<Task>;

    async fn complete_task(&self, project_id: &str, task_id: &str) -> ClientResult<()>;

    async fn delete_task(&self, project_id: &str, task_id: &str) -> ClientResult<()>;

    async fn create_project(&self, request: &CreateProjectRequest) -> ClientResult<Project>;

    async fn delete_project(&self, project_id: &str) -> ClientResult<()>;
}

/// HTTP client for the TickTick Open API.
#[derive(Debug)]
pub struct TickTickClient {
    http: Client,
    base_url: String,
    access_token: SecretString,
}

impl TickTickClient {
    /// Build a client from resolved configuration.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(concat!("ticktick-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: SecretString::from(config.access_token.expose_secret().to_owned()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "TickTick API request");
        self.http
            .request(method, url)
            .bearer_auth(self.access_token.expose_secret())
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let response = Self::check_status(builder.send().await?).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn send_empty(&self, builder: RequestBuilder) -> ClientResult<()> {
        Self::check_status(builder.send().await?).await?;
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send_json(self.request(Method::GET, path)).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send_json(self.request(Method::POST, path).json(body))
            .await
    }

    async fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), %body, "TickTick API error response");
        Err(ClientError::from_status(status.as_u16(), body))
    }
}

#[async_trait]
impl TickTickApi for TickTickClient {
    async fn get_projects(&self) -> ClientResult<Vec<Project>> {
        self.get("/project").await
    }

    async fn get_project(&self, project_id: &str) -> ClientResult<Project> {
        self.get(&format!("/project/{project_id}")).await
    }

    async fn get_project_with_data(&self, project_id: &str) -> ClientResult<ProjectData> {
        self.get(&format!("/project/{project_id}/data")).await
    }

    async fn get_task(&self, project_id: &str, task_id: &str) -> ClientResult<Task> {
        self.get(&format!("/project/{project_id}/task/{task_id}"))
            .await
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> ClientResult<Task> {
        self.post("/task", request).await
    }

    async fn update_task(&self, request: &UpdateTaskRequest) -> ClientResult<Task> {
        if request.id.is_empty() {
            return Err(ClientError::invalid_response(
                "id",
                "task id is required for updates",
            ));
        }
        self.post(&format!("/task/{}", request.id), request).await
    }

    async fn complete_task(&self, project_id: &str, task_id: &str) -> ClientResult<()> {
        self.send_empty(self.request(
            Method::POST,
            &format!("/project/{project_id}/task/{task_id}/complete"),
        ))
        .await
    }

    async fn delete_task(&self, project_id: &str, task_id: &str) -> ClientResult<()> {
        self.send_empty(self.request(
            Method::DELETE,
            &format!("/project/{project_id}/task/{task_id}"),
        ))
        .await
    }

    async fn create_project(&self, request: &CreateProjectRequest) -> ClientResult<Project> {
        self.post("/project", request).await
    }

    async fn delete_project(&self, project_id: &str) -> ClientResult<()> {
        self.send_empty(self.request(Method::DELETE, &format!("/project/{project_id}")))
            .await
    }
}
