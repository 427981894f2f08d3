//! In-memory `TickTickApi` that records every call.

use std::sync::Mutex;

use async_trait::async_trait;

use ticktick_client::{
    ClientError, ClientResult, CreateProjectRequest, CreateTaskRequest, Project, ProjectData,
    Task, TickTickApi, UpdateTaskRequest,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ApiCall {
    GetProjects,
    GetProject(String),
    GetProjectWithData(String),
    GetTask(String, String),
    CreateTask(CreateTaskRequest),
    UpdateTask(UpdateTaskRequest),
    CompleteTask(String, String),
    DeleteTask(String, String),
    CreateProject(CreateProjectRequest),
    DeleteProject(String),
}

#[derive(Debug, Default)]
pub(crate) struct FakeApi {
    pub projects: Vec<Project>,
    pub project_data: ProjectData,
    pub failure: Option<(u16, String)>,
    calls: Mutex<Vec<ApiCall>>,
}

impl FakeApi {
    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            failure: Some((status, message.to_string())),
            ..Self::default()
        }
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects,
            ..Self::default()
        }
    }

    pub fn with_project_data(project_data: ProjectData) -> Self {
        Self {
            project_data,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ApiCall) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some((status, message)) => Err(ClientError::api_error(*status, message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TickTickApi for FakeApi {
    async fn get_projects(&self) -> ClientResult<Vec<Project>> {
        self.record(ApiCall::GetProjects)?;
        Ok(self.projects.clone())
    }

    async fn get_project(&self, project_id: &str) -> ClientResult<Project> {
        self.record(ApiCall::GetProject(project_id.to_string()))?;
        Ok(Project {
            id: Some(project_id.to_string()),
            name: Some("Work".to_string()),
            ..Project::default()
        })
    }

    async fn get_project_with_data(&self, project_id: &str) -> ClientResult<ProjectData> {
        self.record(ApiCall::GetProjectWithData(project_id.to_string()))?;
        Ok(self.project_data.clone())
    }

    async fn get_task(&self, project_id: &str, task_id: &str) -> ClientResult<Task> {
        self.record(ApiCall::GetTask(
            project_id.to_string(),
            task_id.to_string(),
        ))?;
        Ok(Task {
            id: Some(task_id.to_string()),
            project_id: Some(project_id.to_string()),
            title: Some("Existing task".to_string()),
            ..Task::default()
        })
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> ClientResult<Task> {
        self.record(ApiCall::CreateTask(request.clone()))?;
        Ok(Task {
            id: Some("new-task".to_string()),
            title: Some(request.title.clone()),
            project_id: Some(request.project_id.clone()),
            parent_id: request.parent_id.clone(),
            content: request.content.clone(),
            desc: request.desc.clone(),
            start_date: request.start_date.clone(),
            due_date: request.due_date.clone(),
            priority: i64::from(request.priority.value()),
            tags: request.tags.clone().unwrap_or_default(),
            items: request.items.clone().unwrap_or_default(),
            kind: request.kind.clone(),
            ..Task::default()
        })
    }

    async fn update_task(&self, request: &UpdateTaskRequest) -> ClientResult<Task> {
        self.record(ApiCall::UpdateTask(request.clone()))?;
        Ok(Task {
            id: Some(request.id.clone()),
            project_id: Some(request.project_id.clone()),
            title: request.title.clone(),
            content: request.content.clone(),
            priority: request.priority.map_or(0, |p| i64::from(p.value())),
            ..Task::default()
        })
    }

    async fn complete_task(&self, project_id: &str, task_id: &str) -> ClientResult<()> {
        self.record(ApiCall::CompleteTask(
            project_id.to_string(),
            task_id.to_string(),
        ))
    }

    async fn delete_task(&self, project_id: &str, task_id: &str) -> ClientResult<()> {
        self.record(ApiCall::DeleteTask(
            project_id.to_string(),
            task_id.to_string(),
        ))
    }

    async fn create_project(&self, request: &CreateProjectRequest) -> ClientResult<Project> {
        self.record(ApiCall::CreateProject(request.clone()))?;
        Ok(Project {
            id: Some("new-project".to_string()),
            name: Some(request.name.clone()),
            color: Some(request.color.clone()),
            view_mode: Some(request.view_mode.to_string()),
            closed: Some(false),
            kind: Some(request.kind.clone()),
        })
    }

    async fn delete_project(&self, project_id: &str) -> ClientResult<()> {
        self.record(ApiCall::DeleteProject(project_id.to_string()))
    }
}
