//! Project tools: list, inspect, create, delete.

use ticktick_client::CreateProjectRequest;

use crate::context::ClientContext;
use crate::tools::format::{format_project, format_project_list, format_task_list};
use crate::tools::helpers::failure_text;
use crate::tools::params::{CreateProjectParams, ProjectIdParams};
use crate::tools::validation::validate_view_mode;

pub async fn get_projects(ctx: &ClientContext) -> String {
    let client = match ctx.ensure_client().await {
        Ok(c) => c,
        Err(e) => return e,
    };

    match client.get_projects().await {
        Ok(projects) => format_project_list(&projects),
        Err(e) => failure_text("get_projects", "fetching projects", &e),
    }
}

pub async fn get_project(ctx: &ClientContext, params: ProjectIdParams) -> String {
    let client = match ctx.ensure_client().await {
        Ok(c) => c,
        Err(e) => return e,
    };

    match client.get_project(&params.project_id).await {
        Ok(project) => format_project(&project),
        Err(e) => failure_text("get_project", "fetching project", &e),
    }
}

/// List the tasks of a project, labelled with the project's name when known.
pub async fn get_project_tasks(ctx: &ClientContext, params: ProjectIdParams) -> String {
    let client = match ctx.ensure_client().await {
        Ok(c) => c,
        Err(e) => return e,
    };

    match client.get_project_with_data(&params.project_id).await {
        Ok(data) => {
            let name = data
                .project
                .as_ref()
                .and_then(|p| p.name.as_deref())
                .unwrap_or(&params.project_id);
            format_task_list(name, &data.tasks)
        }
        Err(e) => failure_text("get_project_tasks", "fetching project data", &e),
    }
}

pub async fn create_project(ctx: &ClientContext, params: CreateProjectParams) -> String {
    let client = match ctx.ensure_client().await {
        Ok(c) => c,
        Err(e) => return e,
    };

    let view_mode = match validate_view_mode(&params.view_mode) {
        Ok(v) => v,
        Err(e) => return e.to_string(),
    };

    let request = CreateProjectRequest::new(params.name, params.color, view_mode);
    match client.create_project(&request).await {
        Ok(project) => format!(
            "Project created successfully:\n\n{}",
            format_project(&project)
        ),
        Err(e) => failure_text("create_project", "creating project", &e),
    }
}

pub async fn delete_project(ctx: &ClientContext, params: ProjectIdParams) -> String {
    let client = match ctx.ensure_client().await {
        Ok(c) => c,
        Err(e) => return e,
    };

    match client.delete_project(&params.project_id).await {
        Ok(()) => format!("Project {} deleted successfully.", params.project_id),
        Err(e) => failure_text("delete_project", "deleting project", &e),
    }
}
