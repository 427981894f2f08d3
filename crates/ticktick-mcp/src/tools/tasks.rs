//! Task tools: fetch, create (plain, checklist, subtask), update, complete, delete.

use ticktick_client::{ChecklistItem, CreateTaskRequest, UpdateTaskRequest};

use crate::context::ClientContext;
use crate::tools::format::format_task;
use crate::tools::helpers::failure_text;
use crate::tools::params::{
    ChecklistItemParam, CreateBasicTaskParams, CreateChecklistParams, CreateChecklistTaskParams,
    CreateSubtaskParams, CreateTaskParams, TaskRefParams, UpdateTaskParams,
};
use crate::tools::validation::{
    non_empty, validate_date, validate_optional_priority, validate_priority, ValidationError,
};

fn convert_items(items: Vec<ChecklistItemParam>) -> Vec<ChecklistItem> {
    items.into_iter().map(ChecklistItem::from).collect()
}

/// Validate create parameters and build the request body.
///
/// A description together with a non-empty item list makes the task a
/// checklist: `content` and `kind` are then dropped so the remote renders
/// the items.
pub fn build_create_request(params: CreateTaskParams) -> Result<CreateTaskRequest, ValidationError> {
    let priority = validate_priority(params.priority)?;
    validate_date("start_date", params.start_date.as_deref())?;
    validate_date("due_date", params.due_date.as_deref())?;

    let desc = non_empty(params.desc);
    let items = params.items.map(convert_items).filter(|i| !i.is_empty());
    let is_checklist = desc.is_some() && items.is_some();

    let (content, kind) = if is_checklist {
        (None, None)
    } else {
        (non_empty(params.content), non_empty(params.kind))
    };

    Ok(CreateTaskRequest {
        title: params.title,
        project_id: params.project_id,
        content,
        desc,
        start_date: non_empty(params.start_date),
        due_date: non_empty(params.due_date),
        priority,
        tags: params.tags,
        items,
        kind,
        parent_id: non_empty(params.parent_id),
        is_all_day: false,
    })
}

/// Validate update parameters and build the request body. Unset fields are
/// left untouched on the remote side.
pub fn build_update_request(params: UpdateTaskParams) -> Result<UpdateTaskRequest, ValidationError> {
    let priority = validate_optional_priority(params.priority)?;
    validate_date("start_date", params.start_date.as_deref())?;
    validate_date("due_date", params.due_date.as_deref())?;

    Ok(UpdateTaskRequest {
        id: params.task_id,
        project_id: params.project_id,
        title: params.title,
        content: params.content,
        desc: params.desc,
        start_date: non_empty(params.start_date),
        due_date: non_empty(params.due_date),
        priority,
        tags: params.tags,
        items: params.items.map(convert_items),
    })
}

pub async fn get_task(ctx: &ClientContext, params: TaskRefParams) -> String {
    let client = match ctx.ensure_client().await {
        Ok(c) => c,
        Err(e) => return e,
    };

    match client.get_task(&params.project_id, &params.task_id).await {
        Ok(task) => format_task(&task),
        Err(e) => failure_text("get_task", "fetching task", &e),
    }
}

pub async fn create_task(ctx: &ClientContext, params: CreateTaskParams) -> String {
    let client = match ctx.ensure_client().await {
        Ok(c) => c,
        Err(e) => return e,
    };

    let request = match build_create_request(params) {
        Ok(r) => r,
        Err(e) => return e.to_string(),
    };

    match client.create_task(&request).await {
        Ok(task) => format!("Task created successfully:\n\n{}", format_task(&task)),
        Err(e) => failure_text("create_task", "creating task", &e),
    }
}

pub async fn create_checklist(ctx: &ClientContext, params: CreateChecklistParams) -> String {
    let client = match ctx.ensure_client().await {
        Ok(c) => c,
        Err(e) => return e,
    };

    let request = match build_create_request(params.into()) {
        Ok(r) => r,
        Err(e) => return e.to_string(),
    };

    match client.create_task(&request).await {
        Ok(task) => format!("Checklist created successfully:\n\n{}", format_task(&task)),
        Err(e) => failure_text("create_checklist", "creating checklist", &e),
    }
}

pub async fn create_basic_task(ctx: &ClientContext, params: CreateBasicTaskParams) -> String {
    create_task(ctx, params.into()).await
}

pub async fn create_subtask(ctx: &ClientContext, params: CreateSubtaskParams) -> String {
    create_task(ctx, params.into()).await
}

pub async fn create_checklist_task(
    ctx: &ClientContext,
    params: CreateChecklistTaskParams,
) -> String {
    create_checklist(ctx, params.into()).await
}

pub async fn update_task(ctx: &ClientContext, params: UpdateTaskParams) -> String {
    let client = match ctx.ensure_client().await {
        Ok(c) => c,
        Err(e) => return e,
    };

    let request = match build_update_request(params) {
        Ok(r) => r,
        Err(e) => return e.to_string(),
    };

    match client.update_task(&request).await {
        Ok(task) => format!("Task updated successfully:\n\n{}", format_task(&task)),
        Err(e) => failure_text("update_task", "updating task", &e),
    }
}

pub async fn complete_task(ctx: &ClientContext, params: TaskRefParams) -> String {
    let client = match ctx.ensure_client().await {
        Ok(c) => c,
        Err(e) => return e,
    };

    match client
        .complete_task(&params.project_id, &params.task_id)
        .await
    {
        Ok(()) => format!("Task {} marked as complete.", params.task_id),
        Err(e) => failure_text("complete_task", "completing task", &e),
    }
}

pub async fn delete_task(ctx: &ClientContext, params: TaskRefParams) -> String {
    let client = match ctx.ensure_client().await {
        Ok(c) => c,
        Err(e) => return e,
    };

    match client.delete_task(&params.project_id, &params.task_id).await {
        Ok(()) => format!("Task {} deleted successfully.", params.task_id),
        Err(e) => failure_text("delete_task", "deleting task", &e),
    }
}
