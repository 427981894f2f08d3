//! Parameter structs for all MCP tools.

use schemars::JsonSchema;
use serde::Deserialize;

use ticktick_client::models::STATUS_ACTIVE;
use ticktick_client::{ChecklistItem, CreateProjectRequest};

// ── shared ──

/// A checklist item supplied by the caller.
#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
pub struct ChecklistItemParam {
    /// Item title.
    #[schemars(description = "Item title")]
    pub title: String,
    /// 0 for incomplete (default), 2 for complete.
    #[schemars(description = "Item status: 0 (incomplete, default) or 2 (complete)")]
    pub status: Option<i32>,
}

impl From<ChecklistItemParam> for ChecklistItem {
    fn from(p: ChecklistItemParam) -> Self {
        ChecklistItem {
            title: Some(p.title),
            status: p.status.unwrap_or(STATUS_ACTIVE),
            ..ChecklistItem::default()
        }
    }
}

fn default_color() -> String {
    CreateProjectRequest::DEFAULT_COLOR.to_string()
}

fn default_view_mode() -> String {
    "list".to_string()
}

// ── get_project / delete_project / get_project_tasks ──

/// Parameters for tools addressing a single project.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ProjectIdParams {
    /// ID of the project.
    #[schemars(description = "ID of the project")]
    pub project_id: String,
}

// ── get_task / complete_task / delete_task ──

/// Parameters for tools addressing a single task.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TaskRefParams {
    /// ID of the project.
    #[schemars(description = "ID of the project")]
    pub project_id: String,
    /// ID of the task.
    #[schemars(description = "ID of the task")]
    pub task_id: String,
}

// ── create_task ──

/// Parameters for the `create_task` tool.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    /// Task title.
    #[schemars(description = "Task title")]
    pub title: String,
    /// ID of the project to add the task to.
    #[schemars(description = "ID of the project to add the task to")]
    pub project_id: String,
    /// Task description/content.
    #[schemars(description = "Task description/content (optional)")]
    pub content: Option<String>,
    /// Description of checklist.
    #[schemars(
        description = "Description of checklist (optional). Use this WITH items to create a checklist (do NOT use content)"
    )]
    pub desc: Option<String>,
    /// Start date in ISO format YYYY-MM-DDThh:mm:ss+0000.
    #[schemars(description = "Start date in ISO format YYYY-MM-DDThh:mm:ss+0000 (optional)")]
    pub start_date: Option<String>,
    /// Due date in ISO format YYYY-MM-DDThh:mm:ss+0000.
    #[schemars(description = "Due date in ISO format YYYY-MM-DDThh:mm:ss+0000 (optional)")]
    pub due_date: Option<String>,
    /// Priority level: 0 (None, default), 1 (Low), 3 (Medium), 5 (High).
    #[schemars(description = "Priority level: 0 (None, default), 1 (Low), 3 (Medium), 5 (High)")]
    #[serde(default)]
    pub priority: i64,
    /// List of tags to add to the task.
    #[schemars(description = "List of tags to add to the task (optional)")]
    pub tags: Option<Vec<String>>,
    /// Checklist items.
    #[schemars(
        description = "List of checklist items, each with 'title' and optional 'status' (0: incomplete, 2: complete) (optional)"
    )]
    pub items: Option<Vec<ChecklistItemParam>>,
    /// Task type, such as `CHECKLIST`.
    #[schemars(description = "Task type, e.g. \"CHECKLIST\" for checklist tasks (optional)")]
    pub kind: Option<String>,
    /// ID of the parent task to create this as a subtask.
    #[schemars(description = "ID of the parent task to create this as a subtask (optional)")]
    pub parent_id: Option<String>,
}

// ── create_checklist ──

/// Parameters for the `create_checklist` tool.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
pub struct CreateChecklistParams {
    /// Checklist title.
    #[schemars(description = "Checklist title")]
    pub title: String,
    /// ID of the project to add the checklist to.
    #[schemars(description = "ID of the project to add the checklist to")]
    pub project_id: String,
    /// Description of the checklist.
    #[schemars(description = "Description of the checklist (required for checklists)")]
    pub desc: String,
    /// Checklist items.
    #[schemars(
        description = "List of checklist items, each with 'title' and optional 'status' (0: incomplete, 2: complete)"
    )]
    pub items: Vec<ChecklistItemParam>,
    /// Priority level: 0 (None, default), 1 (Low), 3 (Medium), 5 (High).
    #[schemars(description = "Priority level: 0 (None, default), 1 (Low), 3 (Medium), 5 (High)")]
    #[serde(default)]
    pub priority: i64,
    /// List of tags to add to the checklist.
    #[schemars(description = "List of tags to add to the checklist (optional)")]
    pub tags: Option<Vec<String>>,
}

impl From<CreateChecklistParams> for CreateTaskParams {
    fn from(p: CreateChecklistParams) -> Self {
        CreateTaskParams {
            title: p.title,
            project_id: p.project_id,
            desc: Some(p.desc),
            items: Some(p.items),
            priority: p.priority,
            tags: p.tags,
            ..CreateTaskParams::default()
        }
    }
}

// ── create_basic_task ──

/// Parameters for the `create_basic_task` tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CreateBasicTaskParams {
    /// Task title.
    #[schemars(description = "Task title")]
    pub title: String,
    /// ID of the project to add the task to.
    #[schemars(description = "ID of the project to add the task to")]
    pub project_id: String,
    /// Task description/content.
    #[schemars(description = "Task description/content (optional)")]
    pub content: Option<String>,
    /// Start date in ISO format YYYY-MM-DDThh:mm:ss+0000.
    #[schemars(description = "Start date in ISO format YYYY-MM-DDThh:mm:ss+0000 (optional)")]
    pub start_date: Option<String>,
    /// Due date in ISO format YYYY-MM-DDThh:mm:ss+0000.
    #[schemars(description = "Due date in ISO format YYYY-MM-DDThh:mm:ss+0000 (optional)")]
    pub due_date: Option<String>,
    /// Priority level: 0 (None, default), 1 (Low), 3 (Medium), 5 (High).
    #[schemars(description = "Priority level: 0 (None, default), 1 (Low), 3 (Medium), 5 (High)")]
    #[serde(default)]
    pub priority: i64,
    /// List of tags to add to the task.
    #[schemars(description = "List of tags to add to the task (optional)")]
    pub tags: Option<Vec<String>>,
}

impl From<CreateBasicTaskParams> for CreateTaskParams {
    fn from(p: CreateBasicTaskParams) -> Self {
        CreateTaskParams {
            title: p.title,
            project_id: p.project_id,
            content: p.content,
            start_date: p.start_date,
            due_date: p.due_date,
            priority: p.priority,
            tags: p.tags,
            ..CreateTaskParams::default()
        }
    }
}

// ── create_subtask ──

/// Parameters for the `create_subtask` tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CreateSubtaskParams {
    /// Task title.
    #[schemars(description = "Task title")]
    pub title: String,
    /// ID of the project.
    #[schemars(description = "ID of the project")]
    pub project_id: String,
    /// ID of the parent task.
    #[schemars(description = "ID of the parent task (required)")]
    pub parent_task_id: String,
    /// Task description/content.
    #[schemars(description = "Task description/content (optional)")]
    pub content: Option<String>,
    /// Start date in ISO format YYYY-MM-DDThh:mm:ss+0000.
    #[schemars(description = "Start date in ISO format YYYY-MM-DDThh:mm:ss+0000 (optional)")]
    pub start_date: Option<String>,
    /// Due date in ISO format YYYY-MM-DDThh:mm:ss+0000.
    #[schemars(description = "Due date in ISO format YYYY-MM-DDThh:mm:ss+0000 (optional)")]
    pub due_date: Option<String>,
    /// Priority level: 0 (None, default), 1 (Low), 3 (Medium), 5 (High).
    #[schemars(description = "Priority level: 0 (None, default), 1 (Low), 3 (Medium), 5 (High)")]
    #[serde(default)]
    pub priority: i64,
    /// List of tags to add to the task.
    #[schemars(description = "List of tags to add to the task (optional)")]
    pub tags: Option<Vec<String>>,
}

impl From<CreateSubtaskParams> for CreateTaskParams {
    fn from(p: CreateSubtaskParams) -> Self {
        CreateTaskParams {
            title: p.title,
            project_id: p.project_id,
            parent_id: Some(p.parent_task_id),
            content: p.content,
            start_date: p.start_date,
            due_date: p.due_date,
            priority: p.priority,
            tags: p.tags,
            ..CreateTaskParams::default()
        }
    }
}

// ── create_checklist_task ──

/// Parameters for the `create_checklist_task` tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CreateChecklistTaskParams {
    /// Task title (also used as the checklist description).
    #[schemars(description = "Task title (also used as the checklist description)")]
    pub title: String,
    /// ID of the project to add the checklist to.
    #[schemars(description = "ID of the project to add the checklist to")]
    pub project_id: String,
    /// List of checklist item titles (as strings).
    #[schemars(description = "List of checklist item titles (as strings)")]
    pub items: Vec<String>,
    /// Priority level: 0 (None, default), 1 (Low), 3 (Medium), 5 (High).
    #[schemars(description = "Priority level: 0 (None, default), 1 (Low), 3 (Medium), 5 (High)")]
    #[serde(default)]
    pub priority: i64,
    /// List of tags to add to the checklist.
    #[schemars(description = "List of tags to add to the checklist (optional)")]
    pub tags: Option<Vec<String>>,
}

impl From<CreateChecklistTaskParams> for CreateChecklistParams {
    fn from(p: CreateChecklistTaskParams) -> Self {
        CreateChecklistParams {
            desc: p.title.clone(),
            title: p.title,
            project_id: p.project_id,
            items: p
                .items
                .into_iter()
                .map(|title| ChecklistItemParam {
                    title,
                    status: Some(STATUS_ACTIVE),
                })
                .collect(),
            priority: p.priority,
            tags: p.tags,
        }
    }
}

// ── update_task ──

/// Parameters for the `update_task` tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    /// ID of the task to update.
    #[schemars(description = "ID of the task to update")]
    pub task_id: String,
    /// ID of the project the task belongs to.
    #[schemars(description = "ID of the project the task belongs to")]
    pub project_id: String,
    /// New task title.
    #[schemars(description = "New task title (optional)")]
    pub title: Option<String>,
    /// New task description/content.
    #[schemars(description = "New task description/content (optional)")]
    pub content: Option<String>,
    /// New checklist description, use this for checklist tasks.
    #[schemars(description = "New checklist description (optional), use this for checklist tasks")]
    pub desc: Option<String>,
    /// New start date in ISO format YYYY-MM-DDThh:mm:ss+0000.
    #[schemars(description = "New start date in ISO format YYYY-MM-DDThh:mm:ss+0000 (optional)")]
    pub start_date: Option<String>,
    /// New due date in ISO format YYYY-MM-DDThh:mm:ss+0000.
    #[schemars(description = "New due date in ISO format YYYY-MM-DDThh:mm:ss+0000 (optional)")]
    pub due_date: Option<String>,
    /// New priority level: 0 (None), 1 (Low), 3 (Medium), 5 (High).
    #[schemars(description = "New priority level: 0 (None), 1 (Low), 3 (Medium), 5 (High) (optional)")]
    pub priority: Option<i64>,
    /// New list of tags for the task.
    #[schemars(description = "New list of tags for the task (optional)")]
    pub tags: Option<Vec<String>>,
    /// Replacement checklist items.
    #[schemars(
        description = "New list of checklist items, each with 'title' and optional 'status' (0: incomplete, 2: complete) (optional)"
    )]
    pub items: Option<Vec<ChecklistItemParam>>,
}

// ── create_project ──

/// Parameters for the `create_project` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateProjectParams {
    /// Project name.
    #[schemars(description = "Project name")]
    pub name: String,
    /// Color code in hex format.
    #[schemars(description = "Color code in hex format (optional, defaults to #F18181)")]
    #[serde(default = "default_color")]
    pub color: String,
    /// View mode: one of list, kanban, or timeline.
    #[schemars(description = "View mode: one of list, kanban, or timeline (optional, defaults to list)")]
    #[serde(default = "default_view_mode")]
    pub view_mode: String,
}

impl CreateProjectParams {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: default_color(),
            view_mode: default_view_mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undescribed_fields(schema: schemars::Schema) -> Vec<String> {
        let value = serde_json::to_value(&schema).unwrap();
        value["properties"]
            .as_object()
            .into_iter()
            .flatten()
            .filter(|(_, prop)| prop.get("description").is_none())
            .map(|(name, _)| name.clone())
            .collect()
    }

    #[test]
    fn test_every_field_is_described() {
        let schemas = [
            ("ChecklistItemParam", schemars::schema_for!(ChecklistItemParam)),
            ("ProjectIdParams", schemars::schema_for!(ProjectIdParams)),
            ("TaskRefParams", schemars::schema_for!(TaskRefParams)),
            ("CreateTaskParams", schemars::schema_for!(CreateTaskParams)),
            ("CreateChecklistParams", schemars::schema_for!(CreateChecklistParams)),
            ("CreateBasicTaskParams", schemars::schema_for!(CreateBasicTaskParams)),
            ("CreateSubtaskParams", schemars::schema_for!(CreateSubtaskParams)),
            ("CreateChecklistTaskParams", schemars::schema_for!(CreateChecklistTaskParams)),
            ("UpdateTaskParams", schemars::schema_for!(UpdateTaskParams)),
            ("CreateProjectParams", schemars::schema_for!(CreateProjectParams)),
        ];
        for (name, schema) in schemas {
            let missing = undescribed_fields(schema);
            assert!(missing.is_empty(), "{name} fields without description: {missing:?}");
        }
    }

    #[test]
    fn test_create_task_defaults() {
        let params: CreateTaskParams =
            serde_json::from_value(serde_json::json!({"title": "A", "project_id": "p"})).unwrap();
        assert_eq!(params.priority, 0);
        assert!(params.items.is_none());
    }

    #[test]
    fn test_create_project_defaults() {
        let params: CreateProjectParams =
            serde_json::from_value(serde_json::json!({"name": "Work"})).unwrap();
        assert_eq!(params.color, "#F18181");
        assert_eq!(params.view_mode, "list");
    }

    #[test]
    fn test_checklist_task_conversion() {
        let params = CreateChecklistTaskParams {
            title: "Groceries".into(),
            project_id: "p1".into(),
            items: vec!["milk".into(), "eggs".into()],
            priority: 1,
            tags: None,
        };
        let checklist = CreateChecklistParams::from(params);
        assert_eq!(checklist.desc, "Groceries");
        assert_eq!(checklist.items.len(), 2);
        assert_eq!(checklist.items[1].title, "eggs");
        assert_eq!(checklist.items[1].status, Some(0));
    }

    #[test]
    fn test_item_param_defaults_to_incomplete() {
        let item: ChecklistItem = ChecklistItemParam {
            title: "x".into(),
            status: None,
        }
        .into();
        assert_eq!(item.status, 0);
        assert_eq!(item.title.as_deref(), Some("x"));
    }
}
