//! MCP ServerHandler implementation for TickTick.
//!
//! Exposes the TickTick Open API as fourteen MCP tools:
//!
//! **Projects**
//! - `get_projects`: List all projects
//! - `get_project`: Show one project
//! - `get_project_tasks`: List the tasks of a project
//! - `create_project`: Create a project
//! - `delete_project`: Delete a project
//!
//! **Tasks**
//! - `get_task`: Show one task
//! - `create_task`: Create a task, checklist or subtask
//! - `create_checklist`: Create a checklist with visible items
//! - `create_basic_task`: Create a plain task
//! - `create_subtask`: Create a task under a parent task
//! - `create_checklist_task`: Create a checklist from item titles
//! - `update_task`: Change selected fields of a task
//! - `complete_task`: Mark a task complete
//! - `delete_task`: Delete a task
//!
//! Every tool returns plain text. Failures are reported in the text, never as
//! protocol errors.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};

use crate::context::{ClientContext, ConfigSource};
use crate::tools::{self, *};

/// TickTick MCP server handler.
#[derive(Debug, Clone)]
pub struct TickTickMcpServer {
    tool_router: ToolRouter<Self>,
    context: Arc<ClientContext>,
}

impl TickTickMcpServer {
    /// Create a server around an existing client context.
    pub fn with_context(context: ClientContext) -> Self {
        Self {
            tool_router: Self::tool_router(),
            context: Arc::new(context),
        }
    }

    /// Create a server that connects lazily using `source`.
    pub fn from_source(source: ConfigSource) -> Self {
        Self::with_context(ClientContext::from_source(source))
    }

    /// Get a reference to the shared client context.
    pub fn context(&self) -> &ClientContext {
        &self.context
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TickTickMcpServer {
    fn get_info(&self) -> ServerInfo {
        let instructions = "TickTick is a task management service. You help the user manage \
             projects and tasks.\n\
             Discovery: get_projects → get_project_tasks → get_task.\n\
             Creating: create_basic_task for plain tasks, create_subtask to nest under a parent, \
             create_checklist or create_checklist_task for checklists (use desc with items, not content).\n\
             Dates use ISO format YYYY-MM-DDThh:mm:ss+0000. Priority is 0 (None), 1 (Low), 3 (Medium) or 5 (High).\n\
             Changing: update_task, complete_task, delete_task, create_project, delete_project."
            .to_string();

        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "ticktick-mcp".to_string(),
                title: Some("TickTick MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server exposing TickTick projects and tasks: listing, creation, \
                     checklists, subtasks, updates and completion"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(instructions),
        }
    }
}

#[tool_router(router = tool_router)]
impl TickTickMcpServer {
    // ── Projects ──

    #[tool(
        name = "get_projects",
        description = "Get all projects from TickTick."
    )]
    pub async fn get_projects(&self) -> String {
        tools::projects::get_projects(&self.context).await
    }

    #[tool(
        name = "get_project",
        description = "Get details about a specific project."
    )]
    pub async fn get_project(&self, Parameters(params): Parameters<ProjectIdParams>) -> String {
        tools::projects::get_project(&self.context, params).await
    }

    #[tool(
        name = "get_project_tasks",
        description = "Get all tasks in a specific project."
    )]
    pub async fn get_project_tasks(
        &self,
        Parameters(params): Parameters<ProjectIdParams>,
    ) -> String {
        tools::projects::get_project_tasks(&self.context, params).await
    }

    #[tool(
        name = "create_project",
        description = "Create a new project in TickTick. view_mode is one of list, kanban or timeline."
    )]
    pub async fn create_project(
        &self,
        Parameters(params): Parameters<CreateProjectParams>,
    ) -> String {
        tools::projects::create_project(&self.context, params).await
    }

    #[tool(name = "delete_project", description = "Delete a project.")]
    pub async fn delete_project(&self, Parameters(params): Parameters<ProjectIdParams>) -> String {
        tools::projects::delete_project(&self.context, params).await
    }

    // ── Tasks ──

    #[tool(
        name = "get_task",
        description = "Get details about a specific task."
    )]
    pub async fn get_task(&self, Parameters(params): Parameters<TaskRefParams>) -> String {
        tools::tasks::get_task(&self.context, params).await
    }

    /// Generic create. Supplying both `desc` and `items` makes a checklist.
    #[tool(
        name = "create_task",
        description = "Create a new task in TickTick. For checklists pass desc together with items and leave content empty. Pass parent_id to create a subtask."
    )]
    pub async fn create_task(&self, Parameters(params): Parameters<CreateTaskParams>) -> String {
        tools::tasks::create_task(&self.context, params).await
    }

    #[tool(
        name = "create_checklist",
        description = "Create a checklist task with visible items in TickTick. Each item has a title and an optional status (0: incomplete, 2: complete)."
    )]
    pub async fn create_checklist(
        &self,
        Parameters(params): Parameters<CreateChecklistParams>,
    ) -> String {
        tools::tasks::create_checklist(&self.context, params).await
    }

    #[tool(
        name = "create_basic_task",
        description = "Create a basic task (no subtasks or checklists)."
    )]
    pub async fn create_basic_task(
        &self,
        Parameters(params): Parameters<CreateBasicTaskParams>,
    ) -> String {
        tools::tasks::create_basic_task(&self.context, params).await
    }

    #[tool(
        name = "create_subtask",
        description = "Create a subtask under an existing parent task."
    )]
    pub async fn create_subtask(
        &self,
        Parameters(params): Parameters<CreateSubtaskParams>,
    ) -> String {
        tools::tasks::create_subtask(&self.context, params).await
    }

    #[tool(
        name = "create_checklist_task",
        description = "Create a checklist from a list of item titles. The task title doubles as the checklist description."
    )]
    pub async fn create_checklist_task(
        &self,
        Parameters(params): Parameters<CreateChecklistTaskParams>,
    ) -> String {
        tools::tasks::create_checklist_task(&self.context, params).await
    }

    #[tool(
        name = "update_task",
        description = "Update an existing task in TickTick. Only the fields provided are changed."
    )]
    pub async fn update_task(&self, Parameters(params): Parameters<UpdateTaskParams>) -> String {
        tools::tasks::update_task(&self.context, params).await
    }

    #[tool(name = "complete_task", description = "Mark a task as complete.")]
    pub async fn complete_task(&self, Parameters(params): Parameters<TaskRefParams>) -> String {
        tools::tasks::complete_task(&self.context, params).await
    }

    #[tool(name = "delete_task", description = "Delete a task.")]
    pub async fn delete_task(&self, Parameters(params): Parameters<TaskRefParams>) -> String {
        tools::tasks::delete_task(&self.context, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::FakeApi;

    fn server() -> TickTickMcpServer {
        TickTickMcpServer::with_context(ClientContext::with_client(Arc::new(FakeApi::default())))
    }

    #[test]
    fn test_server_info() {
        let info = server().get_info();

        assert_eq!(info.server_info.name, "ticktick-mcp");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(info.protocol_version, ProtocolVersion::V_2025_03_26);
        let instructions = info.instructions.unwrap();
        assert!(instructions.contains("get_projects"));
        assert!(instructions.contains("create_checklist"));
    }

    #[test]
    fn test_router_registers_every_tool() {
        let server = server();
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                "complete_task",
                "create_basic_task",
                "create_checklist",
                "create_checklist_task",
                "create_project",
                "create_subtask",
                "create_task",
                "delete_project",
                "delete_task",
                "get_project",
                "get_project_tasks",
                "get_projects",
                "get_task",
                "update_task",
            ]
        );
    }

    #[tokio::test]
    async fn test_tool_methods_delegate() {
        let server = server();
        assert_eq!(server.get_projects().await, "No projects found.");

        let result = server
            .complete_task(Parameters(TaskRefParams {
                project_id: "p1".into(),
                task_id: "t1".into(),
            }))
            .await;
        assert_eq!(result, "Task t1 marked as complete.");
        assert!(server.context().is_initialized());
    }
}
