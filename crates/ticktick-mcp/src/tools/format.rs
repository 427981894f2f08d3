//! Plain-text rendering of projects and tasks.

use std::fmt::Write;

use ticktick_client::{Priority, Project, Task};

const COMPLETED_MARK: &str = "✓";
const OPEN_MARK: &str = "○";

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn priority_label(priority: i64) -> String {
    Priority::try_from(priority)
        .map(|p| p.label().to_string())
        .unwrap_or_else(|raw| raw.to_string())
}

/// Render a task as a multi-line block.
pub fn format_task(task: &Task) -> String {
    let mut out = String::new();
    // `write!` into a String cannot fail.
    let _ = writeln!(out, "ID: {}", present(&task.id).unwrap_or("No ID"));
    let _ = writeln!(out, "Title: {}", present(&task.title).unwrap_or("No title"));
    let _ = writeln!(
        out,
        "Project ID: {}",
        present(&task.project_id).unwrap_or("None")
    );

    if let Some(start) = present(&task.start_date) {
        let _ = writeln!(out, "Start Date: {start}");
    }
    if let Some(due) = present(&task.due_date) {
        let _ = writeln!(out, "Due Date: {due}");
    }

    let _ = writeln!(out, "Priority: {}", priority_label(task.priority));
    let status = if task.is_completed() {
        "Completed"
    } else {
        "Active"
    };
    let _ = writeln!(out, "Status: {status}");

    if let Some(content) = present(&task.content) {
        let _ = writeln!(out, "\nContent:\n{content}");
    }
    if let Some(desc) = present(&task.desc) {
        let _ = writeln!(out, "\nDescription:\n{desc}");
    }

    if !task.items.is_empty() {
        let _ = writeln!(out, "\nChecklist Items ({}):", task.items.len());
        for item in &task.items {
            let mark = if item.is_completed() {
                COMPLETED_MARK
            } else {
                OPEN_MARK
            };
            let title = present(&item.title).unwrap_or("Untitled item");
            let _ = writeln!(out, "  {mark} {title}");
        }
    }

    if !task.tags.is_empty() {
        let _ = writeln!(out, "\nTags: {}", task.tags.join(", "));
    }

    out
}

/// Render a project as a multi-line block.
pub fn format_project(project: &Project) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Name: {}", present(&project.name).unwrap_or("No name"));
    let _ = writeln!(out, "ID: {}", present(&project.id).unwrap_or("No ID"));

    if let Some(color) = present(&project.color) {
        let _ = writeln!(out, "Color: {color}");
    }
    if let Some(view_mode) = present(&project.view_mode) {
        let _ = writeln!(out, "View Mode: {view_mode}");
    }
    if let Some(closed) = project.closed {
        let _ = writeln!(out, "Closed: {}", if closed { "Yes" } else { "No" });
    }
    if let Some(kind) = present(&project.kind) {
        let _ = writeln!(out, "Kind: {kind}");
    }

    out
}

/// Render a numbered listing of projects.
pub fn format_project_list(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "No projects found.".to_string();
    }
    let mut out = format!("Found {} projects:\n\n", projects.len());
    for (i, project) in projects.iter().enumerate() {
        let _ = writeln!(out, "Project {}:\n{}", i + 1, format_project(project));
    }
    out
}

/// Render a numbered listing of the tasks of one project.
pub fn format_task_list(project_name: &str, tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return format!("No tasks found in project '{project_name}'.");
    }
    let mut out = format!(
        "Found {} tasks in project '{}':\n\n",
        tasks.len(),
        project_name
    );
    for (i, task) in tasks.iter().enumerate() {
        let _ = writeln!(out, "Task {}:\n{}", i + 1, format_task(task));
    }
    out
}
