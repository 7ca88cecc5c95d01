use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
};
use std::fmt::Display;

use super::{RpcClient, Task, TaskServer};

mod planning;
mod tasks;
mod today;

impl TaskServer {
    pub fn new(endpoint: &str) -> Self {
        Self {
            rpc: RpcClient::new(endpoint),
            tool_router: Self::today_tools_router()
                + Self::tasks_tools_router()
                + Self::planning_tools_router(),
        }
    }
}

impl TaskServer {
    fn text_success(text: String) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Uniform failure envelope. Every tool reports trouble the same way:
    /// a single text block, never a protocol-level error.
    fn failure(action: &str, err: &dyn Display) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::error(vec![Content::text(format!(
            "Error {action}: {err}"
        ))]))
    }
}

// Shared by today_view and week_overview.
fn format_task_line(task: &Task) -> String {
    let glyph = if task.is_completed { "✅" } else { "⬜" };
    match task.due_date.as_deref() {
        Some(due) => format!("{glyph} {} (due {due})", task.title),
        None => format!("{glyph} {}", task.title),
    }
}

fn format_task_list(tasks: &[Task]) -> String {
    tasks
        .iter()
        .map(format_task_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod format_tests {
    use super::*;

    fn task(title: &str, is_completed: bool, due_date: Option<&str>) -> Task {
        Task {
            id: "t1".to_string(),
            title: title.to_string(),
            is_completed,
            due_date: due_date.map(str::to_string),
            has_incomplete_subtasks: None,
        }
    }

    #[test]
    fn completed_task_with_due_date() {
        let line = format_task_line(&task("Buy milk", true, Some("2024-01-05")));
        assert_eq!(line, "✅ Buy milk (due 2024-01-05)");
    }

    #[test]
    fn incomplete_task_without_due_date() {
        let line = format_task_line(&task("Call dentist", false, None));
        assert_eq!(line, "⬜ Call dentist");
    }

    #[test]
    fn list_joins_one_line_per_task() {
        let text = format_task_list(&[
            task("Buy milk", true, Some("2024-01-05")),
            task("Call dentist", false, None),
        ]);
        assert_eq!(text, "✅ Buy milk (due 2024-01-05)\n⬜ Call dentist");
    }
}
