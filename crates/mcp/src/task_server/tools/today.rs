use rmcp::{
    ErrorData,
    model::{CallToolResult, Content, Meta},
    tool, tool_router,
};
use serde_json::{Value, json};

use super::{TaskServer, format_task_list};
use crate::task_server::Task;

const NO_TASKS_TODAY: &str = "You have no tasks scheduled for today.";
const ACTION: &str = "fetching today's tasks from Snaptask";

#[tool_router(router = today_tools_router, vis = "pub")]
impl TaskServer {
    /// The widget-backing tool: besides the text summary it carries the raw
    /// task list as structured content and the task count in `_meta`.
    #[tool(
        name = "today_view",
        description = "Show today's Snaptask tasks with completion status and due dates."
    )]
    async fn today_view(&self) -> Result<CallToolResult, ErrorData> {
        let raw: Value = match self.rpc.call("mcpListTodayTasks", json!([])).await {
            Ok(v) => v,
            Err(e) => return Self::failure(ACTION, &e),
        };

        let tasks: Vec<Task> = match serde_json::from_value(raw.clone()) {
            Ok(ts) => ts,
            Err(e) => return Self::failure(ACTION, &e),
        };

        let text = if tasks.is_empty() {
            NO_TASKS_TODAY.to_string()
        } else {
            format_task_list(&tasks)
        };

        let mut result = CallToolResult::success(vec![Content::text(text)]);
        // The backend array is passed through untouched, not re-serialized
        // from the parsed records.
        result.structured_content = Some(json!({ "tasks": raw }));
        let mut meta = Meta::default();
        meta.insert("count".to_string(), json!(tasks.len()));
        result.meta = Some(meta);
        Ok(result)
    }
}
