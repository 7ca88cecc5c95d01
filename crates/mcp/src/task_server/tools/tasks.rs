use rmcp::{
    ErrorData, handler::server::wrapper::Parameters, model::CallToolResult, schemars, tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::TaskServer;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct CreateTasksRequest {
    #[schemars(
        length(min = 1),
        description = "Natural-language description of the tasks to create, e.g. \
                       \"buy milk tomorrow and call the dentist on Friday\""
    )]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedTask {
    title: String,
    #[serde(default)]
    due_date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTasksResult {
    response: String,
    #[serde(default)]
    tasks: Vec<CreatedTask>,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
struct TaskStatusUpdate {
    #[schemars(description = "ID of the task to update")]
    id: String,
    #[schemars(description = "New completion state for the task")]
    is_completed: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct UpdateTaskStatusRequest {
    #[schemars(
        length(min = 1),
        description = "Status changes to apply, one entry per task"
    )]
    updates: Vec<TaskStatusUpdate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTaskStatusResult {
    updated_count: u64,
}

#[tool_router(router = tasks_tools_router, vis = "pub")]
impl TaskServer {
    #[tool(
        name = "create_tasks_from_text",
        description = "Create one or more Snaptask tasks from a natural-language description. \
                       The backend extracts titles and due dates from the text."
    )]
    async fn create_tasks_from_text(
        &self,
        Parameters(CreateTasksRequest { text }): Parameters<CreateTasksRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let result: CreateTasksResult = match self
            .rpc
            .call("mcpCreateTasksFromText", json!({ "text": text }))
            .await
        {
            Ok(r) => r,
            Err(e) => return Self::failure("creating tasks in Snaptask", &e),
        };

        Self::text_success(format_created_tasks(&result))
    }

    #[tool(
        name = "update_task_status",
        description = "Mark Snaptask tasks complete or incomplete. Accepts a batch of \
                       {id, isCompleted} updates and reports how many tasks changed."
    )]
    async fn update_task_status(
        &self,
        Parameters(UpdateTaskStatusRequest { updates }): Parameters<UpdateTaskStatusRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let result: UpdateTaskStatusResult = match self
            .rpc
            .call("mcpUpdateTaskStatus", json!({ "updates": updates }))
            .await
        {
            Ok(r) => r,
            Err(e) => return Self::failure("updating task status in Snaptask", &e),
        };

        // The backend-reported count, not the request length.
        Self::text_success(format!(
            "Updated {} task(s) in Snaptask.",
            result.updated_count
        ))
    }
}

fn format_created_tasks(result: &CreateTasksResult) -> String {
    if result.tasks.is_empty() {
        return format!("{}\n\nNo tasks were created.", result.response);
    }

    let lines: Vec<String> = result
        .tasks
        .iter()
        .map(|task| match task.due_date.as_deref() {
            Some(due) => format!("• {} (due {due})", task.title),
            None => format!("• {}", task.title),
        })
        .collect();

    format!(
        "{}\n\nCreated {} task(s):\n{}",
        result.response,
        result.tasks.len(),
        lines.join("\n")
    )
}
