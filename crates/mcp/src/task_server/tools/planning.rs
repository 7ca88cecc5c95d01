use rmcp::{
    ErrorData, handler::server::wrapper::Parameters, model::CallToolResult, schemars, tool,
    tool_router,
};
use serde::Deserialize;
use serde_json::{Map, Value, json};

use super::{TaskServer, format_task_list};
use crate::task_server::Task;

const NO_TASKS_THIS_WEEK: &str = "You have no tasks scheduled for this week.";
const NO_SUGGESTIONS: &str = "No task suggestions right now.";

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
struct WeekOverviewRequest {
    #[schemars(
        description = "ISO-8601 datetime the week is anchored on; the backend uses the \
                       current date when omitted"
    )]
    reference_date_iso: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
struct SuggestNextTasksRequest {
    #[schemars(
        range(min = 1, max = 14),
        description = "How many days ahead to look for scheduling slots (1-14, backend default 3)"
    )]
    days_ahead: Option<u32>,
    #[schemars(
        range(min = 1, max = 20),
        description = "Maximum number of suggestions to return (1-20, backend picks a default \
                       when omitted)"
    )]
    limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaskSuggestion {
    title: String,
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    day: Option<String>,
    #[serde(default)]
    start_time: Option<String>,
}

#[tool_router(router = planning_tools_router, vis = "pub")]
impl TaskServer {
    #[tool(
        name = "week_overview",
        description = "List the week's Snaptask tasks with completion status and due dates. \
                       Optionally anchored on a reference date."
    )]
    async fn week_overview(
        &self,
        Parameters(WeekOverviewRequest { reference_date_iso }): Parameters<WeekOverviewRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        // Omitted optionals stay absent; the backend applies its defaults.
        let mut params = Map::new();
        if let Some(reference) = reference_date_iso {
            params.insert("referenceDateIso".to_string(), json!(reference));
        }

        let tasks: Vec<Task> = match self
            .rpc
            .call("mcpListWeekOverview", Value::Object(params))
            .await
        {
            Ok(ts) => ts,
            Err(e) => return Self::failure("fetching the week overview from Snaptask", &e),
        };

        let text = if tasks.is_empty() {
            NO_TASKS_THIS_WEEK.to_string()
        } else {
            format_task_list(&tasks)
        };
        Self::text_success(text)
    }

    #[tool(
        name = "suggest_next_tasks",
        description = "Ask Snaptask which tasks to tackle next. Returns a prioritized, \
                       numbered list with suggested actions and time slots."
    )]
    async fn suggest_next_tasks(
        &self,
        Parameters(SuggestNextTasksRequest { days_ahead, limit }): Parameters<
            SuggestNextTasksRequest,
        >,
    ) -> Result<CallToolResult, ErrorData> {
        let mut params = Map::new();
        if let Some(days_ahead) = days_ahead {
            params.insert("daysAhead".to_string(), json!(days_ahead));
        }
        if let Some(limit) = limit {
            params.insert("limit".to_string(), json!(limit));
        }

        let suggestions: Vec<TaskSuggestion> = match self
            .rpc
            .call("mcpSuggestNextTasks", Value::Object(params))
            .await
        {
            Ok(ss) => ss,
            Err(e) => return Self::failure("fetching task suggestions from Snaptask", &e),
        };

        let text = if suggestions.is_empty() {
            NO_SUGGESTIONS.to_string()
        } else {
            suggestions
                .iter()
                .enumerate()
                .map(|(index, suggestion)| format_suggestion_line(index, suggestion))
                .collect::<Vec<_>>()
                .join("\n")
        };
        Self::text_success(text)
    }
}

fn format_suggestion_line(index: usize, suggestion: &TaskSuggestion) -> String {
    let mut line = format!("{}. {}", index + 1, suggestion.title);
    if let Some(action) = suggestion.action.as_deref() {
        line.push_str(&format!(" ({action})"));
    }
    let when = match (suggestion.day.as_deref(), suggestion.start_time.as_deref()) {
        (Some(day), Some(start)) => Some(format!("{day} {start}")),
        (Some(day), None) => Some(day.to_string()),
        (None, Some(start)) => Some(start.to_string()),
        (None, None) => None,
    };
    if let Some(when) = when {
        line.push_str(&format!(" — {when}"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(
        title: &str,
        action: Option<&str>,
        day: Option<&str>,
        start_time: Option<&str>,
    ) -> TaskSuggestion {
        TaskSuggestion {
            title: title.to_string(),
            action: action.map(str::to_string),
            day: day.map(str::to_string),
            start_time: start_time.map(str::to_string),
        }
    }

    #[test]
    fn suggestion_with_action_and_day_only() {
        let line = format_suggestion_line(0, &suggestion("Write report", Some("focus"), Some("Mon"), None));
        assert_eq!(line, "1. Write report (focus) — Mon");
    }

    #[test]
    fn suggestion_with_day_and_start_time() {
        let line = format_suggestion_line(1, &suggestion("Review PR", Some("review"), Some("Tue"), Some("09:00")));
        assert_eq!(line, "2. Review PR (review) — Tue 09:00");
    }

    #[test]
    fn suggestion_with_title_only() {
        let line = format_suggestion_line(2, &suggestion("Inbox zero", None, None, None));
        assert_eq!(line, "3. Inbox zero");
    }

    #[test]
    fn suggestion_tolerates_null_optional_fields() {
        let parsed: TaskSuggestion = serde_json::from_value(serde_json::json!({
            "title": "Write report",
            "action": "focus",
            "day": "Mon",
            "startTime": null
        }))
        .unwrap();
        assert_eq!(format_suggestion_line(0, &parsed), "1. Write report (focus) — Mon");
    }
}
