use rmcp::{
    ServerHandler,
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool_handler,
};

use super::TaskServer;

#[tool_handler]
impl ServerHandler for TaskServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo::default();
        info.protocol_version = ProtocolVersion::V_2025_03_26;
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.server_info = Implementation::new("snaptask", "1.0.0");
        info.instructions = Some(
            "A bridge to the Snaptask task manager. TOOLS: 'today_view' shows today's \
             tasks with completion status, 'create_tasks_from_text' turns a natural-language \
             description into tasks, 'update_task_status' marks tasks complete or incomplete \
             by ID, 'week_overview' lists the current week's tasks, 'suggest_next_tasks' \
             proposes which tasks to tackle next and when."
                .to_string(),
        );
        info
    }
}
