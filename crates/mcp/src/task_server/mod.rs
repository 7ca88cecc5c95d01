mod handler;
pub mod rpc;
mod tools;

pub use rpc::{DEFAULT_RPC_URL, RPC_URL_ENV, RpcClient, RpcError};

use rmcp::{handler::server::tool::ToolRouter, schemars};
use serde::{Deserialize, Serialize};

/// Task record as the Snaptask backend reports it.
///
/// Fields are read for display only; the raw backend array is what flows
/// into structured content, so nothing here is validated or defaulted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub is_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_incomplete_subtasks: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct TaskServer {
    rpc: RpcClient,
    tool_router: ToolRouter<TaskServer>,
}
