//! Snaptask MCP server binary (stdio transport).

use mcp::task_server::{DEFAULT_RPC_URL, RPC_URL_ENV, TaskServer};
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the MCP transport; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("mcp=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let endpoint =
        std::env::var(RPC_URL_ENV).unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
    tracing::info!(%endpoint, "snaptask-mcp starting (stdio transport)");

    let server = TaskServer::new(&endpoint);
    let service = server.serve(rmcp::transport::io::stdio()).await?;
    service.waiting().await?;

    Ok(())
}
