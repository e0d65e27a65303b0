//! `flarum-mcp`: MCP stdio server for creating Flarum discussions

mod server;

use std::sync::Arc;

use flarum_mcp_core::logging::{debug_enabled, ConsoleLogger, Logger};
use flarum_mcp_core::tools::CreateDiscussionTool;
use flarum_mcp_core::{ConfigLoader, HttpForumApi, PublishCoordinator};
use rmcp::transport::stdio;
use rmcp::ServiceExt;

use server::FlarumServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logger: Arc<dyn Logger> = Arc::new(ConsoleLogger::new().verbose(debug_enabled()));

    let tool = build_tool(logger.clone()).await;
    let service = FlarumServer::new(tool, logger.clone()).serve(stdio()).await?;
    logger.info("[Main] Serving on stdio");

    service.waiting().await?;
    Ok(())
}

/// Build the tool, or a stand-in that reports the configuration problem
async fn build_tool(logger: Arc<dyn Logger>) -> CreateDiscussionTool {
    let config = match ConfigLoader::new().load() {
        Ok(config) => config,
        Err(e) => {
            logger.error(&format!("[Main] {}", e));
            return CreateDiscussionTool::unconfigured(e.to_string());
        }
    };

    let api = match HttpForumApi::new(&config, logger.clone()) {
        Ok(api) => Arc::new(api),
        Err(e) => {
            logger.error(&format!("[Main] Failed to build HTTP client: {}", e));
            return CreateDiscussionTool::unconfigured(e.to_string());
        }
    };

    logger.info(&format!(
        "[Main] Forum {} ({} credential, {}..{} tags)",
        config.base_url,
        config.credentials.kind(),
        config.tags.min_tags,
        config.tags.max_tags
    ));

    let coordinator = PublishCoordinator::from_config(&config, api, logger.clone());
    if let Err(e) = coordinator.credentials().prefetch().await {
        logger.warn(&format!("[Main] Credential warm-up failed, will retry on first call: {}", e));
    }

    CreateDiscussionTool::new(Arc::new(coordinator))
}
