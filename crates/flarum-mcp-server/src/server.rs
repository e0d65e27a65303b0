//! MCP server handler
//!
//! Exposes the single `create_discussion` tool over rmcp. Tool failures are
//! returned as `is_error` results; only an unknown tool name is a protocol
//! error.

use std::sync::Arc;

use flarum_mcp_core::logging::Logger;
use flarum_mcp_core::tools::{CreateDiscussionTool, TOOL_NAME};
use rmcp::model::{
    CallToolRequestParams, CallToolResult, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};

pub const SERVER_NAME: &str = "flarum-mcp";

#[derive(Clone)]
pub struct FlarumServer {
    tool: Arc<CreateDiscussionTool>,
    logger: Arc<dyn Logger>,
}

impl FlarumServer {
    pub fn new(tool: CreateDiscussionTool, logger: Arc<dyn Logger>) -> Self {
        Self {
            tool: Arc::new(tool),
            logger,
        }
    }

    /// Route a tool call by name
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ErrorData> {
        if name != TOOL_NAME {
            self.logger.warn(&format!("[Server] Unknown tool '{}'", name));
            return Err(ErrorData::invalid_params(format!("unknown tool: {}", name), None));
        }

        let result = self.tool.call(arguments).await;
        if result.is_error == Some(true) {
            self.logger.warn(&format!("[Server] {} failed", name));
        } else {
            self.logger.info(&format!("[Server] {} succeeded", name));
        }
        Ok(result)
    }
}

impl ServerHandler for FlarumServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                title: Some("Flarum MCP".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Create discussions on a Flarum forum with validated tags.".to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(vec![self.tool.definition()]))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(&request.name, request.arguments).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flarum_mcp_core::logging::{LogLevel, MemoryLogger};

    fn server() -> (FlarumServer, Arc<MemoryLogger>) {
        let logger = Arc::new(MemoryLogger::new());
        let tool = CreateDiscussionTool::unconfigured("forum URL (FLARUM_URL)");
        (FlarumServer::new(tool, logger.clone()), logger)
    }

    #[test]
    fn test_info() {
        let (server, _) = server();
        let info = server.get_info();
        assert_eq!(info.server_info.name, "flarum-mcp");
        assert!(info.capabilities.tools.is_some());
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let (server, logger) = server();
        assert!(server.dispatch("delete_everything", None).await.is_err());
        assert!(logger.contains(LogLevel::Warn, "delete_everything"));
    }

    #[tokio::test]
    async fn test_unconfigured_call_is_tool_error() {
        let (server, _) = server();
        let result = server.dispatch(TOOL_NAME, None).await.unwrap();
        assert_eq!(result.is_error, Some(true));
    }
}
