//! The `create_discussion` tool

use std::sync::Arc;

use rmcp::handler::server::tool::schema_for_type;
use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use serde::Deserialize;

use super::render::{render_error, render_success};
use crate::config::TagPolicy;
use crate::publish::{PublishCoordinator, PublishError, CONTENT_SOFT_LIMIT};
use crate::types::TagSelectionRequest;

pub const TOOL_NAME: &str = "create_discussion";

/// Arguments of `create_discussion`
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct CreateDiscussionArgs {
    /// Discussion title, short and catchy
    pub title: String,
    /// Discussion body in Markdown, conversational tone, ideally at most 250 characters
    pub content: String,
    /// Comma-separated tag slugs, for example `shenghuo,jiankang`
    #[serde(default)]
    pub tags: Option<String>,
}

/// Tool definition advertised through `tools/list`
///
/// The description only states rules the engine enforces.
pub fn tool_definition(policy: &TagPolicy) -> Tool {
    let mut description = format!(
        "Create a new discussion on the Flarum forum.\n\n\
         Content: keep it conversational and plain; about {} characters is \
         recommended, longer content is accepted.\n\n\
         Tags: comma-separated slugs, between {} and {}. Tags beyond {} are dropped \
         in order. A secondary tag is only accepted together with its own parent tag.",
        CONTENT_SOFT_LIMIT, policy.min_tags, policy.max_tags, policy.max_tags
    );
    if let Some(defaults) = policy.default_tags.as_deref() {
        description.push_str(&format!(
            "\n\nThis server always uses the tags '{}'; the tags argument is ignored.",
            defaults
        ));
    }
    Tool::new(TOOL_NAME, description, schema_for_type::<CreateDiscussionArgs>())
}

enum Backend {
    Ready(Arc<PublishCoordinator>),
    /// Configuration failed to load; every call reports why
    Unconfigured(String),
}

/// Tool boundary: turns arguments into a publish and any outcome into a result
pub struct CreateDiscussionTool {
    backend: Backend,
    definition: Tool,
}

impl CreateDiscussionTool {
    pub fn new(coordinator: Arc<PublishCoordinator>) -> Self {
        let definition = tool_definition(coordinator.policy());
        Self {
            backend: Backend::Ready(coordinator),
            definition,
        }
    }

    /// A tool that answers every call with a configuration error
    pub fn unconfigured(reason: impl Into<String>) -> Self {
        Self {
            backend: Backend::Unconfigured(reason.into()),
            definition: tool_definition(&TagPolicy::default()),
        }
    }

    pub fn definition(&self) -> Tool {
        self.definition.clone()
    }

    /// Run one call; failures come back as `is_error` results, never as `Err`
    pub async fn call(&self, arguments: Option<JsonObject>) -> CallToolResult {
        match self.run(arguments).await {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => CallToolResult::error(vec![Content::text(render_error(&e))]),
        }
    }

    async fn run(&self, arguments: Option<JsonObject>) -> Result<String, PublishError> {
        let coordinator = match &self.backend {
            Backend::Ready(coordinator) => coordinator,
            Backend::Unconfigured(reason) => return Err(PublishError::ConfigMissing(reason.clone())),
        };

        let args = parse_args(arguments)?;
        let tags = TagSelectionRequest::from(args.tags);
        let post = coordinator.publish(&args.title, &args.content, &tags).await?;
        Ok(render_success(&post))
    }
}

fn parse_args(arguments: Option<JsonObject>) -> Result<CreateDiscussionArgs, PublishError> {
    let arguments = arguments.unwrap_or_default();
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| PublishError::invalid_argument(format!("invalid arguments: {}", e)))
}
