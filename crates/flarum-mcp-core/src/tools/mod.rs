//! MCP tool surface
//!
//! ```text
//! tools/call create_discussion
//!        │
//!        ▼
//! CreateDiscussionTool ── parse args ──► PublishCoordinator
//!        │                                    │
//!        ◄──────── render_success / render_error
//! ```

mod create_discussion;
mod render;

pub use create_discussion::{tool_definition, CreateDiscussionArgs, CreateDiscussionTool, TOOL_NAME};
pub use render::{render_error, render_success};
