//! Text rendering of tool results

use crate::publish::{ErrorKind, PublishError};
use crate::taxonomy::TagError;
use crate::types::PublishedPost;

/// Success message listing everything the forum assigned
pub fn render_success(post: &PublishedPost) -> String {
    format!(
        "✅ Discussion created\n\
         📌 ID: {}\n\
         📝 Title: {}\n\
         📊 Length: {} characters\n\
         🏷️ Tags: {}\n\
         🔗 {}",
        post.id,
        post.title,
        post.content_length,
        post.tags.join(", "),
        post.permalink
    )
}

/// Failure message with a category prefix
///
/// Transport and response failures are execution errors (💥); everything
/// else is something the caller or the operator can fix (❌).
pub fn render_error(err: &PublishError) -> String {
    match err.kind() {
        ErrorKind::Transport | ErrorKind::Response => format!("💥 Execution error: {}", err),
        ErrorKind::Config | ErrorKind::Auth | ErrorKind::Argument | ErrorKind::Taxonomy => {
            format!("❌ {}", err)
        }
        ErrorKind::Remote => format!("❌ Publishing failed: {}", err),
        ErrorKind::Tag => match err {
            PublishError::Tag(tag) => format!("❌ Tag error: {}{}", tag, tag_hint(tag)),
            _ => format!("❌ Tag error: {}", err),
        },
    }
}

fn tag_hint(err: &TagError) -> String {
    match err {
        TagError::MissingParent { parent, .. } => format!(" (add '{}' to the tags)", parent),
        TagError::OrphanSecondary(_) => " (add its parent tag)".to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_success() {
        let post = PublishedPost {
            id: "42".to_string(),
            title: "Hello".to_string(),
            content_length: 3,
            tags: vec!["shenghuo".to_string(), "jiankang".to_string()],
            tag_ids: vec!["1".to_string(), "2".to_string()],
            permalink: "https://forum.example.com/d/42".to_string(),
        };
        let text = render_success(&post);

        assert!(text.starts_with("✅"));
        assert!(text.contains("ID: 42"));
        assert!(text.contains("Title: Hello"));
        assert!(text.contains("3 characters"));
        assert!(text.contains("shenghuo, jiankang"));
        assert!(text.ends_with("https://forum.example.com/d/42"));
    }

    #[test]
    fn test_render_tag_errors() {
        let text = render_error(&PublishError::Tag(TagError::MissingParent {
            tag: "shouji".to_string(),
            parent: "keji".to_string(),
        }));
        assert!(text.starts_with("❌ Tag error"));
        assert!(text.contains("'shouji'"));
        assert!(text.contains("add 'keji'"));

        let text = render_error(&TagError::UnknownTag("nope".to_string()).into());
        assert_eq!(text, "❌ Tag error: Unknown tag 'nope'");
    }

    #[test]
    fn test_render_categories() {
        let remote = render_error(&PublishError::RemoteRejected {
            status: 422,
            body: "{\"errors\":[]}".to_string(),
        });
        assert!(remote.starts_with("❌ Publishing failed"));
        assert!(remote.contains("422"));
        assert!(remote.contains("{\"errors\":[]}"));

        let transport = render_error(&PublishError::TransportFailure("timed out".to_string()));
        assert!(transport.starts_with("💥"));

        let config = render_error(&PublishError::ConfigMissing("forum URL".to_string()));
        assert!(config.starts_with("❌ Configuration error"));
    }
}
