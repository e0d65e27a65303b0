//! Flarum JSON:API wire format
//!
//! Only the fields the engine reads or writes are modelled.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::types::{NewDiscussion, Tag};

/// `POST /api/token` request body
#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub identification: &'a str,
    pub password: &'a str,
}

/// `POST /api/token` response body
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// `GET /api/tags` response document
#[derive(Debug, Deserialize)]
pub(crate) struct TagListDocument {
    #[serde(default)]
    pub data: Vec<TagResource>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagResource {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub attributes: TagAttributes,
    #[serde(default)]
    pub relationships: Option<TagRelationships>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagAttributes {
    pub slug: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "isPrimary")]
    pub is_primary: Option<bool>,
    #[serde(default)]
    pub position: Option<i32>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TagRelationships {
    #[serde(default)]
    pub parent: Option<ToOneRelationship>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ToOneRelationship {
    #[serde(default)]
    pub data: Option<ResourceIdentifier>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResourceIdentifier {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
}

impl From<TagResource> for Tag {
    fn from(resource: TagResource) -> Self {
        let parent_id = resource
            .relationships
            .and_then(|r| r.parent)
            .and_then(|p| p.data)
            .map(|d| d.id);
        let attributes = resource.attributes;
        Tag {
            id: resource.id,
            name: attributes.name.unwrap_or_else(|| attributes.slug.clone()),
            slug: attributes.slug,
            description: attributes.description.filter(|d| !d.is_empty()),
            parent_id,
            is_primary: attributes.is_primary.unwrap_or(false),
            position: attributes.position,
        }
    }
}

/// `POST /api/discussions` request document
#[derive(Debug, Serialize)]
pub(crate) struct DiscussionDocument<'a> {
    pub data: DiscussionResource<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DiscussionResource<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub attributes: DiscussionAttributes<'a>,
    pub relationships: DiscussionRelationships<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DiscussionAttributes<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct DiscussionRelationships<'a> {
    pub tags: ToManyRelationship<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ToManyRelationship<'a> {
    pub data: Vec<ResourceRef<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResourceRef<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: &'a str,
}

impl<'a> From<&'a NewDiscussion> for DiscussionDocument<'a> {
    fn from(discussion: &'a NewDiscussion) -> Self {
        DiscussionDocument {
            data: DiscussionResource {
                kind: "discussions",
                attributes: DiscussionAttributes {
                    title: &discussion.title,
                    content: &discussion.content,
                },
                relationships: DiscussionRelationships {
                    tags: ToManyRelationship {
                        data: discussion
                            .tag_ids
                            .iter()
                            .map(|id| ResourceRef { kind: "tags", id })
                            .collect(),
                    },
                },
            },
        }
    }
}

/// Response document for a created resource
#[derive(Debug, Deserialize)]
pub(crate) struct CreatedDocument {
    pub data: ResourceIdentifier,
}

/// JSON:API ids are strings, but some proxies hand back numbers
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_tag_list() {
        let body = json!({
            "data": [
                {
                    "type": "tags",
                    "id": "1",
                    "attributes": {
                        "name": "生活",
                        "slug": "shenghuo",
                        "description": "",
                        "isPrimary": true,
                        "position": 0
                    },
                    "relationships": {
                        "parent": { "data": null }
                    }
                },
                {
                    "type": "tags",
                    "id": 7,
                    "attributes": {
                        "name": "健康",
                        "slug": "jiankang",
                        "description": "Health",
                        "isPrimary": false,
                        "position": null
                    },
                    "relationships": {
                        "parent": { "data": { "type": "tags", "id": "1" } }
                    }
                },
                {
                    "type": "tags",
                    "id": "9",
                    "attributes": { "slug": "misc" }
                }
            ]
        });

        let document: TagListDocument = serde_json::from_value(body).unwrap();
        let tags: Vec<Tag> = document.data.into_iter().map(Tag::from).collect();

        assert_eq!(tags.len(), 3);
        assert_eq!(tags[0].slug, "shenghuo");
        assert!(tags[0].is_primary);
        assert_eq!(tags[0].position, Some(0));
        assert_eq!(tags[0].parent_id, None);
        assert_eq!(tags[0].description, None);

        assert_eq!(tags[1].id, "7");
        assert_eq!(tags[1].parent_id.as_deref(), Some("1"));
        assert_eq!(tags[1].description.as_deref(), Some("Health"));
        assert_eq!(tags[1].position, None);

        assert_eq!(tags[2].name, "misc");
        assert!(!tags[2].is_primary);
    }

    #[test]
    fn test_discussion_document_shape() {
        let discussion = NewDiscussion {
            title: "t".to_string(),
            content: "c".to_string(),
            tag_ids: vec!["1".to_string(), "7".to_string()],
        };

        let value = serde_json::to_value(DiscussionDocument::from(&discussion)).unwrap();
        assert_eq!(
            value,
            json!({
                "data": {
                    "type": "discussions",
                    "attributes": { "title": "t", "content": "c" },
                    "relationships": {
                        "tags": {
                            "data": [
                                { "type": "tags", "id": "1" },
                                { "type": "tags", "id": "7" }
                            ]
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn test_parse_created_and_token() {
        let created: CreatedDocument =
            serde_json::from_value(json!({ "data": { "type": "discussions", "id": "42" } })).unwrap();
        assert_eq!(created.data.id, "42");

        let token: TokenResponse =
            serde_json::from_value(json!({ "token": "abc", "userId": 1 })).unwrap();
        assert_eq!(token.token.as_deref(), Some("abc"));

        let missing: TokenResponse = serde_json::from_value(json!({ "userId": 1 })).unwrap();
        assert!(missing.token.is_none());
    }
}
