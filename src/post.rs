//! Post records as returned by the admin API.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Post identifier, numeric or string depending on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(u64),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Single post with its markdown body and media attachments.
///
/// Media records are kept untyped: the API returns both flat and nested
/// shapes and the resolvers in [`crate::media`] probe them field by field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    id: Option<PostId>,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    media: Vec<Value>,
    #[serde(default)]
    author: Option<Value>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    tags: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    categories: Vec<Value>,
}

/// Response wrapper used by some API endpoints: `{ "data": { ... } }`.
#[derive(Deserialize)]
struct Envelope {
    data: Post,
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Fields probed, in order, for a display name on author/tag/category records.
const NAME_KEYS: &[&str] = &["name", "displayName", "username", "title", "email"];

fn display_name(record: &Value) -> Option<&str> {
    if let Some(s) = record.as_str() {
        return Some(s).filter(|s| !s.is_empty());
    }
    NAME_KEYS
        .iter()
        .filter_map(|key| record.get(*key)?.as_str())
        .find(|s| !s.is_empty())
}

impl Post {
    /// Parses a post from JSON.
    ///
    /// Accepts a bare post object or one wrapped in a `data` envelope.
    ///
    /// # Errors
    ///
    /// Returns error if the input is not valid JSON or not an object
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).context("Post is not valid JSON")?;

        if !value.is_object() {
            anyhow::bail!("Post JSON must be an object");
        }

        if value.get("data").is_some_and(Value::is_object) {
            let envelope: Envelope =
                serde_json::from_value(value).context("Failed to decode post envelope")?;
            return Ok(envelope.data);
        }

        serde_json::from_value(value).context("Failed to decode post")
    }

    /// Reads and parses a post JSON file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read post file: {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid post file: {}", path.display()))
    }

    /// Replaces the post title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn id(&self) -> Option<&PostId> {
        self.id.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn media(&self) -> &[Value] {
        &self.media
    }

    /// Author display name from `name`, `displayName`, `username`, or `email`.
    pub fn author(&self) -> Option<&str> {
        self.author.as_ref().and_then(display_name)
    }

    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref().filter(|s| !s.is_empty())
    }

    /// Tag names; records without a name are skipped.
    pub fn tags(&self) -> Vec<&str> {
        self.tags.iter().filter_map(display_name).collect()
    }

    /// Category names; records without a name are skipped.
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().filter_map(display_name).collect()
    }

    /// URL safe file stem for the generated page.
    ///
    /// Lowercase ASCII alphanumerics of the title joined by `-`. Falls back
    /// to `post-<id>`, then `post`.
    pub fn slug(&self) -> String {
        let slug = slugify(&self.title);
        if !slug.is_empty() {
            return slug;
        }

        match &self.id {
            Some(id) => {
                let id_slug = slugify(&id.to_string());
                if id_slug.is_empty() {
                    "post".to_string()
                } else {
                    format!("post-{}", id_slug)
                }
            }
            None => "post".to_string(),
        }
    }
}

fn slugify(text: &str) -> String {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_post() {
        // Arrange
        let json = r#"{
            "id": 12,
            "title": "Hello World",
            "content": "![a](undefined)",
            "media": [{ "url": "/a.png", "filename": "a.png" }],
            "author": { "username": "kim" },
            "createdAt": "2024-05-01T10:00:00Z",
            "tags": [{ "name": "rust" }, "cms", { "id": 3 }],
            "categories": [{ "title": "News" }]
        }"#;

        // Act
        let post = Post::from_json(json).expect("Should parse post");

        // Assert
        assert_eq!(post.id(), Some(&PostId::Number(12)));
        assert_eq!(post.title(), "Hello World");
        assert_eq!(post.content(), "![a](undefined)");
        assert_eq!(post.media().len(), 1);
        assert_eq!(post.author(), Some("kim"));
        assert_eq!(post.created_at(), Some("2024-05-01T10:00:00Z"));
        assert_eq!(post.tags(), ["rust", "cms"]);
        assert_eq!(post.categories(), ["News"]);
    }

    #[test]
    fn test_parse_data_envelope() {
        let json = r#"{ "data": { "id": "abc", "title": "Wrapped", "content": "x" } }"#;

        let post = Post::from_json(json).expect("Should unwrap envelope");

        assert_eq!(post.id(), Some(&PostId::Text("abc".to_string())));
        assert_eq!(post.title(), "Wrapped");
    }

    #[test]
    fn test_missing_fields_default() {
        let post = Post::from_json("{}").expect("Should parse empty object");

        assert_eq!(post.id(), None);
        assert_eq!(post.content(), "");
        assert!(post.media().is_empty());
        assert_eq!(post.author(), None);
        assert!(post.tags().is_empty());
    }

    #[test]
    fn test_null_fields_are_empty() {
        let post = Post::from_json(r#"{ "content": null, "media": null, "title": null }"#)
            .expect("Should parse");
        assert_eq!(post.content(), "");
        assert_eq!(post.title(), "");
        assert!(post.media().is_empty());
    }

    #[test]
    fn test_author_as_plain_string() {
        let post = Post::from_json(r#"{ "author": "Ana" }"#).expect("Should parse");
        assert_eq!(post.author(), Some("Ana"));
    }

    #[test]
    fn test_reject_invalid_json() {
        // Act
        let result = Post::from_json("not json");

        // Assert
        assert!(result.is_err(), "Should reject invalid JSON");
        let err_msg = format!("{:#}", result.unwrap_err());
        assert!(err_msg.contains("not valid JSON"), "Error: {}", err_msg);
    }

    #[test]
    fn test_reject_non_object() {
        assert!(Post::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_slug_from_title() {
        let post = Post::from_json(r#"{ "title": "  Hello, World! 2024 edition " }"#)
            .expect("Should parse");
        assert_eq!(post.slug(), "hello-world-2024-edition");
    }

    #[test]
    fn test_with_title_overrides_slug() {
        let post = Post::from_json(r#"{ "title": "Draft" }"#)
            .expect("Should parse")
            .with_title("Launch Notes");

        assert_eq!(post.title(), "Launch Notes");
        assert_eq!(post.slug(), "launch-notes");
    }

    #[test]
    fn test_slug_fallbacks() {
        let by_id = Post::from_json(r#"{ "id": 42, "title": "¿¿??" }"#).expect("Should parse");
        assert_eq!(by_id.slug(), "post-42");

        let anonymous = Post::from_json("{}").expect("Should parse");
        assert_eq!(anonymous.slug(), "post");
    }
}
