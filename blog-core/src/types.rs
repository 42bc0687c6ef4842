//! Core types: the article wire record, the validated request schema, and confirmation payloads.

use serde::{Deserialize, Serialize};

/// Article as transmitted over the wire. `id` is always the printable form of the store id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub publish_date: Option<String>,
}

/// Validated request body for create and update: every article field except `id`.
///
/// Built through [`ArticleInput::from_slice`] / [`ArticleInput::from_value`], which run the
/// field-level checks in [`crate::validation`]. Construct directly only with already-trusted data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleInput {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub publish_date: Option<String>,
}

impl ArticleInput {
    /// Creates an input with no tags and no publish date.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            publish_date: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_publish_date(mut self, publish_date: impl Into<String>) -> Self {
        self.publish_date = Some(publish_date.into());
        self
    }

    /// Attaches a store-assigned id, producing the wire record.
    pub fn into_article(self, id: String) -> Article {
        Article {
            id,
            title: self.title,
            content: self.content,
            tags: self.tags,
            publish_date: self.publish_date,
        }
    }
}

/// Fixed acknowledgment returned by write operations whether or not data changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub message: &'static str,
}

impl Confirmation {
    pub const POSTED: Confirmation = Confirmation {
        message: "Article posted successfully",
    };
    pub const UPDATED: Confirmation = Confirmation {
        message: "Article updated successfully",
    };
    pub const DELETED: Confirmation = Confirmation {
        message: "Article deleted successfully",
    };
}

/// Response body for a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedArticle {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_article_serializes_absent_publish_date_as_null() {
        let article = ArticleInput::new("A", "B").into_article("abc".to_string());
        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(
            value,
            json!({"id": "abc", "title": "A", "content": "B", "tags": [], "publish_date": null})
        );
    }

    #[test]
    fn test_confirmation_serializes_as_message() {
        let value = serde_json::to_value(Confirmation::UPDATED).unwrap();
        assert_eq!(value, json!({"message": "Article updated successfully"}));
    }

    #[test]
    fn test_builder_sets_tags_and_publish_date() {
        let input = ArticleInput::new("t", "c")
            .with_tags(["rust", "web"])
            .with_publish_date("2024-01-01");
        assert_eq!(input.tags, vec!["rust".to_string(), "web".to_string()]);
        assert_eq!(input.publish_date.as_deref(), Some("2024-01-01"));
    }
}
