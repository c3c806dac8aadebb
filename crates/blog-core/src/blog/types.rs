//! Blog record and field types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::Result;
use crate::error::InvalidInputError;
use crate::types::BlogId;

/// A blog record as held by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    /// Server-assigned identifier, immutable once created.
    pub id: BlogId,

    pub title: String,

    pub content: String,

    pub author: String,

    /// Free-form tags. `null` or missing reads as empty.
    #[serde(default, deserialize_with = "nullable_string")]
    pub tags: String,

    /// URL slug derived from the title by the gateway, if it reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Creation time reported by the gateway, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Blog {
    /// Returns a copy of the editable fields.
    pub fn fields(&self) -> BlogFields {
        BlogFields {
            title: self.title.clone(),
            content: self.content.clone(),
            author: self.author.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// The editable fields of a blog: the body of create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogFields {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub tags: String,
}

impl BlogFields {
    /// Create a field set.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
            tags: tags.into(),
        }
    }

    /// Presence check: title, content and author must not be blank.
    ///
    /// Tags are optional.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("title", &self.title),
            ("content", &self.content),
            ("author", &self.author),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(InvalidInputError::MissingField { field }.into());
            }
        }

        Ok(())
    }

    /// Returns true when every field is empty.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.content.is_empty()
            && self.author.is_empty()
            && self.tags.is_empty()
    }
}

fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
