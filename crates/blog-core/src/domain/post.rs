use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author value object - a structured first/last name pair.
///
/// Kept structured at every write boundary; the wire format flattens it to a
/// single space-joined string on the way out (see `display_name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// The API projection: `"firstName lastName"` joined by a single space.
    ///
    /// Lossy when either name contains an internal space; preserved as-is
    /// for compatibility with the established contract.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// BlogPost entity - a persisted post with its store-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

/// The write-side shape of a post, before the store has assigned an id.
///
/// `created` is optional; the repository defaults it to the insertion
/// instant when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: Option<DateTime<Utc>>,
}

impl PostDraft {
    /// Enforce required-field presence: title, content, and both author
    /// name parts must be non-empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.content.trim().is_empty() {
            missing.push("content");
        }
        if self.author.first_name.trim().is_empty() {
            missing.push("author.firstName");
        }
        if self.author.last_name.trim().is_empty() {
            missing.push("author.lastName");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )))
        }
    }

    /// Materialize the draft into an entity with a fresh id.
    pub fn into_post(self, id: Uuid) -> BlogPost {
        BlogPost {
            id,
            title: self.title,
            content: self.content,
            author: self.author,
            created: self.created.unwrap_or_else(Utc::now),
        }
    }
}
