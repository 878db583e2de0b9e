//! Author record types.

use serde::{Deserialize, Serialize};

use super::id::AuthorId;

/// An author record.
///
/// Serialized with camelCase field names (`firstName`, `lastName`) so the
/// persisted collection keeps its established shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Store-assigned identity, unique within the collection.
    pub id: AuthorId,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
}

impl Author {
    /// Build a record from a draft and an assigned ID.
    #[must_use]
    pub fn from_draft(id: AuthorId, draft: AuthorDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            bio: draft.bio,
        }
    }

    /// First and last name joined by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An author that has not been assigned an ID yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDraft {
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
}

impl AuthorDraft {
    /// Create a draft from its three fields.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        bio: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            bio: bio.into(),
        }
    }
}

impl From<Author> for AuthorDraft {
    fn from(author: Author) -> Self {
        Self {
            first_name: author.first_name,
            last_name: author.last_name,
            bio: author.bio,
        }
    }
}
