//! Note domain types

use super::ids::{NoteId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A short text note owned by exactly one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub is_pinned: bool,
    #[serde(rename = "userId")]
    pub owner_id: UserId,
    pub created_on: DateTime<Utc>,
    pub updated_on: DateTime<Utc>,
}

/// Data for creating a new note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateNote {
    pub owner_id: UserId,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl CreateNote {
    pub fn new(
        owner_id: UserId,
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            owner_id,
            title: title.into(),
            content: content.into(),
            tags: normalize_tags(tags),
        }
    }
}

/// Partial update of a note; `None` leaves the stored value untouched.
///
/// A supplied `tags` vector replaces the stored set wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_pinned: Option<bool>,
}

impl UpdateNote {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.tags.is_none()
            && self.is_pinned.is_none()
    }
}

/// Trim tags, drop blanks and keep the first occurrence of each duplicate.
pub fn normalize_tags<I>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || normalized.iter().any(|t| t == tag) {
            continue;
        }
        normalized.push(tag.to_string());
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_tags_preserves_order_and_dedupes() {
        let tags = vec![
            "work".to_string(),
            " ideas".to_string(),
            "work".to_string(),
            "   ".to_string(),
            "home".to_string(),
        ];

        assert_eq!(normalize_tags(tags), vec!["work", "ideas", "home"]);
    }

    #[test]
    fn update_note_is_empty() {
        assert!(UpdateNote::default().is_empty());

        let changes = UpdateNote {
            tags: Some(vec![]),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }

    #[test]
    fn note_serializes_with_wire_names() {
        let now = Utc::now();
        let note = Note {
            id: NoteId::new("n-1"),
            title: "Title".to_string(),
            content: "Body".to_string(),
            tags: vec!["a".to_string()],
            is_pinned: true,
            owner_id: UserId::new("u-1"),
            created_on: now,
            updated_on: now,
        };

        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["_id"], "n-1");
        assert_eq!(value["userId"], "u-1");
        assert_eq!(value["isPinned"], true);
        assert_eq!(value["tags"][0], "a");
    }
}
