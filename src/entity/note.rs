// src/entity/note.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PaletteColor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub color: PaletteColor,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Epoch milliseconds
    pub updated_at: i64,
}

impl Note {
    /// Build a fresh note from a draft, stamped with `now`.
    pub fn from_draft(draft: NoteDraft, now: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            content: draft.content,
            color: draft.color.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Short id for display (first 7 chars)
    pub fn short_id(&self) -> &str {
        self.id.get(..7).unwrap_or(&self.id)
    }
}

/// A note as proposed by the caller, before it has an identity.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub color: Option<PaletteColor>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: PaletteColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// Update payload for a note. Only the fields that are `Some` are replaced.
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub color: Option<PaletteColor>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.color.is_none()
    }

    /// Apply the patch in place. Identity and timestamps are left to the caller.
    pub fn apply_to(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(content) = self.content {
            note.content = content;
        }
        if let Some(color) = self.color {
            note.color = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_draft_defaults_color_and_stamps_times() {
        let note = Note::from_draft(NoteDraft::new("Grocery", "milk"), 1_700_000_000_000);

        assert_eq!(note.color, PaletteColor::Sky);
        assert_eq!(note.created_at, note.updated_at);
        assert_eq!(note.created_at, 1_700_000_000_000);
        assert!(Uuid::parse_str(&note.id).is_ok());
    }

    #[test]
    fn test_stored_shape_uses_camel_case() {
        let note = Note {
            id: "abc".to_string(),
            title: "T".to_string(),
            content: String::new(),
            color: PaletteColor::Rose,
            created_at: 100,
            updated_at: 200,
        };

        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(value["createdAt"], 100);
        assert_eq!(value["updatedAt"], 200);
        assert_eq!(value["color"], "bg-rose-900");
    }

    #[test]
    fn test_patch_replaces_only_given_fields() {
        let mut note = Note::from_draft(NoteDraft::new("Old", "body"), 1);
        let patch = NotePatch {
            color: Some(PaletteColor::Lime),
            ..Default::default()
        };

        patch.apply_to(&mut note);

        assert_eq!(note.title, "Old");
        assert_eq!(note.content, "body");
        assert_eq!(note.color, PaletteColor::Lime);
    }

    #[test]
    fn test_short_id_on_short_ids() {
        let mut note = Note::from_draft(NoteDraft::new("x", ""), 1);
        note.id = "abc".to_string();
        assert_eq!(note.short_id(), "abc");
    }
}
