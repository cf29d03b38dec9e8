use serde::{Deserialize, Serialize};

/// A stored note. `content` is rich text (HTML) produced by the editor;
/// `tags` is an ordered list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    /// RFC 3339 timestamp, server-assigned at creation.
    pub created_at: String,
    pub tags: Vec<String>,
}

/// Client-settable note fields, for create and full-replace update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotePayload {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}
