use serde::{Deserialize, Serialize};

/// A saved bookmark.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Client-settable link fields, for create and full-replace update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPayload {
    pub title: String,
    pub url: String,
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_roundtrip() {
        let link = Link {
            id: 7,
            title: "Rust book".into(),
            url: "https://doc.rust-lang.org/book/".into(),
            category: "learning".into(),
            description: "the book".into(),
            tags: vec!["rust".into(), "docs".into()],
        };
        let json = serde_json::to_string(&link).unwrap();
        let back: Link = serde_json::from_str(&json).unwrap();
        assert_eq!(back, link);
    }

    #[test]
    fn payload_requires_url() {
        let err = serde_json::from_str::<LinkPayload>(
            r#"{"title":"t","category":"c","description":"d","tags":[]}"#,
        );
        assert!(err.is_err());
    }
}
