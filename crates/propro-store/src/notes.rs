use chrono::Utc;
use rusqlite::Connection;
use tracing::instrument;

use propro_core::{Note, NotePayload};

use crate::database::Database;
use crate::error::StoreError;
use crate::row_helpers;

pub struct NoteRepo {
    db: Database,
}

impl NoteRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List all notes, newest first.
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<Note>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, content, category, created_at, tags
                 FROM notes ORDER BY created_at DESC, id DESC",
            )?;
            let mut rows = stmt.query([])?;
            let mut notes = Vec::new();
            while let Some(row) = rows.next()? {
                notes.push(row_to_note(row)?);
            }
            Ok(notes)
        })
    }

    /// Get a note by id.
    #[instrument(skip(self))]
    pub fn get(&self, id: i64) -> Result<Note, StoreError> {
        self.db.with_conn(|conn| {
            fetch_note(conn, id)?.ok_or_else(|| StoreError::NotFound(format!("note {id}")))
        })
    }

    /// Insert a new note. `created_at` is assigned here.
    #[instrument(skip(self, payload), fields(title = %payload.title))]
    pub fn create(&self, payload: &NotePayload) -> Result<Note, StoreError> {
        let now = Utc::now().to_rfc3339();
        let tags = serde_json::to_string(&payload.tags)?;
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO notes (title, content, category, created_at, tags)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![payload.title, payload.content, payload.category, now, tags],
            )?;
            Ok(Note {
                id: conn.last_insert_rowid(),
                title: payload.title.clone(),
                content: payload.content.clone(),
                category: payload.category.clone(),
                created_at: now.clone(),
                tags: payload.tags.clone(),
            })
        })
    }

    /// Full replace of every mutable field. Returns None when no row
    /// matched; a missing id is not an error.
    #[instrument(skip(self, payload))]
    pub fn update(&self, id: i64, payload: &NotePayload) -> Result<Option<Note>, StoreError> {
        let tags = serde_json::to_string(&payload.tags)?;
        self.db.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE notes SET title = ?1, content = ?2, category = ?3, tags = ?4
                 WHERE id = ?5",
                rusqlite::params![payload.title, payload.content, payload.category, tags, id],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            fetch_note(conn, id)
        })
    }

    /// Delete a note. Returns rows affected; deleting a missing id is a no-op.
    #[instrument(skip(self))]
    pub fn delete(&self, id: i64) -> Result<usize, StoreError> {
        self.db
            .with_conn(|conn| Ok(conn.execute("DELETE FROM notes WHERE id = ?1", [id])?))
    }
}

fn fetch_note(conn: &Connection, id: i64) -> Result<Option<Note>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, content, category, created_at, tags FROM notes WHERE id = ?1",
    )?;
    let mut rows = stmt.query([id])?;
    match rows.next()? {
        Some(row) => Ok(Some(row_to_note(row)?)),
        None => Ok(None),
    }
}

fn row_to_note(row: &rusqlite::Row<'_>) -> Result<Note, StoreError> {
    let tags_raw: String = row_helpers::get(row, 5, "notes", "tags")?;
    Ok(Note {
        id: row_helpers::get(row, 0, "notes", "id")?,
        title: row_helpers::get(row, 1, "notes", "title")?,
        content: row_helpers::get(row, 2, "notes", "content")?,
        category: row_helpers::get(row, 3, "notes", "category")?,
        created_at: row_helpers::get(row, 4, "notes", "created_at")?,
        tags: row_helpers::parse_tags(&tags_raw, "notes", "tags")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str) -> NotePayload {
        NotePayload {
            title: title.into(),
            content: "<p>body</p>".into(),
            category: "personal".into(),
            tags: vec!["one".into(), "two".into()],
        }
    }

    fn repo() -> NoteRepo {
        NoteRepo::new(Database::in_memory().unwrap())
    }

    #[test]
    fn create_assigns_id_and_timestamp() {
        let repo = repo();
        let note = repo.create(&payload("first")).unwrap();
        assert!(note.id >= 1);
        assert!(!note.created_at.is_empty());
        assert_eq!(note.tags, vec!["one", "two"]);
    }

    #[test]
    fn create_then_get_returns_row() {
        let repo = repo();
        let created = repo.create(&payload("first")).unwrap();
        let fetched = repo.get(created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn get_missing_fails() {
        let repo = repo();
        assert!(matches!(repo.get(999), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn list_newest_first() {
        let repo = repo();
        repo.create(&payload("a")).unwrap();
        repo.create(&payload("b")).unwrap();
        let c = repo.create(&payload("c")).unwrap();
        let all = repo.list().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, c.id);
        assert_eq!(all[0].title, "c");
    }

    #[test]
    fn update_replaces_fields_and_preserves_id() {
        let repo = repo();
        let created = repo.create(&payload("before")).unwrap();
        let updated = repo
            .update(
                created.id,
                &NotePayload {
                    title: "after".into(),
                    content: "<p>new</p>".into(),
                    category: "work".into(),
                    tags: vec!["three".into()],
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "after");
        assert_eq!(updated.tags, vec!["three"]);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn update_missing_returns_none() {
        let repo = repo();
        assert!(repo.update(42, &payload("x")).unwrap().is_none());
    }

    #[test]
    fn delete_removes_row() {
        let repo = repo();
        let created = repo.create(&payload("bye")).unwrap();
        assert_eq!(repo.delete(created.id).unwrap(), 1);
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn delete_missing_is_noop() {
        let repo = repo();
        assert_eq!(repo.delete(42).unwrap(), 0);
    }

    #[test]
    fn corrupt_tags_column_surfaces_as_error() {
        let db = Database::in_memory().unwrap();
        db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO notes (title, content, category, created_at, tags)
                 VALUES ('t', 'c', 'cat', '2026-01-01T00:00:00+00:00', 'not json')",
                [],
            )?;
            Ok(())
        })
        .unwrap();

        let repo = NoteRepo::new(db);
        assert!(matches!(
            repo.list(),
            Err(StoreError::CorruptRow { table: "notes", .. })
        ));
    }
}
