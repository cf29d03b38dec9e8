use rusqlite::Connection;
use tracing::instrument;

use propro_core::{Link, LinkPayload};

use crate::database::Database;
use crate::error::StoreError;
use crate::row_helpers;

pub struct LinkRepo {
    db: Database,
}

impl LinkRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List all links, most recently added first (id descending).
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<Link>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, url, category, description, tags
                 FROM links ORDER BY id DESC",
            )?;
            let mut rows = stmt.query([])?;
            let mut links = Vec::new();
            while let Some(row) = rows.next()? {
                links.push(row_to_link(row)?);
            }
            Ok(links)
        })
    }

    /// Get a link by id.
    #[instrument(skip(self))]
    pub fn get(&self, id: i64) -> Result<Link, StoreError> {
        self.db.with_conn(|conn| {
            fetch_link(conn, id)?.ok_or_else(|| StoreError::NotFound(format!("link {id}")))
        })
    }

    /// Insert a new link.
    #[instrument(skip(self, payload), fields(url = %payload.url))]
    pub fn create(&self, payload: &LinkPayload) -> Result<Link, StoreError> {
        let tags = serde_json::to_string(&payload.tags)?;
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO links (title, url, category, description, tags)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![
                    payload.title,
                    payload.url,
                    payload.category,
                    payload.description,
                    tags
                ],
            )?;
            Ok(Link {
                id: conn.last_insert_rowid(),
                title: payload.title.clone(),
                url: payload.url.clone(),
                category: payload.category.clone(),
                description: payload.description.clone(),
                tags: payload.tags.clone(),
            })
        })
    }

    /// Full replace of every mutable field. Returns None when no row matched.
    #[instrument(skip(self, payload))]
    pub fn update(&self, id: i64, payload: &LinkPayload) -> Result<Option<Link>, StoreError> {
        let tags = serde_json::to_string(&payload.tags)?;
        self.db.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE links SET title = ?1, url = ?2, category = ?3, description = ?4, tags = ?5
                 WHERE id = ?6",
                rusqlite::params![
                    payload.title,
                    payload.url,
                    payload.category,
                    payload.description,
                    tags,
                    id
                ],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            fetch_link(conn, id)
        })
    }

    /// Delete a link. Returns rows affected.
    #[instrument(skip(self))]
    pub fn delete(&self, id: i64) -> Result<usize, StoreError> {
        self.db
            .with_conn(|conn| Ok(conn.execute("DELETE FROM links WHERE id = ?1", [id])?))
    }
}

fn fetch_link(conn: &Connection, id: i64) -> Result<Option<Link>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, url, category, description, tags FROM links WHERE id = ?1",
    )?;
    let mut rows = stmt.query([id])?;
    match rows.next()? {
        Some(row) => Ok(Some(row_to_link(row)?)),
        None => Ok(None),
    }
}

fn row_to_link(row: &rusqlite::Row<'_>) -> Result<Link, StoreError> {
    let tags_raw: String = row_helpers::get(row, 5, "links", "tags")?;
    Ok(Link {
        id: row_helpers::get(row, 0, "links", "id")?,
        title: row_helpers::get(row, 1, "links", "title")?,
        url: row_helpers::get(row, 2, "links", "url")?,
        category: row_helpers::get(row, 3, "links", "category")?,
        description: row_helpers::get(row, 4, "links", "description")?,
        tags: row_helpers::parse_tags(&tags_raw, "links", "tags")?,
    })
}
