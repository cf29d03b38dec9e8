use rusqlite::Connection;
use tracing::instrument;

use propro_core::{Task, TaskPayload};

use crate::database::Database;
use crate::error::StoreError;
use crate::row_helpers;

pub struct TaskRepo {
    db: Database,
}

impl TaskRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List all tasks, earliest due date first.
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<Task>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, status, assignee, description, due_date
                 FROM tasks ORDER BY due_date ASC, id ASC",
            )?;
            let mut rows = stmt.query([])?;
            let mut tasks = Vec::new();
            while let Some(row) = rows.next()? {
                tasks.push(row_to_task(row)?);
            }
            Ok(tasks)
        })
    }

    /// Get a task by id.
    #[instrument(skip(self))]
    pub fn get(&self, id: i64) -> Result<Task, StoreError> {
        self.db.with_conn(|conn| {
            fetch_task(conn, id)?.ok_or_else(|| StoreError::NotFound(format!("task {id}")))
        })
    }

    /// Insert a new task.
    #[instrument(skip(self, payload), fields(title = %payload.title, status = %payload.status))]
    pub fn create(&self, payload: &TaskPayload) -> Result<Task, StoreError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO tasks (title, status, assignee, description, due_date)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![
                    payload.title,
                    payload.status.to_string(),
                    payload.assignee,
                    payload.description,
                    payload.due_date
                ],
            )?;
            Ok(Task {
                id: conn.last_insert_rowid(),
                title: payload.title.clone(),
                status: payload.status,
                assignee: payload.assignee.clone(),
                description: payload.description.clone(),
                due_date: payload.due_date.clone(),
            })
        })
    }

    /// Full replace of every mutable field. Returns None when no row matched.
    #[instrument(skip(self, payload))]
    pub fn update(&self, id: i64, payload: &TaskPayload) -> Result<Option<Task>, StoreError> {
        self.db.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE tasks SET title = ?1, status = ?2, assignee = ?3, description = ?4,
                 due_date = ?5 WHERE id = ?6",
                rusqlite::params![
                    payload.title,
                    payload.status.to_string(),
                    payload.assignee,
                    payload.description,
                    payload.due_date,
                    id
                ],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            fetch_task(conn, id)
        })
    }

    /// Delete a task. Returns rows affected.
    #[instrument(skip(self))]
    pub fn delete(&self, id: i64) -> Result<usize, StoreError> {
        self.db
            .with_conn(|conn| Ok(conn.execute("DELETE FROM tasks WHERE id = ?1", [id])?))
    }
}

fn fetch_task(conn: &Connection, id: i64) -> Result<Option<Task>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, status, assignee, description, due_date FROM tasks WHERE id = ?1",
    )?;
    let mut rows = stmt.query([id])?;
    match rows.next()? {
        Some(row) => Ok(Some(row_to_task(row)?)),
        None => Ok(None),
    }
}

fn row_to_task(row: &rusqlite::Row<'_>) -> Result<Task, StoreError> {
    let status_raw: String = row_helpers::get(row, 2, "tasks", "status")?;
    Ok(Task {
        id: row_helpers::get(row, 0, "tasks", "id")?,
        title: row_helpers::get(row, 1, "tasks", "title")?,
        status: row_helpers::parse_enum(&status_raw, "tasks", "status")?,
        assignee: row_helpers::get(row, 3, "tasks", "assignee")?,
        description: row_helpers::get(row, 4, "tasks", "description")?,
        due_date: row_helpers::get(row, 5, "tasks", "due_date")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use propro_core::TaskStatus;

    fn payload(title: &str, due: &str) -> TaskPayload {
        TaskPayload {
            title: title.into(),
            status: TaskStatus::Todo,
            assignee: "sam".into(),
            description: "do the thing".into(),
            due_date: due.into(),
        }
    }

    fn repo() -> TaskRepo {
        TaskRepo::new(Database::in_memory().unwrap())
    }

    #[test]
    fn create_then_get() {
        let repo = repo();
        let created = repo.create(&payload("write report", "2026-09-15")).unwrap();
        let fetched = repo.get(created.id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.status, TaskStatus::Todo);
    }

    #[test]
    fn list_by_due_date_ascending() {
        let repo = repo();
        repo.create(&payload("later", "2026-12-01")).unwrap();
        repo.create(&payload("soon", "2026-09-01")).unwrap();
        repo.create(&payload("middle", "2026-10-15")).unwrap();
        let all = repo.list().unwrap();
        let titles: Vec<&str> = all.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["soon", "middle", "later"]);
    }

    #[test]
    fn update_moves_status() {
        let repo = repo();
        let created = repo.create(&payload("review pr", "2026-09-01")).unwrap();
        let updated = repo
            .update(
                created.id,
                &TaskPayload {
                    status: TaskStatus::InReview,
                    ..payload("review pr", "2026-09-01")
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.status, TaskStatus::InReview);
    }

    #[test]
    fn update_missing_returns_none() {
        let repo = repo();
        assert!(repo.update(9, &payload("x", "2026-01-01")).unwrap().is_none());
    }

    #[test]
    fn delete_removes_row() {
        let repo = repo();
        let created = repo.create(&payload("done soon", "2026-09-01")).unwrap();
        assert_eq!(repo.delete(created.id).unwrap(), 1);
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn unknown_status_in_storage_is_corrupt_row() {
        let db = Database::in_memory().unwrap();
        db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO tasks (title, status, assignee, description, due_date)
                 VALUES ('t', 'cancelled', 'a', 'd', '2026-01-01')",
                [],
            )?;
            Ok(())
        })
        .unwrap();

        let repo = TaskRepo::new(db);
        assert!(matches!(
            repo.list(),
            Err(StoreError::CorruptRow { table: "tasks", column: "status", .. })
        ));
    }
}
