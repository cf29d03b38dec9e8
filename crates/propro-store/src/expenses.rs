use rusqlite::Connection;
use tracing::instrument;

use propro_core::{Expense, ExpensePayload};

use crate::database::Database;
use crate::error::StoreError;
use crate::row_helpers;

pub struct ExpenseRepo {
    db: Database,
}

impl ExpenseRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// List all entries, most recent date first.
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<Expense>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, description, amount, category, date, type
                 FROM expenses ORDER BY date DESC, id DESC",
            )?;
            let mut rows = stmt.query([])?;
            let mut entries = Vec::new();
            while let Some(row) = rows.next()? {
                entries.push(row_to_expense(row)?);
            }
            Ok(entries)
        })
    }

    /// Get an entry by id.
    #[instrument(skip(self))]
    pub fn get(&self, id: i64) -> Result<Expense, StoreError> {
        self.db.with_conn(|conn| {
            fetch_expense(conn, id)?.ok_or_else(|| StoreError::NotFound(format!("expense {id}")))
        })
    }

    /// Insert a new entry.
    #[instrument(skip(self, payload), fields(amount = payload.amount, entry_type = %payload.entry_type))]
    pub fn create(&self, payload: &ExpensePayload) -> Result<Expense, StoreError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO expenses (description, amount, category, date, type)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![
                    payload.description,
                    payload.amount,
                    payload.category,
                    payload.date,
                    payload.entry_type.to_string()
                ],
            )?;
            Ok(Expense {
                id: conn.last_insert_rowid(),
                description: payload.description.clone(),
                amount: payload.amount,
                category: payload.category.clone(),
                date: payload.date.clone(),
                entry_type: payload.entry_type,
            })
        })
    }

    /// Full replace of every mutable field. Returns None when no row matched.
    #[instrument(skip(self, payload))]
    pub fn update(&self, id: i64, payload: &ExpensePayload) -> Result<Option<Expense>, StoreError> {
        self.db.with_conn(|conn| {
            let changed = conn.execute(
                "UPDATE expenses SET description = ?1, amount = ?2, category = ?3, date = ?4,
                 type = ?5 WHERE id = ?6",
                rusqlite::params![
                    payload.description,
                    payload.amount,
                    payload.category,
                    payload.date,
                    payload.entry_type.to_string(),
                    id
                ],
            )?;
            if changed == 0 {
                return Ok(None);
            }
            fetch_expense(conn, id)
        })
    }

    /// Delete an entry. Returns rows affected.
    #[instrument(skip(self))]
    pub fn delete(&self, id: i64) -> Result<usize, StoreError> {
        self.db
            .with_conn(|conn| Ok(conn.execute("DELETE FROM expenses WHERE id = ?1", [id])?))
    }
}

fn fetch_expense(conn: &Connection, id: i64) -> Result<Option<Expense>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, description, amount, category, date, type FROM expenses WHERE id = ?1",
    )?;
    let mut rows = stmt.query([id])?;
    match rows.next()? {
        Some(row) => Ok(Some(row_to_expense(row)?)),
        None => Ok(None),
    }
}

fn row_to_expense(row: &rusqlite::Row<'_>) -> Result<Expense, StoreError> {
    let type_raw: String = row_helpers::get(row, 5, "expenses", "type")?;
    Ok(Expense {
        id: row_helpers::get(row, 0, "expenses", "id")?,
        description: row_helpers::get(row, 1, "expenses", "description")?,
        amount: row_helpers::get(row, 2, "expenses", "amount")?,
        category: row_helpers::get(row, 3, "expenses", "category")?,
        date: row_helpers::get(row, 4, "expenses", "date")?,
        entry_type: row_helpers::parse_enum(&type_raw, "expenses", "type")?,
    })
}
