//! Shared record types for the ProductivePro API.
//!
//! Each resource has a stored record (server-assigned `id`) and a payload
//! struct carrying every client-settable field. The same payload type is
//! used for POST (create) and PUT (full replace).

pub mod expenses;
pub mod links;
pub mod notes;
pub mod tasks;

pub use expenses::{EntryType, Expense, ExpensePayload};
pub use links::{Link, LinkPayload};
pub use notes::{Note, NotePayload};
pub use tasks::{Task, TaskPayload, TaskStatus};
