//! Typed client for the ProductivePro REST API.
//!
//! Mirrors the behavior the browser UI relied on: a data-access object
//! per resource caching the last-fetched list, optimistic local mutation
//! on update/delete, a debounced notes autosave, and toast-style failure
//! notifications. Nothing is retried; a failed request leaves the cache
//! as it is and the app keeps going.

pub mod autosave;
pub mod dao;
pub mod error;
pub mod http;
pub mod notify;
pub mod resource;

pub use autosave::{Autosave, DEFAULT_DEBOUNCE};
pub use dao::Dao;
pub use error::ClientError;
pub use http::ApiClient;
pub use notify::{Level, Notification, Notifier};
pub use resource::ApiResource;

use propro_core::{Expense, Link, Note, Task};

pub type NotesDao = Dao<Note>;
pub type LinksDao = Dao<Link>;
pub type TasksDao = Dao<Task>;
pub type ExpensesDao = Dao<Expense>;
