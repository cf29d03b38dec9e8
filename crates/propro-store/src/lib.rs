pub mod database;
pub mod error;
pub mod expenses;
pub mod links;
pub mod notes;
pub mod row_helpers;
pub mod schema;
pub mod tasks;

pub use database::Database;
pub use error::StoreError;
pub use expenses::ExpenseRepo;
pub use links::LinkRepo;
pub use notes::NoteRepo;
pub use tasks::TaskRepo;
