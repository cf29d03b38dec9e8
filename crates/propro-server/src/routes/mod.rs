//! Per-resource route modules, merged into the app router in `server`.

pub mod expenses;
pub mod links;
pub mod notes;
pub mod tasks;

use serde::{Deserialize, Serialize};

/// Confirmation body returned by every DELETE. Deleting a missing id
/// still confirms; the operation is a no-op, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}
