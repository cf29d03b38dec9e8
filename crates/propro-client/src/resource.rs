//! Ties each record type to its REST path and payload.

use serde::de::DeserializeOwned;
use serde::Serialize;

use propro_core::{
    Expense, ExpensePayload, Link, LinkPayload, Note, NotePayload, Task, TaskPayload,
};

pub trait ApiResource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Path segment under `/api/`.
    const PATH: &'static str;
    /// Client-settable fields for create and full-replace update.
    type Payload: Serialize + Clone + Send + Sync + 'static;

    fn id(&self) -> i64;

    /// Apply a payload on top of an existing row, keeping the
    /// server-assigned fields. Used for optimistic cache rewrites.
    fn apply(existing: &Self, payload: &Self::Payload) -> Self;
}

impl ApiResource for Note {
    const PATH: &'static str = "notes";
    type Payload = NotePayload;

    fn id(&self) -> i64 {
        self.id
    }

    fn apply(existing: &Self, payload: &Self::Payload) -> Self {
        Self {
            id: existing.id,
            title: payload.title.clone(),
            content: payload.content.clone(),
            category: payload.category.clone(),
            created_at: existing.created_at.clone(),
            tags: payload.tags.clone(),
        }
    }
}

impl ApiResource for Link {
    const PATH: &'static str = "links";
    type Payload = LinkPayload;

    fn id(&self) -> i64 {
        self.id
    }

    fn apply(existing: &Self, payload: &Self::Payload) -> Self {
        Self {
            id: existing.id,
            title: payload.title.clone(),
            url: payload.url.clone(),
            category: payload.category.clone(),
            description: payload.description.clone(),
            tags: payload.tags.clone(),
        }
    }
}

impl ApiResource for Task {
    const PATH: &'static str = "tasks";
    type Payload = TaskPayload;

    fn id(&self) -> i64 {
        self.id
    }

    fn apply(existing: &Self, payload: &Self::Payload) -> Self {
        Self {
            id: existing.id,
            title: payload.title.clone(),
            status: payload.status,
            assignee: payload.assignee.clone(),
            description: payload.description.clone(),
            due_date: payload.due_date.clone(),
        }
    }
}

impl ApiResource for Expense {
    const PATH: &'static str = "expenses";
    type Payload = ExpensePayload;

    fn id(&self) -> i64 {
        self.id
    }

    fn apply(existing: &Self, payload: &Self::Payload) -> Self {
        Self {
            id: existing.id,
            description: payload.description.clone(),
            amount: payload.amount,
            category: payload.category.clone(),
            date: payload.date.clone(),
            entry_type: payload.entry_type,
        }
    }
}
