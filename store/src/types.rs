//! Domain types for the todo store.
//!
//! # Design
//! `NewTodo` is the already-validated create payload: the HTTP layer owns
//! title validation and the `"pending"` status default, so the store never
//! sees a missing title. `TodoPatch` carries only the fields the caller
//! supplied; `None` means "keep the stored value", which is how partial
//! PUT bodies deserialize directly into it.

use serde::{Deserialize, Serialize};

/// A single todo row. `description` is nullable and serializes as JSON
/// `null` when absent, matching the wire format clients expect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
}

/// Insert payload. `status` has already been defaulted by the caller.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
}

/// Partial update. Omitted fields retain their previous stored values;
/// they are never cleared.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}
