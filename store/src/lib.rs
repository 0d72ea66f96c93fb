//! SQLite-backed persistence for the todo service.
//!
//! # Overview
//! The service keeps its whole table as an in-memory SQLite image and
//! rewrites one file on disk after every mutation. [`TodoStore`] owns that
//! lifecycle: `open` restores the image from disk (or starts empty) and
//! applies the schema; each mutating operation flushes the full image back
//! before returning.
//!
//! # Design
//! - `TodoStore` is an explicitly constructed object handed to the HTTP
//!   layer at startup — no hidden global handle, so tests get isolated
//!   stores from temp files.
//! - One connection behind a mutex; a mutation and its flush run inside a
//!   single guard, which is the only concurrency invariant the service
//!   needs.
//! - There is no durability between a statement and its flush: a crash in
//!   that window loses the mutation. Callers accepting writes accept that.

pub mod error;
pub mod store;
pub mod types;

pub use error::StoreError;
pub use store::TodoStore;
pub use types::{NewTodo, Todo, TodoPatch};
