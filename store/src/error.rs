//! Error types for the todo store.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the HTTP layer maps it to
//! 404 and everything else to 500. `Load` and `Flush` carry the file path:
//! when startup fails on a corrupt image the operator needs to know which
//! file to look at. A corrupt file is fatal, never silently replaced with
//! an empty database.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`crate::TodoStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// No row with the given id.
    #[error("todo {0} not found")]
    NotFound(i64),

    /// The on-disk image exists but could not be restored into the engine.
    #[error("could not load database file {path}: {source}")]
    Load {
        path: PathBuf,
        source: rusqlite::Error,
    },

    /// Writing the in-memory image back to disk failed.
    #[error("could not persist database to {path}: {source}")]
    Flush {
        path: PathBuf,
        source: rusqlite::Error,
    },

    /// Statement-level engine failure.
    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),

    /// The connection mutex was poisoned by a panicking holder.
    #[error("database connection mutex poisoned")]
    Poisoned,
}
