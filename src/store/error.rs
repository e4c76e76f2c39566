//! Draft store failure taxonomy
//!
//! These errors never cross the `DraftStore` facade: `save`/`clear` log and
//! return unit, `load` logs and returns `None`. They exist so the internal
//! paths stay `Result`-shaped and the log lines carry a precise cause.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DraftStoreError {
    /// The backing database could not be opened, so the store is disabled
    /// for the lifetime of the process.
    #[error("draft storage unavailable")]
    Unavailable,
    /// The storage layer rejected the read or write (includes a full disk,
    /// the local analog of quota exhaustion).
    #[error("draft storage rejected the operation: {0}")]
    Storage(#[from] rusqlite::Error),
    /// The draft value could not be encoded as JSON.
    #[error("failed to encode draft: {0}")]
    Serialize(#[source] serde_json::Error),
    /// The stored text no longer matches the draft shape (corruption or a
    /// schema change between releases).
    #[error("stored draft is unreadable: {0}")]
    Deserialize(#[source] serde_json::Error),
}
