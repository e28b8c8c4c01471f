use std::{io, path::PathBuf};

use thiserror::Error;

use crate::models::EventId;

/// Failures of a [`KeyValueStore`] backend.
///
/// These never reach callers of [`ReactionStore`], which logs and drops them.
///
/// [`KeyValueStore`]: crate::storage::KeyValueStore
/// [`ReactionStore`]: crate::store::ReactionStore
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] ron::Error),
    #[error("failed to decode snapshot: {0}")]
    Decode(#[from] ron::error::SpannedError),
}

/// Failures while loading externally supplied data (events, friends).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse catalog data: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("event id {0} appears more than once in the catalog")]
    DuplicateId(EventId),
}
