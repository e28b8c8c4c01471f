use std::sync::{Arc, Mutex, PoisonError};

use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, warn};

use crate::{error::StorageError, models::ReactionState, storage::KeyValueStore};

/// Writes full snapshots of a [`ReactionState`] under one well-known key.
///
/// Writes are best effort. Inside a tokio runtime each one is handed to the
/// blocking pool and the caller moves on; outside of one it happens inline.
/// Failures are logged and dropped. Every snapshot carries a sequence
/// number and a snapshot older than the last one stored is skipped, so once
/// all writes have settled the stored value is the most recent state, unless
/// a later write failed and an older one landed after it.
pub struct Persister {
    storage: Arc<dyn KeyValueStore>,
    key: String,
    issued: u64,
    written: Arc<Mutex<u64>>,
    pending: Vec<JoinHandle<()>>,
}
impl Persister {
    pub fn new<K>(storage: Arc<dyn KeyValueStore>, key: K) -> Self
    where
        K: Into<String>,
    {
        Self {
            storage,
            key: key.into(),
            issued: 0,
            written: Arc::new(Mutex::new(0)),
            pending: Vec::new(),
        }
    }
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the stored snapshot, falling back to defaults on any failure.
    pub fn load_now(&self) -> ReactionState {
        read_snapshot(self.storage.as_ref(), &self.key)
    }
    pub async fn load(&self) -> ReactionState {
        let storage = Arc::clone(&self.storage);
        let key = self.key.clone();
        match tokio::task::spawn_blocking(move || read_snapshot(storage.as_ref(), &key)).await {
            Ok(state) => state,
            Err(err) => {
                warn!(error = %err, key = %self.key, "snapshot read task failed, using defaults");
                ReactionState::default()
            }
        }
    }

    pub fn persist(&mut self, state: &ReactionState) {
        self.issued += 1;
        let seq = self.issued;
        let encoded = match ron::to_string(state) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(error = %err, key = %self.key, "failed to encode reaction state");
                return;
            }
        };

        self.pending.retain(|handle| !handle.is_finished());
        match Handle::try_current() {
            Ok(handle) => {
                let storage = Arc::clone(&self.storage);
                let key = self.key.clone();
                let written = Arc::clone(&self.written);
                self.pending.push(handle.spawn_blocking(move || {
                    write_if_newer(storage.as_ref(), &key, seq, &written, &encoded)
                }));
            }
            Err(_) => write_if_newer(self.storage.as_ref(), &self.key, seq, &self.written, &encoded),
        }
    }

    /// Waits for every write issued so far.
    pub async fn settle(&mut self) {
        for handle in self.pending.drain(..) {
            if let Err(err) = handle.await {
                warn!(error = %err, "snapshot write task failed");
            }
        }
    }
}
impl std::fmt::Debug for Persister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persister")
            .field("key", &self.key)
            .field("issued", &self.issued)
            .field("pending", &self.pending.len())
            .finish()
    }
}

fn read_snapshot(storage: &dyn KeyValueStore, key: &str) -> ReactionState {
    match try_read(storage, key) {
        Ok(Some(state)) => state,
        Ok(None) => {
            debug!(key, "no stored reaction state, starting empty");
            ReactionState::default()
        }
        Err(err) => {
            warn!(error = %err, key, "falling back to default reaction state");
            ReactionState::default()
        }
    }
}

fn try_read(storage: &dyn KeyValueStore, key: &str) -> Result<Option<ReactionState>, StorageError> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    Ok(Some(ron::from_str(&raw)?))
}

fn write_if_newer(
    storage: &dyn KeyValueStore,
    key: &str,
    seq: u64,
    written: &Mutex<u64>,
    encoded: &str,
) {
    let mut last = written.lock().unwrap_or_else(PoisonError::into_inner);
    if *last >= seq {
        debug!(key, seq, last = *last, "skipping superseded snapshot");
        return;
    }
    match storage.set(key, encoded) {
        Ok(()) => *last = seq,
        Err(err) => warn!(error = %err, key, seq, "failed to persist reaction state"),
    }
}
