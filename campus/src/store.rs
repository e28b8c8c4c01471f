use tracing::debug;

use crate::{
    models::{EventId, ReactionState, Stats, Theme},
    persist::Persister,
};

/// The single owner of a session's [`ReactionState`].
///
/// Construct one per session and hand it to whoever needs it. All changes go
/// through the named operations below; none of them can fail, and calling one
/// twice with the same id has the same effect as calling it once. Every call
/// that actually changes the state is followed by a best-effort snapshot
/// write when the store was built with a [`Persister`].
#[derive(Debug, Default)]
pub struct ReactionStore {
    state: ReactionState,
    persister: Option<Persister>,
}
impl ReactionStore {
    /// A store that forgets everything once it is dropped.
    pub fn in_memory() -> Self {
        Self::default()
    }
    /// Starts empty and persists from now on, without reading old state.
    pub fn new(persister: Persister) -> Self {
        Self {
            state: ReactionState::default(),
            persister: Some(persister),
        }
    }
    /// Restores the stored snapshot on the blocking pool, then persists changes.
    pub async fn open(persister: Persister) -> Self {
        let state = persister.load().await;
        Self {
            state,
            persister: Some(persister),
        }
    }
    pub fn open_now(persister: Persister) -> Self {
        let state = persister.load_now();
        Self {
            state,
            persister: Some(persister),
        }
    }

    pub fn state(&self) -> &ReactionState {
        &self.state
    }
    pub fn theme(&self) -> Theme {
        self.state.theme()
    }
    pub fn stats(&self) -> Stats {
        self.state.stats()
    }
    pub fn is_liked(&self, id: EventId) -> bool {
        self.state.liked().contains(id)
    }
    pub fn is_passed(&self, id: EventId) -> bool {
        self.state.passed().contains(id)
    }
    pub fn is_joined(&self, id: EventId) -> bool {
        self.state.joined().contains(id)
    }
    pub fn is_saved(&self, id: EventId) -> bool {
        self.state.saved().contains(id)
    }

    pub fn like(&mut self, id: EventId) -> bool {
        self.apply("like", |s| s.like(id))
    }
    pub fn unlike(&mut self, id: EventId) -> bool {
        self.apply("unlike", |s| s.unlike(id))
    }
    pub fn toggle_like(&mut self, id: EventId) -> bool {
        self.apply("toggle_like", |s| s.toggle_like(id))
    }
    pub fn pass(&mut self, id: EventId) -> bool {
        self.apply("pass", |s| s.pass(id))
    }
    /// Joining also likes the event.
    pub fn join(&mut self, id: EventId) -> bool {
        self.apply("join", |s| s.join(id))
    }
    pub fn leave(&mut self, id: EventId) -> bool {
        self.apply("leave", |s| s.leave(id))
    }
    pub fn toggle_join(&mut self, id: EventId) -> bool {
        self.apply("toggle_join", |s| s.toggle_join(id))
    }
    pub fn save(&mut self, id: EventId) -> bool {
        self.apply("save", |s| s.save(id))
    }
    pub fn unsave(&mut self, id: EventId) -> bool {
        self.apply("unsave", |s| s.unsave(id))
    }
    /// Moves a saved event behind every other saved event.
    pub fn defer_save(&mut self, id: EventId) -> bool {
        self.apply("defer_save", |s| s.defer_save(id))
    }
    pub fn clear_saved(&mut self) -> bool {
        self.apply("clear_saved", ReactionState::clear_saved)
    }
    pub fn toggle_theme(&mut self) -> bool {
        self.apply("toggle_theme", ReactionState::toggle_theme)
    }
    /// Clears likes only. Joined events stay joined even though they are no
    /// longer liked.
    pub fn reset_likes(&mut self) -> bool {
        self.apply("reset_likes", ReactionState::reset_likes)
    }
    pub fn reset_joined(&mut self) -> bool {
        self.apply("reset_joined", ReactionState::reset_joined)
    }
    /// Clears every id set, the theme is kept.
    pub fn reset_all(&mut self) -> bool {
        self.apply("reset_all", ReactionState::reset_all)
    }

    /// Waits for outstanding snapshot writes.
    pub async fn settle(&mut self) {
        if let Some(persister) = self.persister.as_mut() {
            persister.settle().await;
        }
    }

    fn apply<F>(&mut self, op: &'static str, f: F) -> bool
    where
        F: FnOnce(&mut ReactionState) -> bool,
    {
        let changed = f(&mut self.state);
        if changed {
            debug!(op, stats = ?self.state.stats(), "reaction state changed");
            if let Some(persister) = self.persister.as_mut() {
                persister.persist(&self.state);
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;
    use crate::{
        error::StorageError,
        storage::{KeyValueStore, MemoryStore},
    };

    #[derive(Default)]
    struct Broken {
        attempts: AtomicUsize,
    }
    impl KeyValueStore for Broken {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire").into())
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk on fire").into())
        }
    }

    #[derive(Default)]
    struct Counting {
        inner: MemoryStore,
        writes: AtomicUsize,
    }
    impl KeyValueStore for Counting {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }
        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.set(key, value)
        }
    }

    #[test]
    fn join_implies_like() {
        let mut store = ReactionStore::in_memory();
        store.join(EventId(4));
        assert!(store.is_joined(EventId(4)));
        assert!(store.is_liked(EventId(4)));
    }

    #[test]
    fn reset_likes_leaves_joined_alone() {
        let mut store = ReactionStore::in_memory();
        store.join(EventId(1));
        store.join(EventId(2));
        store.reset_likes();

        assert_eq!(store.stats().liked, 0);
        assert!(store.is_joined(EventId(1)));
        assert!(store.is_joined(EventId(2)));
    }

    #[test]
    fn theme_flips() {
        let mut store = ReactionStore::in_memory();
        assert_eq!(store.theme(), Theme::Light);
        store.toggle_theme();
        assert_eq!(store.theme(), Theme::Dark);
        store.toggle_theme();
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn toggles_and_clearing_saved() {
        let mut store = ReactionStore::in_memory();
        store.toggle_like(EventId(1));
        assert!(store.is_liked(EventId(1)));
        store.toggle_like(EventId(1));
        assert!(!store.is_liked(EventId(1)));

        store.save(EventId(2));
        store.save(EventId(3));
        assert!(store.clear_saved());
        assert!(!store.clear_saved());
        assert_eq!(store.stats().saved, 0);
    }

    #[test]
    fn unchanged_state_is_not_written() {
        let storage = Arc::new(Counting::default());
        let mut store = ReactionStore::new(Persister::new(storage.clone(), "k"));

        store.like(EventId(1));
        store.like(EventId(1));
        store.unsave(EventId(1));
        store.leave(EventId(1));

        assert_eq!(storage.writes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn pass_and_reset_joined_repeat_safely() {
        let storage = Arc::new(Counting::default());
        let mut store = ReactionStore::new(Persister::new(storage.clone(), "k"));

        assert!(store.pass(EventId(1)));
        assert!(!store.pass(EventId(1)));
        assert_eq!(store.state().passed().as_slice(), &[EventId(1)]);

        store.join(EventId(2));
        store.save(EventId(3));
        assert!(store.reset_joined());
        assert_eq!(store.stats().joined, 0);
        assert!(store.is_liked(EventId(2)));
        assert!(store.is_passed(EventId(1)));
        assert!(store.is_saved(EventId(3)));

        let writes = storage.writes.load(Ordering::SeqCst);
        assert!(!store.reset_joined());
        assert_eq!(storage.writes.load(Ordering::SeqCst), writes);
    }

    #[test]
    fn failed_writes_keep_memory_state() {
        let storage = Arc::new(Broken::default());
        let mut store = ReactionStore::open_now(Persister::new(storage.clone(), "k"));

        assert_eq!(store.state(), &ReactionState::default());
        assert!(store.join(EventId(9)));
        assert!(store.save(EventId(9)));
        assert!(store.is_joined(EventId(9)));
        assert!(store.is_saved(EventId(9)));
        assert_eq!(storage.attempts.load(Ordering::SeqCst), 2);
    }
}
