use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::EventId;

/// Adds `id` when it is missing and removes it when it is present.
///
/// Applying it twice with the same id gives back the original list. Returns
/// whether `id` is present afterwards.
pub fn toggle_id<T: PartialEq>(items: &mut Vec<T>, id: T) -> bool {
    if let Some(pos) = items.iter().position(|x| *x == id) {
        items.remove(pos);
        false
    } else {
        items.push(id);
        true
    }
}

/// An insertion-ordered list of event ids without duplicates.
///
/// Membership is what the reaction state cares about, order is only used to
/// let a saved event be pushed to the back with [`IdList::move_to_end`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<EventId>", into = "Vec<EventId>")]
pub struct IdList(Vec<EventId>);

impl IdList {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn contains(&self, id: EventId) -> bool {
        self.0.contains(&id)
    }
    /// Returns `false` when `id` was already present.
    pub fn insert(&mut self, id: EventId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.0.push(id);
        true
    }
    /// Returns `false` when `id` was not present.
    pub fn remove(&mut self, id: EventId) -> bool {
        let before = self.0.len();
        self.0.retain(|x| *x != id);
        self.0.len() != before
    }
    pub fn toggle(&mut self, id: EventId) -> bool {
        toggle_id(&mut self.0, id)
    }
    /// Returns whether the ordering changed; an absent id is left alone.
    pub fn move_to_end(&mut self, id: EventId) -> bool {
        match self.0.iter().position(|x| *x == id) {
            Some(pos) if pos + 1 != self.0.len() => {
                self.0.remove(pos);
                self.0.push(id);
                true
            }
            _ => false,
        }
    }
    pub fn clear(&mut self) -> bool {
        let changed = !self.0.is_empty();
        self.0.clear();
        changed
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = EventId> + '_ {
        self.0.iter().copied()
    }
    pub fn as_slice(&self) -> &[EventId] {
        &self.0
    }
}
impl From<Vec<EventId>> for IdList {
    fn from(ids: Vec<EventId>) -> Self {
        let mut list = Self::new();
        for id in ids {
            list.insert(id);
        }
        list
    }
}
impl From<IdList> for Vec<EventId> {
    fn from(list: IdList) -> Self {
        list.0
    }
}
impl FromIterator<EventId> for IdList {
    fn from_iter<I: IntoIterator<Item = EventId>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}
impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
impl Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Everything a session remembers about the user's reactions.
///
/// This is also the persisted layout: `likes`, `passed`, `joined`, `saved`
/// and `theme`. Fields missing from a stored snapshot fall back to their
/// defaults.
///
/// Every transition reports whether it changed anything, so that the store
/// only persists real changes.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionState {
    #[serde(rename = "likes")]
    liked: IdList,
    passed: IdList,
    joined: IdList,
    saved: IdList,
    theme: Theme,
}
impl ReactionState {
    pub fn liked(&self) -> &IdList {
        &self.liked
    }
    pub fn passed(&self) -> &IdList {
        &self.passed
    }
    pub fn joined(&self) -> &IdList {
        &self.joined
    }
    pub fn saved(&self) -> &IdList {
        &self.saved
    }
    pub fn theme(&self) -> Theme {
        self.theme
    }
    /// Whether the user has already decided on `id` one way or the other.
    pub fn is_decided(&self, id: EventId) -> bool {
        self.liked.contains(id) || self.passed.contains(id)
    }
    pub fn stats(&self) -> Stats {
        Stats {
            liked: self.liked.len(),
            passed: self.passed.len(),
            joined: self.joined.len(),
            saved: self.saved.len(),
        }
    }

    pub(crate) fn like(&mut self, id: EventId) -> bool {
        self.liked.insert(id)
    }
    pub(crate) fn unlike(&mut self, id: EventId) -> bool {
        self.liked.remove(id)
    }
    pub(crate) fn toggle_like(&mut self, id: EventId) -> bool {
        self.liked.toggle(id);
        true
    }
    pub(crate) fn pass(&mut self, id: EventId) -> bool {
        self.passed.insert(id)
    }
    pub(crate) fn join(&mut self, id: EventId) -> bool {
        let joined = self.joined.insert(id);
        let liked = self.liked.insert(id);
        joined || liked
    }
    pub(crate) fn leave(&mut self, id: EventId) -> bool {
        self.joined.remove(id)
    }
    pub(crate) fn toggle_join(&mut self, id: EventId) -> bool {
        if self.joined.contains(id) {
            self.leave(id)
        } else {
            self.join(id)
        }
    }
    pub(crate) fn save(&mut self, id: EventId) -> bool {
        self.saved.insert(id)
    }
    pub(crate) fn unsave(&mut self, id: EventId) -> bool {
        self.saved.remove(id)
    }
    pub(crate) fn defer_save(&mut self, id: EventId) -> bool {
        self.saved.move_to_end(id)
    }
    pub(crate) fn clear_saved(&mut self) -> bool {
        self.saved.clear()
    }
    pub(crate) fn toggle_theme(&mut self) -> bool {
        self.theme = self.theme.toggled();
        true
    }
    // Leaves `joined` untouched, so a joined id may no longer be liked.
    pub(crate) fn reset_likes(&mut self) -> bool {
        self.liked.clear()
    }
    pub(crate) fn reset_joined(&mut self) -> bool {
        self.joined.clear()
    }
    pub(crate) fn reset_all(&mut self) -> bool {
        let liked = self.liked.clear();
        let passed = self.passed.clear();
        let joined = self.joined.clear();
        let saved = self.saved.clear();
        liked || passed || joined || saved
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub liked: usize,
    pub passed: usize,
    pub joined: usize,
    pub saved: usize,
}
