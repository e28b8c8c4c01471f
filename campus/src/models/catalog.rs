use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

use crate::error::CatalogError;

use super::{event::Event, EventId};

/// The ordered, read-only list of events a session swipes through.
///
/// Order matters: the deck and every search result keep the order in which
/// events appear here.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    events: Vec<Event>,
    index: HashMap<EventId, usize>,
}
impl Catalog {
    pub fn new(events: Vec<Event>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(events.len());
        for (pos, event) in events.iter().enumerate() {
            if index.insert(event.id, pos).is_some() {
                return Err(CatalogError::DuplicateId(event.id));
            }
        }
        Ok(Self { events, index })
    }
    /// Parses a RON list of events, e.g. `[(id: 1, title: "...", ...)]`.
    pub fn from_ron(raw: &str) -> Result<Self, CatalogError> {
        let events: Vec<Event> = ron::from_str(raw)?;
        Self::new(events)
    }
    pub fn load<P>(path: P) -> Result<Self, CatalogError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&raw)
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.index.get(&id).map(|&pos| &self.events[pos])
    }
    pub fn contains(&self, id: EventId) -> bool {
        self.index.contains_key(&id)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }
    pub fn len(&self) -> usize {
        self.events.len()
    }
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Every distinct tag, in the order it first shows up.
    pub fn tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.events
            .iter()
            .flat_map(|e| e.tags.iter())
            .filter(|t| seen.insert(t.as_str()))
            .map(String::as_str)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
