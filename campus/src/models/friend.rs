use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

use super::{EventId, FriendId};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    /// May name events the local catalog does not know about.
    #[serde(default)]
    pub likes: Vec<EventId>,
}
impl Friend {
    pub fn new(id: FriendId, name: &str) -> Self {
        Self {
            id,
            name: String::from(name),
            avatar: String::new(),
            likes: Vec::new(),
        }
    }
    pub fn with_likes<I>(mut self, likes: I) -> Self
    where
        I: IntoIterator<Item = EventId>,
    {
        self.likes = likes.into_iter().collect();
        self
    }
    pub fn likes(&self, id: EventId) -> bool {
        self.likes.contains(&id)
    }

    pub fn load_all<P>(path: P) -> Result<Vec<Friend>, CatalogError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(ron::from_str(&raw)?)
    }
}
impl PartialEq for Friend {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Friend {}
