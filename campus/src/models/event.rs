use serde::{Deserialize, Serialize};

use super::EventId;

/// A single campus event as supplied by the catalog.
///
/// Events are never mutated once loaded, every reaction a user has to an
/// event is tracked separately by id in a [`ReactionState`].
///
/// [`ReactionState`]: crate::models::ReactionState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: String,
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, alias = "img")]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Default)]
pub struct EventBuilder {
    id: EventId,
    title: String,
    date: String,
    location: String,
    tags: Vec<String>,
    image: String,
    description: String,
}
impl EventBuilder {
    pub fn new(id: EventId, title: &str) -> Self {
        Self {
            id,
            title: String::from(title),
            ..Self::default()
        }
    }
    pub fn date(mut self, date: &str) -> Self {
        self.date = String::from(date);
        self
    }
    pub fn location(mut self, location: &str) -> Self {
        self.location = String::from(location);
        self
    }
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
    pub fn image(mut self, image: &str) -> Self {
        self.image = String::from(image);
        self
    }
    pub fn description(mut self, desc: &str) -> Self {
        self.description = String::from(desc);
        self
    }
    pub fn build(self) -> Event {
        Event {
            id: self.id,
            title: self.title,
            date: self.date,
            location: self.location,
            tags: self.tags,
            image: self.image,
            description: self.description,
        }
    }
}
