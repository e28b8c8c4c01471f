//! Free-text and tag search over the catalog.

use crate::models::{toggle_id, Catalog, Event};

pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Whether `event` matches a search.
///
/// An empty (or whitespace only) query matches everything; otherwise the
/// query must be a case-insensitive substring of the title, the location or
/// one of the tags. A non-empty tag selection additionally requires one of
/// the event's tags to equal a selected tag, ignoring case and surrounding
/// whitespace.
pub fn matches<S>(event: &Event, query: &str, selected_tags: &[S]) -> bool
where
    S: AsRef<str>,
{
    let query = normalize(query);
    let text_hit = query.is_empty()
        || event.title.to_lowercase().contains(&query)
        || event.location.to_lowercase().contains(&query)
        || event.tags.iter().any(|t| t.to_lowercase().contains(&query));
    if !text_hit {
        return false;
    }
    if selected_tags.is_empty() {
        return true;
    }
    let selected: Vec<String> = selected_tags.iter().map(|t| normalize(t.as_ref())).collect();
    event
        .tags
        .iter()
        .any(|t| selected.contains(&normalize(t)))
}

/// Catalog events matching the search, in catalog order.
pub fn search<'a, S>(catalog: &'a Catalog, query: &str, selected_tags: &[S]) -> Vec<&'a Event>
where
    S: AsRef<str>,
{
    catalog
        .iter()
        .filter(|e| matches(e, query, selected_tags))
        .collect()
}

/// The tag chips a user has switched on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection {
    tags: Vec<String>,
}
impl TagSelection {
    pub fn new() -> Self {
        Self::default()
    }
    /// Returns whether `tag` is selected afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        toggle_id(&mut self.tags, String::from(tag))
    }
    pub fn clear(&mut self) {
        self.tags.clear();
    }
    pub fn is_selected(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }
}
