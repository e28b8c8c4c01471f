//! The swipe deck: every event the user has not decided on yet.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::{
    models::{Catalog, Event, EventId, ReactionState},
    store::ReactionStore,
};

/// Catalog events that are neither liked nor passed, in catalog order.
pub fn derive_deck<'a>(catalog: &'a Catalog, state: &ReactionState) -> Vec<&'a Event> {
    catalog
        .iter()
        .filter(|e| !state.is_decided(e.id))
        .collect()
}

/// How a card left the top of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Like,
    Pass,
    /// Undecided for now, the card goes to the back of the queue.
    Maybe,
}

/// The order in which undecided cards are shown.
///
/// The queue follows the derived deck but remembers local reordering: cards
/// sent back with [`DeckQueue::defer`] stay behind the others across
/// realignments. Deferring never touches liked or passed ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckQueue {
    ids: VecDeque<EventId>,
}
impl DeckQueue {
    pub fn new(deck: &[&Event]) -> Self {
        let mut queue = Self::default();
        queue.realign(deck);
        queue
    }

    /// Drops ids that left the deck and appends new ones, keeping the
    /// current order for everything else.
    pub fn realign(&mut self, deck: &[&Event]) {
        let in_deck: HashSet<EventId> = deck.iter().map(|e| e.id).collect();
        self.ids.retain(|id| in_deck.contains(id));
        let queued: HashSet<EventId> = self.ids.iter().copied().collect();
        self.ids
            .extend(deck.iter().map(|e| e.id).filter(|id| !queued.contains(id)));
    }

    pub fn top(&self) -> Option<EventId> {
        self.ids.front().copied()
    }
    pub fn next(&self) -> Option<EventId> {
        self.ids.get(1).copied()
    }
    pub fn len(&self) -> usize {
        self.ids.len()
    }
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = EventId> + '_ {
        self.ids.iter().copied()
    }

    /// Sends the top card to the back.
    pub fn defer(&mut self) -> Option<EventId> {
        let id = self.ids.pop_front()?;
        self.ids.push_back(id);
        Some(id)
    }

    /// Applies `swipe` to the top card and realigns with the fresh deck.
    ///
    /// Returns the id that was swiped, or `None` for an empty queue.
    pub fn swipe(
        &mut self,
        store: &mut ReactionStore,
        catalog: &Catalog,
        swipe: Swipe,
    ) -> Option<EventId> {
        let id = self.top()?;
        match swipe {
            Swipe::Like => {
                store.like(id);
                self.ids.pop_front();
            }
            Swipe::Pass => {
                store.pass(id);
                self.ids.pop_front();
            }
            Swipe::Maybe => {
                self.defer();
            }
        }
        debug!(%id, ?swipe, remaining = self.len(), "swiped");
        self.realign(&derive_deck(catalog, store.state()));
        Some(id)
    }
}
