//! Campus is a crate that keeps track of how a user reacts to a deck of campus events.
//!
//! A session swipes through a [`Catalog`] of events, likes or passes them, joins
//! some, saves others for later, and can look up what friends liked. All of this is
//! plain membership tracking by event id, kept by a [`ReactionStore`].
//!
//! [`ReactionStore`] owns the [`ReactionState`] of a session. It is created once and
//! passed around explicitly, there is no global instance. Whenever its state changes
//! it hands a full snapshot to a [`Persister`], which writes it to a [`KeyValueStore`]
//! on a best-effort basis: a failed write is logged and forgotten, the in-memory
//! state stays the source of truth.
//!
//! On top of the state sit a few pure helpers: [`derive_deck`] computes the events
//! still waiting for a decision, [`filter::matches`] implements search by text and
//! tag, and the [`gesture`] module maps a drag offset to the feedback of a swipe card.
//!
//! To see it in action you can look at `examples/basic_usage.rs` for a quick grasp on
//! how to get running, or run the `campus-swipe` binary of the workspace root.
//!
//! [`Catalog`]: crate::models::Catalog
//! [`ReactionState`]: crate::models::ReactionState
//! [`ReactionStore`]: crate::store::ReactionStore
//! [`Persister`]: crate::persist::Persister
//! [`KeyValueStore`]: crate::storage::KeyValueStore
//! [`derive_deck`]: crate::deck::derive_deck

pub mod config;
pub mod deck;
pub mod error;
pub mod filter;
pub mod gesture;
/// This module holds the data campus works with.
pub mod models;
pub mod persist;
pub mod storage;
pub mod store;
pub mod views;
