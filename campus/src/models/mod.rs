mod catalog;
pub mod event;
mod friend;
mod id;
mod reaction;

pub use self::catalog::Catalog;
pub use self::event::{Event, EventBuilder};
pub use self::friend::Friend;
pub use self::id::{EventId, FriendId};
pub use self::reaction::{toggle_id, IdList, ReactionState, Stats, Theme};
