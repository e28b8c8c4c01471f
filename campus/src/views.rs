//! Catalog lookups behind the profile and friends screens.
//!
//! Ids that the catalog does not know are skipped silently.

use crate::models::{Catalog, Event, EventId, Friend, ReactionState};

fn resolve<'a, I>(catalog: &'a Catalog, ids: I) -> Vec<&'a Event>
where
    I: IntoIterator<Item = EventId>,
{
    ids.into_iter().filter_map(|id| catalog.get(id)).collect()
}

pub fn liked_events<'a>(catalog: &'a Catalog, state: &ReactionState) -> Vec<&'a Event> {
    resolve(catalog, state.liked().iter())
}
pub fn joined_events<'a>(catalog: &'a Catalog, state: &ReactionState) -> Vec<&'a Event> {
    resolve(catalog, state.joined().iter())
}
/// Saved events in saved order, deferred ones last.
pub fn saved_events<'a>(catalog: &'a Catalog, state: &ReactionState) -> Vec<&'a Event> {
    resolve(catalog, state.saved().iter())
}
pub fn friend_likes<'a>(catalog: &'a Catalog, friend: &Friend) -> Vec<&'a Event> {
    resolve(catalog, friend.likes.iter().copied())
}

/// Friends who liked `id`.
pub fn liked_by<'f>(friends: &'f [Friend], id: EventId) -> Vec<&'f Friend> {
    friends.iter().filter(|f| f.likes(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{EventBuilder, FriendId},
        store::ReactionStore,
    };

    fn catalog() -> Catalog {
        Catalog::new(
            [1, 2, 3, 4]
                .into_iter()
                .map(|i| EventBuilder::new(EventId(i), "x").build())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn unknown_friend_likes_are_skipped() {
        let lea = Friend::new(FriendId::from("u1"), "Lea").with_likes([EventId(3), EventId(99), EventId(1)]);
        let liked: Vec<u64> = friend_likes(&catalog(), &lea).iter().map(|e| e.id.0).collect();
        assert_eq!(liked, vec![3, 1]);
    }

    #[test]
    fn joined_after_reset_still_resolves() {
        let catalog = catalog();
        let mut store = ReactionStore::in_memory();
        store.join(EventId(2));
        store.join(EventId(42));
        store.reset_likes();

        assert!(liked_events(&catalog, store.state()).is_empty());
        let joined: Vec<u64> = joined_events(&catalog, store.state()).iter().map(|e| e.id.0).collect();
        assert_eq!(joined, vec![2]);
    }

    #[test]
    fn saved_follow_defer_order() {
        let catalog = catalog();
        let mut store = ReactionStore::in_memory();
        store.save(EventId(1));
        store.save(EventId(4));
        store.defer_save(EventId(1));
        let saved: Vec<u64> = saved_events(&catalog, store.state()).iter().map(|e| e.id.0).collect();
        assert_eq!(saved, vec![4, 1]);
    }

    #[test]
    fn who_liked_an_event() {
        let friends = vec![
            Friend::new(FriendId::from("u1"), "Lea").with_likes([EventId(1), EventId(3)]),
            Friend::new(FriendId::from("u2"), "Ben").with_likes([EventId(2)]),
            Friend::new(FriendId::from("u3"), "Yara").with_likes([EventId(1), EventId(4)]),
        ];
        let names: Vec<&str> = liked_by(&friends, EventId(1)).iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Lea", "Yara"]);
    }
}
