use std::sync::Arc;

use campus::{
    deck::{derive_deck, DeckQueue, Swipe},
    filter,
    gesture::{like_opacity, rotate, swipe_for_offset},
    models::{Catalog, EventBuilder, EventId, Friend, FriendId},
    persist::Persister,
    storage::FileStore,
    store::ReactionStore,
    views,
};

#[tokio::main]
async fn main() {
    // Events usually come from a RON file through `Catalog::load`, the builder works too.
    let catalog = Catalog::new(vec![
        EventBuilder::new(EventId(1), "AI x Campus Kickoff")
            .date("2025-10-22 18:00")
            .location("Audimax A")
            .tags(["Tech", "Networking", "Coding"])
            .build(),
        EventBuilder::new(EventId(2), "Sustainability Hack Night")
            .date("2025-10-23 19:30")
            .location("Makerspace")
            .tags(["Hackathon", "Green", "Gardening"])
            .build(),
        EventBuilder::new(EventId(3), "Indie Film Night")
            .date("2025-10-24 20:00")
            .location("Aula")
            .tags(["Kultur", "Film"])
            .build(),
    ])
    .unwrap();

    // The store restores whatever an earlier run left behind in `db/`.
    let storage = Arc::new(FileStore::new("db/").unwrap());
    let mut store = ReactionStore::open(Persister::new(storage, "campus-swipe-state-v1")).await;

    let mut queue = DeckQueue::new(&derive_deck(&catalog, store.state()));

    // A drag of 150px to the right, released: that's a like.
    let dx = 150.0;
    println!("stamp opacity {:.2}, tilt {:.1}°", like_opacity(dx), rotate(dx));
    if let Some(swipe) = swipe_for_offset(dx, 0.0) {
        queue.swipe(&mut store, &catalog, swipe);
    }
    // Not sure about the next one yet.
    queue.swipe(&mut store, &catalog, Swipe::Maybe);

    store.join(EventId(3));
    store.toggle_theme();

    for event in filter::search(&catalog, "night", &["film"]) {
        println!("search hit: {}", event.title);
    }

    let lea = Friend::new(FriendId::from("u1"), "Lea").with_likes([EventId(1), EventId(7)]);
    for event in views::friend_likes(&catalog, &lea) {
        println!("{} likes {}", lea.name, event.title);
    }

    println!("{:?}, theme {}", store.stats(), store.theme());

    // Writes are fire-and-forget, wait for them before the runtime goes away.
    store.settle().await;
}
