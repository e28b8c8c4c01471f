use std::path::PathBuf;

use campus::{
    deck::{derive_deck, DeckQueue, Swipe},
    filter::{search, TagSelection},
    gesture::swipe_for_offset,
    models::{Catalog, EventId, Friend},
    store::ReactionStore,
    views,
};

fn data(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../data")
        .join(file)
}

fn ids<'a, I>(events: I) -> Vec<u64>
where
    I: IntoIterator<Item = &'a campus::models::Event>,
{
    events.into_iter().map(|e| e.id.0).collect()
}

#[test]
fn bundled_catalog_loads() {
    let catalog = Catalog::load(data("catalog.ron")).unwrap();
    assert_eq!(catalog.len(), 7);
    assert!(catalog.tags().contains(&"Dance"));

    let friends = Friend::load_all(data("friends.ron")).unwrap();
    assert_eq!(friends.len(), 3);
    // Ben likes an event this catalog does not have.
    assert_eq!(ids(views::friend_likes(&catalog, &friends[1])), vec![2]);
}

#[test]
fn missing_catalog_is_an_error() {
    assert!(Catalog::load(data("nope.ron")).is_err());
}

#[test]
fn swiping_through_the_deck() {
    let catalog = Catalog::load(data("catalog.ron")).unwrap();
    let mut store = ReactionStore::in_memory();
    let mut queue = DeckQueue::new(&derive_deck(&catalog, store.state()));

    let releases = [(200.0, 0.0), (-150.0, 10.0), (0.0, -140.0), (30.0, 20.0)];
    for (dx, dy) in releases {
        if let Some(swipe) = swipe_for_offset(dx, dy) {
            queue.swipe(&mut store, &catalog, swipe);
        }
    }

    assert!(store.is_liked(EventId(1)));
    assert!(store.is_passed(EventId(2)));
    assert_eq!(queue.top(), Some(EventId(4)));
    assert_eq!(queue.iter().last(), Some(EventId(3)));

    let deck = derive_deck(&catalog, store.state());
    assert_eq!(ids(deck.iter().copied()), vec![3, 4, 5, 6, 7]);
    assert_eq!(queue.len(), deck.len());

    while queue.swipe(&mut store, &catalog, Swipe::Pass).is_some() {}
    assert!(derive_deck(&catalog, store.state()).is_empty());
    assert_eq!(store.stats().passed, 6);
}

#[test]
fn search_screen_flow() {
    let catalog = Catalog::load(data("catalog.ron")).unwrap();
    let mut tags = TagSelection::new();

    assert_eq!(search(&catalog, "", tags.as_slice()).len(), catalog.len());

    tags.toggle("Fitness");
    assert_eq!(ids(search(&catalog, "", tags.as_slice())), vec![4, 6]);
    assert_eq!(ids(search(&catalog, "halle 1", tags.as_slice())), vec![6]);

    tags.toggle("Coding");
    assert_eq!(ids(search(&catalog, "", tags.as_slice())), vec![1, 4, 5, 6]);

    tags.clear();
    assert_eq!(ids(search(&catalog, "NIGHT", tags.as_slice())), vec![2, 3]);

    let mut store = ReactionStore::in_memory();
    for event in search(&catalog, "coding", tags.as_slice()) {
        store.toggle_join(event.id);
    }
    assert_eq!(ids(views::joined_events(&catalog, store.state())), vec![1, 5]);
    assert_eq!(ids(views::liked_events(&catalog, store.state())), vec![1, 5]);
}
