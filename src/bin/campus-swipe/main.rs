use std::{process::ExitCode, sync::Arc};

use campus::{
    config::Config,
    deck::{derive_deck, DeckQueue, Swipe},
    filter::{search, TagSelection},
    models::{Catalog, Event, EventId, Friend},
    persist::Persister,
    storage::FileStore,
    store::ReactionStore,
    views,
};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

const HELP: &str = "\
commands:
  deck                      show the next cards
  like | pass | maybe       swipe the top card
  join <id> | leave <id>    commit to an event, or back out
  save <id> | unsave <id> | defer <id>
  search [text] [#tag ...]  search the catalog
  friends                   what your friends like
  liked | joined | saved    your lists
  stats | theme
  reset likes|joined|all
  quit";

struct Session {
    catalog: Catalog,
    friends: Vec<Friend>,
    store: ReactionStore,
    queue: DeckQueue,
}

enum Flow {
    Continue,
    Quit,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine, the defaults apply.
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    let catalog = match Catalog::load(&config.catalog_path) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!(error = %err, "cannot start without a catalog");
            return ExitCode::FAILURE;
        }
    };
    let friends = Friend::load_all(&config.friends_path).unwrap_or_else(|err| {
        warn!(error = %err, "no friends list, continuing without one");
        Vec::new()
    });

    let store = match FileStore::new(&config.data_dir) {
        Ok(storage) => {
            let dir = storage.base_path().display().to_string();
            let persister = Persister::new(Arc::new(storage), config.state_key.as_str());
            info!(%dir, key = persister.key(), "restoring reaction state");
            ReactionStore::open(persister).await
        }
        Err(err) => {
            warn!(error = %err, dir = %config.data_dir.display(), "state will not be saved");
            ReactionStore::in_memory()
        }
    };
    info!(events = catalog.len(), friends = friends.len(), stats = ?store.stats(), "session ready");

    let queue = DeckQueue::new(&derive_deck(&catalog, store.state()));
    let mut session = Session {
        catalog,
        friends,
        store,
        queue,
    };

    println!("{HELP}");
    session.show_deck();

    let mut lines = BufReader::new(stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                error!(error = %err, "failed to read from stdin");
                break;
            }
        };
        if let Flow::Quit = session.handle(line.trim()) {
            break;
        }
    }

    session.store.settle().await;
    ExitCode::SUCCESS
}

impl Session {
    fn handle(&mut self, line: &str) -> Flow {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Flow::Continue;
        };
        let arg = words.clone().next();

        match command {
            "quit" | "exit" => return Flow::Quit,
            "help" => println!("{HELP}"),
            "deck" => self.show_deck(),
            "like" => self.swipe(Swipe::Like),
            "pass" => self.swipe(Swipe::Pass),
            "maybe" => self.swipe(Swipe::Maybe),
            "join" | "leave" | "save" | "unsave" | "defer" => match self.event_arg(arg) {
                Some(id) => {
                    let changed = match command {
                        "join" => self.store.join(id),
                        "leave" => self.store.leave(id),
                        "save" => self.store.save(id),
                        "unsave" => self.store.unsave(id),
                        _ => self.store.defer_save(id),
                    };
                    println!("{command} {id}: {}", if changed { "done" } else { "nothing to do" });
                    self.realign();
                }
                None => println!("usage: {command} <event id>"),
            },
            "search" => self.search(words),
            "friends" => {
                for friend in &self.friends {
                    let titles: Vec<&str> = views::friend_likes(&self.catalog, friend)
                        .iter()
                        .map(|e| e.title.as_str())
                        .collect();
                    println!("{} {} likes: {}", friend.avatar, friend.name, titles.join(", "));
                }
            }
            "liked" => print_events(&views::liked_events(&self.catalog, self.store.state())),
            "joined" => print_events(&views::joined_events(&self.catalog, self.store.state())),
            "saved" => print_events(&views::saved_events(&self.catalog, self.store.state())),
            "stats" => {
                let stats = self.store.stats();
                println!(
                    "liked {}, joined {}, passed {}, saved {}",
                    stats.liked, stats.joined, stats.passed, stats.saved
                );
            }
            "theme" => {
                self.store.toggle_theme();
                println!("theme is now {}", self.store.theme());
            }
            "reset" => {
                match arg {
                    Some("likes") => self.store.reset_likes(),
                    Some("joined") => self.store.reset_joined(),
                    Some("all") => self.store.reset_all(),
                    _ => {
                        println!("usage: reset likes|joined|all");
                        return Flow::Continue;
                    }
                };
                self.realign();
                self.show_deck();
            }
            other => println!("unknown command `{other}`, try `help`"),
        }
        Flow::Continue
    }

    fn event_arg(&self, arg: Option<&str>) -> Option<EventId> {
        let id = EventId(arg?.parse().ok()?);
        self.catalog.contains(id).then_some(id)
    }

    fn swipe(&mut self, swipe: Swipe) {
        match self.queue.swipe(&mut self.store, &self.catalog, swipe) {
            Some(id) => {
                if let Some(event) = self.catalog.get(id) {
                    println!("{swipe:?}: {}", event.title);
                }
                self.show_deck();
            }
            None => println!("the deck is empty"),
        }
    }

    fn search<'a, I>(&self, words: I)
    where
        I: Iterator<Item = &'a str>,
    {
        let mut tags = TagSelection::new();
        let mut text = Vec::new();
        for word in words {
            match word.strip_prefix('#') {
                Some(tag) => {
                    tags.toggle(tag);
                }
                None => text.push(word),
            }
        }
        print_events(&search(&self.catalog, &text.join(" "), tags.as_slice()));
    }

    fn realign(&mut self) {
        self.queue
            .realign(&derive_deck(&self.catalog, self.store.state()));
    }

    fn show_deck(&self) {
        let cards: Vec<&Event> = [self.queue.top(), self.queue.next()]
            .into_iter()
            .flatten()
            .filter_map(|id| self.catalog.get(id))
            .collect();
        if cards.is_empty() {
            println!("no cards left");
            return;
        }
        println!("{} card(s) in the deck:", self.queue.len());
        print_events(&cards);
    }
}

fn print_events(events: &[&Event]) {
    if events.is_empty() {
        println!("(none)");
    }
    for event in events {
        println!(
            "  [{}] {} | {} | {} | {}",
            event.id,
            event.title,
            event.date,
            event.location,
            event.tags.join(", ")
        );
    }
}
