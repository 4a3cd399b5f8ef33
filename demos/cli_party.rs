//! CLI party game example.
//!
//! Drives the engine with button-style input instead of swipes: `a`
//! accepts the card, `d` drinks (rejects), `q` quits.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use schluck::{
    Autosave, Category, Decision, Game, GameOptions, GameStore, MemoryStore, Phase, Player,
    catalog,
};

const DEMO_CATALOG: &str = r#"[
    { "id": 1, "category": "Wahrheit", "text": "Tell the group your most embarrassing moment.", "drinks": 2 },
    { "id": 2, "category": "Wahrheit", "text": "Who here would you trust with your phone?", "drinks": 2 },
    { "id": 1, "category": "Aufgabe", "text": "Speak in rhymes until your next turn.", "drinks": 3 },
    { "id": 2, "category": "Aufgabe", "text": "Swap seats with the person to your left.", "drinks": 2 },
    { "id": 1, "category": "Gruppe", "text": "Everyone points at the best cook. Loser drinks.", "drinks": 1 },
    { "id": 1, "category": "Duell", "text": "Rock-paper-scissors against the player opposite you.", "drinks": 3 },
    { "id": 1, "category": "Wildcard", "text": "Make a rule that lasts the whole game.", "drinks": 0 },
    { "id": 2, "category": "Wildcard", "text": "Hand out four drinks however you like.", "drinks": 0 }
]"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Party game CLI example (type 'q' to quit)");

    let cards = match catalog::parse(DEMO_CATALOG) {
        Ok(cards) => cards,
        Err(err) => {
            eprintln!("Catalog error: {err}");
            return;
        }
    };

    let mut players = Vec::new();
    while players.len() < 2 {
        let name = prompt_line(&format!("Player {} name: ", players.len() + 1));
        if name.is_empty() {
            continue;
        }
        let id = format!("p{}", players.len() + 1);
        players.push(Player::new(id, name, "🍺"));
    }

    let options = GameOptions::default();
    let mut game = Game::new(options, now_ms());
    if let Err(err) = game.initialize(players, &cards, &Category::ALL) {
        eprintln!("Setup error: {err}");
        return;
    }

    let mut store = GameStore::new(MemoryStore::new());
    let mut autosave = Autosave::new(options.autosave_interval_ms);

    if let Err(err) = game.begin_turn() {
        eprintln!("Draw error: {err}");
        return;
    }

    loop {
        autosave.tick(&game, &mut store, now_ms());

        match game.phase() {
            Phase::CardShown => {
                let Some(card) = game.current_card() else {
                    break;
                };
                let player = game.current_player().map_or("?", |p| p.name.as_str());

                println!();
                println!("--- {player}'s turn ({} cards left) ---", game.cards_remaining());
                println!("[{:?}] {}", card.category, card.text);
                println!("Accept (a) or drink {} (d)?", card.drinks);

                let result = match prompt_line("> ").as_str() {
                    "a" | "accept" => game.apply_decision(Decision::Accept),
                    "d" | "drink" => game.apply_decision(Decision::Reject),
                    "q" | "quit" => break,
                    _ => {
                        println!("Unknown action.");
                        continue;
                    }
                };

                if let Err(err) = result {
                    println!("Action error: {err:?}");
                }
            }
            Phase::AwaitingNextPlayer => {
                let next = (game.current_player_index() + 1) % game.players().len();
                let name = &game.players()[next].name;
                prompt_line(&format!("Pass the phone to {name}, then press enter... "));
                if let Err(err) = game.acknowledge_next_player() {
                    println!("Advance error: {err:?}");
                }
            }
            Phase::Finished => {
                println!();
                println!("=== Deck exhausted! Final tallies ===");
                break;
            }
            Phase::NotStarted => break,
        }
    }

    autosave.stop();
    autosave.flush(&game, &mut store, now_ms());

    let mut standings: Vec<_> = game.players().to_vec();
    standings.sort_by(|a, b| b.total_drinks.cmp(&a.total_drinks));
    for player in &standings {
        println!("{}: {} drinks", player.name, player.total_drinks);
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_owned()
}
