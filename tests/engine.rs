//! Deck and turn engine integration tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use schluck::{
    AdvanceError, Autosave, Card, Category, Cues, Decision, DecisionError, Game, GameOptions,
    GameStore, KeyValueStore, MemoryStore, Phase, Player, RestoreError, SetupError, SoundCue,
    SoundPlayer, StoreError, catalog,
};

const HOUR_MS: u64 = 60 * 60 * 1000;

fn two_players() -> Vec<Player> {
    vec![Player::new("p1", "Anna", "🦊"), Player::new("p2", "Ben", "🐻")]
}

fn catalog_of(counts: &[(Category, u32)]) -> Vec<Card> {
    let mut cards = Vec::new();
    for &(category, count) in counts {
        for id in 1..=count {
            cards.push(Card::new(id, category, format!("{category:?} {id}"), 2));
        }
    }
    cards
}

fn multiset(cards: &[Card]) -> HashMap<(Category, u32), usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry((card.category, card.id)).or_insert(0) += 1;
    }
    counts
}

#[test]
fn shuffle_is_a_permutation_of_the_filtered_catalog() {
    let catalog = catalog_of(&[
        (Category::Wahrheit, 8),
        (Category::Aufgabe, 6),
        (Category::Duell, 4),
        (Category::Wildcard, 3),
    ]);
    let selected = [Category::Wahrheit, Category::Duell];

    let mut game = Game::new(GameOptions::default(), 7);
    game.initialize(two_players(), &catalog, &selected).unwrap();

    let expected: Vec<Card> = catalog
        .iter()
        .filter(|c| selected.contains(&c.category))
        .cloned()
        .collect();
    assert_eq!(game.deck().len(), expected.len());
    assert_eq!(multiset(game.deck().cards()), multiset(&expected));
}

#[test]
fn shuffled_decks_separate_wildcards_outside_the_residual_case() {
    // The repair pass guarantees: if an adjacent Wildcard pair survives,
    // everything from the pair's second card to the end of the deck is
    // Wildcard (there was nothing left to swap in).
    let catalog = catalog_of(&[
        (Category::Wahrheit, 10),
        (Category::Gruppe, 6),
        (Category::Wildcard, 6),
    ]);

    for seed in 0..20 {
        let mut game = Game::new(GameOptions::default(), seed);
        game.initialize(two_players(), &catalog, &Category::ALL)
            .unwrap();

        let cards = game.deck().cards();
        for i in 0..cards.len() - 1 {
            if cards[i].category.is_wildcard() && cards[i + 1].category.is_wildcard() {
                assert!(
                    cards[i + 1..].iter().all(|c| c.category.is_wildcard()),
                    "non-residual wildcard pair at {i} with seed {seed}"
                );
            }
        }
    }
}

#[test]
fn setup_preconditions_are_enforced() {
    let catalog = catalog_of(&[(Category::Wahrheit, 4)]);
    let mut game = Game::new(GameOptions::default(), 1);

    assert_eq!(
        game.initialize(
            vec![Player::new("p1", "Solo", "🦊")],
            &catalog,
            &[Category::Wahrheit]
        )
        .unwrap_err(),
        SetupError::NotEnoughPlayers
    );
    assert_eq!(
        game.initialize(two_players(), &catalog, &[]).unwrap_err(),
        SetupError::NoCategoriesSelected
    );
    assert_eq!(
        game.initialize(two_players(), &catalog, &[Category::Duell])
            .unwrap_err(),
        SetupError::EmptyDeck
    );

    // Failed setup leaves the engine unusable for deck operations.
    assert_eq!(game.phase(), Phase::NotStarted);
    assert!(game.begin_turn().is_err());
}

#[test]
fn fresh_game_reject_applies_the_drink_penalty() {
    let catalog = catalog_of(&[(Category::Wahrheit, 5)]);
    let mut game = Game::new(GameOptions::default(), 3);
    game.initialize(two_players(), &catalog, &[Category::Wahrheit])
        .unwrap();

    game.begin_turn().unwrap();
    assert_eq!(game.current_index(), 0);
    assert_eq!(game.phase(), Phase::CardShown);

    game.apply_decision(Decision::Reject).unwrap();
    assert_eq!(game.players()[0].total_drinks, 2);
    assert_eq!(game.players()[1].total_drinks, 0);
    assert_eq!(game.phase(), Phase::AwaitingNextPlayer);
}

#[test]
fn accept_never_changes_any_tally() {
    let catalog = catalog_of(&[(Category::Aufgabe, 5)]);
    let mut game = Game::new(GameOptions::default(), 3);
    game.initialize(two_players(), &catalog, &[Category::Aufgabe])
        .unwrap();

    game.begin_turn().unwrap();
    game.apply_decision(Decision::Accept).unwrap();
    assert!(game.players().iter().all(|p| p.total_drinks == 0));
    assert!(game.card_accepted());
}

#[test]
fn turn_rotation_returns_to_the_first_player() {
    let catalog = catalog_of(&[(Category::Gruppe, 10)]);
    let players = vec![
        Player::new("p1", "Anna", "🦊"),
        Player::new("p2", "Ben", "🐻"),
        Player::new("p3", "Cleo", "🦉"),
    ];
    let mut game = Game::new(GameOptions::default(), 9);
    game.initialize(players, &catalog, &[Category::Gruppe])
        .unwrap();

    game.begin_turn().unwrap();
    assert_eq!(game.current_player_index(), 0);

    for _ in 0..3 {
        game.apply_decision(Decision::Accept).unwrap();
        game.acknowledge_next_player().unwrap();
    }
    assert_eq!(game.current_player_index(), 0);
}

#[test]
fn full_round_trip_reaches_finished_exactly_at_deck_exhaustion() {
    let catalog = catalog_of(&[(Category::Duell, 3)]);
    let mut game = Game::new(GameOptions::default(), 5);
    game.initialize(two_players(), &catalog, &[Category::Duell])
        .unwrap();

    game.begin_turn().unwrap();
    game.apply_decision(Decision::Accept).unwrap();
    assert!(!game.is_finished());
    game.acknowledge_next_player().unwrap();

    game.apply_decision(Decision::Reject).unwrap();
    assert!(!game.is_finished());
    game.acknowledge_next_player().unwrap();

    assert_eq!(game.cards_remaining(), 0);
    game.apply_decision(Decision::Accept).unwrap();
    assert_eq!(game.phase(), Phase::Finished);

    let payload = game.exit_payload(1000);
    assert!(payload.game_finished);
    assert_eq!(payload.state.current_index, 2);

    // Terminal: no further draws or handovers.
    assert_eq!(
        game.acknowledge_next_player().unwrap_err(),
        AdvanceError::InvalidState
    );
    assert_eq!(
        game.apply_decision(Decision::Accept).unwrap_err(),
        DecisionError::InvalidState
    );
}

#[test]
fn decisions_outside_card_shown_are_rejected() {
    let catalog = catalog_of(&[(Category::Wahrheit, 3)]);
    let mut game = Game::new(GameOptions::default(), 2);
    game.initialize(two_players(), &catalog, &[Category::Wahrheit])
        .unwrap();

    assert_eq!(
        game.apply_decision(Decision::Accept).unwrap_err(),
        DecisionError::InvalidState
    );

    game.begin_turn().unwrap();
    assert!(game.begin_turn().is_err());
    assert_eq!(
        game.acknowledge_next_player().unwrap_err(),
        AdvanceError::InvalidState
    );
}

#[test]
fn snapshots_are_independent_of_later_mutation() {
    let catalog = catalog_of(&[(Category::Wahrheit, 5)]);
    let mut game = Game::new(GameOptions::default(), 4);
    game.initialize(two_players(), &catalog, &[Category::Wahrheit])
        .unwrap();
    game.begin_turn().unwrap();

    let snapshot = game.snapshot(500);
    game.apply_decision(Decision::Reject).unwrap();

    assert_eq!(snapshot.players[0].total_drinks, 0);
    assert_eq!(snapshot.current_index, 0);
    assert_eq!(snapshot.timestamp, 500);
}

#[test]
fn restore_discards_stale_sessions_and_keeps_fresh_ones() {
    let catalog = catalog_of(&[(Category::Wahrheit, 5)]);
    let mut game = Game::new(GameOptions::default(), 4);
    game.initialize(two_players(), &catalog, &[Category::Wahrheit])
        .unwrap();
    game.begin_turn().unwrap();
    game.apply_decision(Decision::Reject).unwrap();
    game.acknowledge_next_player().unwrap();

    let now = 100 * HOUR_MS;
    let stale = game.snapshot(now - 25 * HOUR_MS);
    let fresh = game.snapshot(now - HOUR_MS);

    let mut restored = Game::new(GameOptions::default(), 0);
    assert_eq!(
        restored.restore(stale, now).unwrap_err(),
        RestoreError::StaleSession
    );
    assert_eq!(restored.phase(), Phase::NotStarted);

    restored.restore(fresh, now).unwrap();
    assert_eq!(restored.phase(), Phase::CardShown);
    assert_eq!(restored.current_index(), 1);
    assert_eq!(restored.current_player_index(), 1);
    assert_eq!(restored.players()[0].total_drinks, 2);
    assert_eq!(restored.deck().cards(), game.deck().cards());
}

#[test]
fn restore_rejects_sessions_violating_invariants() {
    let catalog = catalog_of(&[(Category::Wahrheit, 3)]);
    let mut game = Game::new(GameOptions::default(), 4);
    game.initialize(two_players(), &catalog, &[Category::Wahrheit])
        .unwrap();
    game.begin_turn().unwrap();

    let mut bad_player_index = game.snapshot(0);
    bad_player_index.current_player_index = 5;
    let mut bad_card_index = game.snapshot(0);
    bad_card_index.current_index = 3;
    let mut roster_too_small = game.snapshot(0);
    roster_too_small.players.truncate(1);

    let mut restored = Game::new(GameOptions::default(), 0);
    for blob in [bad_player_index, bad_card_index, roster_too_small] {
        assert_eq!(
            restored.restore(blob, 0).unwrap_err(),
            RestoreError::InvalidSession
        );
    }
}

#[test]
fn saved_game_blob_uses_the_legacy_field_names() {
    let catalog = catalog_of(&[(Category::Wahrheit, 3)]);
    let mut game = Game::new(GameOptions::default(), 4);
    game.initialize(two_players(), &catalog, &[Category::Wahrheit])
        .unwrap();
    game.begin_turn().unwrap();

    let value = serde_json::to_value(game.snapshot(42)).unwrap();
    for key in [
        "players",
        "deck",
        "currentIndex",
        "currentPlayerIndex",
        "cardAccepted",
        "timestamp",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert!(value["players"][0].get("totalDrinks").is_some());
    assert_eq!(value["deck"][0]["category"], "Wahrheit");
}

#[test]
fn clear_returns_to_not_started() {
    let catalog = catalog_of(&[(Category::Wahrheit, 3)]);
    let mut game = Game::new(GameOptions::default(), 4);
    game.initialize(two_players(), &catalog, &[Category::Wahrheit])
        .unwrap();
    game.begin_turn().unwrap();

    game.clear();
    assert_eq!(game.phase(), Phase::NotStarted);
    assert!(game.players().is_empty());
    assert_eq!(game.current_index(), -1);
    assert!(!game.in_progress());
}

#[test]
fn store_round_trips_and_applies_the_staleness_window() {
    let catalog = catalog_of(&[(Category::Wahrheit, 4)]);
    let mut game = Game::new(GameOptions::default(), 4);
    game.initialize(two_players(), &catalog, &[Category::Wahrheit])
        .unwrap();
    game.begin_turn().unwrap();

    let stale_after = GameOptions::default().stale_after_ms;
    let mut store = GameStore::new(MemoryStore::new());

    let saved_at = 10 * HOUR_MS;
    store.save_game(&game.snapshot(saved_at));

    let loaded = store.load_game(saved_at + HOUR_MS, stale_after).unwrap();
    assert_eq!(loaded.current_index, 0);
    assert_eq!(loaded.timestamp, saved_at);

    // Past the window the blob is deleted, not just ignored.
    assert!(store.load_game(saved_at + 25 * HOUR_MS, stale_after).is_none());
    let backend = store.into_backend();
    assert!(backend.get(schluck::store::GAME_STATE_KEY).unwrap().is_none());
}

/// Backend that can be switched into a failing mode.
#[derive(Debug, Default)]
struct FlakyStore {
    inner: MemoryStore,
    failing: bool,
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.failing {
            return Err(StoreError::Backend("disk on fire".into()));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.failing {
            return Err(StoreError::Backend("disk on fire".into()));
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.failing {
            return Err(StoreError::Backend("disk on fire".into()));
        }
        self.inner.remove(key)
    }
}

#[test]
fn storage_failures_degrade_to_memory_and_retry() {
    let catalog = catalog_of(&[(Category::Wahrheit, 4)]);
    let mut game = Game::new(GameOptions::default(), 4);
    game.initialize(two_players(), &catalog, &[Category::Wahrheit])
        .unwrap();
    game.begin_turn().unwrap();

    let stale_after = GameOptions::default().stale_after_ms;
    let mut store = GameStore::new(FlakyStore {
        failing: true,
        ..FlakyStore::default()
    });

    // The write fails silently; the session stays readable from memory.
    store.save_game(&game.snapshot(1000));
    let loaded = store.load_game(2000, stale_after).unwrap();
    assert_eq!(loaded.timestamp, 1000);

    // Next save finds the backend healthy again and lands on disk.
    game.apply_decision(Decision::Accept).unwrap();
    // (re-wrap to flip the failure flag)
    let mut backend = store.into_backend();
    backend.failing = false;
    let mut store = GameStore::new(backend);
    store.save_game(&game.snapshot(3000));

    let backend = store.into_backend();
    assert!(backend.get(schluck::store::GAME_STATE_KEY).unwrap().is_some());
}

#[test]
fn store_remembers_roster_and_categories() {
    let mut store = GameStore::new(MemoryStore::new());
    let players = two_players();
    let categories = vec![Category::Wahrheit, Category::Wildcard];

    store.save_last_players(&players);
    store.save_last_categories(&categories);

    assert_eq!(store.load_last_players().unwrap(), players);
    assert_eq!(store.load_last_categories().unwrap(), categories);
}

#[test]
fn autosave_honors_interval_stop_and_flush() {
    let catalog = catalog_of(&[(Category::Wahrheit, 5)]);
    let mut game = Game::new(GameOptions::default(), 4);
    game.initialize(two_players(), &catalog, &[Category::Wahrheit])
        .unwrap();

    let stale_after = GameOptions::default().stale_after_ms;
    let mut store = GameStore::new(MemoryStore::new());
    let mut autosave = Autosave::new(10_000);

    // Nothing to save before the first draw.
    assert!(!autosave.tick(&game, &mut store, 0));

    game.begin_turn().unwrap();
    assert!(autosave.tick(&game, &mut store, 1000));
    assert!(!autosave.tick(&game, &mut store, 5000));
    assert!(autosave.tick(&game, &mut store, 11_000));

    autosave.stop();
    assert!(!autosave.tick(&game, &mut store, 60_000));

    // Flush on exit writes regardless of interval and running state.
    game.apply_decision(Decision::Reject).unwrap();
    autosave.flush(&game, &mut store, 60_500);
    let loaded = store.load_game(60_600, stale_after).unwrap();
    assert_eq!(loaded.timestamp, 60_500);
    assert_eq!(loaded.players[0].total_drinks, 2);
}

#[test]
fn catalog_parses_and_counts_categories() {
    let json = r#"[
        { "id": 1, "category": "Wahrheit", "text": "a", "drinks": 2 },
        { "id": 2, "category": "Wahrheit", "text": "b", "drinks": 1 },
        { "id": 1, "category": "Wildcard", "text": "c", "drinks": 0 }
    ]"#;
    let cards = catalog::parse(json).unwrap();
    assert_eq!(cards.len(), 3);

    let counts = catalog::category_counts(&cards);
    assert_eq!(counts[0], (Category::Wahrheit, 2));
    assert_eq!(counts[4], (Category::Wildcard, 1));

    assert!(catalog::parse("[{\"id\": 1}]").is_err());
    assert!(catalog::parse("not json").is_err());
}

#[derive(Clone, Default)]
struct RecordingSounds {
    cues: Rc<RefCell<Vec<SoundCue>>>,
}

impl SoundPlayer for RecordingSounds {
    fn play(&self, cue: SoundCue) {
        self.cues.borrow_mut().push(cue);
    }
}

#[test]
fn transitions_emit_the_expected_sound_cues() {
    let sounds = RecordingSounds::default();
    let cues = Rc::clone(&sounds.cues);

    let catalog = catalog_of(&[(Category::Wahrheit, 5)]);
    let mut game = Game::new(GameOptions::default(), 4)
        .with_cues(Cues::new(Box::new(schluck::NoopHaptics), Box::new(sounds)));
    game.initialize(two_players(), &catalog, &[Category::Wahrheit])
        .unwrap();

    game.begin_turn().unwrap();
    game.apply_decision(Decision::Accept).unwrap();
    game.acknowledge_next_player().unwrap();
    game.apply_decision(Decision::Reject).unwrap();

    assert_eq!(
        *cues.borrow(),
        vec![
            SoundCue::CardDraw,
            SoundCue::SwipeRight,
            SoundCue::PlayerChange,
            SoundCue::CardDraw,
            SoundCue::SwipeLeft,
            SoundCue::Drink,
        ]
    );
}

#[test]
fn disabled_sound_channel_drops_requests() {
    let sounds = RecordingSounds::default();
    let cues = Rc::clone(&sounds.cues);

    let catalog = catalog_of(&[(Category::Wahrheit, 5)]);
    let options = GameOptions::default().with_sound_enabled(false);
    let mut game = Game::new(options, 4)
        .with_cues(Cues::new(Box::new(schluck::NoopHaptics), Box::new(sounds)));
    game.initialize(two_players(), &catalog, &[Category::Wahrheit])
        .unwrap();

    game.begin_turn().unwrap();
    assert!(cues.borrow().is_empty());

    game.set_sound_enabled(true);
    game.apply_decision(Decision::Accept).unwrap();
    assert!(!cues.borrow().is_empty());
}
