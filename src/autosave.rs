//! Periodic crash-safe saving.
//!
//! The host's event loop drives [`Autosave::tick`] (a timer or frame
//! callback is enough); the policy decides when a snapshot is actually
//! written. Ticks and engine mutations interleave on the same loop, so a
//! save always observes a consistent session.

use crate::game::Game;
use crate::store::{GameStore, KeyValueStore};

/// Fixed-interval autosave policy.
#[derive(Debug, Clone, Copy)]
pub struct Autosave {
    interval_ms: u64,
    last_saved_ms: Option<u64>,
    running: bool,
}

impl Autosave {
    /// Creates a running policy with the given interval.
    ///
    /// # Example
    ///
    /// ```
    /// use schluck::Autosave;
    ///
    /// let autosave = Autosave::new(10_000);
    /// assert!(autosave.due(0));
    /// ```
    #[must_use]
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_saved_ms: None,
            running: true,
        }
    }

    /// Returns whether a save is due at `now_ms`.
    ///
    /// The first tick after construction or [`Autosave::resume`] is
    /// always due.
    #[must_use]
    pub const fn due(&self, now_ms: u64) -> bool {
        if !self.running {
            return false;
        }
        match self.last_saved_ms {
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
            None => true,
        }
    }

    /// Saves a snapshot if the policy is running, a save is due, and a
    /// session is in progress. Returns `true` if a save was written.
    pub fn tick<S: KeyValueStore>(
        &mut self,
        game: &Game,
        store: &mut GameStore<S>,
        now_ms: u64,
    ) -> bool {
        if !self.due(now_ms) || !game.in_progress() {
            return false;
        }

        store.save_game(&game.snapshot(now_ms));
        self.last_saved_ms = Some(now_ms);
        true
    }

    /// Saves a snapshot unconditionally (exit, teardown, navigation).
    ///
    /// Ignores the interval and the running flag; the final state of a
    /// session must not be lost to scheduling.
    pub fn flush<S: KeyValueStore>(&mut self, game: &Game, store: &mut GameStore<S>, now_ms: u64) {
        store.save_game(&game.snapshot(now_ms));
        self.last_saved_ms = Some(now_ms);
    }

    /// Stops the policy; subsequent ticks never write.
    ///
    /// Called when the session ends or the screen is torn down, so a
    /// stale timer cannot act on a destroyed session.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Resumes the policy; the next tick is immediately due.
    pub const fn resume(&mut self) {
        self.running = true;
        self.last_saved_ms = None;
    }

    /// Returns whether the policy is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }
}
