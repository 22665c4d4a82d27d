use std::time::Duration;

use crate::config::{
    BASE_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, SPEED_STEP_MS, SPEED_STEP_POINTS,
};

/// Score, high score, and the tick interval derived from them.
///
/// The high score outlives individual runs: `reset_for_new_run` clears the
/// score and interval but leaves it untouched, so it is process-wide state
/// for as long as the session object lives.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Scoreboard {
    score: u32,
    high_score: u32,
    tick_interval_ms: u64,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Scoreboard {
    /// Creates a scoreboard for a fresh process: everything at its base value.
    #[must_use]
    pub fn new() -> Self {
        Self {
            score: 0,
            high_score: 0,
            tick_interval_ms: BASE_TICK_INTERVAL_MS,
        }
    }

    /// Returns the current run's score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the best score seen since process start.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Returns the current tick interval.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Returns how far the interval has dropped below the base, in
    /// milliseconds. This is the "speed" shown on the HUD.
    #[must_use]
    pub fn speed_delta_ms(&self) -> u64 {
        BASE_TICK_INTERVAL_MS - self.tick_interval_ms
    }

    /// Records one consumed food: score goes up, the high score follows it,
    /// and every fifth point shortens the tick interval by one step until
    /// the floor is reached.
    pub fn record_consumption(&mut self) {
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
        }

        if self.score % SPEED_STEP_POINTS == 0 && self.tick_interval_ms > MIN_TICK_INTERVAL_MS {
            self.tick_interval_ms = self
                .tick_interval_ms
                .saturating_sub(SPEED_STEP_MS)
                .max(MIN_TICK_INTERVAL_MS);
        }
    }

    /// Folds the final score of a run into the high score.
    pub fn record_game_over(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// Resets score and interval for a restarted run, keeping the high score.
    pub fn reset_for_new_run(&mut self) {
        self.score = 0;
        self.tick_interval_ms = BASE_TICK_INTERVAL_MS;
    }
}
