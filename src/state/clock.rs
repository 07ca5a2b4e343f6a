use crate::model::Player;

/// Countdown clocks for both players. Time is charged to whoever is to move,
/// measured from the previous tick (or turn start) using wall-clock
/// milliseconds supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnClock {
    initial_ms: f64,
    remaining_ms: [f64; 2],
    last_mark_ms: f64,
}

impl TurnClock {
    pub fn new(initial_ms: f64, now_ms: f64) -> Self {
        Self {
            initial_ms,
            remaining_ms: [initial_ms; 2],
            last_mark_ms: now_ms,
        }
    }

    pub fn remaining(&self, player: Player) -> f64 {
        self.remaining_ms[player.index()]
    }

    /// Restart the turn stopwatch; time elapsed since the last mark is not
    /// charged to anyone.
    pub fn start_turn(&mut self, now_ms: f64) {
        self.last_mark_ms = now_ms;
    }

    /// Charge the time since the last mark to `player` and return what they
    /// have left. A clock going backwards charges nothing.
    pub fn charge(&mut self, player: Player, now_ms: f64) -> f64 {
        let elapsed = (now_ms - self.last_mark_ms).max(0.0);
        self.last_mark_ms = now_ms;
        let slot = &mut self.remaining_ms[player.index()];
        *slot -= elapsed;
        *slot
    }

    pub fn is_expired(&self, player: Player) -> bool {
        self.remaining(player) <= 0.0
    }

    pub fn reset(&mut self, now_ms: f64) {
        self.remaining_ms = [self.initial_ms; 2];
        self.last_mark_ms = now_ms;
    }
}
