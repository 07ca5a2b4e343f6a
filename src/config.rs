//! Game configuration: fixed board geometry plus tunables that can be
//! overridden from `localStorage` (key [`CONFIG_STORAGE_KEY`]).

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 15;
/// Stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;
pub const CELL_SIZE_PX: f64 = 38.0;
pub const CANVAS_SIZE_PX: f64 = CELL_SIZE_PX * BOARD_SIZE as f64;
pub const STONE_RADIUS_PX: f64 = 15.0;
pub const STAR_POINTS: [usize; 3] = [3, 7, 11];

pub const CONFIG_STORAGE_KEY: &str = "gomoku_config";
pub const SETTINGS_STORAGE_KEY: &str = "gomoku_settings";

/// What happens when a player's clock runs out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeoutPolicy {
    /// The player who ran out loses.
    #[default]
    EndGame,
    /// Against the AI, an exhausted human hands the move to the AI instead of
    /// losing. PvP games and AI timeouts still end the game.
    AiTakesOver,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Thinking time per player per game.
    pub turn_time_ms: f64,
    /// Timer refresh cadence.
    pub tick_ms: u32,
    /// Pause before asking the AI for its move.
    pub ai_delay_ms: u32,
    pub ai_endpoint: String,
    pub timeout_policy: TimeoutPolicy,
    /// Remaining time below which a timer is drawn in red.
    pub low_time_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            turn_time_ms: 4.0 * 60.0 * 1000.0,
            tick_ms: 200,
            ai_delay_ms: 500,
            ai_endpoint: "/ai_move".to_string(),
            timeout_policy: TimeoutPolicy::EndGame,
            low_time_ms: 30_000.0,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override. Missing fields keep their
    /// defaults; anything unparsable yields `None`.
    pub fn from_json(raw: &str) -> Option<Self> {
        let cfg: GameConfig = serde_json::from_str(raw).ok()?;
        if cfg.turn_time_ms <= 0.0 || cfg.tick_ms == 0 {
            return None;
        }
        Some(cfg)
    }

    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(CONFIG_STORAGE_KEY) {
                    if let Some(cfg) = Self::from_json(&raw) {
                        return cfg;
                    }
                    crate::util::cwarn(&format!("ignoring invalid {}", CONFIG_STORAGE_KEY));
                }
            }
        }
        Self::default()
    }
}
