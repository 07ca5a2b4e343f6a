// Player preferences remembered between visits (localStorage).

use serde::{Deserialize, Serialize};

use crate::config::SETTINGS_STORAGE_KEY;
use crate::model::GameMode;
use crate::theme::ThemeId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeId,
    pub mode: GameMode,
}

impl Settings {
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn load() -> Self {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(Some(raw)) = store.get_item(SETTINGS_STORAGE_KEY) {
                    return Self::from_json(&raw).unwrap_or_default();
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(win) = web_sys::window() {
            if let Ok(Some(store)) = win.local_storage() {
                if let Ok(s) = serde_json::to_string(self) {
                    let _ = store.set_item(SETTINGS_STORAGE_KEY, &s);
                }
            }
        }
    }
}
