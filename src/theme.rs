//! Board themes. A theme only changes how the board is painted; game rules
//! never look at it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoneStyle {
    pub fill: &'static str,
    pub stroke: Option<&'static str>,
    /// Inner and outer colour of the radial gradient used by shaded themes.
    pub gradient: (&'static str, &'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub board: &'static str,
    pub line: &'static str,
    pub p1: StoneStyle,
    pub p2: StoneStyle,
    /// 3D stones: radial gradient plus drop shadow instead of a flat fill.
    pub shaded: bool,
}

impl Theme {
    pub fn stone(&self, player: Player) -> &StoneStyle {
        match player {
            Player::One => &self.p1,
            Player::Two => &self.p2,
        }
    }
}

pub const LAST_MOVE_MARKER: &str = "#e74c3c";
pub const STONE_SHADOW: &str = "rgba(0,0,0,0.4)";

const WOOD: Theme = Theme {
    board: "#eecfa1",
    line: "#5e4026",
    p1: StoneStyle { fill: "#000", stroke: None, gradient: ("#555", "#000") },
    p2: StoneStyle { fill: "#fff", stroke: Some("#ddd"), gradient: ("#fff", "#ddd") },
    shaded: true,
};

const PAPER: Theme = Theme {
    board: "#f8f9fa",
    line: "#2c3e50",
    p1: StoneStyle { fill: "#2c3e50", stroke: None, gradient: ("#2c3e50", "#2c3e50") },
    p2: StoneStyle { fill: "#ffffff", stroke: Some("#2c3e50"), gradient: ("#ffffff", "#ffffff") },
    shaded: false,
};

const DARK: Theme = Theme {
    board: "#2d3436",
    line: "#636e72",
    p1: StoneStyle { fill: "#00cec9", stroke: None, gradient: ("#00cec9", "#00cec9") },
    p2: StoneStyle { fill: "#ff7675", stroke: None, gradient: ("#ff7675", "#ff7675") },
    shaded: false,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Wood,
    Paper,
    Dark,
}

impl ThemeId {
    pub const ALL: [ThemeId; 3] = [ThemeId::Wood, ThemeId::Paper, ThemeId::Dark];

    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeId::Wood => &WOOD,
            ThemeId::Paper => &PAPER,
            ThemeId::Dark => &DARK,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Wood => "wood",
            ThemeId::Paper => "paper",
            ThemeId::Dark => "dark",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeId::Wood => "Wood",
            ThemeId::Paper => "Paper",
            ThemeId::Dark => "Dark",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown theme '{s}'"))
    }
}
