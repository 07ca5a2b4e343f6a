//! Core game model for Gomoku: board, players, turn engine and the reducer
//! driving it. Nothing here touches the DOM, so the whole module is unit
//! tested natively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use yew::Reducible;

use crate::config::{BOARD_SIZE, GameConfig, TimeoutPolicy, WIN_LENGTH};
use crate::state::TurnClock;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Cell value used on the wire: 1 or 2 (0 is an empty cell).
    pub fn code(self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn mark(self) -> &'static str {
        match self {
            Player::One => "X",
            Player::Two => "O",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self { row, col }
    }

    /// Bounds-checked construction from signed coordinates.
    pub fn checked(row: i64, col: i64) -> Option<Pos> {
        let n = BOARD_SIZE as i64;
        if (0..n).contains(&row) && (0..n).contains(&col) {
            Some(Pos::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

// Horizontal, vertical, diagonal, anti-diagonal.
const DIRECTIONS: [(i64, i64); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Player>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: Pos) -> Option<Player> {
        self.cells[pos.row][pos.col]
    }

    fn owner_at(&self, row: i64, col: i64) -> Option<Player> {
        Pos::checked(row, col).and_then(|p| self.get(p))
    }

    /// Puts a stone on an empty cell. Returns false (and leaves the board
    /// untouched) when the cell is taken.
    pub fn place(&mut self, pos: Pos, player: Player) -> bool {
        let cell = &mut self.cells[pos.row][pos.col];
        if cell.is_some() {
            return false;
        }
        *cell = Some(player);
        true
    }

    /// True when `player` has at least five stones in an unbroken line.
    pub fn has_five(&self, player: Player) -> bool {
        for r in 0..BOARD_SIZE as i64 {
            for c in 0..BOARD_SIZE as i64 {
                if self.owner_at(r, c) != Some(player) {
                    continue;
                }
                for (dr, dc) in DIRECTIONS {
                    let run = (0..WIN_LENGTH as i64)
                        .all(|k| self.owner_at(r + dr * k, c + dc * k) == Some(player));
                    if run {
                        return true;
                    }
                }
            }
        }
        false
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    #[cfg(test)]
    pub fn is_clear(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }

    /// Every occupied cell in row-major order.
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Player)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .filter_map(move |(col, cell)| cell.map(|p| (Pos { row, col }, p)))
        })
    }

    /// Rows of 0 / 1 / 2 as expected by the move endpoint.
    pub fn to_wire(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|cols| cols.iter().map(|c| c.map_or(0, Player::code)).collect())
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Pvp,
    #[default]
    Easy,
    Medium,
    Hard,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::Easy,
        GameMode::Medium,
        GameMode::Hard,
        GameMode::Pvp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Pvp => "pvp",
            GameMode::Easy => "easy",
            GameMode::Medium => "medium",
            GameMode::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::Pvp => "Two players",
            GameMode::Easy => "AI: Easy",
            GameMode::Medium => "AI: Medium",
            GameMode::Hard => "AI: Hard",
        }
    }

    pub fn vs_ai(self) -> bool {
        self != GameMode::Pvp
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown game mode '{s}'"))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Timeout { loser: Player },
    Draw,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultMessage {
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub current: Player,
    pub mode: GameMode,
    pub move_count: u32,
    pub last_move: Option<Pos>,
    /// `Some` once the game has ended.
    pub outcome: Option<Outcome>,
    pub clock: TurnClock,
    pub timeout_policy: TimeoutPolicy,
    /// An AI request has been sent and not yet answered.
    pub ai_pending: bool,
    /// Bumped on every reset; AI replies carry the generation they were
    /// requested for.
    pub generation: u32,
    /// Bumped whenever something drawn on the board changes.
    pub version: u64,
}

impl GameState {
    pub fn new(mode: GameMode, config: &GameConfig, now_ms: f64) -> Self {
        Self {
            board: Board::new(),
            current: Player::One,
            mode,
            move_count: 0,
            last_move: None,
            outcome: None,
            clock: TurnClock::new(config.turn_time_ms, now_ms),
            timeout_policy: config.timeout_policy,
            ai_pending: false,
            generation: 0,
            version: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Places a stone for `player`. No-op (returns false) if the game is over
    /// or the cell is taken. Ends the game on five-in-a-row or a full board.
    pub fn place_stone(&mut self, pos: Pos, player: Player) -> bool {
        if self.is_over() || !self.board.place(pos, player) {
            return false;
        }
        self.move_count += 1;
        self.last_move = Some(pos);
        self.version += 1;
        if self.check_win(player) {
            self.outcome = Some(Outcome::Win(player));
        } else if self.board.is_full() {
            self.outcome = Some(Outcome::Draw);
        }
        true
    }

    pub fn check_win(&self, player: Player) -> bool {
        self.board.has_five(player)
    }

    pub fn reset_game(&mut self, now_ms: f64) {
        self.board = Board::new();
        self.current = Player::One;
        self.move_count = 0;
        self.last_move = None;
        self.outcome = None;
        self.clock.reset(now_ms);
        self.ai_pending = false;
        self.generation = self.generation.wrapping_add(1);
        self.version += 1;
    }

    /// The AI owns the move right now.
    pub fn ai_to_move(&self) -> bool {
        !self.is_over() && self.mode.vs_ai() && self.current == Player::Two
    }

    /// A human may place a stone: the game is running, it is not the AI's
    /// turn, and the side to move still has time left.
    pub fn accepts_click(&self) -> bool {
        !self.is_over() && !self.ai_to_move() && !self.clock.is_expired(self.current)
    }

    fn pass_turn(&mut self, now_ms: f64) {
        if self.is_over() {
            return;
        }
        self.current = self.current.other();
        self.clock.start_turn(now_ms);
    }

    /// Charges elapsed time to the side to move and applies the timeout
    /// policy once their clock hits zero.
    pub fn tick(&mut self, now_ms: f64) {
        if self.is_over() {
            return;
        }
        let player = self.current;
        self.clock.charge(player, now_ms);
        if !self.clock.is_expired(player) {
            return;
        }
        let hand_over = self.timeout_policy == TimeoutPolicy::AiTakesOver
            && self.mode.vs_ai()
            && player == Player::One;
        if hand_over {
            self.pass_turn(now_ms);
        } else {
            self.outcome = Some(Outcome::Timeout { loser: player });
        }
    }

    pub fn player_title(&self, player: Player) -> String {
        match (player, self.mode.vs_ai()) {
            (Player::One, _) => format!("Player 1 ({})", player.mark()),
            (Player::Two, false) => format!("Player 2 ({})", player.mark()),
            (Player::Two, true) => format!("AI ({})", player.mark()),
        }
    }

    pub fn turn_banner(&self) -> &'static str {
        if self.is_over() {
            return "Game over!";
        }
        match (self.current, self.mode.vs_ai()) {
            (Player::One, _) => "Your turn!",
            (Player::Two, true) => "AI is thinking...",
            (Player::Two, false) => "Player 2's turn",
        }
    }

    pub fn result(&self) -> Option<ResultMessage> {
        let vs_ai = self.mode.vs_ai();
        let (title, message) = match self.outcome? {
            Outcome::Win(p) if !vs_ai => (
                "VICTORY! 🏆".to_string(),
                format!("{} wins the game!", self.player_title(p)),
            ),
            Outcome::Win(Player::One) => (
                "CONGRATULATIONS! 🎉".to_string(),
                "You beat the AI!".to_string(),
            ),
            Outcome::Win(Player::Two) => (
                "DEFEAT... 💀".to_string(),
                "The AI won. Give it another try!".to_string(),
            ),
            Outcome::Timeout { loser: Player::One } => (
                "TIME'S UP ⏳".to_string(),
                if vs_ai {
                    "You ran out of thinking time!".to_string()
                } else {
                    "Player 1 ran out of time! Player 2 wins.".to_string()
                },
            ),
            Outcome::Timeout { loser: Player::Two } => (
                "OPPONENT OUT OF TIME ⏳".to_string(),
                if vs_ai {
                    "The AI ran out of time!".to_string()
                } else {
                    "Player 2 ran out of time! Player 1 wins.".to_string()
                },
            ),
            Outcome::Draw => (
                "DRAW 🤝".to_string(),
                "The board is full and nobody made five.".to_string(),
            ),
        };
        Some(ResultMessage { title, message })
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum GameAction {
    /// Human click on a board cell.
    Click { pos: Pos, now_ms: f64 },
    AiRequested { generation: u32 },
    /// Reply from the move endpoint; coordinates are applied unvalidated and
    /// rejected only by the placement rules.
    AiMove { generation: u32, row: i64, col: i64, now_ms: f64 },
    /// The endpoint failed or answered without a move.
    AiFailed { generation: u32 },
    Tick { now_ms: f64 },
    Reset { now_ms: f64 },
    SetMode { mode: GameMode, now_ms: f64 },
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            Click { pos, now_ms } => {
                // Settle the clock first so an exhausted player cannot sneak
                // a move in between ticks.
                new.tick(now_ms);
                let player = new.current;
                if !new.accepts_click() || !new.place_stone(pos, player) {
                    return if new == *self { self } else { Rc::new(new) };
                }
                new.pass_turn(now_ms);
            }
            AiRequested { generation } => {
                if generation != new.generation || new.ai_pending {
                    return self;
                }
                new.ai_pending = true;
            }
            AiMove { generation, row, col, now_ms } => {
                if generation != new.generation {
                    return self;
                }
                new.ai_pending = false;
                if new.ai_to_move() {
                    if let Some(pos) = Pos::checked(row, col) {
                        if new.place_stone(pos, Player::Two) {
                            new.pass_turn(now_ms);
                        }
                    }
                }
            }
            AiFailed { generation } => {
                if generation != new.generation || !new.ai_pending {
                    return self;
                }
                new.ai_pending = false;
            }
            Tick { now_ms } => {
                if new.is_over() {
                    return self;
                }
                new.tick(now_ms);
            }
            Reset { now_ms } => new.reset_game(now_ms),
            SetMode { mode, now_ms } => {
                new.mode = mode;
                new.reset_game(now_ms);
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh(mode: GameMode) -> GameState {
        GameState::new(mode, &GameConfig::default(), 0.0)
    }

    fn board_with(player: Player, cells: &[(usize, usize)]) -> Board {
        let mut b = Board::new();
        for &(r, c) in cells {
            assert!(b.place(Pos::new(r, c), player));
        }
        b
    }

    fn reduce(state: GameState, action: GameAction) -> GameState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn horizontal_five_wins() {
        let b = board_with(Player::One, &[(7, 3), (7, 4), (7, 5), (7, 6), (7, 7)]);
        assert!(b.has_five(Player::One));
        assert!(!b.has_five(Player::Two));
    }

    #[test]
    fn four_in_a_row_never_wins() {
        let lines: [&[(usize, usize)]; 4] = [
            &[(7, 3), (7, 4), (7, 5), (7, 6)],
            &[(0, 0), (1, 0), (2, 0), (3, 0)],
            &[(10, 10), (11, 11), (12, 12), (13, 13)],
            &[(4, 10), (5, 9), (6, 8), (7, 7)],
        ];
        for cells in lines {
            let board = board_with(Player::One, cells);
            assert!(!board.has_five(Player::One), "{cells:?}");
        }
    }

    #[test]
    fn all_directions_detected_including_edges() {
        let vertical = [(10, 14), (11, 14), (12, 14), (13, 14), (14, 14)];
        let diagonal = [(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)];
        let anti = [(0, 14), (1, 13), (2, 12), (3, 11), (4, 10)];
        let bottom_anti = [(10, 4), (11, 3), (12, 2), (13, 1), (14, 0)];
        for cells in [vertical, diagonal, anti, bottom_anti] {
            assert!(board_with(Player::Two, &cells).has_five(Player::Two), "{cells:?}");
        }
    }

    #[test]
    fn broken_line_and_mixed_colours_do_not_win() {
        let mut b = board_with(Player::One, &[(3, 0), (3, 1), (3, 2), (3, 3)]);
        b.place(Pos::new(3, 4), Player::Two);
        b.place(Pos::new(3, 5), Player::One);
        assert!(!b.has_five(Player::One));
        let gap = board_with(Player::One, &[(5, 5), (6, 6), (7, 7), (9, 9), (10, 10)]);
        assert!(!gap.has_five(Player::One));
    }

    #[test]
    fn overline_contains_five() {
        let b = board_with(Player::One, &[(2, 2), (2, 3), (2, 4), (2, 5), (2, 6), (2, 7)]);
        assert!(b.has_five(Player::One));
    }

    #[test]
    fn occupied_cell_is_never_overwritten() {
        let mut s = fresh(GameMode::Pvp);
        assert!(s.place_stone(Pos::new(4, 4), Player::One));
        let before = s.clone();
        assert!(!s.place_stone(Pos::new(4, 4), Player::Two));
        assert_eq!(s, before);
        assert_eq!(s.board.get(Pos::new(4, 4)), Some(Player::One));
    }

    #[test]
    fn placing_after_game_over_is_ignored() {
        let mut s = fresh(GameMode::Pvp);
        s.outcome = Some(Outcome::Draw);
        assert!(!s.place_stone(Pos::new(0, 0), Player::One));
        assert!(s.board.is_clear());
        assert_eq!(s.move_count, 0);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut s = fresh(GameMode::Hard);
        s.place_stone(Pos::new(1, 1), Player::One);
        s.current = Player::Two;
        s.clock.charge(Player::Two, 5_000.0);
        s.outcome = Some(Outcome::Timeout { loser: Player::Two });
        s.ai_pending = true;
        let generation = s.generation;

        s.reset_game(10_000.0);
        assert!(s.board.is_clear());
        assert_eq!(s.move_count, 0);
        assert_eq!(s.current, Player::One);
        assert_eq!(s.outcome, None);
        assert_eq!(s.last_move, None);
        assert!(!s.ai_pending);
        let initial = GameConfig::default().turn_time_ms;
        assert_eq!(s.clock.remaining(Player::One), initial);
        assert_eq!(s.clock.remaining(Player::Two), initial);
        assert_ne!(s.generation, generation);
    }

    #[test]
    fn clicks_alternate_in_pvp_and_win_ends_game() {
        let mut s = fresh(GameMode::Pvp);
        for col in 0..4 {
            s = reduce(s, GameAction::Click { pos: Pos::new(0, col), now_ms: 0.0 });
            s = reduce(s, GameAction::Click { pos: Pos::new(1, col), now_ms: 0.0 });
        }
        assert_eq!(s.current, Player::One);
        assert_eq!(s.move_count, 8);
        s = reduce(s, GameAction::Click { pos: Pos::new(0, 4), now_ms: 0.0 });
        assert_eq!(s.outcome, Some(Outcome::Win(Player::One)));
        // Winner keeps the turn marker; further clicks do nothing.
        assert_eq!(s.current, Player::One);
        let after = reduce(s.clone(), GameAction::Click { pos: Pos::new(5, 5), now_ms: 0.0 });
        assert_eq!(after, s);
        assert_eq!(s.result().unwrap().title, "VICTORY! 🏆");
    }

    #[test]
    fn clicks_ignored_during_ai_turn() {
        let mut s = fresh(GameMode::Easy);
        s = reduce(s, GameAction::Click { pos: Pos::new(7, 7), now_ms: 0.0 });
        assert!(s.ai_to_move());
        let blocked = reduce(s.clone(), GameAction::Click { pos: Pos::new(8, 8), now_ms: 0.0 });
        assert_eq!(blocked, s);
    }

    #[test]
    fn ai_reply_applies_and_returns_turn() {
        let mut s = fresh(GameMode::Medium);
        s = reduce(s, GameAction::Click { pos: Pos::new(7, 7), now_ms: 100.0 });
        let g = s.generation;
        s = reduce(s, GameAction::AiRequested { generation: g });
        assert!(s.ai_pending);
        s = reduce(s, GameAction::AiMove { generation: g, row: 7, col: 8, now_ms: 900.0 });
        assert!(!s.ai_pending);
        assert_eq!(s.board.get(Pos::new(7, 8)), Some(Player::Two));
        assert_eq!(s.current, Player::One);
        assert_eq!(s.last_move, Some(Pos::new(7, 8)));
    }

    #[test]
    fn invalid_ai_reply_is_a_no_op_on_the_board() {
        let mut s = fresh(GameMode::Easy);
        s = reduce(s, GameAction::Click { pos: Pos::new(7, 7), now_ms: 0.0 });
        let g = s.generation;
        for (row, col) in [(7, 7), (-1, 3), (15, 0)] {
            let action = GameAction::AiMove { generation: g, row, col, now_ms: 0.0 };
            let next = reduce(s.clone(), action);
            assert_eq!(next.board, s.board);
            assert_eq!(next.current, Player::Two);
            assert_eq!(next.move_count, 1);
        }
    }

    #[test]
    fn stale_ai_reply_is_dropped() {
        let mut s = fresh(GameMode::Easy);
        s = reduce(s, GameAction::Click { pos: Pos::new(7, 7), now_ms: 0.0 });
        let old = s.generation;
        s = reduce(s, GameAction::Reset { now_ms: 0.0 });
        let action = GameAction::AiMove { generation: old, row: 0, col: 0, now_ms: 0.0 };
        let after = reduce(s.clone(), action);
        assert_eq!(after, s);
        assert!(after.board.is_clear());
    }

    #[test]
    fn failed_request_clears_pending_but_keeps_turn() {
        let mut s = fresh(GameMode::Easy);
        s = reduce(s, GameAction::Click { pos: Pos::new(7, 7), now_ms: 0.0 });
        let g = s.generation;
        s = reduce(s, GameAction::AiRequested { generation: g });
        s = reduce(s, GameAction::AiFailed { generation: g });
        assert!(!s.ai_pending);
        assert!(s.ai_to_move());
        assert_eq!(s.turn_banner(), "AI is thinking...");
    }

    #[test]
    fn tick_charges_side_to_move_only() {
        let mut s = fresh(GameMode::Pvp);
        s = reduce(s, GameAction::Tick { now_ms: 200.0 });
        s = reduce(s, GameAction::Tick { now_ms: 400.0 });
        assert_eq!(s.clock.remaining(Player::One), 240_000.0 - 400.0);
        assert_eq!(s.clock.remaining(Player::Two), 240_000.0);
        // The move itself settles the mover's clock up to the click.
        s = reduce(s, GameAction::Click { pos: Pos::new(0, 0), now_ms: 500.0 });
        s = reduce(s, GameAction::Tick { now_ms: 700.0 });
        assert_eq!(s.clock.remaining(Player::One), 240_000.0 - 500.0);
        assert_eq!(s.clock.remaining(Player::Two), 240_000.0 - 200.0);
    }

    #[test]
    fn timeout_ends_game_by_default() {
        let mut s = fresh(GameMode::Pvp);
        s = reduce(s, GameAction::Tick { now_ms: 240_000.0 });
        assert_eq!(s.outcome, Some(Outcome::Timeout { loser: Player::One }));
        assert_eq!(
            s.result().unwrap().message,
            "Player 1 ran out of time! Player 2 wins."
        );
        let frozen = reduce(s.clone(), GameAction::Tick { now_ms: 250_000.0 });
        assert_eq!(frozen, s);
    }

    #[test]
    fn ai_takes_over_after_human_timeout_when_configured() {
        let cfg = GameConfig {
            timeout_policy: TimeoutPolicy::AiTakesOver,
            ..GameConfig::default()
        };
        let mut s = GameState::new(GameMode::Hard, &cfg, 0.0);
        s = reduce(s, GameAction::Tick { now_ms: 240_001.0 });
        assert_eq!(s.outcome, None);
        assert!(s.ai_to_move());

        // The AI itself still loses on time.
        s = reduce(s, GameAction::Tick { now_ms: 480_001.0 });
        assert_eq!(s.outcome, Some(Outcome::Timeout { loser: Player::Two }));
        assert_eq!(s.result().unwrap().message, "The AI ran out of time!");
    }

    #[test]
    fn exhausted_human_cannot_move_after_ai_reply() {
        let cfg = GameConfig {
            timeout_policy: TimeoutPolicy::AiTakesOver,
            ..GameConfig::default()
        };
        let mut s = GameState::new(GameMode::Easy, &cfg, 0.0);
        s = reduce(s, GameAction::Tick { now_ms: 240_001.0 });
        let g = s.generation;
        let action = GameAction::AiMove { generation: g, row: 7, col: 7, now_ms: 240_500.0 };
        s = reduce(s, action);
        assert_eq!(s.current, Player::One);
        assert!(s.clock.is_expired(Player::One));
        assert!(!s.accepts_click());

        s = reduce(s, GameAction::Click { pos: Pos::new(0, 0), now_ms: 241_100.0 });
        assert_eq!(s.board.get(Pos::new(0, 0)), None);
        assert_eq!(s.move_count, 1);
        assert_eq!(s.outcome, None);
        assert!(s.ai_to_move());
    }

    #[test]
    fn click_after_clock_runs_out_ends_game_without_a_stone() {
        let mut s = fresh(GameMode::Pvp);
        s = reduce(s, GameAction::Tick { now_ms: 239_900.0 });
        s = reduce(s, GameAction::Click { pos: Pos::new(4, 4), now_ms: 240_050.0 });
        assert_eq!(s.outcome, Some(Outcome::Timeout { loser: Player::One }));
        assert_eq!(s.board.get(Pos::new(4, 4)), None);
        assert_eq!(s.move_count, 0);
    }

    #[test]
    fn pvp_timeout_ends_game_even_when_ai_takes_over() {
        let cfg = GameConfig {
            timeout_policy: TimeoutPolicy::AiTakesOver,
            ..GameConfig::default()
        };
        let mut s = GameState::new(GameMode::Pvp, &cfg, 0.0);
        s = reduce(s, GameAction::Tick { now_ms: 240_001.0 });
        assert_eq!(s.outcome, Some(Outcome::Timeout { loser: Player::One }));
        assert_eq!(s.current, Player::One);
    }

    #[test]
    fn only_one_ai_request_in_flight() {
        let mut s = fresh(GameMode::Easy);
        s = reduce(s, GameAction::Click { pos: Pos::new(7, 7), now_ms: 0.0 });
        let g = s.generation;
        let first = Rc::new(s).reduce(GameAction::AiRequested { generation: g });
        assert!(first.ai_pending);
        let second = first.clone().reduce(GameAction::AiRequested { generation: g });
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn player_one_banner_is_the_same_in_every_mode() {
        for mode in GameMode::ALL {
            assert_eq!(fresh(mode).turn_banner(), "Your turn!");
        }
        let mut s = fresh(GameMode::Pvp);
        s = reduce(s, GameAction::Click { pos: Pos::new(0, 0), now_ms: 0.0 });
        assert_eq!(s.turn_banner(), "Player 2's turn");
    }

    #[test]
    fn set_mode_resets_and_retitles() {
        let mut s = fresh(GameMode::Pvp);
        s = reduce(s, GameAction::Click { pos: Pos::new(3, 3), now_ms: 0.0 });
        assert_eq!(s.player_title(Player::Two), "Player 2 (O)");
        s = reduce(s, GameAction::SetMode { mode: GameMode::Hard, now_ms: 0.0 });
        assert!(s.board.is_clear());
        assert_eq!(s.mode, GameMode::Hard);
        assert_eq!(s.player_title(Player::Two), "AI (O)");
    }

    #[test]
    fn full_board_without_five_is_a_draw() {
        let mut s = fresh(GameMode::Pvp);
        // Pattern with runs of at most two in every direction.
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let p = if ((c + 2 * r) / 2) % 2 == 0 { Player::One } else { Player::Two };
                s.place_stone(Pos::new(r, c), p);
            }
        }
        assert!(s.board.is_full());
        assert_eq!(s.outcome, Some(Outcome::Draw));
    }

    #[test]
    fn wire_board_uses_numeric_codes() {
        let mut b = Board::new();
        b.place(Pos::new(0, 1), Player::One);
        b.place(Pos::new(14, 14), Player::Two);
        let wire = b.to_wire();
        assert_eq!(wire.len(), BOARD_SIZE);
        assert_eq!(wire[0][..3], [0, 1, 0]);
        assert_eq!(wire[14][14], 2);
        assert_eq!(b.stones().count(), 2);
    }

    #[test]
    fn mode_strings_round_trip() {
        for m in GameMode::ALL {
            assert_eq!(m.as_str().parse::<GameMode>(), Ok(m));
        }
        assert!("nightmare".parse::<GameMode>().is_err());
        assert!(!GameMode::Pvp.vs_ai());
    }
}
