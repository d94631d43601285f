//! Game controller: the state machine that serializes all board mutation.
//!
//! The controller owns the board, the mode and the human's mark, and applies
//! intents coming from the presentation layer. Winner, draw and turn are
//! recomputed from the board on every query. Invalid intents (occupied cell,
//! terminal board, wrong turn) are silent no-ops per the race-tolerant
//! design: a stale deferred computer move must never resurrect a finished or
//! cleared game.

use crate::board::Board;
use crate::common::{GameMode, Mark};
use crate::config::BOARD_CELLS;
use crate::engine::{status, winner, GameStatus, WinnerInfo};
use crate::player::Player;
use crate::player_ai::AiPlayer;
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

/// Serializable view of the full query interface: everything the
/// presentation layer needs to render one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub cells: [Option<Mark>; BOARD_CELLS],
    pub turn: Mark,
    pub mode: GameMode,
    pub human_mark: Mark,
    pub status: GameStatus,
    pub winning_line: Option<[usize; 3]>,
    /// False while the computer's deferred move is pending or the game is
    /// over; the renderer disables input accordingly.
    pub can_interact: bool,
}

/// State machine orchestrating game progress.
pub struct GameController<P: Player = AiPlayer> {
    board: Board,
    mode: GameMode,
    human_mark: Mark,
    opponent: P,
    rng: SmallRng,
    epoch: u64,
}

impl GameController<AiPlayer> {
    /// Controller with the heuristic opponent and a caller-supplied RNG.
    pub fn with_rng(rng: SmallRng) -> Self {
        Self::with_player(AiPlayer::new(), rng)
    }

    /// Controller with the heuristic opponent, seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn new() -> Self {
        let mut seed_rng = rand::rng();
        Self::with_rng(SmallRng::from_rng(&mut seed_rng))
    }
}

#[cfg(feature = "std")]
impl Default for GameController<AiPlayer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Player> GameController<P> {
    /// Fresh game: empty board, X to move, player-vs-player, human as X.
    pub fn with_player(opponent: P, rng: SmallRng) -> Self {
        Self {
            board: Board::new(),
            mode: GameMode::PlayerVsPlayer,
            human_mark: Mark::X,
            opponent,
            rng,
            epoch: 0,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Flat snapshot of all nine cells.
    pub fn cells(&self) -> [Option<Mark>; BOARD_CELLS] {
        self.board.cells()
    }

    /// Whose move it is, derived from the board.
    pub fn turn(&self) -> Mark {
        self.board.next_turn()
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    /// The mark the computer plays in computer mode.
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.other()
    }

    /// Current game status, recomputed from the board.
    pub fn status(&self) -> GameStatus {
        status(&self.board)
    }

    /// Winning mark and line, if the game has been won.
    pub fn winner(&self) -> Option<WinnerInfo> {
        winner(&self.board)
    }

    /// Generation counter for deferred moves. Bumped by every reset-like
    /// command, invalidating any computer move scheduled before it.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// True when the game is in progress and it is the computer's turn.
    pub fn computer_turn_pending(&self) -> bool {
        self.mode == GameMode::PlayerVsComputer
            && self.status() == GameStatus::InProgress
            && self.turn() == self.computer_mark()
    }

    /// True when the presentation layer should accept cell clicks.
    pub fn can_interact(&self) -> bool {
        self.status() == GameStatus::InProgress && !self.computer_turn_pending()
    }

    /// Apply a human move intent at `index` for the current turn's mark.
    ///
    /// Ignored (returning `false`) when the game is over, the cell is
    /// occupied or out of range, or the turn belongs to the computer.
    /// Repeated invalid calls never change state.
    pub fn play_at(&mut self, index: usize) -> bool {
        if self.status() != GameStatus::InProgress || self.computer_turn_pending() {
            return false;
        }
        let mark = self.turn();
        self.board.place(index, mark).is_ok()
    }

    /// Apply the computer's move if one is due, returning the chosen index.
    ///
    /// Guarded like a human move: a no-op unless the game is in progress,
    /// the mode is computer and the turn is the computer's. The selected
    /// cell is re-validated by the placement itself.
    pub fn computer_move(&mut self) -> Option<usize> {
        if !self.computer_turn_pending() {
            return None;
        }
        let mark = self.computer_mark();
        let index = self
            .opponent
            .select_move(&mut self.rng, &self.board, mark)?;
        match self.board.place(index, mark) {
            Ok(()) => Some(index),
            Err(_) => None,
        }
    }

    /// Execute a computer move scheduled at `epoch`. A stale epoch means a
    /// reset or mode/symbol change happened during the delay: no-op.
    pub fn apply_deferred(&mut self, epoch: u64) -> Option<usize> {
        if epoch != self.epoch {
            return None;
        }
        self.computer_move()
    }

    /// Clear the board and return to the initial in-progress state, X to
    /// move. Always valid.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Switch game mode; resets the board as a side effect.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.reset();
        self.mode = mode;
    }

    /// Pick which mark the human controls; resets the board as a side
    /// effect. Only meaningful in computer mode, always accepted.
    pub fn set_human_mark(&mut self, mark: Mark) {
        self.reset();
        self.human_mark = mark;
    }

    /// Bundle the whole query interface for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.cells(),
            turn: self.turn(),
            mode: self.mode,
            human_mark: self.human_mark,
            status: self.status(),
            winning_line: self.winner().map(|info| info.line),
            can_interact: self.can_interact(),
        }
    }
}
