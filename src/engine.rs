//! Pure terminal-state detection over board snapshots.
//!
//! Winner, draw and legal moves are always recomputed from the board rather
//! than cached, so they cannot drift out of sync with it.

use crate::board::Board;
use crate::common::Mark;
use crate::config::{BOARD_CELLS, LINES};

/// The winning mark and the completed line that produced the win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WinnerInfo {
    pub mark: Mark,
    pub line: [usize; 3],
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

/// Scan all eight lines for a uniform, non-empty triple.
///
/// Lines are checked in the fixed order of [`LINES`], and the first match is
/// reported. Boards reached through legal play stop at the first win, so the
/// tie-break only matters for contrived boards.
pub fn winner(board: &Board) -> Option<WinnerInfo> {
    let cells = board.cells();
    for line in LINES {
        let [a, b, c] = line;
        if let Some(mark) = cells[a] {
            if cells[b] == Some(mark) && cells[c] == Some(mark) {
                return Some(WinnerInfo { mark, line });
            }
        }
    }
    None
}

/// Returns `true` iff there is no winner and every cell is occupied.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

/// All empty cell indices, in ascending order.
pub fn empty_indices(board: &Board) -> impl Iterator<Item = usize> + '_ {
    let occupied = board.occupied();
    (0..BOARD_CELLS).filter(move |&i| !occupied.get(i).unwrap_or(true))
}

/// Evaluate the current game status.
pub fn status(board: &Board) -> GameStatus {
    if let Some(info) = winner(board) {
        GameStatus::Won(info.mark)
    } else if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
