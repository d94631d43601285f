// Heuristic move selection for the computer opponent.
// Uses no_std and avoids heap allocations.

use crate::board::Board;
use crate::common::Mark;
use crate::config::{CENTER, CORNERS, SIDES};
use crate::engine::{empty_indices, winner};
use rand::Rng;

/// Lowest-indexed empty cell where placing `mark` wins on the spot.
///
/// Each candidate is tried against a hypothetical copy of the board; the real
/// board is never mutated.
pub fn immediate_win(board: &Board, mark: Mark) -> Option<usize> {
    for index in empty_indices(board) {
        let mut probe = *board;
        if probe.place(index, mark).is_ok() && winner(&probe).is_some() {
            return Some(index);
        }
    }
    None
}

/// Cell that denies the opponent of `mark` an immediate win, if one exists.
pub fn blocking_move(board: &Board, mark: Mark) -> Option<usize> {
    immediate_win(board, mark.other())
}

/// Pick uniformly at random among the open cells of a positional group.
fn random_open<R: Rng + ?Sized>(board: &Board, group: &[usize; 4], rng: &mut R) -> Option<usize> {
    let occupied = board.occupied();
    let mut open = [0usize; 4];
    let mut count = 0;
    for &index in group {
        if !occupied.get(index).unwrap_or(true) {
            open[count] = index;
            count += 1;
        }
    }
    if count == 0 {
        None
    } else {
        Some(open[rng.random_range(0..count)])
    }
}

/// Positional preference when no tactical move applies: center, then a random
/// open corner, then a random open side.
fn positional_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    if board.cell(CENTER).ok()?.is_none() {
        return Some(CENTER);
    }
    random_open(board, &CORNERS, rng).or_else(|| random_open(board, &SIDES, rng))
}

/// Choose the computer's move for `mark`, or `None` iff the board is full.
///
/// Strict priority: win now, block the opponent's immediate win, center,
/// random open corner, random open side, lowest empty index. The heuristic
/// looks one ply ahead and does not detect forks, so an optimal opponent can
/// beat it.
pub fn choose_move<R: Rng + ?Sized>(board: &Board, mark: Mark, rng: &mut R) -> Option<usize> {
    immediate_win(board, mark)
        .or_else(|| blocking_move(board, mark))
        .or_else(|| positional_move(board, rng))
        // Unreachable unless the board is already full; the positional groups
        // cover all nine cells.
        .or_else(|| empty_indices(board).next())
}
