use crate::board::Board;
use crate::common::Mark;
use rand::rngs::SmallRng;

/// Interface implemented by computer move selectors.
///
/// The controller consults this seam whenever the computer's turn comes up;
/// tests substitute scripted selectors for deterministic games.
pub trait Player {
    /// Choose the next cell for `mark`, or `None` if the board is full.
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board, mark: Mark) -> Option<usize>;
}
