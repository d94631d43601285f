use crate::ai;
use crate::board::Board;
use crate::common::Mark;
use crate::player::Player;
use rand::rngs::SmallRng;

/// Computer player backed by the fixed-priority heuristic in [`crate::ai`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board, mark: Mark) -> Option<usize> {
        ai::choose_move(board, mark, rng)
    }
}
