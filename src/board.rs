//! Game board state: one occupancy bitboard per mark.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Mark};
use crate::config::{BOARD_CELLS, GRID_SIZE};
use core::fmt;

type BB = BitBoard<u16, GRID_SIZE>;

/// The 3×3 board, the single source of truth for all derived game state.
///
/// Cells are indexed 0..9 row-major. The two mark sets never overlap, and
/// since X moves first their counts differ by at most one with X ahead.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    xs: BB,
    os: BB,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            xs: BB::new(),
            os: BB::new(),
        }
    }

    /// The mark occupying `index`, if any.
    pub fn cell(&self, index: usize) -> Result<Option<Mark>, BoardError> {
        if self.xs.get(index)? {
            Ok(Some(Mark::X))
        } else if self.os.get(index)? {
            Ok(Some(Mark::O))
        } else {
            Ok(None)
        }
    }

    /// Occupancy set of a single mark.
    pub fn marks(&self, mark: Mark) -> BB {
        match mark {
            Mark::X => self.xs,
            Mark::O => self.os,
        }
    }

    /// Occupancy set of both marks combined.
    pub fn occupied(&self) -> BB {
        self.xs | self.os
    }

    /// Total number of marks placed so far.
    pub fn mark_count(&self) -> usize {
        self.occupied().count_ones()
    }

    /// Returns `true` when every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Whose move it is, derived from the mark counts (X moves first).
    pub fn next_turn(&self) -> Mark {
        if self.xs.count_ones() == self.os.count_ones() {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Place `mark` at `index`. Placements are permanent until the board is
    /// replaced by a reset.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        if self.occupied().get(index)? {
            return Err(BoardError::CellOccupied);
        }
        match mark {
            Mark::X => self.xs.set(index)?,
            Mark::O => self.os.set(index)?,
        }
        Ok(())
    }

    /// Flat-array snapshot of all nine cells.
    pub fn cells(&self) -> [Option<Mark>; BOARD_CELLS] {
        core::array::from_fn(|i| {
            if self.xs.get(i).unwrap_or(false) {
                Some(Mark::X)
            } else if self.os.get(i).unwrap_or(false) {
                Some(Mark::O)
            } else {
                None
            }
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Option<Mark>; BOARD_CELLS]> for Board {
    fn from(cells: [Option<Mark>; BOARD_CELLS]) -> Self {
        let mut board = Board::new();
        for (i, cell) in cells.iter().enumerate() {
            if let Some(mark) = cell {
                match mark {
                    Mark::X => board.xs.set(i).ok(),
                    Mark::O => board.os.set(i).ok(),
                };
            }
        }
        board
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in 0..GRID_SIZE {
            write!(f, "  ")?;
            for col in 0..GRID_SIZE {
                match self.cell(row * GRID_SIZE + col).unwrap_or(None) {
                    Some(mark) => write!(f, "{} ", mark)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
