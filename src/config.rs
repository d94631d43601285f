/// Side length of the (fixed) board.
pub const GRID_SIZE: usize = 3;
/// Total number of cells, indexed 0..9 row-major.
pub const BOARD_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// The eight winning lines: three rows, three columns, two diagonals.
/// Enumeration order is the tie-break when several lines complete at once.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Center cell, the strongest opening square.
pub const CENTER: usize = 4;
/// Corner cells.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];
/// Edge-center cells.
pub const SIDES: [usize; 4] = [1, 3, 5, 7];
