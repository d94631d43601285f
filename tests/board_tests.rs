use tictactoe::{Board, BoardError, Mark};

#[test]
fn test_place_and_read_back() {
    let mut board = Board::new();
    board.place(0, Mark::X).unwrap();
    board.place(4, Mark::O).unwrap();

    assert_eq!(board.cell(0).unwrap(), Some(Mark::X));
    assert_eq!(board.cell(4).unwrap(), Some(Mark::O));
    assert_eq!(board.cell(8).unwrap(), None);
    assert_eq!(board.mark_count(), 2);
}

#[test]
fn test_place_occupied_cell_fails() {
    let mut board = Board::new();
    board.place(4, Mark::X).unwrap();

    assert_eq!(board.place(4, Mark::O).unwrap_err(), BoardError::CellOccupied);
    // original mark untouched
    assert_eq!(board.cell(4).unwrap(), Some(Mark::X));
}

#[test]
fn test_place_out_of_bounds_fails() {
    let mut board = Board::new();
    assert!(matches!(
        board.place(9, Mark::X),
        Err(BoardError::BitBoardError(_))
    ));
    assert_eq!(board.mark_count(), 0);
}

#[test]
fn test_turn_derived_from_counts() {
    let mut board = Board::new();
    assert_eq!(board.next_turn(), Mark::X);
    board.place(0, Mark::X).unwrap();
    assert_eq!(board.next_turn(), Mark::O);
    board.place(1, Mark::O).unwrap();
    assert_eq!(board.next_turn(), Mark::X);
}

#[test]
fn test_cells_snapshot_roundtrip() {
    let mut board = Board::new();
    board.place(2, Mark::X).unwrap();
    board.place(7, Mark::O).unwrap();

    let cells = board.cells();
    assert_eq!(cells[2], Some(Mark::X));
    assert_eq!(cells[7], Some(Mark::O));
    assert_eq!(cells.iter().filter(|c| c.is_some()).count(), 2);

    assert_eq!(Board::from(cells), board);
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    for i in 0..9 {
        assert!(!board.is_full());
        let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
        board.place(i, mark).unwrap();
    }
    assert!(board.is_full());
}
