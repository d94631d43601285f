use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{blocking_move, choose_move, immediate_win, Board, Mark, CORNERS, SIDES};

fn board(desc: &str) -> Board {
    let mut cells = [None; 9];
    for (i, ch) in desc.chars().enumerate() {
        cells[i] = match ch {
            'X' => Some(Mark::X),
            'O' => Some(Mark::O),
            _ => None,
        };
    }
    Board::from(cells)
}

fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

#[test]
fn test_takes_immediate_win() {
    let b = board("XX.OO....");
    assert_eq!(immediate_win(&b, Mark::X), Some(2));
    // The win is taken even though O also threatens at 5.
    assert_eq!(choose_move(&b, Mark::X, &mut rng(1)), Some(2));
}

#[test]
fn test_blocks_opponent_win() {
    let b = board("OO.X.....");
    assert_eq!(immediate_win(&b, Mark::X), None);
    assert_eq!(blocking_move(&b, Mark::X), Some(2));
    assert_eq!(choose_move(&b, Mark::X, &mut rng(1)), Some(2));
}

#[test]
fn test_prefers_center_when_no_tactic_applies() {
    // Computer moves second on an otherwise empty board.
    assert_eq!(choose_move(&board("X........"), Mark::O, &mut rng(1)), Some(4));
    // Computer moves first.
    assert_eq!(choose_move(&Board::new(), Mark::X, &mut rng(1)), Some(4));
}

#[test]
fn test_takes_a_corner_when_center_is_gone() {
    let b = board("....X....");
    for seed in 0..32 {
        let choice = choose_move(&b, Mark::O, &mut rng(seed)).unwrap();
        assert!(CORNERS.contains(&choice), "unexpected cell {}", choice);
    }
}

#[test]
fn test_takes_a_side_when_center_and_corners_are_gone() {
    // Center and all corners occupied, with the side cells 1 and 7 filled so
    // neither mark has an immediate win; only sides 3 and 5 remain open.
    let b = board("XOX.X.OXO");
    assert_eq!(immediate_win(&b, Mark::O), None);
    assert_eq!(blocking_move(&b, Mark::O), None);
    for seed in 0..32 {
        let choice = choose_move(&b, Mark::O, &mut rng(seed)).unwrap();
        assert!(choice == 3 || choice == 5, "unexpected cell {}", choice);
        assert!(SIDES.contains(&choice));
    }
}

#[test]
fn test_seeded_choice_is_reproducible() {
    let b = board("....X....");
    let first = choose_move(&b, Mark::O, &mut rng(42));
    let second = choose_move(&b, Mark::O, &mut rng(42));
    assert_eq!(first, second);
}

#[test]
fn test_returns_none_only_on_full_board() {
    let full = board("XOXXOOOXX");
    assert_eq!(choose_move(&full, Mark::X, &mut rng(1)), None);
    assert_eq!(choose_move(&full, Mark::O, &mut rng(1)), None);

    // One empty cell left: it gets picked regardless of position.
    let almost = board("XOXXOO.XX");
    assert_eq!(choose_move(&almost, Mark::O, &mut rng(1)), Some(6));
}
