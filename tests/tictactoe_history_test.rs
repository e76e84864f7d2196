//! End-to-end tests for game progression and time travel.

use rewind::{Board, Cell, GameState, Mark, Position, Status};
use rewind_tictactoe::{find_winning_line, is_full};

fn play(indices: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &idx in indices {
        game.apply_move(Position::from_index(idx).unwrap());
    }
    game
}

#[test]
fn test_empty_board_has_no_winner_and_is_not_full() {
    let board = Board::new();
    assert_eq!(find_winning_line(&board), None);
    assert!(!is_full(&board));
}

#[test]
fn test_top_row_win_scenario() {
    let game = play(&[0, 4, 1, 3, 2]);
    assert_eq!(game.status(), Status::Winner(Mark::X));
    assert_eq!(
        game.display_snapshot().highlights(),
        &[true, true, true, false, false, false, false, false, false]
    );
}

#[test]
fn test_full_board_draw_scenario() {
    // X: 0,1,5,6,8  O: 2,3,4,7
    let game = play(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);
    let board = game.display_snapshot().board();
    assert!(is_full(board));
    assert_eq!(find_winning_line(board), None);
    assert_eq!(game.status(), Status::Draw);
}

#[test]
fn test_occupied_cell_is_a_noop() {
    let mut game = play(&[0, 4]);
    let history = game.history().to_vec();
    let step = game.current_step();
    let next = game.next_player();

    assert!(!game.apply_move(Position::TopLeft));

    assert_eq!(game.history(), history.as_slice());
    assert_eq!(game.current_step(), step);
    assert_eq!(game.next_player(), next);
}

#[test]
fn test_move_after_jump_truncates_history() {
    let mut game = play(&[0, 4, 8, 2, 6]);
    let kept = game.history()[..3].to_vec();
    let k = 2;

    game.jump_to(k);
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.next_player(), Mark::X);

    assert!(game.apply_move(Position::TopCenter));
    assert_eq!(game.history().len(), k + 2);
    assert_eq!(&game.history()[..=k], kept.as_slice());
    assert_eq!(game.current_step(), k + 1);
    let board = game.display_snapshot().board();
    assert_eq!(board.get(Position::TopCenter), Cell::Occupied(Mark::X));
    assert!(board.is_empty(Position::TopRight));
    assert!(board.is_empty(Position::BottomLeft));
}

#[test]
fn test_each_snapshot_changes_one_empty_cell() {
    let game = play(&[4, 0, 8, 2, 1, 7, 3]);
    for pair in game.history().windows(2) {
        let played = pair[1].last_move().expect("every move records its cell");
        assert!(pair[0].board().is_empty(played));
        let changed = Position::ALL
            .iter()
            .filter(|p| pair[0].board().get(**p) != pair[1].board().get(**p))
            .count();
        assert_eq!(changed, 1);
    }
    assert!(game.check_invariants().is_ok());
}

#[test]
fn test_toggle_order_twice_restores_move_list() {
    let mut game = play(&[0, 4, 8]);
    let original = game.moves();

    game.toggle_history_order();
    let reversed = game.moves();
    let mut expected = original.clone();
    expected.reverse();
    assert_eq!(reversed, expected);

    game.toggle_history_order();
    assert_eq!(game.moves(), original);
}

#[test]
fn test_labels_use_one_based_coordinates() {
    let game = play(&[8, 3]);
    let labels: Vec<String> = game.moves().into_iter().map(|m| m.label).collect();
    assert_eq!(
        labels,
        ["Go to game start", "Go to move #1 (3,3)", "Go to move #2 (2,1)"]
    );
}
