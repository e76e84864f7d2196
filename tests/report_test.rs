//! Tests for the play command's report.

use rewind::{GameState, Position, ReplayError, Report, Status, replay};

#[test]
fn test_report_after_time_travel() {
    let mut game = GameState::with_reverse_display(true);
    for idx in [0, 4, 1] {
        game.apply_move(Position::ALL[idx]);
    }
    game.jump_to(1);

    let report = Report::from_game(&game);
    assert_eq!(*report.step(), 1);
    assert_eq!(*report.status(), Status::Next(rewind::Mark::O));

    let text = report.render_text();
    assert!(text.starts_with(" X | . | .\n . | . | .\n . | . | .\n"));
    assert!(text.contains("Show history in desc\n  1. Go to move #3 (1,2)\n"));
    assert!(text.contains("> 3. Go to move #1 (1,1)\n"));
}

#[test]
fn test_report_draw_has_no_highlights() {
    let mut game = GameState::new();
    for idx in [0, 2, 1, 3, 5, 4, 6, 7, 8] {
        game.apply_move(Position::ALL[idx]);
    }
    let report = Report::from_game(&game);
    assert_eq!(report.status_text().as_str(), "Draw");
    assert_eq!(report.highlights(), &[false; 9]);
    assert!(!report.render_text().contains('['));
}

#[test]
fn test_replay_jump_past_end_is_an_error() {
    let err = replay(&[0, 4], Some(3), false).unwrap_err();
    assert_eq!(err, ReplayError::StepOutOfRange { step: 3, len: 3 });
    assert_eq!(
        err.to_string(),
        "Step 3 is out of range (history has 3 entries)"
    );
}

#[test]
fn test_replay_rejects_cell_off_board() {
    let err = replay(&[0, 9], None, false).unwrap_err();
    assert_eq!(err, ReplayError::CellOutOfRange { cell: 9 });
}

#[test]
fn test_replay_skips_ignored_moves_and_jumps() {
    // Second 0 hits an occupied cell and is skipped.
    let game = replay(&[0, 0, 4], Some(1), true).unwrap();
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_step(), 1);
    assert!(game.reverse_display());
}

#[test]
fn test_render_switches_between_text_and_json() {
    let game = replay(&[4], None, false).unwrap();
    let report = Report::from_game(&game);

    let text = report.render(false).unwrap();
    assert_eq!(text, report.render_text());
    assert!(text.contains("Next player: O"));

    let json = report.render(true).unwrap();
    assert!(json.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["status_text"], "Next player: O");
    assert_eq!(value["cells"][4], "X");
}
