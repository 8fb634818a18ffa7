//! Tests for the quiz runner state machine.

use simple_omok::{Coordinate, QuizRunner, QuizStatus, ATTACK, DEFENSE};

#[test]
fn test_mounts_first_scenario_in_progress() {
    let runner = QuizRunner::new(&DEFENSE);
    assert_eq!(runner.status(), QuizStatus::InProgress);
    assert_eq!(runner.scenario_number(), 1);
    assert_eq!(runner.catalog_len(), 3);
    assert_eq!(*runner.board(), DEFENSE[0].initial_board());
    assert_eq!(runner.last_move(), None);
    assert!(runner.message().is_none());
}

#[test]
fn test_wrong_move_fails_without_touching_board() {
    let mut runner = QuizRunner::new(&DEFENSE);
    let before = *runner.board();

    runner.handle_click(Coordinate::new(0, 0));
    assert_eq!(runner.status(), QuizStatus::Failed);
    assert_eq!(*runner.board(), before);
    assert_eq!(runner.last_move(), None);
}

#[test]
fn test_clicks_ignored_while_failed() {
    let mut runner = QuizRunner::new(&DEFENSE);
    runner.handle_click(Coordinate::new(0, 0));
    assert_eq!(runner.status(), QuizStatus::Failed);

    // A correct coordinate must not be evaluated now.
    runner.handle_click(Coordinate::new(5, 7));
    assert_eq!(runner.status(), QuizStatus::Failed);
    assert_eq!(*runner.board(), DEFENSE[0].initial_board());
}

#[test]
fn test_reset_restores_original_snapshot() {
    let mut runner = QuizRunner::new(&DEFENSE);

    // Accept the first block, then fail; the reset must discard the
    // partial progress, not the board at time of failure.
    runner.handle_click(Coordinate::new(5, 7));
    assert_eq!(runner.status(), QuizStatus::InProgress);
    assert_eq!(runner.board().stone_count(), 5);

    runner.handle_click(Coordinate::new(3, 3));
    assert_eq!(runner.status(), QuizStatus::Failed);
    assert_eq!(runner.board().stone_count(), 5);

    runner.reset();
    assert_eq!(runner.status(), QuizStatus::InProgress);
    assert_eq!(*runner.board(), DEFENSE[0].initial_board());
    assert_eq!(runner.last_move(), None);
    assert!(runner.message().is_none());
}

#[test]
fn test_succeeded_exactly_when_rule_completes() {
    let mut runner = QuizRunner::new(&DEFENSE);

    runner.handle_click(Coordinate::new(5, 7));
    assert_eq!(runner.status(), QuizStatus::InProgress);
    assert!(runner.message().is_some());
    assert_eq!(runner.last_move(), Some(Coordinate::new(5, 7)));

    runner.handle_click(Coordinate::new(4, 7));
    assert_eq!(runner.status(), QuizStatus::Succeeded);
    assert_eq!(runner.last_move(), Some(Coordinate::new(4, 7)));
}

#[test]
fn test_clicks_ignored_while_succeeded() {
    let mut runner = QuizRunner::new(&DEFENSE);
    runner.handle_click(Coordinate::new(5, 7));
    runner.handle_click(Coordinate::new(4, 7));
    assert_eq!(runner.status(), QuizStatus::Succeeded);
    let before = *runner.board();

    runner.handle_click(Coordinate::new(10, 7));
    assert_eq!(*runner.board(), before);
    assert_eq!(runner.status(), QuizStatus::Succeeded);
}

#[test]
fn test_advance_requires_success() {
    let mut runner = QuizRunner::new(&DEFENSE);
    runner.advance();
    assert_eq!(runner.scenario_number(), 1);
    assert_eq!(runner.status(), QuizStatus::InProgress);
}

#[test]
fn test_full_defense_catalog_to_completion() {
    let mut runner = QuizRunner::new(&DEFENSE);

    // Open three: block both ends.
    runner.handle_click(Coordinate::new(5, 7));
    runner.handle_click(Coordinate::new(4, 7));
    assert_eq!(runner.status(), QuizStatus::Succeeded);
    runner.advance();
    assert_eq!(runner.scenario_number(), 2);
    assert_eq!(runner.status(), QuizStatus::InProgress);

    // Open four: block one end, watch the loss.
    runner.handle_click(Coordinate::new(9, 9));
    assert_eq!(runner.status(), QuizStatus::Succeeded);
    runner.advance();
    assert_eq!(runner.scenario_number(), 3);

    // Broken three: plug the gap.
    runner.handle_click(Coordinate::new(7, 8));
    assert_eq!(runner.status(), QuizStatus::Succeeded);
    runner.advance();
    assert_eq!(runner.status(), QuizStatus::CatalogComplete);
}

#[test]
fn test_restart_from_catalog_complete() {
    let mut runner = QuizRunner::new(&ATTACK);
    runner.handle_click(Coordinate::new(5, 6));
    runner.advance();
    runner.handle_click(Coordinate::new(7, 7));
    runner.advance();
    assert_eq!(runner.status(), QuizStatus::CatalogComplete);

    // Reset is inert here; restart returns to the first puzzle.
    runner.reset();
    assert_eq!(runner.status(), QuizStatus::CatalogComplete);

    runner.restart();
    assert_eq!(runner.status(), QuizStatus::InProgress);
    assert_eq!(runner.scenario_number(), 1);
    assert_eq!(*runner.board(), ATTACK[0].initial_board());
}

#[test]
fn test_attack_catalog_messages() {
    let mut runner = QuizRunner::new(&ATTACK);

    runner.handle_click(Coordinate::new(9, 6));
    assert_eq!(runner.status(), QuizStatus::Failed);
    // The passive block carries its own contextual hint.
    assert!(runner.message().is_some());

    runner.reset();
    runner.handle_click(Coordinate::new(5, 6));
    assert_eq!(runner.status(), QuizStatus::Succeeded);
    assert!(runner.message().is_some());
}
