//! Tests for board widget geometry and page-level input handling.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use simple_omok::tui::{board_rect, click_target, hit_test, intersection_point, move_cursor, App};
use simple_omok::{Board, Coordinate, Language, QuizStatus, Stone, MAX_SIZE};

#[test]
fn test_intersections_span_edge_to_edge() {
    let area = Rect::new(0, 0, 29, 15);
    assert_eq!(intersection_point(area, MAX_SIZE, Coordinate::new(0, 0)), (0, 0));
    assert_eq!(intersection_point(area, MAX_SIZE, Coordinate::new(14, 14)), (28, 14));
    assert_eq!(intersection_point(area, MAX_SIZE, Coordinate::new(7, 7)), (14, 7));
}

#[test]
fn test_proportional_mapping_with_offset_area() {
    let area = Rect::new(10, 5, 29, 15);
    assert_eq!(intersection_point(area, MAX_SIZE, Coordinate::new(0, 0)), (10, 5));
    assert_eq!(intersection_point(area, MAX_SIZE, Coordinate::new(14, 0)), (38, 5));
}

#[test]
fn test_hit_test_inverts_intersection_point() {
    let area = Rect::new(3, 2, 29, 15);
    for y in 0..MAX_SIZE {
        for x in 0..MAX_SIZE {
            let coord = Coordinate::new(x, y);
            let (sx, sy) = intersection_point(area, MAX_SIZE, coord);
            assert_eq!(hit_test(area, MAX_SIZE, sx, sy), Some(coord));
        }
    }
}

#[test]
fn test_hit_test_outside_area_is_none() {
    let area = Rect::new(10, 10, 29, 15);
    assert_eq!(hit_test(area, MAX_SIZE, 9, 10), None);
    assert_eq!(hit_test(area, MAX_SIZE, 50, 12), None);
    assert_eq!(hit_test(area, MAX_SIZE, 12, 40), None);
}

#[test]
fn test_board_rect_centers_grid() {
    let rect = board_rect(Rect::new(0, 0, 80, 24), MAX_SIZE);
    assert_eq!(rect.width, 29);
    assert_eq!(rect.height, 15);
    assert_eq!(rect.x, 25);
    assert_eq!(rect.y, 4);
}

#[test]
fn test_move_cursor_clamps_to_grid() {
    let mut cursor = Coordinate::new(0, 0);
    cursor = move_cursor(cursor, KeyCode::Left, MAX_SIZE);
    cursor = move_cursor(cursor, KeyCode::Up, MAX_SIZE);
    assert_eq!(cursor, Coordinate::new(0, 0));

    cursor = Coordinate::new(14, 14);
    cursor = move_cursor(cursor, KeyCode::Right, MAX_SIZE);
    cursor = move_cursor(cursor, KeyCode::Down, MAX_SIZE);
    assert_eq!(cursor, Coordinate::new(14, 14));

    cursor = move_cursor(cursor, KeyCode::Left, MAX_SIZE);
    assert_eq!(cursor, Coordinate::new(13, 14));
}

#[test]
fn test_click_target_filters_occupied() {
    let board = Board::from_stones(MAX_SIZE, &[(7, 7, Stone::Black)]);
    assert_eq!(click_target(&board, Coordinate::new(7, 7)), None);
    assert_eq!(
        click_target(&board, Coordinate::new(7, 8)),
        Some(Coordinate::new(7, 8))
    );
    // Off-grid positions are never targets.
    assert_eq!(click_target(&board, Coordinate::new(15, 0)), None);
}

#[test]
fn test_enter_on_occupied_intersection_is_noop() {
    let mut app = App::new(Language::En);
    app.handle_key(KeyCode::Tab);
    app.handle_key(KeyCode::Tab); // Defense section

    // The cursor starts on (7,7), which the first puzzle occupies.
    assert_eq!(app.cursor(), Coordinate::new(7, 7));
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.defense().status(), QuizStatus::InProgress);
    assert_eq!(app.defense().board().stone_count(), 3);
}

#[test]
fn test_keyboard_move_and_place() {
    let mut app = App::new(Language::En);
    app.handle_key(KeyCode::Tab);
    app.handle_key(KeyCode::Tab);

    app.handle_key(KeyCode::Left);
    app.handle_key(KeyCode::Left);
    assert_eq!(app.cursor(), Coordinate::new(5, 7));
    app.handle_key(KeyCode::Enter);

    assert_eq!(app.defense().status(), QuizStatus::InProgress);
    assert_eq!(app.defense().board().stone_count(), 5);
    assert_eq!(app.defense().last_move(), Some(Coordinate::new(5, 7)));
}

#[test]
fn test_language_toggle_changes_no_quiz_state() {
    let mut app = App::new(Language::En);
    app.handle_key(KeyCode::Tab);
    app.handle_key(KeyCode::Tab);
    app.handle_key(KeyCode::Left);
    app.handle_key(KeyCode::Left);
    app.handle_key(KeyCode::Enter);
    let defense_board = *app.defense().board();
    let attack_board = *app.attack().board();

    app.handle_key(KeyCode::Char('l'));
    assert_eq!(app.language(), Language::Ko);
    assert_eq!(*app.defense().board(), defense_board);
    assert_eq!(*app.attack().board(), attack_board);
    assert_eq!(app.defense().status(), QuizStatus::InProgress);

    app.handle_key(KeyCode::Char('l'));
    assert_eq!(app.language(), Language::En);
}

#[test]
fn test_runners_are_independent() {
    let mut app = App::new(Language::En);
    app.handle_key(KeyCode::Tab);
    app.handle_key(KeyCode::Tab);
    app.handle_key(KeyCode::Enter); // occupied, no-op
    app.handle_key(KeyCode::Down);
    app.handle_key(KeyCode::Enter); // wrong move on defense
    assert_eq!(app.defense().status(), QuizStatus::Failed);
    assert_eq!(app.attack().status(), QuizStatus::InProgress);
}
