//! Tests for the board model and its composite-key serialization.

use simple_omok::{Board, Coordinate, PlaceError, Stone, MAX_SIZE, SMALL_SIZE};

#[test]
fn test_coordinate_composite_key_roundtrip() {
    let coord = Coordinate::new(5, 7);
    assert_eq!(coord.to_string(), "5,7");
    assert_eq!("5,7".parse::<Coordinate>(), Ok(coord));
}

#[test]
fn test_coordinate_parse_rejects_garbage() {
    assert!("57".parse::<Coordinate>().is_err());
    assert!("a,7".parse::<Coordinate>().is_err());
    assert!("5,".parse::<Coordinate>().is_err());
}

#[test]
fn test_place_and_get() {
    let mut board = Board::standard();
    let coord = Coordinate::new(3, 4);
    assert!(board.is_empty(coord));

    board.place(coord, Stone::Black).expect("empty intersection");
    assert_eq!(board.get(coord), Some(Stone::Black));
    assert!(!board.is_empty(coord));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_occupied_intersection_never_overwritten() {
    let mut board = Board::standard();
    let coord = Coordinate::new(7, 7);
    board.place(coord, Stone::Black).unwrap();

    let err = board.place(coord, Stone::White);
    assert_eq!(err, Err(PlaceError::Occupied(coord)));
    // The original mark survives.
    assert_eq!(board.get(coord), Some(Stone::Black));
}

#[test]
fn test_out_of_range_rejected() {
    let mut board = Board::new(SMALL_SIZE);
    let coord = Coordinate::new(SMALL_SIZE, 0);
    assert_eq!(
        board.place(coord, Stone::Black),
        Err(PlaceError::OutOfRange(coord, SMALL_SIZE))
    );
    assert!(!board.is_empty(coord));
}

#[test]
fn test_with_returns_snapshot_and_leaves_original() {
    let board = Board::standard();
    let coord = Coordinate::new(2, 2);

    let next = board.with(coord, Stone::White).unwrap();
    assert_eq!(next.get(coord), Some(Stone::White));
    assert_eq!(board.get(coord), None);
    assert_eq!(board.stone_count(), 0);
}

#[test]
fn test_from_stones_drops_collisions_silently() {
    let board = Board::from_stones(MAX_SIZE, &[(1, 1, Stone::Black), (1, 1, Stone::White)]);
    assert_eq!(board.get(Coordinate::new(1, 1)), Some(Stone::Black));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_stones_iterates_occupied_intersections() {
    let board = Board::from_stones(
        MAX_SIZE,
        &[(6, 7, Stone::Black), (7, 7, Stone::Black), (5, 7, Stone::White)],
    );
    let stones: Vec<_> = board.stones().collect();
    assert_eq!(stones.len(), 3);
    assert!(stones.contains(&(Coordinate::new(5, 7), Stone::White)));
}

#[test]
fn test_board_serializes_with_composite_keys() {
    let board = Board::from_stones(MAX_SIZE, &[(5, 7, Stone::White), (9, 7, Stone::Black)]);
    let value = serde_json::to_value(board).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "5,7": "white", "9,7": "black" })
    );
}

#[test]
fn test_board_deserialize_roundtrip() {
    let board = Board::from_stones(MAX_SIZE, &[(0, 0, Stone::Black), (14, 14, Stone::White)]);
    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board);
}

#[test]
fn test_board_deserialize_rejects_malformed_key() {
    let result: Result<Board, _> = serde_json::from_str(r#"{"5;7":"white"}"#);
    assert!(result.is_err());
}
