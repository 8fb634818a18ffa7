//! Evaluation routines for the defense drills.

use super::{scripted, Verdict};
use crate::board::{Board, Coordinate, Stone};
use crate::content::Text;

const OPPONENT_MADE_FOUR: Text = Text::new(
    "상대가 4를 만들었습니다! 한번 더 막아야 합니다.",
    "Opponent made 4! Block one more time.",
);

/// Open three: block one end, then block the extension on the other end.
///
/// Step 0 accepts either open end of the black row at (6..=8, 7); the
/// scripted reply extends the row to the opposite end, making a four.
/// Step 1 accepts whichever outer end of that four is still open.
pub(super) fn open_three(attempt: Coordinate, board: &Board, step: usize) -> Verdict {
    const LEFT: Coordinate = Coordinate::new(5, 7);
    const RIGHT: Coordinate = Coordinate::new(9, 7);
    const OUTER: [Coordinate; 2] = [Coordinate::new(4, 7), Coordinate::new(10, 7)];

    match step {
        0 if board.stone_count() == 3 => {
            if attempt != LEFT && attempt != RIGHT {
                return Verdict::Rejected { message: None };
            }
            let reply = if attempt == LEFT { RIGHT } else { LEFT };
            match scripted(board, attempt, Stone::White, Some(reply)) {
                Some(next) => Verdict::Accepted {
                    board: next,
                    complete: false,
                    message: Some(OPPONENT_MADE_FOUR),
                },
                None => Verdict::Rejected { message: None },
            }
        }
        1 if board.stone_count() == 5 => {
            if !OUTER.contains(&attempt) || !board.is_empty(attempt) {
                return Verdict::Rejected { message: None };
            }
            match scripted(board, attempt, Stone::White, None) {
                Some(next) => Verdict::Accepted {
                    board: next,
                    complete: true,
                    message: None,
                },
                None => Verdict::Rejected { message: None },
            }
        }
        _ => Verdict::Rejected { message: None },
    }
}

/// Open four: either end blocks it, and the scripted reply completes five
/// on the opposite end anyway. The lesson is that the block comes too late.
pub(super) fn open_four(attempt: Coordinate, board: &Board) -> Verdict {
    const LOW: Coordinate = Coordinate::new(4, 4);
    const HIGH: Coordinate = Coordinate::new(9, 9);

    if attempt != LOW && attempt != HIGH {
        return Verdict::Rejected { message: None };
    }
    let reply = if attempt == LOW { HIGH } else { LOW };
    match scripted(board, attempt, Stone::Black, Some(reply)) {
        Some(next) => Verdict::Accepted {
            board: next,
            complete: true,
            message: None,
        },
        None => Verdict::Rejected { message: None },
    }
}

/// Broken three: the tutorial forces the gap block at (7,8).
pub(super) fn broken_three(attempt: Coordinate, board: &Board) -> Verdict {
    const GAP: Coordinate = Coordinate::new(7, 8);

    if attempt != GAP {
        return Verdict::Rejected { message: None };
    }
    match scripted(board, attempt, Stone::White, None) {
        Some(next) => Verdict::Accepted {
            board: next,
            complete: true,
            message: None,
        },
        None => Verdict::Rejected { message: None },
    }
}
