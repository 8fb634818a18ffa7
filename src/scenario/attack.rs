//! Evaluation routines for the attack drills.

use super::{scripted, Verdict};
use crate::board::{Board, Coordinate, Stone};
use crate::content::Text;

const BLOCKED_AND_MADE_THREE: Text = Text::new(
    "상대를 막으면서 3을 만들었습니다!",
    "You blocked AND made a 3!",
);

const BLOCK_WITHOUT_THREAT: Text = Text::new(
    "수비는 되지만, 나의 공격 기회는 사라집니다.",
    "That blocks, but creates no threat for you.",
);

/// Block and attack: (5,6) cuts white's row and connects black's column.
///
/// The passive block at (9,6) is singled out with its own hint; any other
/// intersection rejects with the scenario's static failure text.
pub(super) fn block_and_attack(attempt: Coordinate, board: &Board) -> Verdict {
    const DOUBLE_PURPOSE: Coordinate = Coordinate::new(5, 6);
    const PASSIVE_BLOCK: Coordinate = Coordinate::new(9, 6);
    // White answers the new black three.
    const REPLY: Coordinate = Coordinate::new(5, 5);

    if attempt == PASSIVE_BLOCK {
        return Verdict::Rejected {
            message: Some(BLOCK_WITHOUT_THREAT),
        };
    }
    if attempt != DOUBLE_PURPOSE {
        return Verdict::Rejected { message: None };
    }
    match scripted(board, attempt, Stone::Black, Some(REPLY)) {
        Some(next) => Verdict::Accepted {
            board: next,
            complete: true,
            message: Some(BLOCKED_AND_MADE_THREE),
        },
        None => Verdict::Rejected { message: None },
    }
}

/// Four-three: (7,7) completes a vertical four and a horizontal open three
/// at once. The scripted white reply blocks the four at (7,8), leaving the
/// three unanswered.
pub(super) fn four_three(attempt: Coordinate, board: &Board) -> Verdict {
    const INTERSECTION: Coordinate = Coordinate::new(7, 7);
    const REPLY: Coordinate = Coordinate::new(7, 8);

    if attempt != INTERSECTION {
        return Verdict::Rejected { message: None };
    }
    match scripted(board, attempt, Stone::Black, Some(REPLY)) {
        Some(next) => Verdict::Accepted {
            board: next,
            complete: true,
            message: None,
        },
        None => Verdict::Rejected { message: None },
    }
}
