//! Hand-authored puzzle scenarios and their evaluation rules.
//!
//! There is no general move-legality or five-in-a-row detector anywhere in
//! the tutorial. Each scenario enumerates the exact coordinates that count
//! as correct at each step and the scripted opponent reply, keyed by a
//! [`ScenarioKind`] tag dispatched to a pure evaluation routine.

mod attack;
mod defense;

use crate::board::{Board, Coordinate, Stone, MAX_SIZE};
use crate::content::Text;

/// Tag selecting a scenario's evaluation routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ScenarioKind {
    /// Block an open three on both ends, one end per step.
    OpenThree,
    /// Block an open four and watch the block fail.
    OpenFour,
    /// Plug the gap in a broken three.
    BrokenThree,
    /// Block the opponent's three while building your own.
    BlockAndAttack,
    /// Create a four and an open three with a single stone.
    FourThree,
}

/// One static puzzle: an initial position, the mover, and scripted feedback.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Stable identifier.
    pub id: &'static str,
    /// Evaluation dispatch tag.
    pub kind: ScenarioKind,
    /// Puzzle title.
    pub title: Text,
    /// Situation description shown above the board.
    pub description: Text,
    /// Stones on the board when the puzzle starts.
    pub initial_stones: &'static [(u8, u8, Stone)],
    /// Color the learner plays.
    pub to_move: Stone,
    /// Text shown when the puzzle is solved.
    pub success: Text,
    /// Text shown after a wrong move.
    pub failure: Text,
}

impl Scenario {
    /// Builds a fresh snapshot of the initial position.
    pub fn initial_board(&self) -> Board {
        Board::from_stones(MAX_SIZE, self.initial_stones)
    }

    /// Evaluates an attempted move against this scenario's rule.
    ///
    /// `step` counts the moves already accepted within the scenario.
    pub fn evaluate(&self, attempt: Coordinate, board: &Board, step: usize) -> Verdict {
        evaluate(self.kind, attempt, board, step)
    }
}

/// Outcome of evaluating one attempted move.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// The attempt is not in the accepted set; the board is unchanged.
    Rejected {
        /// Optional contextual hint for this particular wrong move.
        message: Option<Text>,
    },
    /// The attempt is correct.
    Accepted {
        /// New snapshot holding the learner's stone and, for multi-step
        /// scenarios, the scripted opponent reply.
        board: Board,
        /// Whether the scenario is now solved.
        complete: bool,
        /// Optional contextual message describing what just happened.
        message: Option<Text>,
    },
}

/// Dispatches an attempted move to the evaluation routine for `kind`.
///
/// Pure function of the attempt, the snapshot before the attempt, and the
/// number of moves already accepted within the scenario.
pub fn evaluate(kind: ScenarioKind, attempt: Coordinate, board: &Board, step: usize) -> Verdict {
    match kind {
        ScenarioKind::OpenThree => defense::open_three(attempt, board, step),
        ScenarioKind::OpenFour => defense::open_four(attempt, board),
        ScenarioKind::BrokenThree => defense::broken_three(attempt, board),
        ScenarioKind::BlockAndAttack => attack::block_and_attack(attempt, board),
        ScenarioKind::FourThree => attack::four_three(attempt, board),
    }
}

/// Applies the learner's stone and an optional scripted opponent reply,
/// returning the combined snapshot. `None` if the attempt itself cannot
/// be placed.
fn scripted(
    board: &Board,
    attempt: Coordinate,
    mover: Stone,
    reply: Option<Coordinate>,
) -> Option<Board> {
    let mut next = board.with(attempt, mover).ok()?;
    if let Some(coord) = reply {
        // A scripted reply landing on an occupied intersection is an
        // authoring defect; it is skipped rather than reported.
        next = next.with(coord, mover.opponent()).unwrap_or(next);
    }
    Some(next)
}

/// The defense drill catalog, in presentation order.
pub const DEFENSE: [Scenario; 3] = [
    Scenario {
        id: "open-3",
        kind: ScenarioKind::OpenThree,
        title: Text::new("열린 3 (Open 3)", "The Open Three"),
        description: Text::new(
            "양쪽이 뚫린 3입니다. 한쪽을 막아도 상대가 반대쪽으로 늘리면 4가 됩니다. 끝까지 방어해야 합니다!",
            "Three stones with both ends open. If you block one side, they extend to the other. You must keep blocking!",
        ),
        initial_stones: &[(6, 7, Stone::Black), (7, 7, Stone::Black), (8, 7, Stone::Black)],
        to_move: Stone::White,
        success: Text::new(
            "완벽합니다! 이것이 기본적인 연속 방어 패턴입니다.",
            "Perfect! This is the standard defense pattern.",
        ),
        failure: Text::new(
            "위험해요! 뚫린 곳을 막아야 합니다.",
            "Dangerous! You must block the open ends.",
        ),
    },
    Scenario {
        id: "four",
        kind: ScenarioKind::OpenFour,
        title: Text::new("4 (Four)", "The Deadly Four"),
        description: Text::new(
            "양쪽이 뚫린 4(Open 4)입니다. 이것을 허용하면 막아도 지게 됩니다. 왜 그런지 확인해보세요.",
            "This is an Open 4 (both ends open). If allowed, you lose even if you block. See why.",
        ),
        initial_stones: &[
            (5, 5, Stone::White),
            (6, 6, Stone::White),
            (7, 7, Stone::White),
            (8, 8, Stone::White),
            // Distraction
            (5, 3, Stone::Black),
        ],
        to_move: Stone::Black,
        success: Text::new(
            "보셨나요? 양쪽이 뚫린 4가 만들어지면 이미 늦습니다. 절대 허용하면 안 됩니다.",
            "See that? Once an Open 4 is formed, it's too late. Never let this happen.",
        ),
        failure: Text::new("4를 막아야 합니다!", "You must block the 4!"),
    },
    Scenario {
        id: "broken-3",
        kind: ScenarioKind::BrokenThree,
        title: Text::new("한 칸 띈 3 (Broken Three)", "The Broken Three"),
        description: Text::new(
            "중간이 비어있지만, 이 역시 강력한 공격입니다. 사이를 끼워 막는 것이 가장 좋습니다.",
            "There is a gap, but this is still a strong attack. Blocking the gap is usually best.",
        ),
        // Gap at 7,8
        initial_stones: &[(5, 8, Stone::Black), (6, 8, Stone::Black), (8, 8, Stone::Black)],
        to_move: Stone::White,
        success: Text::new("좋아요. 상대의 흐름을 끊었습니다.", "Nice. You disrupted their flow."),
        failure: Text::new("거기는 막는 곳이 아닙니다.", "That's not a blocking move."),
    },
];

/// The attack drill catalog, in presentation order.
pub const ATTACK: [Scenario; 2] = [
    Scenario {
        id: "block-and-attack",
        kind: ScenarioKind::BlockAndAttack,
        title: Text::new("1. 수비하며 공격하기 (공방일체)", "1. Defend while Attacking"),
        description: Text::new(
            "가장 효율적인 수입니다. 상대의 3을 막으면서, 동시에 나의 3을 만들어보세요.",
            "Efficiency is key. Block your opponent's 3 AND create your own 3 with a single move.",
        ),
        initial_stones: &[
            // White's horizontal open three, threats at 5,6 and 9,6
            (6, 6, Stone::White),
            (7, 6, Stone::White),
            (8, 6, Stone::White),
            // Black's vertical two waiting for a connection
            (5, 7, Stone::Black),
            (5, 8, Stone::Black),
        ],
        to_move: Stone::Black,
        success: Text::new(
            "완벽합니다! 상대의 공격은 끊기고, 이제 당신의 차례입니다.",
            "Perfect! You stopped them and started your own attack.",
        ),
        failure: Text::new(
            "상대를 막긴 했지만, 나의 공격이 이어지지 않습니다. 더 좋은 자리가 있습니다.",
            "You blocked them, but didn't create a threat. Find a better spot.",
        ),
    },
    Scenario {
        id: "four-three",
        kind: ScenarioKind::FourThree,
        title: Text::new("2. 4-3 (양수겸장)", "2. The 4-3 Double Threat"),
        description: Text::new(
            "오목 최고의 기술입니다. 한 수로 '4'와 '열린 3'을 동시에 만들어보세요. 상대는 둘 중 하나밖에 못 막습니다.",
            "The best move in Gomoku. Create a '4' and an 'Open 3' at the same time. They can only block one.",
        ),
        initial_stones: &[
            // Vertical three, a stone at 7,7 makes it four
            (7, 4, Stone::Black),
            (7, 5, Stone::Black),
            (7, 6, Stone::Black),
            // Horizontal two, a stone at 7,7 makes it an open three
            (5, 7, Stone::Black),
            (6, 7, Stone::Black),
            // White distraction
            (2, 2, Stone::White),
            (3, 2, Stone::White),
        ],
        to_move: Stone::Black,
        success: Text::new(
            "완벽한 승리입니다! 상대가 4를 막으면 3을 늘려서 이길 수 있습니다.",
            "Checkmate! If they block the 4, you extend the 3 to win.",
        ),
        failure: Text::new(
            "두 가지 공격이 동시에 만들어지는 곳을 찾아보세요.",
            "Find the spot that creates TWO threats at once.",
        ),
    },
];
