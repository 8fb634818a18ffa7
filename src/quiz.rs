//! Quiz session state machine: one catalog, one puzzle at a time.

use crate::board::{Board, Coordinate};
use crate::content::Text;
use crate::scenario::{Scenario, Verdict};
use tracing::debug;

/// Progress of the active puzzle, or of the catalog as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStatus {
    /// Awaiting a move on the current puzzle.
    InProgress,
    /// Current puzzle solved; waiting for an explicit advance.
    Succeeded,
    /// Last move was wrong; waiting for an explicit reset.
    Failed,
    /// Every puzzle in the catalog has been solved.
    CatalogComplete,
}

/// Drives one scenario catalog through the puzzle/verdict cycle.
///
/// Holds the only mutable state in the system: the current scenario index,
/// the board snapshot, and the session status. The evaluation rule is never
/// invoked unless the status is [`QuizStatus::InProgress`].
#[derive(Debug)]
pub struct QuizRunner {
    catalog: &'static [Scenario],
    index: usize,
    board: Board,
    status: QuizStatus,
    step: usize,
    last_move: Option<Coordinate>,
    message: Option<Text>,
}

impl QuizRunner {
    /// Creates a runner mounted on the first scenario of `catalog`.
    pub fn new(catalog: &'static [Scenario]) -> Self {
        let mut runner = Self {
            catalog,
            index: 0,
            board: Board::standard(),
            status: QuizStatus::InProgress,
            step: 0,
            last_move: None,
            message: None,
        };
        runner.mount();
        runner
    }

    /// Returns the active scenario.
    pub fn current(&self) -> &Scenario {
        &self.catalog[self.index]
    }

    /// Returns the current board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the session status.
    pub fn status(&self) -> QuizStatus {
        self.status
    }

    /// Returns the last accepted coordinate, if any.
    pub fn last_move(&self) -> Option<Coordinate> {
        self.last_move
    }

    /// Returns the contextual message for the current step, if any.
    pub fn message(&self) -> Option<&Text> {
        self.message.as_ref()
    }

    /// Returns the 1-based number of the active scenario.
    pub fn scenario_number(&self) -> usize {
        self.index + 1
    }

    /// Returns the number of scenarios in the catalog.
    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    /// Forwards a clicked coordinate to the active scenario's rule.
    ///
    /// Ignored unless the puzzle is in progress. A rejected move freezes
    /// the board and marks the puzzle failed; an accepted move installs
    /// the verdict's snapshot and, when complete, marks it solved.
    pub fn handle_click(&mut self, coord: Coordinate) {
        if self.status != QuizStatus::InProgress {
            debug!(%coord, status = ?self.status, "Click ignored outside in-progress");
            return;
        }
        let scenario = self.catalog[self.index];
        match scenario.evaluate(coord, &self.board, self.step) {
            Verdict::Rejected { message } => {
                debug!(%coord, scenario = scenario.id, "Move rejected");
                self.status = QuizStatus::Failed;
                if message.is_some() {
                    self.message = message;
                }
            }
            Verdict::Accepted {
                board,
                complete,
                message,
            } => {
                debug!(%coord, scenario = scenario.id, complete, "Move accepted");
                self.board = board;
                self.last_move = Some(coord);
                self.message = message;
                self.step += 1;
                if complete {
                    self.status = QuizStatus::Succeeded;
                }
            }
        }
    }

    /// Restores the active scenario's original initial snapshot.
    ///
    /// Failure never preserves partial progress. Ignored once the catalog
    /// is complete; use [`QuizRunner::restart`] there.
    pub fn reset(&mut self) {
        if self.status == QuizStatus::CatalogComplete {
            return;
        }
        debug!(scenario = self.current().id, "Resetting scenario");
        self.mount();
    }

    /// Moves from a solved puzzle to the next one, or to catalog-complete
    /// when none remain. Ignored unless the puzzle is solved.
    pub fn advance(&mut self) {
        if self.status != QuizStatus::Succeeded {
            return;
        }
        if self.index + 1 < self.catalog.len() {
            self.index += 1;
            debug!(scenario = self.current().id, "Advancing to next scenario");
            self.mount();
        } else {
            debug!("Catalog complete");
            self.status = QuizStatus::CatalogComplete;
        }
    }

    /// Returns from catalog-complete to the first scenario.
    pub fn restart(&mut self) {
        if self.status != QuizStatus::CatalogComplete {
            return;
        }
        debug!("Restarting catalog");
        self.index = 0;
        self.mount();
    }

    fn mount(&mut self) {
        self.board = self.current().initial_board();
        self.status = QuizStatus::InProgress;
        self.step = 0;
        self.last_move = None;
        self.message = None;
    }
}
