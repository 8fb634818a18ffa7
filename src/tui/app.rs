//! Application state: language, active section, and the two quiz runners.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

use super::{board_view, input};
use crate::board::{Coordinate, MAX_SIZE};
use crate::content::Language;
use crate::quiz::{QuizRunner, QuizStatus};
use crate::scenario::{ATTACK, DEFENSE};

/// Tutorial page sections, shown one at a time as tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Basic rules with the demo board.
    Basics,
    /// Win-condition illustrations.
    Winning,
    /// Defense drill quiz.
    Defense,
    /// Attack drill quiz.
    Attack,
}

impl Section {
    const ORDER: [Section; 4] = [
        Section::Basics,
        Section::Winning,
        Section::Defense,
        Section::Attack,
    ];

    /// Tab position of this section.
    pub fn index(self) -> usize {
        Self::ORDER.iter().position(|s| *s == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Top-level state for the page.
///
/// The language selection lives here as a plain value handed to every
/// render call; the two runners are fully independent sessions.
pub struct App {
    language: Language,
    section: Section,
    defense: QuizRunner,
    attack: QuizRunner,
    cursor: Coordinate,
    quiz_area: Option<Rect>,
    should_quit: bool,
}

impl App {
    /// Creates the page with both catalogs mounted on their first puzzle.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            section: Section::Basics,
            defense: QuizRunner::new(&DEFENSE),
            attack: QuizRunner::new(&ATTACK),
            cursor: Coordinate::new(7, 7),
            quiz_area: None,
            should_quit: false,
        }
    }

    /// Returns the active display language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the active section.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Returns the defense catalog runner.
    pub fn defense(&self) -> &QuizRunner {
        &self.defense
    }

    /// Returns the attack catalog runner.
    pub fn attack(&self) -> &QuizRunner {
        &self.attack
    }

    /// Returns the board cursor.
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// Whether the event loop should exit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runner shown by the active section, if it has one.
    pub fn active_runner(&self) -> Option<&QuizRunner> {
        match self.section {
            Section::Defense => Some(&self.defense),
            Section::Attack => Some(&self.attack),
            _ => None,
        }
    }

    fn active_runner_mut(&mut self) -> Option<&mut QuizRunner> {
        match self.section {
            Section::Defense => Some(&mut self.defense),
            Section::Attack => Some(&mut self.attack),
            _ => None,
        }
    }

    /// Records where the active quiz board was drawn, for mouse hit-tests.
    pub(super) fn set_quiz_area(&mut self, area: Option<Rect>) {
        self.quiz_area = area;
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('l') => {
                self.language = self.language.toggled();
                debug!(language = %self.language, "Language toggled");
            }
            KeyCode::Tab => self.section = self.section.next(),
            KeyCode::BackTab => self.section = self.section.previous(),
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                if self
                    .active_runner()
                    .is_some_and(|r| r.status() == QuizStatus::InProgress)
                {
                    self.cursor = input::move_cursor(self.cursor, key, MAX_SIZE);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let cursor = self.cursor;
                if let Some(runner) = self.active_runner_mut() {
                    if runner.status() == QuizStatus::InProgress {
                        if let Some(coord) = input::click_target(runner.board(), cursor) {
                            runner.handle_click(coord);
                        }
                    }
                }
            }
            KeyCode::Char('r') => {
                if let Some(runner) = self.active_runner_mut() {
                    match runner.status() {
                        QuizStatus::CatalogComplete => runner.restart(),
                        _ => runner.reset(),
                    }
                }
            }
            KeyCode::Char('n') => {
                if let Some(runner) = self.active_runner_mut() {
                    runner.advance();
                }
            }
            _ => {}
        }
    }

    /// Handles one mouse event: a left click on an empty intersection of
    /// the active quiz board becomes a move attempt.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(area) = self.quiz_area else {
            return;
        };
        let Some(runner) = self.active_runner() else {
            return;
        };
        if runner.status() != QuizStatus::InProgress {
            return;
        }
        let size = runner.board().size();
        let Some(coord) = board_view::hit_test(area, size, mouse.column, mouse.row) else {
            return;
        };
        let Some(coord) = input::click_target(runner.board(), coord) else {
            return;
        };
        self.cursor = coord;
        if let Some(runner) = self.active_runner_mut() {
            runner.handle_click(coord);
        }
    }
}
