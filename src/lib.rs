//! Simple Omok — an interactive terminal tutorial for basic five in a row.
//!
//! The tutorial teaches the rules and first tactics of Omok (Gomoku)
//! through static illustration boards and scripted puzzle drills, in
//! Korean and English.
//!
//! # Architecture
//!
//! - **Board**: fixed-size intersection grid holding immutable snapshots
//! - **Content**: static bilingual string table
//! - **Scenario**: hand-authored puzzle catalogs with tagged evaluation rules
//! - **Quiz**: the scenario/move/verdict state machine driving one catalog
//! - **Tui**: ratatui page composition and the synchronous event loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod content;
mod quiz;
mod scenario;
pub mod tui;

// Crate-level exports - board model
pub use board::{Board, Coordinate, ParseCoordinateError, PlaceError, Stone, MAX_SIZE, SMALL_SIZE};

// Crate-level exports - localized content
pub use content::{Content, Language, Text, CONTENT};

// Crate-level exports - quiz state machine
pub use quiz::{QuizRunner, QuizStatus};

// Crate-level exports - scenario catalogs
pub use scenario::{evaluate, Scenario, ScenarioKind, Verdict, ATTACK, DEFENSE};
