//! Static bilingual display text for the tutorial page.

use serde::{Deserialize, Serialize};

/// Display language for every string on the page.
///
/// Threaded explicitly through render calls; nothing holds it globally.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    /// Korean.
    Ko,
    /// English.
    En,
}

impl Language {
    /// Returns the other language.
    pub fn toggled(self) -> Self {
        match self {
            Language::Ko => Language::En,
            Language::En => Language::Ko,
        }
    }
}

/// A string pair carrying both translations of one display text.
///
/// Pairing the translations structurally guarantees that every string
/// used anywhere has an entry under both language tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    /// Korean rendering.
    pub ko: &'static str,
    /// English rendering.
    pub en: &'static str,
}

impl Text {
    /// Creates a bilingual pair.
    pub const fn new(ko: &'static str, en: &'static str) -> Self {
        Self { ko, en }
    }

    /// Selects the rendering for a language.
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Ko => self.ko,
            Language::En => self.en,
        }
    }
}

/// Every fixed display string used by the page, in both languages.
#[derive(Debug, Clone, Copy)]
pub struct Content {
    /// Page title.
    pub title: Text,
    /// Page subtitle.
    pub subtitle: Text,
    /// Heading of the basic-rules section.
    pub basics_title: Text,
    /// Rule 1: stones go on intersections, turns alternate.
    pub basics1: Text,
    /// Rule 2: black moves first.
    pub basics2: Text,
    /// Rule 3: five in a row wins.
    pub basics3: Text,
    /// Caption under the basics demo board.
    pub basics_caption: Text,
    /// Heading of the win-condition section.
    pub win_title: Text,
    /// Description of the win condition.
    pub win_desc: Text,
    /// Label for the horizontal five illustration.
    pub win_horizontal: Text,
    /// Label for the vertical five illustration.
    pub win_vertical: Text,
    /// Label for the diagonal five illustration.
    pub win_diagonal: Text,
    /// Heading of the defense section.
    pub defense_title: Text,
    /// Description of the defense section.
    pub defense_desc: Text,
    /// Heading of the attack section.
    pub attack_title: Text,
    /// Description of the attack section.
    pub attack_desc: Text,
    /// Prompt shown while a puzzle awaits a move.
    pub try_it_out: Text,
    /// Label when black is to move.
    pub black_turn: Text,
    /// Label when white is to move.
    pub white_turn: Text,
    /// Reset button label.
    pub reset: Text,
    /// Next-puzzle button label.
    pub next: Text,
    /// Verdict label for a correct move.
    pub correct: Text,
    /// Verdict label for a wrong move.
    pub wrong: Text,
    /// Page footer line.
    pub footer: Text,
    /// Heading of the catalog-complete panel.
    pub quiz_complete_title: Text,
    /// Body of the catalog-complete panel.
    pub quiz_complete_desc: Text,
    /// Restart-catalog button label.
    pub retry_quiz: Text,
    /// Language-toggle label, naming the *other* language.
    pub toggle_language: Text,
    /// Key binding summary for the footer bar.
    pub key_hints: Text,
}

/// The content table. Two locales, one entry per string, nothing optional.
pub const CONTENT: Content = Content {
    title: Text::new("가장 쉬운 오목 가이드", "Simple Omok Guide"),
    subtitle: Text::new(
        "복잡한 규칙은 빼고, 누구나 즐길 수 있는 기본 오목을 배워보세요.",
        "Learn the simplest version of Omok (Five in a Row) without complex rules.",
    ),
    basics_title: Text::new("기본 규칙", "Basic Rules"),
    basics1: Text::new(
        "1. 흑과 백이 번갈아 가며 바둑판의 선이 교차하는 점에 돌을 놓습니다.",
        "1. Black and White take turns placing stones on the intersections.",
    ),
    basics2: Text::new("2. 흑이 먼저 시작합니다.", "2. Black always moves first."),
    basics3: Text::new(
        "3. 가로, 세로, 대각선 어느 방향이든 같은 색 돌 5개를 먼저 나란히 만들면 승리합니다.",
        "3. The first player to get 5 stones in a row (horizontal, vertical, or diagonal) wins.",
    ),
    basics_caption: Text::new("교차점에 돌을 놓습니다.", "Stones are placed on intersections."),
    win_title: Text::new("승리 조건: 오목(5목)", "Victory: Five in a Row"),
    win_desc: Text::new(
        "아래 예시처럼 5개의 돌이 이어지면 게임이 끝납니다.",
        "If you connect 5 stones like the examples below, you win immediately.",
    ),
    win_horizontal: Text::new("가로 (Horizontal)", "Horizontal"),
    win_vertical: Text::new("세로 (Vertical)", "Vertical"),
    win_diagonal: Text::new("대각선 (Diagonal)", "Diagonal"),
    defense_title: Text::new("필수 방어 전략", "Essential Defense"),
    defense_desc: Text::new(
        "상대방이 이기지 못하게 막는 것이 공격만큼 중요합니다. 다음 상황들은 반드시 막아야 합니다.",
        "Blocking your opponent is as important as attacking. You must recognize these threats.",
    ),
    attack_title: Text::new("승리를 위한 공격 패턴", "Winning Strategies"),
    attack_desc: Text::new(
        "무조건 막기만 해서는 이길 수 없습니다. 주도권을 가져오는 공격 방법을 단계별로 배워보세요.",
        "You can't win by just blocking. Learn step-by-step how to take the initiative.",
    ),
    try_it_out: Text::new("직접 둬보세요!", "Make a move!"),
    black_turn: Text::new("흑 차례", "Black's Turn"),
    white_turn: Text::new("백 차례", "White's Turn"),
    reset: Text::new("다시 하기", "Reset"),
    next: Text::new("다음 문제", "Next Puzzle"),
    correct: Text::new("좋아요!", "Good!"),
    wrong: Text::new("거기가 아닙니다.", "Not quite."),
    footer: Text::new(
        "이제 친구와 함께 오목을 즐겨보세요!",
        "Now you are ready to play with friends!",
    ),
    quiz_complete_title: Text::new("모든 퀴즈를 풀었습니다!", "All Quizzes Completed!"),
    quiz_complete_desc: Text::new(
        "이제 아주 기초적인 오목을 둘 준비가 되었습니다.",
        "You are now ready to play basic Gomoku.",
    ),
    retry_quiz: Text::new("퀴즈 다시 풀어보기", "Retry Quizzes"),
    toggle_language: Text::new("English", "한국어"),
    key_hints: Text::new(
        "←↑↓→ 이동 · Enter 착수 · r 다시 · n 다음 · l 언어 · Tab 섹션 · q 종료",
        "←↑↓→ move · Enter place · r reset · n next · l language · Tab section · q quit",
    ),
};
