//! Stateless page rendering: header, section tabs, bodies, and footer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use super::app::{App, Section};
use super::board_view::{board_rect, render_board, BoardView};
use crate::board::{Board, Coordinate, Stone, MAX_SIZE, SMALL_SIZE};
use crate::content::{Language, CONTENT};
use crate::quiz::{QuizRunner, QuizStatus};

/// Stones on the basics demo board: black's first three moves answered
/// by white, as on the original page.
const DEMO_STONES: [(u8, u8, Stone); 5] = [
    (7, 7, Stone::Black),
    (7, 8, Stone::White),
    (8, 7, Stone::Black),
    (6, 6, Stone::White),
    (6, 8, Stone::Black),
];

const DEMO_HIGHLIGHTS: [Coordinate; 3] = [
    Coordinate::new(7, 7),
    Coordinate::new(7, 8),
    Coordinate::new(8, 7),
];

/// Renders the whole page for one frame.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let language = app.language();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + subtitle
            Constraint::Length(1), // Section tabs
            Constraint::Min(12),   // Section body
            Constraint::Length(2), // Footer
        ])
        .split(area);

    draw_header(frame, chunks[0], language);
    draw_tabs(frame, chunks[1], language, app.section());

    app.set_quiz_area(None);
    match app.section() {
        Section::Basics => draw_basics(frame, chunks[2], language),
        Section::Winning => draw_winning(frame, chunks[2], language),
        Section::Defense => {
            let board = draw_quiz(frame, chunks[2], language, app.defense(), app.cursor());
            app.set_quiz_area(board);
        }
        Section::Attack => {
            let board = draw_quiz(frame, chunks[2], language, app.attack(), app.cursor());
            app.set_quiz_area(board);
        }
    }

    draw_footer(frame, chunks[3], language);
}

fn draw_header(frame: &mut Frame, area: Rect, language: Language) {
    let lines = vec![
        Line::from(Span::styled(
            CONTENT.title.get(language),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            CONTENT.subtitle.get(language),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_tabs(frame: &mut Frame, area: Rect, language: Language, section: Section) {
    let titles = [
        CONTENT.basics_title.get(language),
        CONTENT.win_title.get(language),
        CONTENT.defense_title.get(language),
        CONTENT.attack_title.get(language),
    ];
    let tabs = Tabs::new(titles.to_vec())
        .select(section.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

fn draw_basics(frame: &mut Frame, area: Rect, language: Language) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(36)])
        .split(area);

    let rules = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(columns[0]);
    for (chunk, text) in rules
        .iter()
        .zip([CONTENT.basics1, CONTENT.basics2, CONTENT.basics3])
    {
        let card = Paragraph::new(text.get(language))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(card, *chunk);
    }

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MAX_SIZE as u16), Constraint::Length(1)])
        .split(columns[1]);

    let demo = Board::from_stones(MAX_SIZE, &DEMO_STONES);
    let view = BoardView {
        highlights: &DEMO_HIGHLIGHTS,
        ..BoardView::read_only(&demo)
    };
    render_board(frame, board_rect(right[0], MAX_SIZE), &view);

    let caption = Paragraph::new(CONTENT.basics_caption.get(language))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(caption, right[1]);
}

fn draw_winning(frame: &mut Frame, area: Rect, language: Language) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(SMALL_SIZE as u16 + 1)])
        .split(area);

    let desc = Paragraph::new(CONTENT.win_desc.get(language))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);
    frame.render_widget(desc, rows[0]);

    let examples: [(&[(u8, u8, Stone)], [Coordinate; 2], &str); 3] = [
        (
            &[
                (2, 4, Stone::Black),
                (3, 4, Stone::Black),
                (4, 4, Stone::Black),
                (5, 4, Stone::Black),
                (6, 4, Stone::Black),
            ],
            [Coordinate::new(2, 4), Coordinate::new(6, 4)],
            CONTENT.win_horizontal.get(language),
        ),
        (
            &[
                (4, 2, Stone::White),
                (4, 3, Stone::White),
                (4, 4, Stone::White),
                (4, 5, Stone::White),
                (4, 6, Stone::White),
            ],
            [Coordinate::new(4, 2), Coordinate::new(4, 6)],
            CONTENT.win_vertical.get(language),
        ),
        (
            &[
                (2, 2, Stone::Black),
                (3, 3, Stone::Black),
                (4, 4, Stone::Black),
                (5, 5, Stone::Black),
                (6, 6, Stone::Black),
            ],
            [Coordinate::new(2, 2), Coordinate::new(6, 6)],
            CONTENT.win_diagonal.get(language),
        ),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(rows[1]);

    for (column, (stones, highlights, label)) in columns.iter().zip(examples) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(SMALL_SIZE as u16), Constraint::Length(1)])
            .split(*column);

        let board = Board::from_stones(SMALL_SIZE, stones);
        let view = BoardView {
            highlights: &highlights,
            ..BoardView::read_only(&board)
        };
        render_board(frame, board_rect(parts[0], SMALL_SIZE), &view);

        let label = Paragraph::new(label)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(label, parts[1]);
    }
}

/// Renders one quiz section and returns the board area drawn, if any,
/// so mouse clicks can be hit-tested against it.
fn draw_quiz(
    frame: &mut Frame,
    area: Rect,
    language: Language,
    runner: &QuizRunner,
    cursor: Coordinate,
) -> Option<Rect> {
    if runner.status() == QuizStatus::CatalogComplete {
        draw_catalog_complete(frame, area, language);
        return None;
    }

    let scenario = runner.current();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),                  // Puzzle header
            Constraint::Length(1),                  // Turn prompt
            Constraint::Min(MAX_SIZE as u16),       // Board
            Constraint::Length(2),                  // Verdict feedback
        ])
        .split(area);

    // Contextual step messages replace the description, as on the web page.
    let body = match runner.message() {
        Some(message) => message.get(language),
        None => scenario.description.get(language),
    };
    let header = vec![
        Line::from(Span::styled(
            format!("Puzzle {} / {}", runner.scenario_number(), runner.catalog_len()),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(
            scenario.title.get(language),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(body),
    ];
    frame.render_widget(
        Paragraph::new(header)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center),
        chunks[0],
    );

    if runner.status() == QuizStatus::InProgress {
        let turn = match scenario.to_move {
            Stone::Black => CONTENT.black_turn.get(language),
            Stone::White => CONTENT.white_turn.get(language),
        };
        let prompt = Paragraph::new(format!("{} ({})", CONTENT.try_it_out.get(language), turn))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        frame.render_widget(prompt, chunks[1]);
    }

    let interactive = runner.status() == QuizStatus::InProgress;
    let board_area = board_rect(chunks[2], runner.board().size());
    let view = BoardView {
        board: runner.board(),
        interactive,
        cursor: interactive.then_some(cursor),
        last_move: runner.last_move(),
        highlights: &[],
    };
    render_board(frame, board_area, &view);

    let feedback = match runner.status() {
        QuizStatus::Succeeded => vec![
            Line::from(Span::styled(
                format!("✔ {}", CONTENT.correct.get(language)),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "{}  —  [n] {}",
                    scenario.success.get(language),
                    CONTENT.next.get(language)
                ),
                Style::default().fg(Color::Green),
            )),
        ],
        QuizStatus::Failed => vec![
            Line::from(Span::styled(
                format!("✘ {}", CONTENT.wrong.get(language)),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "{}  —  [r] {}",
                    scenario.failure.get(language),
                    CONTENT.reset.get(language)
                ),
                Style::default().fg(Color::Red),
            )),
        ],
        _ => Vec::new(),
    };
    frame.render_widget(
        Paragraph::new(feedback).alignment(Alignment::Center),
        chunks[3],
    );

    Some(board_area)
}

fn draw_catalog_complete(frame: &mut Frame, area: Rect, language: Language) {
    let panel = center_rect(area, 60, 6);
    let lines = vec![
        Line::from(Span::styled(
            CONTENT.quiz_complete_title.get(language),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(CONTENT.quiz_complete_desc.get(language)),
        Line::from(""),
        Line::from(Span::styled(
            format!("[r] {}", CONTENT.retry_quiz.get(language)),
            Style::default().fg(Color::Yellow),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, panel);
}

fn draw_footer(frame: &mut Frame, area: Rect, language: Language) {
    let lines = vec![
        Line::from(CONTENT.footer.get(language)),
        Line::from(Span::styled(
            format!(
                "{} · [l] {}",
                CONTENT.key_hints.get(language),
                CONTENT.toggle_language.get(language)
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vertical[1])[1]
}
