use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameEngine, Position};
use crate::metrics::GameMetrics;

/// What occupies a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Empty,
    Food,
    Body,
    Head,
}

/// Snapshot of the board, top row first.
///
/// Board y grows upward, so row 0 of the snapshot is `y = height - 1`.
pub fn board_cells(engine: &GameEngine) -> Vec<Vec<CellKind>> {
    let height = engine.height();
    let mut rows = vec![vec![CellKind::Empty; engine.width()]; height];

    let mark = |rows: &mut Vec<Vec<CellKind>>, pos: Position, kind: CellKind| {
        let row = height - 1 - pos.y as usize;
        rows[row][pos.x as usize] = kind;
    };

    if let Some(food) = engine.food() {
        mark(&mut rows, food, CellKind::Food);
    }

    engine.for_each_segment(&mut rows, |rows, cell| mark(rows, cell, CellKind::Body));

    if engine.body_len() > 0 {
        mark(&mut rows, engine.head(), CellKind::Head);
    }

    rows
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, engine: &GameEngine, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_status(metrics), chunks[0]);

        if engine.is_started() {
            frame.render_widget(self.render_board(engine), chunks[1]);
        } else {
            frame.render_widget(self.render_game_over(metrics), chunks[1]);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_board(&self, engine: &GameEngine) -> Paragraph<'static> {
        let lines: Vec<Line> = board_cells(engine)
            .into_iter()
            .map(|row| Line::from(row.into_iter().map(cell_span).collect::<Vec<_>>()))
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Gray))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_status(&self, metrics: &GameMetrics) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("Round: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.round.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, metrics: &GameMetrics) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("Round {} lasted {}", metrics.round, metrics.format_time())),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled("R", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled("Q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" or "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_span(kind: CellKind) -> Span<'static> {
    match kind {
        CellKind::Head => Span::styled(
            "■ ",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        CellKind::Body => Span::styled("■ ", Style::default().fg(Color::Gray)),
        CellKind::Food => Span::styled(
            "● ",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        CellKind::Empty => Span::styled("· ", Style::default().fg(Color::DarkGray)),
    }
}
