use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::collections::HashSet;

use crate::game::{Phase, Position, RenderView};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, view: &RenderView<'_>, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(view, metrics), chunks[0]);

        match view.phase {
            Phase::Playing => {
                // Size the grid to the board, centered horizontally
                let cell_width = grid_cell_width(view.board.width(), chunks[1].width);
                let grid_width = board_columns(view.board.width())
                    .saturating_mul(cell_width)
                    .saturating_add(2);
                let grid_area = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Fill(1),
                        Constraint::Length(grid_width),
                        Constraint::Fill(1),
                    ])
                    .split(chunks[1])[1];
                frame.render_widget(self.render_grid(view, cell_width), grid_area);
            }
            Phase::Menu => {
                let menu_area = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([
                        Constraint::Percentage(10),
                        Constraint::Percentage(80),
                        Constraint::Percentage(10),
                    ])
                    .split(chunks[1])[1];
                frame.render_widget(self.render_menu(view, metrics), menu_area);
            }
        }

        frame.render_widget(self.render_controls(view.phase), chunks[2]);
    }

    fn render_grid(&self, view: &RenderView<'_>, cell_width: u16) -> Paragraph<'_> {
        let wide = cell_width > 1;
        let head = view.snake.head();
        let body: HashSet<Position> = view.snake.body_excluding_head().copied().collect();

        let lines: Vec<Line> = (0..view.board.height())
            .map(|y| {
                let spans: Vec<Span> = (0..view.board.width())
                    .map(|x| {
                        let pos = Position::new(x, y);
                        if pos == head {
                            Span::styled(
                                if wide { "■ " } else { "■" },
                                Style::default()
                                    .fg(Color::Cyan)
                                    .add_modifier(Modifier::BOLD),
                            )
                        } else if body.contains(&pos) {
                            Span::styled(
                                if wide { "□ " } else { "□" },
                                Style::default().fg(Color::Green),
                            )
                        } else if pos == view.apple {
                            Span::styled(
                                if wide { "O " } else { "O" },
                                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                            )
                        } else {
                            Span::styled(
                                if wide { ". " } else { "." },
                                Style::default().fg(Color::DarkGray),
                            )
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        // No walls on a torus, so the border is drawn plain
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, view: &RenderView<'_>, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                view.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_menu(&self, view: &RenderView<'_>, metrics: &GameMetrics) -> Paragraph<'_> {
        let mut text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "SNAKE",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
        ];

        if let Some(last) = view.last_score {
            text.push(Line::from(vec![
                Span::styled("Last Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    last.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("    "),
                Span::styled("Rounds: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    metrics.rounds_played.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]));
            text.push(Line::from(""));
        }

        text.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to start or ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Q",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ]));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn render_controls(&self, phase: Phase) -> Paragraph<'_> {
        let text = match phase {
            Phase::Playing => Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            Phase::Menu => Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::Cyan)),
                Span::raw(" to start | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        };

        Paragraph::new(vec![text]).alignment(Alignment::Center)
    }
}

fn board_columns(board_width: i32) -> u16 {
    u16::try_from(board_width).unwrap_or(u16::MAX)
}

/// Two terminal columns per cell keeps cells square; drop to one when the
/// bordered grid would not fit in `available` columns
fn grid_cell_width(board_width: i32, available: u16) -> u16 {
    let wide = board_columns(board_width).saturating_mul(2).saturating_add(2);
    if wide <= available { 2 } else { 1 }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
