//! 结算画面

use std::time::Duration;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::centered_rect;
use crate::session::Outcome;

pub struct GameOverRenderer;

impl GameOverRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn banner(outcome: Outcome) -> (&'static str, Color) {
        match outcome {
            Outcome::Win => ("YOU WIN", Color::Green),
            Outcome::Loss => ("YOU LOSE", Color::Red),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, outcome: Outcome, remaining: Duration) {
        let (text, color) = Self::banner(outcome);

        let background = Paragraph::new("").style(Style::default().bg(Color::Black));
        frame.render_widget(background, area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Back to menu in {:.1}s", remaining.as_secs_f32()),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let panel = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(panel, centered_rect(area, 40, 40));
    }
}
