//! HUD 渲染器
//!
//! ```text
//! | Level N | HP ♥♥♥ | Facing EAST | (row, col) | 按键提示 |
//! ```

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::session::FrameView;

/// 超过这个数量就改为显示数字
const MAX_HEARTS: u32 = 10;

fn health_text(health: u32) -> String {
    if health <= MAX_HEARTS {
        format!("HP {}", "♥".repeat(health as usize))
    } else {
        format!("HP ♥x{}", health)
    }
}

pub struct HudRenderer;

impl HudRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn status_line(view: &FrameView) -> Option<Line<'static>> {
        let level = view.level.as_ref()?;
        let explorer = &level.explorer;
        let at = explorer.location();
        let health_color = if explorer.health() <= 1 {
            Color::Red
        } else {
            Color::Green
        };
        let sep = || Span::styled(" | ", Style::default().fg(Color::DarkGray));

        Some(Line::from(vec![
            Span::styled(
                format!("Level {}", level.index + 1),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            sep(),
            Span::styled(
                health_text(explorer.health()),
                Style::default().fg(health_color),
            ),
            sep(),
            Span::raw(format!("Facing {}", explorer.direction())),
            sep(),
            Span::raw(format!("({}, {})", at.row, at.col)),
            sep(),
            Span::styled(
                "↑ move  ←→ turn  Esc pause",
                Style::default().fg(Color::DarkGray),
            ),
        ]))
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, view: &FrameView) {
        let Some(line) = Self::status_line(view) else {
            return;
        };
        let hud = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(hud, area);
    }
}
