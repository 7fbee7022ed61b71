//! 菜单渲染器
//!
//! 主菜单、关卡选择、设置界面和暂停菜单。

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use super::centered_rect;
use crate::menu::Menu;
use crate::session::{FrameView, ViewMode};

pub const TITLE: &str = "MAZE EXPLORER";

pub struct MenuRenderer;

impl MenuRenderer {
    pub fn new() -> Self {
        Self
    }

    fn option_style(selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    /// 标题 + 内容 + 底部提示的三段布局
    fn layout(area: Rect) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(centered_rect(area, 50, 70));
        [chunks[0], chunks[1], chunks[2]]
    }

    fn render_title(frame: &mut Frame, area: Rect, subtitle: &str) {
        let title = Paragraph::new(TITLE)
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(subtitle.to_string())
                    .title_alignment(Alignment::Right)
                    .borders(Borders::ALL),
            );
        frame.render_widget(title, area);
    }

    fn render_hint(frame: &mut Frame, area: Rect, hint: &str, message: Option<&str>) {
        let mut lines = Vec::new();
        if let Some(message) = message {
            lines.push(Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::DarkGray),
        )));
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn vertical_list(menu: &Menu) -> List<'static> {
        let items: Vec<ListItem> = menu
            .options()
            .iter()
            .enumerate()
            .map(|(i, label)| {
                ListItem::new(Line::from(Span::styled(
                    format!("  {}  ", label),
                    Self::option_style(menu.is_selected(i)),
                )))
            })
            .collect();
        List::new(items).block(Block::default().borders(Borders::ALL))
    }

    pub fn render_main_menu(&self, frame: &mut Frame, area: Rect, view: &FrameView) {
        let [title, body, hint] = Self::layout(area);
        Self::render_title(frame, title, "Main Menu");
        frame.render_widget(Self::vertical_list(&view.main_menu), body);
        Self::render_hint(frame, hint, "↑↓ select  Enter confirm  q quit", view.message.as_deref());
    }

    /// 关卡横向排列，左右键切换
    pub fn render_level_select(&self, frame: &mut Frame, area: Rect, view: &FrameView, mode: ViewMode) {
        let [title, body, hint] = Self::layout(area);
        let subtitle = match mode {
            ViewMode::Map2D => "2D Maze",
            ViewMode::Corridor3D => "3D Maze",
        };
        Self::render_title(frame, title, subtitle);

        let mut spans = Vec::new();
        for (i, label) in view.level_menu.options().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(
                format!(" {} ", label),
                Self::option_style(view.level_menu.is_selected(i)),
            ));
        }
        let levels = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().title("Select Level").borders(Borders::ALL));
        frame.render_widget(levels, body);

        Self::render_hint(frame, hint, "←→ select  Enter play  Esc back", view.message.as_deref());
    }

    pub fn render_settings(&self, frame: &mut Frame, area: Rect, view: &FrameView) {
        let [title, body, hint] = Self::layout(area);
        Self::render_title(frame, title, "Settings");

        let line = Line::from(vec![
            Span::raw("Render distance  "),
            Span::styled(
                format!("◀ {} ▶", view.render_distance),
                Self::option_style(true),
            ),
            Span::styled(
                format!("  (1-{})", view.max_render_distance),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let settings = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(settings, body);

        Self::render_hint(frame, hint, "←→ adjust  Esc back", None);
    }

    /// 覆盖在游戏画面之上的暂停菜单
    pub fn render_pause_menu(&self, frame: &mut Frame, area: Rect, view: &FrameView) {
        let popup = centered_rect(area, 30, 30);
        frame.render_widget(Clear, popup);
        let list = Self::vertical_list(&view.pause_menu).block(
            Block::default()
                .title(" Paused ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(list, popup);
    }
}
