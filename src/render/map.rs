//! 2D 地图渲染器
//!
//! 每个迷宫格占 `map_cell_width` 列、1 行。迷宫大于可用区域时，
//! 视口跟随探索者滚动。

use explorer::Direction;
use maze::Location;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::session::{FrameView, Level};

pub const WALL_GLYPH: char = '█';
pub const END_GLYPH: char = 'E';

/// 探索者朝向对应的符号
pub fn explorer_glyph(direction: Direction) -> char {
    match direction {
        Direction::North => '^',
        Direction::East => '>',
        Direction::South => 'v',
        Direction::West => '<',
    }
}

pub struct MapRenderer;

impl MapRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, view: &FrameView) {
        let Some(level) = &view.level else {
            return;
        };

        let block = Block::default()
            .title(format!(" Level {} ", level.index + 1))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(100, 100, 100)))
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            MapWidget {
                level,
                cell_width: view.map_cell_width.max(1),
            },
            inner,
        );
    }
}

/// 实际绘制迷宫的 Widget
pub struct MapWidget<'a> {
    pub level: &'a Level,
    pub cell_width: u16,
}

impl MapWidget<'_> {
    /// 视口左上角对应的迷宫格
    fn scroll_origin(&self, area: Rect) -> Location {
        let maze = &self.level.maze;
        let at = self.level.explorer.location();
        let visible_cols = (area.width / self.cell_width) as i32;
        let visible_rows = area.height as i32;
        Location::new(
            scroll_offset(at.row, visible_rows, maze.rows() as i32),
            scroll_offset(at.col, visible_cols, maze.cols() as i32),
        )
    }

    fn put(&self, buf: &mut Buffer, area: Rect, origin: Location, at: Location, glyph: char, style: Style) {
        let col = at.col - origin.col;
        let row = at.row - origin.row;
        if col < 0 || row < 0 {
            return;
        }
        let x = area.left() as i32 + col * self.cell_width as i32;
        let y = area.top() as i32 + row;
        if y >= area.bottom() as i32 {
            return;
        }
        for dx in 0..self.cell_width as i32 {
            let x = x + dx;
            if x >= area.right() as i32 {
                break;
            }
            buf[(x as u16, y as u16)].set_char(glyph).set_style(style);
        }
    }
}

/// 让 `position` 尽量居中，且不越过迷宫边缘
fn scroll_offset(position: i32, visible: i32, total: i32) -> i32 {
    if visible <= 0 || total <= visible {
        return 0;
    }
    (position - visible / 2).clamp(0, total - visible)
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for x in area.left()..area.right() {
            for y in area.top()..area.bottom() {
                buf[(x, y)].set_char(' ').set_bg(Color::Black);
            }
        }

        let origin = self.scroll_origin(area);
        let wall_style = Style::default().fg(Color::Gray).bg(Color::Black);
        for fill in self.level.maze.wall_fills(1) {
            let at = Location::new(fill.y as i32, fill.x as i32);
            self.put(buf, area, origin, at, WALL_GLYPH, wall_style);
        }

        let end = self.level.maze.end();
        self.put(
            buf,
            area,
            origin,
            end,
            END_GLYPH,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        );

        let explorer = &self.level.explorer;
        self.put(
            buf,
            area,
            origin,
            explorer.location(),
            explorer_glyph(explorer.direction()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        );
    }
}
