//! 3D 走廊渲染器
//!
//! 把投影得到的多边形按绘制顺序光栅化到终端格子上。每个格子用上半块
//! 字符 `▀` 表示两个纵向像素：前景色是上半像素，背景色是下半像素。
//! 同一像素被多个多边形覆盖时，后绘制的胜出。

use projection::{Color as WallColor, WallSegment};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::session::FrameView;

pub const HALF_BLOCK: &str = "▀";

pub struct CorridorRenderer;

impl CorridorRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, view: &FrameView) {
        let title = match &view.level {
            Some(level) => format!(" Level {} - facing {} ", level.index + 1, level.explorer.direction()),
            None => String::new(),
        };
        let block = Block::default()
            .title(title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(100, 100, 100)))
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            CorridorWidget {
                walls: &view.walls,
                viewport: view.viewport,
            },
            inner,
        );
    }
}

/// 光栅化墙面的 Widget
pub struct CorridorWidget<'a> {
    /// 按绘制顺序排列
    pub walls: &'a [WallSegment],
    /// 投影坐标系的宽高
    pub viewport: (i32, i32),
}

impl CorridorWidget<'_> {
    /// 投影坐标 `(x, y)` 处最终可见的颜色
    pub fn sample(&self, x: f64, y: f64) -> Option<WallColor> {
        self.walls
            .iter()
            .rev()
            .find(|wall| wall.polygon.contains(x, y))
            .map(|wall| wall.color)
    }

    fn pixel(&self, area: Rect, column: u16, pixel_row: u16) -> Color {
        let (width, height) = self.viewport;
        let x = (column as f64 + 0.5) * width as f64 / area.width as f64;
        let y = (pixel_row as f64 + 0.5) * height as f64 / (area.height as f64 * 2.0);
        match self.sample(x, y) {
            Some(c) => Color::Rgb(c.r, c.g, c.b),
            None => Color::Black,
        }
    }
}

impl Widget for CorridorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for row in 0..area.height {
            for column in 0..area.width {
                let top = self.pixel(area, column, row * 2);
                let bottom = self.pixel(area, column, row * 2 + 1);
                buf[(area.left() + column, area.top() + row)]
                    .set_symbol(HALF_BLOCK)
                    .set_fg(top)
                    .set_bg(bottom);
            }
        }
    }
}
