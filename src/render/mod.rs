//! 模块化渲染系统
//!
//! - `map` - 2D 俯视地图
//! - `corridor` - 3D 走廊透视
//! - `hud` - 状态栏
//! - `menu` - 主菜单、关卡选择、设置和暂停菜单
//! - `game_over` - 胜负结算画面
//!
//! 所有渲染器只读取 `FrameView` 快照，不持有会话锁。

pub mod corridor;
pub mod game_over;
pub mod hud;
pub mod map;
pub mod menu;

pub use corridor::CorridorRenderer;
pub use game_over::GameOverRenderer;
pub use hud::HudRenderer;
pub use map::MapRenderer;
pub use menu::MenuRenderer;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::session::{FrameView, GamePhase, ViewMode};

/// 按当前阶段绘制整帧
pub fn draw_frame(frame: &mut Frame, view: &FrameView) {
    let area = frame.area();
    match view.phase {
        GamePhase::MainMenu => MenuRenderer::new().render_main_menu(frame, area, view),
        GamePhase::LevelSelect { view: mode } => {
            MenuRenderer::new().render_level_select(frame, area, view, mode)
        }
        GamePhase::Settings => MenuRenderer::new().render_settings(frame, area, view),
        GamePhase::Navigating { view: mode, paused } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // HUD
                    Constraint::Min(5),    // 主视图
                ])
                .split(area);

            HudRenderer::new().render(frame, chunks[0], view);
            match mode {
                ViewMode::Map2D => MapRenderer::new().render(frame, chunks[1], view),
                ViewMode::Corridor3D => CorridorRenderer::new().render(frame, chunks[1], view),
            }
            if paused {
                MenuRenderer::new().render_pause_menu(frame, area, view);
            }
        }
        GamePhase::GameOver { outcome, remaining } => {
            GameOverRenderer::new().render(frame, area, outcome, remaining)
        }
        GamePhase::Exited => {}
    }
}

/// 在 `area` 中居中取一块百分比大小的区域
pub fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
