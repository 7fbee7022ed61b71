//! Game session: the explicit phase state machine.
//!
//! The session owns the active level (maze + explorer), the menus and the
//! current `GamePhase`. Input handlers mutate it only through
//! [`GameSession::handle_input`]; the loop thread calls [`GameSession::tick`]
//! and takes an owned [`FrameView`] snapshot for drawing.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use error::handle_error;
use explorer::{Explorer, MoveOutcome, RelativeDirection};
use maze::Maze;
use projection::{CorridorProjector, WallSegment};
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::input::GameInput;
use crate::menu::Menu;

/// How the maze is drawn while navigating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Map2D,
    Corridor3D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    MainMenu,
    LevelSelect { view: ViewMode },
    Settings,
    Navigating { view: ViewMode, paused: bool },
    /// Result screen, counts down before returning to the main menu
    GameOver { outcome: Outcome, remaining: Duration },
    Exited,
}

impl GamePhase {
    pub fn is_exited(&self) -> bool {
        matches!(self, GamePhase::Exited)
    }
}

/// A loaded level
#[derive(Debug, Clone)]
pub struct Level {
    /// 0-based index into the configured level list
    pub index: usize,
    pub maze: Maze,
    pub explorer: Explorer,
}

/// Everything a renderer needs for one frame, detached from the session.
#[derive(Debug, Clone)]
pub struct FrameView {
    pub phase: GamePhase,
    pub main_menu: Menu,
    pub level_menu: Menu,
    pub pause_menu: Menu,
    pub level: Option<Level>,
    /// Corridor walls in paint order, only filled in the 3D view
    pub walls: Vec<WallSegment>,
    pub viewport: (i32, i32),
    pub render_distance: u32,
    /// Deepest render distance the corridor geometry supports
    pub max_render_distance: u32,
    pub map_cell_width: u16,
    pub message: Option<String>,
}

pub type SharedSession = Arc<Mutex<GameSession>>;

/// Lock the shared session, turning poisoning into an error.
pub fn lock_session(session: &SharedSession) -> anyhow::Result<MutexGuard<'_, GameSession>> {
    session
        .lock()
        .map_err(|_| anyhow::anyhow!("game session lock poisoned"))
}

#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    phase: GamePhase,
    main_menu: Menu,
    level_menu: Menu,
    pause_menu: Menu,
    level: Option<Level>,
    projector: CorridorProjector,
    message: Option<String>,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let level_menu = Menu::level_select(config.levels.len());
        let projector = CorridorProjector::new(config.projection.clone());
        Self {
            config,
            phase: GamePhase::MainMenu,
            main_menu: Menu::main_menu(),
            level_menu,
            pause_menu: Menu::pause_menu(),
            level: None,
            projector,
            message: None,
        }
    }

    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    pub fn explorer(&self) -> Option<&Explorer> {
        self.level.as_ref().map(|l| &l.explorer)
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if std::mem::discriminant(&phase) != std::mem::discriminant(&self.phase) {
            debug!(from = ?self.phase, to = ?phase, "phase change");
        }
        self.phase = phase;
    }

    /// One state-check pass. Movement never happens here, only win/loss
    /// detection and the game-over countdown.
    pub fn tick(&mut self, dt: Duration) {
        match self.phase {
            GamePhase::Navigating { .. } => {
                let Some(level) = &self.level else {
                    return;
                };
                let outcome = if !level.explorer.is_alive() {
                    Some(Outcome::Loss)
                } else if level.explorer.has_reached(level.maze.end()) {
                    Some(Outcome::Win)
                } else {
                    None
                };
                if let Some(outcome) = outcome {
                    info!(?outcome, level = level.index + 1, "round over");
                    self.set_phase(GamePhase::GameOver {
                        outcome,
                        remaining: self.config.game_over_delay(),
                    });
                }
            }
            GamePhase::GameOver { outcome, remaining } => {
                let remaining = remaining.saturating_sub(dt);
                if remaining.is_zero() {
                    self.reset();
                    self.set_phase(GamePhase::MainMenu);
                } else {
                    self.phase = GamePhase::GameOver { outcome, remaining };
                }
            }
            _ => {}
        }
    }

    /// Apply one discrete input event.
    pub fn handle_input(&mut self, input: GameInput) {
        if input == GameInput::Quit {
            info!("quit requested");
            self.set_phase(GamePhase::Exited);
            return;
        }

        match self.phase {
            GamePhase::Navigating { view, paused: true } => self.pause_input(view, input),
            GamePhase::Navigating { view, paused: false } => self.navigation_input(view, input),
            GamePhase::MainMenu => self.main_menu_input(input),
            GamePhase::LevelSelect { view } => self.level_select_input(view, input),
            GamePhase::Settings => self.settings_input(input),
            GamePhase::GameOver { .. } | GamePhase::Exited => {}
        }

        if matches!(input, GameInput::Confirm | GameInput::Cancel) {
            self.main_menu.reset();
            self.level_menu.reset();
            self.pause_menu.reset();
        }
    }

    fn navigation_input(&mut self, view: ViewMode, input: GameInput) {
        let Some(level) = self.level.as_mut() else {
            return;
        };
        match input {
            GameInput::Up => {
                if let MoveOutcome::Moved(to) = level.explorer.move_forward(&level.maze) {
                    debug!(row = to.row, col = to.col, "explorer moved");
                }
            }
            GameInput::Left => level.explorer.turn(RelativeDirection::Left),
            GameInput::Right => level.explorer.turn(RelativeDirection::Right),
            GameInput::Cancel => {
                self.set_phase(GamePhase::Navigating { view, paused: true });
            }
            _ => {}
        }
    }

    fn pause_input(&mut self, view: ViewMode, input: GameInput) {
        match input {
            GameInput::Up => self.pause_menu.move_backward(),
            GameInput::Down => self.pause_menu.move_forward(),
            GameInput::Confirm => {
                if self.pause_menu.selected_label() == "Quit" {
                    info!("round abandoned from pause menu");
                    self.reset();
                    self.set_phase(GamePhase::MainMenu);
                } else {
                    self.set_phase(GamePhase::Navigating { view, paused: false });
                }
            }
            _ => {}
        }
    }

    fn main_menu_input(&mut self, input: GameInput) {
        match input {
            GameInput::Up => self.main_menu.move_backward(),
            GameInput::Down => self.main_menu.move_forward(),
            GameInput::Confirm => match self.main_menu.selected() {
                0 => self.open_level_select(ViewMode::Map2D),
                1 => self.open_level_select(ViewMode::Corridor3D),
                2 => self.set_phase(GamePhase::Settings),
                _ => {
                    info!("quit from main menu");
                    self.set_phase(GamePhase::Exited);
                }
            },
            _ => {}
        }
    }

    fn open_level_select(&mut self, view: ViewMode) {
        self.message = None;
        self.set_phase(GamePhase::LevelSelect { view });
    }

    fn level_select_input(&mut self, view: ViewMode, input: GameInput) {
        match input {
            GameInput::Left => self.level_menu.move_backward(),
            GameInput::Right => self.level_menu.move_forward(),
            GameInput::Confirm => {
                let index = self.level_menu.selected();
                self.load_level(index, view);
            }
            GameInput::Cancel => {
                self.message = None;
                self.set_phase(GamePhase::MainMenu);
            }
            _ => {}
        }
    }

    fn settings_input(&mut self, input: GameInput) {
        match input {
            GameInput::Left => self.adjust_render_distance(-1),
            GameInput::Right => self.adjust_render_distance(1),
            GameInput::Cancel => self.set_phase(GamePhase::MainMenu),
            _ => {}
        }
    }

    fn adjust_render_distance(&mut self, delta: i32) {
        let current = self.config.projection.render_distance as i32;
        let max = self.config.projection.max_render_distance().max(1);
        let next = (current + delta).clamp(1, max as i32) as u32;
        if next != self.config.projection.render_distance {
            self.config.projection.render_distance = next;
            self.projector = CorridorProjector::new(self.config.projection.clone());
            info!(render_distance = next, "render distance changed");
        }
    }

    /// Load the configured level file and enter navigation. On failure the
    /// session stays in level select with an error message.
    pub fn load_level(&mut self, index: usize, view: ViewMode) {
        let Some(path) = self.config.levels.get(index).cloned() else {
            warn!(level = index + 1, "level not configured");
            self.message = Some(format!("Level {} is not configured", index + 1));
            return;
        };
        match Maze::load(&path) {
            Ok(maze) => {
                info!(level = index + 1, path = %path.display(), "level loaded");
                self.start_level(index, maze, view);
            }
            Err(err) => {
                warn!(level = index + 1, path = %path.display(), error = %err, "level load failed");
                self.message = Some(handle_error(&err));
            }
        }
    }

    /// Enter navigation on an already-built maze.
    pub fn start_level(&mut self, index: usize, maze: Maze, view: ViewMode) {
        let explorer = Explorer::spawn(&maze, self.config.initial_health);
        self.level = Some(Level {
            index,
            maze,
            explorer,
        });
        self.message = None;
        self.set_phase(GamePhase::Navigating {
            view,
            paused: false,
        });
    }

    /// External hazard hook: damages the explorer of the active level.
    pub fn apply_hazard(&mut self, damage: u32) {
        if let Some(level) = self.level.as_mut() {
            level.explorer.take_damage(damage);
            debug!(damage, health = level.explorer.health(), "hazard applied");
        }
    }

    /// End-of-round cleanup: empties the maze and resets menus.
    fn reset(&mut self) {
        if let Some(level) = self.level.as_mut() {
            level.maze.clear();
        }
        self.main_menu.reset();
        self.level_menu.reset();
        self.pause_menu.reset();
        self.message = None;
    }

    /// Walls for the current 3D frame; empty outside the corridor view.
    pub fn visible_walls(&self) -> Vec<WallSegment> {
        match (self.phase, &self.level) {
            (
                GamePhase::Navigating {
                    view: ViewMode::Corridor3D,
                    ..
                },
                Some(level),
            ) => self.projector.project(&level.maze, &level.explorer),
            _ => Vec::new(),
        }
    }

    /// Owned snapshot of the current frame.
    pub fn frame(&self) -> FrameView {
        let level = match self.phase {
            GamePhase::Navigating { .. } => self.level.clone(),
            _ => None,
        };
        FrameView {
            phase: self.phase,
            main_menu: self.main_menu.clone(),
            level_menu: self.level_menu.clone(),
            pause_menu: self.pause_menu.clone(),
            level,
            walls: self.visible_walls(),
            viewport: (
                self.config.projection.viewport_width,
                self.config.projection.viewport_height,
            ),
            render_distance: self.config.projection.render_distance,
            max_render_distance: self.config.projection.max_render_distance(),
            map_cell_width: self.config.map_cell_width,
            message: self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer::Direction;
    use maze::Location;

    fn session() -> GameSession {
        let mut config = GameConfig::default();
        config.levels.clear();
        GameSession::new(config)
    }

    fn corridor() -> Maze {
        Maze::parse(
            "#####\n\
             #S.E#\n\
             #####",
        )
        .unwrap()
    }

    #[test]
    fn test_starts_in_main_menu() {
        assert_eq!(session().phase(), GamePhase::MainMenu);
    }

    #[test]
    fn test_main_menu_routes() {
        let mut s = session();
        s.handle_input(GameInput::Confirm);
        assert_eq!(s.phase(), GamePhase::LevelSelect { view: ViewMode::Map2D });

        s.handle_input(GameInput::Cancel);
        s.handle_input(GameInput::Down);
        s.handle_input(GameInput::Confirm);
        assert_eq!(
            s.phase(),
            GamePhase::LevelSelect {
                view: ViewMode::Corridor3D
            }
        );

        s.handle_input(GameInput::Cancel);
        s.handle_input(GameInput::Down);
        s.handle_input(GameInput::Down);
        s.handle_input(GameInput::Confirm);
        assert_eq!(s.phase(), GamePhase::Settings);

        s.handle_input(GameInput::Cancel);
        s.handle_input(GameInput::Up);
        s.handle_input(GameInput::Confirm);
        assert_eq!(s.phase(), GamePhase::Exited);
    }

    #[test]
    fn test_menus_reset_after_confirm() {
        let mut s = session();
        s.handle_input(GameInput::Down);
        s.handle_input(GameInput::Down);
        s.handle_input(GameInput::Confirm);
        assert_eq!(s.phase(), GamePhase::Settings);
        assert_eq!(s.frame().main_menu.selected(), 0);
    }

    #[test]
    fn test_unconfigured_level_stays_in_level_select() {
        let mut s = session();
        s.handle_input(GameInput::Confirm);
        s.handle_input(GameInput::Confirm);
        assert_eq!(s.phase(), GamePhase::LevelSelect { view: ViewMode::Map2D });
        assert!(s.message().is_some());
    }

    #[test]
    fn test_navigation_moves_and_turns() {
        let mut s = session();
        s.start_level(0, corridor(), ViewMode::Map2D);
        s.handle_input(GameInput::Right);
        assert_eq!(s.explorer().unwrap().direction(), Direction::South);
        s.handle_input(GameInput::Up);
        assert_eq!(s.explorer().unwrap().location(), Location::new(1, 1));
        s.handle_input(GameInput::Left);
        s.handle_input(GameInput::Up);
        assert_eq!(s.explorer().unwrap().location(), Location::new(1, 2));
    }

    #[test]
    fn test_win_when_reaching_end() {
        let mut s = session();
        s.start_level(0, corridor(), ViewMode::Corridor3D);
        s.handle_input(GameInput::Up);
        s.tick(Duration::ZERO);
        assert!(matches!(s.phase(), GamePhase::Navigating { .. }));
        s.handle_input(GameInput::Up);
        s.tick(Duration::ZERO);
        assert!(matches!(
            s.phase(),
            GamePhase::GameOver {
                outcome: Outcome::Win,
                ..
            }
        ));
    }

    #[test]
    fn test_loss_takes_priority_over_win() {
        let mut s = session();
        s.start_level(0, corridor(), ViewMode::Map2D);
        s.handle_input(GameInput::Up);
        s.handle_input(GameInput::Up);
        s.apply_hazard(100);
        s.tick(Duration::ZERO);
        assert!(matches!(
            s.phase(),
            GamePhase::GameOver {
                outcome: Outcome::Loss,
                ..
            }
        ));
    }

    #[test]
    fn test_game_over_counts_down_then_resets() {
        let mut s = session();
        s.start_level(0, corridor(), ViewMode::Map2D);
        s.apply_hazard(3);
        s.tick(Duration::ZERO);
        s.tick(Duration::from_millis(600));
        assert!(matches!(s.phase(), GamePhase::GameOver { .. }));
        s.tick(Duration::from_millis(400));
        assert_eq!(s.phase(), GamePhase::MainMenu);
        assert_eq!(s.level().unwrap().maze.wall_count(), 0);
    }

    #[test]
    fn test_input_ignored_during_game_over() {
        let mut s = session();
        s.start_level(0, corridor(), ViewMode::Map2D);
        s.apply_hazard(3);
        s.tick(Duration::ZERO);
        s.handle_input(GameInput::Confirm);
        assert!(matches!(s.phase(), GamePhase::GameOver { .. }));
    }

    #[test]
    fn test_pause_blocks_movement_and_resumes() {
        let mut s = session();
        s.start_level(0, corridor(), ViewMode::Map2D);
        s.handle_input(GameInput::Cancel);
        assert_eq!(
            s.phase(),
            GamePhase::Navigating {
                view: ViewMode::Map2D,
                paused: true
            }
        );
        s.handle_input(GameInput::Up);
        assert_eq!(s.explorer().unwrap().location(), Location::new(1, 1));
        s.handle_input(GameInput::Confirm);
        assert_eq!(
            s.phase(),
            GamePhase::Navigating {
                view: ViewMode::Map2D,
                paused: false
            }
        );
    }

    #[test]
    fn test_pause_quit_returns_to_main_menu() {
        let mut s = session();
        s.start_level(0, corridor(), ViewMode::Corridor3D);
        s.handle_input(GameInput::Cancel);
        s.handle_input(GameInput::Down);
        s.handle_input(GameInput::Confirm);
        assert_eq!(s.phase(), GamePhase::MainMenu);
    }

    fn open_settings(s: &mut GameSession) {
        s.handle_input(GameInput::Down);
        s.handle_input(GameInput::Down);
        s.handle_input(GameInput::Confirm);
        assert_eq!(s.phase(), GamePhase::Settings);
    }

    #[test]
    fn test_settings_clamp_render_distance() {
        let mut s = session();
        open_settings(&mut s);
        for _ in 0..20 {
            s.handle_input(GameInput::Right);
        }
        assert_eq!(s.config().projection.render_distance, 6);
        assert_eq!(s.frame().max_render_distance, 6);
        for _ in 0..20 {
            s.handle_input(GameInput::Left);
        }
        assert_eq!(s.config().projection.render_distance, 1);
    }

    #[test]
    fn test_deepest_setting_keeps_walls_upright() {
        let mut s = session();
        open_settings(&mut s);
        for _ in 0..20 {
            s.handle_input(GameInput::Right);
        }
        let long = Maze::parse("##########\n#S......E#\n##########").unwrap();
        s.start_level(0, long, ViewMode::Corridor3D);
        let walls = s.frame().walls;
        assert_eq!(walls.iter().map(|w| w.depth).max(), Some(5));
        for wall in walls {
            let ys = wall.polygon.ys();
            if matches!(wall.kind, projection::WallKind::Left | projection::WallKind::Right) {
                assert!(ys[1] < ys[2], "far edge inverted: {:?}", wall);
            }
        }
    }

    #[test]
    fn test_walls_only_in_corridor_view() {
        let mut s = session();
        s.start_level(0, corridor(), ViewMode::Map2D);
        assert!(s.frame().walls.is_empty());
        s.start_level(0, corridor(), ViewMode::Corridor3D);
        assert!(!s.frame().walls.is_empty());
    }

    #[test]
    fn test_quit_from_anywhere() {
        let mut s = session();
        s.start_level(0, corridor(), ViewMode::Map2D);
        s.handle_input(GameInput::Quit);
        assert!(s.phase().is_exited());
    }
}
