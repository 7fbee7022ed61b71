//! Builders shared by the integration tests.

#![allow(dead_code)]

use maze_explorer::config::GameConfig;
use maze_explorer::input::GameInput;
use maze_explorer::session::{GameSession, ViewMode};
use maze_explorer::Maze;

/// 5x5 grid whose middle row is an open east-west corridor.
pub const EAST_CORRIDOR: &str = "\
#####
S...E
#####
#####
#####";

pub fn config_with_levels(levels: Vec<std::path::PathBuf>) -> GameConfig {
    let mut config = GameConfig::default();
    config.levels = levels;
    config.game_over_delay_ms = 1000;
    config
}

/// Session already navigating `maze_text`.
pub fn navigating(maze_text: &str, view: ViewMode) -> GameSession {
    let mut session = GameSession::new(config_with_levels(Vec::new()));
    let maze = Maze::parse(maze_text).expect("test maze parses");
    session.start_level(0, maze, view);
    session
}

pub fn press_all(session: &mut GameSession, inputs: &[GameInput]) {
    for &input in inputs {
        session.handle_input(input);
    }
}
