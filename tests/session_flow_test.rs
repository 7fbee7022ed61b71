// Full rounds driven through the public session API

mod helpers;

use std::fs;
use std::time::Duration;

use helpers::*;
use maze_explorer::input::GameInput::{self, *};
use maze_explorer::session::{GamePhase, GameSession, Outcome, ViewMode};
use maze_explorer::{Direction, Location};

fn is_game_over(session: &GameSession, expected: Outcome) -> bool {
    matches!(session.phase(), GamePhase::GameOver { outcome, .. } if outcome == expected)
}

#[test]
fn test_east_corridor_win_after_four_moves() {
    let mut session = navigating(EAST_CORRIDOR, ViewMode::Map2D);
    assert_eq!(session.explorer().unwrap().direction(), Direction::East);

    for step in 1..=3 {
        session.handle_input(Up);
        session.tick(Duration::from_millis(50));
        assert_eq!(
            session.explorer().unwrap().location(),
            Location::new(1, step)
        );
        assert!(matches!(session.phase(), GamePhase::Navigating { .. }));
    }

    session.handle_input(Up);
    session.tick(Duration::from_millis(50));
    assert!(is_game_over(&session, Outcome::Win));
}

#[test]
fn test_blocked_moves_leave_explorer_in_place() {
    let mut session = navigating(EAST_CORRIDOR, ViewMode::Map2D);
    press_all(&mut session, &[Left, Up, Up]);
    assert_eq!(session.explorer().unwrap().direction(), Direction::North);
    assert_eq!(session.explorer().unwrap().location(), Location::new(1, 0));
}

#[test]
fn test_loss_at_zero_health_regardless_of_position() {
    let mut session = navigating(EAST_CORRIDOR, ViewMode::Corridor3D);
    session.handle_input(Up);
    session.apply_hazard(1);
    session.tick(Duration::ZERO);
    assert!(matches!(session.phase(), GamePhase::Navigating { .. }));

    session.apply_hazard(5);
    assert_eq!(session.explorer().unwrap().health(), 0);
    session.tick(Duration::ZERO);
    assert!(is_game_over(&session, Outcome::Loss));
}

#[test]
fn test_countdown_returns_to_main_menu_and_clears_maze() {
    let mut session = navigating(EAST_CORRIDOR, ViewMode::Map2D);
    press_all(&mut session, &[Up, Up, Up, Up]);
    session.tick(Duration::ZERO);
    assert!(is_game_over(&session, Outcome::Win));

    session.tick(Duration::from_millis(999));
    assert!(is_game_over(&session, Outcome::Win));

    session.tick(Duration::from_millis(1));
    assert_eq!(session.phase(), GamePhase::MainMenu);
    assert_eq!(session.level().unwrap().maze.wall_count(), 0);
    assert!(session.frame().level.is_none());
}

#[test]
fn test_level_loaded_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("level.txt");
    fs::write(&path, EAST_CORRIDOR).unwrap();

    let mut session = GameSession::new(config_with_levels(vec![path]));
    press_all(&mut session, &[Down, Confirm]);
    assert_eq!(
        session.phase(),
        GamePhase::LevelSelect {
            view: ViewMode::Corridor3D
        }
    );
    session.handle_input(Confirm);
    assert_eq!(
        session.phase(),
        GamePhase::Navigating {
            view: ViewMode::Corridor3D,
            paused: false
        }
    );
    assert_eq!(session.explorer().unwrap().location(), Location::new(1, 0));
    assert!(!session.frame().walls.is_empty());
}

#[test]
fn test_missing_level_file_stays_in_level_select() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = GameSession::new(config_with_levels(vec![dir.path().join("absent.txt")]));
    press_all(&mut session, &[Confirm, Confirm]);
    assert_eq!(session.phase(), GamePhase::LevelSelect { view: ViewMode::Map2D });
    assert_eq!(session.message(), Some("Level file not found"));

    session.handle_input(Cancel);
    assert_eq!(session.phase(), GamePhase::MainMenu);
    assert_eq!(session.message(), None);
}

#[test]
fn test_broken_level_file_reports_reason() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.txt");
    fs::write(&path, "###\n#S#\n###").unwrap();
    let mut session = GameSession::new(config_with_levels(vec![path]));
    press_all(&mut session, &[Confirm, Confirm]);
    assert!(session.message().unwrap().contains("missing end cell"));
}

#[test]
fn test_level_select_wraps_horizontally() {
    let dir = tempfile::tempdir().unwrap();
    let levels = (1..=3).map(|n| dir.path().join(format!("m{}.txt", n))).collect();
    let mut session = GameSession::new(config_with_levels(levels));
    press_all(&mut session, &[Confirm, Left]);
    assert!(session.frame().level_menu.is_selected(2));
    session.handle_input(Right);
    assert!(session.frame().level_menu.is_selected(0));
}

#[test]
fn test_pause_resume_and_quit() {
    let mut session = navigating(EAST_CORRIDOR, ViewMode::Corridor3D);
    let pause: &[GameInput] = &[Cancel];
    press_all(&mut session, pause);
    session.tick(Duration::from_secs(5));
    assert_eq!(
        session.phase(),
        GamePhase::Navigating {
            view: ViewMode::Corridor3D,
            paused: true
        }
    );

    press_all(&mut session, &[Confirm, Up]);
    assert_eq!(session.explorer().unwrap().location(), Location::new(1, 1));

    press_all(&mut session, &[Cancel, Up, Confirm]);
    assert_eq!(session.phase(), GamePhase::MainMenu);
}

#[test]
fn test_settings_render_distance_reaches_projection() {
    let mut session = GameSession::new(config_with_levels(Vec::new()));
    press_all(&mut session, &[Down, Down, Confirm, Left, Left]);
    assert_eq!(session.config().projection.render_distance, 3);
    session.handle_input(Cancel);
    assert_eq!(session.phase(), GamePhase::MainMenu);

    let maze = maze_explorer::Maze::parse(EAST_CORRIDOR).unwrap();
    session.start_level(0, maze, ViewMode::Corridor3D);
    let deepest = session.frame().walls.iter().map(|w| w.depth).max().unwrap();
    assert!(deepest < 3);
}
