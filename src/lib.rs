pub mod config;
pub mod game_loop;
pub mod input;
pub mod logging;
pub mod menu;
pub mod render;
pub mod renderer;
pub mod session;

pub use error::{MazeError, Result, handle_error};
pub use explorer::{Direction, Explorer, MoveOutcome, RelativeDirection};
pub use maze::{Location, Maze, Occupancy};
pub use projection::{CorridorProjector, ProjectionConfig, WallKind, WallSegment, compute_visible_walls};
