//! Pseudo-3D corridor projection.
//!
//! Turns the cells ahead of the explorer into a painter-ordered list of
//! flat-shaded quads:
//! - `geometry` - points, quads and colors in viewport space
//! - `frame` - facing-relative grid offsets (forward/left/right)
//! - `corridor` - the slice-by-slice wall projection

pub mod corridor;
pub mod frame;
pub mod geometry;

pub use corridor::{
    CorridorProjector, ProjectionConfig, RENDER_DISTANCE_CEILING, WallKind, WallSegment,
    compute_visible_walls,
};
pub use frame::LocalFrame;
pub use geometry::{Color, Point, Polygon};
