//! Corridor wall projection.
//!
//! The view ahead is cut into `render_distance` slices, one per grid cell.
//! Each slice is a fixed trapezoid that shrinks and darkens linearly with
//! depth; walls on the right are mirror images of the left ones.

use explorer::Explorer;
use maze::Maze;
use serde::{Deserialize, Serialize};

use crate::frame::LocalFrame;
use crate::geometry::{Color, Polygon};

/// Fixed geometry of the corridor view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Number of slices generated, nearest first.
    pub render_distance: u32,
    pub viewport_width: i32,
    pub viewport_height: i32,
    /// Inset of the nearest slice from the viewport edges.
    pub margin: i32,
    /// Extra inset per slice.
    pub step: i32,
    pub base_shade: i32,
    /// Darkening per slice.
    pub shade_step: i32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            render_distance: 5,
            viewport_width: 1000,
            viewport_height: 800,
            margin: 50,
            step: 50,
            base_shade: 128,
            shade_step: 25,
        }
    }
}

/// Hard ceiling on slices, whatever the geometry allows.
pub const RENDER_DISTANCE_CEILING: u32 = 64;

impl ProjectionConfig {
    /// Deepest render distance the geometry can draw: every slice keeps a
    /// non-inverted far edge, stays on its own half of the viewport, and is
    /// strictly darker than the slice in front of it.
    pub fn max_render_distance(&self) -> u32 {
        (0..RENDER_DISTANCE_CEILING)
            .take_while(|&depth| self.slice_is_drawable(depth))
            .count() as u32
    }

    fn slice_is_drawable(&self, depth: u32) -> bool {
        let far_edge_open = self.top_y(depth + 1) < self.bottom_y(depth + 1);
        let far_x = self.near_x(depth) + self.step;
        let left_half = far_x <= self.viewport_width - far_x;
        let darker = depth == 0
            || (self.step > 0
                && self.shade_step > 0
                && self.base_shade - self.shade_step * (depth as i32 - 1) > 0);
        far_edge_open && left_half && darker
    }

    /// Gray level of slice `depth`, clamped at black.
    pub fn shade(&self, depth: u32) -> Color {
        Color::gray(self.base_shade - self.shade_step * depth as i32)
    }

    /// Shade of the opening rectangles behind slice `depth`.
    pub fn opening_shade(&self, depth: u32) -> Color {
        let step = self.shade_step.clamp(0, u8::MAX as i32) as u8;
        self.shade(depth).darker(step)
    }

    fn near_x(&self, depth: u32) -> i32 {
        self.margin + self.step * depth as i32
    }

    fn top_y(&self, depth: u32) -> i32 {
        self.margin + self.step * depth as i32
    }

    fn bottom_y(&self, depth: u32) -> i32 {
        self.viewport_height - self.margin - self.step * depth as i32
    }

    /// Left wall of slice `depth`: near edge at `depth`, far edge at `depth + 1`.
    pub fn trapezoid(&self, depth: u32) -> Polygon {
        let x0 = self.near_x(depth);
        let x1 = x0 + self.step;
        Polygon::from_coords(
            [x0, x1, x1, x0],
            [
                self.top_y(depth),
                self.top_y(depth + 1),
                self.bottom_y(depth + 1),
                self.bottom_y(depth),
            ],
        )
    }

    /// Face-on rectangle seen through a left side opening at `depth`, bridging
    /// to the far edge of the slice.
    pub fn opening(&self, depth: u32) -> Polygon {
        let top = self.top_y(depth + 1);
        Polygon::from_rect(
            self.near_x(depth),
            top,
            self.step,
            self.bottom_y(depth + 1) - top,
        )
    }

    /// Wall blocking the corridor at the near edge of slice `depth`.
    pub fn front_wall(&self, depth: u32) -> Polygon {
        let x = self.near_x(depth);
        let top = self.top_y(depth);
        Polygon::from_rect(
            x,
            top,
            self.viewport_width - 2 * x,
            self.bottom_y(depth) - top,
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallKind {
    Left,
    Right,
    Front,
    LeftOpening,
    RightOpening,
}

/// One shaded quad of the current frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSegment {
    pub polygon: Polygon,
    pub color: Color,
    pub kind: WallKind,
    pub depth: u32,
}

impl WallSegment {
    fn new(polygon: Polygon, color: Color, kind: WallKind, depth: u32) -> Self {
        Self {
            polygon,
            color,
            kind,
            depth,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CorridorProjector {
    config: ProjectionConfig,
}

impl CorridorProjector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Walls visible from the explorer, in paint order.
    ///
    /// Opening rectangles come first, in reverse generation order, followed
    /// by side trapezoids and at most one front wall, nearest first.
    pub fn project(&self, maze: &Maze, explorer: &Explorer) -> Vec<WallSegment> {
        let config = &self.config;
        let frame = LocalFrame::new(explorer.direction());
        let origin = explorer.location();
        let width = config.viewport_width;

        let mut walls = Vec::new();
        let mut openings = Vec::new();

        for depth in 0..config.render_distance {
            let cell = frame.ahead(origin, depth as i32);
            if depth > 0 && maze.is_wall_at(cell) {
                walls.push(WallSegment::new(
                    config.front_wall(depth),
                    config.shade(depth),
                    WallKind::Front,
                    depth,
                ));
                break;
            }

            let trapezoid = config.trapezoid(depth);
            let shade = config.shade(depth);
            if maze.is_wall_at(frame.left_of(cell)) {
                walls.push(WallSegment::new(trapezoid, shade, WallKind::Left, depth));
            }
            if maze.is_wall_at(frame.right_of(cell)) {
                walls.push(WallSegment::new(
                    trapezoid.mirrored(width),
                    shade,
                    WallKind::Right,
                    depth,
                ));
            }

            if depth + 1 < config.render_distance {
                let opening = config.opening(depth);
                let shade = config.opening_shade(depth);
                openings.push(WallSegment::new(opening, shade, WallKind::LeftOpening, depth));
                openings.push(WallSegment::new(
                    opening.mirrored(width),
                    shade,
                    WallKind::RightOpening,
                    depth,
                ));
            }
        }

        // each opening is pushed to the front in turn
        walls.splice(0..0, openings.into_iter().rev());
        walls
    }
}

/// Walls visible from `explorer`, see [`CorridorProjector::project`].
pub fn compute_visible_walls(
    maze: &Maze,
    explorer: &Explorer,
    config: &ProjectionConfig,
) -> Vec<WallSegment> {
    CorridorProjector::new(config.clone()).project(maze, explorer)
}
