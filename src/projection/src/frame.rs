//! Facing-relative grid offsets.

use explorer::Direction;
use maze::Location;

/// Grid offsets of "forward", "left" and "right" for one facing.
///
/// Left is forward rotated a quarter turn counter-clockwise, right is the
/// opposite of left. Every facing goes through the same transform, so the
/// projection never branches on direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LocalFrame {
    pub forward: (i32, i32),
    pub left: (i32, i32),
    pub right: (i32, i32),
}

impl LocalFrame {
    pub fn new(facing: Direction) -> Self {
        let (d_row, d_col) = facing.delta();
        Self {
            forward: (d_row, d_col),
            left: (-d_col, d_row),
            right: (d_col, -d_row),
        }
    }

    /// Cell `depth` steps straight ahead of `origin`.
    pub fn ahead(&self, origin: Location, depth: i32) -> Location {
        origin.offset(self.forward.0 * depth, self.forward.1 * depth)
    }

    pub fn left_of(&self, cell: Location) -> Location {
        cell.offset(self.left.0, self.left.1)
    }

    pub fn right_of(&self, cell: Location) -> Location {
        cell.offset(self.right.0, self.right.1)
    }
}
