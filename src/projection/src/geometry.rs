//! Viewport-space primitives.
//!
//! Coordinates are integer pixels of a virtual viewport with the origin in
//! the top-left corner and y growing downwards.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Opaque RGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gray with `level` clamped into the valid channel range.
    pub fn gray(level: i32) -> Self {
        let v = level.clamp(0, u8::MAX as i32) as u8;
        Self::rgb(v, v, v)
    }

    /// Same color darkened by `amount` on every channel, saturating at black.
    pub fn darker(self, amount: u8) -> Self {
        Self::rgb(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
        )
    }
}

/// A four-point polygon.
///
/// Unmirrored shapes list their corners top-left, top-right, bottom-right,
/// bottom-left. Mirroring keeps the index order, so a mirrored quad winds
/// the other way.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Polygon {
    points: [Point; 4],
}

impl Polygon {
    pub fn new(points: [Point; 4]) -> Self {
        Self { points }
    }

    pub fn from_coords(xs: [i32; 4], ys: [i32; 4]) -> Self {
        Self::new(std::array::from_fn(|i| Point::new(xs[i], ys[i])))
    }

    /// Axis-aligned rectangle as a quad.
    pub fn from_rect(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::from_coords(
            [x, x + width, x + width, x],
            [y, y, y + height, y + height],
        )
    }

    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    pub fn xs(&self) -> [i32; 4] {
        self.points.map(|p| p.x)
    }

    pub fn ys(&self) -> [i32; 4] {
        self.points.map(|p| p.y)
    }

    /// Reflection about the vertical center line of a viewport `width` wide.
    pub fn mirrored(&self, width: i32) -> Self {
        Self::new(self.points.map(|p| Point::new(width - p.x, p.y)))
    }

    /// Reflection about the horizontal center line of a viewport `height` tall.
    pub fn flipped(&self, height: i32) -> Self {
        Self::new(self.points.map(|p| Point::new(p.x, height - p.y)))
    }

    /// (min_x, min_y, max_x, max_y)
    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        let xs = self.xs();
        let ys = self.ys();
        (
            xs.iter().copied().min().unwrap_or(0),
            ys.iter().copied().min().unwrap_or(0),
            xs.iter().copied().max().unwrap_or(0),
            ys.iter().copied().max().unwrap_or(0),
        )
    }

    /// Inside-or-on-edge test. Only valid for convex quads, which is all the
    /// projection ever produces.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let mut positive = false;
        let mut negative = false;
        for i in 0..4 {
            let a = self.points[i];
            let b = self.points[(i + 1) % 4];
            let cross = (b.x - a.x) as f64 * (y - a.y as f64) - (b.y - a.y) as f64 * (x - a.x as f64);
            if cross > 0.0 {
                positive = true;
            } else if cross < 0.0 {
                negative = true;
            }
            if positive && negative {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_rect_corner_order() {
        let quad = Polygon::from_rect(10, 20, 30, 40);
        assert_eq!(quad.xs(), [10, 40, 40, 10]);
        assert_eq!(quad.ys(), [20, 20, 60, 60]);
    }

    #[test]
    fn test_mirror_twice_is_identity() {
        let quad = Polygon::from_coords([50, 100, 100, 50], [50, 100, 700, 750]);
        assert_eq!(quad.mirrored(1000).mirrored(1000), quad);
        assert_eq!(quad.mirrored(1000).xs(), [950, 900, 900, 950]);
    }

    #[test]
    fn test_contains_both_windings() {
        let quad = Polygon::from_coords([50, 100, 100, 50], [50, 100, 700, 750]);
        let mirrored = quad.mirrored(1000);
        assert!(quad.contains(75.0, 400.0));
        assert!(!quad.contains(75.0, 60.0));
        assert!(mirrored.contains(925.0, 400.0));
        assert!(!mirrored.contains(500.0, 400.0));
    }

    #[test]
    fn test_gray_clamps() {
        assert_eq!(Color::gray(-40), Color::rgb(0, 0, 0));
        assert_eq!(Color::gray(300), Color::rgb(255, 255, 255));
        assert_eq!(Color::gray(28).darker(25), Color::gray(3));
        assert_eq!(Color::gray(3).darker(25), Color::gray(0));
    }
}
