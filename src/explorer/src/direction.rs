// src/explorer/src/direction.rs
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// 朝向，只有四个正方向；顺时针依次为 北 → 东 → 南 → 西
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
pub enum Direction {
    #[strum(serialize = "NORTH")]
    North,
    #[strum(serialize = "EAST")]
    East,
    #[strum(serialize = "SOUTH")]
    South,
    #[strum(serialize = "WEST")]
    West,
}

/// 相对转向
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelativeDirection {
    Left,
    Right,
}

impl Direction {
    /// 向右转 90°
    pub fn clockwise(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// 向左转 90°
    pub fn counter_clockwise(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub fn turned(self, relative: RelativeDirection) -> Self {
        match relative {
            RelativeDirection::Left => self.counter_clockwise(),
            RelativeDirection::Right => self.clockwise(),
        }
    }

    pub fn opposite(self) -> Self {
        self.clockwise().clockwise()
    }

    /// 前进一步的 (行, 列) 偏移
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}
