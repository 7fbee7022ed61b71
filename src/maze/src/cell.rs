// src/maze/src/cell.rs
use serde::{Deserialize, Serialize};

/// 格子占用状态
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupancy {
    /// 墙壁
    Wall,
    /// 空地(可通行)
    #[default]
    Empty,
}

impl Occupancy {
    pub fn is_wall(self) -> bool {
        self == Occupancy::Wall
    }
}

/// 网格坐标(行, 列)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub row: i32,
    pub col: i32,
}

impl Location {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// 按偏移量平移
    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl From<(i32, i32)> for Location {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// 表示迷宫中的一个格子
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub location: Location,
    pub occupancy: Occupancy,
}

/// 2D 模式下的填充指令：一个 `size × size` 的方块
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellFill {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}
