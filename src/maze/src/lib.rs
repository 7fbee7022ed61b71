//src/maze/src/lib.rs
//! 迷宫网格模型
//!
//! 迷宫是一个矩形网格，每个格子要么是墙要么是空地，外加起点和终点。
//! 越界的坐标一律视为不可通行。

use error::{MazeError, Result};
use serde::{Deserialize, Serialize};

pub mod cell;
pub mod loader;

pub use cell::{Cell, CellFill, Location, Occupancy};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    rows: usize,
    cols: usize,
    /// 按行存储的格子
    cells: Vec<Occupancy>,
    start: Location,
    end: Location,
}

impl Maze {
    /// 由完整网格构造迷宫，检查矩形性以及起点/终点合法性
    pub fn from_grid(grid: Vec<Vec<Occupancy>>, start: Location, end: Location) -> Result<Self> {
        let rows = grid.len();
        let cols = grid.first().map(Vec::len).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(MazeError::invalid("maze has no cells"));
        }
        if let Some(row) = grid.iter().position(|r| r.len() != cols) {
            return Err(MazeError::invalid(format!(
                "row {} has {} cells, expected {}",
                row,
                grid[row].len(),
                cols
            )));
        }

        let maze = Self {
            rows,
            cols,
            cells: grid.into_iter().flatten().collect(),
            start,
            end,
        };

        for (name, loc) in [("start", start), ("end", end)] {
            match maze.cell_at(loc.row, loc.col) {
                Ok(Occupancy::Empty) => {}
                Ok(Occupancy::Wall) => {
                    return Err(MazeError::invalid(format!("{} cell is a wall", name)));
                }
                Err(_) => {
                    return Err(MazeError::invalid(format!("{} cell is outside the grid", name)));
                }
            }
        }

        Ok(maze)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Location {
        self.start
    }

    pub fn end(&self) -> Location {
        self.end
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        self.in_bounds(row, col)
            .then(|| row as usize * self.cols + col as usize)
    }

    /// 获取格子状态，越界时返回 `OutOfBounds`
    pub fn cell_at(&self, row: i32, col: i32) -> Result<Occupancy> {
        self.index(row, col)
            .map(|i| self.cells[i])
            .ok_or(MazeError::OutOfBounds { row, col })
    }

    /// 格子存在、在界内且为空地
    pub fn is_passable(&self, row: i32, col: i32) -> bool {
        matches!(self.cell_at(row, col), Ok(Occupancy::Empty))
    }

    /// 墙壁或越界(地图边缘按墙处理)
    pub fn is_wall(&self, row: i32, col: i32) -> bool {
        !self.is_passable(row, col)
    }

    pub fn is_passable_at(&self, loc: Location) -> bool {
        self.is_passable(loc.row, loc.col)
    }

    pub fn is_wall_at(&self, loc: Location) -> bool {
        self.is_wall(loc.row, loc.col)
    }

    /// 将所有格子重置为空地（回到主菜单时使用）
    pub fn clear(&mut self) {
        self.cells.fill(Occupancy::Empty);
    }

    /// 遍历所有格子(行优先)
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().map(|(i, &occupancy)| Cell {
            location: Location::new((i / self.cols) as i32, (i % self.cols) as i32),
            occupancy,
        })
    }

    /// 统计墙壁数量
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall()).count()
    }

    /// 2D 渲染指令：每个墙格在 `(col*size, row*size)` 处填充 `size×size` 方块
    pub fn wall_fills(&self, cell_size: u32) -> Vec<CellFill> {
        self.cells()
            .filter(|cell| cell.occupancy.is_wall())
            .map(|cell| CellFill {
                x: cell.location.col as u32 * cell_size,
                y: cell.location.row as u32 * cell_size,
                size: cell_size,
            })
            .collect()
    }
}
