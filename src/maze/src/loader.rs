// src/maze/src/loader.rs
//! 迷宫文件加载
//!
//! 文本格式，每行一排格子：
//! - `#` 墙
//! - `.` 或空格 空地
//! - `S` 起点, `E` 终点(都是空地)

use std::fs;
use std::path::Path;

use error::{MazeError, Result};
use tracing::debug;

use crate::{Location, Maze, Occupancy};

pub const WALL_CHAR: char = '#';
pub const START_CHAR: char = 'S';
pub const END_CHAR: char = 'E';

impl Maze {
    /// 从文件加载迷宫
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let maze = Self::parse(&text)?;
        debug!(
            path = %path.display(),
            rows = maze.rows(),
            cols = maze.cols(),
            "maze loaded"
        );
        Ok(maze)
    }

    /// 解析迷宫文本
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines: Vec<&str> = text
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return Err(MazeError::invalid("maze file is empty"));
        }

        let mut grid = Vec::with_capacity(lines.len());
        let mut start = None;
        let mut end = None;

        for (row, line) in lines.iter().enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let here = Location::new(row as i32, col as i32);
                let occupancy = match ch {
                    WALL_CHAR => Occupancy::Wall,
                    '.' | ' ' => Occupancy::Empty,
                    START_CHAR => {
                        if start.replace(here).is_some() {
                            return Err(MazeError::invalid("more than one start cell"));
                        }
                        Occupancy::Empty
                    }
                    END_CHAR => {
                        if end.replace(here).is_some() {
                            return Err(MazeError::invalid("more than one end cell"));
                        }
                        Occupancy::Empty
                    }
                    other => {
                        return Err(MazeError::invalid(format!(
                            "unexpected character {:?} at row {}, column {}",
                            other, row, col
                        )));
                    }
                };
                cells.push(occupancy);
            }
            grid.push(cells);
        }

        let start = start.ok_or_else(|| MazeError::invalid("missing start cell"))?;
        let end = end.ok_or_else(|| MazeError::invalid("missing end cell"))?;
        Self::from_grid(grid, start, end)
    }
}
