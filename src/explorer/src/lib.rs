// src/explorer/src/lib.rs
//! 探索者状态机
//!
//! 位置、朝向、生命值，以及带碰撞检测的移动/转向逻辑。

use maze::{Location, Maze};
use serde::{Deserialize, Serialize};

mod direction;

pub use direction::{Direction, RelativeDirection};

/// 进入关卡时的固定朝向
pub const INITIAL_DIRECTION: Direction = Direction::East;

/// 移动结果；撞墙不是错误
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(Location),
    Blocked,
}

/// 探索者核心数据结构
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explorer {
    location: Location,
    direction: Direction,
    health: u32,
}

impl Explorer {
    /// 在迷宫起点创建探索者
    pub fn spawn(maze: &Maze, health: u32) -> Self {
        Self::new(maze.start(), INITIAL_DIRECTION, health)
    }

    pub fn new(location: Location, direction: Direction, health: u32) -> Self {
        Self {
            location,
            direction,
            health,
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// 转向，总是成功
    pub fn turn(&mut self, relative: RelativeDirection) {
        self.direction = self.direction.turned(relative);
    }

    /// 前方一格
    pub fn ahead(&self) -> Location {
        let (d_row, d_col) = self.direction.delta();
        self.location.offset(d_row, d_col)
    }

    /// 向前移动一格；前方不可通行时原地不动
    pub fn move_forward(&mut self, maze: &Maze) -> MoveOutcome {
        let target = self.ahead();
        if maze.is_passable_at(target) {
            self.location = target;
            MoveOutcome::Moved(target)
        } else {
            MoveOutcome::Blocked
        }
    }

    /// 受到伤害(来自外部陷阱等)，最低降到 0
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// 是否站在终点上(坐标完全相等)
    pub fn has_reached(&self, target: Location) -> bool {
        self.location == target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    fn corridor() -> Maze {
        Maze::parse(
            "#######\n\
             #S...E#\n\
             #######",
        )
        .unwrap()
    }

    #[test]
    fn test_spawn_at_start_facing_east() {
        let maze = corridor();
        let explorer = Explorer::spawn(&maze, 3);
        assert_eq!(explorer.location(), maze.start());
        assert_eq!(explorer.direction(), Direction::East);
        assert_eq!(explorer.health(), 3);
    }

    #[test]
    fn test_four_right_turns_close_the_cycle() {
        for dir in Direction::iter() {
            let mut explorer = Explorer::new(Location::new(0, 0), dir, 1);
            for _ in 0..3 {
                explorer.turn(RelativeDirection::Right);
                assert_ne!(explorer.direction(), dir);
            }
            explorer.turn(RelativeDirection::Right);
            assert_eq!(explorer.direction(), dir);
        }
    }

    #[test]
    fn test_move_into_wall_is_noop() {
        let maze = corridor();
        let mut explorer = Explorer::spawn(&maze, 1);
        explorer.turn(RelativeDirection::Left);
        assert_eq!(explorer.move_forward(&maze), MoveOutcome::Blocked);
        assert_eq!(explorer.move_forward(&maze), MoveOutcome::Blocked);
        assert_eq!(explorer.location(), maze.start());
    }

    #[test]
    fn test_move_and_back() {
        let maze = corridor();
        let mut explorer = Explorer::spawn(&maze, 1);
        let origin = explorer.location();
        assert_eq!(
            explorer.move_forward(&maze),
            MoveOutcome::Moved(Location::new(1, 2))
        );
        explorer.turn(RelativeDirection::Right);
        explorer.turn(RelativeDirection::Right);
        explorer.move_forward(&maze);
        assert_eq!(explorer.location(), origin);
    }

    #[test]
    fn test_never_leaves_grid() {
        let maze = Maze::parse("SE").unwrap();
        let mut explorer = Explorer::spawn(&maze, 1);
        explorer.move_forward(&maze);
        assert_eq!(explorer.move_forward(&maze), MoveOutcome::Blocked);
        assert_eq!(explorer.location(), Location::new(0, 1));
    }

    #[test]
    fn test_damage_saturates() {
        let mut explorer = Explorer::new(Location::new(0, 0), Direction::North, 2);
        explorer.take_damage(5);
        assert_eq!(explorer.health(), 0);
        assert!(!explorer.is_alive());
    }

    fn open_field() -> Maze {
        Maze::parse(
            ".......\n\
             .......\n\
             ...S...\n\
             .......\n\
             ......E",
        )
        .unwrap()
    }

    fn any_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::North),
            Just(Direction::East),
            Just(Direction::South),
            Just(Direction::West),
        ]
    }

    proptest! {
        #[test]
        fn prop_turn_around_and_back_returns_home(dir in any_direction()) {
            let maze = open_field();
            let mut explorer = Explorer::new(maze.start(), dir, 1);
            let home = explorer.location();
            explorer.move_forward(&maze);
            explorer.turn(RelativeDirection::Left);
            explorer.turn(RelativeDirection::Left);
            explorer.move_forward(&maze);
            prop_assert_eq!(explorer.location(), home);
        }

        #[test]
        fn prop_position_stays_in_bounds(
            steps in proptest::collection::vec(0u8..3, 0..60)
        ) {
            let maze = open_field();
            let mut explorer = Explorer::spawn(&maze, 1);
            for step in steps {
                match step {
                    0 => { explorer.move_forward(&maze); }
                    1 => explorer.turn(RelativeDirection::Left),
                    _ => explorer.turn(RelativeDirection::Right),
                }
                let loc = explorer.location();
                prop_assert!(maze.in_bounds(loc.row, loc.col));
                prop_assert!(maze.is_passable_at(loc));
            }
        }
    }
}
