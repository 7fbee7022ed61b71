//! 游戏错误处理模块
//!
//! 处理迷宫加载、网格访问、配置读取过程中可能出现的错误。

use thiserror::Error;

/// 迷宫核心可能出现的错误类型
#[derive(Debug, Error)]
pub enum MazeError {
    /// 网格越界访问（属于编程错误，正常流程不会出现）
    #[error("cell ({row}, {col}) is outside the maze grid")]
    OutOfBounds { row: i32, col: i32 },

    /// 迷宫文件格式错误
    #[error("invalid maze data: {0}")]
    InvalidMazeData(String),

    /// IO操作错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 配置文件错误
    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for MazeError {
    fn from(err: serde_json::Error) -> Self {
        MazeError::Config(err.to_string())
    }
}

impl MazeError {
    /// 构造迷宫数据错误
    pub fn invalid(reason: impl Into<String>) -> Self {
        MazeError::InvalidMazeData(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, MazeError>;

/// 处理错误并转换为用户友好的消息
pub fn handle_error(error: &MazeError) -> String {
    match error {
        MazeError::InvalidMazeData(reason) => format!("Level file is broken: {}", reason),
        MazeError::Io(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "Level file not found".to_string(),
            std::io::ErrorKind::PermissionDenied => "No permission to read level file".to_string(),
            _ => format!("IO error: {}", e),
        },
        _ => error.to_string(),
    }
}
