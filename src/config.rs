//! Game configuration, read from a JSON file next to the binary.
//!
//! Every field has a default, so a config file only needs the keys it
//! overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use error::{MazeError, Result};
use projection::ProjectionConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Default config file name.
pub const CONFIG_FILE: &str = "maze_explorer.json";
/// Environment variable overriding the config path.
pub const CONFIG_ENV: &str = "MAZE_EXPLORER_CONFIG";
/// Upper bound on starting health.
pub const MAX_INITIAL_HEALTH: u32 = 99;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Corridor view geometry
    pub projection: ProjectionConfig,
    /// Explorer health on level load
    pub initial_health: u32,
    /// Redraw/state-check period
    pub tick_rate_ms: u64,
    /// How long the win/lose screen stays up
    pub game_over_delay_ms: u64,
    /// Level files, in level-select order
    pub levels: Vec<PathBuf>,
    /// Terminal columns per maze cell in the 2D map
    pub map_cell_width: u16,
    pub log_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            projection: ProjectionConfig::default(),
            initial_health: 3,
            tick_rate_ms: 50,
            game_over_delay_ms: 1000,
            levels: (1..=3)
                .map(|n| PathBuf::from(format!("mazes/maze{}.txt", n)))
                .collect(),
            map_cell_width: 2,
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl GameConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn game_over_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_delay_ms)
    }

    /// Path from `MAZE_EXPLORER_CONFIG`, falling back to `maze_explorer.json`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Load from `path`; a missing file yields the defaults, a malformed one
    /// is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let distance = self.projection.render_distance;
        let max = self.projection.max_render_distance();
        if !(1..=max).contains(&distance) {
            return Err(MazeError::Config(format!(
                "render_distance must be between 1 and {}, got {}",
                max, distance
            )));
        }
        if !(1..=MAX_INITIAL_HEALTH).contains(&self.initial_health) {
            return Err(MazeError::Config(format!(
                "initial_health must be between 1 and {}, got {}",
                MAX_INITIAL_HEALTH, self.initial_health
            )));
        }
        if self.tick_rate_ms == 0 {
            return Err(MazeError::Config("tick_rate_ms must be positive".into()));
        }
        Ok(())
    }
}
