use std::io;

use anyhow::Context;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use tracing::{error, info};

use maze_explorer::{
    config::GameConfig,
    game_loop::GameLoop,
    input::{ConsoleInput, GameInput, spawn_input_thread},
    logging::init_logging,
    renderer::{SystemClock, TuiRenderer},
    session::{GameSession, lock_session},
};

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn main() -> anyhow::Result<()> {
    let config_path = GameConfig::default_path();
    let config = GameConfig::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let _log_guard = init_logging(&config.log_dir)?;
    info!(levels = config.levels.len(), render_distance = config.projection.render_distance, "starting");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let _terminal = scopeguard::guard((), |_| restore_terminal());
    execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let tick_rate = config.tick_rate();
    let session = GameSession::new(config).into_shared();
    let input_thread = spawn_input_thread(ConsoleInput::new(), session.clone(), tick_rate)?;

    let renderer = TuiRenderer::stdout().context("Failed to create terminal")?;
    let mut game_loop = GameLoop::new(session.clone(), renderer, SystemClock::new(tick_rate));
    let result = game_loop.run();

    if let Err(err) = &result {
        error!(error = %err, "game loop failed");
        // let the input thread see the exit
        lock_session(&session)?.handle_input(GameInput::Quit);
    }

    input_thread
        .join()
        .map_err(|_| anyhow::anyhow!("input thread panicked"))??;

    result
}
