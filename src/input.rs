//! Keyboard input: key mapping, input sources and the input thread.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, error, info};

use crate::session::{SharedSession, lock_session};

/// Discrete game input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameInput {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    Quit,
}

/// Map a key press to a game input. Releases and repeats are ignored.
pub fn key_to_input(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(GameInput::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameInput::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameInput::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameInput::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameInput::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameInput::Confirm),
        KeyCode::Esc => Some(GameInput::Cancel),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameInput::Quit),
        _ => None,
    }
}

/// Source of game inputs
pub trait InputSource {
    /// Wait up to `timeout` for the next input.
    fn poll(&mut self, timeout: Duration) -> anyhow::Result<Option<GameInput>>;
}

/// Reads the terminal keyboard through crossterm.
#[derive(Debug, Default)]
pub struct ConsoleInput;

impl ConsoleInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for ConsoleInput {
    fn poll(&mut self, timeout: Duration) -> anyhow::Result<Option<GameInput>> {
        if !event::poll(timeout).context("Failed to poll terminal events")? {
            return Ok(None);
        }
        match event::read().context("Failed to read terminal event")? {
            Event::Key(key) => Ok(key_to_input(key)),
            _ => Ok(None),
        }
    }
}

/// Any iterator of inputs works as a scripted source; an exhausted script
/// just idles.
impl<I> InputSource for I
where
    I: Iterator<Item = GameInput>,
{
    fn poll(&mut self, timeout: Duration) -> anyhow::Result<Option<GameInput>> {
        match self.next() {
            Some(input) => Ok(Some(input)),
            None => {
                thread::sleep(timeout);
                Ok(None)
            }
        }
    }
}

/// Run `source` on its own thread, feeding every input into the session.
/// The thread ends once the session reaches `Exited`. If the source fails,
/// the session is moved to `Exited` before the error is returned so the
/// loop thread stops too.
pub fn spawn_input_thread<S>(
    mut source: S,
    session: SharedSession,
    poll_timeout: Duration,
) -> anyhow::Result<JoinHandle<anyhow::Result<()>>>
where
    S: InputSource + Send + 'static,
{
    thread::Builder::new()
        .name("input".into())
        .spawn(move || {
            debug!("input thread started");
            let result = pump_inputs(&mut source, &session, poll_timeout);
            if let Err(err) = &result {
                error!(error = %err, "input thread failed");
                if let Ok(mut session) = lock_session(&session) {
                    session.handle_input(GameInput::Quit);
                }
            }
            info!("input thread stopped");
            result
        })
        .context("Failed to spawn input thread")
}

fn pump_inputs<S: InputSource>(
    source: &mut S,
    session: &SharedSession,
    poll_timeout: Duration,
) -> anyhow::Result<()> {
    loop {
        if lock_session(session)?.phase().is_exited() {
            return Ok(());
        }
        if let Some(input) = source.poll(poll_timeout)? {
            let mut session = lock_session(session)?;
            debug!(?input, phase = ?session.phase(), "input");
            session.handle_input(input);
        }
    }
}
