//! Renderer and clock abstractions used by the game loop.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};

use crate::render::draw_frame;
use crate::session::FrameView;

/// Trait for rendering a frame snapshot
pub trait Renderer {
    /// Initialize the renderer
    fn init(&mut self) -> anyhow::Result<()>;

    /// Draw one frame
    fn draw(&mut self, view: &FrameView) -> anyhow::Result<()>;

    /// Cleanup resources
    fn cleanup(&mut self) -> anyhow::Result<()>;
}

/// Trait for time management
pub trait Clock {
    fn now(&self) -> Instant;

    fn sleep(&self, duration: Duration);

    /// Fixed period between two state checks
    fn tick_rate(&self) -> Duration;
}

/// Wall clock
#[derive(Debug, Clone)]
pub struct SystemClock {
    tick_rate: Duration,
}

impl SystemClock {
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }

    fn tick_rate(&self) -> Duration {
        self.tick_rate
    }
}

/// Ratatui renderer over any backend
pub struct TuiRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl TuiRenderer<CrosstermBackend<Stdout>> {
    pub fn stdout() -> anyhow::Result<Self> {
        Self::new(CrosstermBackend::new(io::stdout()))
    }
}

impl<B: Backend> TuiRenderer<B> {
    pub fn new(backend: B) -> anyhow::Result<Self> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
        })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> Renderer for TuiRenderer<B> {
    fn init(&mut self) -> anyhow::Result<()> {
        self.terminal.clear()?;
        self.terminal.hide_cursor()?;
        Ok(())
    }

    fn draw(&mut self, view: &FrameView) -> anyhow::Result<()> {
        self.terminal.draw(|f| draw_frame(f, view))?;
        Ok(())
    }

    fn cleanup(&mut self) -> anyhow::Result<()> {
        self.terminal.show_cursor()?;
        Ok(())
    }
}
