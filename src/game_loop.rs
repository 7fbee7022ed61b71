//! 游戏循环：固定周期的状态检查与重绘。
//!
//! 输入线程独立修改会话；循环线程每个 tick 只做三件事：
//! - 推进会话时间（胜负检测、结算倒计时）
//! - 取一份 `FrameView` 快照
//! - 释放锁后交给渲染器绘制

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::renderer::{Clock, Renderer};
use crate::session::{SharedSession, lock_session};

pub struct GameLoop<R: Renderer, C: Clock> {
    pub session: SharedSession,
    pub renderer: R,
    pub clock: C,
    last_tick: Instant,
    frames: u64,
}

impl<R: Renderer, C: Clock> GameLoop<R, C> {
    pub fn new(session: SharedSession, renderer: R, clock: C) -> Self {
        let last_tick = clock.now();
        Self {
            session,
            renderer,
            clock,
            last_tick,
            frames: 0,
        }
    }

    /// 已绘制的帧数
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// 执行一个 tick，会话进入 `Exited` 时返回 `false`
    pub fn run_frame(&mut self) -> anyhow::Result<bool> {
        let now = self.clock.now();
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;

        let view = {
            let mut session = lock_session(&self.session)?;
            session.tick(dt);
            if session.phase().is_exited() {
                return Ok(false);
            }
            session.frame()
        };

        self.renderer.draw(&view)?;
        self.frames += 1;
        Ok(true)
    }

    /// 主循环，直到会话退出
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.renderer.init()?;
        info!(tick_rate_ms = self.clock.tick_rate().as_millis() as u64, "game loop started");

        let result = self.run_until_exit();

        let cleanup = self.renderer.cleanup();
        info!(frames = self.frames, "game loop stopped");
        match (result, cleanup) {
            (Err(err), Err(cleanup_err)) => {
                warn!(error = %cleanup_err, "renderer cleanup failed");
                Err(err)
            }
            (Err(err), Ok(())) => Err(err),
            (Ok(()), cleanup) => cleanup,
        }
    }

    fn run_until_exit(&mut self) -> anyhow::Result<()> {
        while self.run_frame()? {
            let spent = self.clock.now().saturating_duration_since(self.last_tick);
            let wait = self.clock.tick_rate().saturating_sub(spent);
            if wait > Duration::ZERO {
                self.clock.sleep(wait);
            } else {
                debug!(spent_ms = spent.as_millis() as u64, "frame over budget");
            }
        }
        Ok(())
    }
}
