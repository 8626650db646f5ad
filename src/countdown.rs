//! Countdown driver: one tick per second for the active question.
//!
//! A driver is started for a specific session generation and stamps every
//! tick with it, so a tick that outlives its question (after an advance or
//! a restart) is recognizably stale and discarded by the session. The
//! event loop replaces the driver whenever the generation changes and
//! stops polling it once the session is finished.

use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Wall-clock length of one countdown tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub struct Countdown {
    generation: u64,
    ticker: Interval,
}

impl Countdown {
    /// Start ticking for the question window `generation`. The first tick
    /// fires one full period from now.
    pub fn start(generation: u64) -> Self {
        Self::with_period(generation, TICK_PERIOD)
    }

    fn with_period(generation: u64, period: Duration) -> Self {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { generation, ticker }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Wait for the next tick and return the generation it belongs to.
    pub async fn tick(&mut self) -> u64 {
        self.ticker.tick().await;
        self.generation
    }
}
