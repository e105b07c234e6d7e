use std::time::Duration;

pub const DEFAULT_POOL_SIZE: usize = 10;
pub const DEFAULT_TIME_LIMIT: u32 = 15;
pub const DEFAULT_ADVANCE_DELAY: u32 = 2;
pub const DEFAULT_TICK_MILLIS: u64 = 1000;

/// Tunables for a quiz session. Times are counted in ticks of length `tick`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// Maximum number of questions drawn for one play-through.
    pub pool_size: usize,
    /// Ticks allowed per question.
    pub time_limit: u32,
    /// Ticks to wait after an answer or timeout before moving on.
    pub advance_delay: u32,
    pub tick: Duration,
    /// Fixed seed for question and option order; random when `None`.
    pub seed: Option<u64>,
}

impl QuizConfig {
    pub fn advance_delay_duration(&self) -> Duration {
        self.tick * self.advance_delay
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            time_limit: DEFAULT_TIME_LIMIT,
            advance_delay: DEFAULT_ADVANCE_DELAY,
            tick: Duration::from_millis(DEFAULT_TICK_MILLIS),
            seed: None,
        }
    }
}
