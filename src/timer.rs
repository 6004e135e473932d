//! Cooperative countdown for timed runs.
//!
//! There is no background alarm: the loop samples the timer once per turn.

use std::time::{Duration, Instant};

/// Threshold below which the loop prints an urgency warning.
const LOW_TIME: Duration = Duration::from_secs(60);

/// A countdown from a fixed limit, started when the game begins.
#[derive(Debug, Clone, Copy)]
pub struct GameTimer {
    started: Instant,
    limit: Duration,
}

impl GameTimer {
    pub fn new(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            limit,
        }
    }

    /// Remaining time, saturating at zero.
    pub fn remaining(&self) -> Duration {
        self.limit.saturating_sub(self.started.elapsed())
    }

    pub fn expired(&self) -> bool {
        self.remaining().is_zero()
    }

    /// True while time remains but is running low.
    pub fn low(&self) -> bool {
        let remaining = self.remaining();
        !remaining.is_zero() && remaining <= LOW_TIME
    }
}

/// Format a duration as `m:ss`.
pub fn format_mmss(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
