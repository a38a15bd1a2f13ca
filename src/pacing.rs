// Frame pacing: pad each loop iteration up to the target frame period.

use std::thread;
use std::time::{Duration, Instant};

pub struct FramePacer {
    period: Duration,
}

impl FramePacer {
    /// `target_fps == 0` turns pacing off.
    pub fn new(target_fps: u32) -> Self {
        let period = if target_fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(1) / target_fps
        };
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time left in this frame's budget; zero once the work ran over.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.period.saturating_sub(elapsed)
    }

    /// Sleep out the rest of the frame that began at `frame_start`.
    /// A late frame does not shorten the next one.
    pub fn wait(&self, frame_start: Instant) {
        let left = self.remaining(frame_start.elapsed());
        if !left.is_zero() {
            thread::sleep(left);
        }
    }
}

/// Counts presented frames and reports the rate once per second.
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self { window_start: now, frames: 0 }
    }

    /// Record one frame at `now`; returns frames per second when a full second has passed.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let span = now.duration_since(self.window_start);
        if span < Duration::from_secs(1) {
            return None;
        }
        let fps = self.frames as f32 / span.as_secs_f32();
        self.frames = 0;
        self.window_start = now;
        Some(fps)
    }
}
