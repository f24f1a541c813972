//! Time management utilities

use std::time::{Duration, Instant};

/// Frame limiter for a fixed target framerate
///
/// Tracks frame timing and sleeps off the remainder of each frame budget.
/// A framerate of 0 disables limiting.
pub struct FrameLimiter {
    frame_budget: Option<Duration>,
    last_frame: Instant,
    delta_time: f32,
    frame_count: u64,
}

impl FrameLimiter {
    /// Create a limiter targeting `framerate` frames per second
    pub fn new(framerate: u32) -> Self {
        let frame_budget = (framerate > 0).then(|| Duration::from_secs_f64(1.0 / f64::from(framerate)));
        Self {
            frame_budget,
            last_frame: Instant::now(),
            delta_time: 0.0,
            frame_count: 0,
        }
    }

    /// Finish the current frame, sleeping if it ran ahead of budget
    pub fn end_frame(&mut self) {
        if let Some(budget) = self.frame_budget {
            let elapsed = self.last_frame.elapsed();
            if elapsed < budget {
                std::thread::sleep(budget - elapsed);
            }
        }

        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Duration of the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Number of frames ended so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Target frame duration, if limiting is enabled
    pub fn frame_budget(&self) -> Option<Duration> {
        self.frame_budget
    }
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new(60)
    }
}

/// Simple stopwatch for measuring elapsed time
pub struct Stopwatch {
    start_time: Option<Instant>,
    elapsed: Duration,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Create a new stopped stopwatch
    pub fn new() -> Self {
        Self {
            start_time: None,
            elapsed: Duration::ZERO,
        }
    }

    /// Create a new stopwatch and start it immediately
    pub fn start_new() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }

    /// Start the stopwatch
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Stop the stopwatch and accumulate elapsed time
    pub fn stop(&mut self) {
        if let Some(start) = self.start_time {
            self.elapsed += start.elapsed();
            self.start_time = None;
        }
    }

    /// Get the elapsed time
    pub fn elapsed(&self) -> Duration {
        let current_elapsed = self.start_time.map_or(Duration::ZERO, |start| start.elapsed());
        self.elapsed + current_elapsed
    }

    /// Get the elapsed time in milliseconds
    pub fn elapsed_millis(&self) -> f32 {
        self.elapsed().as_secs_f32() * 1000.0
    }

    /// Check if the stopwatch is currently running
    pub fn is_running(&self) -> bool {
        self.start_time.is_some()
    }
}
