// THEORY:
// Wall-clock timing of a unit of work. `Stopwatch` accumulates elapsed time
// across start/stop pairs; `time` restarts it, runs an action and stops it, and
// the free functions are one-shot shortcuts for the same thing.
//
// `time_future` measures an awaited future with tokio's clock, so it follows
// the runtime's notion of time (including paused time in tests that enable it).

use std::fmt;
use std::future::Future;
use std::time::{Duration, Instant};

/// Accumulating wall-clock timer.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl Stopwatch {
    /// A stopped stopwatch at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// A stopwatch that is already running.
    pub fn start_new() -> Self {
        let mut stopwatch = Self::new();
        stopwatch.start();
        stopwatch
    }

    /// Starts or resumes timing. No-op while running.
    pub fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    /// Stops timing and keeps the elapsed time. No-op while stopped.
    pub fn stop(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += started_at.elapsed();
        }
    }

    /// Stops and zeroes.
    pub fn reset(&mut self) {
        self.started_at = None;
        self.accumulated = Duration::ZERO;
    }

    /// Zeroes and starts again.
    pub fn restart(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started_at = Some(Instant::now());
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Total time spent running, including the current run if any.
    pub fn elapsed(&self) -> Duration {
        self.accumulated + self.started_at.map_or(Duration::ZERO, |s| s.elapsed())
    }

    /// Restarts, runs `action`, stops. The stopwatch then holds exactly the
    /// time `action` took.
    pub fn time<F: FnOnce()>(&mut self, action: F) -> &mut Self {
        self.restart();
        action();
        self.stop();
        self
    }
}

impl fmt::Display for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3?}", self.elapsed())
    }
}

/// How long `action` took to run.
pub fn time_action<F: FnOnce()>(action: F) -> Duration {
    Stopwatch::new().time(action).elapsed()
}

/// Runs `f` and returns its result with the time it took.
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let started_at = Instant::now();
    let output = f();
    (output, started_at.elapsed())
}

/// Awaits `future` and returns its output with the time it took.
pub async fn time_future<F: Future>(future: F) -> (F::Output, Duration) {
    let started_at = tokio::time::Instant::now();
    let output = future.await;
    (output, started_at.elapsed())
}
