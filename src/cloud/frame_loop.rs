//! Explicit animation loop with an injected frame source.
//!
//! A browser reschedules its animation callback from inside itself. Here the
//! "request next frame" capability is a [`FrameScheduler`] handed to
//! [`TagCloud::run`], so a test can drive exactly as many frames as it wants.

use super::renderer::{Pointer, TagCloud};
use super::surface::Surface;
use std::time::Duration;

/// Source of presentation ticks.
pub trait FrameScheduler {
    /// Waits for the next frame and returns its timestamp since start, or
    /// `None` when the loop should stop.
    fn request_frame(&mut self) -> Option<Duration>;
}

/// Source of the current pointer position.
pub trait PointerSource {
    fn pointer(&self) -> Pointer;
}

impl PointerSource for Pointer {
    fn pointer(&self) -> Pointer {
        *self
    }
}

impl<F: Fn() -> Pointer> PointerSource for F {
    fn pointer(&self) -> Pointer {
        self()
    }
}

/// Yields a fixed number of frames at a fixed interval, without waiting.
#[derive(Debug, Clone)]
pub struct FixedFrames {
    remaining: usize,
    interval: Duration,
    now: Duration,
}

impl FixedFrames {
    /// About one frame at 60 Hz.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(16);

    #[must_use]
    pub const fn new(count: usize) -> Self {
        Self::with_interval(count, Self::DEFAULT_INTERVAL)
    }

    #[must_use]
    pub const fn with_interval(count: usize, interval: Duration) -> Self {
        Self {
            remaining: count,
            interval,
            now: Duration::ZERO,
        }
    }
}

impl FrameScheduler for FixedFrames {
    fn request_frame(&mut self) -> Option<Duration> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.now += self.interval;
        Some(self.now)
    }
}

/// Like [`FixedFrames`], but sleeps the thread between frames.
#[derive(Debug, Clone)]
pub struct PacedFrames {
    inner: FixedFrames,
}

impl PacedFrames {
    #[must_use]
    pub const fn new(count: usize, interval: Duration) -> Self {
        Self {
            inner: FixedFrames::with_interval(count, interval),
        }
    }
}

impl FrameScheduler for PacedFrames {
    fn request_frame(&mut self) -> Option<Duration> {
        let now = self.inner.request_frame()?;
        std::thread::sleep(self.inner.interval);
        Some(now)
    }
}

impl TagCloud {
    /// Runs step-then-draw once per frame until `scheduler` stops.
    ///
    /// Returns the number of frames rendered.
    pub fn run<S, F, P>(&mut self, surface: &mut S, scheduler: &mut F, pointer: &P) -> usize
    where
        S: Surface + ?Sized,
        F: FrameScheduler + ?Sized,
        P: PointerSource + ?Sized,
    {
        let _span = tracing::debug_span!("tag_cloud_run").entered();

        let mut frames = 0;
        while let Some(at) = scheduler.request_frame() {
            self.step(pointer.pointer());
            self.draw(surface);
            frames += 1;
            tracing::trace!(frame = frames, at_ms = at.as_millis() as u64, "frame rendered");
        }

        tracing::debug!(frames, "tag cloud loop finished");
        frames
    }
}
