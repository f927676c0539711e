//! Frame pacing for the presentation loop.

use std::thread;
use std::time::{Duration, Instant};

/// Target redraw rate of the presentation loop.
pub const FRAMES_PER_SECOND: u32 = 24;

/// Caps a render loop at a fixed cadence: after each redraw, call
/// [`tick`](FramePacer::tick) to sleep off whatever remains of the frame
/// budget (~41 ms at 24 FPS). A frame that overruns its budget is not
/// compensated for; the next frame simply starts immediately.
#[derive(Debug)]
pub struct FramePacer {
    budget: Duration,
    frame_start: Instant,
}

impl FramePacer {
    /// A pacer at the default [`FRAMES_PER_SECOND`].
    pub fn new() -> Self {
        Self::with_rate(FRAMES_PER_SECOND)
    }

    /// A pacer at `fps` frames per second (must be > 0).
    pub fn with_rate(fps: u32) -> Self {
        Self {
            budget: Duration::from_secs(1) / fps,
            frame_start: Instant::now(),
        }
    }

    /// Sleep off the remainder of the current frame budget and begin the
    /// next frame.
    pub fn tick(&mut self) {
        let elapsed = self.frame_start.elapsed();
        if elapsed < self.budget {
            thread::sleep(self.budget - elapsed);
        }
        self.frame_start = Instant::now();
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new()
    }
}
