/// Fraction of a tick a refresh may fall short and still earn it.
/// Browsers quantize frame timestamps (100 us or 1 ms), so 60 Hz deltas
/// arrive as 16/17/17 ms; the shortfall is borrowed from the next frame.
const TICK_SLACK: f64 = 0.1;

/// Converts refresh timestamps into a whole number of simulation ticks.
///
/// The host hands over the timestamp it received from its repaint scheduler;
/// the clock carries the sub-tick remainder between frames and caps catch-up
/// after long pauses (e.g. a hidden browser tab).
pub struct FrameClock {
    tick_seconds: f64,
    max_ticks: u32,
    last_ms: Option<f64>,
    accumulator: f64,
}

impl FrameClock {
    pub fn new(tick_seconds: f32, max_ticks: u32) -> Self {
        Self {
            tick_seconds: tick_seconds as f64,
            max_ticks: max_ticks.max(1),
            last_ms: None,
            accumulator: 0.0,
        }
    }

    /// Ticks to simulate for a refresh at `timestamp_ms`.
    /// The first refresh after construction or [`reset`](Self::reset) always gets one.
    pub fn advance(&mut self, timestamp_ms: f64) -> u32 {
        let Some(last) = self.last_ms.replace(timestamp_ms) else {
            return 1;
        };
        if self.tick_seconds <= 0.0 {
            return 1;
        }

        let cap = self.tick_seconds * self.max_ticks as f64;
        let elapsed = ((timestamp_ms - last) / 1000.0).max(0.0);
        self.accumulator = (self.accumulator + elapsed).min(cap);

        let slack = self.tick_seconds * TICK_SLACK;
        let ticks = ((self.accumulator + slack) / self.tick_seconds).max(0.0) as u32;
        let ticks = ticks.min(self.max_ticks);
        // May dip below zero by at most `slack`; the debt is repaid next frame.
        self.accumulator = (self.accumulator - ticks as f64 * self.tick_seconds).max(-slack);
        ticks
    }

    /// Forget the previous timestamp, e.g. after the loop was paused.
    pub fn reset(&mut self) {
        self.last_ms = None;
        self.accumulator = 0.0;
    }
}
