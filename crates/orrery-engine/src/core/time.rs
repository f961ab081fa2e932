/// Per-frame clock fed by host timestamps.
///
/// `std::time::Instant` is unavailable on wasm32-unknown-unknown, so the
/// host passes its monotonic clock reading (e.g. the requestAnimationFrame
/// timestamp) into every tick and the clock differences them. The reference
/// advances on every call, paused or not, so a sim that skips motion while
/// paused never sees a catch-up delta on resume.
pub struct FrameClock {
    /// Timestamp of the previous tick, in seconds. None before the first tick.
    last_seconds: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_seconds: None }
    }

    /// Advance the clock to `now_seconds` and return the elapsed delta.
    /// The first call returns 0.0; a host clock that steps backwards is
    /// clamped to 0.0 rather than producing negative time.
    pub fn tick(&mut self, now_seconds: f64) -> f32 {
        let dt = match self.last_seconds {
            Some(last) => (now_seconds - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_seconds = Some(now_seconds);
        dt
    }

    /// Forget the reference timestamp; the next tick returns 0.0 again.
    pub fn reset(&mut self) {
        self.last_seconds = None;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
