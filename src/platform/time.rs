//! Frame clock

/// Turns host frame timestamps (milliseconds) into per-frame elapsed time
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed ms since the previous timestamp. The first frame reports 0,
    /// as does a timestamp that runs backwards.
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last {
            Some(last) if timestamp_ms > last => (timestamp_ms - last) as f32,
            _ => 0.0,
        };
        self.last = Some(timestamp_ms);
        dt
    }

    /// Forget the last timestamp (after a pause, for instance)
    pub fn reset(&mut self) {
        self.last = None;
    }
}
