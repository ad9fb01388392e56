use instant::Instant;

/// Monotonic time since the host started, shared by frame ticks and input events.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn now_sec(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.now_sec() * 1000.0
    }
}
