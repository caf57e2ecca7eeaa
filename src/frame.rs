use std::time::Instant;

/// Per-frame metadata handed to the demo loop: frame number, seconds since
/// the clock started and seconds since the previous frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

/// Infinite iterator yielding one `FrameInfo` per displayed frame.
///
/// Hosts drive the per-frame work from it, calling the manager's
/// `before_frame()` once per yielded item:
/// `for frame in FrameClock::new().take(n) { ... }`
pub struct FrameClock {
    next_frame: u64,
    started_at: Instant,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            next_frame: 0,
            started_at: now,
            last_tick: now,
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FrameClock {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let now = Instant::now();
        let last = std::mem::replace(&mut self.last_tick, now);

        let info = FrameInfo {
            number: self.next_frame,
            time: now.duration_since(self.started_at).as_secs_f32(),
            delta: now.duration_since(last).as_secs_f32(),
        };
        self.next_frame += 1;
        Some(info)
    }
}
