use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// The loop runs unthrottled, so delta time is clamped to keep diagnostics sane
/// when the process is stopped in a debugger or the window is minimized.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
        }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_up_from_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn back_to_back_ticks_get_minimum_dt() {
        let mut clock = FrameClock::new();
        let ft = clock.tick();
        assert!(ft.dt >= Duration::from_micros(100).as_secs_f32());
    }

    #[test]
    fn long_stalls_are_clamped() {
        let mut clock = FrameClock::new();
        clock.last = Instant::now() - Duration::from_secs(5);
        let ft = clock.tick();
        assert_eq!(ft.dt, Duration::from_millis(250).as_secs_f32());
    }
}
