//! Per-frame timing.
//!
//! Provides [`FrameClock`], which measures the real elapsed time between
//! frames so the scene advances at the same speed regardless of refresh
//! rate.

use std::time::Instant;

/// Longest frame delta fed to the simulation, in seconds.
///
/// A stall (debugger pause, window drag on some platforms) would otherwise
/// teleport the animation forward by the whole stall.
pub const MAX_FRAME_TIME: f32 = 0.25;

/// Clamp a raw frame delta to the simulation ceiling.
pub fn clamp_frame_time(raw_dt: f32) -> f32 {
    if raw_dt > MAX_FRAME_TIME {
        log::warn!("Frame took {raw_dt:.3}s, clamping to {MAX_FRAME_TIME}s");
        MAX_FRAME_TIME
    } else {
        raw_dt
    }
}

/// Measures wall-clock time between frames.
pub struct FrameClock {
    last_frame: Instant,
    frame_count: u64,
}

impl FrameClock {
    /// Create a new clock. The first tick measures from this moment.
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            frame_count: 0,
        }
    }

    /// Advance the clock and return the clamped frame delta in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let raw_dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;
        clamp_frame_time(raw_dt)
    }

    /// Total frames ticked since creation.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
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
    fn test_short_delta_passes_through() {
        assert_eq!(clamp_frame_time(0.016), 0.016);
        assert_eq!(clamp_frame_time(0.0), 0.0);
    }

    #[test]
    fn test_long_delta_is_clamped() {
        assert_eq!(clamp_frame_time(1.5), MAX_FRAME_TIME);
        assert_eq!(clamp_frame_time(MAX_FRAME_TIME + f32::EPSILON), MAX_FRAME_TIME);
    }

    #[test]
    fn test_ceiling_itself_is_not_clamped() {
        assert_eq!(clamp_frame_time(MAX_FRAME_TIME), MAX_FRAME_TIME);
    }

    #[test]
    fn test_tick_counts_frames() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.frame_count(), 0);
        clock.tick();
        clock.tick();
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_tick_returns_non_negative_delta() {
        let mut clock = FrameClock::new();
        let dt = clock.tick();
        assert!(dt >= 0.0);
        assert!(dt <= MAX_FRAME_TIME);
    }
}
