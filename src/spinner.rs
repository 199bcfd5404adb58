#![forbid(unsafe_code)]

//! Deterministic spinner frame selection.
//!
//! A [`Spinner`] maps elapsed visible time to an animation frame. It holds no
//! mutable tick state: the frame is a pure function of elapsed time and the
//! frame duration, so rendering at any poll cadence (or replaying a recorded
//! timeline) always produces the same frames.

use std::time::Duration;

use web_time::Instant;

use crate::gate::VisibilityGate;

/// Braille spinner frames (the usual 10-frame dots cycle).
pub const DOTS_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// ASCII fallback frames for terminals without braille glyphs.
pub const LINE_FRAMES: &[&str] = &["|", "/", "-", "\\"];

/// Elapsed-time-driven spinner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spinner {
    frames: &'static [&'static str],
    frame_duration: Duration,
}

impl Spinner {
    /// Create a spinner from a non-empty frame set.
    ///
    /// A zero `frame_duration` freezes the animation on the first frame.
    #[must_use]
    pub const fn new(frames: &'static [&'static str], frame_duration: Duration) -> Self {
        assert!(!frames.is_empty(), "spinner needs at least one frame");
        Self {
            frames,
            frame_duration,
        }
    }

    /// Braille dots at 80 ms per frame.
    #[must_use]
    pub const fn dots() -> Self {
        Self::new(DOTS_FRAMES, Duration::from_millis(80))
    }

    /// ASCII line at 100 ms per frame.
    #[must_use]
    pub const fn line() -> Self {
        Self::new(LINE_FRAMES, Duration::from_millis(100))
    }

    /// Number of frames in the cycle.
    #[must_use]
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Duration of one frame.
    #[must_use]
    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// The frame for a given elapsed visible time.
    #[must_use]
    pub fn frame_at(&self, elapsed: Duration) -> &'static str {
        if self.frame_duration.is_zero() {
            return self.frames[0];
        }
        let ticks = elapsed.as_nanos() / self.frame_duration.as_nanos();
        self.frames[(ticks % self.frames.len() as u128) as usize]
    }

    /// The frame to render for a gate, or `None` while the gate is hidden.
    #[must_use]
    pub fn frame_for(&self, gate: &VisibilityGate, now: Instant) -> Option<&'static str> {
        gate.visible_for(now).map(|elapsed| self.frame_at(elapsed))
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::dots()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::GateConfig;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn frame_advances_every_frame_duration() {
        let spinner = Spinner::dots();
        assert_eq!(spinner.frame_at(ms(0)), DOTS_FRAMES[0]);
        assert_eq!(spinner.frame_at(ms(79)), DOTS_FRAMES[0]);
        assert_eq!(spinner.frame_at(ms(80)), DOTS_FRAMES[1]);
        assert_eq!(spinner.frame_at(ms(165)), DOTS_FRAMES[2]);
    }

    #[test]
    fn cycle_wraps() {
        let spinner = Spinner::line();
        // 4 frames at 100 ms: 400 ms is a full cycle.
        assert_eq!(spinner.frame_at(ms(400)), LINE_FRAMES[0]);
        assert_eq!(spinner.frame_at(ms(500)), LINE_FRAMES[1]);
    }

    #[test]
    fn same_elapsed_same_frame() {
        // Pure function of elapsed time: replays are stable.
        let spinner = Spinner::dots();
        assert_eq!(spinner.frame_at(ms(1234)), spinner.frame_at(ms(1234)));
    }

    #[test]
    fn zero_frame_duration_freezes() {
        let spinner = Spinner::new(LINE_FRAMES, ms(0));
        assert_eq!(spinner.frame_at(ms(0)), LINE_FRAMES[0]);
        assert_eq!(spinner.frame_at(ms(5000)), LINE_FRAMES[0]);
    }

    #[test]
    fn no_frame_while_gate_hidden() {
        let spinner = Spinner::dots();
        let mut gate = VisibilityGate::new(GateConfig::new(ms(100), ms(100)));
        let t0 = Instant::now();

        assert_eq!(spinner.frame_for(&gate, t0), None);
        gate.set_busy(true, t0);
        assert_eq!(spinner.frame_for(&gate, t0 + ms(50)), None);

        gate.poll(t0 + ms(100));
        // 85 ms visible: second frame of the 80 ms cycle.
        assert_eq!(
            spinner.frame_for(&gate, t0 + ms(185)),
            Some(DOTS_FRAMES[1])
        );
    }
}
