#![forbid(unsafe_code)]

//! Visibility gating for loading indicators.
//!
//! [`VisibilityGate`] converts a raw, possibly rapidly-flickering busy
//! boolean into a stable show/hide signal: the indicator never flashes for
//! operations shorter than the entry delay, and once shown it stays up for at
//! least the minimum dwell time even if the operation finishes sooner.
//!
//! The gate is a two-state machine (Hidden, Visible) owning at most one
//! pending deadline at a time. It performs no I/O and never reads a clock:
//! the host supplies `now` on every call, which makes the whole machine
//! deterministic under test (no sleeping, no mocked timers). Hosts with an
//! event loop use [`VisibilityGate::time_until_wake`] to bound their poll
//! timeout, the same way a resize coalescer bounds a frame loop.
//!
//! ```
//! use std::time::Duration;
//! use loadgate::{GateConfig, GateTransition, VisibilityGate};
//! use web_time::Instant;
//!
//! let mut gate = VisibilityGate::new(GateConfig::default());
//! let t0 = Instant::now();
//!
//! gate.set_busy(true, t0);
//! assert!(!gate.is_visible(), "entry delay not yet elapsed");
//!
//! let shown = gate.poll(t0 + Duration::from_millis(180));
//! assert_eq!(shown, Some(GateTransition::Shown));
//! assert!(gate.is_visible());
//! ```
//!
//! # Invariants
//!
//! 1. At most one deadline (show or hide) is armed at any time.
//! 2. The gate is visible iff its shown-at timestamp is set.
//! 3. Once visible, the gate stays visible for at least the configured
//!    minimum dwell, except when disposed.
//! 4. Delivering the same busy value twice in a row causes no transition
//!    beyond what the first delivery caused.
//! 5. After [`VisibilityGate::dispose`], no subscriber callback ever fires.

use std::time::Duration;

use web_time::Instant;

use crate::reactive::{Observable, Subscription};

/// Default time the busy signal must hold true before the indicator shows.
pub const DEFAULT_ENTRY_DELAY: Duration = Duration::from_millis(180);

/// Default minimum time the indicator, once shown, stays up.
pub const DEFAULT_MINIMUM_DWELL: Duration = Duration::from_millis(320);

/// Timing configuration for a [`VisibilityGate`].
///
/// Both durations may be zero: a zero entry delay shows the indicator on the
/// first poll after busy rises, a zero dwell allows hiding on the falling
/// edge itself. Negative durations are unrepresentable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GateConfig {
    /// Time the busy signal must stay true before the indicator becomes
    /// visible.
    pub entry_delay: Duration,
    /// Minimum time the indicator, once visible, remains visible.
    pub minimum_dwell: Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            entry_delay: DEFAULT_ENTRY_DELAY,
            minimum_dwell: DEFAULT_MINIMUM_DWELL,
        }
    }
}

impl GateConfig {
    /// Create a config with explicit delays.
    #[must_use]
    pub const fn new(entry_delay: Duration, minimum_dwell: Duration) -> Self {
        Self {
            entry_delay,
            minimum_dwell,
        }
    }

    /// Replace the entry delay.
    #[must_use]
    pub const fn with_entry_delay(mut self, delay: Duration) -> Self {
        self.entry_delay = delay;
        self
    }

    /// Replace the minimum dwell.
    #[must_use]
    pub const fn with_minimum_dwell(mut self, dwell: Duration) -> Self {
        self.minimum_dwell = dwell;
        self
    }
}

/// A visibility change produced by [`VisibilityGate::set_busy`] or
/// [`VisibilityGate::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateTransition {
    /// The indicator just became visible.
    Shown,
    /// The indicator just became hidden.
    Hidden,
}

/// The single armed deadline. Show and hide are mutually exclusive by
/// construction (invariant 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Show { deadline: Instant },
    Hide { deadline: Instant },
}

impl Pending {
    const fn deadline(self) -> Instant {
        match self {
            Self::Show { deadline } | Self::Hide { deadline } => deadline,
        }
    }
}

/// Flicker-suppressing visibility controller for one loading indicator.
///
/// Drive it with [`set_busy`](Self::set_busy) on every busy-signal change and
/// [`poll`](Self::poll) on host wakeups; read the output with
/// [`is_visible`](Self::is_visible) or bind it via
/// [`subscribe`](Self::subscribe). One gate per indicator; instances are
/// fully independent.
#[derive(Debug)]
pub struct VisibilityGate {
    config: GateConfig,
    busy: bool,
    shown_at: Option<Instant>,
    pending: Option<Pending>,
    visible: Observable<bool>,
    disposed: bool,
}

impl VisibilityGate {
    /// Create a hidden gate with the given timing configuration.
    #[must_use]
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            busy: false,
            shown_at: None,
            pending: None,
            visible: Observable::new(false),
            disposed: false,
        }
    }

    /// Create a hidden gate with [`GateConfig::default`] timings.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(GateConfig::default())
    }

    /// Current timing configuration.
    #[must_use]
    pub const fn config(&self) -> GateConfig {
        self.config
    }

    /// Replace the timing configuration.
    ///
    /// An already-armed deadline keeps the duration captured when it was
    /// armed; the new values apply from the next transition on.
    pub fn set_config(&mut self, config: GateConfig) {
        self.config = config;
    }

    /// Whether the loading indicator should currently be rendered.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.shown_at.is_some()
    }

    /// Last busy value delivered via [`set_busy`](Self::set_busy).
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// How long the indicator has been visible, or `None` while hidden.
    #[must_use]
    pub fn visible_for(&self, now: Instant) -> Option<Duration> {
        self.shown_at
            .map(|shown_at| now.saturating_duration_since(shown_at))
    }

    /// Subscribe to visibility changes. The callback receives the new value
    /// after every transition until the guard is dropped.
    #[must_use = "dropping the subscription immediately unsubscribes"]
    pub fn subscribe(&self, callback: impl Fn(&bool) + 'static) -> Subscription {
        self.visible.subscribe(callback)
    }

    /// The armed deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(Pending::deadline)
    }

    /// Time until the armed deadline is due, for bounding a host poll
    /// timeout. Returns `Duration::ZERO` when the deadline is already due,
    /// `None` when nothing is armed.
    #[must_use]
    pub fn time_until_wake(&self, now: Instant) -> Option<Duration> {
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Deliver the busy signal.
    ///
    /// Idempotent on repeated values. A due deadline is fired before the edge
    /// is applied, so an expired timer and an edge arriving in the same host
    /// wakeup are processed in queue order. Returns the net visibility change
    /// this call produced; a show and a hide collapsing within one call (only
    /// possible with a zero dwell) yield `None`, though subscribers observe
    /// both notifications.
    pub fn set_busy(&mut self, busy: bool, now: Instant) -> Option<GateTransition> {
        if self.disposed {
            return None;
        }
        let fired = self.fire_due(now);
        if busy == self.busy {
            return fired;
        }
        self.busy = busy;
        let edge = if busy {
            self.on_rising_edge(now)
        } else {
            self.on_falling_edge(now)
        };
        match (fired, edge) {
            (Some(GateTransition::Shown), Some(GateTransition::Hidden)) => None,
            (fired, None) => fired,
            (_, edge) => edge,
        }
    }

    /// Fire the armed deadline if it is due. Call on every host wakeup;
    /// returns the transition produced, if any.
    pub fn poll(&mut self, now: Instant) -> Option<GateTransition> {
        if self.disposed {
            return None;
        }
        self.fire_due(now)
    }

    /// Tear the gate down: cancel any armed deadline and mute it permanently.
    ///
    /// Mandatory before dropping the output binding out from under a pending
    /// timer; afterwards every operation is a no-op and no subscriber
    /// callback fires. The current visibility value is left as-is.
    pub fn dispose(&mut self) {
        self.pending = None;
        self.disposed = true;
    }

    fn fire_due(&mut self, now: Instant) -> Option<GateTransition> {
        let pending = self.pending?;
        if pending.deadline() > now {
            return None;
        }
        self.pending = None;
        match pending {
            Pending::Show { .. } => {
                self.shown_at = Some(now);
                self.visible.set(true);
                #[cfg(feature = "tracing")]
                tracing::trace!(target: "loadgate::gate", "indicator shown");
                Some(GateTransition::Shown)
            }
            Pending::Hide { .. } => {
                // A rising edge always cancels the hide deadline first, so
                // busy must still be false here (consistency check only).
                debug_assert!(!self.busy, "hide deadline survived a rising edge");
                if self.busy {
                    return None;
                }
                self.hide_now()
            }
        }
    }

    fn on_rising_edge(&mut self, now: Instant) -> Option<GateTransition> {
        if matches!(self.pending, Some(Pending::Hide { .. })) {
            // The operation resumed before the dwell expired: continuation of
            // the previous cycle, not a new one.
            self.pending = None;
        }
        if self.shown_at.is_some() {
            return None;
        }
        if self.pending.is_none() {
            self.pending = Some(Pending::Show {
                deadline: now + self.config.entry_delay,
            });
        }
        None
    }

    fn on_falling_edge(&mut self, now: Instant) -> Option<GateTransition> {
        if matches!(self.pending, Some(Pending::Show { .. })) {
            // Finished before the entry delay elapsed: the indicator must
            // never have appeared.
            self.pending = None;
        }
        let shown_at = self.shown_at?;
        let elapsed = now.saturating_duration_since(shown_at);
        if elapsed >= self.config.minimum_dwell {
            self.hide_now()
        } else {
            self.pending = Some(Pending::Hide {
                deadline: shown_at + self.config.minimum_dwell,
            });
            None
        }
    }

    fn hide_now(&mut self) -> Option<GateTransition> {
        self.shown_at = None;
        self.visible.set(false);
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "loadgate::gate", "indicator hidden");
        Some(GateTransition::Hidden)
    }
}

impl Default for VisibilityGate {
    fn default() -> Self {
        Self::with_defaults()
    }
}
