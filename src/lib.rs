#![forbid(unsafe_code)]

//! Flicker-free visibility gating for loading indicators.
//!
//! Loading indicators that track a raw busy signal flash annoyingly: a fast
//! operation flickers the spinner for a frame or two, and an operation that
//! finishes just after the spinner appears yanks it away before anyone can
//! read it. [`VisibilityGate`] suppresses both by debouncing the rising edge
//! (entry delay) and enforcing a minimum visible duration on the falling edge
//! (minimum dwell).
//!
//! The gate never reads a clock or spawns a timer thread. The host supplies
//! `now` with every call and uses [`VisibilityGate::time_until_wake`] to
//! bound its event-loop timeout, so the machine is single-threaded,
//! allocation-free on the hot path, and fully deterministic under test.
//!
//! ```
//! use std::time::Duration;
//! use loadgate::{GateConfig, Spinner, VisibilityGate};
//! use web_time::Instant;
//!
//! let mut gate = VisibilityGate::new(
//!     GateConfig::default().with_entry_delay(Duration::from_millis(150)),
//! );
//! let spinner = Spinner::dots();
//!
//! let t0 = Instant::now();
//! gate.set_busy(true, t0);
//!
//! // ... host event loop, 200 ms later ...
//! let now = t0 + Duration::from_millis(200);
//! gate.poll(now);
//! if let Some(frame) = spinner.frame_for(&gate, now) {
//!     print!("{frame} loading…");
//! }
//! ```
//!
//! The companion modules cover the rest of a list-browsing UI's polish
//! layer: [`spinner`] for deterministic frame selection and [`pagination`]
//! for page-button windowing. [`reactive`] provides the observable boolean
//! the gate publishes its output through.

pub mod gate;
pub mod pagination;
pub mod reactive;
pub mod spinner;

pub use gate::{
    DEFAULT_ENTRY_DELAY, DEFAULT_MINIMUM_DWELL, GateConfig, GateTransition, VisibilityGate,
};
pub use pagination::{DEFAULT_SIBLINGS, PageToken, PageWindow, page_window};
pub use reactive::{Observable, Subscription};
pub use spinner::{DOTS_FRAMES, LINE_FRAMES, Spinner};
