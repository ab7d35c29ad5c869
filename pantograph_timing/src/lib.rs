// Copyright 2026 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pantograph_timing --heading-base-level=0

//! Pantograph Timing: host-agnostic timer scheduling primitives.
//!
//! Gesture pipelines need to defer small amounts of work: expiring a tap
//! window, stepping a smoothed zoom, coalescing a burst of wheel input. This
//! crate provides the seam those components schedule through without knowing
//! anything about the host's event loop:
//!
//! - [`Timer`]: the scheduling trait. Components request a fixed number of
//!   ticks at a fixed cadence and receive a [`ScheduleHandle`] they can use to
//!   cancel early.
//! - [`Tick`]: one delivered firing, carrying its handle and whether it is the
//!   final tick of its schedule.
//! - [`ManualTimer`]: a deterministic queue for hosts without a native
//!   scheduler, and for tests. The owner advances a virtual clock and collects
//!   the ticks that came due.
//!
//! Delivery is host-driven. A [`Timer`] implementation never calls back into
//! components; the host collects due [`Tick`]s and hands each one to the
//! component that retained the matching handle. Components are expected to
//! check the handle against the one they stored and ignore ticks from
//! schedules they have since abandoned.
//!
//! ## Minimal example
//!
//! ```rust
//! use pantograph_timing::{ManualTimer, Timer};
//!
//! let mut timer = ManualTimer::new();
//!
//! // Three ticks, 10ms apart.
//! let handle = timer.schedule(3, 10);
//!
//! // Nothing is due yet.
//! assert!(timer.advance(9).is_empty());
//!
//! // Crossing the due time delivers the first tick.
//! let ticks = timer.advance(1);
//! assert_eq!(ticks.len(), 1);
//! assert_eq!(ticks[0].handle, handle);
//! assert!(!ticks[0].last);
//!
//! // A large advance delivers the remaining ticks in order; the final
//! // one is flagged.
//! let ticks = timer.advance(100);
//! assert_eq!(ticks.len(), 2);
//! assert!(ticks[1].last);
//! ```
//!
//! ## Host integration
//!
//! Hosts with a real scheduler (an OS timer wheel, a frame callback, a JS
//! `setInterval` shim) implement [`Timer`] themselves, minting handles with
//! [`ScheduleHandle::from_raw`] and delivering ticks back through whatever
//! channel the application uses. [`ManualTimer`] is the reference
//! implementation of the contract and the one the rest of this workspace
//! tests against.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Identifier for one pending schedule issued by a [`Timer`].
///
/// Handles are opaque tokens. The only operations callers need are equality
/// (to match a delivered [`Tick`] against a retained handle) and
/// [`Timer::cancel`]. A handle stays valid as an argument to `cancel` after
/// its schedule finishes; cancelling a finished schedule is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScheduleHandle(u64);

impl ScheduleHandle {
    /// Creates a handle from a raw id.
    ///
    /// Intended for host [`Timer`] implementations that mint handles from
    /// their own id space. Components should only use handles returned by
    /// [`Timer::schedule`].
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id backing this handle.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// One delivered firing of a schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// The schedule this tick belongs to.
    pub handle: ScheduleHandle,
    /// `true` on the final tick of its schedule.
    ///
    /// After a tick with `last` set, the schedule is finished and its handle
    /// will not fire again.
    pub last: bool,
}

/// Scheduling seam for time-deferred work.
///
/// A schedule fires exactly `repeats` times, `interval_ms` apart, with the
/// first tick one interval after the call. The final tick carries
/// [`Tick::last`]. A schedule with zero repeats never fires.
///
/// Implementations never call back into the scheduling component; ticks are
/// delivered by the host, which routes each [`Tick`] to the component holding
/// the matching handle.
pub trait Timer {
    /// Schedules `repeats` ticks spaced `interval_ms` apart.
    ///
    /// Returns the handle identifying the new schedule. Passing `repeats == 0`
    /// still returns a fresh handle, but nothing is enqueued.
    fn schedule(&mut self, repeats: u32, interval_ms: u64) -> ScheduleHandle;

    /// Cancels the schedule identified by `handle`.
    ///
    /// Remaining ticks are discarded. Cancelling a handle whose schedule has
    /// already finished, or a handle this timer never issued, is a no-op.
    fn cancel(&mut self, handle: ScheduleHandle);
}

#[derive(Clone, Debug)]
struct Pending {
    handle: ScheduleHandle,
    due_ms: u64,
    interval_ms: u64,
    remaining: u32,
}

/// Deterministic timer queue driven by an explicit clock.
///
/// `ManualTimer` keeps a virtual clock in milliseconds. [`ManualTimer::advance`]
/// moves the clock forward and returns every tick that came due, in firing
/// order: by due time, with simultaneous ticks ordered by when their schedules
/// were created.
///
/// This is the [`Timer`] implementation used by tests and by hosts that pump
/// time themselves (for example from a frame loop that knows the elapsed
/// milliseconds since the previous frame).
#[derive(Clone, Debug, Default)]
pub struct ManualTimer {
    now_ms: u64,
    next_id: u64,
    pending: Vec<Pending>,
}

impl ManualTimer {
    /// Creates a timer with the clock at zero and no pending schedules.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Returns the current value of the virtual clock in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Returns `true` if no schedules are pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Returns the number of live schedules.
    #[must_use]
    pub fn pending_schedules(&self) -> usize {
        self.pending.len()
    }

    /// Advances the clock by `ms` and returns the ticks that came due.
    ///
    /// Ticks due at or before the new clock value fire, in firing order.
    /// Handles issued earlier win ties. `advance(0)` fires ticks whose due
    /// time equals the current clock, which matters for schedules created
    /// with a zero interval.
    pub fn advance(&mut self, ms: u64) -> Vec<Tick> {
        let target = self.now_ms.saturating_add(ms);
        let mut fired = Vec::new();

        loop {
            // Earliest due schedule at or before `target`; creation order
            // breaks ties, and handle ids are issued monotonically.
            let due = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, p)| p.due_ms <= target)
                .min_by_key(|(_, p)| (p.due_ms, p.handle.0))
                .map(|(idx, _)| idx);
            let Some(idx) = due else {
                break;
            };

            let pending = &mut self.pending[idx];
            pending.remaining -= 1;
            let last = pending.remaining == 0;
            fired.push(Tick {
                handle: pending.handle,
                last,
            });

            if last {
                self.pending.swap_remove(idx);
            } else {
                pending.due_ms += pending.interval_ms;
            }
        }

        self.now_ms = target;
        fired
    }
}

impl Timer for ManualTimer {
    fn schedule(&mut self, repeats: u32, interval_ms: u64) -> ScheduleHandle {
        let handle = ScheduleHandle(self.next_id);
        self.next_id += 1;

        if repeats > 0 {
            self.pending.push(Pending {
                handle,
                due_ms: self.now_ms.saturating_add(interval_ms),
                interval_ms,
                remaining: repeats,
            });
        }

        handle
    }

    fn cancel(&mut self, handle: ScheduleHandle) {
        self.pending.retain(|p| p.handle != handle);
    }
}
