//! Scheduling state for the scroll-driven effects.
//!
//! These types hold no timers themselves; the adapter owns the actual
//! animation-frame and timeout handles and consults them to decide whether to
//! schedule and whether a fired callback is still current.

/// At most one pending animation-frame callback.
///
/// `request` returns `true` only when no callback is pending; the caller then
/// schedules one and calls `complete` from inside it once the work is done.
#[derive(Debug, Default)]
pub struct FrameThrottle {
    ticking: bool,
    requested: u64,
    collapsed: u64,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event. Returns whether a frame must be scheduled.
    #[inline]
    pub fn request(&mut self) -> bool {
        self.requested = self.requested.wrapping_add(1);
        if self.ticking {
            self.collapsed = self.collapsed.wrapping_add(1);
            return false;
        }
        self.ticking = true;
        true
    }

    /// Clear the flag after the scheduled callback ran.
    #[inline]
    pub fn complete(&mut self) {
        self.ticking = false;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.ticking
    }

    /// Events absorbed by an already pending frame.
    pub fn collapsed(&self) -> u64 {
        self.collapsed
    }

    pub fn requested(&self) -> u64 {
        self.requested
    }
}

/// Token identifying one scheduled debounce callback.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DebounceTicket(u64);

/// Trailing-edge debounce: each `trigger` supersedes every earlier one, and a
/// fired callback only runs if its ticket is still the latest.
#[derive(Debug, Default)]
pub struct Debouncer {
    generation: u64,
    armed: bool,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new quiet window. Any earlier ticket becomes stale.
    pub fn trigger(&mut self) -> DebounceTicket {
        self.generation = self.generation.wrapping_add(1);
        self.armed = true;
        DebounceTicket(self.generation)
    }

    /// Called when a timer fires. Returns `true` exactly once, for the latest
    /// ticket.
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        if self.armed && ticket.0 == self.generation {
            self.armed = false;
            return true;
        }
        false
    }

    /// Drop the pending window without firing.
    pub fn cancel(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
