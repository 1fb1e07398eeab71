//! Tick-counted countdown.
//!
//! One byte, counted down once per tick by [`super::tick::TickIsr`]. Main-line code sets it
//! and polls it. Each side does a single byte-wide store, so no lock is needed; a
//! setter racing a decrement is off by at most one tick.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::config::TICK_PERIOD_MS;

pub struct DelayCounter {
    ticks: AtomicU8,
}

/// Ticks needed to cover `msec`, rounded up, saturating at `u8::MAX`.
pub const fn ticks_for_msec(msec: u16) -> u8 {
    let ticks = msec.div_ceil(TICK_PERIOD_MS);
    if ticks > u8::MAX as u16 {
        u8::MAX
    } else {
        ticks as u8
    }
}

impl DelayCounter {
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU8::new(0),
        }
    }

    pub fn set(&self, msec: u16) {
        self.set_ticks(ticks_for_msec(msec));
    }

    pub fn set_ticks(&self, ticks: u8) {
        self.ticks.store(ticks, Ordering::Relaxed);
    }

    pub fn expired(&self) -> bool {
        self.ticks.load(Ordering::Relaxed) == 0
    }

    pub fn wait_msec(&self, msec: u16) {
        self.set(msec);
        while !self.expired() {
            core::hint::spin_loop();
        }
    }

    /// Tick-side decrement; stops at zero. The interrupt is the only decrementer, so a
    /// plain load and store is enough and no compare-and-swap is needed.
    pub(crate) fn tick(&self) {
        let ticks = self.ticks.load(Ordering::Relaxed);
        if ticks > 0 {
            self.ticks.store(ticks - 1, Ordering::Relaxed);
        }
    }

    #[cfg(test)]
    pub(crate) fn remaining(&self) -> u8 {
        self.ticks.load(Ordering::Relaxed)
    }
}

impl Default for DelayCounter {
    fn default() -> Self {
        Self::new()
    }
}
