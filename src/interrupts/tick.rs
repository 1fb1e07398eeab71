//! # Tick Interrupt
//!
//! Runs every 5 ms (200 Hz) from the tick timer.
//!
//! | Step | Action                         |
//! |------|--------------------------------|
//! | 0    | re-arm the timer               |
//! | 1    | AT parser timeout tick         |
//! | 2    | TDM heartbeat tick             |
//! | 3    | delay counter -1 (stops at 0)  |
//!
//! The AT layer sees each tick before TDM does.

use crate::board::TickSource;
use crate::hal::TickHook;
use crate::interrupts::delay::DelayCounter;

pub const TICK_HOOKS: usize = 2;

pub struct TickIsr<'a> {
    source: &'a dyn TickSource,
    /// Called in order: AT parser, then TDM.
    hooks: [&'a dyn TickHook; TICK_HOOKS],
    delay: &'a DelayCounter,
}

impl<'a> TickIsr<'a> {
    pub const fn new(
        source: &'a dyn TickSource,
        at_timer: &'a dyn TickHook,
        tdm_tick: &'a dyn TickHook,
        delay: &'a DelayCounter,
    ) -> Self {
        Self {
            source,
            hooks: [at_timer, tdm_tick],
            delay,
        }
    }

    pub fn hooks(&self) -> &[&'a dyn TickHook; TICK_HOOKS] {
        &self.hooks
    }

    /// Interrupt body. Bind it to the tick vector.
    pub fn service(&self) {
        self.source.rearm();
        for hook in self.hooks {
            hook.tick();
        }
        self.delay.tick();
    }
}
