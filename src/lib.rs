//! # SiK Radio Kernel
//!
//! Boot and real-time tick kernel for Si1000-class packet radio modems.
//!
//! ## Boot Order
//!
//! ```text
//! capture board identity ─▶ load parameters ─▶ peripherals ─▶ radio ─▶ receiver on ─▶ TDM loop
//!                                                   │
//!                                                   └─ arms the 200 Hz tick (TickIsr)
//! ```
//!
//! Everything past the kernel (parameter storage, the UART driver, the AT parser, TDM,
//! frequency hopping, the PHY driver) is reached through the traits in [`hal`].

#![cfg_attr(not(test), no_std)]
#![cfg_attr(feature = "pc", feature(abi_x86_interrupt))]

pub mod board;
pub mod config;
pub mod console;
pub mod error;
pub mod hal;
pub mod interrupts;
pub mod kernel;
pub mod panic;
#[cfg(feature = "pc")]
pub mod pc;

use spin::Once;

use crate::board::BoardIdentity;
use crate::interrupts::delay::DelayCounter;

pub use crate::config::{BANNER, VERSION};
pub use crate::error::FatalError;

/// Process-wide kernel state. Lives for the whole power cycle.
pub struct Runtime {
    delay: DelayCounter,
    identity: Once<BoardIdentity>,
}

impl Runtime {
    pub const fn new() -> Self {
        Self {
            delay: DelayCounter::new(),
            identity: Once::new(),
        }
    }

    pub fn delay(&self) -> &DelayCounter {
        &self.delay
    }

    /// Stores the identity read from the bootloader stash. Only the first capture sticks.
    pub fn capture_identity(&self, read: impl FnOnce() -> BoardIdentity) -> &BoardIdentity {
        self.identity.call_once(read)
    }

    pub fn identity(&self) -> Option<&BoardIdentity> {
        self.identity.get()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

pub static RUNTIME: Runtime = Runtime::new();

/// Board identity captured at boot, `None` before [`kernel::boot::BootSequencer`] ran.
pub fn board_identity() -> Option<&'static BoardIdentity> {
    RUNTIME.identity()
}

pub fn delay_set(msec: u16) {
    RUNTIME.delay.set(msec);
}

pub fn delay_set_ticks(ticks: u8) {
    RUNTIME.delay.set_ticks(ticks);
}

pub fn delay_expired() -> bool {
    RUNTIME.delay.expired()
}

/// Busy-waits `msec`. Needs the tick interrupt running, never call it from the tick.
pub fn delay_msec(msec: u16) {
    RUNTIME.delay.wait_msec(msec);
}
