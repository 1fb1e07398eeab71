//! # Interrupt Context
//!
//! Everything that runs from, or is advanced by, the tick interrupt.
//!
//! - **tick**: the interrupt body and its ordered callback list
//! - **delay**: the countdown the tick advances
//!
//! ## Usage
//!
//! ```ignore
//! static TICK: TickIsr<'static> = TickIsr::new(&BOARD, &AT_TIMER, &TDM_TICK, RUNTIME.delay());
//!
//! // in the timer vector:
//! TICK.service();
//! ```

pub mod delay;
pub mod tick;

pub use delay::DelayCounter;
pub use tick::TickIsr;
