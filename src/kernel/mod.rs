//! # Kernel Bring-up
//!
//! - `boot`: top-level sequence, ends in the TDM loop or a halt
//! - `peripherals`: clocks, pins, SPI, tick timer, UART, interrupt enable
//! - `radio`: PHY, channel plan, TDM and hopping init
//! - `status`: boot stage tracking
//!
//! ## Failure Policy
//!
//! Parameter load failure is absorbed (defaults). Everything else that fails is a
//! [`crate::FatalError`] and ends in [`crate::panic::panic`]; there is no retry.

pub mod boot;
pub mod peripherals;
pub mod radio;
pub mod status;

pub use boot::{BootSequencer, Platform};
pub use status::{set_stage, stage, BootStage};
