//! # External Collaborators
//!
//! Call contracts for the subsystems the kernel drives but does not own.
//!
//! | Trait        | Called from      | Fallible |
//! |--------------|------------------|----------|
//! | `ParamStore` | boot             | `load`   |
//! | `Uart`       | peripherals      | no       |
//! | `Phy`        | radio, boot      | `initialise`, `configure`, `receiver_on` |
//! | `Tdm`        | radio, boot      | no       |
//! | `FreqHopper` | radio            | no       |
//! | `TickHook`   | tick interrupt   | no       |

use crate::config::Param;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhyError;

/// Persisted configuration.
pub trait ParamStore {
    fn load(&mut self) -> Result<(), ParamError>;
    fn set_defaults(&mut self);
    fn get(&self, param: Param) -> u32;
}

pub trait Uart {
    /// `speed` is the serial speed parameter code.
    fn init(&mut self, speed: u32);
}

/// Radio transceiver driver.
pub trait Phy {
    fn initialise(&mut self) -> Result<(), PhyError>;
    fn set_frequency(&mut self, hz: u32);
    fn set_channel_spacing(&mut self, hz: u32);
    fn set_channel(&mut self, channel: u8);
    fn configure(&mut self, air_speed_bps: u32) -> Result<(), PhyError>;
    fn set_network_id(&mut self, net_id: u16);
    fn receiver_on(&mut self) -> Result<(), PhyError>;
}

/// Time-division channel access. The tick half is a separate [`TickHook`].
pub trait Tdm {
    fn init(&mut self);
    /// Main serial/radio loop. Owns the CPU from here on.
    fn serial_loop(&mut self) -> !;
}

pub trait FreqHopper {
    fn init(&mut self, net_id: u16);
}

/// Periodic callback run from the tick interrupt.
///
/// Must return quickly and never wait on the delay counter, which only advances from the
/// same interrupt.
pub trait TickHook: Sync {
    fn tick(&self);
}
