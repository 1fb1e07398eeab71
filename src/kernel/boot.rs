//! Top-level boot sequence.
//!
//! 1. capture board identity (before any SFR is written)
//! 2. load parameters, falling back to defaults without comment
//! 3. peripherals
//! 4. radio
//! 5. receiver on
//! 6. hand the CPU to the TDM serial loop
//!
//! Console output starts once the UART is up. Boards whose UART carries user data
//! leave the console uninstalled.

use crate::board::Board;
use crate::config::{Param, BANNER, TICK_HZ};
use crate::error::FatalError;
use crate::hal::{FreqHopper, ParamStore, Phy, Tdm, Uart};
use crate::kernel::peripherals;
use crate::kernel::radio::{self, RadioLayers, RadioSettings};
use crate::kernel::status::{set_stage, BootStage};
use crate::{fatal, kprintln, Runtime};

/// Hardware and collaborators the boot drives.
pub struct Platform<'a> {
    pub board: &'a mut dyn Board,
    pub params: &'a mut dyn ParamStore,
    pub uart: &'a mut dyn Uart,
    pub phy: &'a mut dyn Phy,
    pub tdm: &'a mut dyn Tdm,
    pub fhop: &'a mut dyn FreqHopper,
}

pub struct BootSequencer<'a> {
    platform: Platform<'a>,
    runtime: &'a Runtime,
}

impl<'a> BootSequencer<'a> {
    pub fn new(platform: Platform<'a>, runtime: &'a Runtime) -> Self {
        Self { platform, runtime }
    }

    /// Steps 1 to 5. Stops at the first fatal condition.
    pub fn bring_up(&mut self) -> Result<RadioSettings, FatalError> {
        let p = &mut self.platform;

        set_stage(BootStage::Identity);
        let board = &*p.board;
        let identity = *self.runtime.capture_identity(|| board.read_identity());

        set_stage(BootStage::Config);
        if p.params.load().is_err() {
            p.params.set_defaults();
        }

        set_stage(BootStage::Peripherals);
        peripherals::bring_up(p.board, p.uart, p.params.get(Param::SerialSpeed));
        kprintln!("{}", BANNER);
        kprintln!(
            "[1/3] peripherals up, {} Hz tick, bootloader {}",
            TICK_HZ,
            identity.bootloader_version
        );

        set_stage(BootStage::Radio);
        let mut layers = RadioLayers {
            phy: &mut *p.phy,
            tdm: &mut *p.tdm,
            fhop: &mut *p.fhop,
        };
        let settings = radio::bring_up(&mut layers, &identity, &*p.params)?;
        kprintln!(
            "[2/3] radio {} Hz, channel {}, net {}, {} bps",
            settings.base_frequency_hz,
            settings.channel,
            settings.net_id,
            settings.air_speed_bps
        );

        set_stage(BootStage::Receiver);
        p.phy.receiver_on().map_err(|_| FatalError::ReceiverOn)?;
        kprintln!("[3/3] receiver on");

        set_stage(BootStage::Running);
        Ok(settings)
    }

    /// Boots and enters the TDM loop, or halts through [`crate::panic`].
    pub fn run(mut self) -> ! {
        if let Err(e) = self.bring_up() {
            fatal!("{}", e);
        }
        self.platform.tdm.serial_loop()
    }
}
