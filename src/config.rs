//! Build-time constants and the runtime parameter set.

use crate::hal::{ParamError, ParamStore};

// literal tokens so `concat!` can build the strings from them
macro_rules! app_version {
    (high) => {
        1
    };
    (low) => {
        9
    };
}

macro_rules! board_name {
    () => {
        "HM-TRP"
    };
}

pub const APP_VERSION_HIGH: u8 = app_version!(high);
pub const APP_VERSION_LOW: u8 = app_version!(low);

pub const BOARD_NAME: &str = board_name!();

pub const VERSION: &str = concat!(app_version!(high), ".", app_version!(low));
pub const BANNER: &str = concat!(
    "SiK ",
    app_version!(high),
    ".",
    app_version!(low),
    " on ",
    board_name!()
);

/// Si1000 internal oscillator, prescale 1.
pub const SYSCLK_HZ: u32 = 24_500_000;

pub const TICK_HZ: u32 = 200;
pub const TICK_PERIOD_MS: u16 = (1000 / TICK_HZ) as u16;

pub const NUM_FREQ_CHANNELS: u8 = 50;

/// 50 channels of 250 kHz span 12.5 MHz.
pub const CHANNEL_SPACING_HZ: u32 = 250_000;

pub const DEFAULT_SERIAL_SPEED: u32 = 57;
pub const DEFAULT_AIR_SPEED: u32 = 64;
pub const DEFAULT_NETID: u32 = 25;

const _: () = assert!(TICK_PERIOD_MS as u32 * TICK_HZ == 1000);

/// Keys understood by [`ParamStore::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    /// Serial speed code, see [`serial_baud`].
    SerialSpeed,
    /// Air data rate in kbps.
    AirSpeed,
    NetId,
}

/// Maps a serial speed code (`57`) to its baud rate (`57600`).
pub fn serial_baud(code: u32) -> Option<u32> {
    let baud = match code {
        1 => 1_200,
        2 => 2_400,
        4 => 4_800,
        9 => 9_600,
        19 => 19_200,
        38 => 38_400,
        57 => 57_600,
        115 => 115_200,
        230 => 230_400,
        _ => return None,
    };
    Some(baud)
}

/// Parameter set held in RAM, for boards without persistent storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters {
    pub serial_speed: u32,
    pub air_speed: u32,
    pub net_id: u32,
}

impl Parameters {
    pub const DEFAULT: Self = Self {
        serial_speed: DEFAULT_SERIAL_SPEED,
        air_speed: DEFAULT_AIR_SPEED,
        net_id: DEFAULT_NETID,
    };
}

impl Default for Parameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ParamStore for Parameters {
    fn load(&mut self) -> Result<(), ParamError> {
        // nothing persisted to load from
        Err(ParamError)
    }

    fn set_defaults(&mut self) {
        *self = Self::DEFAULT;
    }

    fn get(&self, param: Param) -> u32 {
        match param {
            Param::SerialSpeed => self.serial_speed,
            Param::AirSpeed => self.air_speed,
            Param::NetId => self.net_id,
        }
    }
}
