//! # Board Support
//!
//! Identity left behind by the bootloader, and the hardware steps peripheral bring-up
//! drives through [`Board`].
//!
//! | Board      | Module    | Tick source            |
//! |------------|-----------|------------------------|
//! | Si1000     | `si1000`  | timer 3, SYSCLK / 12   |
//! | x86 bench  | `pc`      | PIT channel 0          |

pub mod si1000;

/// Frequency band the board was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Mhz433,
    Mhz470,
    Mhz868,
    Mhz915,
    /// Any other bootloader code, including "no band" (`0xf0`).
    Unsupported(u8),
}

impl Band {
    pub const CODE_433: u8 = 0x43;
    pub const CODE_470: u8 = 0x47;
    pub const CODE_868: u8 = 0x86;
    pub const CODE_915: u8 = 0x91;
    pub const CODE_NONE: u8 = 0xf0;

    pub const fn from_code(code: u8) -> Self {
        match code {
            Self::CODE_433 => Band::Mhz433,
            Self::CODE_470 => Band::Mhz470,
            Self::CODE_868 => Band::Mhz868,
            Self::CODE_915 => Band::Mhz915,
            other => Band::Unsupported(other),
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Band::Mhz433 => Self::CODE_433,
            Band::Mhz470 => Self::CODE_470,
            Band::Mhz868 => Self::CODE_868,
            Band::Mhz915 => Self::CODE_915,
            Band::Unsupported(code) => code,
        }
    }
}

impl From<u8> for Band {
    fn from(code: u8) -> Self {
        Band::from_code(code)
    }
}

/// Read from the bootloader stash before anything reconfigures the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardIdentity {
    pub frequency: Band,
    pub bootloader_version: u8,
}

/// SPI master setup. The radio sits on a 3-wire bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiConfig {
    /// Raw clock-rate register value; SCK = SYSCLK / (2 * (prescale + 1)).
    pub prescale: u8,
    /// Slave-select level while idle.
    pub nss_idle_high: bool,
}

impl SpiConfig {
    /// Divide-by-2: 12.25 MHz at 24.5 MHz SYSCLK.
    pub const RADIO: Self = Self {
        prescale: 0,
        nss_idle_high: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLeds {
    pub radio: bool,
    pub bootloader: bool,
}

impl StatusLeds {
    pub const RUNNING: Self = Self {
        radio: true,
        bootloader: false,
    };
}

/// Hardware steps of peripheral bring-up, called in order by
/// [`crate::kernel::peripherals::bring_up`] with interrupts off.
pub trait Board {
    fn read_identity(&self) -> BoardIdentity;

    /// Clock feeding the tick timer's counter.
    fn tick_timer_clock_hz(&self) -> u32;

    fn disable_watchdog(&mut self);
    fn select_clock(&mut self);
    /// Enables the supply monitor and waits for it to settle.
    fn enable_brownout(&mut self);
    fn enable_reset_sources(&mut self);
    fn route_uart_pins(&mut self);
    fn configure_spi(&mut self, spi: SpiConfig);
    fn clear_radio_event(&mut self);
    /// Loads the tick timer with `counts_per_tick` timer-clock counts and starts it.
    fn program_tick_timer(&mut self, counts_per_tick: u32);
    fn enable_tick_interrupt(&mut self);
    fn enable_interrupts(&mut self);
    fn set_status_leds(&mut self, leds: StatusLeds);
    fn enable_crossbar(&mut self);
}

/// Timer that has to be re-armed from its own interrupt.
pub trait TickSource: Sync {
    fn rearm(&self);
}
