//! # x86 Bench Port
//!
//! Runs the kernel on a PC or under QEMU so the boot and tick paths can be exercised
//! without radio hardware.
//!
//! | Si1000 piece      | PC stand-in                          |
//! |-------------------|--------------------------------------|
//! | timer 3           | PIT channel 0, mode 3, 1.193182 MHz  |
//! | EIE1 timer 3 bit  | 8259 IRQ0 unmask                     |
//! | EA                | `sti`                                |
//! | UART0             | COM1 (16550)                         |
//! | T3 vector         | IDT vector 32, see [`idt`]           |
//!
//! Register the board's `TickIsr` with [`idt::register_tick`] before boot; the table is
//! loaded when the tick interrupt is enabled, ahead of the PIC unmask.
//!
//! Watchdog, clock tree, supply monitor, crossbar and SPI have no PC counterpart and are
//! left alone. The radio driver and upper layers still come from the integrator.

pub mod idt;
pub mod pic;
pub mod serial;

use x86_64::instructions::port::Port;

use crate::board::{Board, BoardIdentity, SpiConfig, StatusLeds, TickSource};

pub const PIT_HZ: u32 = 1_193_182;

const PIT_CHANNEL0: u16 = 0x40;
const PIT_COMMAND: u16 = 0x43;
/// Channel 0, lobyte/hibyte, square wave.
const PIT_CH0_SQUARE_WAVE: u8 = 0x36;

pub struct PcBoard {
    identity: BoardIdentity,
}

impl PcBoard {
    /// There is no bootloader stash on a PC; the band is picked by whoever starts the port.
    pub const fn new(identity: BoardIdentity) -> Self {
        Self { identity }
    }
}

impl Board for PcBoard {
    fn read_identity(&self) -> BoardIdentity {
        self.identity
    }

    fn tick_timer_clock_hz(&self) -> u32 {
        PIT_HZ
    }

    fn disable_watchdog(&mut self) {}
    fn select_clock(&mut self) {}
    fn enable_brownout(&mut self) {}
    fn enable_reset_sources(&mut self) {}
    fn route_uart_pins(&mut self) {}
    fn configure_spi(&mut self, _spi: SpiConfig) {}
    fn clear_radio_event(&mut self) {}

    fn program_tick_timer(&mut self, counts_per_tick: u32) {
        let [low, high] = (counts_per_tick as u16).to_le_bytes();
        unsafe {
            Port::<u8>::new(PIT_COMMAND).write(PIT_CH0_SQUARE_WAVE);
            let mut data = Port::<u8>::new(PIT_CHANNEL0);
            data.write(low);
            data.write(high);
        }
    }

    fn enable_tick_interrupt(&mut self) {
        idt::load();
        pic::init_timer_irq();
    }

    fn enable_interrupts(&mut self) {
        x86_64::instructions::interrupts::enable();
    }

    fn set_status_leds(&mut self, leds: StatusLeds) {
        crate::kprintln!("leds: radio {} bootloader {}", leds.radio, leds.bootloader);
    }

    fn enable_crossbar(&mut self) {}
}

/// PIT runs periodically on its own; re-arming means acknowledging IRQ0.
pub struct PitTick;

impl TickSource for PitTick {
    fn rearm(&self) {
        pic::end_of_tick();
    }
}
