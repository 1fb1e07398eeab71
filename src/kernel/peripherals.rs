//! One-shot peripheral bring-up.
//!
//! Runs with interrupts off, which is the reset state. Interrupts are enabled only after
//! the tick timer and UART are fully set up, so no handler ever sees half-configured
//! hardware.

use crate::board::{Board, SpiConfig, StatusLeds};
use crate::config::TICK_HZ;
use crate::hal::Uart;

/// Timer-clock counts per tick. Integer division of build-time constants, so every
/// build gets the same period.
pub const fn counts_per_tick(timer_clock_hz: u32) -> u32 {
    timer_clock_hz / TICK_HZ
}

pub fn bring_up(board: &mut dyn Board, uart: &mut dyn Uart, serial_speed: u32) {
    board.disable_watchdog();
    board.select_clock();
    board.enable_brownout();
    board.enable_reset_sources();

    board.route_uart_pins();
    board.configure_spi(SpiConfig::RADIO);

    board.clear_radio_event();

    let counts = counts_per_tick(board.tick_timer_clock_hz());
    board.program_tick_timer(counts);
    board.enable_tick_interrupt();

    uart.init(serial_speed);

    board.enable_interrupts();

    board.set_status_leds(StatusLeds::RUNNING);
    board.enable_crossbar();
}
