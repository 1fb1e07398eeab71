//! # Si1000 Board
//!
//! Register-level bring-up for the Si1000/Si1002 radio MCU.
//!
//! ## SFR Paging
//!
//! The pin drive-strength registers (`P0DRV`, `P1DRV`) share addresses with other SFRs
//! and are only visible on the configuration page:
//!
//! ```text
//! SFRPAGE = 0x0F  ─▶  P0DRV / P1DRV
//! SFRPAGE = 0x00  ─▶  everything else
//! ```
//!
//! ## Tick Timer
//!
//! Timer 3 runs from SYSCLK / 12 in 16-bit auto-reload mode. It has to be re-armed from
//! its own interrupt (`TMR3CN = 0x04`) or it stops after one period.

use super::{Band, Board, BoardIdentity, SpiConfig, StatusLeds, TickSource};
use crate::config::SYSCLK_HZ;
use crate::kernel::peripherals::counts_per_tick;

pub const CONFIG_PAGE: u8 = 0x0F;
pub const LEGACY_PAGE: u8 = 0x00;

/// Busy-wait iterations for the supply monitor, about 100 us at 24.5 MHz.
pub const BROWNOUT_SETTLE_SPINS: u16 = 350;

/// Timer 3 counts SYSCLK / 12.
pub const TIMER3_CLOCK_HZ: u32 = SYSCLK_HZ / 12;

const TMR3CN_RUN_SYSCLK_DIV12: u8 = 0x04;

/// Special function registers touched by the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sfr {
    SfrPage,
    Pca0Md,
    Flscl,
    Oscicn,
    Clksel,
    Vdm0Cn,
    Rstsrc,
    P0MdOut,
    P0Drv,
    P1MdOut,
    P1Drv,
    Xbr0,
    Xbr1,
    Xbr2,
    Spi1Cfg,
    Spi1Cn,
    Spi1Ckr,
    Tmr3Rll,
    Tmr3Rlh,
    Tmr3Cn,
    Eie1,
    /// Bootloader stashes the band code here.
    Adc0H,
    /// Bootloader stashes its version here.
    Adc0L,
}

/// Bit-addressable SFR bits and board pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bit {
    /// Global interrupt enable.
    Ea,
    /// External interrupt 0 (radio IRQ) pending flag.
    Ie0,
    Nss1,
    LedRadio,
    LedBootloader,
}

/// Raw SFR access.
pub trait SfrBus {
    fn read(&self, sfr: Sfr) -> u8;
    fn write(&self, sfr: Sfr, value: u8);
    fn write_bit(&self, bit: Bit, set: bool);

    fn set_bits(&self, sfr: Sfr, mask: u8) {
        self.write(sfr, self.read(sfr) | mask);
    }

    fn clear_bits(&self, sfr: Sfr, mask: u8) {
        self.write(sfr, self.read(sfr) & !mask);
    }
}

pub struct Si1000<B> {
    bus: B,
    leds_active_low: bool,
}

impl<B: SfrBus> Si1000<B> {
    pub const fn new(bus: B, leds_active_low: bool) -> Self {
        Self {
            bus,
            leds_active_low,
        }
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Runs `f` with the configuration page selected.
    fn on_config_page(&self, f: impl FnOnce(&B)) {
        self.bus.write(Sfr::SfrPage, CONFIG_PAGE);
        f(&self.bus);
        self.bus.write(Sfr::SfrPage, LEGACY_PAGE);
    }

    fn led(&self, on: bool) -> bool {
        on != self.leds_active_low
    }
}

/// Timer 3 reload for `counts_per_tick`; the timer counts up and overflows at 0x10000.
///
/// # Panics
///
/// If `counts_per_tick` is above 0x10000, which a 16-bit timer cannot count.
pub const fn timer3_reload(counts_per_tick: u32) -> u16 {
    (0x1_0000 - counts_per_tick) as u16
}

const _: () = assert!(counts_per_tick(TIMER3_CLOCK_HZ) <= 0x1_0000);

impl<B: SfrBus> Board for Si1000<B> {
    fn read_identity(&self) -> BoardIdentity {
        BoardIdentity {
            frequency: Band::from_code(self.bus.read(Sfr::Adc0H)),
            bootloader_version: self.bus.read(Sfr::Adc0L),
        }
    }

    fn tick_timer_clock_hz(&self) -> u32 {
        TIMER3_CLOCK_HZ
    }

    fn disable_watchdog(&mut self) {
        self.bus.clear_bits(Sfr::Pca0Md, 0x40);
    }

    fn select_clock(&mut self) {
        // internal oscillator, prescale by 1
        self.bus.write(Sfr::Flscl, 0x40);
        self.bus.write(Sfr::Oscicn, 0x8F);
        self.bus.write(Sfr::Clksel, 0x00);
    }

    fn enable_brownout(&mut self) {
        self.bus.write(Sfr::Vdm0Cn, 0x80);
        for _ in 0..BROWNOUT_SETTLE_SPINS {
            core::hint::spin_loop();
        }
    }

    fn enable_reset_sources(&mut self) {
        // brown-out and missing clock
        self.bus.write(Sfr::Rstsrc, 0x06);
    }

    fn route_uart_pins(&mut self) {
        self.bus.write(Sfr::P0MdOut, 0x10); // TX push-pull
        self.on_config_page(|bus| bus.write(Sfr::P0Drv, 0x10));
        self.bus.write(Sfr::Xbr0, 0x01);
    }

    fn configure_spi(&mut self, spi: SpiConfig) {
        self.bus.set_bits(Sfr::Xbr1, 0x40); // 3-wire SPI1
        self.bus.set_bits(Sfr::P1MdOut, 0x15); // SCK, MOSI, MISO push-pull
        self.on_config_page(|bus| bus.set_bits(Sfr::P1Drv, 0x15));
        self.bus.write(Sfr::Spi1Cfg, 0x40); // master
        self.bus.write(Sfr::Spi1Cn, 0x00);
        self.bus.write(Sfr::Spi1Ckr, spi.prescale);
        self.bus.set_bits(Sfr::Spi1Cn, 0x01);
        self.bus.write_bit(Bit::Nss1, spi.nss_idle_high);
    }

    fn clear_radio_event(&mut self) {
        self.bus.write_bit(Bit::Ie0, false);
    }

    fn program_tick_timer(&mut self, counts_per_tick: u32) {
        let [low, high] = timer3_reload(counts_per_tick).to_le_bytes();
        self.bus.write(Sfr::Tmr3Rll, low);
        self.bus.write(Sfr::Tmr3Rlh, high);
        self.bus.write(Sfr::Tmr3Cn, TMR3CN_RUN_SYSCLK_DIV12);
    }

    fn enable_tick_interrupt(&mut self) {
        self.bus.set_bits(Sfr::Eie1, 0x80);
    }

    fn enable_interrupts(&mut self) {
        self.bus.write_bit(Bit::Ea, true);
    }

    fn set_status_leds(&mut self, leds: StatusLeds) {
        self.bus.write_bit(Bit::LedRadio, self.led(leds.radio));
        self.bus.write_bit(Bit::LedBootloader, self.led(leds.bootloader));
    }

    fn enable_crossbar(&mut self) {
        self.bus.write(Sfr::Xbr2, 0x40);
    }
}

impl<B: SfrBus + Sync> TickSource for Si1000<B> {
    fn rearm(&self) {
        self.bus.write(Sfr::Tmr3Cn, TMR3CN_RUN_SYSCLK_DIV12);
    }
}


#[cfg(test)]
mod tests {
    use super::mock::{Access, RecordingBus};
    use super::*;

    #[test]
    fn tick_reload_for_200hz() {
        // 24.5 MHz / 12 = 2_041_666 counts/s, / 200 = 10_208 counts per tick
        assert_eq!(TIMER3_CLOCK_HZ / 200, 10_208);
        assert_eq!(timer3_reload(10_208), 0xD820);
    }

    #[test]
    fn reload_covers_the_whole_timer_range() {
        assert_eq!(timer3_reload(0x1_0000), 0);
        assert_eq!(timer3_reload(1), 0xFFFF);
        assert!(counts_per_tick(TIMER3_CLOCK_HZ) <= 0x1_0000);
    }

    #[test]
    #[should_panic]
    fn reload_past_sixteen_bits_panics() {
        let counts = std::hint::black_box(0x1_0001);
        timer3_reload(counts);
    }

    #[test]
    fn identity_comes_from_adc_stash() {
        let board = Si1000::new(RecordingBus::with(&[(Sfr::Adc0H, 0x91), (Sfr::Adc0L, 0x05)]), false);
        let id = board.read_identity();
        assert_eq!(id.frequency, Band::Mhz915);
        assert_eq!(id.bootloader_version, 5);
        assert!(board.bus().writes().is_empty());
    }

    #[test]
    fn watchdog_disable_preserves_other_bits() {
        let mut board = Si1000::new(RecordingBus::with(&[(Sfr::Pca0Md, 0x4F)]), false);
        board.disable_watchdog();
        assert_eq!(board.bus().writes(), vec![Access::Write(Sfr::Pca0Md, 0x0F)]);
    }

    #[test]
    fn drive_strength_written_on_config_page() {
        let mut board = Si1000::new(RecordingBus::default(), false);
        board.route_uart_pins();
        assert_eq!(
            board.bus().writes(),
            vec![
                Access::Write(Sfr::P0MdOut, 0x10),
                Access::Write(Sfr::SfrPage, CONFIG_PAGE),
                Access::Write(Sfr::P0Drv, 0x10),
                Access::Write(Sfr::SfrPage, LEGACY_PAGE),
                Access::Write(Sfr::Xbr0, 0x01),
            ]
        );
    }

    #[test]
    fn spi_master_with_nss_idle_high() {
        let mut board = Si1000::new(RecordingBus::default(), false);
        board.configure_spi(SpiConfig::RADIO);
        let writes = board.bus().writes();
        assert!(writes.contains(&Access::Write(Sfr::Spi1Cfg, 0x40)));
        assert!(writes.contains(&Access::Write(Sfr::Spi1Ckr, 0x00)));
        assert!(writes.contains(&Access::Write(Sfr::Spi1Cn, 0x01)));
        assert_eq!(writes.last(), Some(&Access::Bit(Bit::Nss1, true)));
    }

    #[test]
    fn tick_timer_loads_reload_then_starts() {
        let mut board = Si1000::new(RecordingBus::default(), false);
        board.program_tick_timer(10_208);
        assert_eq!(
            board.bus().writes(),
            vec![
                Access::Write(Sfr::Tmr3Rll, 0x20),
                Access::Write(Sfr::Tmr3Rlh, 0xD8),
                Access::Write(Sfr::Tmr3Cn, 0x04),
            ]
        );
    }

    #[test]
    fn rearm_restarts_timer3() {
        let board = Si1000::new(RecordingBus::default(), false);
        board.rearm();
        assert_eq!(board.bus().writes(), vec![Access::Write(Sfr::Tmr3Cn, 0x04)]);
    }

    #[test]
    fn active_low_leds_invert() {
        let mut board = Si1000::new(RecordingBus::default(), true);
        board.set_status_leds(StatusLeds::RUNNING);
        assert_eq!(
            board.bus().writes(),
            vec![
                Access::Bit(Bit::LedRadio, false),
                Access::Bit(Bit::LedBootloader, true),
            ]
        );
    }
}
