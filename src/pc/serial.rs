//! COM1 as console and data UART.

use core::fmt::Write;
use spin::Mutex;
use uart_16550::SerialPort;
use x86_64::instructions::port::Port;

use crate::config::serial_baud;
use crate::console::ConsoleSink;
use crate::hal::Uart;

pub const COM1: u16 = 0x3F8;

const UART_CLOCK_BAUD: u32 = 115_200;
const LCR_DLAB: u8 = 0x80;
const LCR_8N1: u8 = 0x03;

pub static SERIAL: Mutex<SerialPort> = Mutex::new(unsafe { SerialPort::new(COM1) });

/// Divisor latch value for `baud`; rates above 115200 clamp to the fastest divisor.
pub fn divisor(baud: u32) -> u16 {
    (UART_CLOCK_BAUD / baud).clamp(1, u16::MAX as u32) as u16
}

pub struct PcUart;

impl Uart for PcUart {
    fn init(&mut self, speed: u32) {
        let mut port = SERIAL.lock();
        port.init();

        // SerialPort::init leaves 38400 8N1; reprogram the divisor for the configured rate
        if let Some(baud) = serial_baud(speed) {
            let [low, high] = divisor(baud).to_le_bytes();
            unsafe {
                let mut lcr = Port::<u8>::new(COM1 + 3);
                lcr.write(LCR_DLAB | LCR_8N1);
                Port::<u8>::new(COM1).write(low);
                Port::<u8>::new(COM1 + 1).write(high);
                lcr.write(LCR_8N1);
            }
        }
    }
}

/// Console writes go straight to COM1.
pub struct Com1Console;

pub static CONSOLE: Com1Console = Com1Console;

impl ConsoleSink for Com1Console {
    fn write_str(&self, s: &str) {
        let _ = SERIAL.lock().write_str(s);
    }
}
