//! # Fatal Halt
//!
//! Single exit for every unrecoverable condition: print the banner and message on the
//! console, then stop. Nothing is cleaned up and the chip is not reset; getting out needs
//! a power cycle or the watchdog.

use core::fmt;
use core::panic::PanicInfo;
use spin::Mutex;

use crate::kernel::status;
use crate::{kprint, kprintln};

static HALT: Mutex<fn() -> !> = Mutex::new(halt_forever as fn() -> !);

/// Replaces the halt action. Boards may park the CPU in a low-power state instead.
pub fn set_halt(halt: fn() -> !) {
    *HALT.lock() = halt;
}

pub fn halt_forever() -> ! {
    loop {
        core::hint::spin_loop();
    }
}

/// Prints `**PANIC**` and the message, then halts. Never returns.
pub fn panic(args: fmt::Arguments) -> ! {
    status::set_stage(status::BootStage::Failed);
    kprintln!("\n**PANIC**");
    kprint!("{}", args);
    kprintln!();

    let halt = *HALT.lock();
    halt()
}

/// Routes a Rust panic into the same path. Call it from the firmware's `#[panic_handler]`.
pub fn report(info: &PanicInfo) -> ! {
    match info.location() {
        Some(loc) => panic(format_args!("{} | {}:{}", info.message(), loc.file(), loc.line())),
        None => panic(format_args!("{}", info.message())),
    }
}

#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        $crate::panic::panic(core::format_args!($($arg)*))
    };
}
