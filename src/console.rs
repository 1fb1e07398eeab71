//! Serial diagnostics console.
//!
//! Boards install their UART writer once it is initialised; until then output is dropped.

use core::fmt::{self, Write};
use spin::Mutex;

/// Byte sink behind the console, usually a UART held in its own lock.
pub trait ConsoleSink: Sync {
    fn write_str(&self, s: &str);
}

pub static CONSOLE: Mutex<Option<&'static dyn ConsoleSink>> = Mutex::new(None);

pub fn install(sink: &'static dyn ConsoleSink) {
    *CONSOLE.lock() = Some(sink);
}

struct Writer(&'static dyn ConsoleSink);

impl Write for Writer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_str(s);
        Ok(())
    }
}

#[doc(hidden)]
pub fn _print(args: fmt::Arguments) {
    let sink = *CONSOLE.lock();
    if let Some(sink) = sink {
        let _ = Writer(sink).write_fmt(args);
    }
}

#[macro_export]
macro_rules! kprint {
    ($($arg:tt)*) => {
        $crate::console::_print(core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! kprintln {
    () => {
        $crate::kprint!("\n")
    };
    ($($arg:tt)*) => {{
        $crate::console::_print(core::format_args!($($arg)*));
        $crate::kprint!("\n");
    }};
}

#[cfg(test)]
pub(crate) mod capture {
    use super::*;
    use std::string::String;
    use std::sync::{Mutex as StdMutex, MutexGuard};

    /// Shared console buffer for tests. Holding the guard keeps other tests off the console.
    struct Capture(StdMutex<String>);

    impl ConsoleSink for Capture {
        fn write_str(&self, s: &str) {
            self.0.lock().unwrap_or_else(|e| e.into_inner()).push_str(s);
        }
    }

    static CAPTURE: Capture = Capture(StdMutex::new(String::new()));
    static SERIAL: StdMutex<()> = StdMutex::new(());

    /// Installs the capture sink and clears it.
    pub fn begin() -> MutexGuard<'static, ()> {
        let guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
        install(&CAPTURE);
        CAPTURE.0.lock().unwrap_or_else(|e| e.into_inner()).clear();
        guard
    }

    pub fn contents() -> String {
        CAPTURE.0.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}
