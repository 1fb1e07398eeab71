//! # Interrupt Table
//!
//! | Vector | Source       | Handler                                  |
//! |--------|--------------|------------------------------------------|
//! | 3      | `int3`       | log and continue                         |
//! | 8      | double fault | fatal halt                               |
//! | 32     | PIT (IRQ0)   | registered [`TickIsr::service`]          |
//!
//! The tick handler leaves the EOI to the ISR's tick source, so register an ISR built on
//! [`PitTick`](super::PitTick). Ticks that arrive before registration are acknowledged
//! and dropped.

use spin::{Lazy, Once};
use x86_64::structures::idt::{InterruptDescriptorTable, InterruptStackFrame};

use super::pic::{self, TIMER_VECTOR};
use crate::interrupts::TickIsr;

static TICK: Once<&'static TickIsr<'static>> = Once::new();

static IDT: Lazy<InterruptDescriptorTable> = Lazy::new(|| {
    let mut idt = InterruptDescriptorTable::new();
    idt.breakpoint.set_handler_fn(breakpoint_handler);
    idt.double_fault.set_handler_fn(double_fault_handler);
    idt[TIMER_VECTOR].set_handler_fn(timer_interrupt_handler);
    idt
});

/// Binds `isr` to the tick vector. Only the first registration sticks.
pub fn register_tick(isr: &'static TickIsr<'static>) -> &'static TickIsr<'static> {
    TICK.call_once(|| isr)
}

pub fn registered_tick() -> Option<&'static TickIsr<'static>> {
    TICK.get().copied()
}

pub fn load() {
    IDT.load();
}

fn on_tick() {
    match registered_tick() {
        Some(isr) => isr.service(),
        None => pic::end_of_tick(),
    }
}

extern "x86-interrupt" fn timer_interrupt_handler(_stack_frame: InterruptStackFrame) {
    on_tick();
}

extern "x86-interrupt" fn breakpoint_handler(stack_frame: InterruptStackFrame) {
    crate::kprintln!("EXCEPTION: BREAKPOINT\n{:#?}", stack_frame);
}

extern "x86-interrupt" fn double_fault_handler(
    stack_frame: InterruptStackFrame,
    error_code: u64,
) -> ! {
    crate::fatal!("double fault (code {})\n{:#?}", error_code, stack_frame)
}
