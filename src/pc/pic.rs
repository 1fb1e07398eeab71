//! # 8259 PIC
//!
//! IRQ 0-7 are remapped to vectors 32-39 and IRQ 8-15 to 40-47 so they do not collide
//! with CPU exceptions. Only the PIT (IRQ0) is unmasked.

use pic8259::ChainedPics;
use spin::Mutex;
use x86_64::instructions::port::Port;

pub const PIC_1_OFFSET: u8 = 32;
pub const PIC_2_OFFSET: u8 = 40;

/// Vector the tick arrives on.
pub const TIMER_VECTOR: u8 = PIC_1_OFFSET;

const PIC_1_DATA: u16 = 0x21;

pub static PICS: Mutex<ChainedPics> =
    Mutex::new(unsafe { ChainedPics::new(PIC_1_OFFSET, PIC_2_OFFSET) });

/// Remaps both PICs and unmasks IRQ0.
pub fn init_timer_irq() {
    unsafe {
        PICS.lock().initialize();

        let mut mask_port = Port::<u8>::new(PIC_1_DATA);
        let mask = mask_port.read();
        mask_port.write(mask & !0x01);
    }
}

pub fn end_of_tick() {
    unsafe {
        PICS.lock().notify_end_of_interrupt(TIMER_VECTOR);
    }
}
