// ps2kbd - bare-metal PS/2 keyboard input
// Copyright (C) 2026 ps2kbd Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.
//! Interrupt descriptor table with a single populated gate: the keyboard
//! vector. A malformed entry is undefined behavior at the hardware level,
//! so construction is confined to `IdtEntry::interrupt_gate`.

use core::arch::asm;
use core::ptr::addr_of_mut;
use core::sync::atomic::{AtomicBool, Ordering};

use super::error::InterruptError;
use super::handlers::keyboard_isr_stub;
use crate::keyboard::constants::KBD_VECTOR;

pub const IDT_ENTRIES: usize = 256;
pub const KERNEL_CS: u16 = 0x08;
pub const KERNEL_DS: u16 = 0x10;
pub const GATE_INTERRUPT: u8 = 0x0E;
pub const PRESENT: u8 = 1 << 7;
pub const DPL_KERNEL: u8 = 0;

#[repr(C, packed)]
#[derive(Clone, Copy)]
pub struct IdtEntry {
    offset_low: u16,
    selector: u16,
    ist: u8,
    type_attr: u8,
    offset_mid: u16,
    offset_high: u32,
    reserved: u32,
}

impl IdtEntry {
    pub const fn empty() -> Self {
        Self {
            offset_low: 0,
            selector: 0,
            ist: 0,
            type_attr: 0,
            offset_mid: 0,
            offset_high: 0,
            reserved: 0,
        }
    }

    pub fn interrupt_gate(handler: u64, selector: u16, ist: u8, dpl: u8) -> Self {
        Self {
            offset_low: (handler & 0xFFFF) as u16,
            selector,
            ist: ist & 0x7,
            type_attr: PRESENT | ((dpl & 0x3) << 5) | GATE_INTERRUPT,
            offset_mid: ((handler >> 16) & 0xFFFF) as u16,
            offset_high: (handler >> 32) as u32,
            reserved: 0,
        }
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.type_attr & PRESENT != 0
    }

    #[inline]
    pub fn handler(&self) -> u64 {
        (self.offset_low as u64)
            | ((self.offset_mid as u64) << 16)
            | ((self.offset_high as u64) << 32)
    }

    #[inline]
    pub fn dpl(&self) -> u8 {
        (self.type_attr >> 5) & 0x3
    }
}

#[repr(C, align(16))]
pub struct Idt {
    pub entries: [IdtEntry; IDT_ENTRIES],
}

impl Idt {
    pub const fn new() -> Self {
        Self {
            entries: [IdtEntry::empty(); IDT_ENTRIES],
        }
    }
}

#[repr(C, packed)]
pub struct IdtPtr {
    pub limit: u16,
    pub base: u64,
}

static mut IDT: Idt = Idt::new();
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Installs the keyboard gate and loads the table. One-shot.
pub fn init() -> Result<(), InterruptError> {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(InterruptError::AlreadyInitialized);
    }

    // SAFETY: the IDT is only written here, during single-threaded
    // bring-up with interrupt delivery still disabled.
    unsafe {
        let idt = addr_of_mut!(IDT);
        (*idt).entries[KBD_VECTOR as usize] = IdtEntry::interrupt_gate(
            keyboard_isr_stub as usize as u64,
            KERNEL_CS,
            0,
            DPL_KERNEL,
        );
        load_idt();
    }

    Ok(())
}

#[inline]
pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::Acquire)
}

unsafe fn load_idt() {
    // SAFETY: IDT is a static with 'static lifetime; the pointer handed
    // to LIDT stays valid for the life of the kernel.
    unsafe {
        let idt = addr_of_mut!(IDT);
        let ptr = IdtPtr {
            limit: (core::mem::size_of::<[IdtEntry; IDT_ENTRIES]>() - 1) as u16,
            base: (*idt).entries.as_ptr() as u64,
        };
        asm!("lidt [{}]", in(reg) &ptr, options(readonly, nostack, preserves_flags));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_size() {
        assert_eq!(core::mem::size_of::<IdtEntry>(), 16);
    }

    #[test]
    fn test_empty_entry() {
        let entry = IdtEntry::empty();
        assert!(!entry.is_present());
        assert_eq!(entry.handler(), 0);
    }

    #[test]
    fn test_interrupt_gate_encoding() {
        let entry = IdtEntry::interrupt_gate(0x1234_5678_9ABC_DEF0, KERNEL_CS, 0, DPL_KERNEL);
        assert!(entry.is_present());
        assert_eq!(entry.handler(), 0x1234_5678_9ABC_DEF0);
        assert_eq!(entry.dpl(), 0);
    }

    #[test]
    fn test_segment_selectors() {
        assert_eq!(KERNEL_CS, 0x08);
        assert_eq!(KERNEL_DS, 0x10);
    }

    #[test]
    fn test_idt_ptr_size() {
        assert_eq!(core::mem::size_of::<IdtPtr>(), 10);
    }
}
