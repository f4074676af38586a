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
//! 8259 PIC pair: remap to vectors 0x20/0x28, cascade on line 2, 8086
//! mode, then mask every line except the keyboard.

use x86_64::instructions::port::Port;

const PIC1_COMMAND: u16 = 0x20;
const PIC1_DATA: u16 = 0x21;
const PIC2_COMMAND: u16 = 0xA0;
const PIC2_DATA: u16 = 0xA1;

const PIC_EOI: u8 = 0x20;
const ICW1_INIT: u8 = 0x11;
const ICW4_8086: u8 = 0x01;

pub const PIC1_OFFSET: u8 = 0x20;
pub const PIC2_OFFSET: u8 = 0x28;

/// All master lines masked except IRQ1 (keyboard); slave fully masked.
const MASK_KEYBOARD_ONLY: u8 = 0xFD;
const MASK_ALL: u8 = 0xFF;

struct Pic {
    offset: u8,
    command: Port<u8>,
    data: Port<u8>,
}

impl Pic {
    const fn new(offset: u8, command_port: u16, data_port: u16) -> Pic {
        Pic {
            offset,
            command: Port::new(command_port),
            data: Port::new(data_port),
        }
    }

    fn handles_vector(&self, vector: u8) -> bool {
        vector >= self.offset && vector < self.offset + 8
    }

    fn end_of_interrupt(&mut self) {
        // SAFETY: EOI write to this PIC's command port.
        unsafe {
            self.command.write(PIC_EOI);
        }
    }
}

pub struct ChainedPics {
    pics: [Pic; 2],
}

impl ChainedPics {
    pub const fn new(offset1: u8, offset2: u8) -> ChainedPics {
        ChainedPics {
            pics: [
                Pic::new(offset1, PIC1_COMMAND, PIC1_DATA),
                Pic::new(offset2, PIC2_COMMAND, PIC2_DATA),
            ],
        }
    }

    /// Full ICW init sequence, then the keyboard-only mask.
    pub fn initialize(&mut self) {
        // SAFETY: the standard 8259 initialization word sequence; each
        // write is paced through port 0x80.
        unsafe {
            self.pics[0].command.write(ICW1_INIT);
            io_wait();
            self.pics[1].command.write(ICW1_INIT);
            io_wait();

            self.pics[0].data.write(self.pics[0].offset);
            io_wait();
            self.pics[1].data.write(self.pics[1].offset);
            io_wait();

            // Slave on master line 2; slave cascade identity 2.
            self.pics[0].data.write(4);
            io_wait();
            self.pics[1].data.write(2);
            io_wait();

            self.pics[0].data.write(ICW4_8086);
            io_wait();
            self.pics[1].data.write(ICW4_8086);
            io_wait();

            self.pics[0].data.write(MASK_KEYBOARD_ONLY);
            self.pics[1].data.write(MASK_ALL);
        }
    }

    pub fn notify_end_of_interrupt(&mut self, vector: u8) {
        if self.pics[1].handles_vector(vector) {
            self.pics[1].end_of_interrupt();
        }
        if self.pics[0].handles_vector(vector) {
            self.pics[0].end_of_interrupt();
        }
    }
}

static PICS: spin::Mutex<ChainedPics> = spin::Mutex::new(ChainedPics::new(PIC1_OFFSET, PIC2_OFFSET));

/// Remap and mask. Runs once during bootstrap, before interrupts are on.
pub fn init() {
    PICS.lock().initialize();
}

/// Unconditional acknowledgment, the handler's final obligation on every
/// exit path. Called from interrupt context; the only other lock holders
/// run with interrupts disabled.
pub fn end_of_interrupt(vector: u8) {
    PICS.lock().notify_end_of_interrupt(vector);
}

fn io_wait() {
    // SAFETY: port 0x80 is the traditional POST scratch port; writing it
    // only burns a microsecond.
    unsafe {
        Port::<u8>::new(0x80).write(0u8);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_ranges() {
        let pics = ChainedPics::new(PIC1_OFFSET, PIC2_OFFSET);
        assert!(pics.pics[0].handles_vector(0x21));
        assert!(!pics.pics[0].handles_vector(0x28));
        assert!(pics.pics[1].handles_vector(0x28));
        assert!(!pics.pics[1].handles_vector(0x30));
    }

    #[test]
    fn test_keyboard_mask_leaves_irq1_open() {
        assert_eq!(MASK_KEYBOARD_ONLY & (1 << 1), 0);
        assert_eq!(MASK_KEYBOARD_ONLY | (1 << 1), 0xFF);
    }
}
