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
//! Controller port I/O. Every poll loop is bounded so nothing in here can
//! hang the machine; a dead controller surfaces as a typed error instead.

use core::hint::spin_loop;
use x86_64::instructions::port::Port;

use super::constants::*;
use super::error::{KeyboardError, Result};

const MAX_POLL_ITERATIONS: usize = 100_000;

#[inline]
fn read_status() -> u8 {
    let mut port = Port::<u8>::new(KBD_STATUS);
    // SAFETY: 0x64 is the i8042 status port; reading it has no side effects.
    unsafe { port.read() }
}

#[inline]
pub fn read_data() -> u8 {
    let mut port = Port::<u8>::new(KBD_DATA);
    // SAFETY: 0x60 is the i8042 data port.
    unsafe { port.read() }
}

#[inline]
fn write_data(value: u8) {
    let mut port = Port::<u8>::new(KBD_DATA);
    // SAFETY: 0x60 is the i8042 data port.
    unsafe { port.write(value) }
}

/// True when the output buffer holds a byte for us to read.
#[inline]
pub fn data_ready() -> bool {
    read_status() & STATUS_OUTPUT_FULL != 0
}

/// One status/data probe, the only poll the interrupt hot path performs.
#[inline]
pub fn read_scancode() -> Option<u8> {
    if data_ready() {
        Some(read_data())
    } else {
        None
    }
}

fn wait_input_empty() {
    for _ in 0..MAX_POLL_ITERATIONS {
        if read_status() & STATUS_INPUT_FULL == 0 {
            return;
        }
        spin_loop();
    }
}

fn wait_output_full() -> bool {
    for _ in 0..MAX_POLL_ITERATIONS {
        if data_ready() {
            return true;
        }
        spin_loop();
    }
    false
}

/// Drains stale bytes left in the output buffer.
pub fn flush_output_buffer() {
    while data_ready() {
        let _ = read_data();
    }
}

fn send_device_command(cmd: u8) -> Result<()> {
    wait_input_empty();
    write_data(cmd);
    if !wait_output_full() {
        return Err(KeyboardError::AckTimeout);
    }
    match read_data() {
        KBD_ACK => Ok(()),
        _ => Err(KeyboardError::AckTimeout),
    }
}

/// Reset/enable handshake: 0xFF expecting ACK and a self-test result,
/// then 0xF4 to start scanning. A silent controller turns into
/// `ControllerUnresponsive` rather than the boot hanging forever.
pub fn reset_and_enable() -> Result<()> {
    flush_output_buffer();

    wait_input_empty();
    write_data(KBD_RESET);
    if !wait_output_full() {
        return Err(KeyboardError::ControllerUnresponsive);
    }
    if read_data() != KBD_ACK {
        return Err(KeyboardError::ControllerUnresponsive);
    }
    if wait_output_full() && read_data() != KBD_SELF_TEST_PASS {
        return Err(KeyboardError::SelfTestFailed);
    }

    send_device_command(KBD_ENABLE_SCANNING)
}

/// Fire-and-forget LED write: 0xED then the 3-bit mask. No ACK wait, so
/// the lock-key branch of the interrupt handler stays non-blocking.
pub fn set_leds(mask: u8) {
    wait_input_empty();
    write_data(KBD_SET_LEDS);
    wait_input_empty();
    write_data(mask & 0b111);
}
