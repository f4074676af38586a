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

pub mod error;
mod handlers;
pub mod idt;
pub mod pic;

pub use error::InterruptError;
pub use idt::is_initialized;

use crate::keyboard::constants::KBD_VECTOR;

/// One-time interrupt bootstrap: keyboard gate in the IDT, PIC remap to
/// 0x20/0x28, every line masked except the keyboard. Before this call no
/// hardware path reaches the decoder.
pub fn init() -> Result<(), InterruptError> {
    idt::init()?;
    pic::init();
    log::info!(
        "keyboard interrupt routed: vector {:#04x}, PIC base {:#04x}/{:#04x}",
        KBD_VECTOR,
        pic::PIC1_OFFSET,
        pic::PIC2_OFFSET
    );
    Ok(())
}

/// Turns interrupt delivery on once bootstrap and driver init are done.
#[inline]
pub fn enable() {
    x86_64::instructions::interrupts::enable();
}

#[inline]
pub fn disable() {
    x86_64::instructions::interrupts::disable();
}
