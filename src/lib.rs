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
//! Interrupt-driven PS/2 keyboard input subsystem.
//!
//! Routes IRQ1 through a freshly programmed IDT entry and remapped 8259
//! PICs into a scancode decoder that tracks modifier state and translates
//! bytes into [`KeyEvent`]s via a swappable layout table. Decoded printable
//! characters are forwarded to a single registered consumer.

#![cfg_attr(not(test), no_std)]

pub mod interrupts;
pub mod keyboard;

pub use keyboard::{KeyEvent, KeyboardDriver, KeyboardLayout, ModifierState};

/// Brings the whole subsystem online: IDT entry for the keyboard vector,
/// PIC remap with every line masked except the keyboard, then the
/// controller reset/enable handshake with a default layout and cleared
/// modifier state.
///
/// Interrupt delivery stays off until the caller runs
/// [`interrupts::enable`].
pub fn init() -> Result<(), &'static str> {
    interrupts::init().map_err(|e| e.as_str())?;
    keyboard::init().map_err(|e| e.as_str())?;
    Ok(())
}
