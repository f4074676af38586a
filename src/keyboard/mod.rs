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

pub mod constants;
pub mod decode;
pub mod error;
pub mod event;
pub mod interface;
pub mod io;
pub mod layout;
pub mod modifiers;
pub mod ring;
pub mod sink;
#[cfg(test)]
mod tests;

pub use constants::{
    CHAR_RING_SIZE, KBD_DATA, KBD_STATUS, KBD_VECTOR, LED_CAPS_LOCK, LED_NUM_LOCK,
    LED_SCROLL_LOCK, SC_BREAK_BIT, SC_CAPSLOCK, SC_EXT_E0, SC_LALT, SC_LCTRL, SC_LSHIFT,
    SC_NUMLOCK, SC_RSHIFT, SC_SCROLLLOCK,
};
pub use decode::KeyboardDriver;
pub use error::{KeyboardError, Result};
pub use event::KeyEvent;
pub use interface::{
    init, is_alt_pressed, is_caps_lock_active, is_ctrl_pressed, is_shift_pressed, modifiers,
    on_keyboard_interrupt, read_event, set_layout, set_leds,
};
pub use layout::{key_name, KeyboardLayout, US_QWERTY};
pub use modifiers::ModifierState;
pub use ring::SpscRing;
pub use sink::{has_data, pending_char_count, read_char, set_consumer, CharBuffer, KeyConsumer};
