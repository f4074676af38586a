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

pub const KBD_DATA: u16 = 0x60;
pub const KBD_STATUS: u16 = 0x64;
pub const KBD_CMD: u16 = 0x64;
pub const KBD_SET_LEDS: u8 = 0xED;
pub const KBD_ENABLE_SCANNING: u8 = 0xF4;
pub const KBD_RESET: u8 = 0xFF;
pub const KBD_ACK: u8 = 0xFA;
pub const KBD_SELF_TEST_PASS: u8 = 0xAA;
pub const STATUS_OUTPUT_FULL: u8 = 0x01;
pub const STATUS_INPUT_FULL: u8 = 0x02;
pub const KBD_VECTOR: u8 = 0x21;
pub const SC_EXT_E0: u8 = 0xE0;
pub const SC_EXT_E1: u8 = 0xE1;
pub const SC_BREAK_BIT: u8 = 0x80;

pub const SC_ESC: u8 = 0x01;
pub const SC_BACKSPACE: u8 = 0x0E;
pub const SC_TAB: u8 = 0x0F;
pub const SC_ENTER: u8 = 0x1C;
pub const SC_LCTRL: u8 = 0x1D;
pub const SC_LSHIFT: u8 = 0x2A;
pub const SC_RSHIFT: u8 = 0x36;
pub const SC_LALT: u8 = 0x38;
pub const SC_CAPSLOCK: u8 = 0x3A;
pub const SC_F1: u8 = 0x3B;
pub const SC_F2: u8 = 0x3C;
pub const SC_F3: u8 = 0x3D;
pub const SC_F4: u8 = 0x3E;
pub const SC_F5: u8 = 0x3F;
pub const SC_F6: u8 = 0x40;
pub const SC_F7: u8 = 0x41;
pub const SC_F8: u8 = 0x42;
pub const SC_F9: u8 = 0x43;
pub const SC_F10: u8 = 0x44;
pub const SC_NUMLOCK: u8 = 0x45;
pub const SC_SCROLLLOCK: u8 = 0x46;
pub const SC_F11: u8 = 0x57;
pub const SC_F12: u8 = 0x58;

// Extended (0xE0-prefixed) navigation keys.
pub const SC_EXT_HOME: u8 = 0x47;
pub const SC_EXT_UP: u8 = 0x48;
pub const SC_EXT_PGUP: u8 = 0x49;
pub const SC_EXT_LEFT: u8 = 0x4B;
pub const SC_EXT_RIGHT: u8 = 0x4D;
pub const SC_EXT_END: u8 = 0x4F;
pub const SC_EXT_DOWN: u8 = 0x50;
pub const SC_EXT_PGDN: u8 = 0x51;
pub const SC_EXT_INSERT: u8 = 0x52;
pub const SC_EXT_DELETE: u8 = 0x53;

pub const LED_SCROLL_LOCK: u8 = 0b001;
pub const LED_NUM_LOCK: u8 = 0b010;
pub const LED_CAPS_LOCK: u8 = 0b100;

pub const LAYOUT_ENTRIES: usize = 128;
pub const CHAR_RING_SIZE: usize = 1024;
