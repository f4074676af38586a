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

use super::constants::*;

/// Immutable scancode-to-character tables for one keyboard layout.
///
/// Indexed by 7-bit scancode; 0 marks an unmapped entry. The three
/// variants are named fields rather than parallel arrays so they cannot
/// drift out of alignment.
pub struct KeyboardLayout {
    pub normal: [u8; LAYOUT_ENTRIES],
    pub shift: [u8; LAYOUT_ENTRIES],
    pub altgr: [u8; LAYOUT_ENTRIES],
    pub name: &'static str,
}

pub const US_QWERTY: KeyboardLayout = KeyboardLayout {
    normal: {
        let mut t = [0u8; LAYOUT_ENTRIES];
        t[0x01] = 0x1B; // ESC
        t[0x02] = b'1';
        t[0x03] = b'2';
        t[0x04] = b'3';
        t[0x05] = b'4';
        t[0x06] = b'5';
        t[0x07] = b'6';
        t[0x08] = b'7';
        t[0x09] = b'8';
        t[0x0A] = b'9';
        t[0x0B] = b'0';
        t[0x0C] = b'-';
        t[0x0D] = b'=';
        t[0x0E] = 0x08; // backspace
        t[0x0F] = b'\t';
        t[0x10] = b'q';
        t[0x11] = b'w';
        t[0x12] = b'e';
        t[0x13] = b'r';
        t[0x14] = b't';
        t[0x15] = b'y';
        t[0x16] = b'u';
        t[0x17] = b'i';
        t[0x18] = b'o';
        t[0x19] = b'p';
        t[0x1A] = b'[';
        t[0x1B] = b']';
        t[0x1C] = b'\n';
        t[0x1E] = b'a';
        t[0x1F] = b's';
        t[0x20] = b'd';
        t[0x21] = b'f';
        t[0x22] = b'g';
        t[0x23] = b'h';
        t[0x24] = b'j';
        t[0x25] = b'k';
        t[0x26] = b'l';
        t[0x27] = b';';
        t[0x28] = b'\'';
        t[0x29] = b'`';
        t[0x2B] = b'\\';
        t[0x2C] = b'z';
        t[0x2D] = b'x';
        t[0x2E] = b'c';
        t[0x2F] = b'v';
        t[0x30] = b'b';
        t[0x31] = b'n';
        t[0x32] = b'm';
        t[0x33] = b',';
        t[0x34] = b'.';
        t[0x35] = b'/';
        t[0x37] = b'*'; // keypad
        t[0x39] = b' ';
        t
    },
    shift: {
        let mut t = [0u8; LAYOUT_ENTRIES];
        t[0x01] = 0x1B;
        t[0x02] = b'!';
        t[0x03] = b'@';
        t[0x04] = b'#';
        t[0x05] = b'$';
        t[0x06] = b'%';
        t[0x07] = b'^';
        t[0x08] = b'&';
        t[0x09] = b'*';
        t[0x0A] = b'(';
        t[0x0B] = b')';
        t[0x0C] = b'_';
        t[0x0D] = b'+';
        t[0x0E] = 0x08;
        t[0x0F] = b'\t';
        t[0x10] = b'Q';
        t[0x11] = b'W';
        t[0x12] = b'E';
        t[0x13] = b'R';
        t[0x14] = b'T';
        t[0x15] = b'Y';
        t[0x16] = b'U';
        t[0x17] = b'I';
        t[0x18] = b'O';
        t[0x19] = b'P';
        t[0x1A] = b'{';
        t[0x1B] = b'}';
        t[0x1C] = b'\n';
        t[0x1E] = b'A';
        t[0x1F] = b'S';
        t[0x20] = b'D';
        t[0x21] = b'F';
        t[0x22] = b'G';
        t[0x23] = b'H';
        t[0x24] = b'J';
        t[0x25] = b'K';
        t[0x26] = b'L';
        t[0x27] = b':';
        t[0x28] = b'"';
        t[0x29] = b'~';
        t[0x2B] = b'|';
        t[0x2C] = b'Z';
        t[0x2D] = b'X';
        t[0x2E] = b'C';
        t[0x2F] = b'V';
        t[0x30] = b'B';
        t[0x31] = b'N';
        t[0x32] = b'M';
        t[0x33] = b'<';
        t[0x34] = b'>';
        t[0x35] = b'?';
        t[0x37] = b'*';
        t[0x39] = b' ';
        t
    },
    // US layout produces nothing on AltGr.
    altgr: [0u8; LAYOUT_ENTRIES],
    name: "US QWERTY",
};

/// Human-readable name for a known control or function scancode.
/// Total: anything outside the known set yields `"UNKNOWN"`.
pub fn key_name(scancode: u8) -> &'static str {
    match scancode {
        SC_ESC => "ESC",
        SC_F1 => "F1",
        SC_F2 => "F2",
        SC_F3 => "F3",
        SC_F4 => "F4",
        SC_F5 => "F5",
        SC_F6 => "F6",
        SC_F7 => "F7",
        SC_F8 => "F8",
        SC_F9 => "F9",
        SC_F10 => "F10",
        SC_F11 => "F11",
        SC_F12 => "F12",
        SC_BACKSPACE => "BACKSPACE",
        SC_TAB => "TAB",
        SC_ENTER => "ENTER",
        SC_LCTRL => "LCTRL",
        SC_LSHIFT => "LSHIFT",
        SC_RSHIFT => "RSHIFT",
        SC_LALT => "LALT",
        SC_CAPSLOCK => "CAPS_LOCK",
        SC_NUMLOCK => "NUM_LOCK",
        SC_SCROLLLOCK => "SCROLL_LOCK",
        _ => "UNKNOWN",
    }
}
