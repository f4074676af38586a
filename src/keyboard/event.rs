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

use super::modifiers::ModifierState;

/// One decoded scancode. Produced and consumed within a single handler
/// invocation; never retained by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// 7-bit key identity, break bit stripped.
    pub scancode: u8,
    pub is_released: bool,
    /// True when the byte was preceded by the two-byte escape marker.
    pub is_extended: bool,
    /// Resolved printable character, 0 for non-printable keys, pure
    /// modifiers, releases, and extended keys.
    pub ascii: u8,
    /// Modifier snapshot taken at decode time, not a live reference.
    pub modifiers: ModifierState,
}

impl KeyEvent {
    /// True when the event carries a character the sink should forward.
    #[inline]
    pub fn has_char(&self) -> bool {
        !self.is_released && self.ascii != 0
    }
}
