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

use super::constants::{LED_CAPS_LOCK, LED_NUM_LOCK, LED_SCROLL_LOCK};

/// Momentary and latched modifier flags, one per physical key.
///
/// Owned exclusively by [`KeyboardDriver`](super::KeyboardDriver) and
/// mutated only while decoding; everyone else sees `Copy` snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    pub left_shift: bool,
    pub right_shift: bool,
    pub left_ctrl: bool,
    pub right_ctrl: bool,
    pub left_alt: bool,
    pub right_alt: bool,
    pub caps_lock: bool,
    pub num_lock: bool,
    pub scroll_lock: bool,
}

impl ModifierState {
    pub const fn new() -> Self {
        Self {
            left_shift: false,
            right_shift: false,
            left_ctrl: false,
            right_ctrl: false,
            left_alt: false,
            right_alt: false,
            caps_lock: false,
            num_lock: false,
            scroll_lock: false,
        }
    }

    #[inline]
    pub fn shift_active(&self) -> bool {
        self.left_shift || self.right_shift
    }

    #[inline]
    pub fn ctrl_active(&self) -> bool {
        self.left_ctrl || self.right_ctrl
    }

    #[inline]
    pub fn alt_active(&self) -> bool {
        self.left_alt || self.right_alt
    }

    /// Packs the held modifiers into a status bitmask:
    /// shift=bit0, ctrl=bit1, alt=bit2, caps=bit3.
    #[inline]
    pub fn as_bits(&self) -> u8 {
        let mut bits = 0;
        if self.shift_active() {
            bits |= 0x01;
        }
        if self.ctrl_active() {
            bits |= 0x02;
        }
        if self.alt_active() {
            bits |= 0x04;
        }
        if self.caps_lock {
            bits |= 0x08;
        }
        bits
    }

    /// Packs the three latched flags into the 3-bit controller LED mask.
    #[inline]
    pub fn led_mask(&self) -> u8 {
        let mut mask = 0;
        if self.scroll_lock {
            mask |= LED_SCROLL_LOCK;
        }
        if self.num_lock {
            mask |= LED_NUM_LOCK;
        }
        if self.caps_lock {
            mask |= LED_CAPS_LOCK;
        }
        mask
    }
}
