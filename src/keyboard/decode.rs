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
//! Scancode decoder state machine.
//!
//! Two states: idle and extended-pending. The extended marker arms the
//! pending flag and emits nothing; every other byte updates modifier
//! state, resolves a character, emits exactly one event and disarms the
//! flag. The decoder touches no hardware, so it runs unchanged under the
//! host test harness; pending LED writes are parked in `led_update` for
//! the interrupt layer to drain.

use super::constants::*;
use super::event::KeyEvent;
use super::layout::{KeyboardLayout, US_QWERTY};
use super::modifiers::ModifierState;

pub struct KeyboardDriver {
    modifiers: ModifierState,
    pending_extended: bool,
    layout: &'static KeyboardLayout,
    led_update: Option<u8>,
}

impl KeyboardDriver {
    pub const fn new() -> Self {
        Self {
            modifiers: ModifierState::new(),
            pending_extended: false,
            layout: &US_QWERTY,
            led_update: None,
        }
    }

    /// Feeds one raw byte through the state machine.
    ///
    /// Returns `None` only for the extended-sequence markers; every other
    /// byte produces an event, with `ascii == 0` for releases, extended
    /// keys, pure modifiers and unmapped codes.
    pub fn decode(&mut self, byte: u8) -> Option<KeyEvent> {
        if byte == SC_EXT_E0 || byte == SC_EXT_E1 {
            self.pending_extended = true;
            return None;
        }

        let is_released = (byte & SC_BREAK_BIT) != 0;
        let scancode = byte & 0x7F;
        let is_extended = self.pending_extended;
        self.pending_extended = false;

        self.update_modifiers(scancode, is_released, is_extended);

        let ascii = if is_modifier_key(scancode) {
            0
        } else {
            self.resolve_ascii(scancode, is_released, is_extended)
        };

        Some(KeyEvent {
            scancode,
            is_released,
            is_extended,
            ascii,
            modifiers: self.modifiers,
        })
    }

    fn update_modifiers(&mut self, scancode: u8, released: bool, extended: bool) {
        match scancode {
            SC_LSHIFT => self.modifiers.left_shift = !released,
            SC_RSHIFT => self.modifiers.right_shift = !released,
            // Right-hand Ctrl/Alt share the left-hand scancode and are
            // told apart only by the preceding extended marker.
            SC_LCTRL => {
                if extended {
                    self.modifiers.right_ctrl = !released;
                } else {
                    self.modifiers.left_ctrl = !released;
                }
            }
            SC_LALT => {
                if extended {
                    self.modifiers.right_alt = !released;
                } else {
                    self.modifiers.left_alt = !released;
                }
            }
            SC_CAPSLOCK => {
                if !released {
                    self.modifiers.caps_lock = !self.modifiers.caps_lock;
                    self.led_update = Some(self.modifiers.led_mask());
                }
            }
            SC_NUMLOCK => {
                if !released {
                    self.modifiers.num_lock = !self.modifiers.num_lock;
                    self.led_update = Some(self.modifiers.led_mask());
                }
            }
            SC_SCROLLLOCK => {
                if !released {
                    self.modifiers.scroll_lock = !self.modifiers.scroll_lock;
                    self.led_update = Some(self.modifiers.led_mask());
                }
            }
            _ => {}
        }
    }

    /// Layout lookup with altgr > shift > normal precedence. Caps Lock
    /// inverts the effective shift for alphabetic keys only.
    fn resolve_ascii(&self, scancode: u8, released: bool, extended: bool) -> u8 {
        if released || extended {
            return 0;
        }

        let normal = self.layout.normal[scancode as usize];
        let mut shift = self.modifiers.shift_active();
        if self.modifiers.caps_lock && normal.is_ascii_alphabetic() {
            shift = !shift;
        }

        if self.modifiers.right_alt {
            let ch = self.layout.altgr[scancode as usize];
            if ch != 0 {
                return ch;
            }
        }
        if shift {
            let ch = self.layout.shift[scancode as usize];
            if ch != 0 {
                return ch;
            }
        }
        normal
    }

    /// Swap the active layout. The caller serializes this against the
    /// interrupt handler; the reference itself is replaced in one store so
    /// no decode ever sees a half-updated table.
    pub fn set_layout(&mut self, layout: &'static KeyboardLayout) {
        self.layout = layout;
    }

    #[inline]
    pub fn layout_name(&self) -> &'static str {
        self.layout.name
    }

    /// Snapshot of the current modifier flags.
    #[inline]
    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    /// Takes the LED mask parked by the last lock-key press, if any.
    #[inline]
    pub fn take_led_update(&mut self) -> Option<u8> {
        self.led_update.take()
    }

    /// Clears modifier and marker state, as after a controller reset.
    pub fn reset(&mut self) {
        self.modifiers = ModifierState::new();
        self.pending_extended = false;
        self.led_update = None;
    }
}

#[inline]
fn is_modifier_key(scancode: u8) -> bool {
    matches!(
        scancode,
        SC_LSHIFT | SC_RSHIFT | SC_LCTRL | SC_LALT | SC_CAPSLOCK | SC_NUMLOCK | SC_SCROLLLOCK
    )
}
