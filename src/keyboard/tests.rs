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

use super::*;

fn press(drv: &mut KeyboardDriver, scancode: u8) -> KeyEvent {
    drv.decode(scancode).expect("press should emit an event")
}

#[test]
fn test_no_modifier_identity_over_full_range() {
    for code in 0u8..128 {
        let mut drv = KeyboardDriver::new();
        let ev = press(&mut drv, code);
        let expected = match code {
            SC_LSHIFT | SC_RSHIFT | SC_LCTRL | SC_LALT | SC_CAPSLOCK | SC_NUMLOCK
            | SC_SCROLLLOCK => 0,
            _ => US_QWERTY.normal[code as usize],
        };
        assert_eq!(ev.ascii, expected, "scancode {:#04x}", code);
    }
}

#[test]
fn test_extended_pair_idempotent() {
    let mut drv = KeyboardDriver::new();
    for _ in 0..2 {
        assert_eq!(drv.decode(SC_EXT_E0), None);
        let ev = press(&mut drv, constants::SC_EXT_RIGHT);
        assert!(ev.is_extended);
        assert_eq!(ev.ascii, 0);
    }
}

#[test]
fn test_caps_invariant_on_non_alpha() {
    for code in 0u8..128 {
        let normal = US_QWERTY.normal[code as usize];
        if normal.is_ascii_alphabetic() {
            continue;
        }
        let mut plain = KeyboardDriver::new();
        let without_caps = press(&mut plain, code).ascii;

        let mut capsed = KeyboardDriver::new();
        press(&mut capsed, SC_CAPSLOCK);
        press(&mut capsed, SC_CAPSLOCK | SC_BREAK_BIT);
        let with_caps = press(&mut capsed, code).ascii;

        assert_eq!(without_caps, with_caps, "scancode {:#04x}", code);
    }
}

#[test]
fn test_shift_caps_xor_on_letters() {
    let a = 0x1E;

    // Neither: lowercase.
    let mut drv = KeyboardDriver::new();
    assert_eq!(press(&mut drv, a).ascii, b'a');

    // Shift only: uppercase.
    let mut drv = KeyboardDriver::new();
    press(&mut drv, SC_LSHIFT);
    assert_eq!(press(&mut drv, a).ascii, b'A');

    // Caps only: uppercase.
    let mut drv = KeyboardDriver::new();
    press(&mut drv, SC_CAPSLOCK);
    assert_eq!(press(&mut drv, a).ascii, b'A');

    // Both: back to lowercase.
    let mut drv = KeyboardDriver::new();
    press(&mut drv, SC_CAPSLOCK);
    press(&mut drv, SC_LSHIFT);
    assert_eq!(press(&mut drv, a).ascii, b'a');
}

#[test]
fn test_release_always_zero_ascii() {
    let mut drv = KeyboardDriver::new();
    press(&mut drv, SC_LSHIFT);
    press(&mut drv, SC_CAPSLOCK);
    for code in [0x1Eu8, 0x02, 0x39, 0x1C] {
        let ev = drv.decode(code | SC_BREAK_BIT).unwrap();
        assert!(ev.is_released);
        assert_eq!(ev.ascii, 0);
    }
}

#[test]
fn test_shift_then_letter_scenario() {
    let mut drv = KeyboardDriver::new();
    let shift_ev = press(&mut drv, 0x2A);
    assert_eq!(shift_ev.ascii, 0);
    let ev = press(&mut drv, 0x1E);
    assert_eq!(ev.ascii, b'A');
    assert!(ev.modifiers.left_shift);
}

#[test]
fn test_caps_toggle_scenario() {
    let mut drv = KeyboardDriver::new();
    press(&mut drv, 0x3A);
    press(&mut drv, 0x3A | SC_BREAK_BIT);
    assert_eq!(press(&mut drv, 0x1E).ascii, b'A');
    press(&mut drv, 0x3A);
    press(&mut drv, 0x3A | SC_BREAK_BIT);
    assert_eq!(press(&mut drv, 0x1E).ascii, b'a');
}

#[test]
fn test_extended_arrow_scenario() {
    let mut drv = KeyboardDriver::new();
    assert_eq!(drv.decode(0xE0), None);
    let ev = press(&mut drv, constants::SC_EXT_RIGHT);
    assert!(ev.is_extended);
    assert_eq!(ev.ascii, 0);
    assert_eq!(ev.scancode, constants::SC_EXT_RIGHT);
}

#[test]
fn test_unknown_scancode_scenario() {
    let mut drv = KeyboardDriver::new();
    let ev = press(&mut drv, 0x7F);
    assert_eq!(ev.ascii, 0);
    assert!(!ev.has_char());
}

#[test]
fn test_shift_release_restores_plain_mapping() {
    let mut drv = KeyboardDriver::new();
    press(&mut drv, SC_LSHIFT);
    assert_eq!(press(&mut drv, 0x02).ascii, b'!');
    drv.decode(SC_LSHIFT | SC_BREAK_BIT);
    assert_eq!(press(&mut drv, 0x02).ascii, b'1');
}

#[test]
fn test_event_modifier_snapshot_is_copy() {
    let mut drv = KeyboardDriver::new();
    press(&mut drv, SC_LSHIFT);
    let ev = press(&mut drv, 0x1E);
    drv.decode(SC_LSHIFT | SC_BREAK_BIT);
    // The event's snapshot must not observe the later release.
    assert!(ev.modifiers.left_shift);
}

#[test]
fn test_sink_forwards_only_press_characters() {
    let release = KeyEvent {
        scancode: 0x1E,
        is_released: true,
        is_extended: false,
        ascii: 0,
        modifiers: ModifierState::new(),
    };
    assert!(!release.has_char());

    let press = KeyEvent {
        ascii: b'x',
        is_released: false,
        ..release
    };
    assert!(press.has_char());
}

#[test]
fn test_constants() {
    assert_eq!(KBD_DATA, 0x60);
    assert_eq!(KBD_STATUS, 0x64);
    assert_eq!(KBD_VECTOR, 0x21);
    assert_eq!(SC_BREAK_BIT, 0x80);
    assert_eq!(SC_EXT_E0, 0xE0);
    assert!(CHAR_RING_SIZE.is_power_of_two());
}

#[test]
fn test_modifier_scancodes() {
    assert_eq!(SC_LSHIFT, 0x2A);
    assert_eq!(SC_RSHIFT, 0x36);
    assert_eq!(SC_LCTRL, 0x1D);
    assert_eq!(SC_LALT, 0x38);
    assert_eq!(SC_CAPSLOCK, 0x3A);
    assert_eq!(SC_NUMLOCK, 0x45);
    assert_eq!(SC_SCROLLLOCK, 0x46);
}
