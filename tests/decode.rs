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
//! Integration tests driving the pure decoder with raw byte streams,
//! the way the interrupt handler would.

use ps2kbd::keyboard::constants::*;
use ps2kbd::keyboard::{key_name, US_QWERTY};
use ps2kbd::{KeyEvent, KeyboardDriver};

fn feed(driver: &mut KeyboardDriver, bytes: &[u8]) -> Vec<KeyEvent> {
    bytes.iter().filter_map(|&b| driver.decode(b)).collect()
}

#[test]
fn types_hello_with_mixed_case() {
    let mut driver = KeyboardDriver::new();
    // H (shifted), e, l, l, o
    let stream = [
        SC_LSHIFT,
        0x23,
        SC_LSHIFT | SC_BREAK_BIT,
        0x12,
        0x26,
        0x26,
        0x18,
    ];
    let chars: Vec<u8> = feed(&mut driver, &stream)
        .into_iter()
        .filter(|e| e.has_char())
        .map(|e| e.ascii)
        .collect();
    assert_eq!(chars, b"Hello");
}

#[test]
fn modifier_snapshot_travels_with_event() {
    let mut driver = KeyboardDriver::new();
    let events = feed(&mut driver, &[SC_LCTRL, 0x2E, SC_LCTRL | SC_BREAK_BIT]);
    // ctrl press, 'c' press, ctrl release
    assert_eq!(events.len(), 3);
    assert!(events[1].modifiers.left_ctrl);
    assert_eq!(events[1].ascii, b'c');
    assert!(!events[2].modifiers.left_ctrl);
}

#[test]
fn extended_pair_decodes_atomically() {
    let mut driver = KeyboardDriver::new();
    let events = feed(&mut driver, &[SC_EXT_E0, SC_EXT_RIGHT, 0x1E]);
    assert_eq!(events.len(), 2);
    assert!(events[0].is_extended);
    assert_eq!(events[0].ascii, 0);
    // The marker must not leak onto the following ordinary key.
    assert!(!events[1].is_extended);
    assert_eq!(events[1].ascii, b'a');
}

#[test]
fn one_event_per_scancode_byte() {
    let mut driver = KeyboardDriver::new();
    let stream = [
        SC_EXT_E0,
        SC_EXT_UP,
        0x1E,
        0x1E | SC_BREAK_BIT,
        SC_LSHIFT,
        0x10,
    ];
    let events = feed(&mut driver, &stream);
    // Every byte except the marker yields exactly one event; nothing is
    // duplicated or invented.
    assert_eq!(events.len(), 5);
    assert!(events[0].is_extended);
    assert!(events.iter().skip(1).all(|e| !e.is_extended));
}

#[test]
fn extended_release_tracks_right_alt() {
    let mut driver = KeyboardDriver::new();
    feed(&mut driver, &[SC_EXT_E0, SC_LALT]);
    assert!(driver.modifiers().right_alt);
    assert!(!driver.modifiers().left_alt);
    feed(&mut driver, &[SC_EXT_E0, SC_LALT | SC_BREAK_BIT]);
    assert!(!driver.modifiers().right_alt);
}

#[test]
fn lock_keys_latch_across_releases() {
    let mut driver = KeyboardDriver::new();
    feed(
        &mut driver,
        &[
            SC_NUMLOCK,
            SC_NUMLOCK | SC_BREAK_BIT,
            SC_SCROLLLOCK,
            SC_SCROLLLOCK | SC_BREAK_BIT,
        ],
    );
    let mods = driver.modifiers();
    assert!(mods.num_lock);
    assert!(mods.scroll_lock);
    assert_eq!(mods.led_mask(), LED_NUM_LOCK | LED_SCROLL_LOCK);
}

#[test]
fn unshifted_stream_matches_layout_table() {
    let mut driver = KeyboardDriver::new();
    for code in [0x10u8, 0x1E, 0x2C, 0x02, 0x39] {
        let ev = driver.decode(code).unwrap();
        assert_eq!(ev.ascii, US_QWERTY.normal[code as usize]);
        driver.decode(code | SC_BREAK_BIT);
    }
}

#[test]
fn key_name_is_total() {
    assert_eq!(key_name(SC_ENTER), "ENTER");
    assert_eq!(key_name(SC_LSHIFT), "LSHIFT");
    for code in 0..=255u8 {
        // Never panics, always yields something printable.
        assert!(!key_name(code).is_empty());
    }
    assert_eq!(key_name(0x7F), "UNKNOWN");
}

#[test]
fn layout_swap_changes_translation() {
    static CELL: std::sync::OnceLock<ps2kbd::KeyboardLayout> = std::sync::OnceLock::new();
    let dvorak_like = CELL.get_or_init(|| {
        let mut normal = US_QWERTY.normal;
        let mut shift = US_QWERTY.shift;
        normal[0x10] = b'\'';
        shift[0x10] = b'"';
        ps2kbd::KeyboardLayout {
            normal,
            shift,
            altgr: [0; 128],
            name: "test layout",
        }
    });

    let mut driver = KeyboardDriver::new();
    assert_eq!(driver.decode(0x10).unwrap().ascii, b'q');
    driver.decode(0x10 | SC_BREAK_BIT);

    driver.set_layout(dvorak_like);
    assert_eq!(driver.layout_name(), "test layout");
    assert_eq!(driver.decode(0x10).unwrap().ascii, b'\'');
}
