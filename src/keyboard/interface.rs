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
//! The single owned driver instance and the operations exposed on it.
//!
//! The driver lives behind a spin lock. The interrupt handler takes the
//! lock bare; every other caller wraps the acquisition in
//! `without_interrupts`, so the handler can never preempt a lock holder
//! on the same CPU and then spin forever.

use lazy_static::lazy_static;
use spin::Mutex;
use x86_64::instructions::interrupts::without_interrupts;

use super::decode::KeyboardDriver;
use super::error::Result;
use super::event::KeyEvent;
use super::io;
use super::layout::KeyboardLayout;
use super::modifiers::ModifierState;
use super::sink;

lazy_static! {
    static ref KEYBOARD: Mutex<KeyboardDriver> = Mutex::new(KeyboardDriver::new());
}

/// Controller reset/enable handshake, default LED state, cleared
/// modifier and marker state.
pub fn init() -> Result<()> {
    io::reset_and_enable()?;
    io::set_leds(0);
    without_interrupts(|| {
        let mut driver = KEYBOARD.lock();
        driver.reset();
        driver.set_layout(&super::layout::US_QWERTY);
    });
    log::info!("ps/2 keyboard online ({})", super::layout::US_QWERTY.name);
    Ok(())
}

/// Interrupt-context entry point: decode at most one pending scancode and
/// hand any resulting event to the sink. Non-reentrant (the PIC keeps
/// IRQ1 masked while we run) and non-blocking (single status probe,
/// fire-and-forget LED write). The caller signals EOI afterwards on every
/// path.
pub fn on_keyboard_interrupt() {
    let mut driver = KEYBOARD.lock();
    if let Some(byte) = io::read_scancode() {
        if let Some(event) = driver.decode(byte) {
            if let Some(mask) = driver.take_led_update() {
                io::set_leds(mask);
            }
            sink::dispatch(&event);
        }
    }
}

/// Synchronous decode of one scancode, spinning until the controller has
/// data. Marker bytes are consumed silently, so this always returns a
/// real event.
///
/// The status probe and the data read sit inside the interrupts-disabled
/// section: probing first and reading later would let the interrupt
/// handler drain the port in between, and the read would then decode a
/// stale latch byte as an event that never arrived.
pub fn read_event() -> KeyEvent {
    loop {
        let (event, led) = without_interrupts(|| {
            let mut driver = KEYBOARD.lock();
            match io::read_scancode() {
                Some(byte) => {
                    let event = driver.decode(byte);
                    (event, driver.take_led_update())
                }
                None => (None, None),
            }
        });
        if let Some(mask) = led {
            io::set_leds(mask);
        }
        if let Some(event) = event {
            return event;
        }
        core::hint::spin_loop();
    }
}

/// Atomically replaces the active layout.
pub fn set_layout(layout: &'static KeyboardLayout) {
    without_interrupts(|| {
        KEYBOARD.lock().set_layout(layout);
    });
    log::info!("keyboard layout set to {}", layout.name);
}

/// Direct LED write, bypassing the modifier-derived mask.
pub fn set_leds(mask: u8) {
    io::set_leds(mask);
}

/// Snapshot of the current modifier flags.
pub fn modifiers() -> ModifierState {
    without_interrupts(|| KEYBOARD.lock().modifiers())
}

#[inline]
pub fn is_shift_pressed() -> bool {
    modifiers().shift_active()
}

#[inline]
pub fn is_ctrl_pressed() -> bool {
    modifiers().ctrl_active()
}

#[inline]
pub fn is_alt_pressed() -> bool {
    modifiers().alt_active()
}

#[inline]
pub fn is_caps_lock_active() -> bool {
    modifiers().caps_lock
}
