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
//! Event sink: forwards decoded press characters to the one registered
//! consumer. Modifier-only and release events are dropped here.

use spin::Mutex;
use x86_64::instructions::interrupts::without_interrupts;

use super::constants::CHAR_RING_SIZE;
use super::event::KeyEvent;
use super::ring::SpscRing;

/// Receives one character per forwarded key press. `put_char` runs in
/// interrupt context and must not block.
pub trait KeyConsumer: Sync {
    fn put_char(&self, ch: u8);
}

/// Default consumer: a ring buffer drained by the console's input loop
/// through [`read_char`].
pub struct CharBuffer {
    ring: SpscRing<CHAR_RING_SIZE>,
}

impl CharBuffer {
    pub const fn new() -> Self {
        Self {
            ring: SpscRing::new(),
        }
    }

    #[inline]
    pub fn read_char(&self) -> Option<char> {
        // SAFETY: the input loop is the single consumer of this ring.
        unsafe { self.ring.pop().map(|b| b as char) }
    }

    #[inline]
    pub fn has_data(&self) -> bool {
        !self.ring.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }
}

impl KeyConsumer for CharBuffer {
    #[inline]
    fn put_char(&self, ch: u8) {
        // SAFETY: dispatch runs only inside the keyboard interrupt
        // handler, the single producer of this ring.
        unsafe { self.ring.push(ch) };
    }
}

pub static CHAR_BUFFER: CharBuffer = CharBuffer::new();

static CONSUMER: Mutex<&'static dyn KeyConsumer> = Mutex::new(&CHAR_BUFFER);

/// Replaces the registered consumer. Interrupts are held off so the
/// handler can never spin on the lock while we hold it.
pub fn set_consumer(consumer: &'static dyn KeyConsumer) {
    without_interrupts(|| {
        *CONSUMER.lock() = consumer;
    });
}

/// Forwards a press event's character, if it has one. Called from the
/// interrupt handler.
pub(crate) fn dispatch(event: &KeyEvent) {
    if event.has_char() {
        CONSUMER.lock().put_char(event.ascii);
    }
}

/// Next buffered character from the default consumer, if any.
#[inline]
pub fn read_char() -> Option<char> {
    CHAR_BUFFER.read_char()
}

#[inline]
pub fn has_data() -> bool {
    CHAR_BUFFER.has_data()
}

#[inline]
pub fn pending_char_count() -> usize {
    CHAR_BUFFER.len()
}
