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

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicUsize, Ordering};

/// Lock-free single-producer single-consumer byte ring.
///
/// Head/tail are synchronized with acquire/release atomics; when full,
/// the oldest byte is overwritten rather than blocking the producer.
/// `N` must be a power of two.
pub struct SpscRing<const N: usize> {
    buf: UnsafeCell<[u8; N]>,
    head: AtomicUsize,
    tail: AtomicUsize,
}

// SAFETY: the push/pop contracts below restrict buffer access to one
// producer and one consumer; index handoff goes through the atomics.
unsafe impl<const N: usize> Sync for SpscRing<N> {}

impl<const N: usize> SpscRing<N> {
    pub const fn new() -> Self {
        Self {
            buf: UnsafeCell::new([0; N]),
            head: AtomicUsize::new(0),
            tail: AtomicUsize::new(0),
        }
    }

    #[inline]
    fn mask() -> usize {
        N - 1
    }

    /// # Safety
    ///
    /// Exactly one producer may call this; here that is the keyboard
    /// interrupt handler, which is non-reentrant on its own line.
    #[inline]
    pub unsafe fn push(&self, byte: u8) {
        let head = self.head.load(Ordering::Relaxed);
        let next = head.wrapping_add(1) & Self::mask();
        let tail = self.tail.load(Ordering::Acquire);
        if next == tail {
            // Full: drop the oldest byte.
            self.tail
                .store(tail.wrapping_add(1) & Self::mask(), Ordering::Release);
        }

        // SAFETY: producer exclusively owns the slot at `head`.
        unsafe { (*self.buf.get())[head] = byte };
        self.head.store(next, Ordering::Release);
    }

    /// # Safety
    ///
    /// Exactly one consumer may call this.
    #[inline]
    pub unsafe fn pop(&self) -> Option<u8> {
        let tail = self.tail.load(Ordering::Relaxed);
        let head = self.head.load(Ordering::Acquire);
        if tail == head {
            return None;
        }

        // SAFETY: consumer exclusively owns the slot at `tail`.
        let byte = unsafe { (*self.buf.get())[tail] };
        self.tail
            .store(tail.wrapping_add(1) & Self::mask(), Ordering::Release);
        Some(byte)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.load(Ordering::Acquire) == self.tail.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn len(&self) -> usize {
        let head = self.head.load(Ordering::Acquire);
        let tail = self.tail.load(Ordering::Relaxed);
        head.wrapping_sub(tail) & Self::mask()
    }
}
