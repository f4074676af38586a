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
//! Keyboard interrupt entry: a naked stub that saves the interrupted
//! context, calls the Rust dispatch, and returns with `iretq`. The
//! dispatch signals end-of-interrupt after the handler on every path.

use super::idt::KERNEL_DS;
use super::pic;
use crate::keyboard::constants::KBD_VECTOR;

#[unsafe(naked)]
#[no_mangle]
pub(crate) unsafe extern "C" fn keyboard_isr_stub() {
    core::arch::naked_asm!(
        "push rax",
        "push rbx",
        "push rcx",
        "push rdx",
        "push rsi",
        "push rdi",
        "push rbp",
        "push r8",
        "push r9",
        "push r10",
        "push r11",
        "push r12",
        "push r13",
        "push r14",
        "push r15",
        "mov ax, ds",
        "push rax",
        "mov ax, {}",
        "mov ds, ax",
        "mov es, ax",
        "call keyboard_interrupt_dispatch",
        "pop rax",
        "mov ds, ax",
        "mov es, ax",
        "pop r15",
        "pop r14",
        "pop r13",
        "pop r12",
        "pop r11",
        "pop r10",
        "pop r9",
        "pop r8",
        "pop rbp",
        "pop rdi",
        "pop rsi",
        "pop rdx",
        "pop rcx",
        "pop rbx",
        "pop rax",
        "iretq",
        const KERNEL_DS,
    );
}

#[no_mangle]
extern "C" fn keyboard_interrupt_dispatch() {
    crate::keyboard::on_keyboard_interrupt();
    pic::end_of_interrupt(KBD_VECTOR);
}
