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

use core::fmt;

/// Failures during controller bring-up. The decode path itself is total
/// and never produces one of these: unknown scancodes resolve to ascii 0
/// and name lookups fall back to a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyboardError {
    /// The reset handshake never produced an acknowledgment within the
    /// poll budget.
    ControllerUnresponsive,
    /// The controller answered the reset but failed its self-test.
    SelfTestFailed,
    /// A device command was sent but no ACK came back in time.
    AckTimeout,
}

impl KeyboardError {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ControllerUnresponsive => "keyboard controller not responding",
            Self::SelfTestFailed => "keyboard self-test failed",
            Self::AckTimeout => "keyboard command not acknowledged",
        }
    }
}

impl fmt::Display for KeyboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub type Result<T> = core::result::Result<T, KeyboardError>;
