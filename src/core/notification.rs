// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 The emux authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Notification types emitted by the native core
//!
//! Each notification carries a kind and an opaque payload slice. The payload
//! is only valid for the duration of the callback invocation, so anything
//! that needs it later must decode it into an owned value first.

use super::error::{Result, ShellError};
use serde::{Deserialize, Serialize};

/// Kind discriminant of a core notification.
///
/// The set is extensible: the bridge ignores kinds it does not handle, so
/// new variants can be added without changing its contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Content was loaded; metadata is available from the core.
    GameLoaded,
    /// Emulation resumed after a pause.
    GameResumed,
    /// Emulation stopped; no content is running anymore.
    EmulationStopped,
    /// The emulated output resolution changed.
    ResolutionChanged,
    /// The core requests execution of a user-bound shortcut.
    ExecuteShortcut,
}

/// Identifier of a user-bindable shortcut.
///
/// The meaning of each identifier is defined by the binding table in the
/// configuration, not by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortcutId(pub u32);

/// Decoded `ExecuteShortcut` payload.
///
/// Wire layout is fixed at [`Self::ENCODED_LEN`] bytes, little endian:
/// shortcut identifier (u32) followed by a parameter word (u32). The
/// parameter carries action-specific data, e.g. the requested scale for a
/// zoom shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutRequest {
    /// Which shortcut to execute.
    pub shortcut: ShortcutId,
    /// Action-specific parameter word.
    pub param: u32,
}

impl ShortcutRequest {
    /// Documented size of the encoded payload.
    pub const ENCODED_LEN: usize = 8;

    /// Decode a request from a raw notification payload.
    ///
    /// Reads exactly [`Self::ENCODED_LEN`] bytes; trailing bytes are
    /// ignored so the core may append fields without breaking older
    /// front-ends. A shorter payload is malformed.
    ///
    /// # Example
    ///
    /// ```
    /// use emux::core::notification::{ShortcutId, ShortcutRequest};
    ///
    /// let payload = [7, 0, 0, 0, 2, 0, 0, 0];
    /// let req = ShortcutRequest::decode(&payload).unwrap();
    /// assert_eq!(req.shortcut, ShortcutId(7));
    /// assert_eq!(req.param, 2);
    /// ```
    pub fn decode(payload: &[u8]) -> Result<Self> {
        if payload.len() < Self::ENCODED_LEN {
            return Err(ShellError::MalformedPayload {
                kind: "ExecuteShortcut",
                len: payload.len(),
            });
        }

        let shortcut = u32::from_le_bytes([payload[0], payload[1], payload[2], payload[3]]);
        let param = u32::from_le_bytes([payload[4], payload[5], payload[6], payload[7]]);

        Ok(Self {
            shortcut: ShortcutId(shortcut),
            param,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_payload() {
        let payload = [0x34, 0x12, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00];
        let req = ShortcutRequest::decode(&payload).unwrap();
        assert_eq!(req.shortcut, ShortcutId(0x1234));
        assert_eq!(req.param, 3);
    }

    #[test]
    fn test_decode_short_payload_is_malformed() {
        let err = ShortcutRequest::decode(&[1, 2, 3]).unwrap_err();
        match err {
            ShellError::MalformedPayload { kind, len } => {
                assert_eq!(kind, "ExecuteShortcut");
                assert_eq!(len, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_empty_payload_is_malformed() {
        assert!(ShortcutRequest::decode(&[]).is_err());
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let payload = [5, 0, 0, 0, 1, 0, 0, 0, 0xFF, 0xFF];
        let req = ShortcutRequest::decode(&payload).unwrap();
        assert_eq!(req.shortcut, ShortcutId(5));
        assert_eq!(req.param, 1);
    }
}
