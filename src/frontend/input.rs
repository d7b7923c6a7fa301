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

//! Key interception
//!
//! Sits at the front of the event routing pipeline, ahead of any
//! focus-based handling: every key transition is forwarded to the core's
//! input-state table no matter which widget has focus, and the keys that
//! would collide with user-defined shortcuts are kept away from default
//! menu/window handling.

use crate::core::EmuCore;
use std::sync::Arc;
use winit::keyboard::KeyCode;

/// Keys that must not reach default widget handling: Tab moves widget
/// focus and F10 activates the menu, both of which conflict with
/// user-bindable shortcuts.
const SUPPRESSED_KEYS: [KeyCode; 2] = [KeyCode::Tab, KeyCode::F10];

/// Forwards raw key transitions to the core's input-state service.
pub struct KeyInterceptor {
    core: Arc<dyn EmuCore>,
}

impl KeyInterceptor {
    /// Create an interceptor writing into the given core.
    pub fn new(core: Arc<dyn EmuCore>) -> Self {
        Self { core }
    }

    /// Record a key press.
    ///
    /// Returns `true` when the event must be marked handled so it does not
    /// propagate further. The forward to the core happens either way.
    pub fn on_key_down(&self, key: KeyCode) -> bool {
        self.core.set_key_state(key, true);
        SUPPRESSED_KEYS.contains(&key)
    }

    /// Record a key release. Releases are never suppressed.
    pub fn on_key_up(&self, key: KeyCode) -> bool {
        self.core.set_key_state(key, false);
        false
    }
}
