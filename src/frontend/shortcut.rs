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

//! Shortcut routing
//!
//! Maps a shortcut identifier to the shell action bound to it. The binding
//! table contents are user configuration; this module only resolves and
//! dispatches, exactly once, in the thread context it was invoked from.

use crate::core::ShortcutId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Shell-level action a shortcut can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShellAction {
    /// Toggle borderless fullscreen.
    ToggleFullscreen,
    /// Set the display scale to the shortcut's parameter word.
    SetScale,
    /// Request application exit.
    Exit,
}

/// Resolver from shortcut identifiers to bound actions.
pub struct ShortcutRouter {
    bindings: HashMap<ShortcutId, ShellAction>,
}

impl ShortcutRouter {
    /// Create a router over an externally supplied binding table.
    ///
    /// # Example
    ///
    /// ```
    /// use emux::core::ShortcutId;
    /// use emux::frontend::shortcut::{ShellAction, ShortcutRouter};
    /// use std::collections::HashMap;
    ///
    /// let mut bindings = HashMap::new();
    /// bindings.insert(ShortcutId(0), ShellAction::ToggleFullscreen);
    /// let router = ShortcutRouter::new(bindings);
    /// assert_eq!(router.resolve(ShortcutId(0)), Some(ShellAction::ToggleFullscreen));
    /// ```
    pub fn new(bindings: HashMap<ShortcutId, ShellAction>) -> Self {
        Self { bindings }
    }

    /// Add or replace one binding.
    pub fn bind(&mut self, id: ShortcutId, action: ShellAction) {
        self.bindings.insert(id, action);
    }

    /// Look up the action bound to an identifier.
    ///
    /// An unbound identifier is reported and dropped, never an error.
    pub fn resolve(&self, id: ShortcutId) -> Option<ShellAction> {
        let action = self.bindings.get(&id).copied();
        if action.is_none() {
            log::warn!("no action bound to shortcut {:?}", id);
        }
        action
    }

    /// Number of bindings in the table.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when no binding is configured.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
