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

//! Window state machine
//!
//! Tracks the Normal / Maximized / Fullscreen mode of the host window. The
//! authoritative state lives in the OS window; this component only observes
//! transitions and reports the effects to apply. The one transition it can
//! request is the fullscreen toggle, which alternates between Fullscreen
//! and Normal without ever passing through Maximized.

/// Window mode as reported by the OS window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowMode {
    /// Regular floating window; layout drives the surface size.
    #[default]
    Normal,
    /// Maximized to the work area.
    Maximized,
    /// Borderless fullscreen; chrome is hidden.
    Fullscreen,
}

/// Side effects of one observed mode transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionEffects {
    /// Menu chrome visibility after the transition.
    pub menu_visible: bool,
    /// Entering Normal releases the explicit surface size so layout can
    /// drive it again, followed by a remeasure.
    pub release_surface_size: bool,
}

/// Observer of externally-driven window mode changes.
#[derive(Debug, Default)]
pub struct WindowStateTracker {
    mode: WindowMode,
}

impl WindowStateTracker {
    /// Create a tracker starting in [`WindowMode::Normal`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode.
    pub fn mode(&self) -> WindowMode {
        self.mode
    }

    /// Record a mode change reported by the OS.
    ///
    /// Returns the effects to apply, or `None` when the mode did not
    /// actually change.
    ///
    /// # Example
    ///
    /// ```
    /// use emux::frontend::window_state::{WindowMode, WindowStateTracker};
    ///
    /// let mut tracker = WindowStateTracker::new();
    /// let effects = tracker.observe(WindowMode::Fullscreen).unwrap();
    /// assert!(!effects.menu_visible);
    /// ```
    pub fn observe(&mut self, mode: WindowMode) -> Option<TransitionEffects> {
        if mode == self.mode {
            return None;
        }
        self.mode = mode;

        Some(TransitionEffects {
            menu_visible: mode != WindowMode::Fullscreen,
            release_surface_size: mode == WindowMode::Normal,
        })
    }

    /// Target mode for a fullscreen toggle request.
    ///
    /// Fullscreen and Normal alternate; any other mode enters Fullscreen
    /// directly.
    pub fn toggle_fullscreen_target(&self) -> WindowMode {
        if self.mode == WindowMode::Fullscreen {
            WindowMode::Normal
        } else {
            WindowMode::Fullscreen
        }
    }
}
