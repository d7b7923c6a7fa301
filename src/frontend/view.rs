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

//! View-model for the main window
//!
//! The pieces of UI-visible state the notification handlers and the window
//! state machine mutate. All of it lives on the UI thread.

use crate::core::RomInfo;
use winit::dpi::LogicalSize;

/// Default height of the menu chrome in logical pixels.
pub const DEFAULT_MENU_HEIGHT: f64 = 25.0;

/// Game-selection overlay shown while no content is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentGamesView {
    /// Whether the overlay is shown.
    pub visible: bool,
    /// Whether the overlay holds keyboard focus. Focus is pulled away when
    /// content starts so Enter cannot activate a hidden button.
    pub focused: bool,
}

impl RecentGamesView {
    /// Create the overlay in its startup state: visible and focused.
    pub fn new() -> Self {
        Self {
            visible: true,
            focused: true,
        }
    }

    /// Re-populate and show the overlay after emulation stops.
    pub fn reinit(&mut self) {
        self.visible = true;
        self.focused = true;
    }

    /// Hide the overlay while content runs.
    pub fn hide(&mut self) {
        self.visible = false;
    }
}

impl Default for RecentGamesView {
    fn default() -> Self {
        Self::new()
    }
}

/// Menu-bar chrome. Its height participates in window sizing math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuModel {
    /// Whether the menu is shown (hidden in fullscreen).
    pub visible: bool,
    /// Menu height in logical pixels.
    pub height: f64,
}

impl MenuModel {
    /// Create a visible menu of the given height.
    pub fn new(height: f64) -> Self {
        Self {
            visible: true,
            height,
        }
    }
}

impl Default for MenuModel {
    fn default() -> Self {
        Self::new(DEFAULT_MENU_HEIGHT)
    }
}

/// UI-visible state of the main window.
#[derive(Debug, Default)]
pub struct MainView {
    /// Metadata of the running content; empty when nothing is loaded.
    pub rom_info: RomInfo,
    /// Game-selection overlay.
    pub recent_games: RecentGamesView,
    /// Menu chrome.
    pub menu: MenuModel,
}

impl MainView {
    /// Create the startup view: no content, overlay visible.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Handle to the render surface owned by the host.
///
/// The shell never draws into it; it only sizes it and triggers layout
/// passes. An explicit size of `None` lets layout fill the available space.
pub trait RenderSurface {
    /// Set or clear the explicit logical size override.
    fn set_explicit_size(&mut self, size: Option<LogicalSize<f64>>);

    /// Current explicit size override.
    fn explicit_size(&self) -> Option<LogicalSize<f64>>;

    /// Invalidate measure/arrange so the next layout pass picks up new
    /// sizes. Completion is asynchronous.
    fn invalidate_layout(&mut self);

    /// Opaque native handle handed to the core at initialization.
    fn native_handle(&self) -> u64;
}

/// Surface stand-in used when no renderer is wired up.
#[derive(Debug, Default)]
pub struct NullSurface {
    explicit_size: Option<LogicalSize<f64>>,
    layout_passes: u64,
}

impl NullSurface {
    /// Create a surface with no explicit size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of layout invalidations so far.
    pub fn layout_passes(&self) -> u64 {
        self.layout_passes
    }
}

impl RenderSurface for NullSurface {
    fn set_explicit_size(&mut self, size: Option<LogicalSize<f64>>) {
        self.explicit_size = size;
    }

    fn explicit_size(&self) -> Option<LogicalSize<f64>> {
        self.explicit_size
    }

    fn invalidate_layout(&mut self) {
        self.layout_passes += 1;
    }

    fn native_handle(&self) -> u64 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_games_lifecycle() {
        let mut view = RecentGamesView::new();
        assert!(view.visible);
        assert!(view.focused);

        view.hide();
        assert!(!view.visible);

        view.reinit();
        assert!(view.visible);
        assert!(view.focused);
    }

    #[test]
    fn test_null_surface_records_size_and_layout() {
        let mut surface = NullSurface::new();
        assert_eq!(surface.explicit_size(), None);

        surface.set_explicit_size(Some(LogicalSize::new(512.0, 480.0)));
        assert_eq!(surface.explicit_size(), Some(LogicalSize::new(512.0, 480.0)));

        surface.invalidate_layout();
        surface.set_explicit_size(None);
        assert_eq!(surface.explicit_size(), None);
        assert_eq!(surface.layout_passes(), 1);
    }
}
