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

//! Shell configuration
//!
//! One explicit configuration context, loaded at startup, applied to the
//! core once it is up, and saved at shutdown. It is passed to the shell at
//! construction; nothing in the crate reads configuration ambiently.

use crate::core::{EmuCore, EmulationFlags, ShortcutId};
use crate::frontend::shortcut::ShellAction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::window::{Window, WindowAttributes};

/// Visual theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Follow a light palette
    Light,
    /// Follow a dark palette
    Dark,
}

impl From<Theme> for winit::window::Theme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => winit::window::Theme::Light,
            Theme::Dark => winit::window::Theme::Dark,
        }
    }
}

/// Persisted window geometry.
///
/// Captured at close and applied at the next open. Size and position are
/// logical; position is absent until a first run captured one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    /// Client width in logical pixels
    pub width: u32,
    /// Client height in logical pixels
    pub height: u32,
    /// Outer x position in logical pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    /// Outer y position in logical pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    /// Whether the window was maximized
    pub maximized: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            x: None,
            y: None,
            maximized: false,
        }
    }
}

impl WindowSettings {
    /// Window attributes for opening the window with these settings.
    pub fn window_attributes(&self, title: &str) -> WindowAttributes {
        let mut attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(LogicalSize::new(self.width, self.height))
            .with_maximized(self.maximized)
            .with_resizable(true);

        if let (Some(x), Some(y)) = (self.x, self.y) {
            attributes = attributes.with_position(LogicalPosition::new(x, y));
        }

        attributes
    }

    /// Capture the window's current geometry.
    ///
    /// Size and position are only recorded from the Normal state so a
    /// maximized or fullscreen close does not clobber the restored bounds.
    pub fn capture(&mut self, window: &Window) {
        let scale = window.scale_factor();
        self.maximized = window.is_maximized();

        if window.fullscreen().is_none() && !self.maximized {
            let size: LogicalSize<u32> = window.inner_size().to_logical(scale);
            self.width = size.width;
            self.height = size.height;

            if let Ok(position) = window.outer_position() {
                let position: LogicalPosition<i32> = position.to_logical(scale);
                self.x = Some(position.x);
                self.y = Some(position.y);
            }
        }
    }
}

/// User preferences applied to the window and the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Visual theme, applied shortly after startup
    pub theme: Theme,
    /// Keep polling input while the window is in the background
    pub allow_background_input: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            allow_background_input: false,
        }
    }
}

/// Complete shell configuration that can be saved/loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Persisted window geometry
    pub window: WindowSettings,
    /// User preferences
    pub preferences: Preferences,
    /// Shortcut binding table, keyed by decimal shortcut identifier.
    /// Identifiers are stored as strings for serialization.
    pub shortcuts: HashMap<String, ShellAction>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        let mut shortcuts = HashMap::new();
        shortcuts.insert("0".to_string(), ShellAction::ToggleFullscreen);
        shortcuts.insert("1".to_string(), ShellAction::SetScale);
        shortcuts.insert("2".to_string(), ShellAction::Exit);

        Self {
            window: WindowSettings::default(),
            preferences: Preferences::default(),
            shortcuts,
        }
    }
}

impl ShellConfig {
    /// Load configuration, falling back to defaults when the file is
    /// missing or malformed.
    pub fn load(path: &Path) -> Self {
        Self::read(path).unwrap_or_else(|e| {
            log::info!("Using default config (failed to load: {})", e);
            Self::default()
        })
    }

    fn read(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, contents).map_err(|e| format!("Failed to write config file: {}", e))
    }

    /// Mirror the preferences into the core's emulation flags.
    pub fn apply(&self, core: &dyn EmuCore) {
        core.set_emulation_flag(
            EmulationFlags::ALLOW_BACKGROUND_INPUT,
            self.preferences.allow_background_input,
        );
    }

    /// Parse the binding table into router form. Unparseable identifiers
    /// are reported and skipped.
    pub fn shortcut_bindings(&self) -> HashMap<ShortcutId, ShellAction> {
        let mut bindings = HashMap::new();
        for (id, &action) in &self.shortcuts {
            match id.parse::<u32>() {
                Ok(id) => {
                    bindings.insert(ShortcutId(id), action);
                }
                Err(_) => log::warn!("Unknown shortcut identifier in config: {}", id),
            }
        }
        bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = ShellConfig::default();

        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: ShellConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ShellConfig = toml::from_str("[preferences]\ntheme = \"light\"\n").unwrap();

        assert_eq!(config.preferences.theme, Theme::Light);
        assert_eq!(config.window, WindowSettings::default());
        assert!(!config.shortcuts.is_empty());
    }

    #[test]
    fn test_shortcut_bindings_skip_bad_identifiers() {
        let mut config = ShellConfig::default();
        config
            .shortcuts
            .insert("not-a-number".to_string(), ShellAction::Exit);

        let bindings = config.shortcut_bindings();
        assert_eq!(bindings.len(), 3);
        assert_eq!(
            bindings.get(&ShortcutId(0)),
            Some(&ShellAction::ToggleFullscreen)
        );
    }

    #[test]
    fn test_apply_mirrors_background_input_flag() {
        use crate::core::NullCore;

        let core = NullCore::new();
        let mut config = ShellConfig::default();
        config.preferences.allow_background_input = true;

        config.apply(&core);
        assert!(core
            .flags()
            .contains(EmulationFlags::ALLOW_BACKGROUND_INPUT));
    }
}
