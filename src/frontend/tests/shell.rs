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

//! Unit tests for the window controller's message handling
//!
//! These run the shell without a window: everything observable goes through
//! the view-model, the surface stand-in, and the recording core.

use crate::core::{EmuCore, FrameInfo, NullCore, RomInfo, ShortcutId, ShortcutRequest};
use crate::frontend::bridge::{NotificationBridge, UiMessage, UiPoster};
use crate::frontend::view::NullSurface;
use crate::frontend::window_state::WindowMode;
use crate::frontend::{Shell, ShellOptions};
use std::sync::mpsc;
use std::sync::Arc;
use tempfile::TempDir;
use winit::dpi::LogicalSize;

fn shell(dir: &TempDir) -> (Arc<NullCore>, Shell) {
    let core = Arc::new(NullCore::new());
    let (tx, _rx) = mpsc::channel::<UiMessage>();
    let shell = Shell::new(
        Arc::clone(&core) as Arc<dyn EmuCore>,
        Box::new(NullSurface::new()),
        Arc::new(tx) as Arc<dyn UiPoster>,
        ShellOptions {
            config_path: dir.path().join("emux.toml"),
            home_folder: dir.path().to_path_buf(),
            startup_args: Vec::new(),
        },
    );
    (core, shell)
}

fn rom(name: &str) -> RomInfo {
    RomInfo {
        name: name.to_string(),
        path: None,
    }
}

#[test]
fn test_game_loaded_hides_overlay_and_claims_focus() {
    let dir = TempDir::new().unwrap();
    let (_core, mut shell) = shell(&dir);
    assert!(shell.view().recent_games.visible);

    shell.handle_ui_message(UiMessage::GameLoaded(rom("Solar Wars")));

    assert!(!shell.view().recent_games.visible);
    assert!(!shell.view().recent_games.focused);
    assert_eq!(shell.view().rom_info.name, "Solar Wars");
}

#[test]
fn test_game_resumed_hides_overlay_without_touching_rom_info() {
    let dir = TempDir::new().unwrap();
    let (_core, mut shell) = shell(&dir);

    shell.handle_ui_message(UiMessage::GameLoaded(rom("Solar Wars")));
    shell.handle_ui_message(UiMessage::EmulationStopped);
    shell.handle_ui_message(UiMessage::GameResumed);

    assert!(!shell.view().recent_games.visible);
    assert!(shell.view().rom_info.is_empty());
}

#[test]
fn test_emulation_stopped_resets_rom_info_and_reinits_overlay() {
    let dir = TempDir::new().unwrap();
    let (_core, mut shell) = shell(&dir);

    shell.handle_ui_message(UiMessage::GameLoaded(rom("Solar Wars")));
    shell.handle_ui_message(UiMessage::EmulationStopped);

    assert!(shell.view().rom_info.is_empty());
    assert!(shell.view().recent_games.visible);
    assert!(shell.view().recent_games.focused);
}

#[test]
fn test_handlers_apply_in_message_order() {
    let dir = TempDir::new().unwrap();
    let (_core, mut shell) = shell(&dir);

    // A stale GameLoaded followed by EmulationStopped must end stopped,
    // never the other way around.
    shell.handle_ui_message(UiMessage::GameLoaded(rom("First")));
    shell.handle_ui_message(UiMessage::EmulationStopped);
    shell.handle_ui_message(UiMessage::GameLoaded(rom("Second")));

    assert_eq!(shell.view().rom_info.name, "Second");
    assert!(!shell.view().recent_games.visible);
}

#[test]
fn test_core_ready_caches_frame_size() {
    let dir = TempDir::new().unwrap();
    let (core, mut shell) = shell(&dir);
    assert_eq!(shell.base_screen_size(), FrameInfo::default());

    let (tx, _rx) = mpsc::channel::<UiMessage>();
    let bridge = NotificationBridge::attach(
        Arc::clone(&core) as Arc<dyn EmuCore>,
        Arc::new(tx) as Arc<dyn UiPoster>,
    );

    shell.handle_ui_message(UiMessage::CoreReady {
        base_screen_size: FrameInfo {
            width: 256,
            height: 240,
        },
        bridge,
    });

    assert_eq!(
        shell.base_screen_size(),
        FrameInfo {
            width: 256,
            height: 240
        }
    );
}

#[test]
fn test_resolution_change_refreshes_cached_frame_size() {
    let dir = TempDir::new().unwrap();
    let (core, mut shell) = shell(&dir);
    shell.base_screen_size = FrameInfo {
        width: 256,
        height: 240,
    };

    core.set_base_screen_size(FrameInfo {
        width: 320,
        height: 224,
    });
    shell.handle_ui_message(UiMessage::ResolutionChanged);

    assert_eq!(
        shell.base_screen_size(),
        FrameInfo {
            width: 320,
            height: 224
        }
    );
}

#[test]
fn test_resolution_change_before_core_ready_only_refreshes_cache() {
    let dir = TempDir::new().unwrap();
    let (core, mut shell) = shell(&dir);
    shell.window_state.observe(WindowMode::Fullscreen);
    core.set_base_screen_size(FrameInfo {
        width: 320,
        height: 240,
    });

    // A startup load can emit ResolutionChanged while the frame cache is
    // still unseeded. No scale can be derived from a 0-width frame, so no
    // geometry must be applied; the cache just takes the new size.
    shell.handle_ui_message(UiMessage::ResolutionChanged);

    assert_eq!(shell.surface.explicit_size(), None);
    assert_eq!(
        shell.base_screen_size(),
        FrameInfo {
            width: 320,
            height: 240
        }
    );
}

#[test]
fn test_scale_shortcut_sizes_surface_when_not_normal() {
    let dir = TempDir::new().unwrap();
    let (_core, mut shell) = shell(&dir);
    shell.window_state.observe(WindowMode::Fullscreen);

    // Core reports 256x240; a 2x zoom shortcut gives the surface an
    // explicit 512x480 while the window stays fullscreen.
    shell.handle_ui_message(UiMessage::ExecuteShortcut(ShortcutRequest {
        shortcut: ShortcutId(1),
        param: 2,
    }));

    assert_eq!(
        shell.surface.explicit_size(),
        Some(LogicalSize::new(512.0, 480.0))
    );
}

#[test]
fn test_scale_in_normal_mode_clears_surface_override() {
    let dir = TempDir::new().unwrap();
    let (_core, mut shell) = shell(&dir);
    shell
        .surface
        .set_explicit_size(Some(LogicalSize::new(100.0, 100.0)));

    shell.set_scale(2.0);

    assert_eq!(shell.surface.explicit_size(), None);
}

#[test]
fn test_exit_shortcut_requests_exit() {
    let dir = TempDir::new().unwrap();
    let (_core, mut shell) = shell(&dir);

    shell.handle_ui_message(UiMessage::ExecuteShortcut(ShortcutRequest {
        shortcut: ShortcutId(2),
        param: 0,
    }));

    assert!(shell.exit_requested);
}

#[test]
fn test_unbound_shortcut_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let (_core, mut shell) = shell(&dir);

    shell.handle_ui_message(UiMessage::ExecuteShortcut(ShortcutRequest {
        shortcut: ShortcutId(999),
        param: 0,
    }));

    assert!(!shell.exit_requested);
}

#[test]
fn test_arguments_received_uses_the_startup_load_path() {
    let dir = TempDir::new().unwrap();
    let (core, mut shell) = shell(&dir);
    let rom_path = dir.path().join("late.bin");
    std::fs::write(&rom_path, b"rom").unwrap();

    shell.handle_ui_message(UiMessage::ArgumentsReceived(vec![
        "/missing".to_string(),
        rom_path.display().to_string(),
    ]));

    assert_eq!(core.loaded_files(), vec![rom_path]);
}

#[test]
fn test_messages_after_teardown_are_no_ops() {
    let dir = TempDir::new().unwrap();
    let (core, mut shell) = shell(&dir);

    shell.begin_teardown();
    assert!(!core.is_initialized());

    shell.handle_ui_message(UiMessage::GameLoaded(rom("Late")));
    assert!(shell.view().rom_info.is_empty());
    assert!(shell.view().recent_games.visible);
}

#[test]
fn test_teardown_is_idempotent_and_saves_config() {
    let dir = TempDir::new().unwrap();
    let (_core, mut shell) = shell(&dir);

    shell.begin_teardown();
    shell.begin_teardown();

    assert!(dir.path().join("emux.toml").exists());
}
