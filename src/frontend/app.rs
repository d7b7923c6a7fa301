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

//! Window controller
//!
//! [`Shell`] owns the window, the core connection, and every shell
//! component, and drives them from the winit event loop. It is the sole
//! mutator of UI-visible state; everything arriving from other threads
//! comes in as a [`UiMessage`] through `user_event`.

use crate::core::{CoreInitOptions, EmuCore, EmulationFlags, FrameInfo, RomInfo};
use crate::frontend::bridge::{NotificationBridge, UiMessage, UiPoster};
use crate::frontend::config::ShellConfig;
use crate::frontend::geometry::{self, GeometryCommand, GeometryInput};
use crate::frontend::input::KeyInterceptor;
use crate::frontend::loader;
use crate::frontend::shortcut::{ShellAction, ShortcutRouter};
use crate::frontend::view::{MainView, RenderSurface};
use crate::frontend::window_state::{WindowMode, WindowStateTracker};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{Fullscreen, Window, WindowId};

/// Delay before the configured theme is applied, so the first frame shows
/// with the platform default instead of flashing mid-switch.
const THEME_APPLY_DELAY: Duration = Duration::from_millis(15);

/// Startup parameters for [`Shell::new`].
#[derive(Debug, Clone)]
pub struct ShellOptions {
    /// Configuration file location
    pub config_path: PathBuf,
    /// Folder handed to the core for its own data
    pub home_folder: PathBuf,
    /// Command-line arguments; the first existing file is loaded once the
    /// core is up
    pub startup_args: Vec<String>,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("emux.toml"),
            home_folder: PathBuf::from("."),
            startup_args: Vec::new(),
        }
    }
}

/// Main window controller.
///
/// Orchestrates the notification bridge, the window-state machine, the
/// geometry calculator, shortcut routing, and key interception, and owns
/// the lifecycle of the native core connection.
pub struct Shell {
    window: Option<Arc<Window>>,
    pub(crate) surface: Box<dyn RenderSurface>,
    core: Arc<dyn EmuCore>,
    poster: Arc<dyn UiPoster>,
    /// Live notification subscription; present once the core is up.
    bridge: Option<NotificationBridge>,
    pub(crate) config: ShellConfig,
    config_path: PathBuf,
    home_folder: PathBuf,
    startup_args: Vec<String>,
    pub(crate) view: MainView,
    /// Cached copy of the core's frame size; refreshed on init and on
    /// every resolution change.
    pub(crate) base_screen_size: FrameInfo,
    pub(crate) window_state: WindowStateTracker,
    shortcuts: ShortcutRouter,
    interceptor: KeyInterceptor,
    /// Set once teardown began; late messages become no-ops.
    pub(crate) closing: bool,
    pub(crate) exit_requested: bool,
}

impl Shell {
    /// Create a shell around a core, a render surface, and a UI poster.
    ///
    /// Configuration is loaded here; the core is not touched until the
    /// window opens.
    pub fn new(
        core: Arc<dyn EmuCore>,
        surface: Box<dyn RenderSurface>,
        poster: Arc<dyn UiPoster>,
        options: ShellOptions,
    ) -> Self {
        let config = ShellConfig::load(&options.config_path);
        let shortcuts = ShortcutRouter::new(config.shortcut_bindings());
        let interceptor = KeyInterceptor::new(Arc::clone(&core));

        Self {
            window: None,
            surface,
            core,
            poster,
            bridge: None,
            config,
            config_path: options.config_path,
            home_folder: options.home_folder,
            startup_args: options.startup_args,
            view: MainView::new(),
            base_screen_size: FrameInfo::default(),
            window_state: WindowStateTracker::new(),
            shortcuts,
            interceptor,
            closing: false,
            exit_requested: false,
        }
    }

    /// Current view-model state.
    pub fn view(&self) -> &MainView {
        &self.view
    }

    /// Cached emulated frame size.
    pub fn base_screen_size(&self) -> FrameInfo {
        self.base_screen_size
    }

    fn dpi_scale(&self) -> f64 {
        self.window.as_ref().map_or(1.0, |w| w.scale_factor())
    }

    fn client_width(&self) -> f64 {
        match &self.window {
            Some(window) => {
                let size: LogicalSize<f64> = window.inner_size().to_logical(window.scale_factor());
                size.width
            }
            None => f64::from(self.base_screen_size.width),
        }
    }

    /// Apply a display scale.
    ///
    /// The frame size is fetched from the core so a scale applied during a
    /// resolution change never uses the outgoing resolution. In Normal mode
    /// the window is resized around the surface; otherwise the surface gets
    /// an explicit size inside the fixed window.
    pub fn set_scale(&mut self, scale: f64) {
        let input = GeometryInput {
            scale,
            dpi_scale: self.dpi_scale(),
            frame: self.core.base_screen_size(),
            aspect_ratio: self.core.aspect_ratio(),
            mode: self.window_state.mode(),
            menu_height: self.view.menu.height,
        };

        match geometry::compute(&input) {
            GeometryCommand::ResizeClient { width, height } => {
                self.surface.set_explicit_size(None);
                if let Some(window) = &self.window {
                    let _ = window.request_inner_size(LogicalSize::new(width, height));
                }
                self.surface.invalidate_layout();
            }
            GeometryCommand::ResizeSurface { width, height } => {
                self.surface
                    .set_explicit_size(Some(LogicalSize::new(width, height)));
            }
        }
    }

    /// Request the Fullscreen <-> Normal toggle.
    ///
    /// Only the request is issued here; the state machine reacts when the
    /// OS reports the change back.
    pub fn toggle_fullscreen(&mut self) {
        let Some(window) = &self.window else {
            return;
        };

        match self.window_state.toggle_fullscreen_target() {
            WindowMode::Fullscreen => window.set_fullscreen(Some(Fullscreen::Borderless(None))),
            _ => window.set_fullscreen(None),
        }
    }

    fn current_window_mode(&self) -> WindowMode {
        match &self.window {
            Some(window) if window.fullscreen().is_some() => WindowMode::Fullscreen,
            Some(window) if window.is_maximized() => WindowMode::Maximized,
            _ => WindowMode::Normal,
        }
    }

    /// Fold the OS-reported mode into the state machine and apply the
    /// transition effects. State change and geometry update happen within
    /// one event-loop turn, so no partial update is observable.
    fn sync_window_mode(&mut self) {
        let mode = self.current_window_mode();
        if let Some(effects) = self.window_state.observe(mode) {
            log::debug!("window mode changed to {:?}", mode);
            self.view.menu.visible = effects.menu_visible;
            if effects.release_surface_size {
                self.surface.set_explicit_size(None);
                self.surface.invalidate_layout();
            }
        }
    }

    /// Pull keyboard focus away from the game-selection overlay so Enter
    /// cannot activate a now-hidden button, and focus the OS window.
    fn claim_focus(&mut self) {
        self.view.recent_games.focused = false;
        if let Some(window) = &self.window {
            window.focus_window();
        }
    }

    /// Apply one marshaled message. No-op after teardown began: the native
    /// thread cannot be stopped mid-emission, so late deliveries are legal.
    pub fn handle_ui_message(&mut self, msg: UiMessage) {
        if self.closing {
            log::trace!("ignoring {} after teardown", msg.name());
            return;
        }

        match msg {
            UiMessage::ApplyTheme => {
                if let Some(window) = &self.window {
                    window.set_theme(Some(self.config.preferences.theme.into()));
                }
            }
            UiMessage::CoreReady {
                base_screen_size,
                bridge,
            } => {
                log::info!(
                    "core ready, base screen size {}x{}",
                    base_screen_size.width,
                    base_screen_size.height
                );
                self.base_screen_size = base_screen_size;
                self.bridge = Some(bridge);
            }
            UiMessage::GameLoaded(rom_info) => {
                self.claim_focus();
                self.view.recent_games.hide();
                self.view.rom_info = rom_info;
            }
            UiMessage::GameResumed => {
                self.claim_focus();
                self.view.recent_games.hide();
            }
            UiMessage::EmulationStopped => {
                self.view.rom_info = RomInfo::default();
                self.view.recent_games.reinit();
            }
            UiMessage::ResolutionChanged => {
                // Derive the scale the user effectively had from the current
                // client size against the outgoing frame size, re-apply it,
                // then refresh the cache to the new frame size. Until
                // CoreReady seeds the cache there is no outgoing frame size
                // to derive from; only the refresh happens.
                if self.base_screen_size.width != 0 {
                    let scale = self.client_width() * self.dpi_scale()
                        / f64::from(self.base_screen_size.width);
                    self.set_scale(scale);
                }
                self.base_screen_size = self.core.base_screen_size();
            }
            UiMessage::ExecuteShortcut(request) => {
                if let Some(action) = self.shortcuts.resolve(request.shortcut) {
                    self.handle_action(action, request.param);
                }
            }
            UiMessage::ArgumentsReceived(args) => {
                loader::load_first_existing(&*self.core, &args);
            }
        }
    }

    fn handle_action(&mut self, action: ShellAction, param: u32) {
        match action {
            ShellAction::ToggleFullscreen => self.toggle_fullscreen(),
            ShellAction::SetScale => self.set_scale(f64::from(param)),
            ShellAction::Exit => {
                log::info!("exit requested via shortcut");
                self.exit_requested = true;
            }
        }
    }

    /// Persist state, unsubscribe, and release the core. Idempotent.
    pub(crate) fn begin_teardown(&mut self) {
        if self.closing {
            return;
        }
        self.closing = true;

        if let Some(window) = &self.window {
            self.config.window.capture(window);
        }
        if let Err(e) = self.config.save(&self.config_path) {
            log::error!("failed to save config: {}", e);
        }

        // Unsubscribe before releasing so no sink runs against a dead core.
        self.bridge = None;
        self.core.release();
    }
}

impl ApplicationHandler<UiMessage> for Shell {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = self.config.window.window_attributes("emux");
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .expect("Failed to create window"),
        );
        self.window = Some(Arc::clone(&window));
        self.sync_window_mode();

        // Deferred theme pass, off-thread so the first frame is not delayed.
        let poster = Arc::clone(&self.poster);
        thread::spawn(move || {
            thread::sleep(THEME_APPLY_DELAY);
            poster.post(UiMessage::ApplyTheme);
        });

        // Core initialization can block for an arbitrary time. It runs off
        // the UI thread; the bridge only subscribes once it succeeded, so no
        // notification can exist before the core is functional.
        let core = Arc::clone(&self.core);
        let poster = Arc::clone(&self.poster);
        let config = self.config.clone();
        let startup_args = std::mem::take(&mut self.startup_args);
        let options = CoreInitOptions {
            home_folder: self.home_folder.clone(),
            window_handle: u64::from(window.id()),
            surface_handle: self.surface.native_handle(),
            no_audio: false,
            no_video: false,
            no_input: false,
        };

        thread::spawn(move || {
            if let Err(e) = core.initialize(&options) {
                log::error!("core initialization failed: {}", e);
                return;
            }

            let base_screen_size = core.base_screen_size();
            let bridge = NotificationBridge::attach(Arc::clone(&core), Arc::clone(&poster));

            config.apply(&*core);
            loader::load_first_existing(&*core, &startup_args);

            poster.post(UiMessage::CoreReady {
                base_screen_size,
                bridge,
            });
        });

        log::info!("window opened");
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.begin_teardown();
                event_loop.exit();
                return;
            }
            WindowEvent::Focused(focused) => {
                // Mirror focus into the core's background flag and drop any
                // keys still latched from before the focus change.
                self.core
                    .set_emulation_flag(EmulationFlags::IN_BACKGROUND, !focused);
                self.core.reset_key_state();
            }
            WindowEvent::Resized(_) => self.sync_window_mode(),
            WindowEvent::KeyboardInput { event, .. } => {
                // One forward per physical transition; repeats are not
                // separate transitions.
                if !event.repeat {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        let suppressed = match event.state {
                            ElementState::Pressed => self.interceptor.on_key_down(key),
                            ElementState::Released => self.interceptor.on_key_up(key),
                        };
                        if suppressed {
                            return;
                        }
                    }
                }
            }
            WindowEvent::DroppedFile(path) => {
                if loader::handle_drop(&*self.core, &[path]) {
                    if let Some(window) = &self.window {
                        window.focus_window();
                    }
                }
            }
            _ => {}
        }

        if self.exit_requested {
            self.begin_teardown();
            event_loop.exit();
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, msg: UiMessage) {
        self.handle_ui_message(msg);

        if self.exit_requested {
            self.begin_teardown();
            event_loop.exit();
        }
    }
}
