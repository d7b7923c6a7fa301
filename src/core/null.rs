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

//! Headless stand-in for the native core
//!
//! [`NullCore`] implements the full [`EmuCore`] surface without emulating
//! anything. It records every call so the shell can run without a native
//! core linked in, and it doubles as the test double for the bridge, the
//! loader, and the key interceptor. [`NullCore::emit`] fans a notification
//! out to subscribers on the calling thread, mimicking delivery from the
//! core's own emulation thread.

use super::error::{Result, ShellError};
use super::notification::NotificationKind;
use super::{
    CoreInitOptions, EmuCore, EmulationFlags, FrameInfo, NotificationSink, RomInfo, SubscriptionId,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};
use winit::keyboard::KeyCode;

#[derive(Default)]
struct CoreState {
    initialized: bool,
    base_screen_size: FrameInfo,
    aspect_ratio: f64,
    rom_info: RomInfo,
    keys: HashMap<KeyCode, bool>,
    flags: EmulationFlags,
    loaded: Vec<PathBuf>,
    messages: Vec<(String, String)>,
    load_error: Option<String>,
}

/// Recording core implementation with no emulation behind it.
pub struct NullCore {
    state: Mutex<CoreState>,
    sinks: Mutex<HashMap<SubscriptionId, NotificationSink>>,
    next_subscription: AtomicU64,
}

impl NullCore {
    /// Create a core reporting a 256x240 frame with a 4:3 aspect ratio.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(CoreState {
                base_screen_size: FrameInfo {
                    width: 256,
                    height: 240,
                },
                aspect_ratio: 4.0 / 3.0,
                ..CoreState::default()
            }),
            sinks: Mutex::new(HashMap::new()),
            next_subscription: AtomicU64::new(1),
        }
    }

    // Lock poisoning only happens after a panic elsewhere; keep going with
    // whatever state is there rather than cascading the panic.
    fn state(&self) -> MutexGuard<'_, CoreState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Deliver a notification to every subscriber, on the calling thread.
    pub fn emit(&self, kind: NotificationKind, payload: &[u8]) {
        let sinks = self.sinks.lock().unwrap_or_else(|e| e.into_inner());
        for sink in sinks.values() {
            sink(kind, payload);
        }
    }

    /// Override the reported frame size.
    pub fn set_base_screen_size(&self, size: FrameInfo) {
        self.state().base_screen_size = size;
    }

    /// Override the reported aspect ratio.
    pub fn set_aspect_ratio(&self, aspect_ratio: f64) {
        self.state().aspect_ratio = aspect_ratio;
    }

    /// Override the reported content metadata.
    pub fn set_rom_info(&self, rom_info: RomInfo) {
        self.state().rom_info = rom_info;
    }

    /// Make subsequent load requests fail with the given reason.
    pub fn set_load_error(&self, reason: &str) {
        self.state().load_error = Some(reason.to_string());
    }

    /// Whether [`EmuCore::initialize`] has completed.
    pub fn is_initialized(&self) -> bool {
        self.state().initialized
    }

    /// Every path forwarded through [`EmuCore::load_file`], in order.
    pub fn loaded_files(&self) -> Vec<PathBuf> {
        self.state().loaded.clone()
    }

    /// Every (title, text) pair shown through [`EmuCore::display_message`].
    pub fn messages(&self) -> Vec<(String, String)> {
        self.state().messages.clone()
    }

    /// Current pressed state of one key.
    pub fn key_state(&self, key: KeyCode) -> bool {
        self.state().keys.get(&key).copied().unwrap_or(false)
    }

    /// Current emulation flags.
    pub fn flags(&self) -> EmulationFlags {
        self.state().flags
    }

    /// Number of live notification subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sinks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl Default for NullCore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmuCore for NullCore {
    fn initialize(&self, options: &CoreInitOptions) -> Result<()> {
        log::info!(
            "null core initialized (home: {}, window: {:#x}, surface: {:#x})",
            options.home_folder.display(),
            options.window_handle,
            options.surface_handle
        );
        self.state().initialized = true;
        Ok(())
    }

    fn release(&self) {
        log::info!("null core released");
        let mut state = self.state();
        state.initialized = false;
        state.keys.clear();
    }

    fn base_screen_size(&self) -> FrameInfo {
        self.state().base_screen_size
    }

    fn aspect_ratio(&self) -> f64 {
        self.state().aspect_ratio
    }

    fn rom_info(&self) -> RomInfo {
        self.state().rom_info.clone()
    }

    fn load_file(&self, path: &Path) -> Result<()> {
        let mut state = self.state();
        if let Some(reason) = &state.load_error {
            return Err(ShellError::LoadFailed(reason.clone()));
        }
        log::info!("null core: load {}", path.display());
        state.loaded.push(path.to_path_buf());
        Ok(())
    }

    fn display_message(&self, title: &str, text: &str) {
        log::info!("null core message [{title}]: {text}");
        self.state()
            .messages
            .push((title.to_string(), text.to_string()));
    }

    fn set_key_state(&self, key: KeyCode, pressed: bool) {
        self.state().keys.insert(key, pressed);
    }

    fn reset_key_state(&self) {
        self.state().keys.clear();
    }

    fn set_emulation_flag(&self, flag: EmulationFlags, value: bool) {
        self.state().flags.set(flag, value);
    }

    fn subscribe_notifications(&self, sink: NotificationSink) -> SubscriptionId {
        let id = self.next_subscription.fetch_add(1, Ordering::Relaxed);
        self.sinks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id, sink);
        id
    }

    fn unsubscribe_notifications(&self, id: SubscriptionId) {
        self.sinks
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&id);
    }
}
