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

//! Native core boundary
//!
//! The emulation core is an opaque external service. This module defines the
//! fixed API the shell talks to it through: lifecycle, display metadata,
//! input state, emulation flags, and the asynchronous notification stream.
//!
//! Implementations must be thread safe: the shell calls into the core from
//! the UI thread and from background startup tasks, and the core itself
//! polls input state out-of-band from its own thread.

pub mod error;
pub mod notification;
pub mod null;

pub use error::{Result, ShellError};
pub use notification::{NotificationKind, ShortcutId, ShortcutRequest};
pub use null::NullCore;

use bitflags::bitflags;
use std::path::{Path, PathBuf};
use winit::keyboard::KeyCode;

/// Dimensions of the emulated output frame, in emulated pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInfo {
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
}

/// Metadata about the currently loaded content.
///
/// Replaced wholesale when content is loaded; reset to [`RomInfo::default`]
/// when emulation stops.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RomInfo {
    /// Display title of the content
    pub name: String,
    /// Path the content was loaded from, when known
    pub path: Option<PathBuf>,
}

impl RomInfo {
    /// True when no content is loaded.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.path.is_none()
    }
}

bitflags! {
    /// Process-wide emulation behavior toggles mirrored into the core.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EmulationFlags: u32 {
        /// The window is not the foreground window.
        const IN_BACKGROUND = 1 << 0;
        /// Keep polling input while the window is in the background.
        const ALLOW_BACKGROUND_INPUT = 1 << 1;
    }
}

/// Parameters for [`EmuCore::initialize`].
#[derive(Debug, Clone)]
pub struct CoreInitOptions {
    /// Folder the core keeps its data in (saves, firmware, ...)
    pub home_folder: PathBuf,
    /// Opaque handle of the host window
    pub window_handle: u64,
    /// Opaque handle of the render surface the core draws into
    pub surface_handle: u64,
    /// Disable audio output
    pub no_audio: bool,
    /// Disable video output
    pub no_video: bool,
    /// Disable input polling
    pub no_input: bool,
}

/// Subscriber handle returned by [`EmuCore::subscribe_notifications`].
pub type SubscriptionId = u64;

/// Callback invoked on the core's emitting thread for every notification.
///
/// The payload slice is only valid for the duration of the call; subscribers
/// must copy or decode it before returning and never retain the reference.
pub type NotificationSink = Box<dyn Fn(NotificationKind, &[u8]) + Send + Sync>;

/// The native emulation core, as seen by the window shell.
///
/// Everything behind this trait is internally synchronized; methods take
/// `&self` and may be called from any thread. [`initialize`] may block for
/// an arbitrary time and is therefore always called from a background task.
///
/// [`initialize`]: EmuCore::initialize
pub trait EmuCore: Send + Sync {
    /// Bring the core up. Blocking; no notifications are emitted before
    /// this returns successfully.
    fn initialize(&self, options: &CoreInitOptions) -> Result<()>;

    /// Tear the core down and release its resources.
    fn release(&self);

    /// Emulated output dimensions of the current content.
    fn base_screen_size(&self) -> FrameInfo;

    /// Display aspect ratio reported by the core.
    ///
    /// Passed through as-is: a zero or non-finite value is a core defect
    /// and is not corrected here.
    fn aspect_ratio(&self) -> f64;

    /// Metadata of the currently loaded content.
    fn rom_info(&self) -> RomInfo;

    /// Ask the core to load a content file.
    fn load_file(&self, path: &Path) -> Result<()>;

    /// Show a user-visible message through the core's OSD.
    fn display_message(&self, title: &str, text: &str);

    /// Record a key transition in the core's input-state table.
    ///
    /// The core polls this table from its own thread; the shell only ever
    /// writes it from the UI thread.
    fn set_key_state(&self, key: KeyCode, pressed: bool);

    /// Release every key in the input-state table.
    fn reset_key_state(&self);

    /// Set or clear one emulation flag.
    fn set_emulation_flag(&self, flag: EmulationFlags, value: bool);

    /// Register a notification subscriber. The sink is invoked on the
    /// core's emitting thread for every event, in emission order.
    fn subscribe_notifications(&self, sink: NotificationSink) -> SubscriptionId;

    /// Remove a previously registered subscriber. No further invocations
    /// of its sink happen after this returns.
    fn unsubscribe_notifications(&self, id: SubscriptionId);
}
