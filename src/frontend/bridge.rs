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

//! Notification bridge
//!
//! The only component that crosses the thread boundary between the native
//! core and the UI event loop. For every notification it decodes or copies
//! the payload on the emitting thread, while the payload memory is still
//! valid, and posts an owned [`UiMessage`] through a [`UiPoster`]. Posting
//! is fire-and-forget; the emitting thread is never blocked on UI work.
//!
//! Messages arrive at the UI thread in emission order and are never
//! coalesced: every `GameLoaded` and `EmulationStopped` is observed because
//! each one toggles visible UI state.

use crate::core::{EmuCore, FrameInfo, NotificationKind, RomInfo, ShortcutRequest, SubscriptionId};
use std::sync::{Arc, Mutex};
use winit::event_loop::EventLoopProxy;

/// Owned message applied on the UI thread.
pub enum UiMessage {
    /// Apply the configured visual theme (deferred startup task).
    ApplyTheme,
    /// Core initialization finished; the bridge travels with the message so
    /// its subscription is owned by the UI thread from here on.
    CoreReady {
        /// Frame size fetched right after initialization
        base_screen_size: FrameInfo,
        /// Live subscription to the core's notification stream
        bridge: NotificationBridge,
    },
    /// Content was loaded; metadata was fetched before posting.
    GameLoaded(RomInfo),
    /// Emulation resumed.
    GameResumed,
    /// Emulation stopped.
    EmulationStopped,
    /// The emulated resolution changed.
    ResolutionChanged,
    /// Execute a shortcut decoded from the notification payload.
    ExecuteShortcut(ShortcutRequest),
    /// A single-instance activation delivered another argument list.
    ArgumentsReceived(Vec<String>),
}

impl UiMessage {
    /// Message name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            UiMessage::ApplyTheme => "ApplyTheme",
            UiMessage::CoreReady { .. } => "CoreReady",
            UiMessage::GameLoaded(_) => "GameLoaded",
            UiMessage::GameResumed => "GameResumed",
            UiMessage::EmulationStopped => "EmulationStopped",
            UiMessage::ResolutionChanged => "ResolutionChanged",
            UiMessage::ExecuteShortcut(_) => "ExecuteShortcut",
            UiMessage::ArgumentsReceived(_) => "ArgumentsReceived",
        }
    }
}

/// FIFO handoff onto the UI thread.
///
/// Implementations must preserve submission order for posts originating
/// from the same thread. `post` returns `false` once the UI loop is gone;
/// the message is dropped, which is the required post-teardown behavior.
pub trait UiPoster: Send + Sync {
    /// Submit a message for UI-thread processing.
    fn post(&self, msg: UiMessage) -> bool;
}

/// [`UiPoster`] over the winit event-loop proxy.
///
/// The proxy sits behind a mutex so one poster can be shared between the
/// startup tasks and the bridge's emitting-thread sink.
pub struct ProxyPoster {
    proxy: Mutex<EventLoopProxy<UiMessage>>,
}

impl ProxyPoster {
    /// Wrap a proxy created from the event loop before it runs.
    pub fn new(proxy: EventLoopProxy<UiMessage>) -> Self {
        Self {
            proxy: Mutex::new(proxy),
        }
    }
}

impl UiPoster for ProxyPoster {
    fn post(&self, msg: UiMessage) -> bool {
        self.proxy
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .send_event(msg)
            .is_ok()
    }
}

impl UiPoster for std::sync::mpsc::Sender<UiMessage> {
    fn post(&self, msg: UiMessage) -> bool {
        self.send(msg).is_ok()
    }
}

/// Live subscription translating core notifications into [`UiMessage`]s.
///
/// Attached once per window after core initialization; dropping it
/// unsubscribes, after which no further messages are posted.
pub struct NotificationBridge {
    core: Arc<dyn EmuCore>,
    subscription: SubscriptionId,
}

impl NotificationBridge {
    /// Subscribe to the core's notification stream.
    pub fn attach(core: Arc<dyn EmuCore>, poster: Arc<dyn UiPoster>) -> Self {
        let sink_core = Arc::clone(&core);
        let subscription = core.subscribe_notifications(Box::new(move |kind, payload| {
            Self::forward(&sink_core, &*poster, kind, payload);
        }));

        log::debug!("notification bridge attached (subscription {subscription})");
        Self { core, subscription }
    }

    /// Translate one notification, on the emitting thread.
    ///
    /// Anything needing the payload or a core round-trip happens here,
    /// before the post, because the payload slice dies when this returns.
    fn forward(core: &Arc<dyn EmuCore>, poster: &dyn UiPoster, kind: NotificationKind, payload: &[u8]) {
        let msg = match kind {
            NotificationKind::GameLoaded => UiMessage::GameLoaded(core.rom_info()),
            NotificationKind::GameResumed => UiMessage::GameResumed,
            NotificationKind::EmulationStopped => UiMessage::EmulationStopped,
            NotificationKind::ResolutionChanged => UiMessage::ResolutionChanged,
            NotificationKind::ExecuteShortcut => match ShortcutRequest::decode(payload) {
                Ok(request) => UiMessage::ExecuteShortcut(request),
                Err(e) => {
                    log::warn!("dropping shortcut notification: {}", e);
                    return;
                }
            },
        };

        if !poster.post(msg) {
            log::trace!("UI loop gone; dropped {:?} notification", kind);
        }
    }
}

impl Drop for NotificationBridge {
    fn drop(&mut self) {
        self.core.unsubscribe_notifications(self.subscription);
        log::debug!(
            "notification bridge detached (subscription {})",
            self.subscription
        );
    }
}
