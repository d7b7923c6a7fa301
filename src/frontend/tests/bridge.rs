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

//! Unit tests for the notification bridge

use crate::core::{EmuCore, NotificationKind, NullCore, RomInfo, ShortcutId};
use crate::frontend::bridge::{NotificationBridge, UiMessage, UiPoster};
use std::sync::mpsc;
use std::sync::Arc;

fn attach() -> (Arc<NullCore>, NotificationBridge, mpsc::Receiver<UiMessage>) {
    let core = Arc::new(NullCore::new());
    let (tx, rx) = mpsc::channel();
    let bridge = NotificationBridge::attach(
        Arc::clone(&core) as Arc<dyn EmuCore>,
        Arc::new(tx) as Arc<dyn UiPoster>,
    );
    (core, bridge, rx)
}

#[test]
fn test_events_arrive_in_emission_order() {
    let (core, _bridge, rx) = attach();

    core.emit(NotificationKind::GameLoaded, &[]);
    core.emit(NotificationKind::GameResumed, &[]);
    core.emit(NotificationKind::EmulationStopped, &[]);
    core.emit(NotificationKind::GameLoaded, &[]);

    let names: Vec<_> = rx.try_iter().map(|msg| msg.name()).collect();
    assert_eq!(
        names,
        ["GameLoaded", "GameResumed", "EmulationStopped", "GameLoaded"]
    );
}

#[test]
fn test_game_loaded_carries_metadata_fetched_before_post() {
    let (core, _bridge, rx) = attach();
    core.set_rom_info(RomInfo {
        name: "Solar Wars".to_string(),
        path: None,
    });

    core.emit(NotificationKind::GameLoaded, &[]);

    match rx.try_recv().unwrap() {
        UiMessage::GameLoaded(rom_info) => assert_eq!(rom_info.name, "Solar Wars"),
        other => panic!("unexpected message: {}", other.name()),
    }
}

#[test]
fn test_shortcut_payload_is_decoded_on_the_emitting_side() {
    let (core, _bridge, rx) = attach();

    // The payload buffer does not outlive the emit call; the decoded copy
    // must.
    {
        let payload = [9u8, 0, 0, 0, 3, 0, 0, 0];
        core.emit(NotificationKind::ExecuteShortcut, &payload);
    }

    match rx.try_recv().unwrap() {
        UiMessage::ExecuteShortcut(request) => {
            assert_eq!(request.shortcut, ShortcutId(9));
            assert_eq!(request.param, 3);
        }
        other => panic!("unexpected message: {}", other.name()),
    }
}

#[test]
fn test_malformed_shortcut_payload_is_dropped_without_panic() {
    let (core, _bridge, rx) = attach();

    core.emit(NotificationKind::ExecuteShortcut, &[1, 2]);
    core.emit(NotificationKind::GameResumed, &[]);

    // Only the well-formed event made it through.
    let names: Vec<_> = rx.try_iter().map(|msg| msg.name()).collect();
    assert_eq!(names, ["GameResumed"]);
}

#[test]
fn test_drop_unsubscribes() {
    let (core, bridge, rx) = attach();
    assert_eq!(core.subscriber_count(), 1);

    drop(bridge);
    assert_eq!(core.subscriber_count(), 0);

    core.emit(NotificationKind::GameLoaded, &[]);
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_dead_ui_loop_drops_messages_silently() {
    let (core, _bridge, rx) = attach();
    drop(rx);

    // Must not panic even though every post now fails.
    core.emit(NotificationKind::GameLoaded, &[]);
    core.emit(NotificationKind::ResolutionChanged, &[]);
}
