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

//! Frontend module
//!
//! The window shell: event bridge, geometry, window-state machine, shortcut
//! routing, key interception, and content loading, orchestrated by
//! [`Shell`] on the winit event loop.
//!
//! # Example
//!
//! ```no_run
//! use emux::core::NullCore;
//! use emux::frontend::bridge::ProxyPoster;
//! use emux::frontend::view::NullSurface;
//! use emux::frontend::{Shell, ShellOptions, UiMessage};
//! use std::sync::Arc;
//! use winit::event_loop::EventLoop;
//!
//! let event_loop = EventLoop::<UiMessage>::with_user_event().build().unwrap();
//! let poster = Arc::new(ProxyPoster::new(event_loop.create_proxy()));
//! let core = Arc::new(NullCore::new());
//! let mut shell = Shell::new(
//!     core,
//!     Box::new(NullSurface::new()),
//!     poster,
//!     ShellOptions::default(),
//! );
//! event_loop.run_app(&mut shell).unwrap();
//! ```

pub mod app;
pub mod bridge;
pub mod config;
pub mod geometry;
pub mod input;
pub mod loader;
pub mod shortcut;
pub mod view;
pub mod window_state;

#[cfg(test)]
mod tests;

pub use app::{Shell, ShellOptions};
pub use bridge::{NotificationBridge, ProxyPoster, UiMessage, UiPoster};
pub use config::ShellConfig;
pub use shortcut::{ShellAction, ShortcutRouter};
pub use window_state::{WindowMode, WindowStateTracker};
