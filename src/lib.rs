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

//! emux: window shell for an emulator front-end
//!
//! This crate is the top-level window controller of an emulator front-end.
//! It does not emulate anything and it does not draw pixels; it owns the
//! window, bridges asynchronous notifications from a native emulation core
//! onto the UI event loop, keeps window geometry in sync with the emulated
//! resolution, and routes raw key input and shortcut requests.
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - [`core`]: the boundary to the native emulation core, treated as an
//!   opaque service behind the [`core::EmuCore`] trait
//! - [`frontend`]: the window shell itself (event bridge, geometry,
//!   window-state machine, shortcut routing, input interception)
//!
//! # Threading
//!
//! The native core emits notifications from its own thread(s). The only
//! component allowed to cross that boundary is the
//! [`frontend::NotificationBridge`], which copies each payload and posts an
//! owned message through a [`frontend::UiPoster`] (a winit event-loop proxy
//! in the binary). Everything UI-visible is mutated exclusively from the
//! event-loop thread.
//!
//! # Error Handling
//!
//! Fallible operations return [`Result<T>`], an alias for
//! `Result<T, ShellError>`.

pub mod core;
pub mod frontend;

// Re-export commonly used types
pub use core::error::{Result, ShellError};
