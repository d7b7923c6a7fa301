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

//! Error types for the window shell
//!
//! All recovery in this crate is "drop and report" or "surface to the user";
//! nothing retries automatically and nothing is swallowed without a trace.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the window shell and the core boundary.
#[derive(Debug, Error)]
pub enum ShellError {
    /// A dropped or command-line path does not exist on disk.
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A notification payload did not match its documented layout.
    #[error("malformed {kind} payload ({len} bytes)")]
    MalformedPayload {
        /// Notification kind the payload arrived with.
        kind: &'static str,
        /// Length of the rejected payload.
        len: usize,
    },

    /// The native core failed to initialize. Fatal to the window's
    /// functional startup; the UI must not pretend the core is up.
    #[error("core initialization failed: {0}")]
    CoreInit(String),

    /// The core rejected a load request.
    #[error("load failed: {0}")]
    LoadFailed(String),
}

/// Result type alias for shell operations.
pub type Result<T> = std::result::Result<T, ShellError>;
