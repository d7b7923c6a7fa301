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

//! Content loading gateways
//!
//! Validates file paths arriving from drag-and-drop, the command line, and
//! single-instance activation, and forwards the first usable one to the
//! core's load service. Single-instance activations reuse the exact
//! command-line path.

use crate::core::{EmuCore, ShellError};
use std::path::{Path, PathBuf};

/// Handle a drop event carrying zero or more file paths.
///
/// Only the first path is considered. Returns `true` when a load was
/// forwarded, in which case the caller brings the window to the foreground.
/// A missing file produces exactly one user-visible error naming the path;
/// an empty drop has no effect.
pub fn handle_drop(core: &dyn EmuCore, paths: &[PathBuf]) -> bool {
    let Some(path) = paths.first() else {
        return false;
    };

    if path.exists() {
        load(core, path);
        true
    } else {
        let err = ShellError::FileNotFound(path.clone());
        core.display_message("Error", &err.to_string());
        false
    }
}

/// Load the first argument that names an existing file.
///
/// Short-circuits on the first match. Returns whether a load was forwarded.
pub fn load_first_existing(core: &dyn EmuCore, args: &[String]) -> bool {
    for arg in args {
        let path = Path::new(arg);
        if path.exists() {
            load(core, path);
            return true;
        }
    }
    false
}

fn load(core: &dyn EmuCore, path: &Path) {
    log::info!("loading {}", path.display());
    if let Err(e) = core.load_file(path) {
        log::error!("failed to load {}: {}", path.display(), e);
    }
}
