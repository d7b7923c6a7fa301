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

//! Display geometry calculator
//!
//! Pure mapping from emulated frame size, aspect ratio, DPI scale, and
//! window mode to concrete dimensions. In Normal mode the window is sized
//! around the surface; in Maximized and Fullscreen modes the window stays
//! where the OS put it and the surface gets an explicit size instead.
//!
//! Invalid inputs (zero aspect ratio, non-finite scale) are core-reported
//! defects and propagate into the result unchanged; clamping them here
//! would hide the defect.

use crate::core::FrameInfo;
use crate::frontend::window_state::WindowMode;

/// Inputs to one geometry computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryInput {
    /// Requested emulated-pixel-to-screen-pixel scale, before DPI adjustment
    pub scale: f64,
    /// Current DPI scale of the window
    pub dpi_scale: f64,
    /// Emulated frame dimensions
    pub frame: FrameInfo,
    /// Display aspect ratio reported by the core
    pub aspect_ratio: f64,
    /// Current window mode
    pub mode: WindowMode,
    /// Height of the menu chrome, participating in client sizing
    pub menu_height: f64,
}

/// Dimension change produced by [`compute`].
///
/// Callers apply the command as a side effect; the resulting layout pass is
/// asynchronous and must not be assumed complete on return.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryCommand {
    /// Clear the surface's explicit size, resize the window client area to
    /// the given logical dimensions, and trigger a remeasure.
    ResizeClient {
        /// New client width
        width: f64,
        /// New client height, including menu chrome
        height: f64,
    },
    /// Give the surface an explicit logical size; the window itself keeps
    /// filling the maximized or fullscreen bounds.
    ResizeSurface {
        /// New surface width
        width: f64,
        /// New surface height
        height: f64,
    },
}

/// Compute the dimension change for a requested scale.
///
/// The scale is divided by the DPI scale first so all output is in
/// device-independent units.
///
/// # Example
///
/// ```
/// use emux::core::FrameInfo;
/// use emux::frontend::geometry::{compute, GeometryCommand, GeometryInput};
/// use emux::frontend::window_state::WindowMode;
///
/// let cmd = compute(&GeometryInput {
///     scale: 2.0,
///     dpi_scale: 1.0,
///     frame: FrameInfo { width: 256, height: 240 },
///     aspect_ratio: 4.0 / 3.0,
///     mode: WindowMode::Normal,
///     menu_height: 25.0,
/// });
/// assert_eq!(cmd, GeometryCommand::ResizeClient { width: 512.0, height: 409.0 });
/// ```
pub fn compute(input: &GeometryInput) -> GeometryCommand {
    let scale = input.scale / input.dpi_scale;
    let frame_width = f64::from(input.frame.width);

    match input.mode {
        WindowMode::Normal => GeometryCommand::ResizeClient {
            width: frame_width * scale,
            height: frame_width * scale / input.aspect_ratio + input.menu_height,
        },
        WindowMode::Maximized | WindowMode::Fullscreen => GeometryCommand::ResizeSurface {
            width: frame_width * scale,
            height: f64::from(input.frame.height) * scale,
        },
    }
}
