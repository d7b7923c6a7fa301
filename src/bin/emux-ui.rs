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

//! emux UI entry point
//!
//! Opens the shell window around a core and runs the winit event loop.
//! Without a native core linked in, the headless [`NullCore`] stands in so
//! the shell itself stays exercisable.

use clap::Parser;
use emux::core::NullCore;
use emux::frontend::bridge::ProxyPoster;
use emux::frontend::view::NullSurface;
use emux::frontend::{Shell, ShellOptions, UiMessage};
use std::path::PathBuf;
use std::sync::Arc;
use winit::event_loop::EventLoop;

/// Emulator front-end window shell
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Content files; the first one that exists is loaded at startup
    paths: Vec<String>,

    /// Configuration file
    #[arg(long, default_value = "emux.toml")]
    config: PathBuf,

    /// Folder the core keeps its data in
    #[arg(long, default_value = ".")]
    home: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    log::info!("Starting emux UI...");

    let event_loop = EventLoop::<UiMessage>::with_user_event().build()?;
    let poster = Arc::new(ProxyPoster::new(event_loop.create_proxy()));

    let core = Arc::new(NullCore::new());
    let mut shell = Shell::new(
        core,
        Box::new(NullSurface::new()),
        poster,
        ShellOptions {
            config_path: args.config,
            home_folder: args.home,
            startup_args: args.paths,
        },
    );

    log::info!("Running event loop...");
    event_loop.run_app(&mut shell)?;

    Ok(())
}
