// This file is part of Survivors
// Copyright (C) 2025 Survivors contributors
//
// Survivors is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Survivors is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Survivors.  If not, see <https://www.gnu.org/licenses/>.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use argh::FromArgs;
use log::error;

use crate::configfile::{UserConfig, load_user_config, save_user_config};
use crate::fs::get_savefile_path;
use crate::states::{LaunchScript, Session};

mod configfile;
mod fs;
mod game;
mod states;

#[derive(FromArgs)]
#[argh(description = "Survivors game session runner")]
struct Arguments {
    #[argh(option, description = "settings file (default: user preferences)")]
    config: Option<String>,

    #[argh(option, description = "launch script to play")]
    launch: Option<String>,

    #[argh(switch, description = "write the effective settings back to the settings file")]
    save_config: bool,

    #[argh(switch, short = 'v', description = "verbose logging")]
    verbose: bool,
}

fn run(args: &Arguments) -> Result<()> {
    let config_path = match &args.config {
        Some(path) => PathBuf::from(path),
        None => get_savefile_path(Path::new("settings.toml")),
    };

    let config: UserConfig = load_user_config(&config_path);
    if args.save_config {
        save_user_config(&config, &config_path)?;
    }

    let script = match &args.launch {
        Some(path) => LaunchScript::load(Path::new(path))?,
        None => LaunchScript::demo()?,
    };

    let mut session = Session::new(&config);
    session.install_controller()?;

    let report = script.play(&mut session);

    log::info!(
        "Session ended after {} ticks in state {}: {:.2}s real time, {:.2}s game time{}{}",
        report.ticks,
        report
            .mode
            .map(|m| m.to_string())
            .unwrap_or_else(|| "none".to_owned()),
        report.real_time,
        report.game_time,
        if report.paused_screen {
            ", pause screen open"
        } else {
            ""
        },
        if report.results_shown {
            ", results shown"
        } else {
            ""
        }
    );
    log::debug!(
        "Final stats: {:?}, time scale {}",
        session.stats_display(),
        session.clock().scale()
    );

    Ok(())
}

fn main() -> ExitCode {
    let args: Arguments = argh::from_env();

    env_logger::builder()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:?}", err);
            ExitCode::FAILURE
        }
    }
}
