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

use std::{fs::read_to_string, path::Path};

use anyhow::{Result, anyhow};
use serde::Deserialize;

use crate::{
    game::{
        CharacterInfo, Key, PlayerStats,
        hud::{Icon, Panel, ResultsView},
    },
    states::{GameMode, Session},
};

/// Script used when no launch file is given
const DEMO_SCRIPT: &str = r#"
ticks = 240
timestep = 0.016666668

[stats]
health = 120.0
recovery = 0.5
magnet = 40.0

[[press]]
key = "escape"
from = 60
to = 64

[[press]]
key = "escape"
from = 90
to = 92

[gameover]
tick = 180

[results]
character = { name = "Antonio", icon = "antonio" }
level = 12
weapons = ["whip", "garlic", "", "", "", ""]
passives = ["spinach", "", "", "", "", ""]
"#;

fn default_timestep() -> f32 {
    1.0 / 60.0
}

/// A key held down during ticks `from..to`
#[derive(Deserialize, Clone, Debug)]
pub struct KeyPress {
    pub key: Key,
    pub from: u32,
    pub to: u32,
}

/// A raw state change at the given tick
#[derive(Deserialize, Clone, Debug)]
pub struct StateChange {
    pub tick: u32,
    pub mode: String,
}

#[derive(Deserialize, Clone, Copy, Debug)]
#[serde(rename_all = "lowercase")]
pub enum RequestAction {
    Pause,
    Resume,
}

/// A pause or resume request made at the given tick (e.g. from a menu button)
#[derive(Deserialize, Clone, Debug)]
pub struct Request {
    pub tick: u32,
    pub action: RequestAction,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GameOverConfig {
    pub tick: u32,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ResultsConfig {
    pub character: CharacterInfo,
    pub level: u32,
    #[serde(default)]
    pub weapons: Vec<String>,
    #[serde(default)]
    pub passives: Vec<String>,
}

/**
 * A headless play session description.
 *
 * Key presses, state changes and the game over signal are
 * replayed tick by tick into a session.
 */
#[derive(Deserialize, Clone, Debug)]
pub struct LaunchScript {
    pub ticks: u32,

    #[serde(default = "default_timestep")]
    pub timestep: f32,

    #[serde(default)]
    pub stats: Option<PlayerStats>,

    #[serde(default, rename = "press")]
    pub presses: Vec<KeyPress>,

    #[serde(default, rename = "request")]
    pub requests: Vec<Request>,

    #[serde(default, rename = "state")]
    pub state_changes: Vec<StateChange>,

    pub gameover: Option<GameOverConfig>,

    pub results: Option<ResultsConfig>,
}

/// Summary of a finished session
#[derive(Debug)]
pub struct SessionReport {
    pub ticks: u64,
    pub mode: Option<GameMode>,
    pub real_time: f64,
    pub game_time: f64,
    pub paused_screen: bool,
    pub results_shown: bool,
}

fn to_icons(names: &[String]) -> Vec<Option<Icon>> {
    names.iter().map(|n| Icon::from_name(n)).collect()
}

impl LaunchScript {
    pub fn parse(content: &str) -> Result<Self> {
        let script: Self = toml::from_str(content)?;

        if !(script.timestep.is_finite() && script.timestep > 0.0) {
            return Err(anyhow!("Invalid timestep: {}", script.timestep));
        }

        if let Some(press) = script.presses.iter().find(|p| p.from > p.to) {
            return Err(anyhow!(
                "Key {} released (tick {}) before it was pressed (tick {})",
                press.key,
                press.to,
                press.from
            ));
        }

        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = read_to_string(path)
            .map_err(|err| anyhow!("Couldn't read launch script {:?}: {}", path, err))?;
        Self::parse(&content).map_err(|err| anyhow!("{:?}: {}", path, err))
    }

    pub fn demo() -> Result<Self> {
        Self::parse(DEMO_SCRIPT)
    }

    /// Keys held down on the given tick
    pub fn pressed_at(&self, tick: u32) -> impl Iterator<Item = Key> + '_ {
        self.presses
            .iter()
            .filter(move |p| (p.from..p.to).contains(&tick))
            .map(|p| p.key)
    }

    pub fn play<P: Panel, R: ResultsView>(&self, session: &mut Session<P, R>) -> SessionReport {
        if let Some(stats) = &self.stats {
            session.update_stats(stats);
        }

        // Filled in up front: the screen stays hidden until the game ends,
        // however the Over state is reached.
        if let Some(results) = &self.results {
            session.bind_results(
                &results.character,
                results.level,
                &to_icons(&results.weapons),
                &to_icons(&results.passives),
            );
        }

        for tick in 0..self.ticks {
            for change in self.state_changes.iter().filter(|c| c.tick == tick) {
                session.set_state_by_name(&change.mode);
            }

            for request in self.requests.iter().filter(|r| r.tick == tick) {
                match request.action {
                    RequestAction::Pause => session.pause(),
                    RequestAction::Resume => session.resume(),
                }
            }

            if self.gameover.as_ref().is_some_and(|g| g.tick == tick) {
                session.game_over();
            }

            session.iterate(self.timestep, self.pressed_at(tick));
        }

        SessionReport {
            ticks: session.clock().frames(),
            mode: session.mode(),
            real_time: session.clock().real_time(),
            game_time: session.clock().game_time(),
            paused_screen: session.pause_screen().is_visible(),
            results_shown: session
                .controller()
                .is_some_and(|c| c.results_shown() && session.results_screen().is_visible()),
        }
    }
}
