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

use std::{fmt, str::FromStr};

use anyhow::{Error, anyhow};
use smallvec::SmallVec;

/// The mode the game session is in
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameMode {
    Running,
    Paused,
    /// Terminal state: the results screen is shown
    Over,
}

impl FromStr for GameMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(Self::Running),
            "paused" => Ok(Self::Paused),
            "over" => Ok(Self::Over),
            x => Err(anyhow!("Unknown game state: {}", x)),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Running => "running",
            Self::Paused => "paused",
            Self::Over => "over",
        })
    }
}

/// Side effects a state transition asks the session to apply
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StateEffect {
    /// Set the global time scale to zero
    FreezeClock,
    /// Set the global time scale back to the running scale
    RestoreClock,
    ShowPausePanel,
    HidePausePanel,
    ShowResults,
}

pub type StateEffects = SmallVec<[StateEffect; 2]>;

/**
 * The game state machine.
 *
 * Running <-> Paused via pause and resume requests, and Running/Paused -> Over
 * when the game ends. Operations don't touch the clock or the screens
 * themselves, they return the effects for the owner to apply.
 */
pub struct GameStateController {
    current: GameMode,
    previous: GameMode,

    /// Set on the first tick spent in the Over state
    results_shown: bool,

    /// Unscaled seconds spent in the current mode
    time_in_mode: f32,
}

impl GameStateController {
    pub(super) fn new() -> Self {
        Self {
            current: GameMode::Running,
            previous: GameMode::Running,
            results_shown: false,
            time_in_mode: 0.0,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.current
    }

    /// The mode a resume returns to
    pub fn previous_mode(&self) -> GameMode {
        self.previous
    }

    pub fn results_shown(&self) -> bool {
        self.results_shown
    }

    /// Raw state assignment. No transition rules are checked.
    pub fn set_state(&mut self, mode: GameMode) {
        if mode != self.current {
            self.time_in_mode = 0.0;
        }
        self.current = mode;
    }

    /// Raw state assignment by name. Unknown names are ignored.
    pub fn set_state_by_name(&mut self, name: &str) {
        match name.parse() {
            Ok(mode) => self.set_state(mode),
            Err(err) => log::error!("Current state does not exist: {err}"),
        }
    }

    pub fn request_pause(&mut self) -> StateEffects {
        let mut effects = StateEffects::new();
        match self.current {
            GameMode::Paused => {}
            GameMode::Over => log::debug!("Ignoring pause request: game is over"),
            GameMode::Running => {
                self.previous = self.current;
                self.set_state(GameMode::Paused);
                effects.push(StateEffect::FreezeClock);
                effects.push(StateEffect::ShowPausePanel);
                log::info!("Game is paused..");
            }
        }
        effects
    }

    pub fn request_resume(&mut self) -> StateEffects {
        let mut effects = StateEffects::new();
        if self.current == GameMode::Paused {
            let paused_for = self.time_in_mode;
            self.set_state(self.previous);
            effects.push(StateEffect::RestoreClock);
            effects.push(StateEffect::HidePausePanel);
            log::info!("Game resumed after {paused_for:.1}s pause");
        }
        effects
    }

    /// End the game. The results are revealed on the next tick.
    pub fn signal_game_over(&mut self) {
        self.set_state(GameMode::Over);
    }

    /**
     * Per-tick dispatch.
     *
     * In Running and Paused modes the pause toggle (an edge triggered key press)
     * pauses or resumes the game. The first tick in the Over mode freezes the
     * clock and reveals the results.
     */
    pub fn advance(&mut self, timestep: f32, pause_toggle: bool) -> StateEffects {
        if timestep > 0.0 {
            self.time_in_mode += timestep;
        }

        match self.current {
            GameMode::Running | GameMode::Paused => {
                if !pause_toggle {
                    StateEffects::new()
                } else if self.current == GameMode::Paused {
                    self.request_resume()
                } else {
                    self.request_pause()
                }
            }
            GameMode::Over => {
                let mut effects = StateEffects::new();
                if !self.results_shown {
                    self.results_shown = true;
                    effects.push(StateEffect::FreezeClock);
                    effects.push(StateEffect::ShowResults);
                    log::info!("Game over!");
                }
                effects
            }
        }
    }
}
