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

use anyhow::{Result, anyhow};

use crate::{
    configfile::UserConfig,
    game::{
        CharacterInfo, GameClock, Key, KeyboardState, PlayerStats,
        hud::{Icon, Panel, ResultsScreen, ResultsView, ScreenPanel, StatsDisplay},
    },
    states::{
        GameMode, GameStateController, StateEffect, StateEffects,
        results::{assign_current_stats, bind_results_ui},
    },
};

/**
 * A play session.
 *
 * The session owns the game state controller and everything its
 * effects act on: the clock and the pause and results screens.
 * The frame loop calls `iterate` once per tick.
 */
pub struct Session<P = ScreenPanel, R = ResultsScreen> {
    controller: Option<GameStateController>,
    clock: GameClock,
    keyboard: KeyboardState,
    pause_key: Key,

    pause_screen: P,
    results_screen: R,
    stats_display: StatsDisplay,
}

impl Session {
    pub fn new(config: &UserConfig) -> Self {
        Self::with_screens(config, ScreenPanel::new("pause"), ResultsScreen::new())
    }
}

impl<P: Panel, R: ResultsView> Session<P, R> {
    pub fn with_screens(config: &UserConfig, pause_screen: P, results_screen: R) -> Self {
        let mut session = Self {
            controller: None,
            clock: GameClock::new(config.time.scale),
            keyboard: KeyboardState::new(),
            pause_key: config.controls.pause,
            pause_screen,
            results_screen,
            stats_display: StatsDisplay::default(),
        };
        session.disable_screens();
        session
    }

    fn disable_screens(&mut self) {
        self.pause_screen.hide();
        self.results_screen.hide();
    }

    /// Create the session's game state controller. There can be only one.
    pub fn install_controller(&mut self) -> Result<&mut GameStateController> {
        if self.controller.is_some() {
            log::warn!("Extra game state controller rejected");
            return Err(anyhow!("A game state controller already exists in this session"));
        }

        Ok(self.controller.insert(GameStateController::new()))
    }

    pub fn controller(&self) -> Option<&GameStateController> {
        self.controller.as_ref()
    }

    pub fn mode(&self) -> Option<GameMode> {
        self.controller.as_ref().map(|c| c.mode())
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn pause_screen(&self) -> &P {
        &self.pause_screen
    }

    pub fn results_screen(&self) -> &R {
        &self.results_screen
    }

    pub fn stats_display(&self) -> &StatsDisplay {
        &self.stats_display
    }

    fn apply(&mut self, effects: StateEffects) {
        for effect in effects {
            match effect {
                StateEffect::FreezeClock => self.clock.freeze(),
                StateEffect::RestoreClock => self.clock.restore(),
                StateEffect::ShowPausePanel => self.pause_screen.show(),
                StateEffect::HidePausePanel => self.pause_screen.hide(),
                StateEffect::ShowResults => self.results_screen.show(),
            }
        }
    }

    fn with_controller<F>(&mut self, action: &str, f: F)
    where
        F: FnOnce(&mut GameStateController) -> StateEffects,
    {
        match self.controller.as_mut() {
            Some(ctrl) => {
                let effects = f(ctrl);
                self.apply(effects);
            }
            None => log::warn!("Can't {action}: no game state controller"),
        }
    }

    /**
     * Run one tick.
     *
     * `pressed` is the set of keys held down during this tick.
     * Returns the scaled timestep gameplay should advance by.
     * Negative and NaN timesteps are treated as zero.
     */
    pub fn iterate<I>(&mut self, timestep: f32, pressed: I) -> f32
    where
        I: IntoIterator<Item = Key>,
    {
        self.keyboard.update(pressed);
        let toggle = self.keyboard.just_pressed(self.pause_key);

        if let Some(ctrl) = self.controller.as_mut() {
            let effects = ctrl.advance(timestep, toggle);
            self.apply(effects);
        }

        self.clock.tick(timestep)
    }

    pub fn pause(&mut self) {
        self.with_controller("pause", |c| c.request_pause());
    }

    pub fn resume(&mut self) {
        self.with_controller("resume", |c| c.request_resume());
    }

    pub fn game_over(&mut self) {
        self.with_controller("end game", |c| {
            c.signal_game_over();
            StateEffects::new()
        });
    }

    pub fn set_state_by_name(&mut self, name: &str) {
        self.with_controller("change state", |c| {
            c.set_state_by_name(name);
            StateEffects::new()
        });
    }

    pub fn bind_results(
        &mut self,
        character: &CharacterInfo,
        level_reached: u32,
        weapons: &[Option<Icon>],
        passives: &[Option<Icon>],
    ) {
        bind_results_ui(
            &mut self.results_screen,
            character,
            level_reached,
            weapons,
            passives,
        );
    }

    pub fn update_stats(&mut self, stats: &PlayerStats) {
        assign_current_stats(&mut self.stats_display, stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 1.0 / 60.0;

    fn session() -> Session {
        let mut session = Session::new(&UserConfig::default());
        session.install_controller().unwrap();
        session
    }

    #[test]
    fn test_screens_start_hidden() {
        let session = Session::new(&UserConfig::default());
        assert!(!session.pause_screen().is_visible());
        assert!(!session.results_screen().is_visible());
        assert_eq!(session.mode(), None);
    }

    #[test]
    fn test_duplicate_controller_rejected() {
        let mut session = session();
        session.pause();
        assert!(session.install_controller().is_err());

        // The original controller is untouched
        assert_eq!(session.mode(), Some(GameMode::Paused));
    }

    #[test]
    fn test_pause_key_toggles() {
        let mut session = session();

        assert_eq!(session.iterate(STEP, []), STEP);

        // The clock freezes on the same tick the pause key goes down
        assert_eq!(session.iterate(STEP, [Key::Escape]), 0.0);
        assert_eq!(session.mode(), Some(GameMode::Paused));
        assert!(session.pause_screen().is_visible());
        assert_eq!(session.clock().scale(), 0.0);

        // Holding the key doesn't toggle again
        assert_eq!(session.iterate(STEP, [Key::Escape]), 0.0);
        assert_eq!(session.mode(), Some(GameMode::Paused));

        session.iterate(STEP, []);
        session.iterate(STEP, [Key::Escape]);
        assert_eq!(session.mode(), Some(GameMode::Running));
        assert!(!session.pause_screen().is_visible());
        assert_eq!(session.clock().scale(), 1.0);
    }

    #[test]
    fn test_other_keys_dont_pause() {
        let mut config = UserConfig::default();
        config.controls.pause = Key::Letter('p');
        let mut session = Session::new(&config);
        session.install_controller().unwrap();

        session.iterate(STEP, [Key::Escape]);
        assert_eq!(session.mode(), Some(GameMode::Running));
        session.iterate(STEP, [Key::Letter('p')]);
        assert_eq!(session.mode(), Some(GameMode::Paused));
    }

    #[test]
    fn test_double_pause_keeps_previous_mode() {
        let mut session = session();
        session.pause();
        session.pause();

        let ctrl = session.controller().unwrap();
        assert_eq!(ctrl.mode(), GameMode::Paused);
        assert_eq!(ctrl.previous_mode(), GameMode::Running);

        session.resume();
        assert_eq!(session.mode(), Some(GameMode::Running));
    }

    #[test]
    fn test_invalid_timestep_is_ignored() {
        let mut session = session();
        session.iterate(0.5, []);

        assert_eq!(session.iterate(f32::NAN, []), 0.0);
        assert_eq!(session.iterate(-1.0, []), 0.0);
        assert_eq!(session.clock().game_time(), 0.5);
        assert_eq!(session.clock().real_time(), 0.5);
    }

    #[test]
    fn test_resume_when_running_is_noop() {
        let mut session = session();
        session.resume();
        assert_eq!(session.mode(), Some(GameMode::Running));
        assert_eq!(session.clock().scale(), 1.0);
        assert!(!session.pause_screen().is_visible());
    }

    #[test]
    fn test_game_over_is_deferred_to_next_tick() {
        let mut session = session();
        session.game_over();
        assert_eq!(session.mode(), Some(GameMode::Over));
        assert!(!session.results_screen().is_visible());
        assert_eq!(session.clock().scale(), 1.0);

        session.iterate(STEP, []);
        assert!(session.results_screen().is_visible());
        assert_eq!(session.clock().scale(), 0.0);

        // Pause key is ignored from now on
        for _ in 0..5 {
            session.iterate(STEP, [Key::Escape]);
            session.iterate(STEP, []);
        }
        assert_eq!(session.mode(), Some(GameMode::Over));
        assert!(!session.pause_screen().is_visible());
    }

    #[test]
    fn test_no_controller() {
        let mut session = Session::new(&UserConfig::default());
        session.pause();
        session.game_over();
        assert_eq!(session.iterate(STEP, [Key::Escape]), STEP);
        assert_eq!(session.mode(), None);
    }

    #[test]
    fn test_bind_results_and_stats() {
        let mut session = session();
        let mut weapons = vec![None; 6];
        weapons[0] = Some(Icon::new("whip"));

        let character = CharacterInfo {
            name: "Antonio".to_owned(),
            icon: None,
        };
        session.bind_results(&character, 7, &weapons, &[None, None, None, None, None, None]);
        assert_eq!(session.results_screen().level_reached, "7");
        assert!(session.results_screen().weapons[0].enabled);

        session.update_stats(&PlayerStats::default());
        assert_eq!(session.stats_display().health, "Health: 100");
    }
}
