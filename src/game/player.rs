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

use serde::Deserialize;

use crate::game::hud::Icon;

/// The character the player chose for this session
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CharacterInfo {
    /// Display name
    pub name: String,

    /// Portrait shown on the results screen
    #[serde(default)]
    pub icon: Option<Icon>,
}

/// Current player stats as shown on the pause screen
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PlayerStats {
    pub health: f32,
    pub recovery: f32,
    pub move_speed: f32,
    pub might: f32,
    pub projectile_speed: f32,
    pub magnet: f32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            health: 100.0,
            recovery: 0.0,
            move_speed: 1.0,
            might: 1.0,
            projectile_speed: 1.0,
            magnet: 30.0,
        }
    }
}
