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

/// Number of weapon and passive item slots on the results screen
pub const RESULT_SLOTS: usize = 6;

/// Reference to an icon sprite
#[derive(Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Icon(pub String);

impl Icon {
    pub fn new(name: &str) -> Self {
        Self(name.to_owned())
    }

    /// Convert a name from a data file into an icon.
    /// An empty name means there is no icon.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.is_empty() {
            None
        } else {
            Some(Self::new(name))
        }
    }
}

/**
 * A screen that can be shown and hidden.
 */
pub trait Panel {
    fn show(&mut self);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;
}

/**
 * A simple panel that only tracks its visibility
 */
pub struct ScreenPanel {
    name: &'static str,
    visible: bool,
}

impl ScreenPanel {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            visible: false,
        }
    }
}

impl Panel for ScreenPanel {
    fn show(&mut self) {
        if !self.visible {
            log::debug!("Showing {} screen", self.name);
        }
        self.visible = true;
    }

    fn hide(&mut self) {
        if self.visible {
            log::debug!("Hiding {} screen", self.name);
        }
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

/// A single icon slot on the results screen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconSlot {
    pub enabled: bool,
    pub icon: Option<Icon>,
}

impl IconSlot {
    pub fn show(&mut self, icon: Icon) {
        self.enabled = true;
        self.icon = Some(icon);
    }

    /// Hide the slot. The previous icon is kept but not drawn.
    pub fn hide(&mut self) {
        self.enabled = false;
    }
}

/**
 * The game over results display.
 */
pub trait ResultsView: Panel {
    fn set_character_icon(&mut self, icon: Option<Icon>);
    fn set_character_name(&mut self, name: &str);
    fn set_level_reached(&mut self, text: &str);
    fn weapon_slots(&mut self) -> &mut [IconSlot];
    fn passive_slots(&mut self) -> &mut [IconSlot];
}

pub struct ResultsScreen {
    panel: ScreenPanel,
    pub character_icon: Option<Icon>,
    pub character_name: String,
    pub level_reached: String,
    pub weapons: [IconSlot; RESULT_SLOTS],
    pub passives: [IconSlot; RESULT_SLOTS],
}

impl ResultsScreen {
    pub fn new() -> Self {
        Self {
            panel: ScreenPanel::new("results"),
            character_icon: None,
            character_name: String::new(),
            level_reached: String::new(),
            weapons: Default::default(),
            passives: Default::default(),
        }
    }
}

impl Default for ResultsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for ResultsScreen {
    fn show(&mut self) {
        self.panel.show();
    }

    fn hide(&mut self) {
        self.panel.hide();
    }

    fn is_visible(&self) -> bool {
        self.panel.is_visible()
    }
}

impl ResultsView for ResultsScreen {
    fn set_character_icon(&mut self, icon: Option<Icon>) {
        self.character_icon = icon;
    }

    fn set_character_name(&mut self, name: &str) {
        name.clone_into(&mut self.character_name);
    }

    fn set_level_reached(&mut self, text: &str) {
        text.clone_into(&mut self.level_reached);
    }

    fn weapon_slots(&mut self) -> &mut [IconSlot] {
        &mut self.weapons
    }

    fn passive_slots(&mut self) -> &mut [IconSlot] {
        &mut self.passives
    }
}

/// Text fields showing the player's current stats
#[derive(Default, Debug)]
pub struct StatsDisplay {
    pub health: String,
    pub recovery: String,
    pub move_speed: String,
    pub might: String,
    pub projectile_speed: String,
    pub magnet: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_from_name() {
        assert_eq!(Icon::from_name(""), None);
        assert_eq!(Icon::from_name("whip"), Some(Icon::new("whip")));
    }

    #[test]
    fn test_results_screen_starts_hidden_and_empty() {
        let mut screen = ResultsScreen::new();
        assert!(!screen.is_visible());
        assert_eq!(screen.weapon_slots().len(), RESULT_SLOTS);
        assert_eq!(screen.passive_slots().len(), RESULT_SLOTS);
        assert!(screen.weapons.iter().all(|s| !s.enabled && s.icon.is_none()));

        screen.show();
        assert!(screen.is_visible());
        screen.hide();
        assert!(!screen.is_visible());
    }

    #[test]
    fn test_hidden_slot_keeps_icon() {
        let mut slot = IconSlot::default();
        slot.show(Icon::new("garlic"));
        slot.hide();
        assert!(!slot.enabled);
        assert_eq!(slot.icon, Some(Icon::new("garlic")));
    }
}
