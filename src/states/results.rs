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

use crate::game::{
    CharacterInfo, PlayerStats,
    hud::{Icon, IconSlot, ResultsView, StatsDisplay},
};

pub fn assign_character(view: &mut impl ResultsView, character: &CharacterInfo) {
    view.set_character_icon(character.icon.clone());
    view.set_character_name(&character.name);
}

pub fn assign_level_reached(view: &mut impl ResultsView, level: u32) {
    view.set_level_reached(&level.to_string());
}

fn lengths_match(
    view: &mut impl ResultsView,
    weapons: &[Option<Icon>],
    passives: &[Option<Icon>],
) -> bool {
    let weapon_slots = view.weapon_slots().len();
    let passive_slots = view.passive_slots().len();

    if weapons.len() != weapon_slots || passives.len() != passive_slots {
        log::error!(
            "Chosen weapons ({}/{}) and passive items ({}/{}) lists don't match the results screen slots",
            weapons.len(),
            weapon_slots,
            passives.len(),
            passive_slots,
        );
        return false;
    }

    true
}

fn fill_slots(slots: &mut [IconSlot], icons: &[Option<Icon>]) {
    for (slot, icon) in slots.iter_mut().zip(icons) {
        match icon {
            Some(icon) => slot.show(icon.clone()),
            None => slot.hide(),
        }
    }
}

/**
 * Show the chosen weapons and passive items on the results screen.
 *
 * Both lists must have exactly one entry per slot. If either doesn't,
 * nothing is changed. Slots without an icon are hidden.
 */
pub fn assign_chosen_items(
    view: &mut impl ResultsView,
    weapons: &[Option<Icon>],
    passives: &[Option<Icon>],
) {
    if !lengths_match(view, weapons, passives) {
        return;
    }

    fill_slots(view.weapon_slots(), weapons);
    fill_slots(view.passive_slots(), passives);
}

/**
 * Fill in the whole results screen.
 *
 * The icon lists are checked first, so a length mismatch leaves
 * the character and level fields untouched too.
 */
pub fn bind_results_ui(
    view: &mut impl ResultsView,
    character: &CharacterInfo,
    level_reached: u32,
    weapons: &[Option<Icon>],
    passives: &[Option<Icon>],
) {
    if !lengths_match(view, weapons, passives) {
        return;
    }

    assign_character(view, character);
    assign_level_reached(view, level_reached);
    assign_chosen_items(view, weapons, passives);
}

pub fn assign_current_stats(display: &mut StatsDisplay, stats: &PlayerStats) {
    display.health = format!("Health: {}", stats.health);
    display.recovery = format!("Recovery: {}", stats.recovery);
    display.move_speed = format!("Move Speed: {}", stats.move_speed);
    display.might = format!("Might: {}", stats.might);
    display.projectile_speed = format!("Projectile Speed: {}", stats.projectile_speed);
    display.magnet = format!("Magnet: {}", stats.magnet);
}
