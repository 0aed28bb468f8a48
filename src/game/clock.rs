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

/**
 * The game clock.
 *
 * All time based gameplay reads its timestep through the clock, so setting
 * the time scale to zero freezes the whole simulation.
 */
pub struct GameClock {
    /// Current time scale
    scale: f32,

    /// The scale restored when the clock is unfrozen
    running_scale: f32,

    /// Unscaled time since the session started
    real_time: f64,

    /// Scaled (simulated) time since the session started
    game_time: f64,

    frames: u64,
}

impl GameClock {
    pub fn new(running_scale: f32) -> Self {
        let running_scale = if running_scale.is_finite() && running_scale > 0.0 {
            running_scale
        } else {
            log::warn!("Invalid time scale {running_scale}, using 1.0");
            1.0
        };

        Self {
            scale: running_scale,
            running_scale,
            real_time: 0.0,
            game_time: 0.0,
            frames: 0,
        }
    }

    pub fn freeze(&mut self) {
        self.scale = 0.0;
    }

    pub fn restore(&mut self) {
        self.scale = self.running_scale;
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn real_time(&self) -> f64 {
        self.real_time
    }

    pub fn game_time(&self) -> f64 {
        self.game_time
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance the clock by one frame and return the scaled timestep
    pub fn tick(&mut self, timestep: f32) -> f32 {
        let timestep = if timestep >= 0.0 {
            timestep
        } else {
            log::warn!("Invalid timestep {timestep}, using 0");
            0.0
        };
        let scaled = timestep * self.scale;
        self.real_time += timestep as f64;
        self.game_time += scaled as f64;
        self.frames += 1;
        scaled
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frozen_clock() {
        let mut clock = GameClock::new(1.0);
        assert_eq!(clock.tick(0.5), 0.5);

        clock.freeze();
        assert_eq!(clock.scale(), 0.0);
        assert_eq!(clock.tick(0.5), 0.0);
        assert_eq!(clock.game_time(), 0.5);
        assert_eq!(clock.real_time(), 1.0);

        clock.restore();
        assert_eq!(clock.tick(0.25), 0.25);
        assert_eq!(clock.frames(), 3);
    }

    #[test]
    fn test_invalid_timestep() {
        let mut clock = GameClock::new(1.0);
        assert_eq!(clock.tick(-0.5), 0.0);
        assert_eq!(clock.tick(f32::NAN), 0.0);
        assert_eq!(clock.game_time(), 0.0);
        assert_eq!(clock.real_time(), 0.0);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn test_running_scale() {
        let mut clock = GameClock::new(2.0);
        assert_eq!(clock.tick(0.5), 1.0);
        clock.freeze();
        clock.restore();
        assert_eq!(clock.scale(), 2.0);

        assert_eq!(GameClock::new(-1.0).scale(), 1.0);
        assert_eq!(GameClock::new(f32::NAN).scale(), 1.0);
    }
}
