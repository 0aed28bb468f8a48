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

use std::{collections::HashSet, fmt, str::FromStr};

use anyhow::{Error, anyhow};
use serde::{Deserialize, Serialize};

/**
 * A keyboard key the game can bind actions to.
 *
 * Keys are named in configuration files using their lowercase names
 * ("escape", "space", "f1", "p", "5", ...)
 */
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    Escape,
    Pause,
    Return,
    Space,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Function(u8),
    Letter(char),
    Digit(u8),
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        let key = match name.as_str() {
            "escape" | "esc" => Self::Escape,
            "pause" => Self::Pause,
            "return" | "enter" => Self::Return,
            "space" => Self::Space,
            "backspace" => Self::Backspace,
            "tab" => Self::Tab,
            "up" => Self::Up,
            "down" => Self::Down,
            "left" => Self::Left,
            "right" => Self::Right,
            f if f.len() > 1 && f.starts_with('f') => match f[1..].parse::<u8>() {
                Ok(n) if (1..=12).contains(&n) => Self::Function(n),
                _ => return Err(anyhow!("Unknown key name: {}", s)),
            },
            c if c.chars().count() == 1 => {
                let c = c.chars().next().unwrap_or_default();
                if c.is_ascii_lowercase() {
                    Self::Letter(c)
                } else if let Some(d) = c.to_digit(10) {
                    Self::Digit(d as u8)
                } else {
                    return Err(anyhow!("Unknown key name: {}", s));
                }
            }
            _ => return Err(anyhow!("Unknown key name: {}", s)),
        };

        Ok(key)
    }
}

impl TryFrom<String> for Key {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Escape => write!(f, "escape"),
            Self::Pause => write!(f, "pause"),
            Self::Return => write!(f, "return"),
            Self::Space => write!(f, "space"),
            Self::Backspace => write!(f, "backspace"),
            Self::Tab => write!(f, "tab"),
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Function(n) => write!(f, "f{}", n),
            Self::Letter(c) => write!(f, "{}", c),
            Self::Digit(d) => write!(f, "{}", d),
        }
    }
}

/**
 * Keyboard state tracker.
 *
 * The input source reports which keys are held down on each tick.
 * Comparing the previous tick's set with the current one gives the
 * press and release edges.
 */
#[derive(Default)]
pub struct KeyboardState {
    previous: HashSet<Key>,
    current: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new tick with the given set of held keys
    pub fn update<I>(&mut self, pressed: I)
    where
        I: IntoIterator<Item = Key>,
    {
        self.previous = std::mem::replace(&mut self.current, pressed.into_iter().collect());
    }

    /// True only on the tick where the key went from released to pressed
    pub fn just_pressed(&self, key: Key) -> bool {
        self.current.contains(&key) && !self.previous.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!("escape".parse::<Key>().unwrap(), Key::Escape);
        assert_eq!("Esc".parse::<Key>().unwrap(), Key::Escape);
        assert_eq!("f12".parse::<Key>().unwrap(), Key::Function(12));
        assert_eq!("p".parse::<Key>().unwrap(), Key::Letter('p'));
        assert_eq!("7".parse::<Key>().unwrap(), Key::Digit(7));
        assert!("f13".parse::<Key>().is_err());
        assert!("hyper".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());

        for key in [Key::Pause, Key::Function(3), Key::Letter('q'), Key::Digit(0)] {
            assert_eq!(key.to_string().parse::<Key>().unwrap(), key);
        }
    }

    #[test]
    fn test_press_edge_fires_once() {
        let mut kb = KeyboardState::new();

        kb.update([Key::Escape]);
        assert!(kb.just_pressed(Key::Escape));

        // Still held: no new edge
        kb.update([Key::Escape]);
        assert!(!kb.just_pressed(Key::Escape));

        kb.update([]);
        assert!(!kb.just_pressed(Key::Escape));

        kb.update([Key::Escape, Key::Space]);
        assert!(kb.just_pressed(Key::Escape));
        assert!(kb.just_pressed(Key::Space));
    }

    #[test]
    fn test_other_keys_dont_mask_edge() {
        let mut kb = KeyboardState::new();
        kb.update([Key::Space]);
        kb.update([Key::Space, Key::Letter('p')]);
        assert!(kb.just_pressed(Key::Letter('p')));
        assert!(!kb.just_pressed(Key::Space));
    }
}
