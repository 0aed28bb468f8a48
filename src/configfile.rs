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

use std::{
    fs::{create_dir_all, read_to_string, write},
    path::Path,
};

use anyhow::Result;
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::game::Key;

fn default_pause_key() -> Key {
    Key::Escape
}

fn default_time_scale() -> f32 {
    1.0
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ControlsConfig {
    /// Key that toggles the pause screen
    #[serde(default = "default_pause_key")]
    pub pause: Key,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            pause: default_pause_key(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimeConfig {
    /// Time scale while the game is running
    #[serde(default = "default_time_scale")]
    pub scale: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            scale: default_time_scale(),
        }
    }
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct UserConfig {
    #[serde(default)]
    pub controls: ControlsConfig,
    #[serde(default)]
    pub time: TimeConfig,
}

pub fn load_user_config(filename: &Path) -> UserConfig {
    let content = match read_to_string(filename) {
        Ok(c) => c,
        Err(e) => {
            warn!("Couldn't read user config file ({:?}): {}", filename, e);
            "".to_owned()
        }
    };

    match toml::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            error!("Couldn't parse user config file ({:?}): {}", filename, e);
            Default::default()
        }
    }
}

pub fn save_user_config(config: &UserConfig, filename: &Path) -> Result<()> {
    let content = toml::to_string(config)?;

    if let Some(dir) = filename.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir)?;
    }

    write(filename, content)?;

    info!("Saved user preferences {:?}", filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parsing() {
        let config: UserConfig = toml::from_str(
            r#"
            [controls]
            pause = "p"

            [time]
            scale = 0.5
        "#,
        )
        .unwrap();

        assert_eq!(config.controls.pause, Key::Letter('p'));
        assert_eq!(config.time.scale, 0.5);
    }

    #[test]
    fn test_config_defaults() {
        let config: UserConfig = toml::from_str("[controls]\n").unwrap();
        assert_eq!(config, UserConfig::default());
        assert_eq!(config.controls.pause, Key::Escape);
        assert_eq!(config.time.scale, 1.0);

        assert!(toml::from_str::<UserConfig>("[controls]\npause = \"hyper\"").is_err());
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let config = load_user_config(Path::new("/nonexistent/survivors/settings.toml"));
        assert_eq!(config, UserConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir().join(format!(
            "survivors-config-test-{}.toml",
            std::process::id()
        ));

        let mut config = UserConfig::default();
        config.controls.pause = Key::Function(1);
        config.time.scale = 2.0;

        save_user_config(&config, &path).unwrap();
        assert_eq!(load_user_config(&path), config);

        std::fs::remove_file(&path).unwrap();
    }
}
