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

use std::env;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "survivors";

fn get_prefpath() -> Option<PathBuf> {
    if let Some(dir) = env::var_os("XDG_CONFIG_HOME").filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir).join(APP_DIR));
    }

    if let Some(dir) = env::var_os("APPDATA").filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir).join(APP_DIR));
    }

    env::var_os("HOME")
        .filter(|d| !d.is_empty())
        .map(|home| PathBuf::from(home).join(".config").join(APP_DIR))
}

/**
 * Get the path of a file in the user preferences directory.
 *
 * Search order for the preferences directory is:
 *
 *   1. $XDG_CONFIG_HOME/survivors
 *   2. %APPDATA%/survivors
 *   3. $HOME/.config/survivors
 *
 * If none of these are available, the path is relative to the working directory.
 * The file itself does not have to exist.
 */
pub fn get_savefile_path(path: &Path) -> PathBuf {
    match get_prefpath() {
        Some(prefpath) => prefpath.join(path),
        None => path.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_savefile_path_keeps_filename() {
        let path = get_savefile_path(Path::new("settings.toml"));
        assert_eq!(path.file_name().unwrap(), "settings.toml");
    }
}
