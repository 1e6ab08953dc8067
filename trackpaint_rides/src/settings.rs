// Copyright 2023 drey7925
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use trackpaint_core::sprites::SpriteTable;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct TrackPaintSettings {
    /// A RON sprite table to use instead of the generated one. Relative paths are
    /// resolved against the data directory.
    pub sprite_table: Option<PathBuf>,
    /// First atlas index of the generated sprite block
    pub sprite_base: u32,
}

pub const FILENAME: &str = "trackpaint.ron";

impl Default for TrackPaintSettings {
    fn default() -> Self {
        Self {
            sprite_table: None,
            sprite_base: crate::DEFAULT_SPRITE_BASE,
        }
    }
}

impl TrackPaintSettings {
    /// Loads the sprite table override, if one is configured.
    pub fn load_sprite_table(&self) -> Result<Option<SpriteTable>> {
        let Some(path) = &self.sprite_table else {
            return Ok(None);
        };
        log::info!("Loading sprite table from {}", path.display());
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Reading sprite table {}", path.display()))?;
        let table = SpriteTable::from_ron(&data)
            .with_context(|| format!("Parsing sprite table {}", path.display()))?;
        log::info!("Loaded {} sprite table entries", table.len());
        Ok(Some(table))
    }
}

pub fn load(data_dir: &Path) -> Result<TrackPaintSettings> {
    let config_file = data_dir.join(FILENAME);
    log::info!("Loading settings from {}", config_file.display());
    if !config_file.exists() {
        log::info!("No settings found; using defaults");
        return Ok(Default::default());
    }
    let mut config = ron::from_str::<TrackPaintSettings>(&std::fs::read_to_string(&config_file)?)
        .with_context(|| format!("Parsing {}", config_file.display()))?;
    if let Some(path) = config.sprite_table.as_mut() {
        if path.is_relative() {
            *path = data_dir.join(path.as_path());
        }
    }
    log::info!("Loaded settings from {}", config_file.display());
    Ok(config)
}
