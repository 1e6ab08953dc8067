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

use anyhow::{ensure, Context, Result};
use cgmath::Vector3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    direction::Direction,
    piece::SpriteVariant,
    session::{BoundBox, SpriteId},
    track_element::TrackElementKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpriteKey {
    pub kind: TrackElementKind,
    pub variant: SpriteVariant,
    pub direction: Direction,
    pub sequence: u8,
}

/// A sprite with its tile-local offset and depth-sorting box. Both are relative to the
/// tile's base height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpritePlacement {
    pub sprite: SpriteId,
    pub offset: Vector3<i32>,
    pub bound_box: BoundBox,
}

pub type Placements = SmallVec<[SpritePlacement; 2]>;

/// The sprite emission table of one ride: pure data, keyed by
/// (kind, variant, direction, sequence). Only canonical pieces have entries.
#[derive(Debug, Clone, Default)]
pub struct SpriteTable {
    entries: FxHashMap<SpriteKey, Placements>,
    platform: Option<[SpritePlacement; 4]>,
}
impl SpriteTable {
    pub fn new() -> SpriteTable {
        Self::default()
    }

    pub fn insert(&mut self, key: SpriteKey, placements: Placements) -> Option<Placements> {
        self.entries.insert(key, placements)
    }

    pub fn set_platform(&mut self, platform: [SpritePlacement; 4]) {
        self.platform = Some(platform);
    }

    pub fn get(&self, key: &SpriteKey) -> &[SpritePlacement] {
        self.entries.get(key).map(|p| p.as_slice()).unwrap_or(&[])
    }

    pub fn contains(&self, key: &SpriteKey) -> bool {
        self.entries.contains_key(key)
    }

    /// The station base platform, keyed only by direction
    pub fn platform(&self, direction: Direction) -> Option<&SpritePlacement> {
        self.platform
            .as_ref()
            .map(|p| &p[direction.index() as usize])
    }

    pub fn has_platform(&self) -> bool {
        self.platform.is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sprite_count(&self) -> usize {
        self.entries.values().map(|p| p.len()).sum()
    }

    pub fn from_ron(data: &str) -> Result<SpriteTable> {
        let file: SpriteTableFile = ron::from_str(data).context("Parsing sprite table")?;
        file.try_into()
    }

    pub fn to_ron(&self) -> Result<String> {
        let file = SpriteTableFile::from(self);
        Ok(ron::ser::to_string_pretty(
            &file,
            ron::ser::PrettyConfig::default(),
        )?)
    }
}

/// On-disk form of a [SpriteTable]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteTableFile {
    #[serde(default)]
    pub platform: Option<Vec<SpritePlacement>>,
    pub entries: Vec<SpriteTableEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteTableEntry {
    pub kind: TrackElementKind,
    #[serde(default = "normal_variant")]
    pub variant: SpriteVariant,
    pub direction: Direction,
    pub sequence: u8,
    pub sprites: Vec<SpritePlacement>,
}
fn normal_variant() -> SpriteVariant {
    SpriteVariant::Normal
}

impl TryFrom<SpriteTableFile> for SpriteTable {
    type Error = anyhow::Error;

    fn try_from(file: SpriteTableFile) -> Result<Self> {
        let mut table = SpriteTable::new();
        if let Some(platform) = file.platform {
            let platform: [SpritePlacement; 4] = platform.try_into().map_err(|p: Vec<_>| {
                anyhow::anyhow!("Station platform needs 4 placements, got {}", p.len())
            })?;
            table.set_platform(platform);
        }
        for entry in file.entries {
            let key = SpriteKey {
                kind: entry.kind,
                variant: entry.variant,
                direction: entry.direction,
                sequence: entry.sequence,
            };
            ensure!(
                table.insert(key, entry.sprites.into()).is_none(),
                "Duplicate sprite table entry {:?}",
                key
            );
        }
        Ok(table)
    }
}

impl From<&SpriteTable> for SpriteTableFile {
    fn from(table: &SpriteTable) -> Self {
        let mut entries: Vec<_> = table
            .entries
            .iter()
            .map(|(key, placements)| SpriteTableEntry {
                kind: key.kind,
                variant: key.variant,
                direction: key.direction,
                sequence: key.sequence,
                sprites: placements.to_vec(),
            })
            .collect();
        entries.sort_by_key(|e| (e.kind, e.variant, e.direction, e.sequence));
        SpriteTableFile {
            platform: table.platform.map(|p| p.to_vec()),
            entries,
        }
    }
}
