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

//! Slope-dependent constants shared by every track painter.
//!
//! Down slopes never appear here: a down piece is always painted as the matching up
//! piece rotated by 180 degrees.

use serde::{Deserialize, Serialize};

/// General support height registered above a flat tile.
pub const DEFAULT_CLEARANCE: i32 = 32;

/// The slope transition rendered on one tile, always in the "up" sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlopeState {
    Flat,
    FlatToUp25,
    Up25,
    Up25ToFlat,
    Up25ToUp60,
    Up60,
    Up60ToUp25,
}

/// Wall cut-out style at a tile edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TunnelKind {
    Flat,
    SlopeStart,
    SlopeEnd,
    /// Flat opening with square corners, used under station platforms
    SquareFlat,
}

/// Where (relative to the tile height) and what kind of tunnel to push at one end of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TunnelRule {
    pub height_offset: i32,
    pub kind: TunnelKind,
}
const fn tunnel(height_offset: i32, kind: TunnelKind) -> TunnelRule {
    TunnelRule {
        height_offset,
        kind,
    }
}

impl SlopeState {
    /// How far above the tile base the track geometry reaches; registered as the general
    /// support height so nothing is stacked through the piece.
    pub const fn vertical_extent(self) -> i32 {
        match self {
            SlopeState::Flat => DEFAULT_CLEARANCE,
            SlopeState::FlatToUp25 => 48,
            SlopeState::Up25 => 56,
            SlopeState::Up25ToFlat => 40,
            SlopeState::Up25ToUp60 => 72,
            SlopeState::Up60 => 104,
            SlopeState::Up60ToUp25 => 72,
        }
    }

    /// Rise of the track surface above the base height at the tile centre, where a single
    /// post is anchored.
    pub const fn centre_support_offset(self) -> i32 {
        match self {
            SlopeState::Flat => 0,
            SlopeState::FlatToUp25 => 3,
            SlopeState::Up25 => 8,
            SlopeState::Up25ToFlat => 6,
            SlopeState::Up25ToUp60 => 16,
            SlopeState::Up60 => 36,
            SlopeState::Up60ToUp25 => 20,
        }
    }

    /// Rise of the track surface at a corner anchor of a diagonal tile. Corners sit further
    /// along the slope than the centre, so the steep values are slightly higher.
    pub const fn corner_support_offset(self) -> i32 {
        match self {
            SlopeState::Flat => 0,
            SlopeState::FlatToUp25 => 3,
            SlopeState::Up25 => 9,
            SlopeState::Up25ToFlat => 6,
            SlopeState::Up25ToUp60 => 24,
            SlopeState::Up60 => 38,
            SlopeState::Up60ToUp25 => 24,
        }
    }

    /// Tunnel pushed where the piece enters the tile (its low end)
    pub const fn entry_tunnel(self) -> TunnelRule {
        match self {
            SlopeState::Flat | SlopeState::FlatToUp25 => tunnel(0, TunnelKind::Flat),
            SlopeState::Up25
            | SlopeState::Up25ToFlat
            | SlopeState::Up25ToUp60
            | SlopeState::Up60
            | SlopeState::Up60ToUp25 => tunnel(-8, TunnelKind::SlopeStart),
        }
    }

    /// Tunnel pushed where the piece leaves the tile (its high end)
    pub const fn exit_tunnel(self) -> TunnelRule {
        match self {
            SlopeState::Flat => tunnel(0, TunnelKind::Flat),
            SlopeState::FlatToUp25 | SlopeState::Up25 => tunnel(8, TunnelKind::SlopeEnd),
            SlopeState::Up25ToFlat => tunnel(8, TunnelKind::Flat),
            SlopeState::Up25ToUp60 | SlopeState::Up60ToUp25 => {
                tunnel(24, TunnelKind::SlopeEnd)
            }
            SlopeState::Up60 => tunnel(56, TunnelKind::SlopeEnd),
        }
    }

    /// Depth of a sprite's bounding box along z, so steep track sorts in front of what
    /// it passes over.
    pub const fn bound_box_depth(self) -> i32 {
        match self {
            SlopeState::Flat
            | SlopeState::FlatToUp25
            | SlopeState::Up25
            | SlopeState::Up25ToFlat => 3,
            SlopeState::Up25ToUp60 | SlopeState::Up60ToUp25 => 43,
            SlopeState::Up60 => 98,
        }
    }

    pub const fn is_steep(self) -> bool {
        matches!(
            self,
            SlopeState::Up25ToUp60 | SlopeState::Up60 | SlopeState::Up60ToUp25
        )
    }
}
