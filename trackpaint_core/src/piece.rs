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

//! Per-tile rules of a canonical track piece.
//!
//! Everything here is given for direction 0 and rotated by the painter. Sprites are not
//! part of the shape; they live in the [SpriteTable](crate::sprites::SpriteTable).

use serde::{Deserialize, Serialize};

use crate::{
    direction::{Direction, DirectionSet},
    segments::SegmentMask,
    session::{BoundBox, Corner},
    slope::SlopeState,
};

/// How a tile's sprites are boxed for depth sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Footprint {
    /// A strip along the track axis
    Straight,
    /// The whole tile, for curved pieces
    FullTile,
    /// A tile-sized box centred on the corner, for diagonal pieces
    Diagonal,
}
impl Footprint {
    /// Box of the main track layer for direction 0, relative to the tile base
    pub fn bound_box(self, slope: SlopeState) -> BoundBox {
        let depth = slope.bound_box_depth();
        match self {
            Footprint::Straight if slope.is_steep() => {
                BoundBox::new(cgmath::vec3(0, 6, 0), cgmath::vec3(32, 1, depth))
            }
            Footprint::Straight => BoundBox::new(cgmath::vec3(0, 6, 0), cgmath::vec3(32, 20, depth)),
            Footprint::FullTile => BoundBox::new(cgmath::vec3(0, 0, 0), cgmath::vec3(32, 32, depth)),
            Footprint::Diagonal => {
                BoundBox::new(cgmath::vec3(-16, -16, 0), cgmath::vec3(32, 32, depth))
            }
        }
    }
}

/// Box of the front rail layer that banked and steep pieces draw over the train
pub fn front_layer_bound_box() -> BoundBox {
    BoundBox::new(cgmath::vec3(0, 27, 0), cgmath::vec3(32, 1, 26))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupportRule {
    None,
    /// One post under the tile centre
    Centre,
    /// One post under the given corner (for direction 0), used by diagonal tiles
    Corner(Corner),
}

/// Which sprite set a tile is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpriteVariant {
    Normal,
    ChainLift,
    BrakeClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpec {
    /// Occupied segments at direction 0
    pub segments: SegmentMask,
    pub slope: SlopeState,
    pub footprint: Footprint,
    /// Directions in which this tile carries sprites. Diagonal pieces draw each tile
    /// from one direction only.
    pub drawn: DirectionSet,
    /// Number of sprites per drawn direction
    pub layers: u8,
    pub support: SupportRule,
    /// Push a tunnel on the edge the track enters through; the value is the entry
    /// heading relative to the piece direction (0 unless the tile is a turned section).
    pub entry_tunnel: Option<u8>,
    /// Push a tunnel on the edge the piece leaves through; the value is the exit
    /// heading relative to the piece direction (1 for right turns, 3 for left turns).
    pub exit_tunnel: Option<u8>,
}
impl TileSpec {
    /// A one-layer tile drawn in every direction with a centre support and no tunnels
    pub const fn new(segments: SegmentMask, slope: SlopeState, footprint: Footprint) -> TileSpec {
        TileSpec {
            segments,
            slope,
            footprint,
            drawn: DirectionSet::ALL,
            layers: 1,
            support: SupportRule::Centre,
            entry_tunnel: None,
            exit_tunnel: None,
        }
    }

    /// A straight tile that is both the entry and exit of its piece
    pub const fn straight(slope: SlopeState) -> TileSpec {
        TileSpec::new(SegmentMask::STRAIGHT, slope, Footprint::Straight)
            .entry()
            .exit(0)
    }

    /// A tile that only registers its segments and clearance. Its area is covered by the
    /// sprites of the neighbouring tiles.
    pub const fn structural(segments: SegmentMask, slope: SlopeState) -> TileSpec {
        TileSpec {
            drawn: DirectionSet::NONE,
            layers: 0,
            support: SupportRule::None,
            ..TileSpec::new(segments, slope, Footprint::FullTile)
        }
    }

    /// Tile `index` of a four-tile diagonal piece. Index 0 is the entry corner and 3 the
    /// exit corner; 1 and 2 are the tiles either side of the diagonal.
    pub const fn diagonal(index: u8, slope: SlopeState) -> TileSpec {
        let (corner, drawn_in) = match index {
            0 => (Corner::Right, Direction::D3),
            1 => (Corner::Top, Direction::D0),
            2 => (Corner::Bottom, Direction::D2),
            _ => (Corner::Left, Direction::D1),
        };
        TileSpec {
            drawn: DirectionSet::only(drawn_in),
            support: SupportRule::Corner(corner),
            ..TileSpec::new(
                SegmentMask::corner_wedge(corner.segment()),
                slope,
                Footprint::Diagonal,
            )
        }
    }

    pub const fn entry(self) -> TileSpec {
        TileSpec {
            entry_tunnel: Some(0),
            ..self
        }
    }

    pub const fn exit(self, heading: u8) -> TileSpec {
        TileSpec {
            exit_tunnel: Some(heading & 3),
            ..self
        }
    }

    pub const fn layers(self, layers: u8) -> TileSpec {
        TileSpec { layers, ..self }
    }

    pub const fn support(self, support: SupportRule) -> TileSpec {
        TileSpec { support, ..self }
    }

    /// The same tile turned by `steps` quarter turns, for reuse as a later section of a
    /// longer piece (e.g. the second half of a helix). Tunnel headings turn with it.
    pub const fn rotated(self, steps: u8) -> TileSpec {
        TileSpec {
            segments: self.segments.rotate_steps(steps),
            support: match self.support {
                SupportRule::Corner(c) => SupportRule::Corner(c.rotate(Direction::wrapping(steps))),
                other => other,
            },
            entry_tunnel: match self.entry_tunnel {
                Some(heading) => Some(heading.wrapping_add(steps) & 3),
                None => None,
            },
            exit_tunnel: match self.exit_tunnel {
                Some(heading) => Some(heading.wrapping_add(steps) & 3),
                None => None,
            },
            ..self
        }
    }

    /// The same tile of the mirror-image piece (left turn to right turn)
    pub const fn mirrored(self) -> TileSpec {
        TileSpec {
            segments: self.segments.mirrored(),
            support: match self.support {
                SupportRule::Corner(c) => SupportRule::Corner(c.mirrored()),
                other => other,
            },
            entry_tunnel: match self.entry_tunnel {
                Some(heading) => Some((4 - heading) & 3),
                None => None,
            },
            exit_tunnel: match self.exit_tunnel {
                Some(heading) => Some((4 - heading) & 3),
                None => None,
            },
            ..self
        }
    }

    pub fn draws_in(&self, direction: Direction) -> bool {
        self.layers > 0 && self.drawn.contains(direction)
    }
}

/// A canonical piece: the tiles it spans and which extra sprite sets it has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceShape {
    pub tiles: &'static [TileSpec],
    /// Has a separate lift-chain sprite set
    pub chain_lift: bool,
    /// Has a separate closed-brake sprite set
    pub brake_closed: bool,
    /// Draws the station platform under the track
    pub platform: bool,
    /// Tunnels are square (station openings)
    pub station: bool,
}
impl PieceShape {
    pub const fn new(tiles: &'static [TileSpec]) -> PieceShape {
        PieceShape {
            tiles,
            chain_lift: false,
            brake_closed: false,
            platform: false,
            station: false,
        }
    }

    pub const fn with_chain_lift(self) -> PieceShape {
        PieceShape {
            chain_lift: true,
            ..self
        }
    }

    pub const fn with_brake_closed(self) -> PieceShape {
        PieceShape {
            brake_closed: true,
            ..self
        }
    }

    pub const fn with_platform(self) -> PieceShape {
        PieceShape {
            platform: true,
            ..self
        }
    }

    pub const fn station(self) -> PieceShape {
        PieceShape {
            station: true,
            platform: true,
            ..self
        }
    }

    pub fn sequence_count(&self) -> u8 {
        self.tiles.len() as u8
    }

    /// The sprite sets this piece has sprites for
    pub fn variants(&self) -> impl Iterator<Item = SpriteVariant> {
        [
            Some(SpriteVariant::Normal),
            self.chain_lift.then_some(SpriteVariant::ChainLift),
            self.brake_closed.then_some(SpriteVariant::BrakeClosed),
        ]
        .into_iter()
        .flatten()
    }

    /// Picks the sprite set for an element's flags. A closed brake wins over the chain,
    /// and flags the piece has no sprites for are ignored.
    pub fn select_variant(&self, chain_lift: bool, brake_closed: bool) -> SpriteVariant {
        if brake_closed && self.brake_closed {
            SpriteVariant::BrakeClosed
        } else if chain_lift && self.chain_lift {
            SpriteVariant::ChainLift
        } else {
            SpriteVariant::Normal
        }
    }
}
