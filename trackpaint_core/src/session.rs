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

//! The outbound side of track painting.
//!
//! A painter never draws anything itself; it only describes what should be drawn to a
//! [PaintSession], which is owned by the caller for the duration of a frame.

use std::fmt::Debug;

use cgmath::Vector3;
use serde::{Deserialize, Serialize};

use crate::{
    direction::Direction,
    segments::{Segment, SegmentMask},
    slope::TunnelKind,
};

/// A raw index into the sprite atlas
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpriteId(pub u32);
impl Debug for SpriteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("spr:{}", self.0))
    }
}

/// Axis-aligned box used by the isometric painter for depth sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundBox {
    pub offset: Vector3<i32>,
    pub length: Vector3<i32>,
}
impl BoundBox {
    pub const fn new(offset: Vector3<i32>, length: Vector3<i32>) -> BoundBox {
        BoundBox { offset, length }
    }

    /// Rotates a box given for direction 0 into `direction`. Tile-local geometry is
    /// symmetric under a half turn, so only the odd directions change: x and y swap.
    pub fn rotated(&self, direction: Direction) -> BoundBox {
        if direction.is_odd() {
            BoundBox {
                offset: Vector3::new(self.offset.y, self.offset.x, self.offset.z),
                length: Vector3::new(self.length.y, self.length.x, self.length.z),
            }
        } else {
            *self
        }
    }

    pub fn raised(&self, height: i32) -> BoundBox {
        BoundBox {
            offset: self.offset + Vector3::new(0, 0, height),
            length: self.length,
        }
    }
}

/// One of the four corners of a tile, matching the corner segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    Top,
    Right,
    Bottom,
    Left,
}
impl Corner {
    const RING: [Corner; 4] = [Corner::Top, Corner::Right, Corner::Bottom, Corner::Left];

    const fn ring_index(self) -> u8 {
        match self {
            Corner::Top => 0,
            Corner::Right => 1,
            Corner::Bottom => 2,
            Corner::Left => 3,
        }
    }

    pub const fn rotate(self, direction: Direction) -> Corner {
        Self::RING[((self.ring_index() + direction.index()) & 3) as usize]
    }

    /// Reflection matching [SegmentMask::mirrored]
    pub const fn mirrored(self) -> Corner {
        match self {
            Corner::Top => Corner::Left,
            Corner::Left => Corner::Top,
            Corner::Right => Corner::Bottom,
            Corner::Bottom => Corner::Right,
        }
    }

    pub const fn segment(self) -> Segment {
        match self {
            Corner::Top => Segment::Top,
            Corner::Right => Segment::Right,
            Corner::Bottom => Segment::Bottom,
            Corner::Left => Segment::Left,
        }
    }
}

/// Anchor point of a vertical support post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportPlace {
    Centre,
    Corner(Corner),
}

/// The support geometry family chosen by the ride's configuration. Painters pass it
/// through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SupportStyle {
    #[default]
    WoodenTruss,
    WoodenMineTrain,
    MetalTubes,
    MetalBoxed,
    MetalFork,
}

/// The viewer-facing tile edge a tunnel is cut into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TunnelSide {
    Left,
    Right,
}

/// Receives everything a track painter emits for one tile.
pub trait PaintSession {
    /// Submits a sprite. `offset` and `bound_box` are absolute in z (the tile height has
    /// already been added) and tile-local in x and y.
    fn submit_sprite(&mut self, sprite: SpriteId, offset: Vector3<i32>, bound_box: BoundBox);

    /// Requests a vertical support post below `height + offset`.
    fn place_support(&mut self, place: SupportPlace, offset: i32, height: i32, style: SupportStyle);

    /// Records that a wall crossing this edge at `height` needs a cut-out.
    fn push_tunnel(&mut self, side: TunnelSide, height: i32, kind: TunnelKind);

    /// Registers the segments occupied by this tile and the general support height above it.
    /// Called exactly once per painted tile.
    fn register_segments(&mut self, mask: SegmentMask, support_height: i32);
}

/// A single call made into a [PaintSession]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintCall {
    Sprite {
        sprite: SpriteId,
        offset: Vector3<i32>,
        bound_box: BoundBox,
    },
    Support {
        place: SupportPlace,
        offset: i32,
        height: i32,
        style: SupportStyle,
    },
    Tunnel {
        side: TunnelSide,
        height: i32,
        kind: TunnelKind,
    },
    Segments {
        mask: SegmentMask,
        support_height: i32,
    },
}

/// A session that just keeps an ordered log of calls. Useful for tests, and for callers
/// that want to replay a tile's output later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSession {
    calls: Vec<PaintCall>,
}
impl RecordingSession {
    pub fn new() -> RecordingSession {
        Self::default()
    }
    pub fn calls(&self) -> &[PaintCall] {
        &self.calls
    }
    pub fn into_calls(self) -> Vec<PaintCall> {
        self.calls
    }
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn sprites(&self) -> impl Iterator<Item = SpriteId> + '_ {
        self.calls.iter().filter_map(|c| match c {
            PaintCall::Sprite { sprite, .. } => Some(*sprite),
            _ => None,
        })
    }

    /// Every registration made so far, in order
    pub fn registrations(&self) -> Vec<(SegmentMask, i32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PaintCall::Segments {
                    mask,
                    support_height,
                } => Some((*mask, *support_height)),
                _ => None,
            })
            .collect()
    }
}
impl PaintSession for RecordingSession {
    fn submit_sprite(&mut self, sprite: SpriteId, offset: Vector3<i32>, bound_box: BoundBox) {
        self.calls.push(PaintCall::Sprite {
            sprite,
            offset,
            bound_box,
        });
    }

    fn place_support(&mut self, place: SupportPlace, offset: i32, height: i32, style: SupportStyle) {
        self.calls.push(PaintCall::Support {
            place,
            offset,
            height,
            style,
        });
    }

    fn push_tunnel(&mut self, side: TunnelSide, height: i32, kind: TunnelKind) {
        self.calls.push(PaintCall::Tunnel { side, height, kind });
    }

    fn register_segments(&mut self, mask: SegmentMask, support_height: i32) {
        self.calls.push(PaintCall::Segments {
            mask,
            support_height,
        });
    }
}
