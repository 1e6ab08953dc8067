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

//! Plan-view segments of a tile, used for occlusion and support height queries.
//!
//! The eight outer segments form a ring, clockwise from the far (top) corner of the
//! tile in the isometric view. Corners sit on even ring positions and edge midpoints on
//! odd ones, so a quarter turn of the tile is a rotation of the ring by two positions.
//! The centre segment is not part of the ring and never moves.
/*
              Top
     TopLeft  /\  TopRight
             /  \
       Left <Cntr> Right
             \  /
  BottomLeft  \/  BottomRight
             Bottom
*/

use std::fmt::Debug;

use crate::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Segment {
    Top = 0,
    TopRight = 1,
    Right = 2,
    BottomRight = 3,
    Bottom = 4,
    BottomLeft = 5,
    Left = 6,
    TopLeft = 7,
    Centre = 8,
}
impl Segment {
    pub const ALL: [Segment; 9] = [
        Segment::Top,
        Segment::TopRight,
        Segment::Right,
        Segment::BottomRight,
        Segment::Bottom,
        Segment::BottomLeft,
        Segment::Left,
        Segment::TopLeft,
        Segment::Centre,
    ];

    pub const fn bit(self) -> u16 {
        1 << (self as u8)
    }
}

const RING_BITS: u16 = 0x00ff;
const CENTRE_BIT: u16 = 1 << 8;

/// The set of segments of a tile that are filled by a piece's geometry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SegmentMask(u16);
impl SegmentMask {
    pub const EMPTY: SegmentMask = SegmentMask(0);
    pub const ALL: SegmentMask = SegmentMask(RING_BITS | CENTRE_BIT);

    /// Straight track running from the top-left edge to the bottom-right edge
    pub const STRAIGHT: SegmentMask = SegmentMask::of(&[
        Segment::TopLeft,
        Segment::Centre,
        Segment::BottomRight,
    ]);

    pub const fn of(segments: &[Segment]) -> SegmentMask {
        let mut bits = 0;
        let mut i = 0;
        while i < segments.len() {
            bits |= segments[i].bit();
            i += 1;
        }
        SegmentMask(bits)
    }

    /// The corner segment at `corner` plus its two adjacent edges and the centre. This is
    /// the footprint of one tile of a diagonal piece.
    pub const fn corner_wedge(corner: Segment) -> SegmentMask {
        let ring = corner as u8;
        debug_assert!(ring % 2 == 0, "corner_wedge needs a corner segment");
        let before = (1u8 << ring).rotate_right(1);
        let after = (1u8 << ring).rotate_left(1);
        SegmentMask((1u16 << ring) | before as u16 | after as u16 | CENTRE_BIT)
    }

    pub const fn bits(&self) -> u16 {
        self.0
    }

    pub const fn union(self, other: SegmentMask) -> SegmentMask {
        SegmentMask(self.0 | other.0)
    }

    pub const fn contains(&self, segment: Segment) -> bool {
        self.0 & segment.bit() != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Rotates the mask clockwise by `direction` quarter turns.
    #[inline]
    pub const fn rotate(self, direction: Direction) -> SegmentMask {
        self.rotate_steps(direction.index())
    }

    pub const fn rotate_steps(self, steps: u8) -> SegmentMask {
        let ring = (self.0 & RING_BITS) as u8;
        let rotated = ring.rotate_left(2 * (steps as u32 & 3));
        SegmentMask((self.0 & CENTRE_BIT) | rotated as u16)
    }

    /// Reflects the mask across the axis of a direction-0 straight piece (the line through
    /// the top-left and bottom-right edge midpoints).
    pub const fn mirrored(self) -> SegmentMask {
        let mut bits = self.0 & CENTRE_BIT;
        let mut pos = 0;
        while pos < 8 {
            if self.0 & (1 << pos) != 0 {
                bits |= 1 << ((14 - pos) % 8);
            }
            pos += 1;
        }
        SegmentMask(bits)
    }
}
impl Debug for SegmentMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(Segment::ALL.iter().filter(|s| self.contains(**s)))
            .finish()
    }
}
impl std::ops::BitOr for SegmentMask {
    type Output = SegmentMask;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}
