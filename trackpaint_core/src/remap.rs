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

//! Reuse of one piece's painter for another piece.
//!
//! A right turn is a left turn traversed backwards, and a down slope is an up slope seen
//! from the other end. Both are expressed as a [Remap]: rotate the direction, then
//! renumber the tiles.

use crate::direction::Direction;

/// Tile order of a 3-tile quarter turn, left to right. Its own inverse.
pub const LEFT_QUARTER_TURN_3_TO_RIGHT: [u8; 4] = [3, 1, 2, 0];
/// Tile order of a 5-tile quarter turn, left to right. Its own inverse.
pub const LEFT_QUARTER_TURN_5_TO_RIGHT: [u8; 7] = [6, 4, 5, 3, 1, 2, 0];
/// Tile order of an eighth turn onto the diagonal, read back from the diagonal end
pub const EIGHTH_TO_DIAG_TO_ORTHOGONAL: [u8; 5] = [4, 2, 3, 1, 0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceMap {
    Identity,
    /// `sequence -> table[sequence]`
    Table(&'static [u8]),
    /// `sequence -> len - 1 - sequence`
    Reversed { len: u8 },
    /// A two-quarter helix painted with one quarter of the target. Tiles in the second
    /// half first rotate the direction by `second_half_rotation` and drop back into the
    /// first half, then go through `table`.
    SplitHalves {
        half: u8,
        table: &'static [u8],
        second_half_rotation: u8,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remap {
    /// Quarter turns added to the caller's direction (3 means -1)
    pub rotation: u8,
    pub sequence: SequenceMap,
}
impl Remap {
    pub const fn rotate(rotation: u8) -> Remap {
        Remap {
            rotation,
            sequence: SequenceMap::Identity,
        }
    }

    /// Down slope painted as the up slope, single tile
    pub const fn inverted() -> Remap {
        Self::rotate(2)
    }

    /// Down slope painted as the up slope, for pieces whose tiles run the other way
    pub const fn inverted_reversed(len: u8) -> Remap {
        Remap {
            rotation: 2,
            sequence: SequenceMap::Reversed { len },
        }
    }

    pub const fn table(rotation: u8, table: &'static [u8]) -> Remap {
        Remap {
            rotation,
            sequence: SequenceMap::Table(table),
        }
    }

    pub const fn split_halves(rotation: u8, table: &'static [u8], second_half_rotation: u8) -> Remap {
        Remap {
            rotation,
            sequence: SequenceMap::SplitHalves {
                half: table.len() as u8,
                table,
                second_half_rotation,
            },
        }
    }

    /// Number of tiles the caller has, given the number of tiles the target has. This is
    /// the domain over which [Remap::apply] must be total.
    pub fn caller_sequence_count(&self, target_count: u8) -> u8 {
        match self.sequence {
            SequenceMap::Identity => target_count,
            SequenceMap::Table(table) => table.len() as u8,
            SequenceMap::Reversed { len } => len,
            SequenceMap::SplitHalves { half, .. } => half * 2,
        }
    }

    /// Maps a caller's (direction, sequence) onto the target's. Returns None if the
    /// sequence is outside the caller's range.
    pub fn apply(&self, direction: Direction, sequence: u8) -> Option<(Direction, u8)> {
        let direction = direction.rotate(self.rotation);
        match self.sequence {
            SequenceMap::Identity => Some((direction, sequence)),
            SequenceMap::Table(table) => table.get(sequence as usize).map(|&s| (direction, s)),
            SequenceMap::Reversed { len } => {
                if sequence < len {
                    Some((direction, len - 1 - sequence))
                } else {
                    None
                }
            }
            SequenceMap::SplitHalves {
                half,
                table,
                second_half_rotation,
            } => {
                let (direction, sequence) = if sequence >= half {
                    (direction.rotate(second_half_rotation), sequence - half)
                } else {
                    (direction, sequence)
                };
                table.get(sequence as usize).map(|&s| (direction, s))
            }
        }
    }
}
