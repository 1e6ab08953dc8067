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

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DirectionError {
    #[error("Direction {0} is out of range (should be < 4)")]
    OutOfRange(u8),
}

/// One of the four cardinal rotations of a tile, clockwise in units of 90 degrees.
/// Always 0, 1, 2, or 3.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Direction(u8);
impl Direction {
    pub const D0: Direction = Direction(0);
    pub const D1: Direction = Direction(1);
    pub const D2: Direction = Direction(2);
    pub const D3: Direction = Direction(3);

    pub const ALL: [Direction; 4] = [Self::D0, Self::D1, Self::D2, Self::D3];

    /// Builds a direction from any integer, wrapping it into 0..4
    pub const fn wrapping(value: u8) -> Direction {
        Direction(value & 3)
    }

    pub const fn index(&self) -> u8 {
        self.0
    }

    /// Rotates clockwise by `steps` quarter turns. Use 3 to rotate by -1.
    #[inline]
    pub const fn rotate(&self, steps: u8) -> Direction {
        Direction(self.0.wrapping_add(steps) & 3)
    }

    pub const fn opposite(&self) -> Direction {
        self.rotate(2)
    }

    /// True for directions 1 and 3, where the x and y axes of local geometry are swapped
    pub const fn is_odd(&self) -> bool {
        self.0 & 1 == 1
    }
}
impl TryFrom<u8> for Direction {
    type Error = DirectionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < 4 {
            Ok(Direction(value))
        } else {
            Err(DirectionError::OutOfRange(value))
        }
    }
}
impl From<Direction> for u8 {
    fn from(value: Direction) -> Self {
        value.0
    }
}
impl Debug for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("dir{}", self.0))
    }
}

/// Bitset over the four directions
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectionSet(u8);
impl DirectionSet {
    pub const NONE: DirectionSet = DirectionSet(0);
    pub const ALL: DirectionSet = DirectionSet(0b1111);

    pub const fn only(direction: Direction) -> DirectionSet {
        DirectionSet(1 << direction.0)
    }
    pub const fn with(self, direction: Direction) -> DirectionSet {
        DirectionSet(self.0 | (1 << direction.0))
    }
    pub const fn contains(&self, direction: Direction) -> bool {
        self.0 & (1 << direction.0) != 0
    }
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
}
impl Debug for DirectionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(Direction::ALL.iter().filter(|d| self.contains(**d)))
            .finish()
    }
}
