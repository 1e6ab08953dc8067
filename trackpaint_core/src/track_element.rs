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

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

macro_rules! track_element_kinds {
    ($($name:ident),+ $(,)?) => {
        /// Every track piece type known to the layout. Individual rides only support a
        /// subset; see the ride's paint table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum TrackElementKind {
            $($name),+
        }
        impl TrackElementKind {
            pub const ALL: &'static [TrackElementKind] = &[$(TrackElementKind::$name),+];

            pub const fn name(&self) -> &'static str {
                match self {
                    $(TrackElementKind::$name => stringify!($name)),+
                }
            }
        }
    };
}

track_element_kinds! {
    Flat,
    EndStation,
    BeginStation,
    MiddleStation,
    Up25,
    Up60,
    FlatToUp25,
    Up25ToUp60,
    Up60ToUp25,
    Up25ToFlat,
    Down25,
    Down60,
    FlatToDown25,
    Down25ToDown60,
    Down60ToDown25,
    Down25ToFlat,
    LeftQuarterTurn5Tiles,
    RightQuarterTurn5Tiles,
    FlatToLeftBank,
    FlatToRightBank,
    LeftBankToFlat,
    RightBankToFlat,
    BankedLeftQuarterTurn5Tiles,
    BankedRightQuarterTurn5Tiles,
    LeftBankToUp25,
    RightBankToUp25,
    Up25ToLeftBank,
    Up25ToRightBank,
    LeftBankToDown25,
    RightBankToDown25,
    Down25ToLeftBank,
    Down25ToRightBank,
    LeftBank,
    RightBank,
    LeftQuarterTurn5TilesUp25,
    RightQuarterTurn5TilesUp25,
    LeftQuarterTurn5TilesDown25,
    RightQuarterTurn5TilesDown25,
    SBendLeft,
    SBendRight,
    LeftVerticalLoop,
    RightVerticalLoop,
    LeftQuarterTurn3Tiles,
    RightQuarterTurn3Tiles,
    LeftBankedQuarterTurn3Tiles,
    RightBankedQuarterTurn3Tiles,
    LeftQuarterTurn3TilesUp25,
    RightQuarterTurn3TilesUp25,
    LeftQuarterTurn3TilesDown25,
    RightQuarterTurn3TilesDown25,
    LeftQuarterTurn1Tile,
    RightQuarterTurn1Tile,
    LeftTwistDownToUp,
    RightTwistDownToUp,
    LeftTwistUpToDown,
    RightTwistUpToDown,
    HalfLoopUp,
    HalfLoopDown,
    LeftCorkscrewUp,
    RightCorkscrewUp,
    LeftCorkscrewDown,
    RightCorkscrewDown,
    FlatToUp60,
    Up60ToFlat,
    FlatToDown60,
    Down60ToFlat,
    TowerBase,
    TowerSection,
    FlatCovered,
    Up25Covered,
    Up60Covered,
    FlatToUp25Covered,
    Up25ToUp60Covered,
    Up60ToUp25Covered,
    Up25ToFlatCovered,
    Down25Covered,
    Down60Covered,
    FlatToDown25Covered,
    Down25ToDown60Covered,
    Down60ToDown25Covered,
    Down25ToFlatCovered,
    LeftQuarterTurn5TilesCovered,
    RightQuarterTurn5TilesCovered,
    SBendLeftCovered,
    SBendRightCovered,
    LeftQuarterTurn3TilesCovered,
    RightQuarterTurn3TilesCovered,
    LeftHalfBankedHelixUpSmall,
    RightHalfBankedHelixUpSmall,
    LeftHalfBankedHelixDownSmall,
    RightHalfBankedHelixDownSmall,
    LeftHalfBankedHelixUpLarge,
    RightHalfBankedHelixUpLarge,
    LeftHalfBankedHelixDownLarge,
    RightHalfBankedHelixDownLarge,
    LeftQuarterTurn1TileUp60,
    RightQuarterTurn1TileUp60,
    LeftQuarterTurn1TileDown60,
    RightQuarterTurn1TileDown60,
    Brakes,
    Booster,
    Up25LeftBanked,
    Up25RightBanked,
    Waterfall,
    Rapids,
    OnRidePhoto,
    Down25LeftBanked,
    Down25RightBanked,
    Watersplash,
    FlatToUp60LongBase,
    Up60ToFlatLongBase,
    Whirlpool,
    Down60ToFlatLongBase,
    FlatToDown60LongBase,
    CableLiftHill,
    ReverseFreefallSlope,
    ReverseFreefallVertical,
    Up90,
    Down90,
    Up60ToUp90,
    Down90ToDown60,
    Up90ToUp60,
    Down60ToDown90,
    BrakeForDrop,
    LeftEighthToDiag,
    RightEighthToDiag,
    LeftEighthToOrthogonal,
    RightEighthToOrthogonal,
    LeftEighthBankToDiag,
    RightEighthBankToDiag,
    LeftEighthBankToOrthogonal,
    RightEighthBankToOrthogonal,
    DiagFlat,
    DiagUp25,
    DiagUp60,
    DiagFlatToUp25,
    DiagUp25ToUp60,
    DiagUp60ToUp25,
    DiagUp25ToFlat,
    DiagDown25,
    DiagDown60,
    DiagFlatToDown25,
    DiagDown25ToDown60,
    DiagDown60ToDown25,
    DiagDown25ToFlat,
    DiagFlatToUp60,
    DiagUp60ToFlat,
    DiagFlatToDown60,
    DiagDown60ToFlat,
    DiagFlatToLeftBank,
    DiagFlatToRightBank,
    DiagLeftBankToFlat,
    DiagRightBankToFlat,
    DiagLeftBankToUp25,
    DiagRightBankToUp25,
    DiagUp25ToLeftBank,
    DiagUp25ToRightBank,
    DiagLeftBankToDown25,
    DiagRightBankToDown25,
    DiagDown25ToLeftBank,
    DiagDown25ToRightBank,
    DiagLeftBank,
    DiagRightBank,
    BlockBrakes,
    DiagBrakes,
    DiagBlockBrakes,
}

impl std::fmt::Display for TrackElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One tile of a placed track element, as supplied by the track layout. Nothing here
/// outlives a single paint call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackElement {
    pub kind: TrackElementKind,
    pub direction: Direction,
    /// Index of this tile within the multi-tile element
    pub sequence: u8,
    /// Absolute base height of the tile
    pub height: i32,
    pub chain_lift: bool,
    /// Only meaningful for block brakes and the end station
    pub brake_closed: bool,
}
impl TrackElement {
    pub const fn new(kind: TrackElementKind, direction: Direction, sequence: u8, height: i32) -> Self {
        TrackElement {
            kind,
            direction,
            sequence,
            height,
            chain_lift: false,
            brake_closed: false,
        }
    }

    pub const fn with_chain_lift(self, chain_lift: bool) -> Self {
        TrackElement { chain_lift, ..self }
    }

    pub const fn with_brake_closed(self, brake_closed: bool) -> Self {
        TrackElement {
            brake_closed,
            ..self
        }
    }

    /// The same element seen as another kind/direction/sequence; flags carry over.
    pub const fn retargeted(self, kind: TrackElementKind, direction: Direction, sequence: u8) -> Self {
        TrackElement {
            kind,
            direction,
            sequence,
            ..self
        }
    }
}
