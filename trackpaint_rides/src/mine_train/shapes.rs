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

//! Tile rules of every canonical mine train piece, at direction 0.
//!
//! Right-hand pieces that have their own sprites are the mirror image of the left-hand
//! piece; right-hand pieces without their own sprites are remapped instead (see the
//! parent module).

use trackpaint_core::{
    piece::{Footprint, PieceShape, SupportRule, TileSpec},
    segments::{Segment, SegmentMask},
    session::Corner,
    slope::SlopeState,
};

const fn mirror_all<const N: usize>(tiles: [TileSpec; N]) -> [TileSpec; N] {
    let mut out = tiles;
    let mut i = 0;
    while i < N {
        out[i] = tiles[i].mirrored();
        i += 1;
    }
    out
}

/// Two consecutive quarter turns; the second is the first turned by `turn` steps. Both
/// quarters keep their end tunnels.
const fn helix<const N: usize, const M: usize>(quarter: [TileSpec; N], turn: u8) -> [TileSpec; M] {
    assert!(M == 2 * N);
    let mut out = [quarter[0]; M];
    let mut i = 0;
    while i < N {
        out[i] = quarter[i];
        out[N + i] = quarter[i].rotated(turn);
        i += 1;
    }
    out
}

const fn banked<const N: usize>(tiles: [TileSpec; N]) -> [TileSpec; N] {
    let mut out = tiles;
    let mut i = 0;
    while i < N {
        if tiles[i].layers > 0 {
            out[i] = tiles[i].layers(2);
        }
        i += 1;
    }
    out
}

const fn with_slope<const N: usize>(tiles: [TileSpec; N], slope: SlopeState) -> [TileSpec; N] {
    let mut out = tiles;
    let mut i = 0;
    while i < N {
        out[i] = TileSpec { slope, ..tiles[i] };
        i += 1;
    }
    out
}

const fn straight_run(slope: SlopeState) -> TileSpec {
    TileSpec::new(SegmentMask::STRAIGHT, slope, Footprint::Straight)
}

const fn curve(segments: SegmentMask) -> TileSpec {
    TileSpec::new(segments, SlopeState::Flat, Footprint::FullTile)
}

/// Where a left turn leaves: the straight axis turned back one step
const LEFT_EXIT: SegmentMask = SegmentMask::STRAIGHT.rotate_steps(3);
const INNER_CORNER: SegmentMask = SegmentMask::of(&[Segment::Left]);
const OUTER_EDGES: SegmentMask =
    SegmentMask::of(&[Segment::Right, Segment::TopRight, Segment::BottomRight]);

const fn diagonal_run(slope: SlopeState) -> [TileSpec; 4] {
    [
        TileSpec::diagonal(0, slope),
        TileSpec::diagonal(1, slope),
        TileSpec::diagonal(2, slope),
        TileSpec::diagonal(3, slope),
    ]
}

const fn diagonal_layered(slope: SlopeState, layers: u8) -> [TileSpec; 4] {
    let tiles = diagonal_run(slope);
    [
        tiles[0].layers(layers),
        tiles[1].layers(layers),
        tiles[2].layers(layers),
        tiles[3].layers(layers),
    ]
}

// Single tile pieces

const FLAT_TILES: &[TileSpec] = &[TileSpec::straight(SlopeState::Flat)];
const UP_25_TILES: &[TileSpec] = &[TileSpec::straight(SlopeState::Up25)];
const UP_60_TILES: &[TileSpec] = &[TileSpec::straight(SlopeState::Up60).layers(2)];
const FLAT_TO_UP_25_TILES: &[TileSpec] = &[TileSpec::straight(SlopeState::FlatToUp25)];
const UP_25_TO_UP_60_TILES: &[TileSpec] = &[TileSpec::straight(SlopeState::Up25ToUp60).layers(2)];
const UP_60_TO_UP_25_TILES: &[TileSpec] = &[TileSpec::straight(SlopeState::Up60ToUp25).layers(2)];
const UP_25_TO_FLAT_TILES: &[TileSpec] = &[TileSpec::straight(SlopeState::Up25ToFlat)];
const BANK_TRANSITION_TILES: &[TileSpec] = &[TileSpec::straight(SlopeState::Flat).layers(2)];
const BANK_TO_UP_25_TILES: &[TileSpec] = &[TileSpec::straight(SlopeState::FlatToUp25).layers(2)];
const UP_25_TO_BANK_TILES: &[TileSpec] = &[TileSpec::straight(SlopeState::Up25ToFlat).layers(2)];
const PHOTO_TILES: &[TileSpec] = &[TileSpec::straight(SlopeState::Flat).layers(2)];

pub static FLAT: PieceShape = PieceShape::new(FLAT_TILES).with_chain_lift();
pub static STATION: PieceShape = PieceShape::new(FLAT_TILES).station();
/// The end station holds the train with the block brake
pub static END_STATION: PieceShape = PieceShape::new(FLAT_TILES).station().with_brake_closed();
pub static UP_25: PieceShape = PieceShape::new(UP_25_TILES).with_chain_lift();
pub static UP_60: PieceShape = PieceShape::new(UP_60_TILES).with_chain_lift();
pub static FLAT_TO_UP_25: PieceShape = PieceShape::new(FLAT_TO_UP_25_TILES).with_chain_lift();
pub static UP_25_TO_UP_60: PieceShape = PieceShape::new(UP_25_TO_UP_60_TILES).with_chain_lift();
pub static UP_60_TO_UP_25: PieceShape = PieceShape::new(UP_60_TO_UP_25_TILES).with_chain_lift();
pub static UP_25_TO_FLAT: PieceShape = PieceShape::new(UP_25_TO_FLAT_TILES).with_chain_lift();
pub static BANK_TRANSITION: PieceShape = PieceShape::new(BANK_TRANSITION_TILES);
pub static BANK_TO_UP_25: PieceShape = PieceShape::new(BANK_TO_UP_25_TILES);
pub static UP_25_TO_BANK: PieceShape = PieceShape::new(UP_25_TO_BANK_TILES);
pub static BANK: PieceShape = PieceShape::new(BANK_TRANSITION_TILES);
pub static BRAKES: PieceShape = PieceShape::new(FLAT_TILES);
pub static BLOCK_BRAKES: PieceShape = PieceShape::new(FLAT_TILES).with_brake_closed();
/// Photo section: the platform plus a camera layer on top of the track
pub static ON_RIDE_PHOTO: PieceShape = PieceShape::new(PHOTO_TILES).with_platform();

// Quarter turns

const LEFT_QUARTER_TURN_3: [TileSpec; 4] = [
    curve(SegmentMask::STRAIGHT.union(INNER_CORNER)).entry(),
    TileSpec::structural(OUTER_EDGES, SlopeState::Flat),
    curve(SegmentMask::corner_wedge(Segment::Left)),
    curve(LEFT_EXIT.union(INNER_CORNER)).exit(3),
];
const LEFT_QUARTER_TURN_3_TILES: &[TileSpec] = &LEFT_QUARTER_TURN_3;
const LEFT_BANKED_QUARTER_TURN_3: [TileSpec; 4] = banked(LEFT_QUARTER_TURN_3);
const LEFT_BANKED_QUARTER_TURN_3_TILES: &[TileSpec] = &LEFT_BANKED_QUARTER_TURN_3;
const LEFT_QUARTER_TURN_3_UP_25: [TileSpec; 4] = with_slope(LEFT_QUARTER_TURN_3, SlopeState::Up25);
const LEFT_QUARTER_TURN_3_UP_25_TILES: &[TileSpec] = &LEFT_QUARTER_TURN_3_UP_25;
const RIGHT_QUARTER_TURN_3_UP_25_TILES: &[TileSpec] = &mirror_all(LEFT_QUARTER_TURN_3_UP_25);

pub static LEFT_QUARTER_TURN_3_TILES_SHAPE: PieceShape = PieceShape::new(LEFT_QUARTER_TURN_3_TILES);
pub static LEFT_BANKED_QUARTER_TURN_3_TILES_SHAPE: PieceShape =
    PieceShape::new(LEFT_BANKED_QUARTER_TURN_3_TILES);
pub static LEFT_QUARTER_TURN_3_TILES_UP_25: PieceShape =
    PieceShape::new(LEFT_QUARTER_TURN_3_UP_25_TILES);
pub static RIGHT_QUARTER_TURN_3_TILES_UP_25: PieceShape =
    PieceShape::new(RIGHT_QUARTER_TURN_3_UP_25_TILES);

const LEFT_QUARTER_TURN_5: [TileSpec; 7] = [
    curve(SegmentMask::STRAIGHT.union(INNER_CORNER)).entry(),
    TileSpec::structural(OUTER_EDGES, SlopeState::Flat),
    curve(SegmentMask::corner_wedge(Segment::Left)),
    curve(SegmentMask::ALL),
    TileSpec::structural(OUTER_EDGES.rotate_steps(3), SlopeState::Flat),
    curve(SegmentMask::corner_wedge(Segment::Left).rotate_steps(3)),
    curve(LEFT_EXIT.union(INNER_CORNER)).exit(3),
];
const LEFT_QUARTER_TURN_5_TILES: &[TileSpec] = &LEFT_QUARTER_TURN_5;
const BANKED_LEFT_QUARTER_TURN_5: [TileSpec; 7] = banked(LEFT_QUARTER_TURN_5);
const BANKED_LEFT_QUARTER_TURN_5_TILES: &[TileSpec] = &BANKED_LEFT_QUARTER_TURN_5;
const LEFT_QUARTER_TURN_5_UP_25: [TileSpec; 7] = with_slope(LEFT_QUARTER_TURN_5, SlopeState::Up25);
const LEFT_QUARTER_TURN_5_UP_25_TILES: &[TileSpec] = &LEFT_QUARTER_TURN_5_UP_25;
const RIGHT_QUARTER_TURN_5_UP_25_TILES: &[TileSpec] = &mirror_all(LEFT_QUARTER_TURN_5_UP_25);

pub static LEFT_QUARTER_TURN_5_TILES_SHAPE: PieceShape = PieceShape::new(LEFT_QUARTER_TURN_5_TILES);
pub static BANKED_LEFT_QUARTER_TURN_5_TILES_SHAPE: PieceShape =
    PieceShape::new(BANKED_LEFT_QUARTER_TURN_5_TILES);
pub static LEFT_QUARTER_TURN_5_TILES_UP_25: PieceShape =
    PieceShape::new(LEFT_QUARTER_TURN_5_UP_25_TILES);
pub static RIGHT_QUARTER_TURN_5_TILES_UP_25: PieceShape =
    PieceShape::new(RIGHT_QUARTER_TURN_5_UP_25_TILES);

// S-bends

const S_BEND_LEFT: [TileSpec; 4] = [
    curve(SegmentMask::STRAIGHT.union(INNER_CORNER)).entry(),
    curve(SegmentMask::corner_wedge(Segment::Left)),
    curve(SegmentMask::corner_wedge(Segment::Right)),
    curve(SegmentMask::STRAIGHT.union(OUTER_EDGES)).exit(0),
];
const S_BEND_LEFT_TILES: &[TileSpec] = &S_BEND_LEFT;
const S_BEND_RIGHT_TILES: &[TileSpec] = &mirror_all(S_BEND_LEFT);

pub static S_BEND_LEFT_SHAPE: PieceShape = PieceShape::new(S_BEND_LEFT_TILES);
pub static S_BEND_RIGHT_SHAPE: PieceShape = PieceShape::new(S_BEND_RIGHT_TILES);

// Half banked helices, two quarter turns each

const LEFT_HELIX_SMALL: [TileSpec; 8] = helix(LEFT_BANKED_QUARTER_TURN_3, 3);
const LEFT_HELIX_SMALL_TILES: &[TileSpec] = &LEFT_HELIX_SMALL;
const RIGHT_HELIX_SMALL_TILES: &[TileSpec] = &mirror_all(LEFT_HELIX_SMALL);
const LEFT_HELIX_LARGE: [TileSpec; 14] = helix(BANKED_LEFT_QUARTER_TURN_5, 3);
const LEFT_HELIX_LARGE_TILES: &[TileSpec] = &LEFT_HELIX_LARGE;
const RIGHT_HELIX_LARGE_TILES: &[TileSpec] = &mirror_all(LEFT_HELIX_LARGE);

pub static LEFT_HALF_BANKED_HELIX_UP_SMALL: PieceShape = PieceShape::new(LEFT_HELIX_SMALL_TILES);
pub static RIGHT_HALF_BANKED_HELIX_UP_SMALL: PieceShape = PieceShape::new(RIGHT_HELIX_SMALL_TILES);
pub static LEFT_HALF_BANKED_HELIX_UP_LARGE: PieceShape = PieceShape::new(LEFT_HELIX_LARGE_TILES);
pub static RIGHT_HALF_BANKED_HELIX_UP_LARGE: PieceShape = PieceShape::new(RIGHT_HELIX_LARGE_TILES);

// Eighth turns from orthogonal onto the diagonal

const LEFT_EIGHTH_TO_DIAG: [TileSpec; 5] = [
    curve(SegmentMask::STRAIGHT.union(INNER_CORNER)).entry(),
    curve(SegmentMask::corner_wedge(Segment::Left)),
    TileSpec::structural(OUTER_EDGES, SlopeState::Flat),
    curve(SegmentMask::corner_wedge(Segment::Right)),
    TileSpec::new(
        SegmentMask::corner_wedge(Segment::Top),
        SlopeState::Flat,
        Footprint::Diagonal,
    )
    .support(SupportRule::Corner(Corner::Top)),
];
const LEFT_EIGHTH_TO_DIAG_TILES: &[TileSpec] = &LEFT_EIGHTH_TO_DIAG;
const RIGHT_EIGHTH_TO_DIAG_TILES: &[TileSpec] = &mirror_all(LEFT_EIGHTH_TO_DIAG);
const LEFT_EIGHTH_BANK_TO_DIAG: [TileSpec; 5] = banked(LEFT_EIGHTH_TO_DIAG);
const LEFT_EIGHTH_BANK_TO_DIAG_TILES: &[TileSpec] = &LEFT_EIGHTH_BANK_TO_DIAG;
const RIGHT_EIGHTH_BANK_TO_DIAG_TILES: &[TileSpec] = &mirror_all(LEFT_EIGHTH_BANK_TO_DIAG);

pub static LEFT_EIGHTH_TO_DIAG_SHAPE: PieceShape = PieceShape::new(LEFT_EIGHTH_TO_DIAG_TILES);
pub static RIGHT_EIGHTH_TO_DIAG_SHAPE: PieceShape = PieceShape::new(RIGHT_EIGHTH_TO_DIAG_TILES);
pub static LEFT_EIGHTH_BANK_TO_DIAG_SHAPE: PieceShape =
    PieceShape::new(LEFT_EIGHTH_BANK_TO_DIAG_TILES);
pub static RIGHT_EIGHTH_BANK_TO_DIAG_SHAPE: PieceShape =
    PieceShape::new(RIGHT_EIGHTH_BANK_TO_DIAG_TILES);

// Diagonals

const DIAG_FLAT_TILES: &[TileSpec] = &diagonal_run(SlopeState::Flat);
const DIAG_UP_25_TILES: &[TileSpec] = &diagonal_run(SlopeState::Up25);
const DIAG_UP_60_TILES: &[TileSpec] = &diagonal_layered(SlopeState::Up60, 2);
const DIAG_FLAT_TO_UP_25_TILES: &[TileSpec] = &diagonal_run(SlopeState::FlatToUp25);
const DIAG_UP_25_TO_UP_60_TILES: &[TileSpec] = &diagonal_layered(SlopeState::Up25ToUp60, 2);
const DIAG_UP_60_TO_UP_25_TILES: &[TileSpec] = &diagonal_layered(SlopeState::Up60ToUp25, 2);
const DIAG_UP_25_TO_FLAT_TILES: &[TileSpec] = &diagonal_run(SlopeState::Up25ToFlat);
const DIAG_BANK_TILES: &[TileSpec] = &diagonal_layered(SlopeState::Flat, 2);
const DIAG_BANK_TO_UP_25_TILES: &[TileSpec] = &diagonal_layered(SlopeState::FlatToUp25, 2);
const DIAG_UP_25_TO_BANK_TILES: &[TileSpec] = &diagonal_layered(SlopeState::Up25ToFlat, 2);

pub static DIAG_FLAT: PieceShape = PieceShape::new(DIAG_FLAT_TILES).with_chain_lift();
pub static DIAG_UP_25: PieceShape = PieceShape::new(DIAG_UP_25_TILES).with_chain_lift();
pub static DIAG_UP_60: PieceShape = PieceShape::new(DIAG_UP_60_TILES).with_chain_lift();
pub static DIAG_FLAT_TO_UP_25: PieceShape =
    PieceShape::new(DIAG_FLAT_TO_UP_25_TILES).with_chain_lift();
pub static DIAG_UP_25_TO_UP_60: PieceShape =
    PieceShape::new(DIAG_UP_25_TO_UP_60_TILES).with_chain_lift();
pub static DIAG_UP_60_TO_UP_25: PieceShape =
    PieceShape::new(DIAG_UP_60_TO_UP_25_TILES).with_chain_lift();
pub static DIAG_UP_25_TO_FLAT: PieceShape =
    PieceShape::new(DIAG_UP_25_TO_FLAT_TILES).with_chain_lift();
pub static DIAG_BANK_TRANSITION: PieceShape = PieceShape::new(DIAG_BANK_TILES);
pub static DIAG_BANK_TO_UP_25: PieceShape = PieceShape::new(DIAG_BANK_TO_UP_25_TILES);
pub static DIAG_UP_25_TO_BANK: PieceShape = PieceShape::new(DIAG_UP_25_TO_BANK_TILES);
pub static DIAG_BANK: PieceShape = PieceShape::new(DIAG_BANK_TILES);
pub static DIAG_BRAKES: PieceShape = PieceShape::new(DIAG_FLAT_TILES);
pub static DIAG_BLOCK_BRAKES: PieceShape = PieceShape::new(DIAG_FLAT_TILES).with_brake_closed();

// Long base 60 degree transitions, four tiles in a straight line

const FLAT_TO_UP_60_LONG_BASE_TILES: &[TileSpec] = &[
    straight_run(SlopeState::FlatToUp25).entry(),
    straight_run(SlopeState::Up25),
    straight_run(SlopeState::Up25ToUp60).layers(2),
    straight_run(SlopeState::Up60).layers(2).exit(0),
];
const UP_60_TO_FLAT_LONG_BASE_TILES: &[TileSpec] = &[
    straight_run(SlopeState::Up60ToUp25).layers(2).entry(),
    straight_run(SlopeState::Up25),
    straight_run(SlopeState::Up25ToFlat),
    straight_run(SlopeState::Flat).exit(0),
];

pub static FLAT_TO_UP_60_LONG_BASE: PieceShape = PieceShape::new(FLAT_TO_UP_60_LONG_BASE_TILES);
pub static UP_60_TO_FLAT_LONG_BASE: PieceShape = PieceShape::new(UP_60_TO_FLAT_LONG_BASE_TILES);
