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

//! Track painting for the Vekoma mine train.
//!
//! Canonical pieces carry their own tile rules and sprites. Everything else reuses one
//! of them: down pieces are the up piece seen from the far end, right turns without
//! their own sprites are left turns traversed backwards, and down helices are one
//! quarter of the opposite up helix painted twice.

use anyhow::Result;
use trackpaint_core::{
    dispatch::{TrackPaintTableBuilder, TrackPainter},
    remap::{
        Remap, EIGHTH_TO_DIAG_TO_ORTHOGONAL, LEFT_QUARTER_TURN_3_TO_RIGHT,
        LEFT_QUARTER_TURN_5_TO_RIGHT,
    },
    TrackElementKind as K, TrackPaintTable,
};

use crate::settings::TrackPaintSettings;

pub mod shapes;
mod sprites;

#[cfg(test)]
mod tests;

/// Name used for the ride in logs and diagnostics
pub const RIDE_NAME: &str = "Vekoma mine train";

/// Builds the mine train table. Fails only if the configured sprite table cannot be read
/// or does not cover every drawn tile.
pub fn build_mine_train_table(settings: &TrackPaintSettings) -> Result<TrackPaintTable> {
    let mut builder = TrackPaintTableBuilder::new(RIDE_NAME);
    register_pieces(&mut builder);
    register_remaps(&mut builder);
    let sprites = match settings.load_sprite_table()? {
        Some(table) => table,
        None => sprites::generate_sprite_table(settings.sprite_base, &builder.pieces()),
    };
    builder.sprites(sprites);
    builder.build()
}

lazy_static::lazy_static! {
    /// The mine train table with built-in sprites, built on first use
    pub static ref MINE_TRAIN_TRACK_PAINT: TrackPaintTable =
        build_mine_train_table(&TrackPaintSettings::default())
            .expect("Built-in mine train track paint table failed validation");
}

/// The painter for `kind`, or None if the mine train has no such piece
pub fn get_track_paint_function(kind: K) -> Option<TrackPainter<'static>> {
    MINE_TRAIN_TRACK_PAINT.get(kind)
}

fn register_pieces(builder: &mut TrackPaintTableBuilder) {
    builder
        .piece(K::Flat, &shapes::FLAT)
        .piece(K::EndStation, &shapes::END_STATION)
        .piece(K::BeginStation, &shapes::STATION)
        .piece(K::MiddleStation, &shapes::STATION)
        .piece(K::Up25, &shapes::UP_25)
        .piece(K::Up60, &shapes::UP_60)
        .piece(K::FlatToUp25, &shapes::FLAT_TO_UP_25)
        .piece(K::Up25ToUp60, &shapes::UP_25_TO_UP_60)
        .piece(K::Up60ToUp25, &shapes::UP_60_TO_UP_25)
        .piece(K::Up25ToFlat, &shapes::UP_25_TO_FLAT)
        .piece(K::FlatToLeftBank, &shapes::BANK_TRANSITION)
        .piece(K::FlatToRightBank, &shapes::BANK_TRANSITION)
        .piece(K::LeftBankToUp25, &shapes::BANK_TO_UP_25)
        .piece(K::RightBankToUp25, &shapes::BANK_TO_UP_25)
        .piece(K::Up25ToLeftBank, &shapes::UP_25_TO_BANK)
        .piece(K::Up25ToRightBank, &shapes::UP_25_TO_BANK)
        .piece(K::LeftBank, &shapes::BANK)
        .piece(K::Brakes, &shapes::BRAKES)
        .piece(K::BlockBrakes, &shapes::BLOCK_BRAKES)
        .piece(K::OnRidePhoto, &shapes::ON_RIDE_PHOTO);

    builder
        .piece(K::LeftQuarterTurn5Tiles, &shapes::LEFT_QUARTER_TURN_5_TILES_SHAPE)
        .piece(
            K::BankedLeftQuarterTurn5Tiles,
            &shapes::BANKED_LEFT_QUARTER_TURN_5_TILES_SHAPE,
        )
        .piece(K::LeftQuarterTurn5TilesUp25, &shapes::LEFT_QUARTER_TURN_5_TILES_UP_25)
        .piece(K::RightQuarterTurn5TilesUp25, &shapes::RIGHT_QUARTER_TURN_5_TILES_UP_25)
        .piece(K::LeftQuarterTurn3Tiles, &shapes::LEFT_QUARTER_TURN_3_TILES_SHAPE)
        .piece(
            K::LeftBankedQuarterTurn3Tiles,
            &shapes::LEFT_BANKED_QUARTER_TURN_3_TILES_SHAPE,
        )
        .piece(K::LeftQuarterTurn3TilesUp25, &shapes::LEFT_QUARTER_TURN_3_TILES_UP_25)
        .piece(K::RightQuarterTurn3TilesUp25, &shapes::RIGHT_QUARTER_TURN_3_TILES_UP_25)
        .piece(K::SBendLeft, &shapes::S_BEND_LEFT_SHAPE)
        .piece(K::SBendRight, &shapes::S_BEND_RIGHT_SHAPE)
        .piece(K::LeftHalfBankedHelixUpSmall, &shapes::LEFT_HALF_BANKED_HELIX_UP_SMALL)
        .piece(K::RightHalfBankedHelixUpSmall, &shapes::RIGHT_HALF_BANKED_HELIX_UP_SMALL)
        .piece(K::LeftHalfBankedHelixUpLarge, &shapes::LEFT_HALF_BANKED_HELIX_UP_LARGE)
        .piece(K::RightHalfBankedHelixUpLarge, &shapes::RIGHT_HALF_BANKED_HELIX_UP_LARGE)
        .piece(K::LeftEighthToDiag, &shapes::LEFT_EIGHTH_TO_DIAG_SHAPE)
        .piece(K::RightEighthToDiag, &shapes::RIGHT_EIGHTH_TO_DIAG_SHAPE)
        .piece(K::LeftEighthBankToDiag, &shapes::LEFT_EIGHTH_BANK_TO_DIAG_SHAPE)
        .piece(K::RightEighthBankToDiag, &shapes::RIGHT_EIGHTH_BANK_TO_DIAG_SHAPE);

    builder
        .piece(K::DiagFlat, &shapes::DIAG_FLAT)
        .piece(K::DiagUp25, &shapes::DIAG_UP_25)
        .piece(K::DiagUp60, &shapes::DIAG_UP_60)
        .piece(K::DiagFlatToUp25, &shapes::DIAG_FLAT_TO_UP_25)
        .piece(K::DiagUp25ToUp60, &shapes::DIAG_UP_25_TO_UP_60)
        .piece(K::DiagUp60ToUp25, &shapes::DIAG_UP_60_TO_UP_25)
        .piece(K::DiagUp25ToFlat, &shapes::DIAG_UP_25_TO_FLAT)
        .piece(K::DiagFlatToLeftBank, &shapes::DIAG_BANK_TRANSITION)
        .piece(K::DiagFlatToRightBank, &shapes::DIAG_BANK_TRANSITION)
        .piece(K::DiagLeftBankToUp25, &shapes::DIAG_BANK_TO_UP_25)
        .piece(K::DiagRightBankToUp25, &shapes::DIAG_BANK_TO_UP_25)
        .piece(K::DiagUp25ToLeftBank, &shapes::DIAG_UP_25_TO_BANK)
        .piece(K::DiagUp25ToRightBank, &shapes::DIAG_UP_25_TO_BANK)
        .piece(K::DiagLeftBank, &shapes::DIAG_BANK)
        .piece(K::DiagBrakes, &shapes::DIAG_BRAKES)
        .piece(K::DiagBlockBrakes, &shapes::DIAG_BLOCK_BRAKES)
        .piece(K::FlatToUp60LongBase, &shapes::FLAT_TO_UP_60_LONG_BASE)
        .piece(K::Up60ToFlatLongBase, &shapes::UP_60_TO_FLAT_LONG_BASE);
}

fn register_remaps(builder: &mut TrackPaintTableBuilder) {
    const Q3: &[u8] = &LEFT_QUARTER_TURN_3_TO_RIGHT;
    const Q5: &[u8] = &LEFT_QUARTER_TURN_5_TO_RIGHT;
    const EIGHTH: &[u8] = &EIGHTH_TO_DIAG_TO_ORTHOGONAL;
    const DIAG: Remap = Remap::inverted_reversed(4);

    // Down slopes and bank exits: the up piece seen from the other end
    builder
        .remapped(K::Down25, K::Up25, Remap::inverted())
        .remapped(K::Down60, K::Up60, Remap::inverted())
        .remapped(K::FlatToDown25, K::Up25ToFlat, Remap::inverted())
        .remapped(K::Down25ToDown60, K::Up60ToUp25, Remap::inverted())
        .remapped(K::Down60ToDown25, K::Up25ToUp60, Remap::inverted())
        .remapped(K::Down25ToFlat, K::FlatToUp25, Remap::inverted())
        .remapped(K::LeftBankToFlat, K::FlatToRightBank, Remap::inverted())
        .remapped(K::RightBankToFlat, K::FlatToLeftBank, Remap::inverted())
        .remapped(K::LeftBankToDown25, K::Up25ToRightBank, Remap::inverted())
        .remapped(K::RightBankToDown25, K::Up25ToLeftBank, Remap::inverted())
        .remapped(K::Down25ToLeftBank, K::RightBankToUp25, Remap::inverted())
        .remapped(K::Down25ToRightBank, K::LeftBankToUp25, Remap::inverted())
        .remapped(K::RightBank, K::LeftBank, Remap::inverted());

    // Right turns: the left turn traversed backwards
    builder
        .remapped(K::RightQuarterTurn5Tiles, K::LeftQuarterTurn5Tiles, Remap::table(3, Q5))
        .remapped(
            K::BankedRightQuarterTurn5Tiles,
            K::BankedLeftQuarterTurn5Tiles,
            Remap::table(3, Q5),
        )
        .remapped(
            K::LeftQuarterTurn5TilesDown25,
            K::RightQuarterTurn5TilesUp25,
            Remap::table(1, Q5),
        )
        .remapped(
            K::RightQuarterTurn5TilesDown25,
            K::LeftQuarterTurn5TilesUp25,
            Remap::table(3, Q5),
        )
        .remapped(K::RightQuarterTurn3Tiles, K::LeftQuarterTurn3Tiles, Remap::table(3, Q3))
        .remapped(
            K::RightBankedQuarterTurn3Tiles,
            K::LeftBankedQuarterTurn3Tiles,
            Remap::table(3, Q3),
        )
        .remapped(
            K::LeftQuarterTurn3TilesDown25,
            K::RightQuarterTurn3TilesUp25,
            Remap::table(1, Q3),
        )
        .remapped(
            K::RightQuarterTurn3TilesDown25,
            K::LeftQuarterTurn3TilesUp25,
            Remap::table(3, Q3),
        );

    // Down helices: one quarter of the opposite up helix, twice
    builder
        .remapped(
            K::LeftHalfBankedHelixDownSmall,
            K::RightHalfBankedHelixUpSmall,
            Remap::split_halves(1, Q3, 3),
        )
        .remapped(
            K::RightHalfBankedHelixDownSmall,
            K::LeftHalfBankedHelixUpSmall,
            Remap::split_halves(3, Q3, 1),
        )
        .remapped(
            K::LeftHalfBankedHelixDownLarge,
            K::RightHalfBankedHelixUpLarge,
            Remap::split_halves(1, Q5, 3),
        )
        .remapped(
            K::RightHalfBankedHelixDownLarge,
            K::LeftHalfBankedHelixUpLarge,
            Remap::split_halves(3, Q5, 1),
        );

    builder
        .remapped(K::LeftEighthToOrthogonal, K::RightEighthToDiag, Remap::table(2, EIGHTH))
        .remapped(K::RightEighthToOrthogonal, K::LeftEighthToDiag, Remap::table(3, EIGHTH))
        .remapped(
            K::LeftEighthBankToOrthogonal,
            K::RightEighthBankToDiag,
            Remap::table(2, EIGHTH),
        )
        .remapped(
            K::RightEighthBankToOrthogonal,
            K::LeftEighthBankToDiag,
            Remap::table(3, EIGHTH),
        );

    // Diagonal and long base down pieces also run their tiles in reverse
    builder
        .remapped(K::DiagDown25, K::DiagUp25, DIAG)
        .remapped(K::DiagDown60, K::DiagUp60, DIAG)
        .remapped(K::DiagFlatToDown25, K::DiagUp25ToFlat, DIAG)
        .remapped(K::DiagDown25ToDown60, K::DiagUp60ToUp25, DIAG)
        .remapped(K::DiagDown60ToDown25, K::DiagUp25ToUp60, DIAG)
        .remapped(K::DiagDown25ToFlat, K::DiagFlatToUp25, DIAG)
        .remapped(K::DiagLeftBankToFlat, K::DiagFlatToRightBank, DIAG)
        .remapped(K::DiagRightBankToFlat, K::DiagFlatToLeftBank, DIAG)
        .remapped(K::DiagLeftBankToDown25, K::DiagUp25ToRightBank, DIAG)
        .remapped(K::DiagRightBankToDown25, K::DiagUp25ToLeftBank, DIAG)
        .remapped(K::DiagDown25ToLeftBank, K::DiagRightBankToUp25, DIAG)
        .remapped(K::DiagDown25ToRightBank, K::DiagLeftBankToUp25, DIAG)
        .remapped(K::DiagRightBank, K::DiagLeftBank, DIAG)
        .remapped(K::FlatToDown60LongBase, K::Up60ToFlatLongBase, DIAG)
        .remapped(K::Down60ToFlatLongBase, K::FlatToUp60LongBase, DIAG);
}
