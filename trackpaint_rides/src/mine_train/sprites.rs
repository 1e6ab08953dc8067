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

//! Generated sprite block for the mine train.
//!
//! The atlas lays the mine train out as one contiguous block: the four station platform
//! sprites first, then every canonical piece in kind order, and within a piece by
//! variant, direction, sequence and layer. Only tiles that actually draw get indices.

use cgmath::vec3;
use trackpaint_core::{
    direction::Direction,
    piece::{front_layer_bound_box, PieceShape},
    session::{BoundBox, SpriteId},
    sprites::{Placements, SpriteKey, SpritePlacement, SpriteTable},
    track_element::TrackElementKind,
};

fn platform_bound_box() -> BoundBox {
    BoundBox::new(vec3(0, 2, 0), vec3(32, 28, 1))
}

struct SpriteCursor(u32);
impl SpriteCursor {
    fn next(&mut self) -> SpriteId {
        let id = SpriteId(self.0);
        self.0 += 1;
        id
    }
}

/// Builds the sprite table for `pieces`, numbering sprites from `base`.
pub(crate) fn generate_sprite_table(
    base: u32,
    pieces: &[(TrackElementKind, &'static PieceShape)],
) -> SpriteTable {
    let mut cursor = SpriteCursor(base);
    let mut table = SpriteTable::new();

    table.set_platform(Direction::ALL.map(|direction| SpritePlacement {
        sprite: cursor.next(),
        offset: vec3(0, 0, 0),
        bound_box: platform_bound_box().rotated(direction),
    }));

    for &(kind, shape) in pieces {
        for variant in shape.variants() {
            for direction in Direction::ALL {
                for (sequence, tile) in shape.tiles.iter().enumerate() {
                    if !tile.draws_in(direction) {
                        continue;
                    }
                    let placements: Placements = (0..tile.layers)
                        .map(|layer| {
                            let bound_box = if layer == 0 {
                                tile.footprint.bound_box(tile.slope)
                            } else {
                                front_layer_bound_box()
                            };
                            SpritePlacement {
                                sprite: cursor.next(),
                                offset: vec3(0, 0, 0),
                                bound_box: bound_box.rotated(direction),
                            }
                        })
                        .collect();
                    table.insert(
                        SpriteKey {
                            kind,
                            variant,
                            direction,
                            sequence: sequence as u8,
                        },
                        placements,
                    );
                }
            }
        }
    }
    tracing::debug!(
        first = base,
        last = cursor.0.saturating_sub(1),
        "generated mine train sprite block"
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mine_train::shapes;
    use trackpaint_core::piece::SpriteVariant;

    #[test]
    fn platform_comes_first() {
        let table = generate_sprite_table(500, &[(TrackElementKind::Flat, &shapes::FLAT)]);
        assert_eq!(table.platform(Direction::D0).unwrap().sprite, SpriteId(500));
        assert_eq!(table.platform(Direction::D3).unwrap().sprite, SpriteId(503));
        assert_eq!(
            table.platform(Direction::D1).unwrap().bound_box.length,
            vec3(28, 32, 1)
        );
        let key = SpriteKey {
            kind: TrackElementKind::Flat,
            variant: SpriteVariant::Normal,
            direction: Direction::D0,
            sequence: 0,
        };
        assert_eq!(table.get(&key)[0].sprite, SpriteId(504));
    }

    #[test]
    fn chain_sprites_follow_normal_ones() {
        let table = generate_sprite_table(0, &[(TrackElementKind::Flat, &shapes::FLAT)]);
        // Ids 0-3 are the platform, then four plain flats, then four chain flats.
        assert_eq!(table.sprite_count(), 8);
        let key = SpriteKey {
            kind: TrackElementKind::Flat,
            variant: SpriteVariant::ChainLift,
            direction: Direction::D2,
            sequence: 0,
        };
        assert_eq!(table.get(&key)[0].sprite, SpriteId(10));
    }

    #[test]
    fn structural_and_diagonal_tiles() {
        let table = generate_sprite_table(
            0,
            &[
                (
                    TrackElementKind::LeftBankedQuarterTurn3Tiles,
                    &shapes::LEFT_BANKED_QUARTER_TURN_3_TILES_SHAPE,
                ),
                (TrackElementKind::DiagFlat, &shapes::DIAG_FLAT),
            ],
        );
        let banked = |direction, sequence| SpriteKey {
            kind: TrackElementKind::LeftBankedQuarterTurn3Tiles,
            variant: SpriteVariant::Normal,
            direction,
            sequence,
        };
        assert!(!table.contains(&banked(Direction::D0, 1)));
        assert_eq!(table.get(&banked(Direction::D0, 0)).len(), 2);
        assert_eq!(
            table.get(&banked(Direction::D0, 0))[1].bound_box,
            front_layer_bound_box()
        );

        let diag = |direction, sequence| SpriteKey {
            kind: TrackElementKind::DiagFlat,
            variant: SpriteVariant::Normal,
            direction,
            sequence,
        };
        assert!(table.contains(&diag(Direction::D0, 1)));
        assert!(!table.contains(&diag(Direction::D0, 0)));
        assert!(table.contains(&diag(Direction::D3, 0)));
    }
}
