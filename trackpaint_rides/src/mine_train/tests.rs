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

use cgmath::vec3;
use trackpaint_core::{
    direction::Direction,
    dispatch::TrackPaintError,
    piece::Footprint,
    segments::SegmentMask,
    session::{PaintCall, SpriteId, SupportPlace, SupportStyle, TunnelSide},
    slope::{SlopeState, TunnelKind},
    TrackElement, TrackElementKind as K,
};

use super::*;
use crate::test_support::{init_logging, paint_calls, TempDir};

fn table() -> &'static TrackPaintTable {
    init_logging();
    &MINE_TRAIN_TRACK_PAINT
}

#[test]
fn builds_with_default_settings() {
    let table = table();
    assert_eq!(table.ride(), RIDE_NAME);
    assert!(table.sprites().has_platform());
    // 56 canonical pieces and 44 remapped kinds
    assert_eq!(table.supported_kinds().len(), 100);
}

#[test]
fn unsupported_kinds_have_no_painter() {
    for kind in [
        K::Booster,
        K::LeftVerticalLoop,
        K::LeftCorkscrewUp,
        K::FlatCovered,
        K::Up90,
        K::LeftQuarterTurn1Tile,
        K::DiagFlatToUp60,
    ] {
        assert!(get_track_paint_function(kind).is_none(), "{kind}");
        assert!(paint_calls(table(), &TrackElement::new(kind, Direction::D0, 0, 0)).is_empty());
    }
}

#[test]
fn sequence_counts() {
    let table = table();
    for (kind, count) in [
        (K::Flat, 1),
        (K::Down60, 1),
        (K::LeftQuarterTurn3Tiles, 4),
        (K::RightBankedQuarterTurn3Tiles, 4),
        (K::RightQuarterTurn5Tiles, 7),
        (K::SBendRight, 4),
        (K::LeftHalfBankedHelixDownSmall, 8),
        (K::RightHalfBankedHelixDownLarge, 14),
        (K::LeftEighthBankToOrthogonal, 5),
        (K::DiagDown25ToRightBank, 4),
        (K::FlatToDown60LongBase, 4),
    ] {
        assert_eq!(table.sequence_count(kind), Some(count), "{kind}");
    }
    assert_eq!(table.sequence_count(K::Booster), None);
}

#[test]
fn straight_flat() {
    let calls = paint_calls(table(), &TrackElement::new(K::Flat, Direction::D0, 0, 0));
    assert_eq!(
        calls,
        vec![
            PaintCall::Sprite {
                sprite: SpriteId(crate::DEFAULT_SPRITE_BASE + 4),
                offset: vec3(0, 0, 0),
                bound_box: Footprint::Straight.bound_box(SlopeState::Flat),
            },
            PaintCall::Support {
                place: SupportPlace::Centre,
                offset: 0,
                height: 0,
                style: SupportStyle::default(),
            },
            PaintCall::Tunnel {
                side: TunnelSide::Left,
                height: 0,
                kind: TunnelKind::Flat,
            },
            PaintCall::Segments {
                mask: SegmentMask::STRAIGHT,
                support_height: 32,
            },
        ]
    );

    // The chain only swaps the sprite.
    let chain = paint_calls(
        table(),
        &TrackElement::new(K::Flat, Direction::D0, 0, 0).with_chain_lift(true),
    );
    assert_eq!(chain.len(), calls.len());
    assert_eq!(
        chain[0],
        PaintCall::Sprite {
            sprite: SpriteId(crate::DEFAULT_SPRITE_BASE + 8),
            offset: vec3(0, 0, 0),
            bound_box: Footprint::Straight.bound_box(SlopeState::Flat),
        }
    );
    assert_eq!(chain[1..], calls[1..]);
}

#[test]
fn station_draws_platform_and_square_tunnels() {
    let calls = paint_calls(
        table(),
        &TrackElement::new(K::BeginStation, Direction::D1, 0, 16),
    );
    let platform = table().sprites().platform(Direction::D1).unwrap();
    assert_eq!(
        calls[0],
        PaintCall::Sprite {
            sprite: platform.sprite,
            offset: vec3(0, 0, 16),
            bound_box: platform.bound_box.raised(16),
        }
    );
    assert!(calls.contains(&PaintCall::Tunnel {
        side: TunnelSide::Right,
        height: 16,
        kind: TunnelKind::SquareFlat,
    }));
    assert_eq!(
        calls.last(),
        Some(&PaintCall::Segments {
            mask: SegmentMask::STRAIGHT.rotate(Direction::D1),
            support_height: 48,
        })
    );
}

#[test]
fn brake_variants() {
    let sprites = |element: TrackElement| -> Vec<SpriteId> {
        paint_calls(table(), &element)
            .into_iter()
            .filter_map(|call| match call {
                PaintCall::Sprite { sprite, .. } => Some(sprite),
                _ => None,
            })
            .collect()
    };
    let open = sprites(TrackElement::new(K::BlockBrakes, Direction::D2, 0, 0));
    let closed = sprites(TrackElement::new(K::BlockBrakes, Direction::D2, 0, 0).with_brake_closed(true));
    let closed_chain = sprites(
        TrackElement::new(K::BlockBrakes, Direction::D2, 0, 0)
            .with_brake_closed(true)
            .with_chain_lift(true),
    );
    assert_ne!(open, closed);
    assert_eq!(closed, closed_chain);

    // Plain brakes have no chain or closed sprites.
    let brakes = sprites(TrackElement::new(K::Brakes, Direction::D0, 0, 0));
    let flagged = sprites(
        TrackElement::new(K::Brakes, Direction::D0, 0, 0)
            .with_chain_lift(true)
            .with_brake_closed(true),
    );
    assert_eq!(brakes, flagged);
}

#[test]
fn on_ride_photo_draws_platform_and_camera() {
    let calls = paint_calls(table(), &TrackElement::new(K::OnRidePhoto, Direction::D0, 0, 0));
    let sprite_calls = calls
        .iter()
        .filter(|call| matches!(call, PaintCall::Sprite { .. }))
        .count();
    assert_eq!(sprite_calls, 3);
    // Not a station, so the tunnel stays round.
    assert!(calls.contains(&PaintCall::Tunnel {
        side: TunnelSide::Left,
        height: 0,
        kind: TunnelKind::Flat,
    }));
}

#[test]
fn diagonal_tiles_use_corner_supports() {
    let calls = paint_calls(table(), &TrackElement::new(K::DiagUp25, Direction::D0, 1, 40));
    assert!(calls.contains(&PaintCall::Support {
        place: SupportPlace::Corner(trackpaint_core::session::Corner::Top),
        offset: 9,
        height: 40,
        style: SupportStyle::default(),
    }));
    assert!(!calls
        .iter()
        .any(|call| matches!(call, PaintCall::Tunnel { .. })));
}

#[test]
fn configured_sprite_table_replaces_generated() {
    init_logging();
    let dir = TempDir::new();
    let path = dir.path().join("mine_train_sprites.ron");
    std::fs::write(&path, table().sprites().to_ron().unwrap()).unwrap();
    let settings = TrackPaintSettings {
        sprite_table: Some(path),
        sprite_base: 0,
    };
    let loaded = build_mine_train_table(&settings).unwrap();
    let element = TrackElement::new(K::LeftHalfBankedHelixDownLarge, Direction::D3, 9, 64);
    assert_eq!(paint_calls(&loaded, &element), paint_calls(table(), &element));
}

#[test]
fn incomplete_sprite_table_is_rejected() {
    init_logging();
    let dir = TempDir::new();
    let path = dir.path().join("empty.ron");
    std::fs::write(&path, "(entries: [])").unwrap();
    let settings = TrackPaintSettings {
        sprite_table: Some(path),
        ..Default::default()
    };
    let err = build_mine_train_table(&settings).unwrap_err();
    assert!(err.downcast_ref::<TrackPaintError>().is_some(), "{err:?}");
}

#[test]
fn missing_sprite_table_file_is_an_error() {
    let settings = TrackPaintSettings {
        sprite_table: Some(std::env::temp_dir().join("trackpaint-does-not-exist.ron")),
        ..Default::default()
    };
    assert!(build_mine_train_table(&settings).is_err());
}
