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

//! Properties every painter in the mine train table must satisfy, checked by comparing
//! call logs of a recording session.

#![cfg(feature = "mine_train")]

use trackpaint_rides::{
    mine_train::{get_track_paint_function, MINE_TRAIN_TRACK_PAINT},
    trackpaint_core::{
        direction::Direction,
        dispatch::PaintFunction,
        remap::{LEFT_QUARTER_TURN_3_TO_RIGHT, LEFT_QUARTER_TURN_5_TO_RIGHT},
        segments::SegmentMask,
        session::{PaintCall, RecordingSession, SupportStyle},
        TrackElement, TrackElementKind as K, TrackPaintTable,
    },
};

static LOG_INIT: std::sync::Once = std::sync::Once::new();

fn table() -> &'static TrackPaintTable {
    LOG_INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
    &MINE_TRAIN_TRACK_PAINT
}

fn paint(element: TrackElement) -> Vec<PaintCall> {
    let mut session = RecordingSession::new();
    table().paint(&mut session, &element, SupportStyle::MetalTubes);
    session.into_calls()
}

fn registrations(element: TrackElement) -> Vec<(SegmentMask, i32)> {
    let mut session = RecordingSession::new();
    table().paint(&mut session, &element, SupportStyle::MetalTubes);
    session.registrations()
}

/// Every (kind, direction, sequence) the table can paint
fn all_tiles() -> Vec<(K, Direction, u8)> {
    let table = table();
    let mut tiles = Vec::new();
    for kind in table.supported_kinds() {
        let count = table.sequence_count(kind).unwrap();
        for direction in Direction::ALL {
            for sequence in 0..count {
                tiles.push((kind, direction, sequence));
            }
        }
    }
    tiles
}

#[test]
fn every_tile_registers_exactly_once() {
    for (kind, direction, sequence) in all_tiles() {
        for chain_lift in [false, true] {
            let element =
                TrackElement::new(kind, direction, sequence, 48).with_chain_lift(chain_lift);
            let registered = registrations(element);
            assert_eq!(registered.len(), 1, "{kind} {direction:?} seq {sequence}");
            assert!(registered[0].1 > 48, "{kind} {direction:?} seq {sequence}");
        }
    }
}

#[test]
fn registration_is_last_and_supports_are_single() {
    for (kind, direction, sequence) in all_tiles() {
        let calls = paint(TrackElement::new(kind, direction, sequence, 0));
        assert!(
            matches!(calls.last(), Some(PaintCall::Segments { .. })),
            "{kind} {direction:?} seq {sequence}"
        );
        let supports = calls
            .iter()
            .filter(|c| matches!(c, PaintCall::Support { .. }))
            .count();
        assert!(supports <= 1, "{kind} {direction:?} seq {sequence}");
    }
}

#[test]
fn masks_rotate_with_direction() {
    for (kind, direction, sequence) in all_tiles() {
        let canonical = registrations(TrackElement::new(kind, Direction::D0, sequence, 0));
        let rotated = registrations(TrackElement::new(kind, direction, sequence, 0));
        assert_eq!(
            rotated,
            vec![(canonical[0].0.rotate(direction), canonical[0].1)],
            "{kind} {direction:?} seq {sequence}"
        );
    }
}

#[test]
fn remapped_kinds_paint_as_their_target() {
    let table = table();
    for kind in table.supported_kinds() {
        let Some(PaintFunction::Remapped { target, remap }) = table.function(kind) else {
            continue;
        };
        for direction in Direction::ALL {
            for sequence in 0..table.sequence_count(kind).unwrap() {
                let (target_direction, target_sequence) =
                    remap.apply(direction, sequence).unwrap();
                for chain_lift in [false, true] {
                    assert_eq!(
                        paint(
                            TrackElement::new(kind, direction, sequence, 24)
                                .with_chain_lift(chain_lift)
                        ),
                        paint(
                            TrackElement::new(*target, target_direction, target_sequence, 24)
                                .with_chain_lift(chain_lift)
                        ),
                        "{kind} {direction:?} seq {sequence}"
                    );
                }
            }
        }
    }
}

#[test]
fn right_turns_mirror_left_turns() {
    for (right, left, map) in [
        (
            K::RightQuarterTurn3Tiles,
            K::LeftQuarterTurn3Tiles,
            &LEFT_QUARTER_TURN_3_TO_RIGHT[..],
        ),
        (
            K::RightBankedQuarterTurn3Tiles,
            K::LeftBankedQuarterTurn3Tiles,
            &LEFT_QUARTER_TURN_3_TO_RIGHT[..],
        ),
        (
            K::RightQuarterTurn5Tiles,
            K::LeftQuarterTurn5Tiles,
            &LEFT_QUARTER_TURN_5_TO_RIGHT[..],
        ),
        (
            K::BankedRightQuarterTurn5Tiles,
            K::BankedLeftQuarterTurn5Tiles,
            &LEFT_QUARTER_TURN_5_TO_RIGHT[..],
        ),
    ] {
        for direction in Direction::ALL {
            for (sequence, &mapped) in map.iter().enumerate() {
                assert_eq!(
                    paint(TrackElement::new(right, direction, sequence as u8, 0)),
                    paint(TrackElement::new(left, direction.rotate(3), mapped, 0)),
                    "{right} {direction:?} seq {sequence}"
                );
            }
        }
    }
}

#[test]
fn mirrored_pieces_occupy_mirrored_segments() {
    for (left, right) in [
        (K::SBendLeft, K::SBendRight),
        (K::LeftQuarterTurn3TilesUp25, K::RightQuarterTurn3TilesUp25),
        (K::LeftQuarterTurn5TilesUp25, K::RightQuarterTurn5TilesUp25),
        (K::LeftHalfBankedHelixUpSmall, K::RightHalfBankedHelixUpSmall),
        (K::LeftHalfBankedHelixUpLarge, K::RightHalfBankedHelixUpLarge),
        (K::LeftEighthToDiag, K::RightEighthToDiag),
        (K::LeftEighthBankToDiag, K::RightEighthBankToDiag),
    ] {
        let count = table().sequence_count(left).unwrap();
        assert_eq!(table().sequence_count(right), Some(count));
        for direction in Direction::ALL {
            for sequence in 0..count {
                // Mirroring reverses the sense of rotation.
                let left_direction = Direction::wrapping(4 - direction.index());
                let (left_mask, left_height) =
                    registrations(TrackElement::new(left, left_direction, sequence, 0))[0];
                let (right_mask, right_height) =
                    registrations(TrackElement::new(right, direction, sequence, 0))[0];
                assert_eq!(
                    right_mask,
                    left_mask.mirrored(),
                    "{right} {direction:?} seq {sequence}"
                );
                assert_eq!(right_height, left_height);
            }
        }
    }
}

#[test]
fn down_slopes_are_rotated_up_slopes() {
    for (down, up) in [
        (K::Down25, K::Up25),
        (K::Down60, K::Up60),
        (K::FlatToDown25, K::Up25ToFlat),
        (K::Down25ToFlat, K::FlatToUp25),
        (K::Down25ToDown60, K::Up60ToUp25),
        (K::Down60ToDown25, K::Up25ToUp60),
    ] {
        for direction in Direction::ALL {
            for chain_lift in [false, true] {
                assert_eq!(
                    paint(TrackElement::new(down, direction, 0, 80).with_chain_lift(chain_lift)),
                    paint(
                        TrackElement::new(up, direction.rotate(2), 0, 80)
                            .with_chain_lift(chain_lift)
                    ),
                    "{down} {direction:?}"
                );
            }
        }
    }
}

#[test]
fn long_base_and_diagonal_down_pieces_reverse_their_tiles() {
    for (down, up) in [
        (K::FlatToDown60LongBase, K::Up60ToFlatLongBase),
        (K::Down60ToFlatLongBase, K::FlatToUp60LongBase),
        (K::DiagDown25, K::DiagUp25),
        (K::DiagDown60ToDown25, K::DiagUp25ToUp60),
    ] {
        for direction in Direction::ALL {
            for sequence in 0..4 {
                assert_eq!(
                    paint(TrackElement::new(down, direction, sequence, 0)),
                    paint(TrackElement::new(up, direction.rotate(2), 3 - sequence, 0)),
                    "{down} {direction:?} seq {sequence}"
                );
            }
        }
    }
}

/// Tiles of `kind` that push a tunnel in at least one direction
fn tunnel_tiles(kind: K) -> Vec<u8> {
    let count = table().sequence_count(kind).unwrap();
    (0..count)
        .filter(|&sequence| {
            Direction::ALL.into_iter().any(|direction| {
                paint(TrackElement::new(kind, direction, sequence, 0))
                    .iter()
                    .any(|call| matches!(call, PaintCall::Tunnel { .. }))
            })
        })
        .collect()
}

#[test]
fn tunnels_sit_at_piece_ends() {
    let quarter_3 = [
        K::LeftQuarterTurn3Tiles,
        K::RightQuarterTurn3Tiles,
        K::LeftBankedQuarterTurn3Tiles,
        K::RightBankedQuarterTurn3Tiles,
        K::LeftQuarterTurn3TilesUp25,
        K::RightQuarterTurn3TilesUp25,
        K::LeftQuarterTurn3TilesDown25,
        K::RightQuarterTurn3TilesDown25,
        K::SBendLeft,
        K::SBendRight,
        K::FlatToUp60LongBase,
        K::Up60ToFlatLongBase,
        K::FlatToDown60LongBase,
        K::Down60ToFlatLongBase,
    ];
    let quarter_5 = [
        K::LeftQuarterTurn5Tiles,
        K::RightQuarterTurn5Tiles,
        K::BankedLeftQuarterTurn5Tiles,
        K::BankedRightQuarterTurn5Tiles,
        K::LeftQuarterTurn5TilesUp25,
        K::RightQuarterTurn5TilesUp25,
        K::LeftQuarterTurn5TilesDown25,
        K::RightQuarterTurn5TilesDown25,
    ];
    // Each quarter of a helix has tunnels at both of its ends.
    let small_helices = [
        K::LeftHalfBankedHelixUpSmall,
        K::RightHalfBankedHelixUpSmall,
        K::LeftHalfBankedHelixDownSmall,
        K::RightHalfBankedHelixDownSmall,
    ];
    let large_helices = [
        K::LeftHalfBankedHelixUpLarge,
        K::RightHalfBankedHelixUpLarge,
        K::LeftHalfBankedHelixDownLarge,
        K::RightHalfBankedHelixDownLarge,
    ];
    // The diagonal end of an eighth turn has no tunnel.
    let to_diagonal = [
        K::LeftEighthToDiag,
        K::RightEighthToDiag,
        K::LeftEighthBankToDiag,
        K::RightEighthBankToDiag,
    ];
    let to_orthogonal = [
        K::LeftEighthToOrthogonal,
        K::RightEighthToOrthogonal,
        K::LeftEighthBankToOrthogonal,
        K::RightEighthBankToOrthogonal,
    ];
    let diagonals = [K::DiagFlat, K::DiagUp25, K::DiagDown25, K::DiagDown60ToDown25];

    for (kinds, expected) in [
        (&quarter_3[..], &[0u8, 3][..]),
        (&quarter_5[..], &[0, 6][..]),
        (&small_helices[..], &[0, 3, 4, 7][..]),
        (&large_helices[..], &[0, 6, 7, 13][..]),
        (&to_diagonal[..], &[0][..]),
        (&to_orthogonal[..], &[4][..]),
        (&diagonals[..], &[][..]),
    ] {
        for &kind in kinds {
            assert_eq!(tunnel_tiles(kind), expected, "{kind}");
        }
    }
}

#[test]
fn remapped_tunnels_follow_the_target_tiles() {
    let table = table();
    for kind in table.supported_kinds() {
        let Some(PaintFunction::Remapped { target, remap }) = table.function(kind) else {
            continue;
        };
        let target_tiles = tunnel_tiles(*target);
        let expected: Vec<u8> = (0..table.sequence_count(kind).unwrap())
            .filter(|&sequence| {
                let (_, target_sequence) = remap.apply(Direction::D0, sequence).unwrap();
                target_tiles.contains(&target_sequence)
            })
            .collect();
        assert_eq!(tunnel_tiles(kind), expected, "{kind} from {target}");
    }
}

#[test]
fn painting_is_repeatable() {
    for (kind, direction, sequence) in all_tiles() {
        let element = TrackElement::new(kind, direction, sequence, 112)
            .with_chain_lift(true)
            .with_brake_closed(sequence % 2 == 0);
        assert_eq!(paint(element), paint(element));
    }
}

#[test]
fn flat_scenarios() {
    let plain = paint(TrackElement::new(K::Flat, Direction::D0, 0, 0));
    let chain = paint(TrackElement::new(K::Flat, Direction::D0, 0, 0).with_chain_lift(true));

    fn count(calls: &[PaintCall], f: fn(&PaintCall) -> bool) -> usize {
        calls.iter().filter(|c| f(c)).count()
    }
    for calls in [&plain, &chain] {
        assert_eq!(count(calls, |c| matches!(c, PaintCall::Sprite { .. })), 1);
        assert_eq!(count(calls, |c| matches!(c, PaintCall::Support { .. })), 1);
        assert_eq!(count(calls, |c| matches!(c, PaintCall::Tunnel { .. })), 1);
        assert_eq!(
            calls.last(),
            Some(&PaintCall::Segments {
                mask: SegmentMask::STRAIGHT,
                support_height: 32
            })
        );
    }
    assert_ne!(plain[0], chain[0]);
    assert_eq!(plain[1..], chain[1..]);
}

#[test]
fn down_25_scenario() {
    assert_eq!(
        paint(TrackElement::new(K::Down25, Direction::D1, 0, 40)),
        paint(TrackElement::new(K::Up25, Direction::D3, 0, 40))
    );
}

#[test]
fn right_quarter_turn_scenario() {
    let remapped = LEFT_QUARTER_TURN_3_TO_RIGHT[2];
    assert_eq!(
        paint(TrackElement::new(K::RightQuarterTurn3Tiles, Direction::D0, 2, 0)),
        paint(TrackElement::new(K::LeftQuarterTurn3Tiles, Direction::D3, remapped, 0))
    );
}

#[test]
fn unsupported_kinds_are_not_painted() {
    let supported = table().supported_kinds();
    for &kind in K::ALL {
        if supported.contains(&kind) {
            assert_eq!(get_track_paint_function(kind).map(|p| p.kind()), Some(kind));
        } else {
            assert!(get_track_paint_function(kind).is_none(), "{kind}");
            assert!(paint(TrackElement::new(kind, Direction::D0, 0, 0)).is_empty());
        }
    }
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "out of range")]
fn bad_sequence_fails_loudly() {
    let painter = get_track_paint_function(K::RightQuarterTurn3Tiles).unwrap();
    let mut session = RecordingSession::new();
    painter.paint(
        &mut session,
        &TrackElement::new(K::RightQuarterTurn3Tiles, Direction::D0, 4, 0),
        SupportStyle::default(),
    );
}

#[test]
#[cfg(not(debug_assertions))]
fn bad_sequence_paints_nothing() {
    assert!(paint(TrackElement::new(K::Flat, Direction::D0, 1, 0)).is_empty());
    assert!(paint(TrackElement::new(
        K::LeftHalfBankedHelixDownSmall,
        Direction::D2,
        8,
        0
    ))
    .is_empty());
}
