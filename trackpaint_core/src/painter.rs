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

//! Paints one tile of a canonical piece.
//!
//! Each tile is independent: sprites, then supports, then tunnels, then exactly one
//! segment registration. No state is carried from one tile to the next.

use cgmath::vec3;

use crate::{
    direction::Direction,
    piece::{PieceShape, SupportRule, TileSpec},
    session::{PaintSession, SupportPlace, SupportStyle, TunnelSide},
    slope::TunnelKind,
    sprites::{SpriteKey, SpriteTable},
    track_element::TrackElement,
};

/// Paints `element` as a tile of `shape`. The element's kind, direction and sequence must
/// already be resolved to the canonical piece.
///
/// Returns false (and paints nothing) if the sequence is outside the piece.
pub fn paint_canonical_tile<S: PaintSession + ?Sized>(
    session: &mut S,
    shape: &PieceShape,
    sprites: &SpriteTable,
    element: &TrackElement,
    style: SupportStyle,
) -> bool {
    let Some(tile) = shape.tiles.get(element.sequence as usize) else {
        return false;
    };
    let direction = element.direction;
    let height = element.height;

    if shape.platform {
        if let Some(platform) = sprites.platform(direction) {
            session.submit_sprite(
                platform.sprite,
                platform.offset + vec3(0, 0, height),
                platform.bound_box.raised(height),
            );
        }
    }
    if tile.draws_in(direction) {
        let key = SpriteKey {
            kind: element.kind,
            variant: shape.select_variant(element.chain_lift, element.brake_closed),
            direction,
            sequence: element.sequence,
        };
        for placement in sprites.get(&key) {
            session.submit_sprite(
                placement.sprite,
                placement.offset + vec3(0, 0, height),
                placement.bound_box.raised(height),
            );
        }
    }

    place_supports(session, tile, direction, height, style);
    push_tunnels(session, shape, tile, direction, height);

    session.register_segments(
        tile.segments.rotate(direction),
        height + tile.slope.vertical_extent(),
    );
    true
}

fn place_supports<S: PaintSession + ?Sized>(
    session: &mut S,
    tile: &TileSpec,
    direction: Direction,
    height: i32,
    style: SupportStyle,
) {
    match tile.support {
        SupportRule::None => {}
        SupportRule::Centre => session.place_support(
            SupportPlace::Centre,
            tile.slope.centre_support_offset(),
            height,
            style,
        ),
        SupportRule::Corner(corner) => session.place_support(
            SupportPlace::Corner(corner.rotate(direction)),
            tile.slope.corner_support_offset(),
            height,
            style,
        ),
    }
}

/// Only the two viewer-facing edges can show a tunnel. Labelling edges by the heading of
/// track entering through them, edge 0 is the left side and edge 3 the right side.
fn visible_edge(edge: Direction) -> Option<TunnelSide> {
    match edge.index() {
        0 => Some(TunnelSide::Left),
        3 => Some(TunnelSide::Right),
        _ => None,
    }
}

fn push_tunnels<S: PaintSession + ?Sized>(
    session: &mut S,
    shape: &PieceShape,
    tile: &TileSpec,
    direction: Direction,
    height: i32,
) {
    let tunnel_kind = |kind: TunnelKind| {
        if shape.station && kind == TunnelKind::Flat {
            TunnelKind::SquareFlat
        } else {
            kind
        }
    };
    if let Some(heading) = tile.entry_tunnel {
        if let Some(side) = visible_edge(direction.rotate(heading)) {
            let rule = tile.slope.entry_tunnel();
            session.push_tunnel(side, height + rule.height_offset, tunnel_kind(rule.kind));
        }
    }
    if let Some(heading) = tile.exit_tunnel {
        // The exit edge is the entry edge of whatever tile follows.
        let exit_edge = direction.rotate(heading).opposite();
        if let Some(side) = visible_edge(exit_edge) {
            let rule = tile.slope.exit_tunnel();
            session.push_tunnel(side, height + rule.height_offset, tunnel_kind(rule.kind));
        }
    }
}
