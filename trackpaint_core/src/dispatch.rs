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

//! Kind to painter dispatch for one ride.
//!
//! A ride registers a [PieceShape] for each canonical kind and a [Remap] onto another
//! kind for every kind that reuses a sibling's painter. The result is a small DAG that
//! is validated once, when the table is built.

use anyhow::{ensure, Result};
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::{
    direction::Direction,
    painter::paint_canonical_tile,
    piece::PieceShape,
    remap::Remap,
    session::{PaintSession, SupportStyle},
    sprites::{SpriteKey, SpriteTable},
    track_element::{TrackElement, TrackElementKind},
};

/// Longest remap chain we follow. Real rides need at most two hops.
const MAX_REMAP_DEPTH: usize = 8;

#[derive(Error, Debug)]
pub enum TrackPaintError {
    #[error("Track kind {0} registered twice")]
    DuplicateKind(TrackElementKind),
    #[error("Track kind {0} remaps onto {1}, which has no painter")]
    MissingTarget(TrackElementKind, TrackElementKind),
    #[error("Remapping track kind {0} loops back onto itself")]
    RemapCycle(TrackElementKind),
    #[error("Track kind {kind} sequence {sequence} remaps onto {target} sequence {target_sequence}, but {target} only has {target_count} tiles")]
    RemapOutOfRange {
        kind: TrackElementKind,
        sequence: u8,
        target: TrackElementKind,
        target_sequence: u8,
        target_count: u8,
    },
    #[error("Track kind {0} has no tiles")]
    EmptyPiece(TrackElementKind),
    #[error("No sprites for drawn tile {0:?}")]
    MissingSprites(SpriteKey),
    #[error("Track kind {0} draws a station platform but the sprite table has none")]
    MissingPlatform(TrackElementKind),
}

/// What the dispatch table holds for a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintFunction {
    Piece(&'static PieceShape),
    Remapped {
        target: TrackElementKind,
        remap: Remap,
    },
}

pub struct TrackPaintTableBuilder {
    ride: String,
    functions: FxHashMap<TrackElementKind, PaintFunction>,
    sprites: SpriteTable,
    errors: Vec<TrackPaintError>,
}
impl TrackPaintTableBuilder {
    pub fn new(ride: impl Into<String>) -> TrackPaintTableBuilder {
        TrackPaintTableBuilder {
            ride: ride.into(),
            functions: FxHashMap::default(),
            sprites: SpriteTable::new(),
            errors: Vec::new(),
        }
    }

    fn register(&mut self, kind: TrackElementKind, function: PaintFunction) -> &mut Self {
        if self.functions.insert(kind, function).is_some() {
            self.errors.push(TrackPaintError::DuplicateKind(kind));
        }
        self
    }

    pub fn piece(&mut self, kind: TrackElementKind, shape: &'static PieceShape) -> &mut Self {
        self.register(kind, PaintFunction::Piece(shape))
    }

    pub fn remapped(
        &mut self,
        kind: TrackElementKind,
        target: TrackElementKind,
        remap: Remap,
    ) -> &mut Self {
        self.register(kind, PaintFunction::Remapped { target, remap })
    }

    pub fn sprites(&mut self, sprites: SpriteTable) -> &mut Self {
        self.sprites = sprites;
        self
    }

    /// The canonical pieces registered so far, in kind order
    pub fn pieces(&self) -> Vec<(TrackElementKind, &'static PieceShape)> {
        let mut pieces: Vec<_> = self
            .functions
            .iter()
            .filter_map(|(kind, f)| match f {
                PaintFunction::Piece(shape) => Some((*kind, *shape)),
                PaintFunction::Remapped { .. } => None,
            })
            .collect();
        pieces.sort_by_key(|(kind, _)| *kind);
        pieces
    }

    #[tracing::instrument(skip(self), fields(ride = %self.ride))]
    pub fn build(self) -> Result<TrackPaintTable> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error.into());
        }
        let table = TrackPaintTable {
            ride: self.ride,
            functions: self.functions,
            sprites: self.sprites,
        };
        table.validate()?;
        tracing::info!(
            painters = table.functions.len(),
            sprite_entries = table.sprites.len(),
            sprites = table.sprites.sprite_count(),
            "built track paint table"
        );
        Ok(table)
    }
}

/// The kind to painter mapping of one ride, plus its sprite data. Build once and share.
#[derive(Debug)]
pub struct TrackPaintTable {
    ride: String,
    functions: FxHashMap<TrackElementKind, PaintFunction>,
    sprites: SpriteTable,
}
impl TrackPaintTable {
    pub fn ride(&self) -> &str {
        &self.ride
    }

    pub fn sprites(&self) -> &SpriteTable {
        &self.sprites
    }

    pub fn function(&self, kind: TrackElementKind) -> Option<&PaintFunction> {
        self.functions.get(&kind)
    }

    /// All kinds this ride can paint, in kind order
    pub fn supported_kinds(&self) -> Vec<TrackElementKind> {
        let mut kinds: Vec<_> = self.functions.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// The painter for `kind`, or None if this ride has no such piece. A missing painter
    /// means the element is simply not drawn.
    pub fn get(&self, kind: TrackElementKind) -> Option<TrackPainter<'_>> {
        self.functions
            .contains_key(&kind)
            .then_some(TrackPainter { table: self, kind })
    }

    /// Paints one tile, or does nothing if the kind is unsupported.
    pub fn paint<S: PaintSession + ?Sized>(
        &self,
        session: &mut S,
        element: &TrackElement,
        style: SupportStyle,
    ) {
        if let Some(painter) = self.get(element.kind) {
            painter.paint(session, element, style);
        }
    }

    /// Number of tiles an element of `kind` spans
    pub fn sequence_count(&self, kind: TrackElementKind) -> Option<u8> {
        self.sequence_count_inner(kind, 0)
    }

    fn sequence_count_inner(&self, kind: TrackElementKind, depth: usize) -> Option<u8> {
        if depth > MAX_REMAP_DEPTH {
            return None;
        }
        match self.functions.get(&kind)? {
            PaintFunction::Piece(shape) => Some(shape.sequence_count()),
            PaintFunction::Remapped { target, remap } => Some(
                remap.caller_sequence_count(self.sequence_count_inner(*target, depth + 1)?),
            ),
        }
    }

    /// Follows remaps down to a canonical piece. Returns None if the sequence falls
    /// outside the range of any kind along the way.
    pub fn resolve(&self, element: &TrackElement) -> Option<(TrackElement, &'static PieceShape)> {
        let mut element = *element;
        for _ in 0..=MAX_REMAP_DEPTH {
            match self.functions.get(&element.kind)? {
                PaintFunction::Piece(shape) => {
                    return ((element.sequence as usize) < shape.tiles.len())
                        .then_some((element, *shape));
                }
                PaintFunction::Remapped { target, remap } => {
                    let (direction, sequence) = remap.apply(element.direction, element.sequence)?;
                    element = element.retargeted(*target, direction, sequence);
                }
            }
        }
        None
    }

    fn validate(&self) -> Result<()> {
        for (&kind, function) in &self.functions {
            match function {
                PaintFunction::Piece(shape) => self.validate_piece(kind, shape)?,
                PaintFunction::Remapped { target, remap } => {
                    self.validate_remap(kind, *target, remap)?
                }
            }
        }
        Ok(())
    }

    fn validate_piece(&self, kind: TrackElementKind, shape: &PieceShape) -> Result<()> {
        ensure!(!shape.tiles.is_empty(), TrackPaintError::EmptyPiece(kind));
        ensure!(
            !shape.platform || self.sprites.has_platform(),
            TrackPaintError::MissingPlatform(kind)
        );
        for variant in shape.variants() {
            for direction in Direction::ALL {
                for (sequence, tile) in shape.tiles.iter().enumerate() {
                    if !tile.draws_in(direction) {
                        continue;
                    }
                    let key = SpriteKey {
                        kind,
                        variant,
                        direction,
                        sequence: sequence as u8,
                    };
                    ensure!(
                        self.sprites.contains(&key),
                        TrackPaintError::MissingSprites(key)
                    );
                }
            }
        }
        Ok(())
    }

    fn validate_remap(
        &self,
        kind: TrackElementKind,
        target: TrackElementKind,
        remap: &Remap,
    ) -> Result<()> {
        let mut seen = FxHashSet::default();
        seen.insert(kind);
        let mut next = target;
        loop {
            ensure!(seen.insert(next), TrackPaintError::RemapCycle(kind));
            match self.functions.get(&next) {
                None => return Err(TrackPaintError::MissingTarget(kind, next).into()),
                Some(PaintFunction::Piece(_)) => break,
                Some(PaintFunction::Remapped { target, .. }) => next = *target,
            }
        }

        // Total over the caller's range: every tile must land inside the target.
        let target_count = self
            .sequence_count(target)
            .ok_or(TrackPaintError::MissingTarget(kind, target))?;
        let count = remap.caller_sequence_count(target_count);
        for sequence in 0..count {
            for direction in Direction::ALL {
                let mapped = remap.apply(direction, sequence);
                let (_, target_sequence) = mapped.unwrap_or((direction, u8::MAX));
                ensure!(
                    target_sequence < target_count,
                    TrackPaintError::RemapOutOfRange {
                        kind,
                        sequence,
                        target,
                        target_sequence,
                        target_count,
                    }
                );
            }
        }
        Ok(())
    }
}

/// A ride's painter for one kind
#[derive(Clone, Copy)]
pub struct TrackPainter<'a> {
    table: &'a TrackPaintTable,
    kind: TrackElementKind,
}
impl<'a> TrackPainter<'a> {
    pub fn kind(&self) -> TrackElementKind {
        self.kind
    }

    /// Paints one tile of an element of this painter's kind. `element.kind` is ignored.
    ///
    /// A sequence outside the element's range is a track layout bug: it trips an
    /// assertion in debug builds and paints nothing in release builds.
    pub fn paint<S: PaintSession + ?Sized>(
        &self,
        session: &mut S,
        element: &TrackElement,
        style: SupportStyle,
    ) {
        let element = element.retargeted(self.kind, element.direction, element.sequence);
        match self.table.resolve(&element) {
            Some((resolved, shape)) => {
                paint_canonical_tile(session, shape, &self.table.sprites, &resolved, style);
            }
            None => {
                debug_assert!(
                    false,
                    "{} sequence {} is out of range for {}",
                    self.kind, element.sequence, self.table.ride
                );
                tracing::warn!(
                    kind = %self.kind,
                    sequence = element.sequence,
                    ride = %self.table.ride,
                    "track sequence out of range, not painting"
                );
            }
        }
    }
}
impl std::fmt::Debug for TrackPainter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackPainter")
            .field("ride", &self.table.ride)
            .field("kind", &self.kind)
            .finish()
    }
}
