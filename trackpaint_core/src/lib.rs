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

//! The track element model and paint contract shared by every ride.
//!
//! A ride describes each of its canonical pieces as a [piece::PieceShape] plus sprite
//! data, and reaches every other piece through a [remap::Remap]. The
//! [dispatch::TrackPaintTable] then turns a [track_element::TrackElement] into calls
//! on a [session::PaintSession].

/// Map directions and rotation arithmetic
pub mod direction;
/// Kind to painter lookup, remap resolution and table validation
pub mod dispatch;
pub mod painter;
/// Canonical piece descriptions
pub mod piece;
pub mod remap;
/// The nine occupancy segments of a tile
pub mod segments;
/// The drawing surface painters emit into
pub mod session;
pub mod slope;
/// Sprite emission data, keyed by kind, variant, direction and sequence
pub mod sprites;
pub mod track_element;

pub use dispatch::{TrackPaintTable, TrackPainter};
pub use session::PaintSession;
pub use track_element::{TrackElement, TrackElementKind};
