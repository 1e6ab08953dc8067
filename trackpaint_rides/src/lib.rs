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

//! Track paint tables for individual ride types.
//!
//! Each ride lives behind its own crate feature and exposes a lazily built
//! [TrackPaintTable](trackpaint_core::TrackPaintTable) plus a `get_track_paint_function`
//! lookup.

pub use trackpaint_core;

/// Where the generated mine train sprites start in the atlas, unless configured otherwise
pub const DEFAULT_SPRITE_BASE: u32 = 20_060;

/// Settings loaded from the data directory
pub mod settings;

/// The Vekoma mine train
#[cfg(feature = "mine_train")]
pub mod mine_train;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
