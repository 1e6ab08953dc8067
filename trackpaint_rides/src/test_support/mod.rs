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

use rand::RngCore;
use std::path::{Path, PathBuf};

use trackpaint_core::{
    session::{PaintCall, RecordingSession, SupportStyle},
    TrackElement, TrackPaintTable,
};

static LOG_INIT: std::sync::Once = std::sync::Once::new();

/// Installs a log subscriber for the test process. Safe to call from every test.
pub fn init_logging() {
    LOG_INIT.call_once(|| {
        const DEFAULT_LOG_FILTER: &str = "info,trackpaint_core=warn,trackpaint_rides=warn";

        let env_value =
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        let env_value = if env_value.is_empty() {
            DEFAULT_LOG_FILTER.to_string()
        } else {
            env_value
        };

        // Another harness may have installed a subscriber already; that one wins.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::try_new(&env_value).unwrap())
            .with_test_writer()
            .try_init();
    });
}

/// A scratch directory under the system temp dir, removed on drop
pub struct TempDir(PathBuf);
impl TempDir {
    pub fn new() -> TempDir {
        let path =
            std::env::temp_dir().join(format!("trackpaint-{}", rand::thread_rng().next_u64()));
        std::fs::create_dir_all(&path).unwrap();
        TempDir(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}
impl Default for TempDir {
    fn default() -> Self {
        Self::new()
    }
}
impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

/// Paints one tile into a fresh session and returns the call log
pub fn paint_calls(table: &TrackPaintTable, element: &TrackElement) -> Vec<PaintCall> {
    let mut session = RecordingSession::new();
    table.paint(&mut session, element, SupportStyle::default());
    session.into_calls()
}
