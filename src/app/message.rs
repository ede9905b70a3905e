// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::media::Snapshot;
use crate::ui::{camera_panel, mode_tabs, snapshot_panel, step_card, troubleshooting};
use std::path::PathBuf;

/// Launch options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Language override (`--lang`), checked before config and OS locale.
    pub lang: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    ModeTabs(mode_tabs::Message),
    StepCard(step_card::Message),
    Camera(camera_panel::Message),
    Snapshot(snapshot_panel::Message),
    Troubleshooting(troubleshooting::Message),
    /// Result from the snapshot save dialog; `path` is `None` on cancel.
    SnapshotSaveDialogResult {
        path: Option<PathBuf>,
        snapshot: Snapshot,
    },
}
